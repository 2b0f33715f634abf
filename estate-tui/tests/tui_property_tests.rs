use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use estate_core::{MaintenanceStatus, Priority, RentStatus, Section};
use estate_tui::config::{ConfigError, ThemeConfig, TuiConfig};
use estate_tui::keys::{map_key, Action};
use estate_tui::state::App;
use estate_tui::theme::{
    maintenance_status_color, occupancy_color, priority_color, rent_status_color, LedgerTheme,
};
use proptest::prelude::*;
use std::io::Write;

fn base_config() -> TuiConfig {
    TuiConfig {
        tick_rate_ms: 250,
        seed_demo_data: true,
        initial_section: "dashboard".to_string(),
        log_path: "tmp/estate-tui.log".into(),
        log_filter: "info".to_string(),
        theme: ThemeConfig {
            name: "ledger".to_string(),
        },
    }
}

const SAMPLE_TOML: &str = r#"
tick_rate_ms = 200
seed_demo_data = true
initial_section = "units"
log_path = "tmp/estate-tui.log"
log_filter = "estate_core=debug,info"

[theme]
name = "ledger"
"#;

#[test]
fn config_requires_positive_tick_rate() {
    let mut config = base_config();
    config.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_known_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_unknown_section() {
    let mut config = base_config();
    config.initial_section = "reports".to_string();
    match config.validate() {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "initial_section"),
        other => panic!("expected invalid initial_section, got {:?}", other),
    }
}

#[test]
fn config_rejects_empty_log_filter() {
    let mut config = base_config();
    config.log_filter = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_parses_from_toml() {
    let config = TuiConfig::from_toml(SAMPLE_TOML).expect("sample config parses");
    assert!(config.validate().is_ok());
    assert_eq!(config.tick_rate_ms, 200);
    assert_eq!(config.initial_section(), Section::Units);
}

#[test]
fn config_rejects_unknown_fields() {
    let toml = format!("{}\nextra = 1\n", SAMPLE_TOML.trim_end());
    let err = TuiConfig::from_toml(&toml).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_TOML.as_bytes()).expect("write config");
    let config = TuiConfig::from_path(file.path()).expect("config loads");
    assert_eq!(config.log_filter, "estate_core=debug,info");
}

#[test]
fn config_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = TuiConfig::from_path(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn app_without_demo_data_starts_empty() {
    let mut config = base_config();
    config.seed_demo_data = false;
    let app = App::new(config);
    assert!(app.store.units().is_empty());
    assert_eq!(app.store.total_units(), 0);
}

#[test]
fn tab_switches_views() {
    let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(map_key(event), Some(Action::NextView));
}

#[test]
fn ctrl_c_quits() {
    let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(event), Some(Action::Quit));
}

proptest! {
    #[test]
    fn keybinding_digit_switches_view(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let event = KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        let action = map_key(event);
        let expected_index = match ch {
            '1' => Some(0),
            '2' => Some(1),
            '3' => Some(2),
            '4' => Some(3),
            _ => None,
        };
        if let Some(index) = expected_index {
            prop_assert!(matches!(action, Some(Action::SwitchView(i)) if i == index));
            prop_assert!(Section::from_index(index).is_some());
        } else {
            prop_assert!(action.is_none());
        }
    }

    #[test]
    fn navigation_keys_consistent(use_vim in prop::bool::ANY) {
        let key = if use_vim {
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)
        } else {
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
        };
        prop_assert_eq!(map_key(key), Some(Action::MoveDown));
    }

    #[test]
    fn all_action_keys_mapped(key_char in "[qneafFoicv?]") {
        let ch = key_char.chars().next().unwrap_or('q');
        let event = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
        prop_assert!(map_key(event).is_some(), "Key '{}' should map to an action", ch);
    }

    #[test]
    fn tick_rate_validation(tick in 1u64..10_000) {
        let mut config = base_config();
        config.tick_rate_ms = tick;
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn section_names_accepted_case_insensitively(
        name in prop::sample::select(vec!["dashboard", "Units", "TENANTS", "Maintenance"])
    ) {
        let mut config = base_config();
        config.initial_section = name.to_string();
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn rent_status_colors_correct(idx in 0usize..3) {
        let theme = LedgerTheme::ledger();
        let statuses = [RentStatus::Paid, RentStatus::Overdue, RentStatus::Vacant];
        let expected = [theme.success, theme.error, theme.text_dim];
        prop_assert_eq!(rent_status_color(statuses[idx], &theme), expected[idx]);
    }

    #[test]
    fn maintenance_status_colors_correct(idx in 0usize..3) {
        let theme = LedgerTheme::ledger();
        let statuses = [
            MaintenanceStatus::Open,
            MaintenanceStatus::InProgress,
            MaintenanceStatus::Completed,
        ];
        let expected = [theme.warning, theme.info, theme.success];
        prop_assert_eq!(maintenance_status_color(statuses[idx], &theme), expected[idx]);
    }

    #[test]
    fn priority_colors_correct(idx in 0usize..3) {
        let theme = LedgerTheme::ledger();
        let priorities = [Priority::Low, Priority::Medium, Priority::High];
        let expected = [theme.text_dim, theme.warning, theme.error];
        prop_assert_eq!(priority_color(priorities[idx], &theme), expected[idx]);
    }

    #[test]
    fn occupancy_color_thresholds(percent in 0.0f64..=100.0f64) {
        let theme = LedgerTheme::ledger();
        let color = occupancy_color(percent, &theme);
        let expected = if percent >= 90.0 {
            theme.success
        } else if percent >= 70.0 {
            theme.warning
        } else {
            theme.error
        };
        prop_assert_eq!(color, expected);
    }
}
