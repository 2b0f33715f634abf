//! Application state for the terminal dashboard.
//!
//! `App` owns the `PropertyStore` for the session and translates key
//! actions into store commands. Notifications returned by commands are
//! kept in `notifications`; the footer shows the latest one as a toast.

use crate::config::TuiConfig;
use crate::form::{FormEditor, FormKind};
use crate::keys::{map_key, Action};
use crate::theme::LedgerTheme;
use chrono::{Duration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use estate_core::{
    HasId, MaintenanceFilter, MaintenanceRequest, Notification, Property, PropertyStore, Section,
    Tenant, Unit, UnitFilter,
};
use tracing::debug;

/// How long a notification stays in the footer.
pub const TOAST_SECONDS: i64 = 4;

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// Highlighted row per section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub property: Option<u32>,
    pub unit: Option<u32>,
    pub tenant: Option<u32>,
    pub request: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct App {
    pub config: TuiConfig,
    pub theme: LedgerTheme,
    pub store: PropertyStore,
    pub selection: Selection,
    pub form: Option<FormEditor>,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let mut store = if config.seed_demo_data {
            PropertyStore::seeded()
        } else {
            PropertyStore::new()
        };
        store.set_active_section(config.initial_section());
        Self {
            config,
            theme: LedgerTheme::ledger(),
            store,
            selection: Selection::default(),
            form: None,
            notifications: Vec::new(),
            modal: None,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Latest notification while it is still fresh.
    pub fn active_toast(&self) -> Option<&Notification> {
        self.notifications
            .last()
            .filter(|n| Utc::now() - n.created_at < Duration::seconds(TOAST_SECONDS))
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.modal.is_some() {
            self.modal = None;
            return false;
        }
        if self.form.is_some() {
            self.handle_form_key(key);
            return false;
        }
        match map_key(key) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(mut editor) = self.form.take() else {
            return;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            editor.cancel(&mut self.store);
            return;
        }
        match key.code {
            KeyCode::Esc => {
                editor.cancel(&mut self.store);
                return;
            }
            KeyCode::Enter => {
                let note = editor.submit(&mut self.store);
                let succeeded = !note.is_error();
                self.notify(note);
                if succeeded {
                    if editor.kind == FormKind::AddRequest {
                        return;
                    }
                    if !editor.is_open(&self.store) {
                        return;
                    }
                }
            }
            KeyCode::Tab | KeyCode::Down => editor.next_field(&self.store),
            KeyCode::BackTab | KeyCode::Up => editor.previous_field(&self.store),
            KeyCode::Right => editor.cycle_choice(&mut self.store, true),
            KeyCode::Left => editor.cycle_choice(&mut self.store, false),
            KeyCode::Backspace => editor.backspace(&mut self.store),
            KeyCode::Char(c) => editor.input_char(&mut self.store, c),
            _ => {}
        }
        self.form = Some(editor);
    }

    /// Apply a non-form action. Returns true on quit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, section = %self.store.active_section(), "Dispatching action");
        match action {
            Action::Quit => return true,
            Action::NextView => {
                let next = self.store.active_section().next();
                self.store.set_active_section(next);
            }
            Action::PrevView => {
                let prev = self.store.active_section().previous();
                self.store.set_active_section(prev);
            }
            Action::SwitchView(index) => {
                if let Some(section) = Section::from_index(index) {
                    self.store.set_active_section(section);
                }
            }
            Action::MoveDown => self.select_next(),
            Action::MoveUp => self.select_previous(),
            Action::NewItem => self.open_new_form(),
            Action::EditItem => self.open_edit_form(),
            Action::ToggleArchive => {
                if self.store.active_section() == Section::Units {
                    if let Some(id) = self.selection.unit {
                        if let Some(note) = self.store.toggle_unit_archive(id) {
                            self.notify(note);
                        }
                    }
                }
            }
            Action::NextFilter => self.cycle_filter(true),
            Action::PrevFilter => self.cycle_filter(false),
            Action::SetStatus(status) => {
                if self.store.active_section() == Section::Maintenance {
                    if let Some(id) = self.selection.request {
                        if let Some(note) = self.store.update_maintenance_status(id, status) {
                            self.notify(note);
                        }
                    }
                }
            }
            Action::CycleVendor => self.cycle_vendor(),
            Action::OpenHelp => {
                self.modal = Some(Modal {
                    title: "Keybindings".to_string(),
                    message: HELP_TEXT.to_string(),
                })
            }
            Action::Cancel => self.modal = None,
        }
        false
    }

    fn open_new_form(&mut self) {
        match self.store.active_section() {
            Section::Units => {
                self.store.open_add_unit_form();
                self.form = Some(FormEditor::new(FormKind::AddUnit));
            }
            Section::Maintenance => {
                self.form = Some(FormEditor::new(FormKind::AddRequest));
            }
            Section::Dashboard | Section::Tenants => {}
        }
    }

    fn open_edit_form(&mut self) {
        if self.store.active_section() != Section::Units {
            return;
        }
        if let Some(id) = self.selection.unit {
            self.store.open_edit_unit_form(id);
            if self.store.is_edit_unit_form_open() {
                self.form = Some(FormEditor::new(FormKind::EditUnit));
            }
        }
    }

    fn cycle_filter(&mut self, forward: bool) {
        match self.store.active_section() {
            Section::Units => {
                let next = cycle(&UnitFilter::options(), self.store.unit_filter(), forward);
                self.store.set_unit_filter(next);
            }
            Section::Maintenance => {
                let next = cycle(
                    &MaintenanceFilter::options(),
                    self.store.maintenance_filter(),
                    forward,
                );
                self.store.set_maintenance_filter(next);
            }
            Section::Dashboard | Section::Tenants => {}
        }
    }

    fn cycle_vendor(&mut self) {
        if self.store.active_section() != Section::Maintenance {
            return;
        }
        let Some(request) = self.selected_request() else {
            return;
        };
        let vendors = self.store.available_vendors();
        if vendors.is_empty() {
            return;
        }
        let next = match &request.vendor {
            Some(current) => vendors
                .iter()
                .position(|v| v == current)
                .map_or(0, |i| (i + 1) % vendors.len()),
            None => 0,
        };
        let (id, vendor) = (request.id, vendors[next].clone());
        if let Some(note) = self.store.update_maintenance_vendor(id, &vendor) {
            self.notify(note);
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn select_next(&mut self) {
        match self.store.active_section() {
            Section::Dashboard => {
                select_next_id(&ids(self.store.properties()), &mut self.selection.property)
            }
            Section::Units => {
                select_next_id(&ids(self.store.filtered_units()), &mut self.selection.unit)
            }
            Section::Tenants => {
                select_next_id(&ids(self.store.tenants()), &mut self.selection.tenant)
            }
            Section::Maintenance => select_next_id(
                &ids(self.store.filtered_maintenance_requests()),
                &mut self.selection.request,
            ),
        }
    }

    pub fn select_previous(&mut self) {
        match self.store.active_section() {
            Section::Dashboard => {
                select_prev_id(&ids(self.store.properties()), &mut self.selection.property)
            }
            Section::Units => {
                select_prev_id(&ids(self.store.filtered_units()), &mut self.selection.unit)
            }
            Section::Tenants => {
                select_prev_id(&ids(self.store.tenants()), &mut self.selection.tenant)
            }
            Section::Maintenance => select_prev_id(
                &ids(self.store.filtered_maintenance_requests()),
                &mut self.selection.request,
            ),
        }
    }

    pub fn selected_property(&self) -> Option<&Property> {
        let id = self.selection.property?;
        self.store.properties().iter().find(|p| p.id == id)
    }

    /// Only units visible under the current filter count as selected.
    pub fn selected_unit(&self) -> Option<&Unit> {
        let id = self.selection.unit?;
        self.store.filtered_units().into_iter().find(|u| u.id == id)
    }

    pub fn selected_tenant(&self) -> Option<&Tenant> {
        let id = self.selection.tenant?;
        self.store.tenants().iter().find(|t| t.id == id)
    }

    pub fn selected_request(&self) -> Option<&MaintenanceRequest> {
        let id = self.selection.request?;
        self.store
            .filtered_maintenance_requests()
            .into_iter()
            .find(|r| r.id == id)
    }
}

const HELP_TEXT: &str = "Tab/1-4 switch section, j/k move, f/F cycle filter, n new, \
e edit unit, a archive/restore unit, o/i/c set request status, v cycle vendor, q quit. \
In forms: Tab/arrows move, left/right pick options, Enter saves, Esc cancels.";

fn ids<I>(items: I) -> Vec<u32>
where
    I: IntoIterator,
    I::Item: HasIdRef,
{
    items.into_iter().map(|item| item.item_id()).collect()
}

/// Id access for borrowed items from slices and filtered views.
trait HasIdRef {
    fn item_id(&self) -> u32;
}

impl<T: HasId> HasIdRef for &T {
    fn item_id(&self) -> u32 {
        (*self).id()
    }
}

fn cycle<T: Clone + PartialEq>(options: &[T], current: &T, forward: bool) -> T {
    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(0) => len - 1,
        Some(i) => i - 1,
    };
    options[next].clone()
}

fn select_next_id(items: &[u32], selected: &mut Option<u32>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .and_then(|id| items.iter().position(|item| *item == id))
        .unwrap_or(usize::MAX);
    let next = if index == usize::MAX {
        0
    } else {
        (index + 1) % items.len()
    };
    *selected = Some(items[next]);
}

fn select_prev_id(items: &[u32], selected: &mut Option<u32>) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .and_then(|id| items.iter().position(|item| *item == id))
        .unwrap_or(0);
    let prev = if index == 0 {
        items.len() - 1
    } else {
        index - 1
    };
    *selected = Some(items[prev]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use estate_core::{MaintenanceStatus, NotificationLevel, RentStatus};

    fn test_config() -> TuiConfig {
        TuiConfig {
            tick_rate_ms: 250,
            seed_demo_data: true,
            initial_section: "units".to_string(),
            log_path: "tmp/estate-tui.log".into(),
            log_filter: "info".to_string(),
            theme: ThemeConfig {
                name: "ledger".to_string(),
            },
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    // ========================================================================
    // Selection helpers
    // ========================================================================

    #[test]
    fn test_select_next_empty_list() {
        let mut selected = Some(3);
        select_next_id(&[], &mut selected);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_select_next_no_selection_starts_at_first() {
        let mut selected = None;
        select_next_id(&[4, 5, 6], &mut selected);
        assert_eq!(selected, Some(4));
    }

    #[test]
    fn test_select_next_wraps_around() {
        let mut selected = Some(6);
        select_next_id(&[4, 5, 6], &mut selected);
        assert_eq!(selected, Some(4));
    }

    #[test]
    fn test_select_prev_wraps_around() {
        let mut selected = Some(4);
        select_prev_id(&[4, 5, 6], &mut selected);
        assert_eq!(selected, Some(6));
    }

    // ========================================================================
    // App behaviour
    // ========================================================================

    #[test]
    fn test_new_app_uses_initial_section() {
        let app = App::new(test_config());
        assert_eq!(app.store.active_section(), Section::Units);
        assert_eq!(app.store.units().len(), 3);
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(test_config());
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_switch_sections() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.store.active_section(), Section::Maintenance);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.store.active_section(), Section::Dashboard);
    }

    #[test]
    fn test_cycle_unit_filter() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.store.unit_filter(), &UnitFilter::Status(RentStatus::Paid));
        app.handle_key(key(KeyCode::Char('F')));
        app.handle_key(key(KeyCode::Char('F')));
        assert_eq!(app.store.unit_filter(), &UnitFilter::Archived);
    }

    #[test]
    fn test_add_unit_through_keys() {
        let mut app = App::new(test_config());

        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.store.is_add_unit_form_open());
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "D4");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "1900");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.form.is_none());
        let unit = app.store.units().last().unwrap();
        assert_eq!(unit.id, 4);
        assert_eq!(unit.unit_number, "D4");
        assert_eq!(
            app.notifications.last().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[test]
    fn test_failed_submit_keeps_form_open() {
        let mut app = App::new(test_config());

        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.form.is_some());
        assert!(app.notifications.last().unwrap().is_error());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.form.is_none());
        assert!(!app.store.is_add_unit_form_open());
    }

    #[test]
    fn test_archive_selected_unit() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.selection.unit, Some(1));

        app.handle_key(key(KeyCode::Char('a')));

        assert!(app.store.unit(1).unwrap().archived);
        assert!(app.selected_unit().is_none());
        assert!(app.notifications.last().unwrap().message.contains("archived"));
    }

    #[test]
    fn test_edit_selected_unit() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.form.as_ref().map(|f| f.kind), Some(FormKind::EditUnit));

        // focus rent field and replace the value
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Backspace));
        }
        type_text(&mut app, "1700");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.form.is_none());
        assert_eq!(app.store.unit(1).unwrap().rent_amount, 1700);
    }

    #[test]
    fn test_request_status_and_vendor_keys() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('i')));

        let request = app.store.maintenance_request(1).unwrap();
        assert_eq!(request.status, MaintenanceStatus::InProgress);

        app.handle_key(key(KeyCode::Char('v')));
        let request = app.store.maintenance_request(1).unwrap();
        assert_eq!(request.vendor.as_deref(), Some("ACME HVAC Services"));
    }

    #[test]
    fn test_add_request_closes_form_on_success() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Down));
        type_text(&mut app, "#9");
        app.handle_key(key(KeyCode::Down));
        type_text(&mut app, "Door sticks");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.form.is_none());
        assert_eq!(app.store.maintenance_requests().len(), 3);
        assert_eq!(app.store.upcoming_maintenance(), 3);
    }

    #[test]
    fn test_help_modal_closes_on_any_key() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.modal.is_some());
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.modal.is_none());
    }
}
