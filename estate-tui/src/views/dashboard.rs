//! Dashboard: headline numbers and the property portfolio.

use crate::state::App;
use crate::theme::{occupancy_color, property_status_color};
use crate::views::helpers::{list_state, two_column};
use crate::widgets::{DetailPanel, ProgressBar, StatCard};
use estate_core::DashboardTotals;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let totals = DashboardTotals::from_store(&app.store);
    render_stats(f, app, &totals, rows[0]);

    ProgressBar {
        title: format!(
            "Portfolio Occupancy ({}/{} units)",
            totals.occupied_units, totals.total_units
        ),
        value: totals.occupied_units as f64,
        max: totals.total_units as f64,
        style: Style::default().fg(occupancy_color(totals.occupancy_rate, &app.theme)),
    }
    .render(f, rows[1]);

    render_properties(f, app, rows[2]);
}

fn render_stats(f: &mut Frame<'_>, app: &App, totals: &DashboardTotals, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let stats = [
        (
            "Occupancy Rate",
            format!("{:.1}%", totals.occupancy_rate),
            occupancy_color(totals.occupancy_rate, &app.theme),
        ),
        (
            "Monthly Income",
            format!("${}", totals.monthly_income),
            app.theme.success,
        ),
        (
            "Vacant Units",
            totals.vacant_units.to_string(),
            app.theme.text,
        ),
        (
            "Open Maintenance",
            totals.upcoming_maintenance.to_string(),
            app.theme.warning,
        ),
    ];

    for ((title, value, color), card_area) in stats.into_iter().zip(cards.iter()) {
        StatCard {
            title: title.to_string(),
            value,
            style: Style::default().fg(color),
        }
        .render(f, *card_area);
    }
}

fn render_properties(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (list_area, detail_area) = two_column(area, 60);
    let properties = app.store.properties();

    let items: Vec<ListItem> = properties
        .iter()
        .map(|property| {
            let status_style =
                Style::default().fg(property_status_color(property.status, &app.theme));
            ListItem::new(Line::from(vec![
                Span::raw(format!(
                    "{}  {}/{}  ",
                    property.name,
                    property.occupancy.occupied(),
                    property.occupancy.total()
                )),
                Span::styled(property.status.to_string(), status_style),
            ]))
        })
        .collect();

    let mut state = list_state(properties.iter().map(|p| p.id), app.selection.property);
    let list = List::new(items)
        .block(Block::default().title("Properties").borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let Some(property) = app.selected_property() else {
        DetailPanel {
            title: "Details",
            fields: Vec::new(),
            style: Style::default().fg(app.theme.secondary),
            placeholder: "Select a property with j/k",
        }
        .render(f, detail_area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(detail_area);

    DetailPanel {
        title: "Details",
        fields: vec![
            ("Name", property.name.clone()),
            ("Address", property.address.clone()),
            ("Status", property.status.to_string()),
            ("Occupied", property.occupancy.occupied().to_string()),
            ("Vacant", property.occupancy.vacant().to_string()),
            ("Total", property.occupancy.total().to_string()),
        ],
        style: Style::default().fg(app.theme.secondary),
        placeholder: "",
    }
    .render(f, chunks[0]);

    ProgressBar {
        title: "Occupancy".to_string(),
        value: f64::from(property.occupancy.occupied()),
        max: f64::from(property.occupancy.total()),
        style: Style::default().fg(occupancy_color(property.occupancy.rate(), &app.theme)),
    }
    .render(f, chunks[1]);
}
