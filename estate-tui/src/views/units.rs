//! Units view.

use crate::state::App;
use crate::theme::rent_status_color;
use crate::views::helpers::{list_state, two_column, with_filter_bar};
use crate::widgets::{DetailPanel, FilterBar, FilterOption};
use estate_core::UnitFilter;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (filter_area, body) = with_filter_bar(area);

    let filters = FilterOption::from_labels(
        UnitFilter::options().iter().map(UnitFilter::label),
        &app.store.unit_filter().label(),
    );
    FilterBar {
        title: "Filter [f/F]",
        filters: &filters,
        active_style: Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        inactive_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, filter_area);

    let (list_area, detail_area) = two_column(body, 60);
    let units = app.store.filtered_units();

    let items: Vec<ListItem> = units
        .iter()
        .map(|unit| {
            let status_style = Style::default().fg(rent_status_color(unit.rent_status, &app.theme));
            let tenant = unit.tenant_name.as_deref().unwrap_or("No tenant");
            let mut spans = vec![
                Span::raw(format!(
                    "{} · {}  ${}  {}  ",
                    unit.property_name, unit.unit_number, unit.rent_amount, tenant
                )),
                Span::styled(unit.rent_status.to_string(), status_style),
            ];
            if unit.archived {
                spans.push(Span::styled(
                    "  Archived",
                    Style::default().fg(app.theme.text_dim),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut state = list_state(units.iter().map(|u| u.id), app.selection.unit);
    let title = format!("Units ({})  [n] add  [e] edit  [a] archive", units.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(unit) = app.selected_unit() {
        fields.push(("Unit ID", unit.id.to_string()));
        fields.push(("Property", unit.property_name.clone()));
        fields.push(("Unit #", unit.unit_number.clone()));
        fields.push(("Rent", format!("${}", unit.rent_amount)));
        fields.push((
            "Tenant",
            unit.tenant_name.clone().unwrap_or_else(|| "-".to_string()),
        ));
        fields.push(("Rent Status", unit.rent_status.to_string()));
        fields.push((
            "Lease End",
            unit.lease_end.clone().unwrap_or_else(|| "-".to_string()),
        ));
        fields.push((
            "Archived",
            if unit.archived { "yes" } else { "no" }.to_string(),
        ));
    }

    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
        placeholder: "No unit selected",
    }
    .render(f, detail_area);
}
