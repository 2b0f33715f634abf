//! Maintenance request board.

use crate::state::App;
use crate::theme::{maintenance_status_color, priority_color};
use crate::views::helpers::{list_state, two_column, with_filter_bar};
use crate::widgets::{DetailPanel, FilterBar, FilterOption};
use estate_core::MaintenanceFilter;
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
        MaintenanceFilter::options().iter().map(MaintenanceFilter::label),
        &app.store.maintenance_filter().label(),
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
    let requests = app.store.filtered_maintenance_requests();

    let items: Vec<ListItem> = requests
        .iter()
        .map(|request| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", request.priority),
                    Style::default().fg(priority_color(request.priority, &app.theme)),
                ),
                Span::raw(format!(
                    "{} {} - {}  ",
                    request.property_name, request.unit, request.description
                )),
                Span::styled(
                    request.status.to_string(),
                    Style::default().fg(maintenance_status_color(request.status, &app.theme)),
                ),
            ]))
        })
        .collect();

    let mut state = list_state(requests.iter().map(|r| r.id), app.selection.request);
    let title = format!(
        "Requests ({})  [n] new  [o/i/c] status  [v] vendor",
        requests.len()
    );
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(request) = app.selected_request() {
        fields.push(("Request", format!("#{}", request.id)));
        fields.push(("Property", request.property_name.clone()));
        fields.push(("Unit", request.unit.clone()));
        fields.push(("Description", request.description.clone()));
        fields.push(("Priority", request.priority.to_string()));
        fields.push(("Status", request.status.to_string()));
        fields.push((
            "Vendor",
            request
                .vendor
                .clone()
                .unwrap_or_else(|| "Unassigned".to_string()),
        ));
    }

    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
        placeholder: "No request selected",
    }
    .render(f, detail_area);
}
