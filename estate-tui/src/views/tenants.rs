//! Tenant directory view.

use crate::state::App;
use crate::views::helpers::{list_state, two_column};
use crate::widgets::DetailPanel;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (list_area, detail_area) = two_column(area, 60);
    let tenants = app.store.tenants();

    let items: Vec<ListItem> = tenants
        .iter()
        .map(|tenant| {
            ListItem::new(format!(
                "{} ({} · {})",
                tenant.name, tenant.property_name, tenant.unit_number
            ))
        })
        .collect();

    let mut state = list_state(tenants.iter().map(|t| t.id), app.selection.tenant);
    let list = List::new(items)
        .block(Block::default().title("Tenants").borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut fields = Vec::new();
    if let Some(tenant) = app.selected_tenant() {
        fields.push(("Name", tenant.name.clone()));
        fields.push(("Email", tenant.email.clone()));
        fields.push(("Phone", tenant.phone.clone()));
        fields.push(("Property", tenant.property_name.clone()));
        fields.push(("Unit", tenant.unit_number.clone()));
        fields.push(("Lease", tenant.lease_document_url.clone()));
    }

    DetailPanel {
        title: "Details",
        fields,
        style: Style::default().fg(app.theme.secondary),
        placeholder: "No tenant selected",
    }
    .render(f, detail_area);
}
