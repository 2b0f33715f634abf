//! Modal rendering for the add/edit forms.

use crate::form::{FieldKind, FormEditor};
use crate::state::App;
use crate::views::helpers::centered_rect;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, editor: &FormEditor) {
    let area = centered_rect(60, 50, f.size());

    let lines: Vec<Line> = editor
        .fields(&app.store)
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let focused = i == editor.focus;
            let value = editor.value(&app.store, field.name);
            let shown = match field.kind {
                FieldKind::Text if focused => format!("{}_", value),
                FieldKind::Text => value.to_string(),
                FieldKind::Choice(_) if value.is_empty() => "‹ none ›".to_string(),
                FieldKind::Choice(_) => format!("‹ {} ›", value),
            };
            let label_style = if focused {
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.secondary)
            };
            let marker = if focused { "> " } else { "  " };
            Line::from(vec![
                Span::styled(format!("{}{:<12}", marker, field.label), label_style),
                Span::raw(shown),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(editor.kind.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
