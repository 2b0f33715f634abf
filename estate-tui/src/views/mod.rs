//! View rendering dispatch.

pub mod dashboard;
pub mod form;
pub mod helpers;
pub mod maintenance;
pub mod tenants;
pub mod units;

use crate::state::App;
use crate::theme::notification_color;
use estate_core::{NotificationLevel, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.store.active_section() {
        Section::Dashboard => dashboard::render(f, app, layout[1]),
        Section::Units => units::render(f, app, layout[1]),
        Section::Tenants => tenants::render(f, app, layout[1]),
        Section::Maintenance => maintenance::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(editor) = &app.form {
        form::render(f, app, editor);
    }
    if app.modal.is_some() {
        render_modal(f, app);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line> = Section::all()
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!("{} {}", i + 1, section.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.store.active_section().index())
        .block(Block::default().borders(Borders::ALL).title("PropManage"))
        .style(Style::default().fg(app.theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = if app.form.is_some() {
        "Tab/↑↓ field • ←/→ choose • Enter save • Esc cancel"
    } else {
        "Tab switch section • j/k move • f filter • n new • e edit • ? help • q quit"
    };
    let (text, style) = if let Some(note) = app.active_toast() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Success => "SUCCESS",
            NotificationLevel::Error => "ERROR",
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };
    let area = helpers::centered_rect(60, 30, f.size());
    let paragraph = Paragraph::new(modal.message.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(modal.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
