//! Keybinding definitions for the TUI.
//!
//! These bindings apply while no form is open; form editing reads raw keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use estate_core::MaintenanceStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    NewItem,
    EditItem,
    ToggleArchive,
    NextFilter,
    PrevFilter,
    SetStatus(MaintenanceStatus),
    CycleVendor,
    OpenHelp,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('n') => Some(Action::NewItem),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditItem),
        KeyCode::Char('a') => Some(Action::ToggleArchive),
        KeyCode::Char('f') | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextFilter),
        KeyCode::Char('F') | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevFilter),
        KeyCode::Char('o') => Some(Action::SetStatus(MaintenanceStatus::Open)),
        KeyCode::Char('i') => Some(Action::SetStatus(MaintenanceStatus::InProgress)),
        KeyCode::Char('c') => Some(Action::SetStatus(MaintenanceStatus::Completed)),
        KeyCode::Char('v') => Some(Action::CycleVendor),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char(c @ '1'..='4') => Some(Action::SwitchView(c as usize - '1' as usize)),
        _ => None,
    }
}
