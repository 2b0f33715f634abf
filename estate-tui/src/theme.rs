//! Ledger theme and color utilities.

use estate_core::{MaintenanceStatus, NotificationLevel, Priority, PropertyStatus, RentStatus};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct LedgerTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl LedgerTheme {
    pub fn ledger() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            bg_highlight: Color::Rgb(243, 244, 246),
            primary: Color::Rgb(147, 51, 234),
            primary_dim: Color::Rgb(192, 132, 252),
            secondary: Color::Rgb(75, 85, 99),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
            info: Color::Rgb(37, 99, 235),
            text: Color::Rgb(31, 41, 55),
            text_dim: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            border_focus: Color::Rgb(147, 51, 234),
        }
    }
}

pub fn property_status_color(status: PropertyStatus, theme: &LedgerTheme) -> Color {
    match status {
        PropertyStatus::Occupied => theme.success,
        PropertyStatus::Vacant => theme.warning,
        PropertyStatus::Maintenance => theme.error,
    }
}

pub fn rent_status_color(status: RentStatus, theme: &LedgerTheme) -> Color {
    match status {
        RentStatus::Paid => theme.success,
        RentStatus::Overdue => theme.error,
        RentStatus::Vacant => theme.text_dim,
    }
}

pub fn maintenance_status_color(status: MaintenanceStatus, theme: &LedgerTheme) -> Color {
    match status {
        MaintenanceStatus::Open => theme.warning,
        MaintenanceStatus::InProgress => theme.info,
        MaintenanceStatus::Completed => theme.success,
    }
}

pub fn priority_color(priority: Priority, theme: &LedgerTheme) -> Color {
    match priority {
        Priority::Low => theme.text_dim,
        Priority::Medium => theme.warning,
        Priority::High => theme.error,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &LedgerTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Success => theme.success,
        NotificationLevel::Error => theme.error,
    }
}

/// Higher occupancy is better, so low percentages are the warning case.
pub fn occupancy_color(percent: f64, theme: &LedgerTheme) -> Color {
    if percent >= 90.0 {
        theme.success
    } else if percent >= 70.0 {
        theme.warning
    } else {
        theme.error
    }
}
