//! Enum types for Estate entities and UI selection state

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ENTITY ENUMS
// ============================================================================

/// Overall status badge shown on a property card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Occupied,
    Vacant,
    Maintenance,
}

/// Rent collection status of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RentStatus {
    Paid,
    Overdue,
    #[default]
    Vacant,
}

impl RentStatus {
    pub fn all() -> &'static [RentStatus] {
        &[RentStatus::Paid, RentStatus::Overdue, RentStatus::Vacant]
    }
}

/// Urgency of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }
}

/// Workflow status of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MaintenanceStatus {
    /// New requests always start here.
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    pub fn all() -> &'static [MaintenanceStatus] {
        &[
            MaintenanceStatus::Open,
            MaintenanceStatus::InProgress,
            MaintenanceStatus::Completed,
        ]
    }
}

// ============================================================================
// UI SELECTION ENUMS
// ============================================================================

/// Top-level dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Units,
    Tenants,
    Maintenance,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Units => "Units",
            Section::Tenants => "Tenants",
            Section::Maintenance => "Maintenance",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Units,
            Section::Tenants,
            Section::Maintenance,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Section {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Section {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}

/// Filter applied to the units list.
///
/// Built from any string; anything other than an exact filter label
/// becomes `Unmatched` and selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitFilter {
    #[default]
    All,
    Archived,
    Status(RentStatus),
    Unmatched(String),
}

impl UnitFilter {
    /// Filter bar order.
    pub fn options() -> Vec<UnitFilter> {
        vec![
            UnitFilter::All,
            UnitFilter::Status(RentStatus::Paid),
            UnitFilter::Status(RentStatus::Overdue),
            UnitFilter::Status(RentStatus::Vacant),
            UnitFilter::Archived,
        ]
    }

    pub fn label(&self) -> String {
        match self {
            UnitFilter::All => "All".to_string(),
            UnitFilter::Archived => "Archived".to_string(),
            UnitFilter::Status(status) => status.to_string(),
            UnitFilter::Unmatched(raw) => raw.clone(),
        }
    }
}

/// Exact label match; "paid" is not "Paid".
impl From<&str> for UnitFilter {
    fn from(value: &str) -> Self {
        UnitFilter::options()
            .into_iter()
            .find(|option| option.label() == value)
            .unwrap_or_else(|| UnitFilter::Unmatched(value.to_string()))
    }
}

impl fmt::Display for UnitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Filter applied to the maintenance request list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MaintenanceFilter {
    #[default]
    All,
    Status(MaintenanceStatus),
    Unmatched(String),
}

impl MaintenanceFilter {
    /// Filter bar order.
    pub fn options() -> Vec<MaintenanceFilter> {
        let mut options = vec![MaintenanceFilter::All];
        options.extend(MaintenanceStatus::all().iter().copied().map(MaintenanceFilter::Status));
        options
    }

    pub fn label(&self) -> String {
        match self {
            MaintenanceFilter::All => "All".to_string(),
            MaintenanceFilter::Status(status) => status.to_string(),
            MaintenanceFilter::Unmatched(raw) => raw.clone(),
        }
    }
}

impl From<&str> for MaintenanceFilter {
    fn from(value: &str) -> Self {
        MaintenanceFilter::options()
            .into_iter()
            .find(|option| option.label() == value)
            .unwrap_or_else(|| MaintenanceFilter::Unmatched(value.to_string()))
    }
}

impl fmt::Display for MaintenanceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// DISPLAY / PARSING
// ============================================================================

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PropertyStatus::Occupied => "occupied",
            PropertyStatus::Vacant => "vacant",
            PropertyStatus::Maintenance => "maintenance",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "occupied" => Ok(PropertyStatus::Occupied),
            "vacant" => Ok(PropertyStatus::Vacant),
            "maintenance" => Ok(PropertyStatus::Maintenance),
            _ => Err(format!("Invalid PropertyStatus: {}", s)),
        }
    }
}

impl fmt::Display for RentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RentStatus::Paid => "Paid",
            RentStatus::Overdue => "Overdue",
            RentStatus::Vacant => "Vacant",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for RentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "paid" => Ok(RentStatus::Paid),
            "overdue" => Ok(RentStatus::Overdue),
            "vacant" => Ok(RentStatus::Vacant),
            _ => Err(format!("Invalid RentStatus: {}", s)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid Priority: {}", s)),
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MaintenanceStatus::Open => "Open",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for MaintenanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "open" => Ok(MaintenanceStatus::Open),
            "inprogress" => Ok(MaintenanceStatus::InProgress),
            "completed" | "complete" => Ok(MaintenanceStatus::Completed),
            _ => Err(format!("Invalid MaintenanceStatus: {}", s)),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "dashboard" => Ok(Section::Dashboard),
            "units" => Ok(Section::Units),
            "tenants" => Ok(Section::Tenants),
            "maintenance" => Ok(Section::Maintenance),
            _ => Err(format!("Invalid Section: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_status_round_trips_display_string() {
        for status in MaintenanceStatus::all() {
            let parsed: MaintenanceStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, *status);
        }
        assert_eq!(
            "in_progress".parse::<MaintenanceStatus>(),
            Ok(MaintenanceStatus::InProgress)
        );
    }

    #[test]
    fn test_unit_filter_from_known_strings() {
        assert_eq!(UnitFilter::from("All"), UnitFilter::All);
        assert_eq!(UnitFilter::from("Archived"), UnitFilter::Archived);
        assert_eq!(
            UnitFilter::from("Overdue"),
            UnitFilter::Status(RentStatus::Overdue)
        );
    }

    #[test]
    fn test_unit_filter_keeps_unknown_strings() {
        assert_eq!(
            UnitFilter::from("Evicted"),
            UnitFilter::Unmatched("Evicted".to_string())
        );
        assert_eq!(UnitFilter::from("Evicted").label(), "Evicted");
    }

    #[test]
    fn test_filters_are_case_sensitive() {
        assert_eq!(
            UnitFilter::from("paid"),
            UnitFilter::Unmatched("paid".to_string())
        );
        assert_eq!(
            UnitFilter::from("archived"),
            UnitFilter::Unmatched("archived".to_string())
        );
        assert_eq!(
            MaintenanceFilter::from("In Progress"),
            MaintenanceFilter::Status(MaintenanceStatus::InProgress)
        );
        assert_eq!(
            MaintenanceFilter::from("in_progress"),
            MaintenanceFilter::Unmatched("in_progress".to_string())
        );
    }

    #[test]
    fn test_maintenance_filter_options_order() {
        let labels: Vec<String> = MaintenanceFilter::options()
            .iter()
            .map(MaintenanceFilter::label)
            .collect();
        assert_eq!(labels, vec!["All", "Open", "In Progress", "Completed"]);
    }

    #[test]
    fn test_section_navigation_wraps() {
        assert_eq!(Section::Maintenance.next(), Section::Dashboard);
        assert_eq!(Section::Dashboard.previous(), Section::Maintenance);
        assert_eq!(Section::from_index(2), Some(Section::Tenants));
        assert_eq!(Section::from_index(4), None);
    }

    #[test]
    fn test_serde_uses_ui_strings() {
        let json = serde_json::to_string(&MaintenanceStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let json = serde_json::to_string(&PropertyStatus::Maintenance).unwrap();
        assert_eq!(json, "\"maintenance\"");
    }
}
