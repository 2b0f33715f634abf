//! Form payloads and draft state.
//!
//! Drafts hold every field as a string while a dialog is open. Conversion
//! to typed entity fields happens only when a payload reaches a store
//! command.

use crate::{Unit, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PROPERTY_NAME: &str = "property_name";
pub const UNIT_NUMBER: &str = "unit_number";
pub const RENT_AMOUNT: &str = "rent_amount";
pub const TENANT_NAME: &str = "tenant_name";
pub const RENT_STATUS: &str = "rent_status";
pub const LEASE_END: &str = "lease_end";
pub const UNIT: &str = "unit";
pub const DESCRIPTION: &str = "description";
pub const PRIORITY: &str = "priority";
pub const VENDOR: &str = "vendor";

/// Submitted form: field name to raw string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Absent and empty both read as "not supplied".
    pub fn get_non_empty(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|value| !value.is_empty())
    }

    /// Optional text field: empty string becomes `None`.
    pub fn optional(&self, field: &str) -> Option<String> {
        self.get_non_empty(field).map(str::to_string)
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parse a rent amount as a non-negative whole number.
pub fn parse_rent(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidRentAmount {
            value: raw.to_string(),
        })
}

/// Parse an enum-valued form field, falling back to `default` when the
/// field was not supplied.
pub(crate) fn parse_choice<T>(
    form: &FormData,
    field: &'static str,
    default: T,
) -> Result<T, ValidationError>
where
    T: std::str::FromStr,
{
    match form.get_non_empty(field) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ValidationError::InvalidChoice {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Add/edit unit dialog fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDraft {
    pub property_name: String,
    pub unit_number: String,
    pub rent_amount: String,
    pub tenant_name: String,
    pub rent_status: String,
    pub lease_end: String,
}

impl UnitDraft {
    pub const FIELDS: &'static [&'static str] = &[
        PROPERTY_NAME,
        UNIT_NUMBER,
        RENT_AMOUNT,
        TENANT_NAME,
        RENT_STATUS,
        LEASE_END,
    ];

    /// Blank fields; only the edit dialog starts from an existing unit.
    pub fn blank() -> Self {
        Self {
            property_name: String::new(),
            unit_number: String::new(),
            rent_amount: String::new(),
            tenant_name: String::new(),
            rent_status: String::new(),
            lease_end: String::new(),
        }
    }

    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            property_name: unit.property_name.clone(),
            unit_number: unit.unit_number.clone(),
            rent_amount: unit.rent_amount.to_string(),
            tenant_name: unit.tenant_name.clone().unwrap_or_default(),
            rent_status: unit.rent_status.to_string(),
            lease_end: unit.lease_end.clone().unwrap_or_default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            PROPERTY_NAME => &self.property_name,
            UNIT_NUMBER => &self.unit_number,
            RENT_AMOUNT => &self.rent_amount,
            TENANT_NAME => &self.tenant_name,
            RENT_STATUS => &self.rent_status,
            LEASE_END => &self.lease_end,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Returns false for an unknown field name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            PROPERTY_NAME => &mut self.property_name,
            UNIT_NUMBER => &mut self.unit_number,
            RENT_AMOUNT => &mut self.rent_amount,
            TENANT_NAME => &mut self.tenant_name,
            RENT_STATUS => &mut self.rent_status,
            LEASE_END => &mut self.lease_end,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn to_form_data(&self) -> FormData {
        Self::FIELDS
            .iter()
            .filter_map(|name| self.field(name).map(|value| (*name, value)))
            .collect()
    }
}

impl Default for UnitDraft {
    fn default() -> Self {
        Self {
            rent_status: crate::RentStatus::default().to_string(),
            ..Self::blank()
        }
    }
}

/// New maintenance request form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    pub property_name: String,
    pub unit: String,
    pub description: String,
    pub priority: String,
    pub vendor: String,
}

impl RequestDraft {
    pub const FIELDS: &'static [&'static str] =
        &[PROPERTY_NAME, UNIT, DESCRIPTION, PRIORITY, VENDOR];

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            PROPERTY_NAME => &self.property_name,
            UNIT => &self.unit,
            DESCRIPTION => &self.description,
            PRIORITY => &self.priority,
            VENDOR => &self.vendor,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Returns false for an unknown field name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            PROPERTY_NAME => &mut self.property_name,
            UNIT => &mut self.unit,
            DESCRIPTION => &mut self.description,
            PRIORITY => &mut self.priority,
            VENDOR => &mut self.vendor,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    pub fn to_form_data(&self) -> FormData {
        Self::FIELDS
            .iter()
            .filter_map(|name| self.field(name).map(|value| (*name, value)))
            .collect()
    }
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            property_name: String::new(),
            unit: String::new(),
            description: String::new(),
            priority: crate::Priority::default().to_string(),
            vendor: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RentStatus;

    #[test]
    fn test_empty_value_reads_as_not_supplied() {
        let form = FormData::new().with(TENANT_NAME, "");
        assert_eq!(form.get(TENANT_NAME), Some(""));
        assert_eq!(form.get_non_empty(TENANT_NAME), None);
        assert_eq!(form.optional(TENANT_NAME), None);
    }

    #[test]
    fn test_parse_rent_accepts_padded_digits() {
        assert_eq!(parse_rent(" 1200 "), Ok(1200));
    }

    #[test]
    fn test_parse_rent_rejects_non_numbers() {
        for raw in ["abc", "12.5", "-40", ""] {
            assert!(matches!(
                parse_rent(raw),
                Err(ValidationError::InvalidRentAmount { .. })
            ));
        }
    }

    #[test]
    fn test_unit_draft_defaults_to_vacant() {
        let draft = UnitDraft::default();
        assert_eq!(draft.rent_status, "Vacant");
        assert!(draft.property_name.is_empty());
    }

    #[test]
    fn test_unit_draft_from_unit_blanks_absent_fields() {
        let unit = Unit {
            id: 4,
            property_name: "Downtown Lofts".to_string(),
            unit_number: "7C".to_string(),
            rent_amount: 1800,
            tenant_name: None,
            rent_status: RentStatus::Overdue,
            lease_end: None,
            archived: false,
        };
        let draft = UnitDraft::from_unit(&unit);
        assert_eq!(draft.rent_amount, "1800");
        assert_eq!(draft.rent_status, "Overdue");
        assert_eq!(draft.tenant_name, "");
        assert_eq!(draft.lease_end, "");
    }

    #[test]
    fn test_request_draft_to_form_data_carries_every_field() {
        let mut draft = RequestDraft::default();
        assert!(draft.set_field(DESCRIPTION, "No hot water"));
        assert!(!draft.set_field("status", "Completed"));

        let form = draft.to_form_data();
        assert_eq!(form.get(DESCRIPTION), Some("No hot water"));
        assert_eq!(form.get(PRIORITY), Some("Low"));
        assert_eq!(form.get(VENDOR), Some(""));
    }
}
