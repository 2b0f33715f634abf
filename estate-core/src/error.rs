//! Error types for Estate store operations

use thiserror::Error;

/// Form input rejected before any state changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Property, Unit #, and Rent are required.")]
    MissingUnitFields,

    #[error("Property, Unit, and Description are required.")]
    MissingRequestFields,

    #[error("Rent amount must be a valid number.")]
    InvalidRentAmount { value: String },

    #[error("No unit selected for editing.")]
    NoUnitSelected,

    #[error("Invalid value for {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },
}

/// Failure of a store command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} not found.")]
    NotFound { entity: &'static str, id: u32 },

    #[error("No more {entity} ids available.")]
    IdsExhausted { entity: &'static str },
}

/// Occupancy counts where more units are occupied than exist.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("occupied count {occupied} exceeds total {total}")]
pub struct InvalidOccupancy {
    pub occupied: u32,
    pub total: u32,
}

impl StoreError {
    pub fn unit_not_found(id: u32) -> Self {
        StoreError::NotFound { entity: "Unit", id }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(
            ValidationError::MissingUnitFields.to_string(),
            "Property, Unit #, and Rent are required."
        );
        assert_eq!(
            StoreError::from(ValidationError::InvalidRentAmount {
                value: "abc".to_string()
            })
            .to_string(),
            "Rent amount must be a valid number."
        );
        assert_eq!(StoreError::unit_not_found(9).to_string(), "Unit not found.");
    }
}
