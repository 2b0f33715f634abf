//! Core entity structures

use crate::{InvalidOccupancy, MaintenanceStatus, Priority, PropertyStatus, RentStatus};
use serde::{Deserialize, Serialize};

pub type PropertyId = u32;
pub type UnitId = u32;
pub type TenantId = u32;
pub type RequestId = u32;

/// Next id for a collection: one past the current maximum, or 1 when empty.
/// `None` once the maximum is `u32::MAX`.
pub fn next_id<I>(ids: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    ids.into_iter().max().map_or(Some(1), |max| max.checked_add(1))
}

/// Occupied vs. total unit count for a property.
///
/// Deserialization goes through [`Occupancy::new`], so `occupied <= total`
/// holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOccupancy")]
pub struct Occupancy {
    occupied: u32,
    total: u32,
}

#[derive(Deserialize)]
struct RawOccupancy {
    occupied: u32,
    total: u32,
}

impl TryFrom<RawOccupancy> for Occupancy {
    type Error = InvalidOccupancy;

    fn try_from(raw: RawOccupancy) -> Result<Self, Self::Error> {
        Occupancy::new(raw.occupied, raw.total).ok_or(InvalidOccupancy {
            occupied: raw.occupied,
            total: raw.total,
        })
    }
}

impl Occupancy {
    /// Returns `None` when `occupied > total`.
    pub fn new(occupied: u32, total: u32) -> Option<Self> {
        (occupied <= total).then_some(Self { occupied, total })
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn vacant(&self) -> u32 {
        self.total - self.occupied
    }

    /// Occupied share in percent; 0.0 for an empty property.
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.occupied) / f64::from(self.total) * 100.0
        }
    }
}

/// A managed building. Seeded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub address: String,
    pub occupancy: Occupancy,
    pub status: PropertyStatus,
    pub image_url: String,
}

/// A rentable unit. `property_name` is free text and is not checked
/// against the property collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub property_name: String,
    pub unit_number: String,
    pub rent_amount: u32,
    pub tenant_name: Option<String>,
    pub rent_status: RentStatus,
    pub lease_end: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// A leaseholder. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_name: String,
    pub unit_number: String,
    pub lease_document_url: String,
}

/// A work order against a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: RequestId,
    pub property_name: String,
    pub unit: String,
    pub description: String,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub vendor: Option<String>,
}

/// Lets selection and lookup code treat every collection the same way.
pub trait HasId {
    fn id(&self) -> u32;
}

impl HasId for Property {
    fn id(&self) -> u32 {
        self.id
    }
}

impl HasId for Unit {
    fn id(&self) -> u32 {
        self.id
    }
}

impl HasId for Tenant {
    fn id(&self) -> u32 {
        self.id
    }
}

impl HasId for MaintenanceRequest {
    fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_empty_starts_at_one() {
        assert_eq!(next_id(Vec::<u32>::new()), Some(1));
    }

    #[test]
    fn test_next_id_uses_maximum_not_count() {
        assert_eq!(next_id([3, 1, 7]), Some(8));
    }

    #[test]
    fn test_next_id_exhausted_at_max() {
        assert_eq!(next_id([2, u32::MAX]), None);
    }

    #[test]
    fn test_property_json_rejects_overfull_occupancy() {
        let json = r#"{
            "id": 9,
            "name": "Harbor Point",
            "address": "1 Pier Rd",
            "occupancy": {"occupied": 5, "total": 4},
            "status": "occupied",
            "image_url": "/placeholder.svg"
        }"#;
        let err = serde_json::from_str::<Property>(json).unwrap_err();
        assert!(err.to_string().contains("exceeds total"));

        let valid = json.replace(r#""occupied": 5"#, r#""occupied": 4"#);
        let property: Property = serde_json::from_str(&valid).unwrap();
        assert_eq!(property.occupancy.vacant(), 0);
    }

    #[test]
    fn test_occupancy_rejects_overfull() {
        assert!(Occupancy::new(5, 4).is_none());
        let occ = Occupancy::new(4, 5).unwrap();
        assert_eq!(occ.vacant(), 1);
        assert_eq!(occ.rate(), 80.0);
    }

    #[test]
    fn test_occupancy_rate_empty_property() {
        let occ = Occupancy::new(0, 0).unwrap();
        assert_eq!(occ.rate(), 0.0);
    }
}
