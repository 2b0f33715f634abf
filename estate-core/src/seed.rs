//! Demo portfolio loaded by `PropertyStore::seeded`.

use crate::{
    MaintenanceRequest, MaintenanceStatus, Occupancy, Priority, Property, PropertyStatus,
    RentStatus, Tenant, Unit,
};

pub const VENDORS: &[&str] = &[
    "General Maintenance Co.",
    "QuickFix Plumbing",
    "ACME HVAC Services",
    "Sparky Electricians",
    "The Paint Squad",
];

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn property(
    id: u32,
    name: &str,
    address: &str,
    (occupied, total): (u32, u32),
    status: PropertyStatus,
) -> Option<Property> {
    Some(Property {
        id,
        name: name.to_string(),
        address: address.to_string(),
        occupancy: Occupancy::new(occupied, total)?,
        status,
        image_url: PLACEHOLDER_IMAGE.to_string(),
    })
}

pub fn properties() -> Vec<Property> {
    [
        property(1, "Sunset Apartments", "123 Ocean View, LA", (18, 20), PropertyStatus::Occupied),
        property(2, "Downtown Lofts", "456 Main St, Metropolis", (28, 30), PropertyStatus::Occupied),
        property(3, "Green Valley Homes", "789 Country Rd, Smallville", (10, 15), PropertyStatus::Vacant),
        property(4, "Sunrise Towers", "101 Dawn Ave, Gotham", (45, 50), PropertyStatus::Maintenance),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn units() -> Vec<Unit> {
    vec![
        Unit {
            id: 1,
            property_name: "Sunset Apartments".to_string(),
            unit_number: "A101".to_string(),
            rent_amount: 1650,
            tenant_name: Some("Alice Johnson".to_string()),
            rent_status: RentStatus::Paid,
            lease_end: Some("2024-12-31".to_string()),
            archived: false,
        },
        Unit {
            id: 2,
            property_name: "Sunset Apartments".to_string(),
            unit_number: "B203".to_string(),
            rent_amount: 1600,
            tenant_name: None,
            rent_status: RentStatus::Vacant,
            lease_end: None,
            archived: false,
        },
        Unit {
            id: 3,
            property_name: "Downtown Lofts".to_string(),
            unit_number: "5B".to_string(),
            rent_amount: 2100,
            tenant_name: Some("Bob Williams".to_string()),
            rent_status: RentStatus::Overdue,
            lease_end: Some("2025-06-30".to_string()),
            archived: false,
        },
    ]
}

pub fn tenants() -> Vec<Tenant> {
    vec![
        Tenant {
            id: 1,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            phone: "555-0101".to_string(),
            property_name: "Sunset Apartments".to_string(),
            unit_number: "A101".to_string(),
            lease_document_url: "#".to_string(),
        },
        Tenant {
            id: 2,
            name: "Bob Williams".to_string(),
            email: "bob@example.com".to_string(),
            phone: "555-0102".to_string(),
            property_name: "Downtown Lofts".to_string(),
            unit_number: "5B".to_string(),
            lease_document_url: "#".to_string(),
        },
    ]
}

pub fn maintenance_requests() -> Vec<MaintenanceRequest> {
    vec![
        MaintenanceRequest {
            id: 1,
            property_name: "Sunset Apartments".to_string(),
            unit: "#102".to_string(),
            description: "Leaky faucet in kitchen".to_string(),
            priority: Priority::Medium,
            status: MaintenanceStatus::Open,
            vendor: Some("QuickFix Plumbing".to_string()),
        },
        MaintenanceRequest {
            id: 2,
            property_name: "Downtown Lofts".to_string(),
            unit: "#305".to_string(),
            description: "Broken window pane".to_string(),
            priority: Priority::High,
            status: MaintenanceStatus::Open,
            vendor: None,
        },
    ]
}

pub fn vendors() -> Vec<String> {
    VENDORS.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seed_property_loads() {
        let names: Vec<String> = properties().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Sunset Apartments",
                "Downtown Lofts",
                "Green Valley Homes",
                "Sunrise Towers",
            ]
        );
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let unit_ids: Vec<u32> = units().iter().map(|u| u.id).collect();
        assert_eq!(unit_ids, vec![1, 2, 3]);
        let request_ids: Vec<u32> = maintenance_requests().iter().map(|r| r.id).collect();
        assert_eq!(request_ids, vec![1, 2]);
        assert_eq!(vendors().len(), VENDORS.len());
    }
}
