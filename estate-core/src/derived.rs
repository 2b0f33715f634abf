//! Derived views over the store.
//!
//! Everything here is recomputed from the collections on every call.

use crate::form::{RequestDraft, UnitDraft};
use crate::{
    MaintenanceFilter, MaintenanceRequest, MaintenanceStatus, Property, PropertyStore, Section,
    Tenant, Unit, UnitFilter, UnitId,
};
use serde::Serialize;

/// Flat monthly rent assumed per occupied unit for the income estimate.
pub const MONTHLY_RENT_PER_UNIT: u64 = 1500;

impl PropertyStore {
    pub fn total_units(&self) -> u64 {
        self.properties()
            .iter()
            .map(|p| u64::from(p.occupancy.total()))
            .sum()
    }

    pub fn occupied_units(&self) -> u64 {
        self.properties()
            .iter()
            .map(|p| u64::from(p.occupancy.occupied()))
            .sum()
    }

    /// Percentage of occupied units; 0.0 when there are no units.
    pub fn occupancy_rate(&self) -> f64 {
        let total = self.total_units();
        if total == 0 {
            return 0.0;
        }
        self.occupied_units() as f64 / total as f64 * 100.0
    }

    pub fn vacant_units(&self) -> u64 {
        self.total_units() - self.occupied_units()
    }

    /// Estimate from occupied units at a flat rate, not from unit rents.
    pub fn monthly_income(&self) -> u64 {
        self.occupied_units() * MONTHLY_RENT_PER_UNIT
    }

    /// Number of requests still `Open`.
    pub fn upcoming_maintenance(&self) -> usize {
        self.maintenance_requests()
            .iter()
            .filter(|r| r.status == MaintenanceStatus::Open)
            .count()
    }

    /// Distinct property names in lexicographic order.
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.properties().iter().map(|p| p.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn filtered_units(&self) -> Vec<&Unit> {
        filter_units(self.units(), self.unit_filter())
    }

    pub fn filtered_maintenance_requests(&self) -> Vec<&MaintenanceRequest> {
        filter_maintenance_requests(self.maintenance_requests(), self.maintenance_filter())
    }

    /// Serializable copy of the full readable state, derived values included.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            properties: self.properties().to_vec(),
            units: self.units().to_vec(),
            tenants: self.tenants().to_vec(),
            maintenance_requests: self.maintenance_requests().to_vec(),
            available_vendors: self.available_vendors().to_vec(),
            active_section: self.active_section(),
            unit_filter: self.unit_filter().clone(),
            maintenance_filter: self.maintenance_filter().clone(),
            add_unit_form_open: self.is_add_unit_form_open(),
            edit_unit_form_open: self.is_edit_unit_form_open(),
            edit_unit_id: self.edit_unit_id(),
            new_unit: self.new_unit_draft().clone(),
            edit_unit: self.edit_unit_draft().clone(),
            new_request: self.new_request_draft().clone(),
            totals: DashboardTotals::from_store(self),
            property_names: self.property_names(),
            filtered_unit_ids: self.filtered_units().iter().map(|u| u.id).collect(),
            filtered_request_ids: self
                .filtered_maintenance_requests()
                .iter()
                .map(|r| r.id)
                .collect(),
        }
    }
}

/// Units selected by `filter`. `All` hides archived units; `Archived`
/// shows only them; a status shows non-archived units with that status.
pub fn filter_units<'a>(units: &'a [Unit], filter: &UnitFilter) -> Vec<&'a Unit> {
    units
        .iter()
        .filter(|u| match filter {
            UnitFilter::All => !u.archived,
            UnitFilter::Archived => u.archived,
            UnitFilter::Status(status) => !u.archived && u.rent_status == *status,
            UnitFilter::Unmatched(_) => false,
        })
        .collect()
}

/// Requests selected by `filter`. `All` orders Open, then In Progress,
/// then Completed, keeping the original order inside each group.
pub fn filter_maintenance_requests<'a>(
    requests: &'a [MaintenanceRequest],
    filter: &MaintenanceFilter,
) -> Vec<&'a MaintenanceRequest> {
    match filter {
        MaintenanceFilter::All => {
            let mut all: Vec<&MaintenanceRequest> = requests.iter().collect();
            // sort_by_key is stable
            all.sort_by_key(|r| {
                (
                    r.status != MaintenanceStatus::Open,
                    r.status != MaintenanceStatus::InProgress,
                )
            });
            all
        }
        MaintenanceFilter::Status(status) => {
            requests.iter().filter(|r| r.status == *status).collect()
        }
        MaintenanceFilter::Unmatched(_) => Vec::new(),
    }
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardTotals {
    pub total_units: u64,
    pub occupied_units: u64,
    pub vacant_units: u64,
    pub occupancy_rate: f64,
    pub monthly_income: u64,
    pub upcoming_maintenance: usize,
}

impl DashboardTotals {
    pub fn from_store(store: &PropertyStore) -> Self {
        Self {
            total_units: store.total_units(),
            occupied_units: store.occupied_units(),
            vacant_units: store.vacant_units(),
            occupancy_rate: store.occupancy_rate(),
            monthly_income: store.monthly_income(),
            upcoming_maintenance: store.upcoming_maintenance(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub properties: Vec<Property>,
    pub units: Vec<Unit>,
    pub tenants: Vec<Tenant>,
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub available_vendors: Vec<String>,
    pub active_section: Section,
    pub unit_filter: UnitFilter,
    pub maintenance_filter: MaintenanceFilter,
    pub add_unit_form_open: bool,
    pub edit_unit_form_open: bool,
    pub edit_unit_id: Option<UnitId>,
    pub new_unit: UnitDraft,
    pub edit_unit: UnitDraft,
    pub new_request: RequestDraft,
    pub totals: DashboardTotals,
    pub property_names: Vec<String>,
    pub filtered_unit_ids: Vec<UnitId>,
    pub filtered_request_ids: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Occupancy, Priority, PropertyStatus, RentStatus};

    fn request(id: u32, status: MaintenanceStatus) -> MaintenanceRequest {
        MaintenanceRequest {
            id,
            property_name: "P".to_string(),
            unit: format!("#{}", id),
            description: "d".to_string(),
            priority: Priority::Low,
            status,
            vendor: None,
        }
    }

    fn unit(id: u32, status: RentStatus, archived: bool) -> Unit {
        Unit {
            id,
            property_name: "P".to_string(),
            unit_number: format!("U{}", id),
            rent_amount: 1000,
            tenant_name: None,
            rent_status: status,
            lease_end: None,
            archived,
        }
    }

    #[test]
    fn test_seeded_dashboard_totals() {
        let store = PropertyStore::seeded();
        let totals = DashboardTotals::from_store(&store);

        assert_eq!(totals.total_units, 115);
        assert_eq!(totals.occupied_units, 101);
        assert_eq!(totals.vacant_units, 14);
        assert_eq!(totals.monthly_income, 151_500);
        assert_eq!(totals.upcoming_maintenance, 2);
        assert_eq!(totals.occupancy_rate, 101.0 / 115.0 * 100.0);
    }

    #[test]
    fn test_occupancy_rate_without_properties() {
        let store = PropertyStore::new();
        assert_eq!(store.occupancy_rate(), 0.0);
        assert_eq!(store.monthly_income(), 0);
    }

    #[test]
    fn test_property_names_sorted_and_distinct() {
        let dup = Property {
            id: 9,
            name: "Downtown Lofts".to_string(),
            address: "elsewhere".to_string(),
            occupancy: Occupancy::new(0, 1).unwrap(),
            status: PropertyStatus::Vacant,
            image_url: String::new(),
        };
        let mut properties = crate::seed::properties();
        properties.push(dup);
        let store = PropertyStore::new().with_properties(properties);

        assert_eq!(
            store.property_names(),
            vec![
                "Downtown Lofts",
                "Green Valley Homes",
                "Sunrise Towers",
                "Sunset Apartments"
            ]
        );
    }

    #[test]
    fn test_filter_units_by_filter() {
        let units = vec![
            unit(1, RentStatus::Paid, false),
            unit(2, RentStatus::Paid, true),
            unit(3, RentStatus::Overdue, false),
        ];
        let ids = |filter: UnitFilter| -> Vec<u32> {
            filter_units(&units, &filter).iter().map(|u| u.id).collect()
        };

        assert_eq!(ids(UnitFilter::All), vec![1, 3]);
        assert_eq!(ids(UnitFilter::Archived), vec![2]);
        assert_eq!(ids(UnitFilter::Status(RentStatus::Paid)), vec![1]);
        assert!(ids(UnitFilter::Unmatched("x".to_string())).is_empty());
    }

    #[test]
    fn test_all_requests_grouped_by_status() {
        let requests = vec![
            request(1, MaintenanceStatus::Completed),
            request(2, MaintenanceStatus::InProgress),
            request(3, MaintenanceStatus::Open),
            request(4, MaintenanceStatus::Completed),
            request(5, MaintenanceStatus::Open),
        ];

        let ids: Vec<u32> = filter_maintenance_requests(&requests, &MaintenanceFilter::All)
            .iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec![3, 5, 2, 1, 4]);
    }

    #[test]
    fn test_status_filter_keeps_original_order() {
        let requests = vec![
            request(1, MaintenanceStatus::Completed),
            request(2, MaintenanceStatus::Open),
            request(3, MaintenanceStatus::Completed),
        ];

        let ids: Vec<u32> = filter_maintenance_requests(
            &requests,
            &MaintenanceFilter::Status(MaintenanceStatus::Completed),
        )
        .iter()
        .map(|r| r.id)
        .collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_snapshot_serializes_state_and_views() {
        let mut store = PropertyStore::seeded();
        store.set_unit_filter("Overdue");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.filtered_unit_ids, vec![3]);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["active_section"], "dashboard");
        assert_eq!(json["totals"]["monthly_income"], 151_500);
        assert_eq!(json["maintenance_requests"][0]["status"], "Open");
        assert_eq!(json["new_unit"]["rent_status"], "Vacant");
    }
}
