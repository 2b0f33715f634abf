//! Estate Core - property-management state store
//!
//! Entity types, typed enums, the `PropertyStore` command handlers and the
//! derived views a presentation layer renders. Everything lives in memory
//! for one session; there is no I/O in this crate.

pub mod derived;
pub mod entities;
pub mod enums;
pub mod error;
pub mod form;
pub mod notification;
pub mod seed;
pub mod store;

pub use derived::{
    filter_maintenance_requests, filter_units, DashboardTotals, StoreSnapshot,
    MONTHLY_RENT_PER_UNIT,
};
pub use entities::{
    next_id, HasId, MaintenanceRequest, Occupancy, Property, PropertyId, RequestId, Tenant,
    TenantId, Unit, UnitId,
};
pub use enums::{
    MaintenanceFilter, MaintenanceStatus, Priority, PropertyStatus, RentStatus, Section,
    UnitFilter,
};
pub use error::{InvalidOccupancy, StoreError, StoreResult, ValidationError};
pub use form::{FormData, RequestDraft, UnitDraft};
pub use notification::{Notification, NotificationLevel};
pub use store::PropertyStore;
