//! The application state store.
//!
//! `PropertyStore` owns every entity collection plus the UI selection
//! state (active section, filters, dialogs, drafts). Commands run to
//! completion one at a time; each either applies its whole mutation or
//! none of it, and reports the outcome as a [`Notification`].

use crate::form::{self, parse_choice, parse_rent, FormData, RequestDraft, UnitDraft};
use crate::{
    next_id, seed, MaintenanceFilter, MaintenanceRequest, MaintenanceStatus, Notification,
    Priority, Property, RentStatus, RequestId, Section, StoreError, StoreResult, Tenant, Unit,
    UnitFilter, UnitId, ValidationError,
};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    properties: Vec<Property>,
    units: Vec<Unit>,
    tenants: Vec<Tenant>,
    maintenance_requests: Vec<MaintenanceRequest>,
    available_vendors: Vec<String>,

    active_section: Section,
    unit_filter: UnitFilter,
    maintenance_filter: MaintenanceFilter,

    add_unit_form_open: bool,
    edit_unit_form_open: bool,
    edit_unit_id: Option<UnitId>,

    new_unit: UnitDraft,
    edit_unit: UnitDraft,
    new_request: RequestDraft,
}

impl PropertyStore {
    /// Empty store: no entities, no vendors.
    pub fn new() -> Self {
        Self {
            edit_unit: UnitDraft::blank(),
            ..Self::default()
        }
    }

    /// Store loaded with the demo portfolio.
    pub fn seeded() -> Self {
        Self::new()
            .with_properties(seed::properties())
            .with_units(seed::units())
            .with_tenants(seed::tenants())
            .with_maintenance_requests(seed::maintenance_requests())
            .with_vendors(seed::vendors())
    }

    // Builders. Callers are responsible for unique ids within each collection.

    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_units(mut self, units: Vec<Unit>) -> Self {
        self.units = units;
        self
    }

    pub fn with_tenants(mut self, tenants: Vec<Tenant>) -> Self {
        self.tenants = tenants;
        self
    }

    pub fn with_maintenance_requests(mut self, requests: Vec<MaintenanceRequest>) -> Self {
        self.maintenance_requests = requests;
        self
    }

    pub fn with_vendors(mut self, vendors: Vec<String>) -> Self {
        self.available_vendors = vendors;
        self
    }

    // ------------------------------------------------------------------
    // Readable state
    // ------------------------------------------------------------------

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    pub fn maintenance_requests(&self) -> &[MaintenanceRequest] {
        &self.maintenance_requests
    }

    pub fn available_vendors(&self) -> &[String] {
        &self.available_vendors
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn unit_filter(&self) -> &UnitFilter {
        &self.unit_filter
    }

    pub fn maintenance_filter(&self) -> &MaintenanceFilter {
        &self.maintenance_filter
    }

    pub fn is_add_unit_form_open(&self) -> bool {
        self.add_unit_form_open
    }

    pub fn is_edit_unit_form_open(&self) -> bool {
        self.edit_unit_form_open
    }

    pub fn edit_unit_id(&self) -> Option<UnitId> {
        self.edit_unit_id
    }

    pub fn new_unit_draft(&self) -> &UnitDraft {
        &self.new_unit
    }

    pub fn edit_unit_draft(&self) -> &UnitDraft {
        &self.edit_unit
    }

    pub fn new_request_draft(&self) -> &RequestDraft {
        &self.new_request
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn maintenance_request(&self, id: RequestId) -> Option<&MaintenanceRequest> {
        self.maintenance_requests.iter().find(|r| r.id == id)
    }

    // ------------------------------------------------------------------
    // Selection commands
    // ------------------------------------------------------------------

    pub fn set_active_section(&mut self, section: Section) {
        debug!(section = %section, "Active section changed");
        self.active_section = section;
    }

    /// Accepts any value; unknown strings filter out every unit.
    pub fn set_unit_filter(&mut self, filter: impl Into<UnitFilter>) {
        self.unit_filter = filter.into();
        debug!(filter = %self.unit_filter, "Unit filter changed");
    }

    /// Accepts any value; unknown strings filter out every request.
    pub fn set_maintenance_filter(&mut self, filter: impl Into<MaintenanceFilter>) {
        self.maintenance_filter = filter.into();
        debug!(filter = %self.maintenance_filter, "Maintenance filter changed");
    }

    // ------------------------------------------------------------------
    // Draft setters
    // ------------------------------------------------------------------

    /// Returns false for an unknown field name.
    pub fn set_new_unit_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.new_unit.set_field(field, value)
    }

    /// Returns false for an unknown field name.
    pub fn set_edit_unit_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.edit_unit.set_field(field, value)
    }

    pub fn set_edit_unit_property(&mut self, value: impl Into<String>) {
        self.edit_unit.property_name = value.into();
    }

    pub fn set_edit_unit_rent_status(&mut self, value: impl Into<String>) {
        self.edit_unit.rent_status = value.into();
    }

    /// Returns false for an unknown field name.
    pub fn set_new_request_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.new_request.set_field(field, value)
    }

    // ------------------------------------------------------------------
    // Unit dialogs
    // ------------------------------------------------------------------

    pub fn open_add_unit_form(&mut self) {
        self.new_unit.reset();
        self.add_unit_form_open = true;
    }

    pub fn close_add_unit_form(&mut self) {
        self.add_unit_form_open = false;
        self.new_unit.reset();
    }

    /// Unknown ids are ignored.
    pub fn open_edit_unit_form(&mut self, unit_id: UnitId) {
        let Some(unit) = self.unit(unit_id) else {
            debug!(unit_id, "Edit requested for unknown unit");
            return;
        };
        self.edit_unit = UnitDraft::from_unit(unit);
        self.edit_unit_id = Some(unit_id);
        self.edit_unit_form_open = true;
    }

    pub fn close_edit_unit_form(&mut self) {
        self.edit_unit_form_open = false;
        self.edit_unit_id = None;
    }

    // ------------------------------------------------------------------
    // Unit commands
    // ------------------------------------------------------------------

    pub fn add_unit(&mut self, form: &FormData) -> Notification {
        match self.try_add_unit(form) {
            Ok(unit) => {
                info!(unit_id = unit.id, unit_number = %unit.unit_number, "Unit added");
                let message = format!("Unit {} added successfully!", unit.unit_number);
                self.add_unit_form_open = false;
                self.new_unit.reset();
                Notification::success(message)
            }
            Err(err) => reject("add_unit", err),
        }
    }

    fn try_add_unit(&mut self, form: &FormData) -> StoreResult<Unit> {
        let (Some(property_name), Some(unit_number), Some(rent_raw)) = (
            form.get_non_empty(form::PROPERTY_NAME),
            form.get_non_empty(form::UNIT_NUMBER),
            form.get_non_empty(form::RENT_AMOUNT),
        ) else {
            return Err(ValidationError::MissingUnitFields.into());
        };
        let rent_amount = parse_rent(rent_raw)?;
        let rent_status = parse_choice(form, form::RENT_STATUS, RentStatus::default())?;
        let id = next_id(self.units.iter().map(|u| u.id))
            .ok_or(StoreError::IdsExhausted { entity: "unit" })?;

        let unit = Unit {
            id,
            property_name: property_name.to_string(),
            unit_number: unit_number.to_string(),
            rent_amount,
            tenant_name: form.optional(form::TENANT_NAME),
            rent_status,
            lease_end: form.optional(form::LEASE_END),
            archived: false,
        };
        self.units.push(unit.clone());
        Ok(unit)
    }

    /// Applies the edit dialog to the tracked unit.
    ///
    /// Property and rent status come from the edit draft; the rest from
    /// `form`. The tracked unit id survives a successful update.
    pub fn update_unit(&mut self, form: &FormData) -> Notification {
        match self.try_update_unit(form) {
            Ok(unit_number) => {
                self.edit_unit_form_open = false;
                Notification::info(format!("Unit {} updated successfully!", unit_number))
            }
            Err(err) => reject("update_unit", err),
        }
    }

    fn try_update_unit(&mut self, form: &FormData) -> StoreResult<String> {
        let unit_id = self.edit_unit_id.ok_or(ValidationError::NoUnitSelected)?;

        let property_name = Some(self.edit_unit.property_name.as_str()).filter(|p| !p.is_empty());
        let (Some(property_name), Some(unit_number), Some(rent_raw)) = (
            property_name,
            form.get_non_empty(form::UNIT_NUMBER),
            form.get_non_empty(form::RENT_AMOUNT),
        ) else {
            return Err(ValidationError::MissingUnitFields.into());
        };
        let rent_amount = parse_rent(rent_raw)?;
        let rent_status = self.edit_unit.rent_status.parse::<RentStatus>().map_err(|_| {
            ValidationError::InvalidChoice {
                field: form::RENT_STATUS,
                value: self.edit_unit.rent_status.clone(),
            }
        })?;
        let property_name = property_name.to_string();

        let unit = self
            .units
            .iter_mut()
            .find(|u| u.id == unit_id)
            .ok_or_else(|| StoreError::unit_not_found(unit_id))?;

        unit.property_name = property_name;
        unit.unit_number = unit_number.to_string();
        unit.rent_amount = rent_amount;
        unit.tenant_name = form.optional(form::TENANT_NAME);
        unit.rent_status = rent_status;
        unit.lease_end = form.optional(form::LEASE_END);

        info!(unit_id, unit_number = %unit.unit_number, "Unit updated");
        Ok(unit.unit_number.clone())
    }

    /// Flips the archived flag. Unknown ids are ignored.
    pub fn toggle_unit_archive(&mut self, unit_id: UnitId) -> Option<Notification> {
        let unit = self.units.iter_mut().find(|u| u.id == unit_id)?;
        unit.archived = !unit.archived;
        let state = if unit.archived { "archived" } else { "restored" };
        info!(unit_id, state, "Unit archive toggled");
        Some(Notification::success(format!(
            "Unit {} {}.",
            unit.unit_number, state
        )))
    }

    // ------------------------------------------------------------------
    // Maintenance commands
    // ------------------------------------------------------------------

    /// New requests are always `Open`; the form cannot choose a status.
    pub fn add_maintenance_request(&mut self, form: &FormData) -> Notification {
        match self.try_add_maintenance_request(form) {
            Ok(request_id) => {
                info!(request_id, "Maintenance request added");
                self.new_request.reset();
                Notification::success("Maintenance request added!")
            }
            Err(err) => reject("add_maintenance_request", err),
        }
    }

    fn try_add_maintenance_request(&mut self, form: &FormData) -> StoreResult<RequestId> {
        let (Some(property_name), Some(unit), Some(description)) = (
            form.get_non_empty(form::PROPERTY_NAME),
            form.get_non_empty(form::UNIT),
            form.get_non_empty(form::DESCRIPTION),
        ) else {
            return Err(ValidationError::MissingRequestFields.into());
        };
        let priority = parse_choice(form, form::PRIORITY, Priority::default())?;

        let id = next_id(self.maintenance_requests.iter().map(|r| r.id))
            .ok_or(StoreError::IdsExhausted {
                entity: "maintenance request",
            })?;
        self.maintenance_requests.push(MaintenanceRequest {
            id,
            property_name: property_name.to_string(),
            unit: unit.to_string(),
            description: description.to_string(),
            priority,
            status: MaintenanceStatus::Open,
            vendor: form.optional(form::VENDOR),
        });
        Ok(id)
    }

    /// Unknown ids are ignored and produce no notification.
    pub fn update_maintenance_status(
        &mut self,
        request_id: RequestId,
        status: MaintenanceStatus,
    ) -> Option<Notification> {
        let request = self
            .maintenance_requests
            .iter_mut()
            .find(|r| r.id == request_id)?;
        request.status = status;
        info!(request_id, status = %status, "Maintenance status updated");
        Some(Notification::info(format!(
            "Request status updated to {}.",
            status
        )))
    }

    /// An empty vendor clears the assignment. Unknown ids are ignored.
    pub fn update_maintenance_vendor(
        &mut self,
        request_id: RequestId,
        vendor: &str,
    ) -> Option<Notification> {
        let request = self
            .maintenance_requests
            .iter_mut()
            .find(|r| r.id == request_id)?;
        request.vendor = Some(vendor).filter(|v| !v.is_empty()).map(str::to_string);
        info!(request_id, vendor, "Maintenance vendor updated");
        Some(Notification::info(format!(
            "Vendor for request #{} updated to {}.",
            request_id, vendor
        )))
    }
}

fn reject(command: &'static str, err: StoreError) -> Notification {
    warn!(command, error = %err, "Command rejected");
    Notification::from(err)
}
