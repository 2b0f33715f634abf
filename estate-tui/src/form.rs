//! Form editing on top of the store drafts.
//!
//! The editor only tracks which form is showing and which field has focus.
//! Field values live in the store drafts, so what the user types is
//! exactly what the store command receives on submit.

use estate_core::form::{
    DESCRIPTION, LEASE_END, PRIORITY, PROPERTY_NAME, RENT_AMOUNT, RENT_STATUS, TENANT_NAME, UNIT,
    UNIT_NUMBER, VENDOR,
};
use estate_core::{Notification, Priority, PropertyStore, RentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    AddUnit,
    EditUnit,
    AddRequest,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::AddUnit => "Add Unit",
            FormKind::EditUnit => "Edit Unit",
            FormKind::AddRequest => "New Maintenance Request",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Cycled with left/right instead of typed.
    Choice(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    fn choice(name: &'static str, label: &'static str, options: Vec<String>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(options),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEditor {
    pub kind: FormKind,
    pub focus: usize,
}

impl FormEditor {
    pub fn new(kind: FormKind) -> Self {
        Self { kind, focus: 0 }
    }

    pub fn fields(&self, store: &PropertyStore) -> Vec<FormField> {
        match self.kind {
            FormKind::AddUnit | FormKind::EditUnit => vec![
                FormField::choice(PROPERTY_NAME, "Property", store.property_names()),
                FormField::text(UNIT_NUMBER, "Unit #"),
                FormField::text(RENT_AMOUNT, "Rent"),
                FormField::text(TENANT_NAME, "Tenant"),
                FormField::choice(
                    RENT_STATUS,
                    "Rent Status",
                    RentStatus::all().iter().map(ToString::to_string).collect(),
                ),
                FormField::text(LEASE_END, "Lease End"),
            ],
            FormKind::AddRequest => {
                let mut vendors = vec![String::new()];
                vendors.extend(store.available_vendors().iter().cloned());
                vec![
                    FormField::choice(PROPERTY_NAME, "Property", store.property_names()),
                    FormField::text(UNIT, "Unit"),
                    FormField::text(DESCRIPTION, "Description"),
                    FormField::choice(
                        PRIORITY,
                        "Priority",
                        Priority::all().iter().map(ToString::to_string).collect(),
                    ),
                    FormField::choice(VENDOR, "Vendor", vendors),
                ]
            }
        }
    }

    pub fn value<'a>(&self, store: &'a PropertyStore, field: &str) -> &'a str {
        let value = match self.kind {
            FormKind::AddUnit => store.new_unit_draft().field(field),
            FormKind::EditUnit => store.edit_unit_draft().field(field),
            FormKind::AddRequest => store.new_request_draft().field(field),
        };
        value.unwrap_or_default()
    }

    fn set_value(&self, store: &mut PropertyStore, field: &str, value: String) {
        match self.kind {
            FormKind::AddUnit => store.set_new_unit_field(field, value),
            FormKind::EditUnit => store.set_edit_unit_field(field, value),
            FormKind::AddRequest => store.set_new_request_field(field, value),
        };
    }

    fn focused(&self, store: &PropertyStore) -> Option<FormField> {
        self.fields(store).into_iter().nth(self.focus)
    }

    pub fn next_field(&mut self, store: &PropertyStore) {
        let count = self.fields(store).len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn previous_field(&mut self, store: &PropertyStore) {
        let count = self.fields(store).len();
        if count > 0 {
            self.focus = if self.focus == 0 { count - 1 } else { self.focus - 1 };
        }
    }

    pub fn input_char(&self, store: &mut PropertyStore, c: char) {
        let Some(field) = self.focused(store) else {
            return;
        };
        if field.kind == FieldKind::Text {
            let mut value = self.value(store, field.name).to_string();
            value.push(c);
            self.set_value(store, field.name, value);
        }
    }

    pub fn backspace(&self, store: &mut PropertyStore) {
        let Some(field) = self.focused(store) else {
            return;
        };
        if field.kind == FieldKind::Text {
            let mut value = self.value(store, field.name).to_string();
            value.pop();
            self.set_value(store, field.name, value);
        }
    }

    /// Move a choice field to the next (or previous) option. A value not
    /// in the option list moves to the first option.
    pub fn cycle_choice(&self, store: &mut PropertyStore, forward: bool) {
        let Some(FormField {
            name,
            kind: FieldKind::Choice(options),
            ..
        }) = self.focused(store)
        else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.value(store, name);
        let next = match options.iter().position(|o| o == current) {
            None => 0,
            Some(i) if forward => (i + 1) % options.len(),
            Some(0) => options.len() - 1,
            Some(i) => i - 1,
        };
        self.set_value(store, name, options[next].clone());
    }

    pub fn submit(&self, store: &mut PropertyStore) -> Notification {
        match self.kind {
            FormKind::AddUnit => {
                let form = store.new_unit_draft().to_form_data();
                store.add_unit(&form)
            }
            FormKind::EditUnit => {
                let form = store.edit_unit_draft().to_form_data();
                store.update_unit(&form)
            }
            FormKind::AddRequest => {
                let form = store.new_request_draft().to_form_data();
                store.add_maintenance_request(&form)
            }
        }
    }

    pub fn cancel(&self, store: &mut PropertyStore) {
        match self.kind {
            FormKind::AddUnit => store.close_add_unit_form(),
            FormKind::EditUnit => store.close_edit_unit_form(),
            FormKind::AddRequest => {}
        }
    }

    /// Whether the store still considers this form's dialog open.
    pub fn is_open(&self, store: &PropertyStore) -> bool {
        match self.kind {
            FormKind::AddUnit => store.is_add_unit_form_open(),
            FormKind::EditUnit => store.is_edit_unit_form_open(),
            FormKind::AddRequest => true,
        }
    }
}
