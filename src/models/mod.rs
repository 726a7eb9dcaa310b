mod auth;
mod employee;
mod tea_batch;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, Role};
pub use employee::{Employee, EmployeeDraft};
pub use tea_batch::{TeaBatch, TeaBatchDraft, TeaBatchPayload};

use std::collections::HashMap;

use serde::Serialize;

/// Field-level validation errors, keyed by wire field name ("hireDate",
/// "weightInKg", ...). Local to the form/edit boundary; never sent anywhere.
pub type FieldErrors = HashMap<&'static str, String>;

/// A committed record as returned by the server. `id` is server-assigned and
/// immutable; drafts (the editable/creatable shape) never carry it.
pub trait Record: Clone + PartialEq + std::fmt::Debug + 'static {
    type Draft: RecordDraft;

    fn id(&self) -> i64;

    /// Snapshot into an editable draft (for the inline-edit state machine).
    fn to_draft(&self) -> Self::Draft;

    /// Lowercase singular name for log lines and toast messages.
    fn resource_name() -> &'static str;
}

/// A record-in-progress: all fields held as the strings the inputs produce.
/// Conversion to the typed wire payload happens only after validation.
pub trait RecordDraft: Clone + PartialEq + Default + std::fmt::Debug + 'static {
    type Payload: Serialize;

    /// Set one field by wire name. Unknown fields are rejected - record shapes
    /// are explicit schemas, not open maps.
    fn apply_field(&mut self, field: &str, value: &str) -> Result<(), String>;

    /// Required/format checks. Empty map means the draft is submittable.
    fn validate(&self) -> FieldErrors;

    /// Typed wire payload, without `id`. Fails when a field cannot be
    /// represented (e.g. a weight that does not parse as a number).
    fn to_payload(&self) -> Result<Self::Payload, String>;
}

pub(crate) fn require(field: &'static str, value: &str, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", field_label(field)));
    }
}

pub(crate) fn require_date(field: &'static str, value: &str, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", field_label(field)));
    } else if chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err() {
        errors.insert(field, format!("{} must be a date (YYYY-MM-DD)", field_label(field)));
    }
}

fn field_label(field: &'static str) -> &'static str {
    match field {
        "name" => "Name",
        "position" => "Position",
        "hireDate" => "Hire Date",
        "teaType" => "Tea Type",
        "weightInKg" => "Weight",
        "arrivalDate" => "Arrival Date",
        "processingStage" => "Processing Stage",
        other => other,
    }
}
