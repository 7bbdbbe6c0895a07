//! Lead submission flow shared by the home and contact forms.
//!
//! Collector → Validator → Composer → Dispatcher. The browser is only reached
//! through the [`FieldInput`], [`DispatchSurface`] and [`LeadTransport`]
//! traits, so the whole pipeline runs in plain unit tests.

pub mod collector;
pub mod composer;
pub mod dispatcher;
pub mod transport;
pub mod validator;

use log::debug;
use serde::Serialize;

pub use collector::{FieldInput, LeadFields};
pub use dispatcher::DispatchSurface;
pub use transport::LeadTransport;

pub const OPTIONAL_PLACEHOLDER: &str = "(optional)";
pub const NO_NOTES_PLACEHOLDER: &str = "(no notes)";
pub const START_VIA_CONTACT_FORM: &str = "(via contact form)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    pub service: String,
    pub frequency: String,
    pub area_size: String,
    pub start_date: String,
    pub notes: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// The two forms on the site. They share the pipeline and differ in which
/// fields exist and in the element ids those fields carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    Home,
    Contact,
}

impl FormVariant {
    pub fn form_id(self) -> &'static str {
        match self {
            FormVariant::Home => "leadForm",
            FormVariant::Contact => "contactForm",
        }
    }

    /// Element id for a logical field name, e.g. `name` → `c_name` on the contact form.
    pub fn field_id(self, field: &str) -> String {
        match self {
            FormVariant::Home => field.to_string(),
            FormVariant::Contact => format!("c_{}", field),
        }
    }

    pub fn has_area_field(self) -> bool {
        matches!(self, FormVariant::Home)
    }

    pub fn has_start_field(self) -> bool {
        matches!(self, FormVariant::Home)
    }
}

/// Checks the required fields and reads the form. Runs synchronously so a
/// blank field is rejected before anything is marked as sending.
pub fn prepare_lead<F: FieldInput>(
    variant: FormVariant,
    fields: &LeadFields<F>,
) -> Result<LeadRequest, validator::MissingField> {
    if let Err(invalid) = validator::validate_required(&fields.required()) {
        debug!("{} form: required field '{}' is empty", variant.form_id(), invalid.field);
        return Err(invalid);
    }
    Ok(collector::collect(fields))
}
