use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Node};
use yew::NodeRef;

use super::{LeadRequest, NO_NOTES_PLACEHOLDER, OPTIONAL_PLACEHOLDER, START_VIA_CONTACT_FORM};

/// A single form control as the lead flow sees it.
#[cfg_attr(test, mockall::automock)]
pub trait FieldInput {
    /// Current value, or `None` when the control is not in the document.
    fn value(&self) -> Option<String>;
    fn focus(&self);
}

impl FieldInput for NodeRef {
    fn value(&self) -> Option<String> {
        self.get().and_then(control_value)
    }

    fn focus(&self) {
        if let Some(element) = self.cast::<HtmlElement>() {
            let _ = element.focus();
        }
    }
}

/// Value of an input, select or textarea. Any other node has none.
fn control_value(node: Node) -> Option<String> {
    let node = match node.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Some(input.value()),
        Err(node) => node,
    };
    let node = match node.dyn_into::<HtmlSelectElement>() {
        Ok(select) => return Some(select.value()),
        Err(node) => node,
    };
    node.dyn_into::<HtmlTextAreaElement>().ok().map(|area| area.value())
}

/// References to the controls of one lead form. `area_size` and `start_date`
/// are `None` on forms that do not have those fields at all.
pub struct LeadFields<F> {
    pub service: F,
    pub frequency: F,
    pub area_size: Option<F>,
    pub start_date: Option<F>,
    pub notes: F,
    pub contact_name: F,
    pub contact_phone: F,
    pub contact_email: F,
}

impl<F: FieldInput> LeadFields<F> {
    /// Required fields in the order they are checked.
    pub fn required(&self) -> Vec<(&'static str, &F)> {
        let mut required = vec![("service", &self.service), ("frequency", &self.frequency)];
        if let Some(start) = &self.start_date {
            required.push(("start", start));
        }
        required.push(("name", &self.contact_name));
        required.push(("phone", &self.contact_phone));
        required
    }
}

fn raw<F: FieldInput>(field: &F) -> String {
    field.value().unwrap_or_default()
}

fn or_default<F: FieldInput>(field: Option<&F>, default: &str) -> String {
    field
        .and_then(|field| field.value())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads the form into a [`LeadRequest`]. Required values are passed through
/// untrimmed; optional ones fall back to their placeholders when absent or empty.
pub fn collect<F: FieldInput>(fields: &LeadFields<F>) -> LeadRequest {
    let start_date = match &fields.start_date {
        Some(start) => raw(start),
        None => START_VIA_CONTACT_FORM.to_string(),
    };

    LeadRequest {
        service: raw(&fields.service),
        frequency: raw(&fields.frequency),
        area_size: or_default(fields.area_size.as_ref(), OPTIONAL_PLACEHOLDER),
        start_date,
        notes: or_default(Some(&fields.notes), NO_NOTES_PLACEHOLDER),
        contact_name: raw(&fields.contact_name),
        contact_phone: raw(&fields.contact_phone),
        contact_email: or_default(Some(&fields.contact_email), OPTIONAL_PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn optional_fields_fall_back_to_placeholders() {
        let lead = collect(&scenario_a_fields());
        assert_eq!(lead.area_size, OPTIONAL_PLACEHOLDER);
        assert_eq!(lead.notes, NO_NOTES_PLACEHOLDER);
        assert_eq!(lead.contact_email, OPTIONAL_PLACEHOLDER);
    }

    #[test]
    fn required_values_are_not_trimmed() {
        let mut fields = scenario_a_fields();
        fields.service = TestField::with("  Window cleaning ");
        let lead = collect(&fields);
        assert_eq!(lead.service, "  Window cleaning ");
    }

    #[test]
    fn whitespace_optional_value_is_kept() {
        let mut fields = scenario_a_fields();
        fields.notes = TestField::with(" ");
        assert_eq!(collect(&fields).notes, " ");
    }

    #[test]
    fn absent_required_control_reads_as_empty() {
        let mut fields = scenario_a_fields();
        fields.start_date = Some(TestField::absent());
        assert_eq!(collect(&fields).start_date, "");
    }

    #[test]
    fn contact_form_without_start_field_uses_constant() {
        let mut fields = scenario_a_fields();
        fields.start_date = None;
        fields.area_size = None;
        let lead = collect(&fields);
        assert_eq!(lead.start_date, START_VIA_CONTACT_FORM);
        assert_eq!(lead.area_size, OPTIONAL_PLACEHOLDER);
    }

    #[test]
    fn collecting_twice_gives_the_same_lead() {
        let fields = scenario_a_fields();
        assert_eq!(collect(&fields), collect(&fields));
    }

    #[test]
    fn required_order_skips_missing_start() {
        let mut fields = scenario_a_fields();
        let names: Vec<_> = fields.required().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["service", "frequency", "start", "name", "phone"]);

        fields.start_date = None;
        let names: Vec<_> = fields.required().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["service", "frequency", "name", "phone"]);
    }
}
