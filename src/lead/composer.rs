use super::LeadRequest;

pub fn subject(lead: &LeadRequest) -> String {
    format!("Cleaning request – {}", lead.service)
}

/// Renders the lead as the plain-text message used for the mail fallback.
/// Every field appears exactly once, placeholders included.
pub fn compose_message(lead: &LeadRequest) -> String {
    format!(
        "Hello PrimaClean team,

I would like to request a cleaning.

Service: {service}
Frequency: {frequency}
Area: {area}
Start: {start}

Notes:
{notes}

Contact details:
Name: {name}
Phone: {phone}
Email: {email}

Kind regards
(sent from the website request form)",
        service = lead.service,
        frequency = lead.frequency,
        area = lead.area_size,
        start = lead.start_date,
        notes = lead.notes,
        name = lead.contact_name,
        phone = lead.contact_phone,
        email = lead.contact_email,
    )
}

#[cfg(test)]
mod tests {
    use super::super::{NO_NOTES_PLACEHOLDER, OPTIONAL_PLACEHOLDER};
    use super::*;

    fn lead() -> LeadRequest {
        LeadRequest {
            service: "Stairwell cleaning".to_string(),
            frequency: "Every two weeks".to_string(),
            area_size: "85 m²".to_string(),
            start_date: "2024-06-03".to_string(),
            notes: "Please ring twice".to_string(),
            contact_name: "Maria Beispiel".to_string(),
            contact_phone: "+49 391 555 12".to_string(),
            contact_email: "maria@beispiel.de".to_string(),
        }
    }

    #[test]
    fn every_value_appears_exactly_once() {
        let lead = lead();
        let message = compose_message(&lead);
        for value in [
            &lead.service,
            &lead.frequency,
            &lead.area_size,
            &lead.start_date,
            &lead.notes,
            &lead.contact_name,
            &lead.contact_phone,
            &lead.contact_email,
        ] {
            assert_eq!(message.matches(value.as_str()).count(), 1, "{}", value);
        }
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(compose_message(&lead()), compose_message(&lead()));
    }

    #[test]
    fn placeholders_show_up_for_missing_values() {
        let mut lead = lead();
        lead.area_size = OPTIONAL_PLACEHOLDER.to_string();
        lead.notes = NO_NOTES_PLACEHOLDER.to_string();
        lead.contact_email = OPTIONAL_PLACEHOLDER.to_string();

        let message = compose_message(&lead);
        assert!(message.contains("Area: (optional)\n"));
        assert!(message.contains("Notes:\n(no notes)\n"));
        assert!(message.ends_with("Email: (optional)\n\nKind regards\n(sent from the website request form)"));
    }

    #[test]
    fn subject_names_the_service() {
        assert_eq!(subject(&lead()), "Cleaning request – Stairwell cleaning");
    }
}
