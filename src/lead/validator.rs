use super::FieldInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    pub field: &'static str,
}

/// Checks `fields` in order and focuses the first one whose trimmed value is
/// empty. Fields after it are not read. Controls missing from the document are skipped.
pub fn validate_required<F: FieldInput>(fields: &[(&'static str, &F)]) -> Result<(), MissingField> {
    for &(name, field) in fields {
        let Some(value) = field.value() else {
            continue;
        };
        if value.trim().is_empty() {
            field.focus();
            return Err(MissingField { field: name });
        }
    }
    Ok(())
}
