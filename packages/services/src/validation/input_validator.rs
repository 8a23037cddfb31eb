use std::collections::BTreeMap;

/// Field name to error messages. A BTreeMap keeps the field order stable in
/// responses.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for accumulating validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn merge(&mut self, other: ValidationErrors);
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string()).or_default().push(message);
    }

    fn merge(&mut self, other: ValidationErrors) {
        for (field, mut errors) in other {
            self.entry(field).or_default().append(&mut errors);
        }
    }
}
