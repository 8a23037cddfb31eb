use std::collections::BTreeMap;
use std::fmt;

/// A mapping of field names to their validation error messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A validation failure raised while preparing a row for persistence
#[derive(Debug, Default)]
pub struct ValidationError {
    pub errors: FieldErrors,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        let mut err = Self::default();
        err.add(field, message);
        err
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Comma-separated list of every message, for flat error strings
    pub fn to_string_list(&self) -> String {
        self.errors
            .values()
            .flatten()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

/// Trait for validating ActiveModel instances before they hit the database
pub trait ActiveModelValidator {
    fn validate(&self) -> Result<(), ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
