use super::input_validator::{ValidationErrors, ValidationErrorsExt};
use super::password::validate_password;

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
        if email.trim().is_empty() {
            errors.add_error("email", "Email cannot be empty".to_string());
            return;
        }

        if !email.contains('@') || !email.contains('.') {
            errors.add_error("email", "Email format is invalid".to_string());
        }
    }

    pub fn validate_password_field(password: &str, field_name: &str, errors: &mut ValidationErrors) {
        if password.trim().is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", field_name));
            return;
        }

        if let Err(password_error) = validate_password(password) {
            errors.add_error(field_name, password_error.to_string());
        }
    }

    pub fn validate_required_string(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if value.trim().is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", field_name));
        }
    }

    pub fn validate_max_length(
        value: &str,
        field_name: &str,
        max: usize,
        errors: &mut ValidationErrors,
    ) {
        if value.chars().count() > max {
            errors.add_error(
                field_name,
                format!("{} must be at most {} characters", field_name, max),
            );
        }
    }

    pub fn validate_passwords_match(password: &str, confirmation: &str, errors: &mut ValidationErrors) {
        if password != confirmation {
            errors.add_error("password2", "Passwords do not match".to_string());
        }
    }

    pub fn validate_date(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            errors.add_error(
                field_name,
                format!("{} must be a date in YYYY-MM-DD form", field_name),
            );
        }
    }
}
