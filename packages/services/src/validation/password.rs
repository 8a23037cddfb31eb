use std::fmt;

/// Ways a candidate password can fail the strength rules
#[derive(Debug)]
pub enum PasswordValidationError {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecialChar,
    CommonPassword,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordValidationError::TooShort => {
                write!(f, "Password must be at least 12 characters long")
            }
            PasswordValidationError::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            PasswordValidationError::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            PasswordValidationError::MissingDigit => {
                write!(f, "Password must contain at least one digit")
            }
            PasswordValidationError::MissingSpecialChar => {
                write!(f, "Password must contain at least one special character")
            }
            PasswordValidationError::CommonPassword => {
                write!(f, "Password is too common and easily guessable")
            }
        }
    }
}

const COMMON_PASSWORDS: [&str; 3] = ["Password123!", "Qwerty123!", "Admin123!"];

/// Validates a password against the registration strength rules
pub fn validate_password(password: &str) -> Result<(), PasswordValidationError> {
    if password.len() < 12 {
        return Err(PasswordValidationError::TooShort);
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(PasswordValidationError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(PasswordValidationError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_numeric()) {
        return Err(PasswordValidationError::MissingDigit);
    }

    if password.chars().all(|c| c.is_alphanumeric()) {
        return Err(PasswordValidationError::MissingSpecialChar);
    }

    if COMMON_PASSWORDS.contains(&password) {
        return Err(PasswordValidationError::CommonPassword);
    }

    Ok(())
}
