use acceso_config::MIN_PASSWORD_LEN;

use crate::{Registration, ValidationError};

/// Empty once surrounding whitespace is removed.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Checks a registration form. Rules run in order and the first failure wins:
/// required fields, confirmation match, then minimum length.
pub fn validate_registration(reg: &Registration) -> Result<(), ValidationError> {
    if is_blank(&reg.name) || is_blank(&reg.email) || is_blank(&reg.password) {
        return Err(ValidationError::MissingFields);
    }
    if reg.password != reg.password_confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    if reg.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
