//! User-facing strings rendered by the screens when a flow lands in `Error`.

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const EMAIL_IN_USE: &str = "Email already in use.";
pub const REGISTRATION_FAILED: &str = "Registration failed, try again.";
pub const LOGIN_FAILED: &str = "Login failed. Check your email and password.";
