use acceso_core::{is_blank, AuthState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginScreenVm {
    pub can_submit: bool,
    pub show_spinner: bool,
    /// Cleared on `Idle` and `Loading`.
    pub error_text: Option<String>,
    pub navigate_home: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterScreenVm {
    pub can_submit: bool,
    pub show_spinner: bool,
    pub error_text: Option<String>,
    pub navigate_home: bool,
}

pub fn login_screen_vm(state: &AuthState, email: &str, password: &str) -> LoginScreenVm {
    LoginScreenVm {
        can_submit: !state.is_loading() && !is_blank(email) && !is_blank(password),
        show_spinner: state.is_loading(),
        error_text: state.error_message().map(str::to_string),
        navigate_home: state.is_success(),
    }
}

// Registration validates inside the flow, so the button stays enabled.
pub fn register_screen_vm(state: &AuthState) -> RegisterScreenVm {
    RegisterScreenVm {
        can_submit: !state.is_loading(),
        show_spinner: state.is_loading(),
        error_text: state.error_message().map(str::to_string),
        navigate_home: state.is_success(),
    }
}
