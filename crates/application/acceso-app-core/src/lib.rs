pub mod app_core;
pub mod backend;
pub mod domain;
pub mod login;
pub mod persistence;
pub mod ports;
pub mod register;
pub mod viewmodel;

pub use app_core::*;
pub use backend::HostedBackend;
pub use domain::{BackendSettings, RegisterOptions, Submission};
pub use login::LoginFlow;
pub use persistence::FilePersistence;
pub use ports::*;
pub use register::RegisterFlow;
pub use viewmodel::*;
