pub mod commands;
pub mod settings;

use std::sync::Arc;

use acceso_app_core::{AuthProvider, BackendSettings, DocumentStore, HostedBackend};
use acceso_infra::MemoryBackend;
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliBackend {
    /// Hosted identity and document REST APIs
    Firebase,
    /// Throwaway in-process backend; nothing survives the command
    Memory,
}

/// The two capabilities a command runs its flow against.
#[derive(Clone)]
pub struct Ports {
    pub auth: Arc<dyn AuthProvider>,
    pub documents: Arc<dyn DocumentStore>,
}

impl Ports {
    pub fn connect(backend: CliBackend, settings: &BackendSettings) -> anyhow::Result<Self> {
        match backend {
            CliBackend::Firebase => {
                let hosted = HostedBackend::from_settings(settings)?;
                Ok(Self {
                    auth: hosted.identity,
                    documents: hosted.documents,
                })
            }
            CliBackend::Memory => {
                let memory = Arc::new(MemoryBackend::new());
                Ok(Self {
                    auth: memory.clone(),
                    documents: memory,
                })
            }
        }
    }
}
