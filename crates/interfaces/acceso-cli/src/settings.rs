use acceso_app_core::{BackendSettings, FilePersistence};
use anyhow::Result;

/// Values given on the command line; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub identity_endpoint: Option<String>,
    pub firestore_endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub rollback: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none()
            && self.project_id.is_none()
            && self.identity_endpoint.is_none()
            && self.firestore_endpoint.is_none()
            && self.timeout_secs.is_none()
            && self.rollback.is_none()
    }

    pub fn apply(self, settings: &mut BackendSettings) {
        if let Some(key) = self.api_key {
            settings.api_key = Some(key);
        }
        if let Some(project) = self.project_id {
            settings.project_id = Some(project);
        }
        if let Some(endpoint) = self.identity_endpoint {
            settings.identity_endpoint = endpoint;
        }
        if let Some(endpoint) = self.firestore_endpoint {
            settings.firestore_endpoint = endpoint;
        }
        if let Some(secs) = self.timeout_secs {
            settings.request_timeout_secs = acceso_config::clamp_timeout_secs(secs);
        }
        if let Some(rollback) = self.rollback {
            settings.rollback_orphaned_accounts = rollback;
        }
    }
}

fn masked(key: &Option<String>) -> String {
    match key.as_deref() {
        None | Some("") => "(not set)".to_string(),
        Some(k) => {
            let len = k.chars().count();
            if len <= 4 {
                return "****".to_string();
            }
            let tail: String = k.chars().skip(len - 4).collect();
            format!("****{tail}")
        }
    }
}

pub fn handle_show(persistence: &FilePersistence) -> Result<()> {
    let settings = persistence.load_settings()?;
    let path = persistence.settings_path()?;

    println!("Settings file:      {}", path.display());
    println!("API key:            {}", masked(&settings.api_key));
    println!(
        "Project id:         {}",
        settings.project_id.as_deref().unwrap_or("(not set)")
    );
    println!("Identity endpoint:  {}", settings.identity_endpoint);
    println!("Document endpoint:  {}", settings.firestore_endpoint);
    println!("Request timeout:    {}s", settings.request_timeout().as_secs());
    println!("Rollback orphans:   {}", settings.rollback_orphaned_accounts);
    Ok(())
}

pub fn handle_set(persistence: &FilePersistence, update: SettingsUpdate) -> Result<()> {
    if update.is_empty() {
        anyhow::bail!("Nothing to change (see `acceso settings set --help`)");
    }
    let mut settings = persistence.load_settings()?;
    update.apply(&mut settings);
    persistence.save_settings(&settings)?;
    println!(":: Saved settings to {}", persistence.settings_path()?.display());
    Ok(())
}
