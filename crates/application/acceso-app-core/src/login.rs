use std::sync::Arc;

use acceso_core::{AuthState, FlowError, LoginCredentials};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::app_core::{FlowEvent, StateStore};
use crate::domain::Submission;
use crate::ports::AuthProvider;

/// Sign-in for an existing account.
///
/// The flow does not validate; the login screen only enables submission once
/// both fields are filled in (see [`crate::viewmodel::login_screen_vm`]).
pub struct LoginFlow<A: ?Sized> {
    store: StateStore,
    auth: Arc<A>,
}

impl<A> LoginFlow<A>
where
    A: AuthProvider + ?Sized,
{
    pub fn new(auth: Arc<A>) -> Self {
        Self {
            store: StateStore::default(),
            auth,
        }
    }

    pub fn state(&self) -> AuthState {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.store.subscribe()
    }

    /// Returns the flow to `Idle`. No effect while an attempt is in flight.
    pub fn reset(&self) {
        self.store.apply_unless_loading(FlowEvent::Reset);
    }

    pub async fn submit(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Submission {
        let creds = LoginCredentials::new(email, password);

        if !self.store.apply_unless_loading(FlowEvent::Started) {
            debug!("sign-in already in flight, ignoring submit");
            return Submission::Ignored;
        }
        info!(email = %creds.email, "signing in");

        match self.auth.sign_in(&creds.email, &creds.password).await {
            Ok(user_id) => {
                info!(%user_id, "signed in");
                self.store.apply(FlowEvent::Succeeded);
            }
            Err(e) => {
                let err = FlowError::SignIn(e);
                warn!(email = %creds.email, "{err}");
                self.store.apply(FlowEvent::Failed {
                    message: err.user_message(),
                });
            }
        }

        Submission::Finished(self.store.state())
    }
}
