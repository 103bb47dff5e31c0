use std::sync::Arc;

use acceso_config::USERS_COLLECTION;
use acceso_core::{validate_registration, AuthState, FlowError, Registration, UserId, UserProfile};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::app_core::{FlowEvent, StateStore};
use crate::domain::{RegisterOptions, Submission};
use crate::ports::{AuthProvider, DocumentStore};

/// Account creation followed by the profile document write.
pub struct RegisterFlow<A: ?Sized, D: ?Sized> {
    store: StateStore,
    auth: Arc<A>,
    documents: Arc<D>,
    options: RegisterOptions,
}

impl<A, D> RegisterFlow<A, D>
where
    A: AuthProvider + ?Sized,
    D: DocumentStore + ?Sized,
{
    pub fn new(auth: Arc<A>, documents: Arc<D>) -> Self {
        Self::with_options(auth, documents, RegisterOptions::default())
    }

    pub fn with_options(auth: Arc<A>, documents: Arc<D>, options: RegisterOptions) -> Self {
        Self {
            store: StateStore::default(),
            auth,
            documents,
            options,
        }
    }

    pub fn state(&self) -> AuthState {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.store.subscribe()
    }

    pub fn reset(&self) {
        self.store.apply_unless_loading(FlowEvent::Reset);
    }

    pub async fn submit(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Submission {
        self.submit_form(Registration::new(
            name,
            email,
            password,
            password_confirmation,
        ))
        .await
    }

    /// Validation failures go straight to `Error` without passing through `Loading`.
    pub async fn submit_form(&self, form: Registration) -> Submission {
        if let Err(e) = validate_registration(&form) {
            debug!(reason = %e, "registration rejected locally");
            let rejected = FlowEvent::Rejected {
                message: FlowError::from(e).user_message(),
            };
            if !self.store.apply_unless_loading(rejected) {
                debug!("registration already in flight, ignoring submit");
                return Submission::Ignored;
            }
            return Submission::Finished(self.store.state());
        }

        if !self.store.apply_unless_loading(FlowEvent::Started) {
            debug!("registration already in flight, ignoring submit");
            return Submission::Ignored;
        }
        info!(email = %form.email, "registering account");

        match self.register(&form).await {
            Ok(user_id) => {
                info!(%user_id, "account registered");
                self.store.apply(FlowEvent::Succeeded);
            }
            Err(err) => {
                warn!(email = %form.email, "{err}");
                self.store.apply(FlowEvent::Failed {
                    message: err.user_message(),
                });
            }
        }

        Submission::Finished(self.store.state())
    }

    async fn register(&self, form: &Registration) -> Result<UserId, FlowError> {
        let user_id = self
            .auth
            .create_account(&form.email, &form.password)
            .await
            .map_err(FlowError::CreateAccount)?
            .filter(UserId::is_usable)
            .ok_or(FlowError::MissingUserId)?;

        let profile = UserProfile::from_registration(form);
        if let Err(e) = self
            .documents
            .put(USERS_COLLECTION, &user_id, &profile.to_fields())
            .await
        {
            self.rollback(&user_id).await;
            return Err(FlowError::ProfileWrite(e));
        }

        Ok(user_id)
    }

    /// Best effort: the user sees the same message whether or not this works.
    async fn rollback(&self, user_id: &UserId) {
        if !self.options.rollback_orphaned_accounts {
            warn!(%user_id, "profile write failed, account left without profile");
            return;
        }
        match self.auth.delete_account(user_id).await {
            Ok(()) => info!(%user_id, "rolled back account after profile write failure"),
            Err(e) => error!(%user_id, "account left without profile, rollback failed: {e}"),
        }
    }
}
