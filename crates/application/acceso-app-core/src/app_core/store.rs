use acceso_core::AuthState;
use tokio::sync::watch;

use super::{events::FlowEvent, reducer::reduce};

/// Single-writer state cell for one flow. Readers subscribe and only observe.
pub struct StateStore {
    tx: watch::Sender<AuthState>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(AuthState::Idle)
    }
}

impl StateStore {
    pub fn new(state: AuthState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    pub fn state(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }

    pub fn apply(&self, ev: FlowEvent) {
        self.tx.send_modify(|state| {
            *state = reduce(state.clone(), ev);
        });
    }

    /// Applies `ev` unless an attempt is already in flight. The check and the
    /// write happen under the channel lock, so two racing submits cannot both win.
    pub fn apply_unless_loading(&self, ev: FlowEvent) -> bool {
        self.tx.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = reduce(state.clone(), ev);
            true
        })
    }
}
