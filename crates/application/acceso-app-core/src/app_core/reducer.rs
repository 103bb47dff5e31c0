use acceso_core::AuthState;

use super::events::FlowEvent;

pub fn reduce(state: AuthState, ev: FlowEvent) -> AuthState {
    match ev {
        FlowEvent::Started => AuthState::Loading,

        // Completion only counts for the attempt that is in flight.
        FlowEvent::Succeeded if state.is_loading() => AuthState::Success,
        FlowEvent::Failed { message } if state.is_loading() => AuthState::Error(message),
        FlowEvent::Succeeded | FlowEvent::Failed { .. } => state,

        FlowEvent::Rejected { message } => AuthState::Error(message),

        FlowEvent::Reset => AuthState::Idle,
    }
}
