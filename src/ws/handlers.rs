//! WebSocket message dispatch
//!
//! This module provides the main entry point for handling client messages.
//! Authorization is checked here, then dispatched to the host handler module.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use crate::types::Role;
use std::sync::Arc;

use super::host;

/// Macro to check host authorization and return early if unauthorized
macro_rules! check_host {
    ($role:expr, $action:expr) => {
        if *$role != Role::Host {
            return Some(ServerMessage::Error {
                code: "UNAUTHORIZED".to_string(),
                msg: format!("Only host can {}", $action),
            });
        }
    };
}

/// Handle client messages and return optional response
pub async fn handle_message(
    msg: ClientMessage,
    role: &Role,
    state: &Arc<AppState>,
) -> Option<ServerMessage> {
    match msg {
        ClientMessage::RequestState => match role {
            Role::Host => Some(state.host_state().await),
            Role::Beamer => Some(state.board().await),
        },

        // Host-only commands (authorization checked before dispatch)
        ClientMessage::HostSubmitPrizes { text } => {
            check_host!(role, "enter prizes");
            host::handle_submit_prizes(state, text).await
        }

        ClientMessage::HostSetPeople { count } => {
            check_host!(role, "set the number of people");
            host::handle_set_people(state, count).await
        }

        ClientMessage::HostToggleExclusion { prize_id } => {
            check_host!(role, "exclude prizes");
            host::handle_toggle_exclusion(state, prize_id).await
        }

        ClientMessage::HostReorder { prize_id, position } => {
            check_host!(role, "reorder prizes");
            host::handle_reorder(state, prize_id, position).await
        }

        ClientMessage::HostStartSelection => {
            check_host!(role, "assign numbers");
            host::handle_start_selection(state).await
        }

        ClientMessage::HostSelectNumber { number } => {
            check_host!(role, "select numbers");
            host::handle_select_number(state, number).await
        }

        ClientMessage::HostDeselectNumber { number } => {
            check_host!(role, "deselect numbers");
            host::handle_deselect_number(state, number).await
        }

        ClientMessage::HostUpdateMemo { number, memo } => {
            check_host!(role, "edit memos");
            host::handle_update_memo(state, number, memo).await
        }

        ClientMessage::HostStartAnnouncement => {
            check_host!(role, "start the announcement");
            host::handle_start_announcement(state).await
        }

        ClientMessage::HostAnnounce { prize_id } => {
            check_host!(role, "announce prizes");
            host::handle_announce(state, prize_id).await
        }

        ClientMessage::HostUnannounce { prize_id } => {
            check_host!(role, "retract announcements");
            host::handle_unannounce(state, prize_id).await
        }

        ClientMessage::HostReset => {
            check_host!(role, "reset the draw");
            host::handle_reset(state).await
        }
    }
}
