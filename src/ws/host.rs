//! Host-only command handlers
//!
//! All handlers in this module require the Host role.
//! Authorization is checked in the main dispatch layer before calling these.

use crate::broadcast::snapshots;
use crate::error::DrawResult;
use crate::input::{parse_people_count, parse_prize_text};
use crate::protocol::ServerMessage;
use crate::state::{AppState, StageController};
use crate::types::PrizeNumber;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Run one mutation under the write lock and publish the state it produced.
///
/// Snapshots are taken before the lock is released, so the reply and the
/// broadcasts show exactly this mutation. On failure the operator gets an
/// error and nothing is published.
async fn apply<T>(
    state: &Arc<AppState>,
    action: &str,
    op: impl FnOnce(&mut StageController<StdRng>) -> DrawResult<T>,
) -> Option<ServerMessage> {
    let result = {
        let mut controller = state.controller.write().await;
        op(&mut *controller).map(|_| snapshots(&*controller))
    };

    match result {
        Ok((host, public)) => {
            state.publish_snapshots(host.clone(), public);
            Some(host)
        }
        Err(e) => {
            tracing::warn!("Host {} rejected: {}", action, e);
            Some(ServerMessage::Error {
                code: e.code().to_string(),
                msg: e.to_string(),
            })
        }
    }
}

pub async fn handle_submit_prizes(state: &Arc<AppState>, text: String) -> Option<ServerMessage> {
    let names = parse_prize_text(&text);
    tracing::info!("Host submitting {} prize names", names.len());
    apply(state, "submit prizes", |c| c.submit_prizes(&names)).await
}

pub async fn handle_set_people(state: &Arc<AppState>, count: String) -> Option<ServerMessage> {
    tracing::info!("Host setting number of people: {:?}", count);
    apply(state, "set people", |c| {
        let count = parse_people_count(&count)?;
        c.set_number_of_people(count)
    })
    .await
}

pub async fn handle_toggle_exclusion(
    state: &Arc<AppState>,
    prize_id: String,
) -> Option<ServerMessage> {
    tracing::info!("Host toggling exclusion of prize {}", prize_id);
    apply(state, "toggle exclusion", |c| c.toggle_exclusion(&prize_id)).await
}

pub async fn handle_reorder(
    state: &Arc<AppState>,
    prize_id: String,
    position: usize,
) -> Option<ServerMessage> {
    tracing::info!("Host moving prize {} to position {}", prize_id, position);
    apply(state, "reorder", |c| c.reorder(&prize_id, position)).await
}

pub async fn handle_start_selection(state: &Arc<AppState>) -> Option<ServerMessage> {
    tracing::info!("Host assigning redemption numbers");
    apply(state, "start selection", |c| c.start_selection()).await
}

pub async fn handle_select_number(
    state: &Arc<AppState>,
    number: PrizeNumber,
) -> Option<ServerMessage> {
    tracing::info!("Host marking number {} as claimed", number);
    apply(state, "select number", |c| {
        if !c.select(number)? {
            tracing::debug!("Number {} was already claimed", number);
        }
        Ok(())
    })
    .await
}

pub async fn handle_deselect_number(
    state: &Arc<AppState>,
    number: PrizeNumber,
) -> Option<ServerMessage> {
    tracing::info!("Host releasing number {}", number);
    apply(state, "deselect number", |c| c.deselect(number)).await
}

pub async fn handle_update_memo(
    state: &Arc<AppState>,
    number: PrizeNumber,
    memo: String,
) -> Option<ServerMessage> {
    tracing::debug!("Host updating memo for number {}", number);
    apply(state, "update memo", |c| c.update_memo(number, memo)).await
}

pub async fn handle_start_announcement(state: &Arc<AppState>) -> Option<ServerMessage> {
    tracing::info!("Host starting announcement");
    apply(state, "start announcement", |c| c.start_announcement()).await
}

pub async fn handle_announce(state: &Arc<AppState>, prize_id: String) -> Option<ServerMessage> {
    tracing::info!("Host announcing prize {}", prize_id);
    apply(state, "announce", |c| c.announce(&prize_id)).await
}

pub async fn handle_unannounce(state: &Arc<AppState>, prize_id: String) -> Option<ServerMessage> {
    tracing::info!("Host retracting announcement of prize {}", prize_id);
    apply(state, "unannounce", |c| c.unannounce(&prize_id)).await
}

pub async fn handle_reset(state: &Arc<AppState>) -> Option<ServerMessage> {
    tracing::info!("Host resetting draw");
    apply(state, "reset", |c| {
        c.reset();
        Ok(())
    })
    .await
}
