use crate::protocol::{BoardEntry, ServerMessage};
use crate::state::{ordering, AppState, StageController};
use rand::Rng;

/// Full operator snapshot of a controller
pub fn host_state<R: Rng>(controller: &StageController<R>) -> ServerMessage {
    let registry = controller.registry();
    ServerMessage::HostState {
        stage: controller.stage(),
        number_of_people: controller.number_of_people(),
        in_progress: controller.in_progress(),
        prizes: registry.prizes().to_vec(),
        progress: registry.progress(),
        blocked_reason: controller.check_advance().err().map(|g| g.to_string()),
        next_to_announce: ordering::next_to_announce(registry).map(|p| p.id.clone()),
    }
}

/// Public board of a controller, in number order
pub fn board<R: Rng>(controller: &StageController<R>) -> ServerMessage {
    let registry = controller.registry();
    ServerMessage::Board {
        stage: controller.stage(),
        entries: ordering::by_assigned_number(registry)
            .into_iter()
            .filter_map(BoardEntry::from_prize)
            .collect(),
        remaining_to_select: registry.remaining_to_select(),
        remaining_to_announce: registry.remaining_to_announce(),
    }
}

/// Host and board snapshots of the same controller state
pub fn snapshots<R: Rng>(controller: &StageController<R>) -> (ServerMessage, ServerMessage) {
    (host_state(controller), board(controller))
}

impl AppState {
    pub async fn host_state(&self) -> ServerMessage {
        host_state(&*self.controller.read().await)
    }

    pub async fn board(&self) -> ServerMessage {
        board(&*self.controller.read().await)
    }

    /// Send a message to every connected client
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        // No receivers connected is fine
        let _ = self.broadcast.send(msg);
    }

    /// Send a message to operator clients only
    pub fn broadcast_to_host(&self, msg: ServerMessage) {
        let _ = self.host_broadcast.send(msg);
    }

    /// Send snapshots taken by the caller to both channels
    pub fn publish_snapshots(&self, host: ServerMessage, public: ServerMessage) {
        self.broadcast_to_host(host);
        self.broadcast_to_all(public);
    }
}
