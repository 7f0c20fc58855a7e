use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask for a fresh snapshot (host state for hosts, board for displays)
    RequestState,
    // Host-only messages
    /// Newline-separated prize names; blank lines are ignored
    HostSubmitPrizes {
        text: String,
    },
    /// Raw text from the people-count field
    HostSetPeople {
        count: String,
    },
    HostToggleExclusion {
        prize_id: PrizeId,
    },
    /// Move a prize to a 1-based position in the announcement order
    HostReorder {
        prize_id: PrizeId,
        position: usize,
    },
    HostStartSelection,
    HostSelectNumber {
        number: PrizeNumber,
    },
    HostDeselectNumber {
        number: PrizeNumber,
    },
    HostUpdateMemo {
        number: PrizeNumber,
        memo: String,
    },
    HostStartAnnouncement,
    HostAnnounce {
        prize_id: PrizeId,
    },
    HostUnannounce {
        prize_id: PrizeId,
    },
    /// Discard the whole draw; the UI confirms before sending this
    HostReset,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol: String,
        role: Role,
        server_now: String,
    },
    /// Full state, sent to operator clients only
    HostState {
        stage: Stage,
        number_of_people: u32,
        in_progress: bool,
        /// All records in display order, excluded ones included
        prizes: Vec<Prize>,
        progress: Progress,
        /// Why the next stage cannot be entered yet (None = ready)
        #[serde(skip_serializing_if = "Option::is_none")]
        blocked_reason: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        next_to_announce: Option<PrizeId>,
    },
    /// Public view for the projector: names stay hidden until announced
    Board {
        stage: Stage,
        entries: Vec<BoardEntry>,
        remaining_to_select: usize,
        remaining_to_announce: usize,
    },
    Error {
        code: String,
        msg: String,
    },
}

/// One cell of the public number grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardEntry {
    pub number: PrizeNumber,
    pub claimed: bool,
    pub announced: bool,
    /// Only present once the prize has been announced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_name: Option<String>,
}

impl BoardEntry {
    /// Public entry for a numbered prize; `None` for unnumbered records
    pub fn from_prize(p: &Prize) -> Option<Self> {
        let number = p.assigned_number?;
        Some(Self {
            number,
            claimed: p.selected,
            announced: p.announced,
            prize_name: p.announced.then(|| p.name.clone()),
        })
    }
}
