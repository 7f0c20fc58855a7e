use serde::{Deserialize, Serialize};

/// Opaque ID type for prize records (ULID string, never reused)
pub type PrizeId = String;

/// Redemption number handed to a winner (1-based)
pub type PrizeNumber = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    PrizeInput,
    PeopleInput,
    SelectNumber,
    Announce,
}

impl Stage {
    /// The stage a successful forward transition leads to
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::PrizeInput => Some(Stage::PeopleInput),
            Stage::PeopleInput => Some(Stage::SelectNumber),
            Stage::SelectNumber => Some(Stage::Announce),
            Stage::Announce => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prize {
    pub id: PrizeId,
    pub name: String,
    pub assigned_number: Option<PrizeNumber>,
    pub display_order: u32,
    pub selected: bool,
    pub announced: bool,
    pub excluded: bool,
    pub memo: String,
}

impl Prize {
    pub(crate) fn new(name: String, display_order: u32) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            name,
            assigned_number: None,
            display_order,
            selected: false,
            announced: false,
            excluded: false,
            memo: String::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.excluded
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Host,
    Beamer,
}

/// Counters shown to the operator while the draw runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub active: usize,
    pub excluded: usize,
    pub selected: usize,
    pub announced: usize,
    pub remaining_to_select: usize,
    pub remaining_to_announce: usize,
}
