use serde::{Deserialize, Serialize};

/// What a cell actually holds, fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellContent {
    Hazard,
    /// Safe cell with the number of hazards among its neighbors, in `0..=8`.
    Safe(u8),
}

impl CellContent {
    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Hazard)
    }

    /// Safe cell with no adjacent hazards, revealing one opens its whole region.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Safe(0))
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Hazard => None,
            Self::Safe(count) => Some(count),
        }
    }
}

/// Player-visible state of a cell, as exposed by snapshots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Hazard,
    Count(u8),
}

impl VisibleCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for VisibleCell {
    fn default() -> Self {
        Self::Hidden
    }
}

impl From<CellContent> for VisibleCell {
    fn from(content: CellContent) -> Self {
        match content {
            CellContent::Hazard => Self::Hazard,
            CellContent::Safe(count) => Self::Count(count),
        }
    }
}
