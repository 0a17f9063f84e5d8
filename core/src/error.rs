use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must have at least one cell per side")]
    EmptyGrid,
    #[error("Too many hazards: {hazards} requested but the grid only has {cells} cells")]
    TooManyHazards { hazards: CellCount, cells: CellCount },
    #[error("Hazard mask is not a square grid")]
    InvalidLayoutShape,
    #[error("Position ({row}, {col}) is outside the {dim_size}x{dim_size} grid")]
    OutOfBounds { row: Coord, col: Coord, dim_size: Coord },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether the error was raised while building a game rather than while playing one.
    pub const fn is_configuration(self) -> bool {
        matches!(
            self,
            Self::EmptyGrid | Self::TooManyHazards { .. } | Self::InvalidLayoutShape
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
