use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use counts::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod counts;
mod engine;
mod error;
mod game;
mod generator;
mod snapshot;
mod tile;
mod types;

/// Side length and hazard count of a square grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dim_size: Coord,
    pub hazard_count: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(dim_size: Coord, hazard_count: CellCount) -> Self {
        Self {
            dim_size,
            hazard_count,
        }
    }

    pub fn new(dim_size: Coord, hazard_count: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(dim_size, hazard_count);
        config.validate()?;
        Ok(config)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(24, 99)
    }

    /// At least one safe cell must remain, a board covered in hazards can't be played.
    pub fn validate(&self) -> Result<()> {
        if self.dim_size == 0 {
            return Err(GameError::EmptyGrid);
        }

        let cells = self.total_cells();
        if self.hazard_count >= cells {
            return Err(GameError::TooManyHazards {
                hazards: self.hazard_count,
                cells,
            });
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.dim_size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.hazard_count)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10)
    }
}

/// Where the hazards are. Built once per game and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct HazardLayout {
    hazard_mask: Array2<bool>,
    hazard_count: CellCount,
}

impl HazardLayout {
    pub fn from_hazard_mask(hazard_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = hazard_mask.dim();
        if rows != cols {
            return Err(GameError::InvalidLayoutShape);
        }
        let dim_size: Coord = rows
            .try_into()
            .map_err(|_| GameError::InvalidLayoutShape)?;

        // bounded by the cell count of a `Coord`-sided grid
        let hazard_count = hazard_mask.iter().filter(|&&is_hazard| is_hazard).count() as CellCount;
        GameConfig::new(dim_size, hazard_count)?;

        Ok(Self::from_validated_mask(hazard_mask, hazard_count))
    }

    pub fn from_hazard_positions(dim_size: Coord, positions: &[Position]) -> Result<Self> {
        if dim_size == 0 {
            return Err(GameError::EmptyGrid);
        }

        let side = usize::from(dim_size);
        let mut hazard_mask = Array2::from_elem((side, side), false);
        for &pos in positions {
            let (row, col) = pos;
            if row >= dim_size || col >= dim_size {
                return Err(GameError::OutOfBounds { row, col, dim_size });
            }
            hazard_mask[pos.to_nd_index()] = true;
        }

        let layout = Self::from_hazard_mask(hazard_mask)?;
        if layout.hazard_count as usize != positions.len() {
            log::warn!(
                "Duplicated hazard positions collapsed, requested {} but placed {}",
                positions.len(),
                layout.hazard_count
            );
        }
        Ok(layout)
    }

    /// Callers guarantee the mask is square and `hazard_count` matches it.
    pub(crate) fn from_validated_mask(hazard_mask: Array2<bool>, hazard_count: CellCount) -> Self {
        Self {
            hazard_mask,
            hazard_count,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.dim_size(), self.hazard_count)
    }

    pub fn validate_position(&self, pos: Position) -> Result<Position> {
        let dim_size = self.dim_size();
        let (row, col) = pos;
        if row < dim_size && col < dim_size {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds { row, col, dim_size })
        }
    }

    pub fn dim_size(&self) -> Coord {
        self.hazard_mask.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.dim_size())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hazard_count
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn contains_hazard(&self, pos: Position) -> bool {
        self[pos]
    }

    pub fn hazard_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.hazard_mask
            .indexed_iter()
            .filter(|&(_, &is_hazard)| is_hazard)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn adjacent_hazard_count(&self, pos: Position) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(pos).filter(|&other| self[other]).count() as u8
    }

    pub fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        self.hazard_mask.iter_neighbors(pos)
    }
}

impl Index<Position> for HazardLayout {
    type Output = bool;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.hazard_mask[pos.to_nd_index()]
    }
}

impl TryFrom<Array2<bool>> for HazardLayout {
    type Error = GameError;

    fn try_from(hazard_mask: Array2<bool>) -> Result<Self> {
        Self::from_hazard_mask(hazard_mask)
    }
}

impl From<HazardLayout> for Array2<bool> {
    fn from(layout: HazardLayout) -> Self {
        layout.hazard_mask
    }
}

/// Outcome of a single reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continue,
    Won,
    Lost,
}

impl RevealOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
