use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only, player-visible view of a board, for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub dim_size: Coord,
    pub cells: Array2<VisibleCell>,
}

impl Snapshot {
    /// Only revealed cells show their content, everything else is [`VisibleCell::Hidden`].
    pub fn from_engine(engine: &RevealEngine) -> Self {
        Self::build(engine, |pos| engine.is_revealed(pos))
    }

    /// Every cell uncovered, regardless of what the player revealed. Meant for the end of a game.
    pub fn uncovered(engine: &RevealEngine) -> Self {
        Self::build(engine, |_| true)
    }

    fn build(engine: &RevealEngine, show: impl Fn(Position) -> bool) -> Self {
        let dim_size = engine.dim_size();
        let side = usize::from(dim_size);
        let cells = Array2::from_shape_fn((side, side), |(row, col)| {
            let pos = (row as Coord, col as Coord);
            if show(pos) {
                engine.content_at(pos).into()
            } else {
                VisibleCell::Hidden
            }
        });

        Self { dim_size, cells }
    }

    pub fn cell(&self, pos: Position) -> Option<VisibleCell> {
        self.cells.get(pos.to_nd_index()).copied()
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = VisibleCell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl Index<Position> for Snapshot {
    type Output = VisibleCell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}
