use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl From<GameState> for RevealOutcome {
    fn from(state: GameState) -> Self {
        match state {
            GameState::InProgress => Self::Continue,
            GameState::Won => Self::Won,
            GameState::Lost => Self::Lost,
        }
    }
}

/// A cell uncovered by a reveal, together with what it turned out to hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealedCell {
    pub pos: Position,
    pub content: CellContent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    /// Cells uncovered by this call, in the order they were opened; the requested cell comes first.
    pub newly_revealed: Vec<RevealedCell>,
}

impl RevealResult {
    fn unchanged() -> Self {
        Self {
            outcome: RevealOutcome::Continue,
            newly_revealed: Vec::new(),
        }
    }

    pub fn has_update(&self) -> bool {
        !self.newly_revealed.is_empty()
    }
}

/// Owns the revealed set of one game and resolves reveal requests against the static count layer.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealEngine {
    counts: CountLayer,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    triggered_hazard: Option<Position>,
}

impl RevealEngine {
    pub fn new(layout: &HazardLayout) -> Self {
        Self::from_counts(CountLayer::compute(layout))
    }

    pub fn from_counts(counts: CountLayer) -> Self {
        let side = usize::from(counts.dim_size());
        Self {
            counts,
            revealed: Array2::from_elem((side, side), false),
            revealed_count: 0,
            triggered_hazard: None,
        }
    }

    /// Derived from the revealed set, never stored separately.
    pub fn state(&self) -> GameState {
        if self.triggered_hazard.is_some() {
            GameState::Lost
        } else if self.revealed_count == self.counts.safe_cell_count() {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn dim_size(&self) -> Coord {
        self.counts.dim_size()
    }

    pub fn hazard_count(&self) -> CellCount {
        self.counts.hazard_count()
    }

    pub fn counts(&self) -> &CountLayer {
        &self.counts
    }

    pub fn content_at(&self, pos: Position) -> CellContent {
        self.counts[pos]
    }

    pub fn is_revealed(&self, pos: Position) -> bool {
        self.revealed[pos.to_nd_index()]
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn safe_cells_left(&self) -> CellCount {
        self.counts
            .safe_cell_count()
            .saturating_sub(self.revealed_count)
    }

    /// The hazard that ended the game, if it was lost.
    pub fn triggered_hazard(&self) -> Option<Position> {
        self.triggered_hazard
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

    /// Reveals `pos`, cascading through connected zero-count cells.
    ///
    /// Fails without touching any state when `pos` is out of bounds or the game already ended.
    /// Revealing an already revealed cell is a no-op.
    pub fn reveal(&mut self, pos: Position) -> Result<RevealResult> {
        let pos = self.validate_position(pos)?;
        self.check_not_finished()?;

        if self.is_revealed(pos) {
            log::trace!("Cell at {:?} already revealed", pos);
            return Ok(RevealResult::unchanged());
        }

        let content = self.counts[pos];
        log::debug!("Reveal at {:?}, content: {:?}", pos, content);

        let newly_revealed = match content {
            CellContent::Hazard => {
                self.mark_revealed(pos);
                self.triggered_hazard = Some(pos);
                vec![RevealedCell { pos, content }]
            }
            CellContent::Safe(_) => self.reveal_region(pos),
        };

        let state = self.state();
        if state.is_finished() {
            log::debug!(
                "Game ended: {:?}, {} cells revealed",
                state,
                self.revealed_count
            );
        }

        Ok(RevealResult {
            outcome: state.into(),
            newly_revealed,
        })
    }

    /// Work-list traversal from a safe `start`: every cell taken off the list is opened, and only
    /// zero-count cells push their unrevealed neighbors.
    fn reveal_region(&mut self, start: Position) -> Vec<RevealedCell> {
        let mut newly_revealed = Vec::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_pos) = to_visit.pop_front() {
            if self.is_revealed(visit_pos) {
                continue;
            }

            let content = self.counts[visit_pos];
            if content.is_hazard() {
                // a zero-count neighbor can't be a hazard, only reachable from a corrupt layer
                log::warn!("Skipping hazard at {:?} during region reveal", visit_pos);
                continue;
            }

            self.mark_revealed(visit_pos);
            newly_revealed.push(RevealedCell {
                pos: visit_pos,
                content,
            });
            log::trace!("Opened cell at {:?}, content: {:?}", visit_pos, content);

            if content.is_zero() {
                to_visit.extend(
                    self.counts
                        .iter_neighbors(visit_pos)
                        .filter(|&pos| !self.is_revealed(pos)),
                );
            }
        }

        newly_revealed
    }

    fn mark_revealed(&mut self, pos: Position) {
        self.revealed[pos.to_nd_index()] = true;
        self.revealed_count += 1;
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
