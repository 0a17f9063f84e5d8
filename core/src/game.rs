use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Represents a game from start to finish: a fixed hazard layout and the player's progress on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    config: GameConfig,
    layout: HazardLayout,
    engine: RevealEngine,
}

impl Game {
    /// New game with hazards scattered by the reference [`RejectionPlacer`].
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        Self::with_placer(config, &RejectionPlacer, rng)
    }

    pub fn with_placer<P, R>(config: GameConfig, placer: &P, rng: &mut R) -> Result<Self>
    where
        P: HazardPlacer,
        R: Rng + ?Sized,
    {
        let layout = placer.place(config, rng)?;
        Ok(Self::from_layout(layout))
    }

    /// Reproducible game, the same seed always yields the same layout.
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self> {
        log::debug!("seed: {}", seed);
        Self::new(config, &mut SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GameConfig) -> Result<Self> {
        Self::new(config, &mut rand::rng())
    }

    pub fn from_layout(layout: HazardLayout) -> Self {
        let config = layout.game_config();
        let engine = RevealEngine::new(&layout);
        log::debug!(
            "New game on a {}x{} grid with {} hazards",
            config.dim_size,
            config.dim_size,
            config.hazard_count
        );
        Self {
            config,
            layout,
            engine,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn layout(&self) -> &HazardLayout {
        &self.layout
    }

    pub fn engine(&self) -> &RevealEngine {
        &self.engine
    }

    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    pub fn is_terminal(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn reveal(&mut self, row: Coord, col: Coord) -> Result<RevealResult> {
        self.engine.reveal((row, col))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    /// The whole board with nothing hidden, usually shown once the game is over.
    pub fn full_snapshot(&self) -> Snapshot {
        Snapshot::uncovered(&self.engine)
    }
}
