use rand::Rng;

use crate::*;
pub use random::*;

mod random;

/// Strategy for scattering hazards over an empty grid.
pub trait HazardPlacer {
    /// Places exactly `config.hazard_count` distinct hazards, drawing only from `rng`.
    fn place<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> Result<HazardLayout>;
}
