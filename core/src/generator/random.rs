use ndarray::Array2;
use rand::Rng;

use super::*;

/// Rejection sampling: draw uniformly over every cell and redraw on collision.
///
/// Terminates because at least one cell is always left free, but the expected number of draws
/// grows without bound as the hazard count approaches the cell count. Prefer [`SamplePlacer`] for
/// very dense boards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RejectionPlacer;

impl HazardPlacer for RejectionPlacer {
    fn place<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> Result<HazardLayout> {
        config.validate()?;

        let side = usize::from(config.dim_size);
        let total_cells = config.total_cells();
        let mut hazard_mask: Array2<bool> = Array2::from_elem((side, side), false);
        let mut hazards_placed: CellCount = 0;
        let mut draws: u64 = 0;

        while hazards_placed < config.hazard_count {
            let index = rng.random_range(0..total_cells);
            let pos = position_of(index, config.dim_size);
            draws += 1;

            let cell = &mut hazard_mask[pos.to_nd_index()];
            if *cell {
                log::trace!("Hazard already at {:?}, drawing again", pos);
                continue;
            }
            *cell = true;
            hazards_placed += 1;
        }

        log::debug!(
            "Placed {} hazards on a {}x{} grid in {} draws",
            hazards_placed,
            config.dim_size,
            config.dim_size,
            draws
        );
        Ok(HazardLayout::from_validated_mask(hazard_mask, hazards_placed))
    }
}

/// Pick-without-replacement: samples distinct cell indices directly, so the number of draws never
/// depends on how dense the board is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SamplePlacer;

impl HazardPlacer for SamplePlacer {
    fn place<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> Result<HazardLayout> {
        config.validate()?;

        let side = usize::from(config.dim_size);
        let mut hazard_mask: Array2<bool> = Array2::from_elem((side, side), false);
        let indices = rand::seq::index::sample(
            rng,
            config.total_cells() as usize,
            config.hazard_count as usize,
        );
        for index in indices.iter() {
            let pos = position_of(index as CellCount, config.dim_size);
            hazard_mask[pos.to_nd_index()] = true;
        }

        log::debug!(
            "Sampled {} hazards on a {}x{} grid",
            config.hazard_count,
            config.dim_size,
            config.dim_size
        );
        Ok(HazardLayout::from_validated_mask(
            hazard_mask,
            config.hazard_count,
        ))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn check_layout(config: GameConfig, layout: &HazardLayout) {
        assert_eq!(layout.dim_size(), config.dim_size);
        assert_eq!(layout.hazard_count(), config.hazard_count);
        assert_eq!(
            layout.hazard_positions().count(),
            config.hazard_count as usize
        );
    }

    #[test]
    fn rejection_places_exact_hazard_count() {
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for config in [
                GameConfig::new(1, 0).unwrap(),
                GameConfig::new(3, 8).unwrap(),
                GameConfig::beginner(),
                GameConfig::new(20, 200).unwrap(),
            ] {
                let layout = RejectionPlacer.place(config, &mut rng).unwrap();
                check_layout(config, &layout);
            }
        }
    }

    #[test]
    fn sample_places_exact_hazard_count() {
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for config in [
                GameConfig::new(1, 0).unwrap(),
                GameConfig::new(3, 8).unwrap(),
                GameConfig::expert(),
                GameConfig::new(40, 1599).unwrap(),
            ] {
                let layout = SamplePlacer.place(config, &mut rng).unwrap();
                check_layout(config, &layout);
            }
        }
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let config = GameConfig::intermediate();
        let first = RejectionPlacer
            .place(config, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        let second = RejectionPlacer
            .place(config, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(first, second);

        let first = SamplePlacer
            .place(config, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        let second = SamplePlacer
            .place(config, &mut SmallRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let mut rng = SmallRng::seed_from_u64(0);
        let full = GameConfig::new_unchecked(3, 9);

        assert_eq!(
            RejectionPlacer.place(full, &mut rng),
            Err(GameError::TooManyHazards {
                hazards: 9,
                cells: 9
            })
        );
        assert_eq!(
            SamplePlacer.place(GameConfig::new_unchecked(0, 0), &mut rng),
            Err(GameError::EmptyGrid)
        );
    }
}
