use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Static per-cell content derived from a [`HazardLayout`]: the hazard itself, or how many hazards
/// surround a safe cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountLayer {
    cells: Array2<CellContent>,
    hazard_count: CellCount,
}

impl CountLayer {
    pub fn compute(layout: &HazardLayout) -> Self {
        let side = usize::from(layout.dim_size());
        let cells = Array2::from_shape_fn((side, side), |(row, col)| {
            let pos = (row as Coord, col as Coord);
            if layout.contains_hazard(pos) {
                CellContent::Hazard
            } else {
                CellContent::Safe(layout.adjacent_hazard_count(pos))
            }
        });

        log::trace!(
            "Computed neighbor counts for a {}x{} grid",
            layout.dim_size(),
            layout.dim_size()
        );
        Self {
            cells,
            hazard_count: layout.hazard_count(),
        }
    }

    pub fn dim_size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        square(self.dim_size()) - self.hazard_count
    }

    pub fn content_at(&self, pos: Position) -> CellContent {
        self[pos]
    }

    pub fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        self.cells.iter_neighbors(pos)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, CellContent)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &content)| ((row as Coord, col as Coord), content))
    }
}

impl Index<Position> for CountLayer {
    type Output = CellContent;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn brute_force_count(layout: &HazardLayout, (row, col): Position) -> u8 {
        let dim_size = i32::from(layout.dim_size());
        let mut count = 0;
        for r in (i32::from(row) - 1)..=(i32::from(row) + 1) {
            for c in (i32::from(col) - 1)..=(i32::from(col) + 1) {
                if r < 0 || c < 0 || r >= dim_size || c >= dim_size {
                    continue;
                }
                if (r, c) == (i32::from(row), i32::from(col)) {
                    continue;
                }
                if layout.contains_hazard((r as Coord, c as Coord)) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn ring_around_center_hazard_counts_one() {
        let layout = HazardLayout::from_hazard_positions(3, &[(1, 1)]).unwrap();
        let counts = CountLayer::compute(&layout);

        for (pos, content) in counts.iter_cells() {
            if pos == (1, 1) {
                assert_eq!(content, CellContent::Hazard);
            } else {
                assert_eq!(content, CellContent::Safe(1), "at {pos:?}");
            }
        }
    }

    #[test]
    fn fully_surrounded_cell_counts_eight() {
        let ring: Vec<Position> = NeighborIter::new((1, 1), 3).collect();
        let layout = HazardLayout::from_hazard_positions(3, &ring).unwrap();
        let counts = CountLayer::compute(&layout);

        assert_eq!(counts[(1, 1)], CellContent::Safe(8));
        assert_eq!(counts.safe_cell_count(), 1);
    }

    #[test]
    fn counts_match_brute_force_on_random_layouts() {
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let config = GameConfig::new(12, 30).unwrap();
            let layout = RejectionPlacer.place(config, &mut rng).unwrap();
            let counts = CountLayer::compute(&layout);

            for (pos, content) in counts.iter_cells() {
                if layout.contains_hazard(pos) {
                    assert_eq!(content, CellContent::Hazard);
                } else {
                    let expected = brute_force_count(&layout, pos);
                    assert!(expected <= 8);
                    assert_eq!(content, CellContent::Safe(expected), "at {pos:?}");
                }
            }
        }
    }
}
