use ndarray::Array2;

/// Single coordinate axis, used for the grid side length and for positions.
pub type Coord = u16;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u32;

/// Grid position `(row, col)`, 0-indexed from the top-left corner.
pub type Position = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells in a square grid with `dim_size` cells per side.
pub const fn square(dim_size: Coord) -> CellCount {
    let side = dim_size as CellCount;
    side * side
}

/// Converts a row-major cell index back into a position.
pub const fn position_of(index: CellCount, dim_size: Coord) -> Position {
    let side = dim_size as CellCount;
    ((index / side) as Coord, (index % side) as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Position) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Position) -> NeighborIter {
        // grids are always square and built from a `Coord` side length
        let dim_size = self.nrows() as Coord;
        NeighborIter::new(center, dim_size)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it stays inside a `dim_size` grid.
fn apply_delta(pos: Position, delta: (i8, i8), dim_size: Coord) -> Option<Position> {
    let (row, col) = pos;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.into())?;
    if next_row >= dim_size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.into())?;
    if next_col >= dim_size {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up-to-8 positions around a center, clipped at the grid edges.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Position,
    dim_size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Position, dim_size: Coord) -> Self {
        Self {
            center,
            dim_size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                DISPLACEMENTS[usize::from(self.index)],
                self.dim_size,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
