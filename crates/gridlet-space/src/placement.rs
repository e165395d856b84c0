//! Uniform random placement on free grid cells.
//!
//! The allocator is a pure query over a caller-supplied occupancy set:
//! it never remembers what it handed out. Callers that place several
//! entities in sequence must add each result to the occupancy set
//! before the next call.

use crate::grid::SquareGrid;
use gridlet_core::{PlacementError, Position};
use rand::Rng;

/// Every cell not present in `occupied`, in canonical order.
///
/// Duplicate entries in `occupied` are harmless and positions outside
/// the grid are ignored.
pub fn free_cells(grid: &SquareGrid, occupied: &[Position]) -> Vec<Position> {
    let mut taken = vec![false; grid.cell_count()];
    for &pos in occupied {
        if let Some(rank) = grid.canonical_rank(pos) {
            taken[rank] = true;
        }
    }
    grid.canonical_ordering()
        .zip(taken)
        .filter_map(|(pos, taken)| (!taken).then_some(pos))
        .collect()
}

/// Draw a uniformly random free cell.
///
/// Uses exactly one `random_range` draw from `rng` per successful call,
/// so a seeded generator reproduces the same sequence of placements.
///
/// # Errors
///
/// Returns [`PlacementError::ExhaustedGrid`] when every cell is occupied.
///
/// # Examples
///
/// ```
/// use gridlet_core::Position;
/// use gridlet_space::{allocate, SquareGrid};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let grid = SquareGrid::new(2).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let taken = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)];
/// assert_eq!(allocate(&grid, &taken, &mut rng).unwrap(), Position::new(1, 1));
/// ```
pub fn allocate<R: Rng + ?Sized>(
    grid: &SquareGrid,
    occupied: &[Position],
    rng: &mut R,
) -> Result<Position, PlacementError> {
    let free = free_cells(grid, occupied);
    if free.is_empty() {
        tracing::warn!(size = grid.size(), "placement exhausted the grid");
        return Err(PlacementError::ExhaustedGrid {
            size: grid.size(),
            occupied: grid.cell_count(),
        });
    }
    let index = rng.random_range(0..free.len());
    Ok(free[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_occupancy_frees_whole_grid() {
        let g = SquareGrid::new(4).unwrap();
        assert_eq!(free_cells(&g, &[]).len(), 16);
    }

    #[test]
    fn duplicates_and_outside_cells_ignored() {
        let g = SquareGrid::new(3).unwrap();
        let occupied = [
            Position::new(1, 1),
            Position::new(1, 1),
            Position::new(-1, 0),
            Position::new(3, 3),
        ];
        let free = free_cells(&g, &occupied);
        assert_eq!(free.len(), 8);
        assert!(!free.contains(&Position::new(1, 1)));
    }

    #[test]
    fn full_grid_is_exhausted() {
        let g = SquareGrid::new(2).unwrap();
        let occupied: Vec<Position> = g.canonical_ordering().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            allocate(&g, &occupied, &mut rng),
            Err(PlacementError::ExhaustedGrid {
                size: 2,
                occupied: 4
            })
        );
    }

    #[test]
    fn same_seed_same_cell() {
        let g = SquareGrid::new(9).unwrap();
        let occupied = [Position::new(4, 4)];
        let a = allocate(&g, &occupied, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = allocate(&g, &occupied, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn draws_cover_every_free_cell() {
        let g = SquareGrid::new(3).unwrap();
        let occupied = [Position::new(0, 0), Position::new(2, 2)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut hits = vec![0usize; g.cell_count()];
        for _ in 0..7_000 {
            let p = allocate(&g, &occupied, &mut rng).unwrap();
            hits[g.canonical_rank(p).unwrap()] += 1;
        }
        assert_eq!(hits[0], 0);
        assert_eq!(hits[8], 0);
        // 7 free cells, ~1000 draws each.
        for (rank, &h) in hits.iter().enumerate() {
            if rank != 0 && rank != 8 {
                assert!((800..1200).contains(&h), "cell {rank} drawn {h} times");
            }
        }
    }

    proptest! {
        #[test]
        fn never_returns_occupied_cell(
            size in 1u32..8,
            seed in any::<u64>(),
            picks in proptest::collection::vec((0i32..8, 0i32..8), 0..20),
        ) {
            let g = SquareGrid::new(size).unwrap();
            let occupied: Vec<Position> = picks
                .into_iter()
                .map(|(x, y)| Position::new(x, y))
                .collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            match allocate(&g, &occupied, &mut rng) {
                Ok(p) => {
                    prop_assert!(g.contains(p));
                    prop_assert!(!occupied.contains(&p));
                }
                Err(PlacementError::ExhaustedGrid { .. }) => {
                    prop_assert!(free_cells(&g, &occupied).is_empty());
                }
            }
        }
    }
}
