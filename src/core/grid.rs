use rand::Rng;

use crate::core::consts::{MAX_GOLD, MIN_GOLD};
use crate::core::errors::GridError;
use crate::core::models::Vec2;

/// A rectangular, non-empty grid of cell values stored row-major
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: i32,
    width: i32,
    cells: Vec<u32>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Grid, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if cells.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        let (height, width) = Grid::checked_size(rows.len(), width)?;
        Ok(Grid {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Every cell drawn uniformly from `MIN_GOLD..=MAX_GOLD`
    pub fn random<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows == 0 {
            return Err(GridError::Empty);
        }
        if cols == 0 {
            return Err(GridError::EmptyRow { row: 0 });
        }
        let (height, width) = Grid::checked_size(rows, cols)?;
        let cells = (0..rows * cols)
            .map(|_| rng.random_range(MIN_GOLD..=MAX_GOLD))
            .collect();
        Ok(Grid {
            height,
            width,
            cells,
        })
    }

    /// Positions are `i32`, so the whole area must fit in one
    fn checked_size(rows: usize, cols: usize) -> Result<(i32, i32), GridError> {
        let too_large = || GridError::TooLarge { rows, cols };
        let height = i32::try_from(rows).map_err(|_| too_large())?;
        let width = i32::try_from(cols).map_err(|_| too_large())?;
        height.checked_mul(width).ok_or_else(too_large)?;
        Ok((height, width))
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn last_column(&self) -> i32 {
        self.width - 1
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.height && pos.j >= 0 && pos.j < self.width
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width as usize)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = u32;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.width + index.j) as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_rejects_empty_grid() {
        assert_eq!(Grid::new(vec![]), Err(GridError::Empty));
    }

    #[test]
    fn new_rejects_empty_row() {
        assert_eq!(Grid::new(vec![vec![]]), Err(GridError::EmptyRow { row: 0 }));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let result = Grid::new(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]);
        assert_eq!(
            result,
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn index_is_row_then_column() {
        let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid[&Vec2 { i: 0, j: 2 }], 3);
        assert_eq!(grid[&Vec2 { i: 1, j: 0 }], 4);
        assert_eq!(grid.area(), 6);
        assert!(!grid.contains(&Vec2 { i: 2, j: 0 }));
        assert!(!grid.contains(&Vec2 { i: 0, j: -1 }));
        assert_eq!(grid.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn random_grid_stays_in_gold_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(&mut rng, 5, 5).unwrap();
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.width(), 5);
        assert!(grid.rows().flatten().all(|&v| (MIN_GOLD..=MAX_GOLD).contains(&v)));
    }

    #[test]
    fn random_grid_is_deterministic_for_a_seed() {
        let a = Grid::random(&mut StdRng::seed_from_u64(42), 5, 5).unwrap();
        let b = Grid::random(&mut StdRng::seed_from_u64(42), 5, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_rejects_empty_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(&mut rng, 0, 5), Err(GridError::Empty));
        assert_eq!(Grid::random(&mut rng, 5, 0), Err(GridError::EmptyRow { row: 0 }));
    }

    #[test]
    fn random_rejects_area_beyond_positions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(&mut rng, 1 << 16, 1 << 16),
            Err(GridError::TooLarge { rows: 1 << 16, cols: 1 << 16 })
        );
        let rows = i32::MAX as usize + 1;
        assert_eq!(
            Grid::random(&mut rng, rows, 1),
            Err(GridError::TooLarge { rows, cols: 1 })
        );
        assert_eq!(
            GridError::TooLarge { rows: 1 << 16, cols: 1 << 16 }.to_string(),
            "Grid of 65536x65536 cells is too large"
        );
    }
}
