use log::trace;

use crate::core::errors::GridError;
use crate::core::grid::Grid;
use crate::core::models::{MoveKind, Solution, Vec2};

/// Order in which equally good steps are preferred. A later step only
/// replaces an earlier one when it leads to a strictly larger total.
/// The first entry must always stay inside the grid.
pub const STEP_PREFERENCE: [MoveKind; 3] =
    [MoveKind::Forward, MoveKind::ForwardUp, MoveKind::ForwardDown];

/// Best total collectable from each cell, and the step taken from it
struct SweepTable {
    width: usize,
    best: Vec<u64>,
    next: Vec<Option<Vec2>>,
}

impl SweepTable {
    fn new(grid: &Grid) -> Self {
        SweepTable {
            width: grid.width() as usize,
            best: vec![0; grid.area()],
            next: vec![None; grid.area()],
        }
    }

    fn index(&self, pos: &Vec2) -> usize {
        pos.i as usize * self.width + pos.j as usize
    }

    fn best(&self, pos: &Vec2) -> u64 {
        self.best[self.index(pos)]
    }

    fn next(&self, pos: &Vec2) -> Option<Vec2> {
        self.next[self.index(pos)]
    }

    fn set(&mut self, pos: &Vec2, best: u64, next: Option<Vec2>) {
        let index = self.index(pos);
        self.best[index] = best;
        self.next[index] = next;
    }
}

/// Maximum total of any path from column 0 to the last column, along with one
/// path reaching it.
///
/// Columns are swept right to left. Among equal neighbours the step is chosen
/// by [`STEP_PREFERENCE`], and among equal starting cells the smallest row wins.
pub fn solve(grid: &Grid) -> Solution {
    let mut table = SweepTable::new(grid);
    let last = grid.last_column();

    for i in 0..grid.height() {
        let pos = Vec2 { i, j: last };
        table.set(&pos, grid[&pos] as u64, None);
    }

    for j in (0..last).rev() {
        for i in 0..grid.height() {
            let here = Vec2 { i, j };
            let first = here + STEP_PREFERENCE[0].offset();
            let mut step = (table.best(&first), first);
            for kind in &STEP_PREFERENCE[1..] {
                let to = here + kind.offset();
                if !grid.contains(&to) {
                    continue;
                }
                let value = table.best(&to);
                if value > step.0 {
                    step = (value, to);
                }
            }
            table.set(&here, grid[&here] as u64 + step.0, Some(step.1));
        }
    }

    let mut start = Vec2 { i: 0, j: 0 };
    for i in 1..grid.height() {
        let candidate = Vec2 { i, j: 0 };
        if table.best(&candidate) > table.best(&start) {
            start = candidate;
        }
    }

    let mut path = Vec::with_capacity(grid.width() as usize);
    let mut current = Some(start);
    while let Some(pos) = current {
        path.push(pos);
        current = table.next(&pos);
    }

    let value = table.best(&start);
    trace!("optimal start {:?} worth {}", start, value);
    Solution { value, path }
}

/// Validates raw rows before solving
pub fn solve_rows(rows: Vec<Vec<u32>>) -> Result<Solution, GridError> {
    let grid = Grid::new(rows)?;
    Ok(solve(&grid))
}

#[cfg(test)]
mod test {
    use super::*;

    fn path(cells: &[(i32, i32)]) -> Vec<Vec2> {
        cells.iter().map(|&(i, j)| Vec2 { i, j }).collect()
    }

    #[test]
    fn solves_ascending_three_by_three() {
        let solution = solve_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(solution.value, 24);
        assert_eq!(solution.path, path(&[(2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn climbs_to_reach_a_rich_cell() {
        let solution = solve_rows(vec![
            vec![1, 1, 9],
            vec![1, 1, 1],
            vec![5, 1, 1],
        ])
        .unwrap();
        assert_eq!(solution.value, 15);
        assert_eq!(solution.path, path(&[(2, 0), (1, 1), (0, 2)]));
    }

    #[test]
    fn single_column_picks_largest_cell() {
        let solution = solve_rows(vec![vec![3], vec![8], vec![2], vec![8]]).unwrap();
        assert_eq!(solution.value, 8);
        assert_eq!(solution.path, path(&[(1, 0)]));
    }

    #[test]
    fn single_cell_grid() {
        let solution = solve_rows(vec![vec![0]]).unwrap();
        assert_eq!(solution.value, 0);
        assert_eq!(solution.path, path(&[(0, 0)]));
    }

    #[test]
    fn single_row_walks_straight() {
        let solution = solve_rows(vec![vec![4, 0, 2, 7]]).unwrap();
        assert_eq!(solution.value, 13);
        assert_eq!(solution.path, path(&[(0, 0), (0, 1), (0, 2), (0, 3)]));
    }

    #[test]
    fn uniform_grid_starts_at_top_and_goes_straight() {
        let solution = solve_rows(vec![vec![1; 4]; 4]).unwrap();
        assert_eq!(solution.value, 4);
        assert_eq!(solution.path, path(&[(0, 0), (0, 1), (0, 2), (0, 3)]));
    }

    #[test]
    fn tie_prefers_forward_over_diagonals() {
        let solution = solve_rows(vec![
            vec![0, 5],
            vec![9, 5],
            vec![0, 5],
        ])
        .unwrap();
        assert_eq!(solution.path, path(&[(1, 0), (1, 1)]));
    }

    #[test]
    fn tie_prefers_up_over_down() {
        let solution = solve_rows(vec![
            vec![0, 5],
            vec![9, 1],
            vec![0, 5],
        ])
        .unwrap();
        assert_eq!(solution.value, 14);
        assert_eq!(solution.path, path(&[(1, 0), (0, 1)]));
    }

    #[test]
    fn start_tie_prefers_smallest_row() {
        let solution = solve_rows(vec![
            vec![2, 1],
            vec![1, 1],
            vec![2, 1],
        ])
        .unwrap();
        assert_eq!(solution.value, 3);
        assert_eq!(solution.path, path(&[(0, 0), (0, 1)]));
    }

    #[test]
    fn rejects_invalid_rows() {
        assert_eq!(solve_rows(vec![]), Err(GridError::Empty));
        assert!(matches!(
            solve_rows(vec![vec![1, 2], vec![3]]),
            Err(GridError::Ragged { row: 1, .. })
        ));
    }

    #[test]
    fn repeated_solves_agree() {
        let grid = Grid::new(vec![vec![3, 3, 3], vec![3, 3, 3], vec![3, 3, 3]]).unwrap();
        assert_eq!(solve(&grid), solve(&grid));
    }
}
