use std::fmt;

/// Reasons a set of rows cannot form a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows at all
    Empty,
    /// A row with no cells
    EmptyRow { row: usize },
    /// A row whose length differs from the first row
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// More cells than a position can address
    TooLarge { rows: usize, cols: usize },
    /// A token in grid text that is not a non-negative integer
    Parse { line: usize, token: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "Grid has no rows"),
            GridError::EmptyRow { row } => write!(f, "Grid row {} has no cells", row),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::TooLarge { rows, cols } => {
                write!(f, "Grid of {}x{} cells is too large", rows, cols)
            }
            GridError::Parse { line, token } => {
                write!(f, "Invalid cell value {:?} on line {}", token, line)
            }
        }
    }
}

impl std::error::Error for GridError {}
