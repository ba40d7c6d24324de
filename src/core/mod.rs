mod consts;
mod errors;
mod grid;
mod model_helpers;
mod models;
mod solver;
mod update;

pub use consts::*;
pub use errors::GridError;
pub use grid::Grid;
pub use models::{
    Direction, GameChangeType, GameOutcome, GameState, GameUpdate, MoveKind, SharedGameState,
    Solution, UserAction, Vec2,
};
pub use solver::{STEP_PREFERENCE, solve, solve_rows};
pub use update::step;
