use serde::Serialize;

use crate::core::grid::Grid;

/// A cell position, `i` is the row and `j` is the column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Vec2 {
    #[serde(rename = "row")]
    pub i: i32,
    #[serde(rename = "col")]
    pub j: i32,
}

/// Cursor movement in the console, not a path step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One step of a path. Always advances a single column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Forward,
    ForwardUp,
    ForwardDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Select(Vec2),
}

/// Data which stays the same for the whole game
#[derive(Clone, Debug)]
pub struct SharedGameState {
    pub grid: Grid,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    pub path: Vec<Vec2>,
    pub gold: u64,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    Start,
    Move(MoveKind),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub value: u64,
    pub path: Vec<Vec2>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub optimal: Solution,
    pub won: bool,
}
