use std::ops::Add;

use crate::core::grid::Grid;
use crate::core::solver::solve;
use crate::core::{GameOutcome, GameState, MoveKind, SharedGameState, Vec2};

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl MoveKind {
    pub fn all() -> [MoveKind; 3] {
        [MoveKind::Forward, MoveKind::ForwardUp, MoveKind::ForwardDown]
    }

    pub fn offset(&self) -> Vec2 {
        match self {
            MoveKind::Forward => Vec2 { i: 0, j: 1 },
            MoveKind::ForwardUp => Vec2 { i: -1, j: 1 },
            MoveKind::ForwardDown => Vec2 { i: 1, j: 1 },
        }
    }

    /// The step leading from `from` to `to`, if they are one legal step apart
    pub fn between(from: &Vec2, to: &Vec2) -> Option<MoveKind> {
        MoveKind::all()
            .into_iter()
            .find(|kind| *from + kind.offset() == *to)
    }
}

impl GameState {
    pub fn new() -> Self {
        GameState::default()
    }

    pub fn current_position(&self) -> Option<Vec2> {
        self.path.last().copied()
    }

    pub fn is_finished(&self, shared: &SharedGameState) -> bool {
        self.current_position()
            .is_some_and(|pos| pos.j == shared.grid.last_column())
    }
}

impl SharedGameState {
    pub fn new(grid: Grid) -> Self {
        SharedGameState { grid }
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Whether `pos` is a legal next selection for `game`
    pub fn can_select(&self, game: &GameState, pos: &Vec2) -> bool {
        if !self.grid.contains(pos) || game.is_finished(self) {
            return false;
        }
        match game.current_position() {
            None => pos.j == 0,
            Some(current) => MoveKind::between(&current, pos).is_some(),
        }
    }

    /// Solves the grid once the player has reached the last column
    pub fn outcome(&self, game: &GameState) -> Option<GameOutcome> {
        if !game.is_finished(self) {
            return None;
        }
        let optimal = solve(&self.grid);
        let won = game.path == optimal.path;
        Some(GameOutcome { optimal, won })
    }
}
