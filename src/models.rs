use log::{info, warn};
use rand::Rng;

pub(crate) use crate::core::Vec2;
use crate::core::{
    COLS, Direction, GameChangeType, GameOutcome, GameState, GameUpdate, Grid, GridError, ROWS,
    SharedGameState, UserAction, step,
};
use crate::console_interface::move_cursor;

/// Everything the console reads to draw one frame
pub struct GameRenderState {
    pub game: GameState,
    pub cursor: Vec2,
    pub outcome: Option<GameOutcome>,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
}

impl GameRenderState {
    pub fn new(game: GameState) -> Self {
        GameRenderState {
            game,
            cursor: Vec2 { i: 0, j: 0 },
            outcome: None,
            error: None,
            last_change: None,
        }
    }

    /// Clears the dig on the same mine
    pub fn reset(&mut self) {
        info!("reset");
        *self = GameRenderState::new(GameState::new());
    }

    /// Runs one action through the game rules. The outcome is solved when
    /// the action reaches the last column.
    pub fn apply(&mut self, shared: &SharedGameState, action: UserAction) {
        match step(shared, &self.game, action) {
            GameUpdate::NextState(new_state, change) => {
                self.game = new_state;
                self.last_change = Some(change);
                self.error = None;
                if let Some(pos) = self.game.current_position() {
                    self.cursor = move_cursor(shared, pos, Direction::Right);
                }
                self.outcome = shared.outcome(&self.game);
                if let Some(outcome) = &self.outcome {
                    info!(
                        "game over: collected {} gold, optimal {}, won: {}",
                        self.game.gold, outcome.optimal.value, outcome.won
                    );
                }
            }
            GameUpdate::Error(err) => {
                warn!("rejected {:?}: {}", action, err);
                self.error = Some(err);
            }
        }
    }
}

/// Fresh mine with an empty dig
pub fn new_game<R: Rng>(rng: &mut R) -> Result<(SharedGameState, GameRenderState), GridError> {
    let grid = Grid::random(rng, ROWS, COLS)?;
    info!("new game on a {}x{} mine", grid.height(), grid.width());
    Ok((SharedGameState::new(grid), GameRenderState::new(GameState::new())))
}
