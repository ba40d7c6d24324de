use log::debug;

use crate::core::{GameChangeType, GameState, GameUpdate, MoveKind, SharedGameState, UserAction, Vec2};

pub fn step(shared: &SharedGameState, game: &GameState, action: UserAction) -> GameUpdate {
    let target = match action {
        UserAction::Select(pos) => pos,
    };

    if !shared.grid.contains(&target) {
        return GameUpdate::Error("Cannot select a cell outside the mine".to_string());
    }
    if game.is_finished(shared) {
        return GameUpdate::Error("The game is over".to_string());
    }

    let change = match game.current_position() {
        None => {
            if target.j != 0 {
                return GameUpdate::Error("Start in the first column".to_string());
            }
            GameChangeType::Start
        }
        Some(current) => match MoveKind::between(&current, &target) {
            Some(kind) => GameChangeType::Move(kind),
            None => {
                return GameUpdate::Error(format!(
                    "Cannot move from {} to {}",
                    describe(&current),
                    describe(&target)
                ));
            }
        },
    };

    let mut path = game.path.clone();
    path.push(target);
    let gold = game.gold + shared.grid[&target] as u64;
    debug!("selected {:?} via {:?}, gold now {}", target, change, gold);

    GameUpdate::NextState(GameState { path, gold }, change)
}

fn describe(pos: &Vec2) -> String {
    format!("row {} column {}", pos.i + 1, pos.j + 1)
}
