use crate::core::{Direction, GameState, Grid, GridError, SharedGameState};
use crate::core::UserAction;
use crate::models::{GameRenderState, Vec2, new_game};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const SELECTED_BG: Color = Color::Rgb(0xf5, 0x7c, 0x00);
const OPTIMAL_BG: Color = Color::Rgb(0x38, 0x8e, 0x3c);
const CELL_BG: Color = Color::Rgb(0x33, 0x33, 0x33);
const TEXT_FG: Color = Color::White;

const INSTRUCTIONS: &str = "\
You are a miner on a grid where every cell holds 1-9 tons of gold.
Start in the leftmost column, then step right, up-right or down-right.
Reaching the rightmost column ends the game and reveals the optimal path in green.
Match the optimal path exactly to win.
Arrows/WASD move the cursor, Enter/Space dig, 1-9 dig that row in the next column.
R reset | N new game | Q quit";

/// Whitespace separated cell values, one row per non-blank line
pub fn parse_grid(s: &str) -> Result<Grid, GridError> {
    let mut rows: Vec<Vec<u32>> = Vec::new();

    for (line_number, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value = token.parse::<u32>().map_err(|_| GridError::Parse {
                line: line_number + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Grid::new(rows)
}

pub fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> anyhow::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellMarker {
    Selected,
    Optimal,
    Plain,
}

fn cell_marker(state: &GameRenderState, pos: &Vec2) -> CellMarker {
    if state.game.path.contains(pos) {
        return CellMarker::Selected;
    }
    let on_optimal = state
        .outcome
        .as_ref()
        .is_some_and(|outcome| outcome.optimal.path.contains(pos));
    if on_optimal {
        CellMarker::Optimal
    } else {
        CellMarker::Plain
    }
}

fn cell_style(shared: &SharedGameState, state: &GameRenderState, pos: &Vec2) -> Style {
    let mut style = match cell_marker(state, pos) {
        CellMarker::Selected => Style::default().bg(SELECTED_BG).fg(TEXT_FG),
        CellMarker::Optimal => Style::default().bg(OPTIMAL_BG).fg(TEXT_FG),
        CellMarker::Plain => Style::default().bg(CELL_BG).fg(TEXT_FG),
    };
    if shared.can_select(&state.game, pos) {
        style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
    }
    if *pos == state.cursor && state.outcome.is_none() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn grid_lines(shared: &SharedGameState, state: &GameRenderState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, row) in shared.grid.rows().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let mut spans = Vec::new();
        for (j, value) in row.iter().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", value), cell_style(shared, state, &pos)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn status_text(state: &GameRenderState) -> String {
    let status = format!("Gold: {}", state.game.gold);

    let status = if let Some(change_type) = &state.last_change {
        format!("{} | Last: {:?}", status, change_type)
    } else {
        status
    };

    if let Some(err) = &state.error {
        format!("{} | Error: {}", status, err)
    } else {
        status
    }
}

fn result_text(state: &GameRenderState) -> String {
    match &state.outcome {
        Some(outcome) if outcome.won => {
            format!("🎉 You Win! Optimal Gold: {}", outcome.optimal.value)
        }
        Some(outcome) => format!(
            "😞 Better luck next time! Optimal Gold: {}",
            outcome.optimal.value
        ),
        None => "Reach the last column to compare with the optimal path".to_string(),
    }
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared: &SharedGameState,
    state: &GameRenderState,
) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(8),
            ])
            .split(f.area());

        let status_paragraph = Paragraph::new(status_text(state))
            .block(Block::default().borders(Borders::ALL).title("Gold Mine"))
            .style(Style::default().fg(TEXT_FG))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[0]);

        let grid_paragraph = Paragraph::new(grid_lines(shared, state))
            .block(Block::default().borders(Borders::ALL).title("Mine"))
            .alignment(Alignment::Center);
        f.render_widget(grid_paragraph, chunks[1]);

        let result_style = match &state.outcome {
            Some(outcome) if outcome.won => Style::default().fg(Color::Green),
            Some(_) => Style::default().fg(Color::Red),
            None => Style::default().fg(Color::Gray),
        };
        let result_paragraph = Paragraph::new(result_text(state))
            .block(Block::default().borders(Borders::ALL).title("Result"))
            .style(result_style)
            .alignment(Alignment::Center);
        f.render_widget(result_paragraph, chunks[2]);

        let instruction_paragraph = Paragraph::new(INSTRUCTIONS)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .wrap(Wrap { trim: true });
        f.render_widget(instruction_paragraph, chunks[3]);
    })?;
    Ok(())
}

/// Plain text version of the grid: `[v]` for selected cells, `(v)` for the
/// optimal path once revealed, ` v ` otherwise
pub fn render_game_to_string(shared: &SharedGameState, state: &GameRenderState) -> String {
    let mut result = String::new();
    for (i, row) in shared.grid.rows().enumerate() {
        let mut line = String::new();
        for (j, value) in row.iter().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            let cell = match cell_marker(state, &pos) {
                CellMarker::Selected => format!("[{}]", value),
                CellMarker::Optimal => format!("({})", value),
                CellMarker::Plain => format!(" {} ", value),
            };
            line.push_str(&cell);
        }
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

/// Cursor position after moving one cell, clamped to the grid
pub fn move_cursor(shared: &SharedGameState, cursor: Vec2, direction: Direction) -> Vec2 {
    let moved = match direction {
        Direction::Up => Vec2 { i: cursor.i - 1, j: cursor.j },
        Direction::Down => Vec2 { i: cursor.i + 1, j: cursor.j },
        Direction::Left => Vec2 { i: cursor.i, j: cursor.j - 1 },
        Direction::Right => Vec2 { i: cursor.i, j: cursor.j + 1 },
    };
    Vec2 {
        i: moved.i.clamp(0, shared.height() - 1),
        j: moved.j.clamp(0, shared.width() - 1),
    }
}

/// The cell in the column after the current position, or in column 0 before the first dig
pub fn next_column_cell(game: &GameState, row: i32) -> Vec2 {
    let j = game.current_position().map_or(0, |pos| pos.j + 1);
    Vec2 { i: row, j }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleInput {
    Cursor(Direction),
    SelectCursor,
    SelectRow(i32),
    Reset,
    NewGame,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> anyhow::Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Cursor(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Cursor(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Cursor(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Cursor(Direction::Right)
                }
                KeyCode::Enter | KeyCode::Char(' ') => ConsoleInput::SelectCursor,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reset,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NewGame,
                KeyCode::Char(c @ '1'..='9') => ConsoleInput::SelectRow(c as i32 - '1' as i32),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Deals a mine and dispatches inputs until `Quit`. Input and draw failures end the loop with the error.
pub fn run_game_loop<R: Rng>(
    rng: &mut R,
    mut next_input: impl FnMut() -> anyhow::Result<ConsoleInput>,
    mut draw: impl FnMut(&SharedGameState, &GameRenderState) -> anyhow::Result<()>,
) -> anyhow::Result<(SharedGameState, GameRenderState)> {
    let (mut shared, mut state) = new_game(rng)?;
    draw(&shared, &state)?;

    loop {
        match next_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
            ConsoleInput::Cursor(direction) => {
                state.cursor = move_cursor(&shared, state.cursor, direction);
            }
            ConsoleInput::SelectCursor => {
                state.apply(&shared, UserAction::Select(state.cursor));
            }
            ConsoleInput::SelectRow(row) => {
                let action = UserAction::Select(next_column_cell(&state.game, row));
                state.apply(&shared, action);
            }
            ConsoleInput::Reset => state.reset(),
            ConsoleInput::NewGame => {
                (shared, state) = new_game(rng)?;
            }
        }

        draw(&shared, &state)?;
    }

    Ok((shared, state))
}
