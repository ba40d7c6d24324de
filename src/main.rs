// Gold Mine in the terminal with ratatui
// Dig a path from the left column to the right, moving right, up-right or down-right.
// Reaching the last column compares your path with the optimal one.

use anyhow::Context;
use gold_mine::config::{AppConfig, RunMode};
use gold_mine::console_interface::{
    cleanup_terminal, handle_input, parse_grid, render_game, run_game_loop, setup_terminal,
};
use gold_mine::core::{COLS, Grid, ROWS, solve};
use gold_mine::json_export::get_json_data;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_args(std::env::args().skip(1))?;
    init_logging(&config)?;
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    let mut rng = match config.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    match config.mode {
        RunMode::Interactive => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(&mut rng, &mut terminal);
            cleanup_terminal()?;
            result
        }
        RunMode::Solve => run_solve(&config, &mut rng),
    }
}

fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    // stderr would draw over the alternate screen
    if config.mode == RunMode::Interactive {
        let log_out = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&config.log_path)
            .with_context(|| format!("failed to open log file {}", config.log_path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_out)));
    }

    builder.init();
    Ok(())
}

fn run_solve(config: &AppConfig, rng: &mut StdRng) -> anyhow::Result<()> {
    let grid = match &config.grid_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read grid file {}", path.display()))?;
            parse_grid(&text).with_context(|| format!("invalid grid in {}", path.display()))?
        }
        None => Grid::random(rng, ROWS, COLS)?,
    };

    let solution = solve(&grid);
    info!("optimal gold {} over {} columns", solution.value, solution.path.len());
    println!("{}", get_json_data(&grid, &solution)?);
    Ok(())
}

fn run_interactive(
    rng: &mut StdRng,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> anyhow::Result<()> {
    let (_, state) = run_game_loop(rng, handle_input, |shared, state| {
        render_game(terminal, shared, state)
    })?;
    info!("quit with {} gold", state.game.gold);
    Ok(())
}
