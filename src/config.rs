use std::path::PathBuf;

use anyhow::{Context, bail};

pub const DEFAULT_LOG_PATH: &str = "gold_mine.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Play in the terminal
    Interactive,
    /// Print the optimal path of one grid as JSON and exit
    Solve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: RunMode,
    pub seed: Option<u64>,
    pub grid_path: Option<PathBuf>,
    pub log_path: PathBuf,
    /// Problems found while parsing which should be logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            mode: RunMode::Interactive,
            seed: None,
            grid_path: None,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Parses `[interactive|solve] [--seed N] [--grid FILE] [--log FILE]`,
    /// not including the program name
    pub fn from_args<I>(args: I) -> anyhow::Result<AppConfig>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = AppConfig::default();
        let mut args = args.into_iter().peekable();

        if let Some(mode) = args.next_if(|arg| !arg.starts_with("--")) {
            config.mode = match mode.as_str() {
                "interactive" => RunMode::Interactive,
                "solve" => RunMode::Solve,
                other => {
                    config.warnings.push(format!(
                        "Unknown mode: {}. Use 'interactive' or 'solve'. defaulting to interactive",
                        other
                    ));
                    RunMode::Interactive
                }
            };
        }

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--seed" => {
                    let value = flag_value(&mut args, &flag)?;
                    let seed = value
                        .parse::<u64>()
                        .with_context(|| format!("--seed expects an unsigned integer, got {:?}", value))?;
                    config.seed = Some(seed);
                }
                "--grid" => config.grid_path = Some(PathBuf::from(flag_value(&mut args, &flag)?)),
                "--log" => config.log_path = PathBuf::from(flag_value(&mut args, &flag)?),
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(config)
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .with_context(|| format!("{} requires a value", flag))
}
