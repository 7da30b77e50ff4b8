//! Command-line flags, logging setup and the run loop shared by the demo
//! binaries.

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wavefront_core::{App, AppConfig};
use wavefront_crossterm::CrosstermDriver;
use wavefront_paths::Directions;
use wavefront_sim::{Explorer, ExplorerConfig};

use crate::Visualizer;

/// Log file used when `RUST_LOG` is set but no `--log-file` was given.
pub const DEFAULT_LOG_FILE: &str = "wavefront.log";

/// Flags common to both demos. Unset grid options keep the demo's preset.
#[derive(Parser, Debug, Clone)]
#[command(author, version)]
pub struct Cli {
    /// Grid width in cells
    #[arg(long)]
    pub columns: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    pub rows: Option<i32>,

    /// Probability that a cell is a wall, in [0, 1]
    #[arg(long)]
    pub wall_probability: Option<f64>,

    /// Ticks per BFS step (animated demo)
    #[arg(long)]
    pub step_delay: Option<u32>,

    /// Neighbour order as a permutation of l, u, r, d
    #[arg(long)]
    pub directions: Option<Directions>,

    /// Terminal columns per grid cell (1 to 16)
    #[arg(long, default_value_t = 2)]
    pub cell_width: i32,

    /// Frame-clock rate in ticks per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Seed for reproducible grids
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Override the fields of `preset` that were given on the command line.
    pub fn apply(&self, preset: ExplorerConfig) -> ExplorerConfig {
        ExplorerConfig {
            columns: self.columns.unwrap_or(preset.columns),
            rows: self.rows.unwrap_or(preset.rows),
            wall_probability: self.wall_probability.unwrap_or(preset.wall_probability),
            step_delay: self.step_delay.unwrap_or(preset.step_delay),
            directions: self.directions.unwrap_or(preset.directions),
            mode: preset.mode,
        }
        .sanitized()
    }
}

/// Install `env_logger` writing to `log_file`, or to
/// [`DEFAULT_LOG_FILE`] when only `RUST_LOG` is set. Does nothing
/// otherwise: the terminal is in raw mode and cannot take log lines.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None if std::env::var_os("RUST_LOG").is_some() => PathBuf::from(DEFAULT_LOG_FILE),
        None => return Ok(()),
    };
    let file = File::create(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

/// Generate a grid per `cli` over `preset`, then run the terminal app
/// until the user quits.
pub fn run(cli: &Cli, preset: ExplorerConfig, default_fps: u32) -> Result<(), Box<dyn Error>> {
    init_logging(cli.log_file.as_deref())?;

    let config = cli.apply(preset);
    let explorer = match cli.seed {
        Some(seed) => Explorer::generate(&config, StdRng::seed_from_u64(seed)),
        None => Explorer::generate(&config, rand::rng()),
    };
    log::info!(
        "{:?} demo: {}x{} grid, {} free cells, directions {}",
        config.mode,
        config.columns,
        config.rows,
        explorer.index().free_count(),
        config.directions
    );

    let model = Visualizer::new(explorer, cli.cell_width);
    let (width, height) = model.canvas_size();
    let mut app = App::new(AppConfig {
        model,
        driver: CrosstermDriver::new(),
        width,
        height,
        fps: cli.fps.unwrap_or(default_fps),
    });
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_sim::Mode;

    #[test]
    fn flags_override_preset() {
        let cli = Cli::parse_from([
            "bfs",
            "--columns",
            "12",
            "--step-delay",
            "4",
            "--directions",
            "rdlu",
            "--seed",
            "9",
        ]);
        let config = cli.apply(ExplorerConfig::goal_directed());
        assert_eq!(config.columns, 12);
        assert_eq!(config.rows, 20);
        assert_eq!(config.step_delay, 4);
        assert_eq!(config.directions.to_string(), "rdlu");
        assert_eq!(config.mode, Mode::RecomputePerFrame);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.cell_width, 2);
    }

    #[test]
    fn bad_directions_are_rejected() {
        assert!(Cli::try_parse_from(["bfs", "--directions", "lull"]).is_err());
    }

    #[test]
    fn nonsense_sizes_are_sanitized() {
        let cli = Cli::parse_from(["bfs", "--rows", "0", "--step-delay", "0"]);
        let config = cli.apply(ExplorerConfig::default());
        assert_eq!((config.rows, config.step_delay), (1, 1));
    }
}
