//! Command line front end for maze layout generation.

mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use maze_core::{ExitPlacement, MazeConfig};
use maze_gen::{build_maze, Maze, WallPlacement};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `#` outer wall, `+` inner wall, `.` open
    Text,
    /// Seed and full grid as JSON
    Json,
    /// Wall objects with scene positions, as JSON
    Placements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExitArg {
    Fixed,
    Random,
}

impl From<ExitArg> for ExitPlacement {
    fn from(arg: ExitArg) -> Self {
        match arg {
            ExitArg::Fixed => ExitPlacement::FixedMidpoint,
            ExitArg::Random => ExitPlacement::RandomAlongEdge,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "maze", version, about = "Generate a maze layout")]
struct Cli {
    /// JSON maze config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Row count (raised to 5 if smaller)
    #[arg(long)]
    rows: Option<i32>,

    /// Column count (raised to 5 if smaller)
    #[arg(long)]
    cols: Option<i32>,

    /// Seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of placing each inner wall pair, 0.0 to 1.0
    #[arg(long)]
    density: Option<f32>,

    /// Exit position along its edge
    #[arg(long, value_enum)]
    exit: Option<ExitArg>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn maze_config(&self) -> Result<MazeConfig> {
        let mut config = match &self.config {
            Some(path) => MazeConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => MazeConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(density) = self.density {
            config.generator.inner_wall_density = density;
        }
        if let Some(exit) = self.exit {
            config.generator.exit_placement = exit.into();
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.log_json)?;

    let config = cli.maze_config()?;
    info!(rows = config.rows, cols = config.cols, seed = ?config.seed, "Generating maze");

    let maze = build_maze(&config).context("maze generation failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&maze, cli.format, &mut out)?;
    out.flush()?;

    Ok(())
}

fn render(maze: &Maze, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Text => write!(out, "{}", maze.grid)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, maze)?;
            writeln!(out)?;
        }
        Format::Placements => {
            let walls: Vec<WallPlacement> = maze.placements().collect();
            serde_json::to_writer_pretty(&mut *out, &walls)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
