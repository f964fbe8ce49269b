use clap::{Args, Parser, Subcommand};

use crate::core::grid::Cell;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "gridviz",
    about = "Grid-based algorithm visualizations as PNG / APNG / GIF"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Conway's Game of Life on a random soup
    Life(LifeArgs),
    /// Greedy best-first search toward a target cell
    Search(SearchArgs),
    /// Fill the grid cell by cell in random colors
    Fill(FillArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Knobs shared by every animation-producing subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Cell edge length in pixels
    #[arg(long, default_value_t = 12)]
    pub cell_size: u32,

    /// Frame display time in milliseconds
    #[arg(long, default_value_t = 100)]
    pub duration: u64,

    /// Hold the final frame this many milliseconds before looping
    #[arg(long, default_value_t = 1000)]
    pub hold: u64,

    /// Loop count (0 = forever)
    #[arg(long, default_value_t = 0)]
    pub loops: u16,

    /// Disable the frame counter under the grid
    #[arg(long)]
    pub no_counter: bool,

    /// Open the written file in the system image viewer
    #[arg(long)]
    pub open: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `gridviz life …`
#[derive(Parser, Debug)]
pub struct LifeArgs {
    #[arg(long, default_value_t = 48)]
    pub cols: u32,
    #[arg(long, default_value_t = 32)]
    pub rows: u32,

    /// Number of generations to simulate
    #[arg(long, default_value_t = 120)]
    pub steps: usize,

    /// Initial fill probability per cell
    #[arg(long, default_value_t = 0.35)]
    pub density: f64,

    /// RNG seed (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Live-cell color (name or `#RRGGBB`)
    #[arg(long, default_value = "green")]
    pub color: String,

    #[arg(short, long, default_value = "life.gif")]
    pub output: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// `gridviz search …`
#[derive(Parser, Debug)]
pub struct SearchArgs {
    #[arg(long, default_value_t = 20)]
    pub cols: u32,
    #[arg(long, default_value_t = 20)]
    pub rows: u32,

    /// Start cell as `x,y`
    #[arg(long, default_value = "1,1", value_parser = parse_cell)]
    pub start: Cell,

    /// Target cell as `x,y`
    #[arg(long, default_value = "12,17", value_parser = parse_cell)]
    pub target: Cell,

    /// Explore diagonal neighbors too
    #[arg(long)]
    pub diagonal: bool,

    #[arg(short, long, default_value = "search.apng")]
    pub output: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// `gridviz fill …`
#[derive(Parser, Debug)]
pub struct FillArgs {
    #[arg(long, default_value_t = 5)]
    pub cols: u32,
    #[arg(long, default_value_t = 5)]
    pub rows: u32,

    /// RNG seed (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value = "fill.apng")]
    pub output: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Parse `x,y` into a cell coordinate.
fn parse_cell(s: &str) -> Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |t: &str| {
        t.trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid coordinate `{}`", t.trim()))
    };
    Ok((parse(x)?, parse(y)?))
}
