//! Public-facing crate root – re-exports + one-shot helpers.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{ColorError, Rgb},
    config::{GridConfig, GridConfigBuilder},
    error::{ConfigError, GridError},
    grid::{Cell, Grid, align_cells, align_offset, bounding_dims},
};

pub use crate::render::{AnimationOpts, Animator, Loops, Recorder, render_frame};

use std::path::Path;

/// Save the grid's current state as a still PNG.
pub fn save_image<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), GridError> {
    use std::{fs::File, io::BufWriter};
    let file = BufWriter::new(File::create(path.as_ref())?);
    render::write_png(file, &render_frame(grid).canvas)
}

/// Convenience function for one-off stills.  Builds a default-styled grid
/// (gridlines on, white background), fills the given cells and saves a PNG.
pub fn save_cells<P: AsRef<Path>>(
    path: P,
    cols: u32,
    rows: u32,
    cells: &[(Cell, Rgb)],
) -> Result<(), GridError> {
    let cfg = GridConfig::builder(cols, rows).gridlines(true).build()?;
    let mut grid = Grid::new(cfg);
    for &(cell, color) in cells {
        grid.fill_cell(cell, color)?;
    }
    save_image(&grid, path)
}
