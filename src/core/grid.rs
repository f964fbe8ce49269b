//! The cell grid: colored-cell state + coordinate helpers.
//!
//! A `Grid` is pure state; turning it into pixels is the render layer's
//! job ([`render_frame`](crate::render::frame::render_frame)).  Algorithms
//! drive it one `fill_cell` at a time and a
//! [`Recorder`](crate::render::animate::Recorder) snapshots the states worth
//! keeping.

use crate::core::{
    color::Rgb,
    config::GridConfig,
    error::GridError,
    geometry::Layout,
};

/// Cell coordinate `(column, row)`.
pub type Cell = (u32, u32);

pub struct Grid {
    cfg: GridConfig,
    layout: Layout,
    /// Row-major, visual orientation; `None` renders as background.
    cells: Vec<Option<Rgb>>,
}

impl Grid {
    #[must_use]
    pub fn new(cfg: GridConfig) -> Self {
        let layout = Layout::of(&cfg);
        let cells = vec![None; cfg.cols as usize * cfg.rows as usize];
        Self { cfg, layout, cells }
    }

    // --- Accessors ---

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.cfg
    }
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    #[inline]
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cfg.cols
    }
    #[inline]
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.cfg.rows
    }

    /// Visual row for a logical `y` (identity unless `flip_vertical`).
    #[inline]
    fn visual_row(&self, y: u32) -> u32 {
        if self.cfg.flip_vertical {
            self.cfg.rows - 1 - y
        } else {
            y
        }
    }

    #[inline]
    fn index(&self, (x, y): Cell) -> Result<usize, GridError> {
        if x >= self.cfg.cols || y >= self.cfg.rows {
            return Err(GridError::OutOfBounds {
                x,
                y,
                cols: self.cfg.cols,
                rows: self.cfg.rows,
            });
        }
        let row = self.visual_row(y);
        Ok(row as usize * self.cfg.cols as usize + x as usize)
    }

    // --- Cell Operations ---

    /// Color the cell at `cell`.
    pub fn fill_cell<C: Into<Rgb>>(&mut self, cell: Cell, fill: C) -> Result<(), GridError> {
        let i = self.index(cell)?;
        self.cells[i] = Some(fill.into());
        Ok(())
    }

    /// Reset the cell at `cell` to background.
    pub fn clear_cell(&mut self, cell: Cell) -> Result<(), GridError> {
        let i = self.index(cell)?;
        self.cells[i] = None;
        Ok(())
    }

    /// Current color of a cell (`None` = background).
    pub fn cell(&self, cell: Cell) -> Result<Option<Rgb>, GridError> {
        let i = self.index(cell)?;
        Ok(self.cells[i])
    }

    /// Reset every cell to background.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Iterate filled cells in visual row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (Cell, Rgb)> + '_ {
        let cols = self.cfg.cols as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            #[allow(clippy::cast_possible_truncation)]
            let cell = ((i % cols) as u32, (i / cols) as u32);
            c.map(|rgb| (cell, rgb))
        })
    }

    /// In-bounds neighbors of `cell`; `diag` adds the four diagonals.
    #[must_use]
    pub fn neighbors(&self, (x, y): Cell, diag: bool) -> Vec<Cell> {
        const ORTHO: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        const DIAG: [(i64, i64); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

        let (cols, rows) = (i64::from(self.cfg.cols), i64::from(self.cfg.rows));
        let mut out = Vec::with_capacity(if diag { 8 } else { 4 });
        let mut push = |dx: i64, dy: i64| {
            let nx = i64::from(x) + dx;
            let ny = i64::from(y) + dy;
            if nx >= 0 && ny >= 0 && nx < cols && ny < rows {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                out.push((nx as u32, ny as u32));
            }
        };
        for (dx, dy) in ORTHO {
            push(dx, dy);
        }
        if diag {
            for (dx, dy) in DIAG {
                push(dx, dy);
            }
        }
        out
    }

    // --- Style Mutation Between Frames ---

    /// Change the gridline color; takes effect from the next snapshot.
    pub fn set_gridline_color<C: Into<Rgb>>(&mut self, c: C) {
        self.cfg.gridline_color = c.into();
    }

    /// Change the frame-counter text color; applied when frames are stamped.
    pub fn set_counter_color<C: Into<Rgb>>(&mut self, c: C) {
        self.cfg.counter_color = c.into();
    }
}

// --- Coordinate Alignment ---

/// Translation that shifts every coordinate into the non-negative quadrant.
#[must_use]
pub fn align_offset(coords: &[(i64, i64)]) -> (i64, i64) {
    let min_x = coords.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = coords.iter().map(|c| c.1).min().unwrap_or(0);
    (-min_x.min(0), -min_y.min(0))
}

/// Apply [`align_offset`] and narrow to grid coordinates.
#[must_use]
pub fn align_cells(coords: &[(i64, i64)]) -> Vec<Cell> {
    let (dx, dy) = align_offset(coords);
    coords
        .iter()
        .map(|&(x, y)| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let cell = ((x + dx) as u32, (y + dy) as u32);
            cell
        })
        .collect()
}

/// Smallest `(cols, rows)` grid that fits the aligned coordinates.
#[must_use]
pub fn bounding_dims(coords: &[(i64, i64)]) -> (u32, u32) {
    let aligned = align_cells(coords);
    let cols = aligned.iter().map(|c| c.0 + 1).max().unwrap_or(0);
    let rows = aligned.iter().map(|c| c.1 + 1).max().unwrap_or(0);
    (cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GridConfig;

    fn grid(cols: u32, rows: u32) -> Grid {
        Grid::new(GridConfig::builder(cols, rows).build().unwrap())
    }

    #[test]
    fn fill_and_query_round_trip() {
        let mut g = grid(3, 3);
        g.fill_cell((2, 1), Rgb::red()).unwrap();
        assert_eq!(g.cell((2, 1)).unwrap(), Some(Rgb::red()));
        assert_eq!(g.cell((0, 0)).unwrap(), None);
        g.clear_cell((2, 1)).unwrap();
        assert_eq!(g.cell((2, 1)).unwrap(), None);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut g = grid(3, 3);
        assert!(matches!(
            g.fill_cell((3, 0), Rgb::red()),
            Err(GridError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(g.cell((0, 3)).is_err());
    }

    #[test]
    fn flip_vertical_mirrors_rows() {
        let cfg = GridConfig::builder(2, 4).flip_vertical(true).build().unwrap();
        let mut g = Grid::new(cfg);
        g.fill_cell((0, 0), Rgb::green()).unwrap();
        // logical (0, 0) is the bottom-left; it lands in visual row 3
        let filled: Vec<_> = g.filled().collect();
        assert_eq!(filled, vec![((0, 3), Rgb::green())]);
        // querying through the same mapping still sees it at (0, 0)
        assert_eq!(g.cell((0, 0)).unwrap(), Some(Rgb::green()));
    }

    #[test]
    fn neighbor_sets_at_corner_and_center() {
        let g = grid(3, 3);
        let mut corner = g.neighbors((0, 0), false);
        corner.sort_unstable();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);

        let mut corner_diag = g.neighbors((0, 0), true);
        corner_diag.sort_unstable();
        assert_eq!(corner_diag, vec![(0, 1), (1, 0), (1, 1)]);

        assert_eq!(g.neighbors((1, 1), false).len(), 4);
        assert_eq!(g.neighbors((1, 1), true).len(), 8);
    }

    #[test]
    fn alignment_shifts_into_positive_quadrant() {
        let coords = [(-2, 3), (0, -1), (4, 4)];
        assert_eq!(align_offset(&coords), (2, 1));
        assert_eq!(align_cells(&coords), vec![(0, 4), (2, 0), (6, 5)]);
        assert_eq!(bounding_dims(&coords), (7, 6));
    }

    #[test]
    fn alignment_of_positive_coords_is_identity() {
        let coords = [(1, 2), (3, 0)];
        assert_eq!(align_offset(&coords), (0, 0));
        assert_eq!(align_cells(&coords), vec![(1, 2), (3, 0)]);
    }
}
