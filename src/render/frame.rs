//! Grid state → one rasterized frame.
//!
//! Paint order: background, cell rectangles, gridline bands.  The counter
//! band is left blank here — the text depends on the frame's position in
//! the finished animation, so stamping happens during assembly
//! ([`animate`](crate::render::animate)).  Each frame instead carries a
//! [`CounterSlot`] describing where and how to stamp.

use crate::core::{
    color::Rgb,
    constants::{COUNTER_BAND_MIN_PX, COUNTER_MARGIN_PX},
    geometry::Rect,
    grid::Grid,
};
use crate::render::raster::Canvas;

/// Everything needed to stamp the counter text into a frame later.
#[derive(Clone, Debug)]
pub struct CounterSlot {
    /// Top-left corner of the text, in frame pixels.
    pub origin: (u32, u32),
    pub color: Rgb,
    pub scale: u32,
    /// Text prefix, e.g. `FRAME` for `FRAME 3 / 12`.
    pub label: String,
}

/// One rasterized snapshot of a grid.
#[derive(Clone, Debug)]
pub struct Frame {
    pub canvas: Canvas,
    pub counter: Option<CounterSlot>,
    /// Duplicated tail frame holding the final result on screen.
    pub hold: bool,
}

impl Frame {
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }
}

/// Rasterize the grid's current state.
#[must_use]
pub fn render_frame(grid: &Grid) -> Frame {
    let cfg = grid.config();
    let l = *grid.layout();

    let mut canvas = Canvas::new(l.image_w, l.image_h, cfg.bg_color);

    for ((x, y), color) in grid.filled() {
        canvas.fill_rect(l.cell_rect(x, y), color);
    }

    if l.gutter > 0 {
        let step = cfg.cell_width + l.gutter;
        for i in 0..=cfg.cols {
            canvas.fill_rect(
                Rect {
                    x: i * step,
                    y: 0,
                    w: l.gutter,
                    h: l.grid_h,
                },
                cfg.gridline_color,
            );
        }
        let step = cfg.cell_height + l.gutter;
        for i in 0..=cfg.rows {
            canvas.fill_rect(
                Rect {
                    x: 0,
                    y: i * step,
                    w: l.grid_w,
                    h: l.gutter,
                },
                cfg.gridline_color,
            );
        }
    }

    let counter = cfg.frame_counter.then(|| CounterSlot {
        origin: (COUNTER_MARGIN_PX, l.band_top() + COUNTER_MARGIN_PX),
        color: cfg.counter_color,
        scale: (l.band_h / COUNTER_BAND_MIN_PX).max(1),
        label: cfg.counter_label.clone(),
    });

    Frame {
        canvas,
        counter,
        hold: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GridConfig;

    #[test]
    fn frame_matches_layout_dimensions() {
        let cfg = GridConfig::builder(3, 2)
            .cell_size(10, 10)
            .gridline_width(2)
            .frame_counter(true)
            .build()
            .unwrap();
        let grid = Grid::new(cfg);
        let f = render_frame(&grid);
        // 3*10 + 4*2 = 38 wide, 2*10 + 3*2 = 26 tall + 15px band
        assert_eq!((f.width(), f.height()), (38, 41));
        let slot = f.counter.unwrap();
        assert_eq!(slot.origin, (3, 29));
        assert_eq!(slot.scale, 1);
        assert_eq!(slot.label, "FRAME");
    }

    #[test]
    fn cells_gridlines_and_background_land_where_computed() {
        let cfg = GridConfig::builder(2, 2)
            .cell_size(4, 4)
            .gridline_width(1)
            .gridline_color(Rgb::gray())
            .bg_color(Rgb::white())
            .build()
            .unwrap();
        let mut grid = Grid::new(cfg);
        grid.fill_cell((1, 0), Rgb::red()).unwrap();
        let f = render_frame(&grid);

        // gridline pixels at every gutter band
        assert_eq!(f.canvas.px_at(0, 3), Rgb::gray());
        assert_eq!(f.canvas.px_at(5, 2), Rgb::gray());
        assert_eq!(f.canvas.px_at(10, 10), Rgb::gray());
        // cell (1, 0) spans x 6..10, y 1..5
        assert_eq!(f.canvas.px_at(6, 1), Rgb::red());
        assert_eq!(f.canvas.px_at(9, 4), Rgb::red());
        // unfilled cell stays background
        assert_eq!(f.canvas.px_at(1, 1), Rgb::white());
    }

    #[test]
    fn counter_disabled_means_no_slot_and_no_band() {
        let cfg = GridConfig::builder(2, 2).cell_size(4, 4).build().unwrap();
        let f = render_frame(&Grid::new(cfg));
        assert!(f.counter.is_none());
        assert_eq!(f.height(), 8);
    }
}
