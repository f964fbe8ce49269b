//! Pixel-space layout derived from a [`GridConfig`].
//!
//! All placement math lives here so the rasterizer and the grid agree on
//! where every cell, gutter and the counter band sit.  The gutter model:
//! with gridlines enabled the image alternates `gutter, cell, gutter, cell,
//! ..., gutter`, so gridline band `i` occupies exactly the pixels
//! `[i·(cell+gutter), i·(cell+gutter)+gutter)` on each axis and cells never
//! overlap it.

use crate::core::{
    config::GridConfig,
    constants::{COUNTER_BAND_MIN_PX, COUNTER_BAND_RATIO},
};

/// A pixel-space rectangle (origin top-left).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Resolved pixel layout of one grid image.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    /// Gridline thickness, 0 when gridlines are off.
    pub gutter: u32,
    /// Grid surface size (cells + gutters, no counter band).
    pub grid_w: u32,
    pub grid_h: u32,
    /// Counter band height, 0 when the counter is off.
    pub band_h: u32,
    /// Full image size.
    pub image_w: u32,
    pub image_h: u32,
    cell_w: u32,
    cell_h: u32,
}

impl Layout {
    #[must_use]
    pub fn of(cfg: &GridConfig) -> Self {
        let gutter = if cfg.gridlines { cfg.gridline_width } else { 0 };
        let grid_w = cfg.cols * cfg.cell_width + (cfg.cols + 1) * gutter;
        let grid_h = cfg.rows * cfg.cell_height + (cfg.rows + 1) * gutter;
        let band_h = if cfg.frame_counter {
            counter_band_height(grid_h)
        } else {
            0
        };
        Self {
            gutter,
            grid_w,
            grid_h,
            band_h,
            image_w: grid_w,
            image_h: grid_h + band_h,
            cell_w: cfg.cell_width,
            cell_h: cfg.cell_height,
        }
    }

    /// Pixel rectangle of the cell at visual column `x`, visual row `y`.
    #[inline]
    #[must_use]
    pub fn cell_rect(&self, x: u32, y: u32) -> Rect {
        Rect {
            x: self.gutter + x * (self.cell_w + self.gutter),
            y: self.gutter + y * (self.cell_h + self.gutter),
            w: self.cell_w,
            h: self.cell_h,
        }
    }

    /// Top edge of the counter band (equals `grid_h`).
    #[inline]
    #[must_use]
    pub fn band_top(&self) -> u32 {
        self.grid_h
    }
}

/// `max(15, 2.5% of the grid height)`, matching the band the images in the
/// wild were rendered with.
#[inline]
#[must_use]
pub fn counter_band_height(grid_h: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (COUNTER_BAND_RATIO * f64::from(grid_h)) as u32;
    scaled.max(COUNTER_BAND_MIN_PX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GridConfig;

    #[test]
    fn dims_without_gridlines() {
        let cfg = GridConfig::builder(5, 4).cell_size(10, 8).build().unwrap();
        let l = Layout::of(&cfg);
        assert_eq!((l.grid_w, l.grid_h), (50, 32));
        assert_eq!((l.image_w, l.image_h), (50, 32));
        assert_eq!(l.cell_rect(0, 0), Rect { x: 0, y: 0, w: 10, h: 8 });
        assert_eq!(l.cell_rect(2, 3), Rect { x: 20, y: 24, w: 10, h: 8 });
    }

    #[test]
    fn dims_with_gridlines() {
        // 5 cells of 40px + 6 gridlines of 1px = 206
        let cfg = GridConfig::builder(5, 5).gridline_width(1).build().unwrap();
        let l = Layout::of(&cfg);
        assert_eq!((l.grid_w, l.grid_h), (206, 206));
        assert_eq!(l.cell_rect(0, 0), Rect { x: 1, y: 1, w: 40, h: 40 });
        assert_eq!(l.cell_rect(4, 0).x + l.cell_rect(4, 0).w, 205);
    }

    #[test]
    fn counter_band_respects_minimum_and_ratio() {
        assert_eq!(counter_band_height(100), 15);
        assert_eq!(counter_band_height(599), 15);
        assert_eq!(counter_band_height(600), 15);
        assert_eq!(counter_band_height(1000), 25);

        let cfg = GridConfig::builder(2, 2)
            .cell_size(10, 10)
            .frame_counter(true)
            .build()
            .unwrap();
        let l = Layout::of(&cfg);
        assert_eq!(l.band_h, 15);
        assert_eq!(l.image_h, l.grid_h + 15);
        assert_eq!(l.band_top(), l.grid_h);
    }
}
