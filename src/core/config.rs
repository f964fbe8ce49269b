//! Run-time configuration object + fluent builder.

use crate::core::{color::Rgb, constants::DEFAULT_CELL_PX, error::ConfigError};

/// Immutable parameters a [`Grid`](crate::core::grid::Grid) is built from.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub cols: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub gridlines: bool,
    pub gridline_width: u32,
    pub gridline_color: Rgb,
    pub bg_color: Rgb,
    pub frame_counter: bool,
    pub counter_color: Rgb,
    pub counter_label: String,
    pub flip_vertical: bool,
}

impl GridConfig {
    #[inline]
    pub fn builder(cols: u32, rows: u32) -> GridConfigBuilder {
        GridConfigBuilder::new(cols, rows)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct GridConfigBuilder {
    cols: u32,
    rows: u32,
    cell_width: u32,
    cell_height: u32,
    gridlines: bool,
    gridline_width: u32,
    gridline_color: Rgb,
    bg_color: Rgb,
    frame_counter: bool,
    counter_color: Rgb,
    counter_label: Option<String>,
    flip_vertical: bool,
}

impl GridConfigBuilder {
    pub(crate) fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            cell_width: DEFAULT_CELL_PX,
            cell_height: DEFAULT_CELL_PX,
            gridlines: false,
            gridline_width: 1,
            gridline_color: Rgb::black(),
            bg_color: Rgb::white(),
            frame_counter: false,
            counter_color: Rgb::black(),
            counter_label: None,
            flip_vertical: false,
        }
    }

    #[inline]
    pub fn cell_size(mut self, w: u32, h: u32) -> Self {
        self.cell_width = w;
        self.cell_height = h;
        self
    }
    #[inline]
    pub fn gridlines(mut self, on: bool) -> Self {
        self.gridlines = on;
        self
    }
    #[inline]
    pub fn gridline_width(mut self, w: u32) -> Self {
        self.gridline_width = w;
        self.gridlines = true;
        self
    }
    #[inline]
    pub fn gridline_color<C: Into<Rgb>>(mut self, c: C) -> Self {
        self.gridline_color = c.into();
        self
    }
    #[inline]
    pub fn bg_color<C: Into<Rgb>>(mut self, c: C) -> Self {
        self.bg_color = c.into();
        self
    }
    #[inline]
    pub fn frame_counter(mut self, on: bool) -> Self {
        self.frame_counter = on;
        self
    }
    #[inline]
    pub fn counter_color<C: Into<Rgb>>(mut self, c: C) -> Self {
        self.counter_color = c.into();
        self
    }
    #[inline]
    pub fn counter_label(mut self, label: impl Into<String>) -> Self {
        self.counter_label = Some(label.into());
        self
    }
    #[inline]
    pub fn flip_vertical(mut self, on: bool) -> Self {
        self.flip_vertical = on;
        self
    }

    pub fn build(self) -> Result<GridConfig, ConfigError> {
        if self.cols == 0 {
            return Err(ConfigError::ZeroField("cols"));
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroField("rows"));
        }
        if self.cell_width == 0 {
            return Err(ConfigError::ZeroField("cell_width"));
        }
        if self.cell_height == 0 {
            return Err(ConfigError::ZeroField("cell_height"));
        }
        if self.gridlines && self.gridline_width == 0 {
            return Err(ConfigError::ZeroField("gridline_width"));
        }
        Ok(GridConfig {
            cols: self.cols,
            rows: self.rows,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            gridlines: self.gridlines,
            gridline_width: self.gridline_width,
            gridline_color: self.gridline_color,
            bg_color: self.bg_color,
            frame_counter: self.frame_counter,
            counter_color: self.counter_color,
            counter_label: self.counter_label.unwrap_or_else(|| "FRAME".to_owned()),
            flip_vertical: self.flip_vertical,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<GridConfigBuilder> for Result<GridConfig, ConfigError> {
    fn from(b: GridConfigBuilder) -> Self {
        b.build()
    }
}
