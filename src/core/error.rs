//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::color::ColorError;

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    /// A dimension that must be non-zero was zero.
    ZeroField(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroField(x) => write!(f, "configuration field `{x}` must be non-zero"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum GridError {
    Io(io::Error),
    Color(ColorError),
    Config(ConfigError),
    OutOfBounds {
        x: u32,
        y: u32,
        cols: u32,
        rows: u32,
    },
    EmptyAnimation,
    DimensionMismatch {
        want_w: u32,
        want_h: u32,
        got_w: u32,
        got_h: u32,
    },
    FrameTooLarge {
        width: u32,
        height: u32,
        max: u32,
    },
    UnsupportedFormat(String),
    PngEncode(png::EncodingError),
    GifEncode(gif::EncodingError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Io(e) => write!(f, "{e}"),
            GridError::Color(e) => write!(f, "{e}"),
            GridError::Config(e) => write!(f, "{e}"),
            GridError::OutOfBounds { x, y, cols, rows } => {
                write!(f, "cell ({x}, {y}) outside {cols}×{rows} grid")
            }
            GridError::EmptyAnimation => write!(f, "no frames recorded"),
            GridError::DimensionMismatch {
                want_w,
                want_h,
                got_w,
                got_h,
            } => write!(
                f,
                "frame size mismatch: expected {want_w}×{want_h}, got {got_w}×{got_h}"
            ),
            GridError::FrameTooLarge { width, height, max } => {
                write!(f, "frame {width}×{height} exceeds format limit of {max}")
            }
            GridError::UnsupportedFormat(ext) => {
                write!(f, "unsupported output format `{ext}` (png, apng, gif)")
            }
            GridError::PngEncode(e) => write!(f, "{e}"),
            GridError::GifEncode(e) => write!(f, "{e}"),
        }
    }
}
impl Error for GridError {}

// automatic conversions
impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ColorError> for GridError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<png::EncodingError> for GridError {
    fn from(e: png::EncodingError) -> Self {
        Self::PngEncode(e)
    }
}
impl From<gif::EncodingError> for GridError {
    fn from(e: gif::EncodingError) -> Self {
        Self::GifEncode(e)
    }
}
