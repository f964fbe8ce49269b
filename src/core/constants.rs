//! A collection of constants.

/// Counter band is never shorter than this, so the text always fits
pub const COUNTER_BAND_MIN_PX: u32 = 15;
/// Above the minimum, the band grows to 2.5% of the grid height
pub const COUNTER_BAND_RATIO: f64 = 0.025;
/// Padding between the band edge and the counter text
pub const COUNTER_MARGIN_PX: u32 = 3;

/// Default per-frame display time for animations, in milliseconds
pub const DEFAULT_FRAME_MS: u64 = 100;
/// Default edge length of a cell in pixels
pub const DEFAULT_CELL_PX: u32 = 40;

/// Glyph width of the built-in bitmap font
pub const FONT_WIDTH: u32 = 5;
/// Glyph height of the built-in bitmap font
pub const FONT_HEIGHT: u32 = 7;

/// GIF stores dimensions as u16; larger frames cannot be encoded.
pub const GIF_MAX_DIM: u32 = u16::MAX as u32;
