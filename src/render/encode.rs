//! PNG / APNG / GIF encoding over any `io::Write` sink.
//!
//! The `png` crate carries both the still and the animated (APNG) paths;
//! GIF goes through the `gif` crate's NeuQuant quantizer.  Both encoders
//! stream frame by frame, so assembled animations never exist twice in
//! memory.

use std::{
    io::Write,
    path::Path,
    time::Duration,
};

use crate::core::{constants::GIF_MAX_DIM, error::GridError};
use crate::render::{animate::{AnimationOpts, Loops}, frame::Frame, raster::Canvas};

/// Output container, picked from the target extension.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    Png,
    Apng,
    Gif,
}

/// Animation format for `path`: `png`/`apng` → APNG, `gif` → GIF.
pub fn format_for(path: &Path) -> Result<ImageFormat, GridError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" | "apng" => Ok(ImageFormat::Apng),
        "gif" => Ok(ImageFormat::Gif),
        other => Err(GridError::UnsupportedFormat(other.to_owned())),
    }
}

/// Still PNG of a single canvas.
pub fn write_png<W: Write>(sink: W, canvas: &Canvas) -> Result<(), GridError> {
    let mut enc = png::Encoder::new(sink, canvas.width(), canvas.height());
    enc.set_color(png::ColorType::Rgb);
    enc.set_depth(png::BitDepth::Eight);
    let mut writer = enc.write_header()?;
    writer.write_image_data(canvas.data())?;
    writer.finish()?;
    Ok(())
}

/// Animated PNG; every frame shares one delay and the first frame is part
/// of the animation.
pub fn write_apng<W: Write>(
    sink: W,
    frames: &[Frame],
    opts: &AnimationOpts,
) -> Result<(), GridError> {
    let plays = match opts.loops {
        Loops::Infinite => 0,
        Loops::Finite(n) => u32::from(n),
    };
    #[allow(clippy::cast_possible_truncation)]
    let delay_ms = opts.frame_ms().min(u64::from(u16::MAX)) as u16;

    let mut enc = png::Encoder::new(sink, frames[0].width(), frames[0].height());
    enc.set_color(png::ColorType::Rgb);
    enc.set_depth(png::BitDepth::Eight);
    enc.set_animated(frames.len() as u32, plays)?;
    enc.set_frame_delay(delay_ms, 1000)?;
    let mut writer = enc.write_header()?;
    for frame in frames {
        writer.write_image_data(frame.canvas.data())?;
    }
    writer.finish()?;
    Ok(())
}

/// Animated GIF; per-frame quantization, delay in centiseconds.
pub fn write_gif<W: Write>(
    sink: W,
    frames: &[Frame],
    opts: &AnimationOpts,
) -> Result<(), GridError> {
    let (width, height) = (frames[0].width(), frames[0].height());
    if width > GIF_MAX_DIM || height > GIF_MAX_DIM {
        return Err(GridError::FrameTooLarge {
            width,
            height,
            max: GIF_MAX_DIM,
        });
    }

    #[allow(clippy::cast_possible_truncation)]
    let (w16, h16) = (width as u16, height as u16);
    let mut enc = gif::Encoder::new(sink, w16, h16, &[])?;
    enc.set_repeat(match opts.loops {
        Loops::Infinite => gif::Repeat::Infinite,
        Loops::Finite(n) => gif::Repeat::Finite(n),
    })?;

    #[allow(clippy::cast_possible_truncation)]
    let delay_cs = (opts.frame_ms() / 10).clamp(1, u64::from(u16::MAX)) as u16;
    for frame in frames {
        let mut f = gif::Frame::from_rgb_speed(w16, h16, frame.canvas.data(), 10);
        f.delay = delay_cs;
        enc.write_frame(&f)?;
    }
    Ok(())
}

/// Frame delay helper shared by the CLI: user milliseconds → `Duration`.
#[inline]
#[must_use]
pub fn frame_duration(ms: u64) -> Duration {
    Duration::from_millis(ms.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::Rgb, config::GridConfig, grid::Grid};
    use crate::render::frame::render_frame;

    fn one_frame() -> Frame {
        let cfg = GridConfig::builder(2, 2).cell_size(3, 3).build().unwrap();
        let mut grid = Grid::new(cfg);
        grid.fill_cell((0, 1), Rgb::cyan()).unwrap();
        render_frame(&grid)
    }

    #[test]
    fn format_detection() {
        assert_eq!(format_for(Path::new("o.png")).unwrap(), ImageFormat::Apng);
        assert_eq!(format_for(Path::new("o.APNG")).unwrap(), ImageFormat::Apng);
        assert_eq!(format_for(Path::new("o.gif")).unwrap(), ImageFormat::Gif);
        assert!(matches!(
            format_for(Path::new("o.bmp")),
            Err(GridError::UnsupportedFormat(e)) if e == "bmp"
        ));
        assert!(format_for(Path::new("noext")).is_err());
    }

    #[test]
    fn png_signature_is_written() {
        let mut out = Vec::new();
        write_png(&mut out, &one_frame().canvas).unwrap();
        assert_eq!(&out[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn apng_contains_animation_control() {
        let frames = vec![one_frame(), one_frame()];
        let mut out = Vec::new();
        write_apng(&mut out, &frames, &AnimationOpts::default()).unwrap();
        assert_eq!(&out[..8], b"\x89PNG\r\n\x1a\n");
        // acTL chunk marks the file as animated
        assert!(out.windows(4).any(|w| w == b"acTL"));
    }

    #[test]
    fn gif_header_and_trailer() {
        let frames = vec![one_frame(), one_frame()];
        let mut out = Vec::new();
        write_gif(&mut out, &frames, &AnimationOpts::default()).unwrap();
        assert_eq!(&out[..6], b"GIF89a");
        assert_eq!(*out.last().unwrap(), 0x3B);
    }
}
