//! Frame recording + animation assembly.
//!
//! ### Workflow
//! 1. A [`Recorder`] snapshots a [`Grid`] whenever the caller has a state
//!    worth showing; each snapshot is a full rasterized [`Frame`].
//! 2. `save_animation` (one clip) or [`Animator::save`] (many clips,
//!    optionally resized to a common size) assemble the final sequence:
//!    hold frames are materialized, the counter text is stamped with its
//!    final numbering, and the result streams into the APNG or GIF encoder
//!    picked from the output extension.
//!
//! Hold frames duplicate the last frame of a clip so the finished state
//! stays on screen before the animation loops.  They are flagged and the
//! counter skips them: the displayed position never advances past the
//! number of real frames.

use std::{fs::File, io::BufWriter, io::Write, path::Path, time::Duration};

use crate::core::{
    constants::DEFAULT_FRAME_MS,
    error::GridError,
    grid::Grid,
};
use crate::render::{
    encode::{self, ImageFormat},
    font,
    frame::{Frame, render_frame},
};

// --- Options ---

/// How often the finished animation repeats.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Loops {
    Infinite,
    Finite(u16),
}

impl Loops {
    /// CLI convention: `0` repeats forever.
    #[inline]
    #[must_use]
    pub fn from_count(n: u16) -> Self {
        if n == 0 { Self::Infinite } else { Self::Finite(n) }
    }
}

impl Default for Loops {
    fn default() -> Self {
        Self::Infinite
    }
}

/// Assembly parameters shared by every save path.
#[derive(Clone, Copy, Debug)]
pub struct AnimationOpts {
    /// Display time per frame.
    pub duration: Duration,
    pub loops: Loops,
}

impl Default for AnimationOpts {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_FRAME_MS),
            loops: Loops::Infinite,
        }
    }
}

impl AnimationOpts {
    /// Whole milliseconds per frame, never zero.
    #[inline]
    #[must_use]
    pub fn frame_ms(&self) -> u64 {
        (self.duration.as_millis() as u64).max(1)
    }
}

// --- Recorder ---

/// Collects frames from one grid as its algorithm runs.
#[derive(Default)]
pub struct Recorder {
    frames: Vec<Frame>,
    hold: Duration,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterize and append the grid's current state.
    pub fn snapshot(&mut self, grid: &Grid) {
        self.frames.push(render_frame(grid));
    }

    /// Keep the final frame on screen this long before looping.
    pub fn set_hold(&mut self, hold: Duration) {
        self.hold = hold;
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Assemble this recording and write it to `path` (`.png`/`.apng` or
    /// `.gif`).
    pub fn save_animation<P: AsRef<Path>>(
        &self,
        path: P,
        opts: &AnimationOpts,
    ) -> Result<(), GridError> {
        Animator::new().save(&[self], path, opts)
    }

    /// Assemble and encode into any sink, using an explicit format.
    pub fn write_animation<W: Write>(
        &self,
        sink: W,
        format: ImageFormat,
        opts: &AnimationOpts,
    ) -> Result<(), GridError> {
        Animator::new().write(&[self], sink, format, opts)
    }
}

// --- Animator ---

/// Concatenates one or more recordings into a single animation.
#[derive(Default)]
pub struct Animator {
    resize: Option<(u32, u32)>,
    hold: Option<Duration>,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale every assembled frame to `w`×`h` (nearest neighbor).  Required
    /// when the clips come from grids of different pixel sizes.
    #[must_use]
    pub fn resize(mut self, w: u32, h: u32) -> Self {
        self.resize = Some((w, h));
        self
    }

    /// Override every clip's own hold: only the final clip is held, for
    /// this duration.
    #[must_use]
    pub fn hold_result(mut self, hold: Duration) -> Self {
        self.hold = Some(hold);
        self
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        clips: &[&Recorder],
        path: P,
        opts: &AnimationOpts,
    ) -> Result<(), GridError> {
        let path = path.as_ref();
        let format = encode::format_for(path)?;
        let file = BufWriter::new(File::create(path)?);
        self.write(clips, file, format, opts)
    }

    pub fn write<W: Write>(
        &self,
        clips: &[&Recorder],
        sink: W,
        format: ImageFormat,
        opts: &AnimationOpts,
    ) -> Result<(), GridError> {
        let frames = self.assemble(clips, opts)?;
        match format {
            // a single-frame "animation" degrades to a still image
            ImageFormat::Png => encode::write_png(sink, &frames[0].canvas),
            ImageFormat::Apng => encode::write_apng(sink, &frames, opts),
            ImageFormat::Gif => encode::write_gif(sink, &frames, opts),
        }
    }

    /// Materialize holds, stamp counters, enforce a single frame size.
    fn assemble(&self, clips: &[&Recorder], opts: &AnimationOpts) -> Result<Vec<Frame>, GridError> {
        let mut frames: Vec<Frame> = Vec::new();
        let last_clip = clips.len().wrapping_sub(1);

        for (ci, clip) in clips.iter().enumerate() {
            frames.extend_from_slice(clip.frames());

            let hold = match self.hold {
                // a global hold applies to the end of the whole animation
                Some(h) => {
                    if ci == last_clip {
                        h
                    } else {
                        Duration::ZERO
                    }
                }
                None => clip.hold,
            };
            let hold_count = hold.as_millis() as u64 / opts.frame_ms();
            if let Some(last) = frames.last().cloned() {
                for _ in 0..hold_count {
                    frames.push(Frame { hold: true, ..last.clone() });
                }
            }
        }

        if frames.is_empty() {
            return Err(GridError::EmptyAnimation);
        }

        // counter numbering skips hold frames
        let shown_total = frames.iter().filter(|f| !f.hold).count();
        let mut pos = 0usize;
        for frame in &mut frames {
            if !frame.hold {
                pos += 1;
            }
            if let Some(slot) = frame.counter.take() {
                let text = format!("{} {pos} / {shown_total}", slot.label);
                font::draw_text(&mut frame.canvas, slot.origin, &text, slot.color, slot.scale);
            }
        }

        if let Some((w, h)) = self.resize {
            for frame in &mut frames {
                frame.canvas = frame.canvas.resize_nearest(w, h);
            }
        }

        let (w, h) = (frames[0].width(), frames[0].height());
        if let Some(bad) = frames.iter().find(|f| f.width() != w || f.height() != h) {
            return Err(GridError::DimensionMismatch {
                want_w: w,
                want_h: h,
                got_w: bad.width(),
                got_h: bad.height(),
            });
        }

        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::Rgb, config::GridConfig, grid::Grid};

    fn recorder_with(frames: usize, counter: bool) -> Recorder {
        let cfg = GridConfig::builder(2, 2)
            .cell_size(4, 4)
            .frame_counter(counter)
            .build()
            .unwrap();
        let mut grid = Grid::new(cfg);
        let mut rec = Recorder::new();
        for i in 0..frames {
            grid.fill_cell((i as u32 % 2, i as u32 / 2 % 2), Rgb::red())
                .unwrap();
            rec.snapshot(&grid);
        }
        rec
    }

    #[test]
    fn hold_appends_flagged_duplicates() {
        let mut rec = recorder_with(3, false);
        rec.set_hold(Duration::from_millis(500));
        let opts = AnimationOpts::default(); // 100 ms frames
        let frames = Animator::new().assemble(&[&rec], &opts).unwrap();
        assert_eq!(frames.len(), 8);
        assert_eq!(frames.iter().filter(|f| f.hold).count(), 5);
        assert_eq!(frames[2].canvas, frames[7].canvas);
    }

    #[test]
    fn global_hold_only_applies_to_the_last_clip() {
        let a = recorder_with(2, false);
        let mut b = recorder_with(2, false);
        b.set_hold(Duration::from_millis(300)); // overridden
        let opts = AnimationOpts::default();
        let frames = Animator::new()
            .hold_result(Duration::from_millis(200))
            .assemble(&[&b, &a], &opts)
            .unwrap();
        // 2 + 2 real frames + 2 hold frames at the very end
        assert_eq!(frames.len(), 6);
        assert!(frames[4].hold && frames[5].hold);
        assert!(frames[..4].iter().all(|f| !f.hold));
    }

    #[test]
    fn counter_numbering_skips_holds() {
        let mut rec = recorder_with(2, true);
        rec.set_hold(Duration::from_millis(200));
        let opts = AnimationOpts::default();
        let frames = Animator::new().assemble(&[&rec], &opts).unwrap();
        assert_eq!(frames.len(), 4);
        // stamped hold frames render identically to the final real frame
        assert_eq!(frames[1].canvas, frames[2].canvas);
        assert_eq!(frames[1].canvas, frames[3].canvas);
        // stamping consumed the slots
        assert!(frames.iter().all(|f| f.counter.is_none()));
        // the two real frames differ (different cell + different number)
        assert_ne!(frames[0].canvas, frames[1].canvas);
    }

    #[test]
    fn empty_recording_is_an_error() {
        let rec = Recorder::new();
        let opts = AnimationOpts::default();
        assert!(matches!(
            Animator::new().assemble(&[&rec], &opts),
            Err(GridError::EmptyAnimation)
        ));
    }

    #[test]
    fn mismatched_clip_sizes_need_resize() {
        let small = recorder_with(1, false);
        let cfg = GridConfig::builder(4, 4).cell_size(4, 4).build().unwrap();
        let mut rec = Recorder::new();
        rec.snapshot(&Grid::new(cfg));
        let opts = AnimationOpts::default();

        assert!(matches!(
            Animator::new().assemble(&[&small, &rec], &opts),
            Err(GridError::DimensionMismatch { .. })
        ));

        let frames = Animator::new()
            .resize(10, 10)
            .assemble(&[&small, &rec], &opts)
            .unwrap();
        assert!(frames.iter().all(|f| f.width() == 10 && f.height() == 10));
    }
}
