pub mod animate;
pub mod encode;
pub mod font;
pub mod frame;
pub mod raster;

pub use animate::{AnimationOpts, Animator, Loops, Recorder};
pub use encode::{ImageFormat, format_for, write_apng, write_gif, write_png};
pub use frame::{CounterSlot, Frame, render_frame};
pub use raster::Canvas;
