#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod colorspace;
pub mod config;
pub mod error;
pub mod image;
pub mod phase;
pub mod pipeline;
pub mod transform;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + selector + error taxonomy.
pub use crate::error::ProcessError;
pub use crate::phase::Phase;
pub use crate::pipeline::{process, process_str};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use phase_contrast::prelude::*;
///
/// # fn main() {
/// let bytes = std::fs::read("scan.png").expect("read input");
/// let png = process(&bytes, Phase::Venous).expect("process");
/// std::fs::write("venous.png", png).expect("write output");
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ChannelOrder, ColorImage};
    pub use crate::{process, process_str, Phase, ProcessError};
}
