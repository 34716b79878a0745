//! Pipeline driving a single request end-to-end.
//!
//! decode → phase transform → PNG encode. Every stage is a pure function
//! over its own buffers; there is no shared mutable state, so concurrent
//! calls are safe by construction.
//!
//! Typical usage:
//! ```no_run
//! use phase_contrast::{process, Phase};
//!
//! # fn example(bytes: &[u8]) {
//! match process(bytes, Phase::Arterial) {
//!     Ok(png) => println!("{} bytes", png.len()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```
use crate::error::Result;
use crate::image::io;
use crate::phase::Phase;
use crate::transform::{arterial, venous};
use log::debug;
use std::time::Instant;

/// Process raster bytes through the selected phase transform, returning
/// PNG-encoded bytes. Fails with [`crate::ProcessError::Decode`] if the
/// input is not a decodable raster image.
pub fn process(image_bytes: &[u8], phase: Phase) -> Result<Vec<u8>> {
    let total_start = Instant::now();

    let decode_start = Instant::now();
    let decoded = io::decode(image_bytes)?;
    debug!(
        "pipeline decode w={} h={} phase={} took {:.3}ms",
        decoded.width(),
        decoded.height(),
        phase,
        decode_start.elapsed().as_secs_f64() * 1000.0
    );

    let transform_start = Instant::now();
    let output = match phase {
        Phase::Arterial => arterial::enhance(decoded),
        Phase::Venous => venous::smooth(decoded, venous::DEFAULT_SIGMA),
    };
    debug!(
        "pipeline transform phase={} took {:.3}ms",
        phase,
        transform_start.elapsed().as_secs_f64() * 1000.0
    );

    let bytes = io::encode_png(&output)?;
    debug!(
        "pipeline done {} bytes out, total {:.3}ms",
        bytes.len(),
        total_start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(bytes)
}

/// Parse the phase from its literal string form, then process. The phase is
/// validated before the image bytes are touched, so an invalid phase never
/// reports a decode failure.
pub fn process_str(image_bytes: &[u8], phase: &str) -> Result<Vec<u8>> {
    let phase: Phase = phase.parse()?;
    process(image_bytes, phase)
}
