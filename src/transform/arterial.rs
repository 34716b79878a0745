//! Arterial phase: local contrast enhancement.
//!
//! The input is bridged to the internal BGR ordering, decomposed into LAB,
//! and only the lightness plane is equalized (CLAHE, 8×8 tile grid, clip
//! limit 3.0) so the enhancement does not shift color. After recombining,
//! a 15% mean-anchored contrast boost is applied to the whole RGB image.
//!
//! Not idempotent: the contrast boost compounds on repeated application.
use super::clahe::{self, ClaheParams};
use super::contrast;
use crate::colorspace::{self, bridge};
use crate::image::{ColorImage, DecodedImage};
use log::debug;

/// Uniform contrast boost applied after the LAB-space equalization.
const CONTRAST_FACTOR: f32 = 1.15;

/// Enhance local contrast, returning an RGB image of the same size.
/// Deterministic; every decodable input is processable.
pub fn enhance(image: DecodedImage) -> ColorImage {
    let (w, h) = (image.width(), image.height());
    debug!("arterial enhance w={} h={}", w, h);

    let bgr = bridge::to_internal(image);
    let mut lab = colorspace::split_lab(&bgr);
    lab.l = clahe::equalize(&lab.l, &ClaheParams::default());
    let merged = colorspace::merge_lab(&lab);

    let mut rgb = bridge::to_external(merged);
    contrast::boost(&mut rgb, CONTRAST_FACTOR);
    rgb
}
