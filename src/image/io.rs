//! Codec boundary: decode arbitrary raster bytes, encode lossless PNG.
//!
//! - `decode`: read any format the `image` crate supports from memory into a
//!   [`DecodedImage`]. Alpha channels are dropped (RGBA → RGB, LA → L); the
//!   original pixel colors are kept as-is, not flattened against a
//!   background.
//! - `encode_png`: serialize an RGB [`ColorImage`] to PNG bytes starting
//!   with the `89 50 4E 47 0D 0A 1A 0A` signature.
use super::{ChannelOrder, ColorImage, PlaneU8};
use crate::error::{ProcessError, Result};
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

/// A successfully decoded input, with the source channel count preserved so
/// the colorspace bridge can apply its grayscale broadcast explicitly.
#[derive(Clone, Debug)]
pub enum DecodedImage {
    /// Single-channel source.
    Gray(PlaneU8),
    /// Three-channel source in external (RGB) ordering.
    Rgb(ColorImage),
}

impl DecodedImage {
    /// Width in pixels.
    pub fn width(&self) -> usize {
        match self {
            DecodedImage::Gray(plane) => plane.w,
            DecodedImage::Rgb(image) => image.width(),
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        match self {
            DecodedImage::Gray(plane) => plane.h,
            DecodedImage::Rgb(image) => image.height(),
        }
    }
}

/// Decode raster bytes into a [`DecodedImage`].
///
/// Accepts any container the `image` crate can sniff (PNG, JPEG, BMP, ...).
/// Single-channel and gray+alpha sources decode to [`DecodedImage::Gray`];
/// everything else is converted to 8-bit RGB. Alpha is dropped.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
    let img =
        image::load_from_memory(bytes).map_err(|e| ProcessError::Decode(e.to_string()))?;
    let gray_source = matches!(
        img,
        DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
    );
    if gray_source {
        let gray = img.into_luma8();
        let (w, h) = (gray.width() as usize, gray.height() as usize);
        Ok(DecodedImage::Gray(PlaneU8::from_raw(w, h, gray.into_raw())))
    } else {
        let rgb = img.into_rgb8();
        let (w, h) = (rgb.width() as usize, rgb.height() as usize);
        Ok(DecodedImage::Rgb(ColorImage::from_raw(
            w,
            h,
            ChannelOrder::Rgb,
            rgb.into_raw(),
        )))
    }
}

/// Encode an RGB image as lossless PNG bytes.
pub fn encode_png(image: &ColorImage) -> Result<Vec<u8>> {
    assert_eq!(
        image.order(),
        ChannelOrder::Rgb,
        "PNG encoder expects external (RGB) ordering"
    );
    let buffer: RgbImage = RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_raw().to_vec(),
    )
    .ok_or_else(|| ProcessError::Encode("buffer size does not match dimensions".to_string()))?;
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| ProcessError::Encode(e.to_string()))?;
    Ok(out)
}
