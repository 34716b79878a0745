//! Mean-anchored linear contrast scaling.
//!
//! `out = mean + factor * (in - mean)`, where `mean` is the rounded ITU-R
//! BT.601 luma mean of the whole image. Scaling every channel around the
//! same anchor brightens above-mean samples and darkens below-mean ones
//! without shifting the overall exposure.
use crate::image::{ChannelOrder, ColorImage};

/// Scale contrast in place around the image's luma mean.
pub fn boost(image: &mut ColorImage, factor: f32) {
    assert_eq!(
        image.order(),
        ChannelOrder::Rgb,
        "contrast boost expects external (RGB) ordering"
    );
    let mean = luma_mean(image).round();
    for sample in image.as_raw_mut() {
        let v = mean + factor * (*sample as f32 - mean);
        *sample = v.round().clamp(0.0, 255.0) as u8;
    }
}

/// BT.601 luma mean over all pixels.
fn luma_mean(image: &ColorImage) -> f32 {
    let mut sum = 0.0f64;
    for px in image.as_raw().chunks_exact(3) {
        let luma = (px[0] as u32 * 299 + px[1] as u32 * 587 + px[2] as u32 * 114) as f64 / 1000.0;
        sum += luma;
    }
    (sum / (image.width() * image.height()) as f64) as f32
}
