//! Venous phase: isotropic Gaussian smoothing.
//!
//! Separable convolution, one horizontal and one vertical pass per channel.
//! The kernel is truncated at `ceil(3σ)` and normalized to unit sum, so the
//! discarded tail mass is negligible. Borders replicate the edge pixel via
//! index clamping.
use crate::colorspace::bridge;
use crate::image::{ChannelOrder, ColorImage, DecodedImage};
use log::debug;

/// Default blur strength in pixels.
pub const DEFAULT_SIGMA: f32 = 2.5;

/// Blur a decoded image per channel, returning an RGB image of the same
/// size. Grayscale input is broadcast to three channels first. Deterministic
/// for a fixed `sigma`; `sigma <= 0` degenerates to a copy.
pub fn smooth(image: DecodedImage, sigma: f32) -> ColorImage {
    let rgb = bridge::to_rgb(image);
    let (w, h) = (rgb.width(), rgb.height());
    let kernel = gaussian_kernel(sigma);
    debug!(
        "venous smooth w={} h={} sigma={} kernel_len={}",
        w,
        h,
        sigma,
        kernel.len()
    );
    if kernel.len() == 1 {
        return rgb;
    }

    let mut out = ColorImage::new(w, h, ChannelOrder::Rgb);
    let mut channel = vec![0.0f32; w * h];
    for c in 0..3 {
        for y in 0..h {
            let row = rgb.row(y);
            for x in 0..w {
                channel[y * w + x] = row[x * 3 + c] as f32;
            }
        }
        let blurred = blur_plane(&channel, w, h, &kernel);
        for y in 0..h {
            let row = out.row_mut(y);
            for x in 0..w {
                row[x * 3 + c] = blurred[y * w + x].round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

/// Normalized 1-D Gaussian kernel of radius `ceil(3σ)`.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (3.0 * sigma).ceil() as isize;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-(i * i) as f32 / denom).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in kernel.iter_mut() {
        *k /= sum;
    }
    kernel
}

/// Two-pass separable convolution with replicate borders.
fn blur_plane(src: &[f32], w: usize, h: usize, kernel: &[f32]) -> Vec<f32> {
    let radius = (kernel.len() / 2) as isize;
    let mut tmp = vec![0.0f32; w * h];
    // horizontal
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let xi = (x as isize + k as isize - radius).clamp(0, w as isize - 1) as usize;
                acc += weight * row[xi];
            }
            tmp[y * w + x] = acc;
        }
    }
    // vertical
    let mut out = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let yi = (y as isize + k as isize - radius).clamp(0, h as isize - 1) as usize;
                acc += weight * tmp[yi * w + x];
            }
            out[y * w + x] = acc;
        }
    }
    out
}
