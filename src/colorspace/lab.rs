//! 8-bit BGR ↔ LAB conversion.
//!
//! Scaling follows the common 8-bit convention: L* (0..100) is stored as
//! `L * 255 / 100`, and a*/b* are offset by +128. The forward path
//! linearizes sRGB, converts to XYZ under the D65 white point, then applies
//! the CIE L*a*b* transfer function. The round trip is exact only up to
//! 8-bit quantization: moderate colors come back within a couple of units,
//! but near gamut edges the ±0.5 a/b quantization passes through the steep
//! dark-end gamma and can move a channel by up to ~5.
use crate::image::{ChannelOrder, ColorImage, PlaneU8};

/// The LAB decomposition of an image: lightness plus two chroma planes.
/// Exists only for the duration of the arterial transform.
#[derive(Clone, Debug)]
pub struct LabPlanes {
    pub l: PlaneU8,
    pub a: PlaneU8,
    pub b: PlaneU8,
}

// D65 reference white.
const XN: f32 = 0.950456;
const ZN: f32 = 1.088754;

// CIE thresholds.
const EPSILON: f32 = 0.008856;
const KAPPA: f32 = 903.3;

/// Split a BGR image into 8-bit L, A, B planes.
pub fn split_lab(image: &ColorImage) -> LabPlanes {
    assert_eq!(
        image.order(),
        ChannelOrder::Bgr,
        "LAB split expects internal (BGR) ordering"
    );
    let (w, h) = (image.width(), image.height());
    let mut l_plane = PlaneU8::new(w, h);
    let mut a_plane = PlaneU8::new(w, h);
    let mut b_plane = PlaneU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let [b, g, r] = image.pixel(x, y);
            let (l, a, bb) = bgr_to_lab(b, g, r);
            l_plane.set(x, y, l);
            a_plane.set(x, y, a);
            b_plane.set(x, y, bb);
        }
    }
    LabPlanes {
        l: l_plane,
        a: a_plane,
        b: b_plane,
    }
}

/// Merge 8-bit L, A, B planes back into a BGR image.
pub fn merge_lab(planes: &LabPlanes) -> ColorImage {
    let (w, h) = (planes.l.w, planes.l.h);
    assert!(
        planes.a.w == w && planes.a.h == h && planes.b.w == w && planes.b.h == h,
        "LAB planes must share dimensions"
    );
    let mut out = ColorImage::new(w, h, ChannelOrder::Bgr);
    for y in 0..h {
        for x in 0..w {
            let (b, g, r) = lab_to_bgr(planes.l.get(x, y), planes.a.get(x, y), planes.b.get(x, y));
            out.set_pixel(x, y, [b, g, r]);
        }
    }
    out
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn bgr_to_lab(b: u8, g: u8, r: u8) -> (u8, u8, u8) {
    let r = srgb_to_linear(r as f32 / 255.0);
    let g = srgb_to_linear(g as f32 / 255.0);
    let b = srgb_to_linear(b as f32 / 255.0);

    let x = 0.412453 * r + 0.357580 * g + 0.180423 * b;
    let y = 0.212671 * r + 0.715160 * g + 0.072169 * b;
    let z = 0.019334 * r + 0.119193 * g + 0.950227 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y);
    let fz = lab_f(z / ZN);

    let l = if y > EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        KAPPA * y
    };
    let a = 500.0 * (fx - fy);
    let bb = 200.0 * (fy - fz);

    (
        (l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8,
        (a + 128.0).round().clamp(0.0, 255.0) as u8,
        (bb + 128.0).round().clamp(0.0, 255.0) as u8,
    )
}

fn lab_to_bgr(l: u8, a: u8, b: u8) -> (u8, u8, u8) {
    let l = l as f32 * 100.0 / 255.0;
    let a = a as f32 - 128.0;
    let b = b as f32 - 128.0;

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let yr = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };
    let xr = finv(fx);
    let zr = finv(fz);

    let x = xr * XN;
    let y = yr;
    let z = zr * ZN;

    let r = 3.240479 * x - 1.537150 * y - 0.498535 * z;
    let g = -0.969256 * x + 1.875992 * y + 0.041556 * z;
    let bl = 0.055648 * x - 0.204043 * y + 1.057311 * z;

    let to_u8 = |c: f32| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(bl), to_u8(g), to_u8(r))
}

fn finv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}
