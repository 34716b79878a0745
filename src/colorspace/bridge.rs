//! Bridge between the external (RGB) and internal (BGR) channel orderings.
//!
//! Pure channel reordering: pixel count and dimensions are preserved. A
//! single-channel source is broadcast to three identical channels here
//! rather than rejected, since the pipeline accepts the broadest decodable
//! input.
use crate::image::{ChannelOrder, ColorImage, DecodedImage, PlaneU8};

/// Convert a decoded input to the internal BGR ordering.
///
/// Grayscale input is broadcast to three identical channels; RGB input is
/// swizzled in place.
pub fn to_internal(image: DecodedImage) -> ColorImage {
    match image {
        DecodedImage::Gray(plane) => broadcast(&plane, ChannelOrder::Bgr),
        DecodedImage::Rgb(img) => img.swap_rb(),
    }
}

/// Convert an internal BGR image back to the external RGB ordering.
pub fn to_external(image: ColorImage) -> ColorImage {
    assert_eq!(
        image.order(),
        ChannelOrder::Bgr,
        "to_external expects internal (BGR) ordering"
    );
    image.swap_rb()
}

/// Convert a decoded input straight to external RGB, broadcasting grayscale.
/// Used by transforms that never leave the external ordering.
pub fn to_rgb(image: DecodedImage) -> ColorImage {
    match image {
        DecodedImage::Gray(plane) => broadcast(&plane, ChannelOrder::Rgb),
        DecodedImage::Rgb(img) => img,
    }
}

/// Replicate a single plane into all three channels. The result is valid
/// under either ordering since the channels are identical.
fn broadcast(plane: &PlaneU8, order: ChannelOrder) -> ColorImage {
    let mut out = Vec::with_capacity(plane.w * plane.h * 3);
    for &v in plane.as_slice() {
        out.extend_from_slice(&[v, v, v]);
    }
    ColorImage::from_raw(plane.w, plane.h, order, out)
}
