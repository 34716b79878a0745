//! Owned interleaved 3-channel 8-bit image in row-major layout.
//!
//! The channel ordering is carried explicitly so RGB/BGR mix-ups are caught
//! at the boundary instead of silently corrupting output. Re-tagging only
//! happens together with the byte swap in [`ColorImage::swap_rb`].

/// Channel ordering of an interleaved 3-channel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Red, green, blue — the external ordering used at the codec boundary.
    Rgb,
    /// Blue, green, red — the internal ordering used by the LAB conversion.
    Bgr,
}

impl ChannelOrder {
    /// The opposite ordering.
    pub fn flipped(self) -> Self {
        match self {
            ChannelOrder::Rgb => ChannelOrder::Bgr,
            ChannelOrder::Bgr => ChannelOrder::Rgb,
        }
    }
}

/// Owned 3-channel image, 8 bits per sample, `stride == w * 3`.
#[derive(Clone, Debug)]
pub struct ColorImage {
    w: usize,
    h: usize,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl ColorImage {
    /// Construct a zero-filled image of size `w × h`.
    pub fn new(w: usize, h: usize, order: ChannelOrder) -> Self {
        assert!(w >= 1 && h >= 1, "image dimensions must be positive");
        Self {
            w,
            h,
            order,
            data: vec![0; w * h * 3],
        }
    }

    /// Wrap an existing interleaved buffer. `data.len()` must equal `w*h*3`.
    pub fn from_raw(w: usize, h: usize, order: ChannelOrder, data: Vec<u8>) -> Self {
        assert!(w >= 1 && h >= 1, "image dimensions must be positive");
        assert_eq!(data.len(), w * h * 3, "buffer size must match dimensions");
        Self { w, h, order, data }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.h
    }

    /// Channel ordering of the interleaved samples
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    #[inline]
    /// Convert (x, y) to the linear index of the pixel's first sample.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 3
    }

    #[inline]
    /// Get the three samples at (x, y) in stored order.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = self.idx(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    /// Set the three samples at (x, y) in stored order.
    pub fn set_pixel(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = self.idx(x, y);
        self.data[i..i + 3].copy_from_slice(&px);
    }

    #[inline]
    /// Borrow row `y` as an interleaved sample slice of length `w * 3`.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * 3;
        &self.data[start..start + self.w * 3]
    }

    #[inline]
    /// Mutably borrow row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w * 3;
        let end = start + self.w * 3;
        &mut self.data[start..end]
    }

    /// Borrow the whole interleaved buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the whole interleaved buffer.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Swap the first and third sample of every pixel and flip the order
    /// tag. This is the only way the tag changes, so buffer and tag can
    /// never disagree.
    pub fn swap_rb(mut self) -> Self {
        for px in self.data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        self.order = self.order.flipped();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelOrder, ColorImage};

    #[test]
    fn pixel_round_trip() {
        let mut img = ColorImage::new(4, 3, ChannelOrder::Rgb);
        img.set_pixel(2, 1, [10, 20, 30]);
        assert_eq!(img.pixel(2, 1), [10, 20, 30]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn rows_expose_interleaved_samples() {
        let mut img = ColorImage::new(2, 2, ChannelOrder::Rgb);
        img.set_pixel(1, 1, [9, 8, 7]);
        assert_eq!(&img.row(1)[3..6], &[9, 8, 7]);
        img.row_mut(0)[0] = 5;
        assert_eq!(img.pixel(0, 0), [5, 0, 0]);
    }

    #[test]
    fn swap_rb_flips_bytes_and_tag() {
        let mut img = ColorImage::new(2, 1, ChannelOrder::Rgb);
        img.set_pixel(0, 0, [1, 2, 3]);
        img.set_pixel(1, 0, [4, 5, 6]);
        let swapped = img.swap_rb();
        assert_eq!(swapped.order(), ChannelOrder::Bgr);
        assert_eq!(swapped.pixel(0, 0), [3, 2, 1]);
        assert_eq!(swapped.pixel(1, 0), [6, 5, 4]);
    }

    #[test]
    fn swap_rb_twice_is_identity() {
        let mut img = ColorImage::new(3, 2, ChannelOrder::Rgb);
        img.set_pixel(1, 1, [7, 8, 9]);
        let original = img.clone();
        let back = img.swap_rb().swap_rb();
        assert_eq!(back.order(), ChannelOrder::Rgb);
        assert_eq!(back.as_raw(), original.as_raw());
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn zero_dimensions_rejected() {
        let _ = ColorImage::new(0, 4, ChannelOrder::Rgb);
    }
}
