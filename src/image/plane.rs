//! Owned single-channel 8-bit plane in row-major layout (stride == width).
//!
//! Used for decoded grayscale input and for the L/A/B planes inside the
//! arterial transform.
#[derive(Clone, Debug)]
pub struct PlaneU8 {
    /// Plane width in pixels
    pub w: usize,
    /// Plane height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<u8>,
}

impl PlaneU8 {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        assert!(w >= 1 && h >= 1, "plane dimensions must be positive");
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Wrap an existing row-major buffer. `data.len()` must equal `w*h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert!(w >= 1 && h >= 1, "plane dimensions must be positive");
        assert_eq!(data.len(), w * h, "buffer size must match dimensions");
        Self { w, h, data }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the sample at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the sample at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Borrow the backing buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
