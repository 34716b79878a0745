//! Contrast-limited adaptive histogram equalization on a single plane.
//!
//! The plane is divided into a tile grid; each tile gets its own clipped
//! histogram and equalization lookup table, and pixels are mapped by
//! bilinear interpolation between the four surrounding tile LUTs. The clip
//! limit bounds how much any one tile's histogram can stretch, which keeps
//! near-uniform regions from having their noise amplified.
//!
//! Tile geometry: tile size is `ceil(dim / tiles)`, so trailing tiles may be
//! smaller and the grid shrinks for planes smaller than the requested tile
//! count. Interpolation uses uniform tile spacing, which treats a ragged
//! trailing tile as if it were full-size; the approximation only affects the
//! last partial tile column/row.
use crate::image::PlaneU8;

/// Tile grid and clip configuration.
#[derive(Clone, Debug)]
pub struct ClaheParams {
    /// Histogram clip limit as a multiple of the uniform bin height.
    pub clip_limit: f32,
    /// Requested tile columns.
    pub tiles_x: usize,
    /// Requested tile rows.
    pub tiles_y: usize,
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            clip_limit: 3.0,
            tiles_x: 8,
            tiles_y: 8,
        }
    }
}

/// Equalize `plane` tile-locally, returning a new plane of the same size.
pub fn equalize(plane: &PlaneU8, params: &ClaheParams) -> PlaneU8 {
    let (w, h) = (plane.w, plane.h);
    // Shrink the grid so every tile covers at least one pixel.
    let tiles_x = params.tiles_x.clamp(1, w);
    let tiles_y = params.tiles_y.clamp(1, h);
    let tile_w = w.div_ceil(tiles_x);
    let tile_h = h.div_ceil(tiles_y);
    let nx = w.div_ceil(tile_w);
    let ny = h.div_ceil(tile_h);

    let luts = build_tile_luts(plane, tile_w, tile_h, nx, ny, params.clip_limit);

    let mut out = PlaneU8::new(w, h);
    for y in 0..h {
        let (ty0, ty1, wy) = tile_axis(y, tile_h, ny);
        for x in 0..w {
            let (tx0, tx1, wx) = tile_axis(x, tile_w, nx);
            let v = plane.get(x, y) as usize;
            let v00 = luts[ty0 * nx + tx0][v] as f32;
            let v10 = luts[ty0 * nx + tx1][v] as f32;
            let v01 = luts[ty1 * nx + tx0][v] as f32;
            let v11 = luts[ty1 * nx + tx1][v] as f32;
            let top = v00 + wx * (v10 - v00);
            let bottom = v01 + wx * (v11 - v01);
            let blended = top + wy * (bottom - top);
            out.set(x, y, blended.round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

/// Map a pixel coordinate to the two neighboring tile indices along one
/// axis plus the interpolation weight toward the second tile. Pixels outside
/// the first/last tile centers clamp to the edge tile.
fn tile_axis(p: usize, tile: usize, n: usize) -> (usize, usize, f32) {
    let f = (p as f32 + 0.5) / tile as f32 - 0.5;
    if n == 1 || f <= 0.0 {
        (0, 0, 0.0)
    } else if f >= (n - 1) as f32 {
        (n - 1, n - 1, 0.0)
    } else {
        let t0 = f.floor() as usize;
        (t0, t0 + 1, f - t0 as f32)
    }
}

/// One equalization LUT per tile, built from the tile's clipped histogram.
fn build_tile_luts(
    plane: &PlaneU8,
    tile_w: usize,
    tile_h: usize,
    nx: usize,
    ny: usize,
    clip_limit: f32,
) -> Vec<[u8; 256]> {
    let mut luts = vec![[0u8; 256]; nx * ny];
    for ty in 0..ny {
        for tx in 0..nx {
            let x0 = tx * tile_w;
            let y0 = ty * tile_h;
            let x1 = (x0 + tile_w).min(plane.w);
            let y1 = (y0 + tile_h).min(plane.h);

            let mut hist = [0u32; 256];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[plane.get(x, y) as usize] += 1;
                }
            }
            let area = ((x1 - x0) * (y1 - y0)) as u32;
            clip_histogram(&mut hist, clip_limit, area);

            // Cumulative histogram scaled to the full 8-bit range.
            let scale = 255.0 / area as f32;
            let lut = &mut luts[ty * nx + tx];
            let mut cum = 0u32;
            for (bin, entry) in lut.iter_mut().enumerate() {
                cum += hist[bin];
                *entry = (cum as f32 * scale).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    luts
}

/// Clip bins at `clip_limit` times the uniform height and redistribute the
/// excess evenly across the range (stepped, so leftovers do not pile up in
/// the low bins).
fn clip_histogram(hist: &mut [u32; 256], clip_limit: f32, area: u32) {
    let limit = ((clip_limit * area as f32 / 256.0) as u32).max(1);
    let mut excess = 0u32;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }
    if excess == 0 {
        return;
    }
    let batch = excess / 256;
    let mut residual = excess % 256;
    for bin in hist.iter_mut() {
        *bin += batch;
    }
    let step = (256 / residual.max(1) as usize).max(1);
    let mut i = 0;
    while residual > 0 && i < 256 {
        hist[i] += 1;
        residual -= 1;
        i += step;
    }
}
