use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;

/// Serialize any image to PNG bytes.
pub fn png_bytes(img: DynamicImage) -> Vec<u8> {
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .expect("encode fixture");
    out
}

/// Black RGB image with a centered colored square. Deterministic input so
/// the pipeline tests are repeatable.
pub fn centered_square_rgb(width: u32, height: u32, square: u32, color: [u8; 3]) -> RgbImage {
    assert!(square <= width && square <= height);
    let mut img = RgbImage::new(width, height);
    let x0 = (width - square) / 2;
    let y0 = (height - square) / 2;
    for y in y0..y0 + square {
        for x in x0..x0 + square {
            img.put_pixel(x, y, Rgb(color));
        }
    }
    img
}

/// PNG bytes of the centered-square fixture.
pub fn centered_square_png(width: u32, height: u32, square: u32, color: [u8; 3]) -> Vec<u8> {
    png_bytes(DynamicImage::ImageRgb8(centered_square_rgb(
        width, height, square, color,
    )))
}

/// Single-channel horizontal ramp, encoded as a grayscale PNG.
pub fn gray_ramp_png(width: u32, height: u32) -> Vec<u8> {
    let mut img = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(1)) as u8;
            img.put_pixel(x, y, Luma([v]));
        }
    }
    png_bytes(DynamicImage::ImageLuma8(img))
}

/// 1×1 RGB PNG.
pub fn single_pixel_png(color: [u8; 3]) -> Vec<u8> {
    let mut img = RgbImage::new(1, 1);
    img.put_pixel(0, 0, Rgb(color));
    png_bytes(DynamicImage::ImageRgb8(img))
}
