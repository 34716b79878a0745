mod common;

use common::synthetic_image::{
    centered_square_png, gray_ramp_png, single_pixel_png,
};
use phase_contrast::image::io as codec;
use phase_contrast::transform::venous;
use phase_contrast::{process, process_str, Phase, ProcessError};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const SQUARE_COLOR: [u8; 3] = [120, 130, 140];

fn fixture() -> Vec<u8> {
    centered_square_png(128, 128, 64, SQUARE_COLOR)
}

#[test]
fn both_phases_emit_png_signature() {
    let input = fixture();
    for phase in [Phase::Arterial, Phase::Venous] {
        let out = process(&input, phase).expect("process");
        assert!(
            out.starts_with(&PNG_SIGNATURE),
            "output of {phase} is not PNG"
        );
    }
}

#[test]
fn dimensions_are_preserved() {
    let input = fixture();
    for phase in [Phase::Arterial, Phase::Venous] {
        let out = process(&input, phase).expect("process");
        let decoded = image::load_from_memory(&out).expect("decode output");
        assert_eq!(
            (decoded.width(), decoded.height()),
            (128, 128),
            "{phase} changed dimensions"
        );
    }
}

#[test]
fn processing_is_deterministic() {
    let input = fixture();
    for phase in [Phase::Arterial, Phase::Venous] {
        let first = process(&input, phase).expect("process");
        let second = process(&input, phase).expect("process");
        assert_eq!(first, second, "{phase} output differs between runs");
    }
}

#[test]
fn grayscale_input_yields_three_channel_output() {
    let input = gray_ramp_png(64, 32);
    for phase in [Phase::Arterial, Phase::Venous] {
        let out = process(&input, phase).expect("process");
        let decoded = image::load_from_memory(&out).expect("decode output");
        assert_eq!((decoded.width(), decoded.height()), (64, 32));
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }
}

#[test]
fn single_pixel_image_is_accepted() {
    let input = single_pixel_png([200, 100, 50]);
    for phase in [Phase::Arterial, Phase::Venous] {
        let out = process(&input, phase).expect("process");
        let decoded = image::load_from_memory(&out).expect("decode output");
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
    }
}

#[test]
fn venous_square_interior_survives_and_edge_blends() {
    let decoded = codec::decode(&fixture()).expect("decode fixture");
    let out = venous::smooth(decoded, 3.0);

    // Interior of the square stays closer to the fill color than to black.
    let center = out.pixel(64, 64);
    for (c, &expected) in center.iter().zip(SQUARE_COLOR.iter()) {
        let to_color = (*c as i32 - expected as i32).abs();
        let to_black = *c as i32;
        assert!(
            to_color < to_black,
            "center sample {c} drifted toward black (expected near {expected})"
        );
    }

    // The square spans x in [32, 96); the pixel on the boundary becomes an
    // intermediate blend.
    let edge = out.pixel(32, 64);
    assert!(
        edge[0] > 10 && edge[0] < 110,
        "edge sample should be a blend, got {}",
        edge[0]
    );

    // Monotonic falloff across the edge: moving from outside to inside
    // along the center row, values must not decrease.
    for x in 20..44usize {
        let prev = out.pixel(x, 64)[0];
        let next = out.pixel(x + 1, 64)[0];
        assert!(
            next >= prev,
            "falloff not monotonic at x={x}: {prev} -> {next}"
        );
    }
}

#[test]
fn arterial_output_differs_from_input() {
    let input = fixture();
    let out = process(&input, Phase::Arterial).expect("process");
    let original = image::load_from_memory(&input).unwrap().into_rgb8();
    let processed = image::load_from_memory(&out).unwrap().into_rgb8();
    assert_ne!(original.into_raw(), processed.into_raw());
}

#[test]
fn invalid_phase_is_rejected_before_decoding() {
    // Even with undecodable bytes the phase error must win.
    let err = process_str(&[], "capillary").unwrap_err();
    match err {
        ProcessError::InvalidPhase(phase) => assert_eq!(phase, "capillary"),
        other => panic!("expected InvalidPhase, got {other:?}"),
    }
}

#[test]
fn non_image_bytes_fail_with_decode_error() {
    for bytes in [&[][..], &b"definitely not an image"[..]] {
        let err = process(bytes, Phase::Venous).unwrap_err();
        assert!(matches!(err, ProcessError::Decode(_)), "got {err:?}");
    }
}
