// chfmt-core/tests/codec_tests.rs

use chfmt_core::{CodecError, Format, decode, encode};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

fn sample_rgb(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 20) as u8, (y * 30) as u8, 128])
    }))
}

fn encode_to_vec(image: &DynamicImage, format: Format) -> Vec<u8> {
    let mut buf = Vec::new();
    encode(&mut buf, image, format).expect("encode should succeed");
    buf
}

#[test]
fn test_round_trip_keeps_dimensions() {
    let original = sample_rgb(7, 5);

    for format in [Format::Jpeg, Format::Png, Format::Gif] {
        let bytes = encode_to_vec(&original, format);
        let (decoded, detected) = decode(Cursor::new(&bytes)).expect("decode should succeed");
        assert_eq!(detected, format);

        // Encode again in the same format and decode once more.
        let again = encode_to_vec(&decoded, format);
        let (redecoded, _) = decode(Cursor::new(again)).unwrap();
        assert_eq!((redecoded.width(), redecoded.height()), (7, 5), "{format}");
    }
}

#[test]
fn test_jpeg_encode_drops_alpha() {
    let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 128])));
    let bytes = encode_to_vec(&rgba, Format::Jpeg);

    let (decoded, detected) = decode(Cursor::new(bytes)).unwrap();
    assert_eq!(detected, Format::Jpeg);
    assert_eq!((decoded.width(), decoded.height()), (4, 4));
}

#[test]
fn test_decode_reports_actual_encoding() {
    let png_bytes = encode_to_vec(&sample_rgb(3, 3), Format::Png);
    let (_, detected) = decode(Cursor::new(png_bytes)).unwrap();
    assert_eq!(detected, Format::Png);
}

#[test]
fn test_decode_rejects_unrecognized_data() {
    let result = decode(Cursor::new(b"definitely not an image".to_vec()));
    match result {
        Err(e) => assert!(e.is_decode(), "unexpected error: {e:?}"),
        Ok(_) => panic!("garbage should not decode"),
    }

    assert!(decode(Cursor::new(Vec::new())).is_err());
}

#[test]
fn test_decode_rejects_truncated_png() {
    let mut bytes = encode_to_vec(&sample_rgb(16, 16), Format::Png);
    bytes.truncate(bytes.len() / 2);

    match decode(Cursor::new(bytes)) {
        Err(CodecError::Decode(_)) => {}
        other => panic!("expected decode error, got {:?}", other.map(|(_, f)| f)),
    }
}

#[test]
fn test_encode_unknown_format_is_unsupported() {
    let mut buf = Vec::new();
    match encode(&mut buf, &sample_rgb(2, 2), Format::Unknown) {
        Err(CodecError::UnsupportedFormat(Format::Unknown)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(buf.is_empty());
}
