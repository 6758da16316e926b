/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

mod common;

use cereal_bmp::{BmpDecoder, BmpDecoderErrors, Pixel};
use cereal_core::options::DecoderOptions;
use common::{encode_bmp24, gradient, patch_u16, patch_u32};

#[test]
fn decode_bottom_up_image() {
    let pixels = gradient(4, 3);
    let data = encode_bmp24(4, 3, &pixels);

    let bitmap = BmpDecoder::new(&data).decode().unwrap();

    assert_eq!(bitmap.width(), 4);
    assert_eq!(bitmap.height(), 3);
    assert_eq!(bitmap.bits_per_pixel(), 24);
    assert_eq!(bitmap.pixels().len(), 12);
    assert_eq!(bitmap.pixels()[0], pixels[0]);
    assert_eq!(bitmap.pixels(), &pixels[..]);
}

#[test]
fn padded_rows_stay_aligned() {
    // 5 * 3 = 15 bytes of data per row, padded to 16
    for width in [1_usize, 2, 3, 5, 6, 7, 10] {
        let pixels = gradient(width, 7);
        let data = encode_bmp24(width, 7, &pixels);

        let bitmap = BmpDecoder::new(&data).decode().unwrap();

        assert_eq!(bitmap.pixels(), &pixels[..], "width {width}");
    }
}

#[test]
fn channels_are_reordered_to_rgb() {
    let mut data = encode_bmp24(1, 1, &[Pixel::BLACK]);
    // stored as B, G, R
    data[54..57].copy_from_slice(&[10, 20, 30]);

    let bitmap = BmpDecoder::new(&data).decode().unwrap();

    assert_eq!(bitmap.pixels()[0], Pixel { r: 30, g: 20, b: 10 });
}

#[test]
fn top_down_image_keeps_row_order() {
    let pixels = gradient(3, 4);
    let data = encode_bmp24(3, -4, &pixels);

    let bitmap = BmpDecoder::new(&data).decode().unwrap();

    assert!(bitmap.is_top_down());
    assert_eq!(bitmap.stored_height(), -4);
    assert_eq!(bitmap.height(), 4);
    assert_eq!(bitmap.pixels(), &pixels[..]);
}

#[test]
fn headers_expose_geometry() {
    let data = encode_bmp24(5, 2, &gradient(5, 2));
    let mut decoder = BmpDecoder::new(&data);

    assert!(decoder.dimensions().is_none());
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some((5, 2)));
    let info = decoder.info().unwrap();
    assert_eq!(info.pixels_offset, 54);
    assert_eq!(info.row_size(), Some(16));
    assert_eq!(info.padding(), Some(1));
}

#[test]
fn pixel_array_honours_offset() {
    let pixels = gradient(2, 2);
    let mut data = encode_bmp24(2, 2, &pixels);
    // insert a gap between the headers and the pixels
    for i in 0..6 {
        data.insert(54 + i, 0xEE);
    }
    let len = data.len() as u32;
    patch_u32(&mut data, 2, len);
    patch_u32(&mut data, 10, 60);

    let bitmap = BmpDecoder::new(&data).decode().unwrap();

    assert_eq!(bitmap.pixels(), &pixels[..]);
}

#[test]
fn short_buffer_is_rejected() {
    let data = encode_bmp24(2, 2, &gradient(2, 2));

    let err = BmpDecoder::new(&data[..20]).decode().unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::TooSmallBuffer(54, 20)));
}

#[test]
fn truncated_pixels_are_rejected() {
    let data = encode_bmp24(3, 3, &gradient(3, 3));
    let truncated = &data[..data.len() - 1];

    let err = BmpDecoder::new(truncated).decode().unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::TooSmallBuffer(_, _)));
}

#[test]
fn bad_magic_is_rejected() {
    let mut data = encode_bmp24(2, 2, &gradient(2, 2));
    data[0] = b'P';

    let err = BmpDecoder::new(&data).decode().unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::InvalidMagicBytes));
}

#[test]
fn compressed_images_are_rejected() {
    for method in [1_u32, 2, 3, 4, 99] {
        let mut data = encode_bmp24(2, 2, &gradient(2, 2));
        patch_u32(&mut data, 30, method);

        let err = BmpDecoder::new(&data).decode().unwrap_err();
        assert!(matches!(err, BmpDecoderErrors::UnsupportedCompression(m) if m == method));
    }
}

#[test]
fn other_depths_are_rejected() {
    let mut data = encode_bmp24(2, 2, &gradient(2, 2));
    patch_u16(&mut data, 28, 32);

    let err = BmpDecoder::new(&data).decode().unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::UnsupportedDepth(32)));
}

#[test]
fn zero_and_negative_widths_are_rejected() {
    let mut data = encode_bmp24(2, 2, &gradient(2, 2));
    patch_u32(&mut data, 18, (-2_i32) as u32);
    assert!(matches!(
        BmpDecoder::new(&data).decode().unwrap_err(),
        BmpDecoderErrors::InvalidDimensions("width", -2)
    ));

    patch_u32(&mut data, 18, 2);
    patch_u32(&mut data, 22, 0);
    assert!(matches!(
        BmpDecoder::new(&data).decode().unwrap_err(),
        BmpDecoderErrors::InvalidDimensions("height", 0)
    ));
}

#[test]
fn dimension_limits_are_respected() {
    let data = encode_bmp24(8, 2, &gradient(8, 2));
    let options = DecoderOptions::default().set_max_width(4);

    let err = BmpDecoder::new_with_options(&data, options)
        .decode()
        .unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::TooLargeDimensions("width", 4, 8)));
}

#[test]
fn strict_mode_checks_file_size_and_planes() {
    let mut data = encode_bmp24(2, 2, &gradient(2, 2));
    patch_u32(&mut data, 2, 0);
    patch_u16(&mut data, 26, 3);

    // lenient mode ignores both fields
    assert!(BmpDecoder::new(&data).decode().is_ok());

    let strict = DecoderOptions::default().set_strict_mode(true);
    assert!(BmpDecoder::new_with_options(&data, strict).decode().is_err());

    let len = data.len() as u32;
    patch_u32(&mut data, 2, len);
    assert!(BmpDecoder::new_with_options(&data, strict).decode().is_err());

    patch_u16(&mut data, 26, 1);
    assert!(BmpDecoder::new_with_options(&data, strict).decode().is_ok());
}
