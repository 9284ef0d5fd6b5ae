use std::io::Cursor;

use image::{
    Delay, DynamicImage, Frame, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage,
    codecs::gif::GifEncoder,
};

use pngfit::{
    Dimensions, ErrorKind, PNG_SIGNATURE, ResizeConfig, ScalingAlgorithm, has_png_signature,
    release, resize, resize_base64, resize_base64_with_info, resize_with_config,
};

fn encode(image: impl Into<DynamicImage>, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.into().write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

fn decode_png(data: &[u8]) -> DynamicImage {
    assert_eq!(image::guess_format(data).unwrap(), ImageFormat::Png);
    image::load_from_memory_with_format(data, ImageFormat::Png).unwrap()
}

/// Deterministic bytes that no demuxer should accept as a video stream.
fn junk(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

/// Mono 16-bit PCM WAV: a valid container with only an audio stream.
fn wav(samples: usize) -> Vec<u8> {
    let data_len = (samples * 2) as u32;
    let mut out = Vec::with_capacity(44 + samples * 2);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // channels
    out.extend_from_slice(&8000u32.to_le_bytes()); // sample rate
    out.extend_from_slice(&16000u32.to_le_bytes()); // byte rate
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for i in 0..samples {
        out.extend_from_slice(&((i as i16).wrapping_mul(97)).to_le_bytes());
    }
    out
}

#[test]
fn small_png_passes_through_unchanged() {
    let input = encode(gradient(100, 100), ImageFormat::Png);

    let output = resize(&input, 1000).unwrap();

    assert_eq!(output.data(), &input[..]);
    assert_eq!((output.width(), output.height()), (100, 100));
    assert!(!output.was_resized());
}

#[test]
fn image_exactly_at_bound_passes_through() {
    let input = encode(gradient(64, 48), ImageFormat::Jpeg);

    let output = resize(&input, 64).unwrap();

    assert_eq!(output.data(), &input[..]);
    assert_eq!((output.width(), output.height()), (64, 48));
}

#[test]
fn large_landscape_is_halved_to_bound() {
    let input = encode(
        RgbImage::from_pixel(4000, 2000, Rgb([30, 120, 210])),
        ImageFormat::Png,
    );

    let output = resize(&input, 1000).unwrap();

    assert_eq!((output.width(), output.height()), (1000, 500));
    assert!(output.was_resized());
    assert_eq!(&output.data()[..8], &PNG_SIGNATURE);

    let decoded = decode_png(output.data());
    assert_eq!((decoded.width(), decoded.height()), (1000, 500));
}

#[test]
fn jpeg_input_becomes_png() {
    let input = encode(gradient(800, 600), ImageFormat::Jpeg);

    let output = resize(&input, 400).unwrap();

    assert_eq!((output.width(), output.height()), (400, 300));
    assert!(has_png_signature(output.data()));
    let decoded = decode_png(output.data());
    assert_eq!((decoded.width(), decoded.height()), (400, 300));
}

#[test]
fn aspect_ratio_is_preserved() {
    let input = encode(gradient(1234, 567), ImageFormat::Png);

    let output = resize(&input, 500).unwrap();

    assert_eq!(output.dimensions(), Dimensions::new(500, 229));
    let source_ratio = Dimensions::new(1234, 567).aspect_ratio();
    assert!((source_ratio - output.dimensions().aspect_ratio()).abs() < 0.01);
}

#[test]
fn extreme_aspect_ratio_keeps_one_pixel() {
    let input = encode(gradient(3000, 2), ImageFormat::Png);

    let output = resize(&input, 100).unwrap();

    assert_eq!((output.width(), output.height()), (100, 1));
    let decoded = decode_png(output.data());
    assert_eq!((decoded.width(), decoded.height()), (100, 1));
}

#[test]
fn transparency_survives_downscale() {
    let input = encode(
        RgbaImage::from_fn(300, 100, |x, _| {
            if x < 150 {
                Rgba([255, 0, 0, 0])
            } else {
                Rgba([0, 0, 255, 255])
            }
        }),
        ImageFormat::Png,
    );

    let output = resize(&input, 150).unwrap();

    let decoded = decode_png(output.data()).to_rgba8();
    assert_eq!(decoded.dimensions(), (150, 50));
    assert_eq!(decoded.get_pixel(5, 25)[3], 0);
    assert_eq!(decoded.get_pixel(145, 25)[3], 255);
}

#[test]
fn animated_gif_uses_first_frame() {
    let mut input = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut input);
        let frames = [Rgba([255, 0, 0, 255]), Rgba([0, 255, 0, 255])].map(|color| {
            Frame::from_parts(
                RgbaImage::from_pixel(200, 100, color),
                0,
                0,
                Delay::from_numer_denom_ms(100, 1),
            )
        });
        encoder.encode_frames(frames).unwrap();
    }

    let output = resize(&input, 50).unwrap();

    let decoded = decode_png(output.data()).to_rgba8();
    assert_eq!(decoded.dimensions(), (50, 25));
    let pixel = decoded.get_pixel(25, 12);
    assert!(pixel[0] > 200 && pixel[1] < 50);
}

#[test]
fn alternate_scaling_algorithm() {
    let input = encode(gradient(640, 480), ImageFormat::Png);
    let config = ResizeConfig::new(320).with_scaling(ScalingAlgorithm::Area);

    let output = resize_with_config(&input, &config).unwrap();

    assert_eq!((output.width(), output.height()), (320, 240));
    release(output);
}

#[test]
fn empty_input_is_invalid_data() {
    let err = resize(&[], 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn junk_input_is_rejected() {
    let err = resize(&junk(4096), 100).unwrap_err();
    assert!(
        matches!(err.kind(), ErrorKind::InvalidData | ErrorKind::StreamNotFound),
        "unexpected error: {err}"
    );
}

#[test]
fn audio_only_container_has_no_stream() {
    let err = resize(&wav(800), 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StreamNotFound);
}

#[test]
fn truncated_png_is_invalid_data() {
    let input = encode(gradient(300, 300), ImageFormat::Png);

    let err = resize(&input[..40], 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn zero_max_dimension_is_invalid_argument() {
    let input = encode(gradient(10, 10), ImageFormat::Png);

    let err = resize(&input, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn repeated_runs_are_independent() {
    let input = encode(gradient(500, 250), ImageFormat::Png);

    let first = resize(&input, 100).unwrap();
    let second = resize(&input, 100).unwrap();

    assert_eq!(first, second);
}

#[test]
fn base64_helpers_resize() {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    let input = STANDARD.encode(encode(gradient(300, 300), ImageFormat::Png));

    let info = resize_base64_with_info(&input, 100).unwrap();
    assert_eq!((info.width, info.height), (100, 100));
    assert!(info.resized);
    assert!(has_png_signature(&STANDARD.decode(&info.base64).unwrap()));

    assert_eq!(resize_base64(&input, 100).unwrap(), info.base64);
}

#[test]
fn c_interface_round_trip() {
    use std::ptr;

    use pngfit::ffi::{pngfit_free_buffer, pngfit_resize_image};

    let input = encode(gradient(400, 200), ImageFormat::Png);
    let mut output = ptr::null_mut();
    let mut output_len = 0usize;
    let (mut width, mut height) = (0, 0);

    let code = unsafe {
        pngfit_resize_image(
            input.as_ptr(),
            input.len(),
            100,
            &mut output,
            &mut output_len,
            &mut width,
            &mut height,
        )
    };

    assert_eq!(code, 0);
    assert_eq!((width, height), (100, 50));
    assert!(!output.is_null());
    let data = unsafe { std::slice::from_raw_parts(output, output_len) };
    assert!(has_png_signature(data));
    assert_eq!(decode_png(data).width(), 100);

    unsafe { pngfit_free_buffer(output) };
}

#[test]
fn c_interface_failure_allocates_nothing() {
    use std::ptr;

    use pngfit::ffi::pngfit_resize_image;

    let input = junk(512);
    let mut output = ptr::null_mut();
    let mut output_len = 0usize;
    let (mut width, mut height) = (0, 0);

    let code = unsafe {
        pngfit_resize_image(
            input.as_ptr(),
            input.len(),
            100,
            &mut output,
            &mut output_len,
            &mut width,
            &mut height,
        )
    };

    assert!(code < 0);
    assert!(output.is_null());
    assert_eq!(output_len, 0);
}

#[test]
fn c_interface_audio_only_container() {
    use std::ptr;

    use pngfit::ffi::pngfit_resize_image;

    let input = wav(800);
    let mut output = ptr::null_mut();
    let mut output_len = 0usize;
    let (mut width, mut height) = (0, 0);

    let code = unsafe {
        pngfit_resize_image(
            input.as_ptr(),
            input.len(),
            100,
            &mut output,
            &mut output_len,
            &mut width,
            &mut height,
        )
    };

    assert_eq!(code, ErrorKind::StreamNotFound.code());
    assert!(output.is_null());
    assert_eq!(output_len, 0);
}
