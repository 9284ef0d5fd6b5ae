/*!
    Media encoding for the ffmpeg crate ecosystem.

    This crate turns a raw frame into a compressed packet. The only target is
    PNG: one frame in, one packet out.

    # Example

    ```ignore
    use ffmpeg_encode::{PngEncoder, find_png_encoder};

    let codec = find_png_encoder()?;
    let mut encoder = PngEncoder::open(codec, Dimensions::new(1000, 500), Pixel::RGBA)?;

    let mut packet = ffmpeg_next::Packet::empty();
    encoder.encode(&scaled_frame, &mut packet)?;
    ```

    # Errors

    - [`Error::EncoderNotFound`] - the FFmpeg build lacks a PNG encoder
    - [`Error::EncodeFailed`] - the encoder could not be opened, or rejected
      the frame, or produced no packet
*/

pub use ffmpeg_types::{Dimensions, Error, Result};

mod png;

pub use png::{PngEncoder, find_png_encoder};
