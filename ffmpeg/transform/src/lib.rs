/*!
    Media frame transformation for the ffmpeg crate ecosystem.

    This crate converts decoded frames into the geometry and pixel format an
    encoder needs: scaling plus pixel format conversion (YUV → RGBA, etc.).

    Decoders output frames in whatever format the codec specifies; this crate
    negotiates a format the target encoder accepts and resamples into it.

    # Format Negotiation

    ```ignore
    use ffmpeg_transform::encoder_pixel_format;

    let png = ffmpeg_next::encoder::find(ffmpeg_next::codec::Id::PNG).unwrap();
    // RGBA if supported, then RGB24, then the encoder's first listed format
    let format = encoder_pixel_format(png);
    ```

    # Scaling

    ```ignore
    use ffmpeg_transform::{VideoTransform, VideoTransformConfig};

    let config = VideoTransformConfig::new(Dimensions::new(1000, 500), format);
    let mut transform = VideoTransform::new(source_dims, decoded.format(), config)?;

    let mut scaled = frame::Video::empty();
    transform.alloc_output(&mut scaled)?;
    transform.run(&decoded, &mut scaled)?;
    ```

    Scaling defaults to Lanczos. Transforms are built for one input geometry
    and format; a frame that differs is rejected rather than rescaled.
*/

pub use ffmpeg_types::{Dimensions, Error, Result};

mod format;
mod video;

pub use format::{encoder_pixel_format, negotiate_pixel_format};
pub use video::{ScalingAlgorithm, VideoTransform, VideoTransformConfig};
