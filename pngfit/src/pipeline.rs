/*!
    The decode → plan → rescale → encode pipeline.
*/

use ffmpeg_decode::VideoDecoder;
use ffmpeg_encode::{PngEncoder, find_png_encoder};
use ffmpeg_next::{Packet, util::frame::video::Video as VideoFrameFFmpeg};
use ffmpeg_source::MemoryInput;
use ffmpeg_transform::{VideoTransform, VideoTransformConfig, encoder_pixel_format};
use ffmpeg_types::{Dimensions, Error, Result};

use crate::config::ResizeConfig;
use crate::normalize::{copy_bytes_with_prefix, normalize_png};
use crate::run::RunContext;

/**
    Output of a resize call.

    Owns its buffer; dropping it (or passing it to [`release`]) frees it.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizedImage {
    data: Vec<u8>,
    dimensions: Dimensions,
    resized: bool,
}

impl ResizedImage {
    /// The encoded image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the encoded image bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /**
        Returns false when the input already fit and was returned verbatim.
    */
    pub fn was_resized(&self) -> bool {
        self.resized
    }
}

/**
    Shrink an encoded image so neither side exceeds `max_dimension`, as PNG.

    Inputs that already fit are returned byte-for-byte, in their original
    format. Larger inputs are scaled with Lanczos, keeping their aspect
    ratio, and re-encoded as PNG. Only the first frame of animated or video
    input is used.
*/
pub fn resize(input: &[u8], max_dimension: u32) -> Result<ResizedImage> {
    resize_with_config(input, &ResizeConfig::new(max_dimension))
}

/**
    Like [`resize`], with every knob exposed.
*/
pub fn resize_with_config(input: &[u8], config: &ResizeConfig) -> Result<ResizedImage> {
    config.validate()?;

    let mut run = RunContext::new();

    let source = run.source.insert(MemoryInput::open(input)?);
    let decoder = run.decoder.insert(VideoDecoder::open(source)?);
    let packet = run.packet.insert(Packet::empty());
    let decoded = run.decoded.insert(VideoFrameFFmpeg::empty());
    let source_dims = decoder.decode_first_frame(source, packet, decoded)?;

    let target = source_dims.fit_within(config.max_dimension);
    log::debug!(
        "planned {source_dims} -> {target} for max dimension {}",
        config.max_dimension
    );

    if target == source_dims {
        return Ok(ResizedImage {
            data: copy_bytes_with_prefix(&[], input)?,
            dimensions: source_dims,
            resized: false,
        });
    }

    let codec = find_png_encoder()?;
    let format = encoder_pixel_format(codec);

    let transform_config = VideoTransformConfig::new(target, format).with_algorithm(config.scaling);
    let transform = run.transform.insert(VideoTransform::new(
        source_dims,
        decoded.format(),
        transform_config,
    )?);
    let scaled = run.scaled.insert(VideoFrameFFmpeg::empty());
    transform.alloc_output(scaled)?;
    transform.run(decoded, scaled)?;

    let encoder = run.encoder.insert(PngEncoder::open(codec, target, format)?);
    encoder.encode(scaled, packet)?;

    let data = packet
        .data()
        .ok_or_else(|| Error::encode_failed("encoder produced an empty packet"))?;

    Ok(ResizedImage {
        data: normalize_png(data)?,
        dimensions: target,
        resized: true,
    })
}

/**
    Free the buffer of a [`ResizedImage`].

    Equivalent to dropping it; provided to mirror the C interface.
*/
pub fn release(image: ResizedImage) {
    log::trace!("releasing {} byte output", image.data.len());
    drop(image);
}
