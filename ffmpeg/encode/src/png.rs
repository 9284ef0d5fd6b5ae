/*!
    Still-image PNG encoder.
*/

use ffmpeg_next::{
    Codec,
    codec::{self, Id},
    encoder,
    format::Pixel,
    util::frame::video::Video as VideoFrameFFmpeg,
};

use ffmpeg_source::FfmpegResultExt;
use ffmpeg_types::{Dimensions, Error, Result};

/**
    Look up the PNG encoder in the linked FFmpeg build.
*/
pub fn find_png_encoder() -> Result<Codec> {
    ffmpeg_next::init().or_pipeline_err(Error::encode_failed)?;
    encoder::find(Id::PNG).ok_or_else(|| Error::encoder_not_found("png"))
}

/**
    PNG encoder for a single frame of fixed geometry and pixel format.
*/
pub struct PngEncoder {
    encoder: encoder::video::Encoder,
    dimensions: Dimensions,
    format: Pixel,
}

impl PngEncoder {
    /**
        Open `codec` for frames of `dimensions` in `format`.

        `codec` should come from [`find_png_encoder`], and `format` must be
        one the encoder accepts.
    */
    pub fn open(codec: Codec, dimensions: Dimensions, format: Pixel) -> Result<Self> {
        let mut enc_ctx = codec::Context::new_with_codec(codec)
            .encoder()
            .video()
            .or_pipeline_err(Error::encode_failed)?;

        enc_ctx.set_width(dimensions.width);
        enc_ctx.set_height(dimensions.height);
        enc_ctx.set_format(format);
        // Required by the encoder even though only one frame is ever sent.
        enc_ctx.set_time_base((1, 1));

        let encoder = enc_ctx
            .open_as(codec)
            .or_pipeline_err(Error::encode_failed)?;

        Ok(Self {
            encoder,
            dimensions,
            format,
        })
    }

    /**
        Geometry of the frames this encoder accepts.
    */
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /**
        Pixel format of the frames this encoder accepts.
    */
    pub fn format(&self) -> Pixel {
        self.format
    }

    /**
        Encode `frame` into exactly one `packet`.

        Single-image encoders answer synchronously, so any failure to submit
        the frame or to receive the packet is reported as
        [`Error::EncodeFailed`] without retrying.
    */
    pub fn encode(&mut self, frame: &VideoFrameFFmpeg, packet: &mut ffmpeg_next::Packet) -> Result<()> {
        self.encoder
            .send_frame(frame)
            .or_pipeline_err(Error::encode_failed)?;
        self.encoder
            .receive_packet(packet)
            .or_pipeline_err(Error::encode_failed)?;

        log::debug!("encoded {} png into {} bytes", self.dimensions, packet.size());
        Ok(())
    }
}

impl std::fmt::Debug for PngEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PngEncoder")
            .field("dimensions", &self.dimensions)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
