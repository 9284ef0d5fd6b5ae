/*!
    Video decoder implementation.
*/

use ffmpeg_next::{
    codec::{self, decoder::Video as VideoDecoderFFmpeg},
    ffi,
    format::context::Input,
    media,
    packet::Mut as PacketMut,
    util::frame::video::Video as VideoFrameFFmpeg,
};

use ffmpeg_source::{FfmpegResultExt, MemoryInput, map_ffmpeg_error};
use ffmpeg_types::{Dimensions, Error, Result};

/**
    Video decoder bound to the first video stream of a source.

    Only the first decodable frame is ever pulled; later packets are left
    unread in the demuxer.
*/
pub struct VideoDecoder {
    decoder: VideoDecoderFFmpeg,
    stream_index: usize,
    codec_id: codec::Id,
}

impl VideoDecoder {
    /**
        Select the first video stream of `source` and open a decoder for it.

        Streams are scanned in index order. A container with no video stream
        fails with [`Error::StreamNotFound`], and a codec without a decoder in
        this FFmpeg build fails with [`Error::DecoderNotFound`].
    */
    pub fn open(source: &MemoryInput<'_>) -> Result<Self> {
        let (stream_index, parameters) = first_video_stream(source.input())?;
        let codec_id = parameters.id();

        let codec = ffmpeg_next::decoder::find(codec_id)
            .ok_or_else(|| Error::decoder_not_found(format!("{codec_id:?}")))?;

        let decoder = codec::context::Context::from_parameters(parameters)
            .or_pipeline_err(Error::invalid_data)?
            .decoder()
            .open_as(codec)
            .or_pipeline_err(Error::invalid_data)?
            .video()
            .or_pipeline_err(Error::invalid_data)?;

        log::debug!("decoding stream {stream_index} with {}", codec.name());

        Ok(Self {
            decoder,
            stream_index,
            codec_id,
        })
    }

    /**
        Index of the stream this decoder consumes.
    */
    pub fn stream_index(&self) -> usize {
        self.stream_index
    }

    /**
        Codec of the stream this decoder consumes.
    */
    pub fn codec_id(&self) -> codec::Id {
        self.codec_id
    }

    /**
        Pull packets from `source` until one frame decodes into `frame`.

        `packet` is scratch space owned by the caller and is left empty on
        return. Packets from other streams are discarded unread. If the input
        runs out first, the decoder is drained once; if that still yields
        nothing the input is reported as [`Error::InvalidData`].
    */
    pub fn decode_first_frame(
        &mut self,
        source: &mut MemoryInput<'_>,
        packet: &mut ffmpeg_next::Packet,
        frame: &mut VideoFrameFFmpeg,
    ) -> Result<Dimensions> {
        loop {
            if let Err(e) = packet.read(source.input_mut()) {
                end_of_input(e)?;
                break;
            }

            let decoded = if packet.stream() == self.stream_index {
                self.submit(packet, frame)
            } else {
                Ok(false)
            };

            unsafe {
                ffi::av_packet_unref(packet.as_mut_ptr());
            }

            if decoded? {
                return frame_dimensions(frame);
            }
        }

        if self.decoder.send_eof().is_ok() && frame_ready(self.decoder.receive_frame(frame))? {
            log::debug!("first frame came out of the decoder drain");
            return frame_dimensions(frame);
        }

        Err(Error::invalid_data("input ended without a decodable frame"))
    }

    /**
        Send one packet and try to receive a frame.

        Returns false when the decoder needs more input.
    */
    fn submit(
        &mut self,
        packet: &ffmpeg_next::Packet,
        frame: &mut VideoFrameFFmpeg,
    ) -> Result<bool> {
        self.decoder
            .send_packet(packet)
            .or_pipeline_err(Error::invalid_data)?;

        frame_ready(self.decoder.receive_frame(frame))
    }
}

/**
    Decide whether a failed demuxer read ends the input or aborts the run.

    Allocation failures abort; anything else, including a corrupt trailing
    packet, is treated as the end of the input.
*/
fn end_of_input(error: ffmpeg_next::Error) -> Result<()> {
    match map_ffmpeg_error(error, Error::invalid_data) {
        Error::OutOfMemory => Err(Error::OutOfMemory),
        other => {
            log::debug!("demuxer stopped: {other}");
            Ok(())
        }
    }
}

/**
    Interpret the result of `receive_frame`.

    Returns false when the decoder wants more input or has been drained.
*/
fn frame_ready(result: std::result::Result<(), ffmpeg_next::Error>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(ffmpeg_next::Error::Eof) => Ok(false),
        Err(ffmpeg_next::Error::Other { errno }) if errno == ffi::EAGAIN => Ok(false),
        Err(e) => Err(map_ffmpeg_error(e, Error::invalid_data)),
    }
}

/**
    Find the first stream whose media type is video.
*/
fn first_video_stream(input: &Input) -> Result<(usize, codec::Parameters)> {
    input
        .streams()
        .find(|stream| stream.parameters().medium() == media::Type::Video)
        .map(|stream| (stream.index(), stream.parameters()))
        .ok_or(Error::StreamNotFound)
}

fn frame_dimensions(frame: &VideoFrameFFmpeg) -> Result<Dimensions> {
    let dimensions = Dimensions::new(frame.width(), frame.height());
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(Error::invalid_data(format!(
            "decoded frame has empty geometry {dimensions}"
        )));
    }

    log::debug!("decoded {dimensions} {:?} frame", frame.format());
    Ok(dimensions)
}

impl std::fmt::Debug for VideoDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoDecoder")
            .field("stream_index", &self.stream_index)
            .field("codec_id", &self.codec_id)
            .finish_non_exhaustive()
    }
}
