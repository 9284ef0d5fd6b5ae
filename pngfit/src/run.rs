/*!
    Native resources held during one resize run.
*/

use ffmpeg_decode::VideoDecoder;
use ffmpeg_encode::PngEncoder;
use ffmpeg_next::{Packet, util::frame::video::Video as VideoFrameFFmpeg};
use ffmpeg_source::MemoryInput;
use ffmpeg_transform::VideoTransform;

/**
    Every native handle acquired by one call, released in a fixed order.

    Stages fill the slots as they acquire resources, so an early return
    from any stage releases exactly what was acquired so far. Teardown runs
    frames, packet, scaler, decoder, encoder and finally the demux and I/O
    contexts, whatever order the slots were filled in.
*/
#[derive(Default)]
pub(crate) struct RunContext<'a> {
    pub source: Option<MemoryInput<'a>>,
    pub decoder: Option<VideoDecoder>,
    pub packet: Option<Packet>,
    pub decoded: Option<VideoFrameFFmpeg>,
    pub transform: Option<VideoTransform>,
    pub scaled: Option<VideoFrameFFmpeg>,
    pub encoder: Option<PngEncoder>,
}

impl RunContext<'_> {
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Names of the slots currently holding a resource, in teardown order.
    */
    pub fn held(&self) -> Vec<&'static str> {
        [
            ("decoded frame", self.decoded.is_some()),
            ("scaled frame", self.scaled.is_some()),
            ("packet", self.packet.is_some()),
            ("scaler", self.transform.is_some()),
            ("decoder", self.decoder.is_some()),
            ("encoder", self.encoder.is_some()),
            ("source", self.source.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, held)| held.then_some(name))
        .collect()
    }
}

impl Drop for RunContext<'_> {
    fn drop(&mut self) {
        log::trace!("releasing run resources: {:?}", self.held());

        drop(self.decoded.take());
        drop(self.scaled.take());
        drop(self.packet.take());
        drop(self.transform.take());
        drop(self.decoder.take());
        drop(self.encoder.take());
        drop(self.source.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_holds_nothing() {
        let run = RunContext::new();
        assert!(run.held().is_empty());
    }

    #[test]
    fn held_lists_in_teardown_order() {
        let mut run = RunContext::new();
        run.packet = Some(Packet::empty());
        run.decoded = Some(VideoFrameFFmpeg::empty());
        assert_eq!(run.held(), vec!["decoded frame", "packet"]);
    }
}
