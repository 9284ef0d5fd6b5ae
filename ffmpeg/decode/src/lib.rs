/*!
    Media decoding for the ffmpeg crate ecosystem.

    This crate turns the encoded packets of an in-memory source into a raw
    frame. It treats every input, including video and animated containers,
    as a still image: only the first decodable frame is produced.

    # Example

    ```ignore
    use ffmpeg_next::{Packet, frame};
    use ffmpeg_source::MemoryInput;
    use ffmpeg_decode::VideoDecoder;

    let mut source = MemoryInput::open(&bytes)?;
    let mut decoder = VideoDecoder::open(&source)?;

    let mut packet = Packet::empty();
    let mut frame = frame::Video::empty();
    let dimensions = decoder.decode_first_frame(&mut source, &mut packet, &mut frame)?;
    ```

    # Errors

    - [`Error::StreamNotFound`] - the container has no video stream
    - [`Error::DecoderNotFound`] - the stream's codec has no decoder
    - [`Error::InvalidData`] - the input is corrupt, empty, or ran out
      before a frame was decoded
    - [`Error::OutOfMemory`] - FFmpeg failed to allocate while reading or
      decoding
*/

pub use ffmpeg_types::{Dimensions, Error, Result};

mod video;

pub use video::VideoDecoder;
