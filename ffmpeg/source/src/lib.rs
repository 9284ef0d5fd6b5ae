/*!
    In-memory media input for the ffmpeg crate ecosystem.

    This crate presents a caller-owned byte buffer to FFmpeg as a seekable
    stream, without touching a filesystem. It owns the native I/O and demux
    contexts and tears them down in the order FFmpeg requires.

    # Example

    ```ignore
    use ffmpeg_source::MemoryInput;

    let bytes = std::fs::read("image.jpg")?;
    let mut source = MemoryInput::open(&bytes)?;

    for stream in source.input().streams() {
        println!("stream {}: {:?}", stream.index(), stream.parameters().medium());
    }
    ```

    # Ownership

    The I/O context starts out owned by the adapter. Once the demux context
    opens successfully it takes over, and [`MemoryInput`] hands it back only
    after the demux context is closed. See [`StreamOwnership`].
*/

pub use ffmpeg_types::{Error, Result};

mod avio;
mod error;
mod input;
mod memory;

pub use avio::StreamOwnership;
pub use error::{FfmpegResultExt, map_ffmpeg_error};
pub use input::MemoryInput;
pub use memory::{MemoryStream, Whence};
