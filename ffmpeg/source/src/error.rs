/*!
    Mapping from FFmpeg errors into the ecosystem error type.
*/

use ffmpeg_next::ffi;

use ffmpeg_types::{Error, Result};

/**
    Convert an FFmpeg error, routing allocation failures to [`Error::OutOfMemory`].

    Every other failure is handed to `otherwise` as a message, so each stage
    decides which kind of error it reports.
*/
pub fn map_ffmpeg_error(error: ffmpeg_next::Error, otherwise: impl FnOnce(String) -> Error) -> Error {
    match error {
        ffmpeg_next::Error::Other { errno } if errno == ffi::ENOMEM => Error::OutOfMemory,
        other => otherwise(other.to_string()),
    }
}

/**
    Extension for results coming straight out of `ffmpeg-next`.
*/
pub trait FfmpegResultExt<T> {
    /**
        Map the error with [`map_ffmpeg_error`].
    */
    fn or_pipeline_err(self, otherwise: impl FnOnce(String) -> Error) -> Result<T>;
}

impl<T> FfmpegResultExt<T> for std::result::Result<T, ffmpeg_next::Error> {
    fn or_pipeline_err(self, otherwise: impl FnOnce(String) -> Error) -> Result<T> {
        self.map_err(|e| map_ffmpeg_error(e, otherwise))
    }
}
