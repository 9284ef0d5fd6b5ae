/*!
    Error types for the ffmpeg crate ecosystem.
*/

use thiserror::Error;

/**
    Error type for the ffmpeg crate ecosystem.

    Every variant is terminal: nothing in the pipeline retries, so the
    first error a stage reports is the one the caller sees.
*/
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An allocation failed, either natively or in Rust.
    #[error("out of memory")]
    OutOfMemory,
    /// The container has no video-capable stream.
    #[error("no video stream found in input")]
    StreamNotFound,
    /// No decoder is available for the selected stream's codec.
    #[error("no decoder available for codec {codec}")]
    DecoderNotFound { codec: String },
    /// Input was exhausted without producing a frame, or was rejected by the decoder.
    #[error("invalid data: {message}")]
    InvalidData { message: String },
    /// The output codec is missing from the codec library build.
    #[error("no encoder available for codec {codec}")]
    EncoderNotFound { codec: String },
    /// The scaler could not be built for the requested formats and geometry.
    #[error("scaler setup failed: {message}")]
    ScaleSetupFailed { message: String },
    /// The encoder rejected the frame or produced no packet.
    #[error("encode failed: {message}")]
    EncodeFailed { message: String },
    /// A caller-supplied argument violates a precondition.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl Error {
    /**
        Create a decoder-not-found error for the given codec name.
    */
    pub fn decoder_not_found(codec: impl Into<String>) -> Self {
        Self::DecoderNotFound {
            codec: codec.into(),
        }
    }

    /**
        Create an invalid data error with the given message.
    */
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /**
        Create an encoder-not-found error for the given codec name.
    */
    pub fn encoder_not_found(codec: impl Into<String>) -> Self {
        Self::EncoderNotFound {
            codec: codec.into(),
        }
    }

    /**
        Create a scaler setup error with the given message.
    */
    pub fn scale_setup_failed(message: impl Into<String>) -> Self {
        Self::ScaleSetupFailed {
            message: message.into(),
        }
    }

    /**
        Create an encode error with the given message.
    */
    pub fn encode_failed(message: impl Into<String>) -> Self {
        Self::EncodeFailed {
            message: message.into(),
        }
    }

    /**
        Create an invalid argument error with the given message.
    */
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /**
        Returns the kind of this error, without any attached detail.
    */
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfMemory => ErrorKind::OutOfMemory,
            Self::StreamNotFound => ErrorKind::StreamNotFound,
            Self::DecoderNotFound { .. } => ErrorKind::DecoderNotFound,
            Self::InvalidData { .. } => ErrorKind::InvalidData,
            Self::EncoderNotFound { .. } => ErrorKind::EncoderNotFound,
            Self::ScaleSetupFailed { .. } => ErrorKind::ScaleSetupFailed,
            Self::EncodeFailed { .. } => ErrorKind::EncodeFailed,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /**
        Returns the stable numeric code for this error.
    */
    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

/**
    Fieldless mirror of [`Error`], suitable for matching and for C callers.
*/
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfMemory = -1,
    StreamNotFound = -2,
    DecoderNotFound = -3,
    InvalidData = -4,
    EncoderNotFound = -5,
    ScaleSetupFailed = -6,
    EncodeFailed = -7,
    InvalidArgument = -8,
}

impl ErrorKind {
    /**
        Returns the stable negative code for this kind.

        Zero is never returned; C callers treat zero as success.
    */
    pub const fn code(self) -> i32 {
        self as i32
    }

    /**
        Look up a kind by its numeric code.
    */
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::OutOfMemory),
            -2 => Some(Self::StreamNotFound),
            -3 => Some(Self::DecoderNotFound),
            -4 => Some(Self::InvalidData),
            -5 => Some(Self::EncoderNotFound),
            -6 => Some(Self::ScaleSetupFailed),
            -7 => Some(Self::EncodeFailed),
            -8 => Some(Self::InvalidArgument),
            _ => None,
        }
    }
}

/**
    Result type alias for the ffmpeg crate ecosystem.
*/
pub type Result<T> = std::result::Result<T, Error>;

static_assertions::assert_impl_all!(Error: Send, Sync);
