/*!
    Shared types for the ffmpeg crate ecosystem.

    This crate defines the vocabulary of the ecosystem: the types that cross crate
    boundaries. It has no dependency on FFmpeg, making it lightweight and enabling
    consumers to depend on it without pulling in FFmpeg bindings.

    # Core Types

    - [`Dimensions`] - Frame geometry, including downscale planning
      via [`Dimensions::fit_within`]

    # Error Handling

    - [`Error`] and [`Result`] - Common error types
    - [`ErrorKind`] - Fieldless error kinds with stable numeric codes
*/

mod error;
mod geometry;

pub use error::{Error, ErrorKind, Result};
pub use geometry::Dimensions;
