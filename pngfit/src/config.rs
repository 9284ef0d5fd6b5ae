/*!
    Resize configuration.
*/

use ffmpeg_transform::ScalingAlgorithm;
use ffmpeg_types::{Error, Result};

/// Default bound on the longest side of the output, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 1568;

/**
    Configuration for a resize run.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeConfig {
    /// Largest allowed width or height of the output. Must be at least 1.
    pub max_dimension: u32,
    /// Resampling filter used when the image has to shrink.
    pub scaling: ScalingAlgorithm,
}

impl ResizeConfig {
    /**
        Create a config bounding the output to `max_dimension` pixels per side.
    */
    pub fn new(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            ..Self::default()
        }
    }

    /**
        Set the resampling filter.
    */
    pub fn with_scaling(mut self, scaling: ScalingAlgorithm) -> Self {
        self.scaling = scaling;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(Error::invalid_argument("max_dimension must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            scaling: ScalingAlgorithm::Lanczos,
        }
    }
}
