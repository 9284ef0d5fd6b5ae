/*!
    Video frame scaling and pixel format conversion.
*/

use std::ffi::c_int;

use ffmpeg_next::{
    ffi,
    format::Pixel,
    software::scaling::{context::Context as ScalingContext, flag::Flags},
    util::frame::video::Video as VideoFrameFFmpeg,
};

use ffmpeg_source::FfmpegResultExt;
use ffmpeg_types::{Dimensions, Error, Result};

/**
    Resampling filter used by the scaler.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScalingAlgorithm {
    /// Lanczos, sharpest result and the slowest.
    #[default]
    Lanczos,
    /// Bicubic interpolation.
    Bicubic,
    /// Bilinear interpolation.
    Bilinear,
    /// Fast bilinear, lower quality.
    FastBilinear,
    /// Area averaging, good for large downscales.
    Area,
}

impl ScalingAlgorithm {
    fn flags(self) -> Flags {
        match self {
            Self::Lanczos => Flags::LANCZOS,
            Self::Bicubic => Flags::BICUBIC,
            Self::Bilinear => Flags::BILINEAR,
            Self::FastBilinear => Flags::FAST_BILINEAR,
            Self::Area => Flags::AREA,
        }
    }
}

/**
    Configuration for a [`VideoTransform`].
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoTransformConfig {
    /// Output geometry.
    pub dimensions: Dimensions,
    /// Output pixel format.
    pub format: Pixel,
    /// Resampling filter.
    pub algorithm: ScalingAlgorithm,
}

impl VideoTransformConfig {
    /**
        Create a config scaling to `dimensions` in `format` with the default filter.
    */
    pub fn new(dimensions: Dimensions, format: Pixel) -> Self {
        Self {
            dimensions,
            format,
            algorithm: ScalingAlgorithm::default(),
        }
    }

    /**
        Set the resampling filter.
    */
    pub fn with_algorithm(mut self, algorithm: ScalingAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/**
    Scaler converting frames of one fixed geometry and format into another.
*/
pub struct VideoTransform {
    scaler: ScalingContext,
    config: VideoTransformConfig,
}

impl VideoTransform {
    /**
        Build a scaler from `source` geometry in `source_format` to the
        geometry and format in `config`.
    */
    pub fn new(
        source: Dimensions,
        source_format: Pixel,
        config: VideoTransformConfig,
    ) -> Result<Self> {
        let scaler = ScalingContext::get(
            source_format,
            source.width,
            source.height,
            config.format,
            config.dimensions.width,
            config.dimensions.height,
            config.algorithm.flags(),
        )
        .or_pipeline_err(Error::scale_setup_failed)?;

        log::debug!(
            "scaling {source} {source_format:?} -> {} {:?} ({:?})",
            config.dimensions,
            config.format,
            config.algorithm
        );

        Ok(Self { scaler, config })
    }

    /**
        The configuration this scaler was built with.
    */
    pub fn config(&self) -> &VideoTransformConfig {
        &self.config
    }

    /**
        Allocate pixel buffers in `frame` for this scaler's output.

        Any buffers `frame` already holds are released first.
    */
    pub fn alloc_output(&self, frame: &mut VideoFrameFFmpeg) -> Result<()> {
        unsafe {
            let ptr = frame.as_mut_ptr();
            ffi::av_frame_unref(ptr);
            (*ptr).format = ffi::AVPixelFormat::from(self.config.format) as c_int;
            (*ptr).width = self.config.dimensions.width as c_int;
            (*ptr).height = self.config.dimensions.height as c_int;

            let ret = ffi::av_frame_get_buffer(ptr, 0);
            if ret < 0 {
                return Err(ffmpeg_next::Error::from(ret)).or_pipeline_err(Error::scale_setup_failed);
            }
        }
        Ok(())
    }

    /**
        Scale `input` into `output`.

        `output` must have been prepared with [`VideoTransform::alloc_output`].
    */
    pub fn run(&mut self, input: &VideoFrameFFmpeg, output: &mut VideoFrameFFmpeg) -> Result<()> {
        self.scaler
            .run(input, output)
            .or_pipeline_err(Error::scale_setup_failed)
    }
}

impl std::fmt::Debug for VideoTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoTransform")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
