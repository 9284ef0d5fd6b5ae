/*!
    Resizing base64-encoded images.
*/

use base64::{Engine as _, engine::general_purpose::STANDARD};

use ffmpeg_types::{Error, Result};

use crate::pipeline::resize;

/**
    A resized image re-encoded as base64, with its final geometry.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizedBase64 {
    pub base64: String,
    pub width: u32,
    pub height: u32,
    pub resized: bool,
}

/**
    Resize a base64-encoded image and return the result as base64.
*/
pub fn resize_base64(input: &str, max_dimension: u32) -> Result<String> {
    resize_base64_with_info(input, max_dimension).map(|resized| resized.base64)
}

/**
    Resize a base64-encoded image and return the result with its geometry.
*/
pub fn resize_base64_with_info(input: &str, max_dimension: u32) -> Result<ResizedBase64> {
    let bytes = STANDARD
        .decode(input.trim())
        .map_err(|e| Error::invalid_data(format!("invalid base64 input: {e}")))?;

    let image = resize(&bytes, max_dimension)?;

    Ok(ResizedBase64 {
        base64: STANDARD.encode(image.data()),
        width: image.width(),
        height: image.height(),
        resized: image.was_resized(),
    })
}
