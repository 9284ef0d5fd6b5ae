/*!
    Downscale any in-memory image into a size-bounded PNG.

    The input can be anything FFmpeg can demux and decode (PNG, JPEG, WebP,
    GIF, even a video container) and it never touches a filesystem: bytes go
    in, bytes come out.

    # Usage

    ```ignore
    let bytes = std::fs::read("photo.jpg")?;
    let image = pngfit::resize(&bytes, 1000)?;

    println!("{}x{}, resized: {}", image.width(), image.height(), image.was_resized());
    std::fs::write("photo.png", image.data())?;
    ```

    # Pipeline

    One call runs, in order:

    1. Open the buffer as a seekable stream and probe the container
    2. Decode the first frame of the first video stream
    3. Plan the target geometry with [`Dimensions::fit_within`]
    4. If the image already fits, return the input bytes unchanged
    5. Otherwise scale into a pixel format the PNG encoder accepts
       (RGBA, then RGB24, then the encoder's first choice)
    6. Encode one PNG frame and make sure it starts with [`PNG_SIGNATURE`]

    Every native resource acquired along the way is released before the
    call returns, on success and on every error path.

    # C Interface

    The crate also builds as a `cdylib`; see [`ffi`].
*/

pub use ffmpeg_transform::ScalingAlgorithm;
pub use ffmpeg_types::{Dimensions, Error, ErrorKind, Result};

mod config;
mod inline;
mod normalize;
mod pipeline;
mod run;

pub mod ffi;

pub use config::{DEFAULT_MAX_DIMENSION, ResizeConfig};
pub use inline::{ResizedBase64, resize_base64, resize_base64_with_info};
pub use normalize::{PNG_SIGNATURE, has_png_signature, normalize_png};
pub use pipeline::{ResizedImage, release, resize, resize_with_config};
