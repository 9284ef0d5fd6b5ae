/*!
    C interface.

    ```c
    int pngfit_resize_image(const uint8_t *input, size_t input_len,
                            int max_dimension,
                            uint8_t **output, size_t *output_len,
                            int *out_width, int *out_height);
    void pngfit_free_buffer(uint8_t *buf);
    ```

    `pngfit_resize_image` returns 0 on success or a negative
    [`ErrorKind`](ffmpeg_types::ErrorKind) code. On failure `*output` is
    left null and nothing needs to be freed.
*/

use std::ffi::{c_int, c_void};
use std::{ptr, slice};

use ffmpeg_next::ffi;

use ffmpeg_types::{Error, ErrorKind, Result};

use crate::pipeline::resize;

/**
    Resize an encoded image held in memory. See [`resize`](crate::resize).

    # Safety

    `input` must point to `input_len` readable bytes (it may be null only
    when `input_len` is 0). The four output pointers must be valid for
    writes. A buffer stored in `*output` must be released with
    [`pngfit_free_buffer`] exactly once.
*/
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pngfit_resize_image(
    input: *const u8,
    input_len: usize,
    max_dimension: c_int,
    output: *mut *mut u8,
    output_len: *mut usize,
    out_width: *mut c_int,
    out_height: *mut c_int,
) -> c_int {
    if output.is_null() || output_len.is_null() || out_width.is_null() || out_height.is_null() {
        return ErrorKind::InvalidArgument.code();
    }

    unsafe {
        *output = ptr::null_mut();
        *output_len = 0;
    }

    match unsafe { resize_into(input, input_len, max_dimension) } {
        Ok((buffer, len, width, height)) => {
            unsafe {
                *output = buffer;
                *output_len = len;
                *out_width = width;
                *out_height = height;
            }
            0
        }
        Err(e) => {
            log::debug!("resize failed: {e}");
            e.code()
        }
    }
}

/**
    Free a buffer returned by [`pngfit_resize_image`]. Null is ignored.

    # Safety

    `buf` must be null or a pointer produced by [`pngfit_resize_image`] that
    has not been freed yet.
*/
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pngfit_free_buffer(buf: *mut u8) {
    if !buf.is_null() {
        unsafe { ffi::av_free(buf as *mut c_void) };
    }
}

unsafe fn resize_into(
    input: *const u8,
    input_len: usize,
    max_dimension: c_int,
) -> Result<(*mut u8, usize, c_int, c_int)> {
    let input: &[u8] = match (input.is_null(), input_len) {
        (_, 0) => &[],
        (true, _) => return Err(Error::invalid_argument("input is null")),
        (false, len) => unsafe { slice::from_raw_parts(input, len) },
    };
    let max_dimension = u32::try_from(max_dimension)
        .map_err(|_| Error::invalid_argument("max_dimension must be positive"))?;

    let image = resize(input, max_dimension)?;
    let data = image.data();

    // Allocated with FFmpeg's allocator so the free function needs only the pointer.
    let buffer = unsafe { ffi::av_malloc(data.len()) as *mut u8 };
    if buffer.is_null() {
        return Err(Error::OutOfMemory);
    }
    unsafe { ptr::copy_nonoverlapping(data.as_ptr(), buffer, data.len()) };

    Ok((
        buffer,
        data.len(),
        image.width() as c_int,
        image.height() as c_int,
    ))
}
