/*!
    Demux context over an in-memory buffer.
*/

use std::ptr;

use ffmpeg_next::{ffi, format::context::Input};

use ffmpeg_types::{Error, Result};

use crate::avio::{StreamContext, StreamOwnership};
use crate::error::FfmpegResultExt;

/**
    A demuxer reading from a borrowed byte buffer.

    The container format is probed from the data itself; no format is forced
    and no filename hint is given. The buffer is never copied or mutated.

    Dropping closes the demux context first and then frees the I/O context,
    which FFmpeg never frees for caller-supplied I/O.
*/
pub struct MemoryInput<'a> {
    input: Option<Input>,
    io: StreamContext<'a>,
}

impl<'a> MemoryInput<'a> {
    /**
        Open `data` as a media container and read its stream metadata.
    */
    pub fn open(data: &'a [u8]) -> Result<Self> {
        ffmpeg_next::init().or_pipeline_err(Error::invalid_data)?;

        let mut io = StreamContext::new(data)?;

        unsafe {
            let mut ctx = ffi::avformat_alloc_context();
            if ctx.is_null() {
                return Err(Error::OutOfMemory);
            }
            (*ctx).pb = io.as_mut_ptr();

            // On failure FFmpeg frees `ctx` but leaves the custom I/O context alone.
            let ret = ffi::avformat_open_input(
                &mut ctx,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            );
            if ret < 0 {
                log::debug!("failed to open input of {} bytes: {ret}", data.len());
                return Err(ffmpeg_next::Error::from(ret))
                    .or_pipeline_err(Error::invalid_data);
            }
            io.transfer_to_demuxer();

            let source = Self {
                input: Some(Input::wrap(ctx)),
                io,
            };

            let ret = ffi::avformat_find_stream_info(ctx, ptr::null_mut());
            if ret < 0 {
                return Err(ffmpeg_next::Error::from(ret))
                    .or_pipeline_err(Error::invalid_data);
            }

            log::debug!(
                "opened {} input with {} stream(s)",
                source.format_name(),
                source.input().nb_streams()
            );

            Ok(source)
        }
    }

    /**
        Borrow the underlying FFmpeg demux context.
    */
    pub fn input(&self) -> &Input {
        match self.input.as_ref() {
            Some(input) => input,
            None => unreachable!("demux context is only taken on drop"),
        }
    }

    /**
        Mutably borrow the underlying FFmpeg demux context, for reading packets.
    */
    pub fn input_mut(&mut self) -> &mut Input {
        match self.input.as_mut() {
            Some(input) => input,
            None => unreachable!("demux context is only taken on drop"),
        }
    }

    /**
        Short name of the probed container format.
    */
    pub fn format_name(&self) -> String {
        self.input().format().name().to_owned()
    }

    /**
        Current ownership state of the I/O context.
    */
    pub fn stream_ownership(&self) -> StreamOwnership {
        self.io.ownership()
    }

    /**
        Bytes consumed from the input buffer so far.
    */
    pub fn bytes_read(&self) -> usize {
        self.io.position()
    }
}

impl Drop for MemoryInput<'_> {
    fn drop(&mut self) {
        if let Some(mut input) = self.input.take() {
            unsafe {
                (*input.as_mut_ptr()).pb = ptr::null_mut();
            }
            drop(input);
            self.io.reclaim_from_demuxer();
        }
    }
}

impl std::fmt::Debug for MemoryInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryInput")
            .field("format", &self.format_name())
            .field("ownership", &self.stream_ownership())
            .field("bytes_read", &self.bytes_read())
            .finish_non_exhaustive()
    }
}
