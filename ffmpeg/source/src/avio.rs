/*!
    Custom FFmpeg I/O context backed by a [`MemoryStream`].
*/

use std::ffi::{c_int, c_void};
use std::{ptr, slice};

use ffmpeg_next::ffi;

use ffmpeg_types::{Error, Result};

use crate::memory::{MemoryStream, Whence};

/// Size of the scratch buffer FFmpeg reads into.
const IO_BUFFER_SIZE: usize = 32 * 1024;

const SEEK_SET: c_int = 0;
const SEEK_CUR: c_int = 1;
const SEEK_END: c_int = 2;
const AVSEEK_SIZE: c_int = 0x10000;
const AVSEEK_FORCE: c_int = 0x20000;

/**
    Who is responsible for freeing the I/O context and its buffer.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamOwnership {
    /// Nothing is held, either not yet allocated or already released.
    NotOwned,
    /// The adapter holds the context and frees it when dropped.
    OwnedByAdapter,
    /// A demux context has taken the context; its close path hands it back.
    OwnedByDemuxContext,
}

/**
    An `AVIOContext` reading from an in-memory buffer.

    The boxed stream is the callback opaque pointer, so it must stay at a
    fixed address until the context is freed.
*/
pub(crate) struct StreamContext<'a> {
    ptr: *mut ffi::AVIOContext,
    ownership: StreamOwnership,
    stream: Box<MemoryStream<'a>>,
}

impl<'a> StreamContext<'a> {
    /**
        Allocate the I/O buffer and context for reading `data`.
    */
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut stream = Box::new(MemoryStream::new(data));

        unsafe {
            let buffer = ffi::av_malloc(IO_BUFFER_SIZE) as *mut u8;
            if buffer.is_null() {
                return Err(Error::OutOfMemory);
            }

            let opaque = &mut *stream as *mut MemoryStream<'a> as *mut c_void;
            let ctx = ffi::avio_alloc_context(
                buffer,
                IO_BUFFER_SIZE as c_int,
                0,
                opaque,
                Some(read_packet),
                None,
                Some(seek_packet),
            );
            if ctx.is_null() {
                ffi::av_free(buffer as *mut c_void);
                return Err(Error::OutOfMemory);
            }

            Ok(Self {
                ptr: ctx,
                ownership: StreamOwnership::OwnedByAdapter,
                stream,
            })
        }
    }

    pub fn as_mut_ptr(&mut self) -> *mut ffi::AVIOContext {
        self.ptr
    }

    pub fn ownership(&self) -> StreamOwnership {
        self.ownership
    }

    /**
        Record that a demux context has successfully opened this context.
    */
    pub fn transfer_to_demuxer(&mut self) {
        debug_assert_eq!(self.ownership, StreamOwnership::OwnedByAdapter);
        self.ownership = StreamOwnership::OwnedByDemuxContext;
    }

    /**
        Take the context back after the demux context has been closed.

        The caller must have detached the context from the demuxer first.
    */
    pub fn reclaim_from_demuxer(&mut self) {
        debug_assert_eq!(self.ownership, StreamOwnership::OwnedByDemuxContext);
        self.ownership = StreamOwnership::OwnedByAdapter;
    }

    /**
        Bytes consumed from the input so far.
    */
    pub fn position(&self) -> usize {
        self.stream.position()
    }
}

impl Drop for StreamContext<'_> {
    fn drop(&mut self) {
        match self.ownership {
            StreamOwnership::OwnedByAdapter => unsafe {
                // FFmpeg may have replaced the buffer, so free whatever it holds now.
                ffi::av_freep(&mut (*self.ptr).buffer as *mut *mut u8 as *mut c_void);
                ffi::avio_context_free(&mut self.ptr);
                self.ptr = ptr::null_mut();
                self.ownership = StreamOwnership::NotOwned;
            },
            StreamOwnership::OwnedByDemuxContext => {
                // Leaking is the only safe option if the demuxer still holds it.
                log::error!("I/O context dropped while still owned by a demux context");
            }
            StreamOwnership::NotOwned => {}
        }
    }
}

unsafe extern "C" fn read_packet(opaque: *mut c_void, buf: *mut u8, buf_size: c_int) -> c_int {
    let stream = unsafe { &mut *(opaque as *mut MemoryStream<'_>) };
    if buf.is_null() || buf_size <= 0 {
        return 0;
    }

    let buf = unsafe { slice::from_raw_parts_mut(buf, buf_size as usize) };
    match stream.read(buf) {
        Some(count) => count as c_int,
        None => ffi::AVERROR_EOF,
    }
}

unsafe extern "C" fn seek_packet(opaque: *mut c_void, offset: i64, whence: c_int) -> i64 {
    let stream = unsafe { &mut *(opaque as *mut MemoryStream<'_>) };
    let whence = match whence & !AVSEEK_FORCE {
        SEEK_SET => Whence::Start,
        SEEK_CUR => Whence::Current,
        SEEK_END => Whence::End,
        AVSEEK_SIZE => Whence::Size,
        _ => return i64::from(ffi::AVERROR(ffi::EINVAL)),
    };

    stream.seek(offset, whence) as i64
}
