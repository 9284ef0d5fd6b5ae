/*!
    Seekable cursor over an immutable byte buffer.
*/

/**
    Origin for a [`MemoryStream::seek`] call.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Whence {
    /// Offset from the start of the buffer.
    Start,
    /// Offset from the current cursor position.
    Current,
    /// Offset from the end of the buffer.
    End,
    /// Report the total length without moving the cursor.
    Size,
}

/**
    Read cursor over a borrowed byte buffer.

    The position always stays within `0..=len`. Seeks that would leave that
    range are clamped into it rather than rejected.
*/
#[derive(Debug)]
pub struct MemoryStream<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> MemoryStream<'a> {
    /**
        Create a stream positioned at the start of `data`.
    */
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /**
        Current cursor position.
    */
    pub fn position(&self) -> usize {
        self.position
    }

    /**
        Total length of the underlying buffer.
    */
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /**
        Returns true if the underlying buffer is empty.
    */
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /**
        Copy up to `buf.len()` bytes from the cursor into `buf`.

        Returns `None` once the cursor has reached the end of the buffer,
        otherwise the number of bytes copied.
    */
    pub fn read(&mut self, buf: &mut [u8]) -> Option<usize> {
        let remaining = &self.data[self.position..];
        if remaining.is_empty() {
            return None;
        }

        let count = buf.len().min(remaining.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Some(count)
    }

    /**
        Move the cursor and return its new position.

        For [`Whence::Size`] the buffer length is returned and the cursor
        is left where it was.
    */
    pub fn seek(&mut self, offset: i64, whence: Whence) -> u64 {
        let len = self.len() as i64;
        let candidate = match whence {
            Whence::Start => offset,
            Whence::Current => (self.position as i64).saturating_add(offset),
            Whence::End => len.saturating_add(offset),
            Whence::Size => return len as u64,
        };

        self.position = candidate.clamp(0, len) as usize;
        self.position as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &[u8] = b"0123456789";

    #[test]
    fn read_advances_cursor() {
        let mut stream = MemoryStream::new(DATA);
        let mut buf = [0u8; 4];

        assert_eq!(stream.read(&mut buf), Some(4));
        assert_eq!(&buf, b"0123");
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn read_is_short_at_tail_then_eof() {
        let mut stream = MemoryStream::new(DATA);
        let mut buf = [0u8; 8];

        assert_eq!(stream.read(&mut buf), Some(8));
        assert_eq!(stream.read(&mut buf), Some(2));
        assert_eq!(&buf[..2], b"89");
        assert_eq!(stream.read(&mut buf), None);
        assert_eq!(stream.position(), DATA.len());
    }

    #[test]
    fn read_empty_buffer_is_eof() {
        let mut stream = MemoryStream::new(&[]);
        let mut buf = [0u8; 16];
        assert!(stream.is_empty());
        assert_eq!(stream.read(&mut buf), None);
    }

    #[test]
    fn seek_modes() {
        let mut stream = MemoryStream::new(DATA);

        assert_eq!(stream.seek(3, Whence::Start), 3);
        assert_eq!(stream.seek(2, Whence::Current), 5);
        assert_eq!(stream.seek(-1, Whence::End), 9);

        let mut buf = [0u8; 4];
        assert_eq!(stream.read(&mut buf), Some(1));
        assert_eq!(buf[0], b'9');
    }

    #[test]
    fn seek_size_does_not_move_cursor() {
        let mut stream = MemoryStream::new(DATA);
        stream.seek(4, Whence::Start);

        assert_eq!(stream.seek(0, Whence::Size), DATA.len() as u64);
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn seek_clamps_out_of_range() {
        let mut stream = MemoryStream::new(DATA);

        assert_eq!(stream.seek(-5, Whence::Start), 0);
        assert_eq!(stream.seek(100, Whence::Start), 10);
        assert_eq!(stream.seek(-100, Whence::Current), 0);
        assert_eq!(stream.seek(5, Whence::End), 10);
        assert_eq!(stream.seek(i64::MAX, Whence::Current), 10);
        assert_eq!(stream.seek(i64::MIN, Whence::End), 0);
    }
}
