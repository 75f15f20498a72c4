//! Position-based cursor over an immutable byte buffer.
//!
//! Unlike the nom combinators in the sibling modules, which thread the
//! remaining input through return values, [`ParseBuffer`] keeps an explicit
//! position. Callers can save a position, scan ahead and [`reset`] back to it,
//! which is what the parameter loop needs to leave trailing whitespace
//! unconsumed for whoever parses the rest of the message.
//!
//! Positions are plain byte offsets into the underlying slice.
//!
//! [`reset`]: ParseBuffer::reset

/// Whitespace skipped between parameters: SP, HTAB, CR, LF.
pub const WHITESPACE: &[u8] = b" \t\r\n";

/// A scan position over an immutable byte slice.
#[derive(Debug, Clone, Copy)]
pub struct ParseBuffer<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ParseBuffer<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        ParseBuffer { buf, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True when every byte has been consumed.
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The byte under the cursor, if any.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Advances past one byte. Does nothing at end of buffer.
    #[inline]
    pub fn skip_char(&mut self) -> usize {
        if !self.eof() {
            self.pos += 1;
        }
        self.pos
    }

    /// Skips SP, HTAB, CR and LF. Returns the new position.
    pub fn skip_whitespace(&mut self) -> usize {
        while let Some(c) = self.peek() {
            if !WHITESPACE.contains(&c) {
                break;
            }
            self.pos += 1;
        }
        self.pos
    }

    /// Moves forward until the byte under the cursor is one of `set`, or the
    /// buffer ends. Returns the new position.
    pub fn skip_to_one_of(&mut self, set: &[u8]) -> usize {
        while let Some(c) = self.peek() {
            if set.contains(&c) {
                break;
            }
            self.pos += 1;
        }
        self.pos
    }

    /// Restores a previously saved position.
    ///
    /// Positions past the end are clamped so a bad offset cannot make later
    /// slicing panic.
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos.min(self.buf.len());
    }

    /// Bytes between `start` and the cursor.
    pub fn data_from(&self, start: usize) -> &'a [u8] {
        let start = start.min(self.pos);
        &self.buf[start..self.pos]
    }

    /// Bytes in `start..end`, clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.buf.len());
        let start = start.min(end);
        &self.buf[start..end]
    }

    /// Everything from the cursor to the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Moves the cursor so that `rest` (a suffix of the buffer, typically the
    /// remainder handed back by a nom parser) is what remains.
    pub(crate) fn sync_to(&mut self, rest: &'a [u8]) {
        self.pos = self.buf.len() - rest.len().min(self.buf.len());
    }
}
