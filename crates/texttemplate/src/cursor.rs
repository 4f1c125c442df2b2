/*
 * cursor.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Character cursor over template source.
//!
//! The cursor owns the source characters, a read offset and the buffer the
//! compiler accumulates pending text into. It knows nothing about template
//! syntax.

/// Character returned for any read past the end of the source.
pub const SENTINEL: char = '\0';

/// A read cursor with an accumulation buffer.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    offset: usize,
    buffer: String,
}

impl Cursor {
    /// Create a cursor positioned at the start of `text`.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            offset: 0,
            buffer: String::new(),
        }
    }

    /// True once every character has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// Character at `index`, or [`SENTINEL`] when out of bounds.
    pub fn char_at(&self, index: usize) -> char {
        self.chars.get(index).copied().unwrap_or(SENTINEL)
    }

    /// Return the current character and move past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> char {
        let c = self.peek();
        self.advance();
        c
    }

    /// Return the current character without moving.
    pub fn peek(&self) -> char {
        self.char_at(self.offset)
    }

    /// Move past the current character. Saturates at the end of the source.
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.offset += 1;
        }
    }

    /// Current read offset, in characters.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Append `c` to the buffer.
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Take the buffer contents, leaving it empty.
    pub fn pop_all(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_is_not_exhausted() {
        let cursor = Cursor::new("ab");
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_empty_cursor_is_exhausted() {
        let cursor = Cursor::new("");
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.peek(), SENTINEL);
    }

    #[test]
    fn test_next_consumes_in_order() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.next(), 'a');
        assert_eq!(cursor.next(), 'b');
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut cursor = Cursor::new("xy");
        assert_eq!(cursor.peek(), 'x');
        assert_eq!(cursor.peek(), 'x');
        cursor.advance();
        assert_eq!(cursor.peek(), 'y');
    }

    #[test]
    fn test_reads_past_end_return_sentinel() {
        let mut cursor = Cursor::new("a");
        cursor.next();
        assert_eq!(cursor.next(), SENTINEL);
        assert_eq!(cursor.next(), SENTINEL);
        // Offset stays pinned at the end
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_char_at_out_of_bounds() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.char_at(2), 'c');
        assert_eq!(cursor.char_at(3), SENTINEL);
        assert_eq!(cursor.char_at(usize::MAX), SENTINEL);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let mut cursor = Cursor::new("é€");
        assert_eq!(cursor.next(), 'é');
        assert_eq!(cursor.next(), '€');
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_pop_all_clears_buffer() {
        let mut cursor = Cursor::new("");
        cursor.push('h');
        cursor.push('i');
        assert_eq!(cursor.pop_all(), "hi");
        assert_eq!(cursor.pop_all(), "");
    }
}
