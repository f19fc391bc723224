//! Byte cursor with line tracking.
//!
//! Past the end of the source the cursor reports `0`, which no token
//! starts with, so lookahead never needs a separate bounds check.

pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    /// 1-based line of the byte at `pos`.
    line: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.bytes.get(self.pos + 1).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Consume one byte, counting it if it is a newline.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(&byte) = self.bytes.get(self.pos) {
            if byte == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Consume the current byte if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if !self.is_eof() && self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_lines() {
        let mut cursor = Cursor::new("a\nb\n");
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.current(), b'b');
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 3);
        assert!(cursor.is_eof());
    }

    #[test]
    fn reads_past_end_as_zero() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.peek(), 0);
        cursor.advance();
        assert_eq!(cursor.current(), 0);
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn eat_only_on_match() {
        let mut cursor = Cursor::new("==");
        assert!(!cursor.eat(b'!'));
        assert!(cursor.eat(b'='));
        assert!(cursor.eat(b'='));
        assert!(!cursor.eat(b'='));
    }
}
