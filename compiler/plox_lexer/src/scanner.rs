//! Hand-written scanner producing one [`Token`] per call.
//!
//! Main dispatch matches on the first byte of a lexeme and calls a focused
//! method that advances the cursor and builds the token. Trivia (whitespace,
//! newlines, comments) is consumed before dispatch.

use plox_ir::{Span, Token, TokenKind, TokenLiteral};

use crate::cursor::Cursor;
use crate::keywords;
use crate::lex_error::LexError;

pub(crate) struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Scanner {
            source,
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token, or `Eof` once the source is exhausted.
    pub(crate) fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;

        let start = self.cursor.pos();
        let line = self.cursor.line();
        if self.cursor.is_eof() {
            return Ok(Token::eof(line, u32::try_from(start).unwrap_or(u32::MAX)));
        }

        match self.cursor.current() {
            b'(' => Ok(self.single(start, line, TokenKind::LeftParen)),
            b')' => Ok(self.single(start, line, TokenKind::RightParen)),
            b'{' => Ok(self.single(start, line, TokenKind::LeftBrace)),
            b'}' => Ok(self.single(start, line, TokenKind::RightBrace)),
            b',' => Ok(self.single(start, line, TokenKind::Comma)),
            b'.' => Ok(self.single(start, line, TokenKind::Dot)),
            b';' => Ok(self.single(start, line, TokenKind::Semicolon)),
            b'-' => Ok(self.single(start, line, TokenKind::Minus)),
            b'+' => Ok(self.single(start, line, TokenKind::Plus)),
            b'*' => Ok(self.single(start, line, TokenKind::Star)),
            b'/' => Ok(self.single(start, line, TokenKind::Slash)),
            b'&' => Ok(self.single(start, line, TokenKind::Amp)),
            b'|' => Ok(self.single(start, line, TokenKind::Pipe)),
            b'^' => Ok(self.single(start, line, TokenKind::Caret)),
            b'~' => Ok(self.single(start, line, TokenKind::Tilde)),
            b'!' => Ok(self.with_equal(start, line, TokenKind::Bang, TokenKind::BangEqual)),
            b'=' => Ok(self.with_equal(start, line, TokenKind::Equal, TokenKind::EqualEqual)),
            b'<' => Ok(self.angle(start, line, b'<', TokenKind::Less)),
            b'>' => Ok(self.angle(start, line, b'>', TokenKind::Greater)),
            b'"' => self.string(start, line),
            b'0'..=b'9' => self.number(start, line),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Ok(self.identifier(start, line)),
            _ => Err(self.unexpected(start, line)),
        }
    }

    // ─── Trivia ───────────────────────────────────────────────────────

    fn skip_trivia(&mut self) -> Result<(), LexError> {
        while !self.cursor.is_eof() {
            match (self.cursor.current(), self.cursor.peek()) {
                (b' ' | b'\r' | b'\t' | b'\n', _) => self.cursor.advance(),
                (b'/', b'/') => self.cursor.eat_while(|b| b != b'\n'),
                (b'/', b'*') => self.block_comment()?,
                _ => break,
            }
        }
        Ok(())
    }

    /// Consume `/* ... */`. Comments do not nest.
    fn block_comment(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            if self.cursor.is_eof() {
                return Err(LexError::unterminated_comment(
                    Span::from_range(start..self.cursor.pos()),
                    self.cursor.line(),
                ));
            }
            if self.cursor.current() == b'*' && self.cursor.peek() == b'/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    // ─── Operators ────────────────────────────────────────────────────

    fn single(&mut self, start: usize, line: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind, start, line, None)
    }

    /// `!` / `!=` and `=` / `==`.
    fn with_equal(&mut self, start: usize, line: u32, bare: TokenKind, eq: TokenKind) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.eat(b'=') { eq } else { bare };
        self.token(kind, start, line, None)
    }

    /// `<`, `<=`, `<<` and `>`, `>=`, `>>`.
    fn angle(&mut self, start: usize, line: u32, same: u8, bare: TokenKind) -> Token {
        self.cursor.advance();
        let less = bare == TokenKind::Less;
        let kind = if self.cursor.eat(b'=') {
            if less {
                TokenKind::LessEqual
            } else {
                TokenKind::GreaterEqual
            }
        } else if self.cursor.eat(same) {
            if less {
                TokenKind::Shl
            } else {
                TokenKind::Shr
            }
        } else {
            bare
        };
        self.token(kind, start, line, None)
    }

    // ─── Literals ─────────────────────────────────────────────────────

    /// String literal, taken verbatim up to the closing quote. Newlines are
    /// allowed inside and counted.
    fn string(&mut self, start: usize, line: u32) -> Result<Token, LexError> {
        self.cursor.advance(); // opening '"'
        while self.cursor.current() != b'"' {
            if self.cursor.is_eof() {
                return Err(LexError::unterminated_string(
                    Span::from_range(start..self.cursor.pos()),
                    self.cursor.line(),
                ));
            }
            self.cursor.advance();
        }
        self.cursor.advance(); // closing '"'

        let contents = self.slice(start + 1, self.cursor.pos() - 1).to_string();
        Ok(self.token(TokenKind::String, start, line, Some(TokenLiteral::Str(contents))))
    }

    fn number(&mut self, start: usize, line: u32) -> Result<Token, LexError> {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
            // digits '.' digits always parses; very long literals round
            let value: f64 = self
                .slice(start, self.cursor.pos())
                .parse()
                .unwrap_or(f64::INFINITY);
            return Ok(self.token(TokenKind::Float, start, line, Some(TokenLiteral::Float(value))));
        }

        let text = self.slice(start, self.cursor.pos());
        let value: i64 = text.parse().map_err(|_| {
            LexError::integer_too_large(Span::from_range(start..self.cursor.pos()), line)
        })?;
        Ok(self.token(TokenKind::Int, start, line, Some(TokenLiteral::Int(value))))
    }

    fn identifier(&mut self, start: usize, line: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.slice(start, self.cursor.pos());
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.token(kind, start, line, None)
    }

    // ─── Errors ───────────────────────────────────────────────────────

    #[cold]
    fn unexpected(&self, start: usize, line: u32) -> LexError {
        let ch = self
            .source
            .get(start..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::unexpected_character(Span::from_range(start..start + ch.len_utf8()), line, ch)
    }

    // ─── Helpers ──────────────────────────────────────────────────────

    #[inline]
    fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default()
    }

    fn token(
        &self,
        kind: TokenKind,
        start: usize,
        line: u32,
        literal: Option<TokenLiteral>,
    ) -> Token {
        let end = self.cursor.pos();
        Token::new(
            kind,
            self.slice(start, end),
            literal,
            line,
            Span::from_range(start..end),
        )
    }
}
