//! Token types produced by the lexer.

use std::fmt;

use super::Span;

/// Token category.
///
/// Literal payloads live on [`Token::literal`], so the kind itself is `Copy`
/// and cheap to compare in the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,

    // Operators
    Minus,
    Plus,
    Slash,
    Star,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Shr,
    Less,
    LessEqual,
    Shl,

    // Literals
    Identifier,
    String,
    Int,
    Float,

    // Keywords
    And,
    Break,
    Class,
    Else,
    False,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Human-readable name used in parser diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Shr => ">>",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Shl => "<<",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::And => "and",
            TokenKind::Break => "break",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Literal payload carried by number and string tokens.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenLiteral {
    Int(i64),
    Float(f64),
    /// String contents without the surrounding quotes.
    Str(String),
}

/// A token with its source text and location.
///
/// Produced once by the lexer and never mutated afterwards.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source substring.
    pub lexeme: String,
    pub literal: Option<TokenLiteral>,
    /// 1-based line on which the token starts.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<TokenLiteral>,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// End-of-input marker at `offset`.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", None, line, Span::point(offset))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(lit) => write!(f, "{:?}({lit:?}) @ {:?}", self.kind, self.span),
            None => write!(f, "{:?} @ {:?}", self.kind, self.span),
        }
    }
}
