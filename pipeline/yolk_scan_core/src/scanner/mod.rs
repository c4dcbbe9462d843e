//! Hand-written scanner producing one span token per call.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`Token`] values with zero heap allocation. It assigns no structural
//! meaning: indentation, nesting, quoting semantics, and escape decoding
//! are deferred to the consuming parser.
//!
//! # Design
//!
//! Main dispatch classifies the current byte and either emits a single-byte
//! token immediately or enters a multi-byte accumulation path. Two rules
//! keep each call context-free given only the cursor position:
//!
//! - **Peek, don't consume**: the cursor never advances past a byte it has
//!   not committed to a token. Whitespace runs and scalars stop AT their
//!   terminating delimiter, which the next call classifies fresh.
//! - **Fallback without rewind**: when a speculative `-`/`.` run fails to
//!   complete a marker, scanning switches to scalar accumulation keeping
//!   the original start offset, so the examined bytes stay in the scalar
//!   span and the cursor is never moved backwards.
//!
//! Scanning is total: every byte sequence is lexically acceptable,
//! classified at worst as [`TokenKind::Scalar`]. The sentinel byte (`0x00`)
//! naturally dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenKind};

/// Pure, allocation-free scanner.
///
/// Produces one token per [`next_token()`](Self::next_token) call. The
/// cursor position is monotonically non-decreasing across calls; once the
/// end of the buffer is reached, every subsequent call returns an
/// [`TokenKind::Eof`] token with an empty span at the buffer length.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next token.
    ///
    /// Returns `TokenKind::Eof` with an empty span at the buffer length
    /// when the input is exhausted. Subsequent calls after EOF continue
    /// to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'-' => self.dash(start),
            b'.' => self.dot(start),
            b':' => self.single(start, TokenKind::Colon),
            b',' => self.single(start, TokenKind::Comma),
            b'&' => self.single(start, TokenKind::Anchor),
            b'*' => self.single(start, TokenKind::Alias),
            b'!' => self.single(start, TokenKind::Tag),
            b'#' => self.single(start, TokenKind::CommentStart),
            b'\'' => self.single(start, TokenKind::SingleQuote),
            b'"' => self.single(start, TokenKind::DoubleQuote),
            b'[' => self.single(start, TokenKind::FlowSeqOpen),
            b']' => self.single(start, TokenKind::FlowSeqClose),
            b'{' => self.single(start, TokenKind::FlowMapOpen),
            b'}' => self.single(start, TokenKind::FlowMapClose),
            _ => self.scalar(start),
        }
    }

    // ─── EOF ──────────────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> Token {
        if self.cursor.is_eof() {
            let end = self.cursor.source_len();
            Token::new(TokenKind::Eof, Span::new(end, end))
        } else {
            // Interior null byte: not a delimiter, so it is scalar content
            // like any other unclassified byte.
            self.scalar(start)
        }
    }

    // ─── Whitespace & Line Breaks ─────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> Token {
        self.cursor.eat_whitespace();
        Token::new(TokenKind::Whitespace, Span::new(start, self.cursor.pos()))
    }

    fn carriage_return(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // CRLF: single Newline spanning both bytes.
            self.cursor.advance();
            Token::new(TokenKind::Newline, Span::new(start, self.cursor.pos()))
        } else {
            // Lone \r: horizontal whitespace.
            Token::new(TokenKind::Whitespace, Span::new(start, self.cursor.pos()))
        }
    }

    fn newline(&mut self, start: u32) -> Token {
        self.cursor.advance();
        Token::new(TokenKind::Newline, Span::new(start, self.cursor.pos()))
    }

    // ─── Single-byte indicators ───────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(kind, Span::new(start, self.cursor.pos()))
    }

    // ─── Dash & Dot runs ──────────────────────────────────────────────────

    /// `-` dispatch: sequence item, document start, or scalar fallback.
    ///
    /// A lone `-` followed by a space is a sequence item indicator covering
    /// both bytes. Three consecutive `-` are a document start; the run emits
    /// as soon as it reaches three, whatever follows. Anything else falls
    /// back to scalar accumulation from the original start offset.
    fn dash(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first '-'
        if self.cursor.current() == b' ' {
            self.cursor.advance();
            return Token::new(TokenKind::SeqItem, Span::new(start, self.cursor.pos()));
        }
        if self.cursor.current() == b'-' && self.cursor.peek() == b'-' {
            self.cursor.advance_n(2);
            return Token::new(TokenKind::DocStart, Span::new(start, self.cursor.pos()));
        }
        self.scalar(start)
    }

    /// `.` dispatch: document end or scalar fallback. Symmetric to `dash`,
    /// minus the sequence-item case.
    fn dot(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first '.'
        if self.cursor.current() == b'.' && self.cursor.peek() == b'.' {
            self.cursor.advance_n(2);
            return Token::new(TokenKind::DocEnd, Span::new(start, self.cursor.pos()));
        }
        self.scalar(start)
    }

    // ─── Scalars ──────────────────────────────────────────────────────────

    /// Accumulate scalar content from `start` to the next delimiter or EOF.
    ///
    /// Also the landing point for failed dash/dot runs: `start` stays at the
    /// first examined byte, and the disqualifying byte is re-examined under
    /// scalar rules -- ordinary bytes join the span, delimiter-set bytes
    /// terminate it unconsumed. A scalar reaching the end of the buffer
    /// ends at the buffer boundary.
    fn scalar(&mut self, start: u32) -> Token {
        self.cursor.skip_to_scalar_delim();
        Token::new(TokenKind::Scalar, Span::new(start, self.cursor.pos()))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: scan an input string and collect all tokens.
///
/// The returned sequence includes the trailing [`TokenKind::Eof`] token,
/// so consumers navigating the materialized stream always have an
/// in-bounds end marker to check against. For streaming access, construct
/// a [`SourceBuffer`](crate::SourceBuffer) + [`Scanner`] directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        let done = tok.kind == TokenKind::Eof;
        tokens.push(tok);
        if done {
            break;
        }
    }
    tokens
}
