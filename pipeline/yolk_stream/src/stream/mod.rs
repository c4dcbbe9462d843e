//! Token cursor for navigating a materialized token sequence.
//!
//! Provides low-level token access, lookahead, and repositioning for
//! backtracking after a failed speculative parse.

use yolk_scan_core::{Token, TokenKind};

/// Cursor over a finite, already-fully-produced token sequence.
///
/// The position index always denotes the *next* token an
/// [`advance()`](Self::advance) call returns, never the last one returned.
///
/// # Contract
///
/// The sequence is expected to end with a [`TokenKind::Eof`] token (as
/// produced by [`scan()`](crate::scan)). Advancing past the end of the
/// sequence is caller responsibility: the natural guard is checking for,
/// or consuming, the Eof token, which is a valid returnable element.
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new cursor at the start of the token sequence.
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    /// Total number of tokens in the sequence.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The current position: the index of the next token due.
    ///
    /// Used for progress tracking and as the argument to a later
    /// [`reset_to()`](Self::reset_to) -- compare positions before and
    /// after parsing to determine whether tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Index of the last token returned by [`advance()`](Self::advance),
    /// saturating at 0 before any call has been made.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.pos.saturating_sub(1)
    }

    /// Return the token at the current position and move forward by one.
    ///
    /// # Invariant
    ///
    /// The sequence ends with an Eof token and callers check the current
    /// token kind before advancing past it, so the cursor can never move
    /// beyond the last token. The unconditional increment avoids a branch
    /// on every token consumption; advancing out of bounds panics.
    #[inline]
    pub fn advance(&mut self) -> Token {
        debug_assert!(
            self.pos < self.tokens.len(),
            "advance past end of token stream"
        );
        let tok = self.tokens[self.pos];
        self.pos += 1;
        tok
    }

    /// Return the token at the current position without moving it, or
    /// `None` if the position is at or past the end of the sequence.
    #[inline]
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Unconditionally reposition the cursor to an arbitrary index.
    ///
    /// Used to roll back after a failed speculative parse: save
    /// [`position()`](Self::position) beforehand, restore it here.
    pub fn reset_to(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "reset position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    /// Skip forward by `offset` tokens as seen by the next
    /// [`advance()`](Self::advance) call; `offset == 0` is a no-op.
    pub fn advance_by(&mut self, offset: usize) {
        debug_assert!(
            self.pos + offset <= self.tokens.len(),
            "advance_by({offset}) past end of token stream"
        );
        self.pos += offset;
    }

    /// Check if the next token due is of the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Check if the cursor has reached the end-of-input token.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.peek().map_or(true, |t| t.kind == TokenKind::Eof)
    }
}
