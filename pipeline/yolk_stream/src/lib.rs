//! Materialized token stream with lookahead and backtracking.
//!
//! A parser built on this crate never touches the byte-level scanner
//! directly. It drains the scanner once via [`scan()`], then navigates the
//! materialized sequence through a [`TokenStream`] cursor: unlimited
//! lookahead via [`TokenStream::peek`], arbitrary backtracking via
//! [`TokenStream::reset_to`]. Decoupling lexing cost from parsing control
//! flow this way means a failed speculative parse costs an index reset,
//! not a rescan.
//!
//! ```
//! use yolk_stream::{scan, TokenKind, TokenStream};
//!
//! let tokens = scan("key: value");
//! let mut stream = TokenStream::new(&tokens);
//! assert_eq!(stream.advance().kind, TokenKind::Scalar);
//! assert_eq!(stream.advance().kind, TokenKind::Colon);
//! stream.reset_to(0); // speculative parse failed; rewind
//! assert_eq!(stream.advance().kind, TokenKind::Scalar);
//! ```

mod stream;

pub use stream::TokenStream;
pub use yolk_scan_core::{Span, Token, TokenKind};

use yolk_scan_core::{Scanner, SourceBuffer};

/// Run the scanner to completion over `source` and collect the full token
/// sequence, including the trailing [`TokenKind::Eof`] token.
///
/// The Eof token is a returnable element of the sequence, not a sentinel
/// past it: it is what makes unguarded [`TokenStream::advance`] loops
/// terminate cleanly.
pub fn scan(source: &str) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
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
    tracing::debug!(
        tokens = tokens.len(),
        bytes = buf.len(),
        "materialized token stream"
    );
    tokens
}
