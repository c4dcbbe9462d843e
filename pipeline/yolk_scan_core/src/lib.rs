//! Standalone YAML token scanner: raw text in, span tokens out.
//!
//! This crate is the byte-level foundation of the yolk pipeline. It turns
//! YAML-like input into a flat sequence of [`Token`] values, each carrying a
//! [`TokenKind`] and a byte-offset [`Span`] into the original buffer. Tokens
//! never own text; they are views resolved against the source on demand.
//!
//! The scanner performs no structural interpretation. Nesting, indentation
//! semantics, escape decoding, and anchor/alias resolution all belong to the
//! parser that consumes the token stream. Every byte sequence is lexically
//! acceptable: input that matches no structural symbol is classified as a
//! [`TokenKind::Scalar`], so scanning is total and has no error path.
//!
//! # Usage
//!
//! ```
//! use yolk_scan_core::{Scanner, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("key: value");
//! let mut scanner = Scanner::new(buf.cursor());
//! let tok = scanner.next_token();
//! assert_eq!(tok.kind, TokenKind::Scalar);
//! assert_eq!(buf.cursor().slice(tok.span.start, tok.span.end), "key");
//! ```

pub mod cursor;
pub mod scanner;
pub mod source_buffer;
pub mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::{Span, Token, TokenKind};
