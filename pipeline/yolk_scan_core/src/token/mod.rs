//! Token kinds, spans, and the token value itself.
//!
//! [`TokenKind`] is a closed `repr(u8)` set with discriminants grouped into
//! semantic ranges (gaps left for future kinds):
//!
//! - `0`: scalar content
//! - `32..=47`: single- and two-byte indicators
//! - `48..=63`: document markers
//! - `80..=95`: flow collection delimiters
//! - `112..=127`: trivia
//! - `255`: end of input

/// Byte-offset range into the source buffer.
///
/// Half-open: `start` is the first byte of the token, `end` is one past the
/// last. Both are byte offsets, never character counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized tokens in tests.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub const fn merge(self, other: Span) -> Span {
        Span {
            start: if self.start < other.start {
                self.start
            } else {
                other.start
            },
            end: if self.end > other.end {
                self.end
            } else {
                other.end
            },
        }
    }
}

/// Classification of a scanned token.
///
/// The set is closed: every byte of input maps to exactly one of these.
/// Anything that is not a structural symbol, trivia, or a document marker
/// becomes part of a [`Scalar`](TokenKind::Scalar), which covers plain
/// scalars, mapping keys, and the fallback for incomplete `-`/`.` runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Scalar content: 0
    Scalar = 0,

    // Indicators: 32-47
    /// `- ` (dash plus space) introducing a block sequence item.
    SeqItem = 32,
    /// `:` separating a mapping key from its value.
    Colon = 33,
    /// `,` separating flow collection entries.
    Comma = 34,
    /// `&` introducing an anchor name.
    Anchor = 35,
    /// `*` introducing an alias reference.
    Alias = 36,
    /// `!` introducing a tag.
    Tag = 37,
    /// `#` starting a comment.
    CommentStart = 38,
    /// `'` delimiting a single-quoted scalar.
    SingleQuote = 39,
    /// `"` delimiting a double-quoted scalar.
    DoubleQuote = 40,

    // Document markers: 48-63
    /// `---` explicit document start.
    DocStart = 48,
    /// `...` explicit document end.
    DocEnd = 49,

    // Flow delimiters: 80-95
    /// `[` opening a flow sequence.
    FlowSeqOpen = 80,
    /// `]` closing a flow sequence.
    FlowSeqClose = 81,
    /// `{` opening a flow mapping.
    FlowMapOpen = 82,
    /// `}` closing a flow mapping.
    FlowMapClose = 83,

    // Trivia: 112-127
    /// Maximal run of spaces and tabs.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,

    // Control: 255
    /// End of input. Always the last token; has an empty span at the
    /// buffer length.
    Eof = 255,
}

impl TokenKind {
    /// Fixed source text for kinds whose spelling never varies.
    ///
    /// Returns `None` for variable-content kinds (scalar, trivia, EOF);
    /// resolve those against the source via their span.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::SeqItem => Some("- "),
            TokenKind::Colon => Some(":"),
            TokenKind::Comma => Some(","),
            TokenKind::Anchor => Some("&"),
            TokenKind::Alias => Some("*"),
            TokenKind::Tag => Some("!"),
            TokenKind::CommentStart => Some("#"),
            TokenKind::SingleQuote => Some("'"),
            TokenKind::DoubleQuote => Some("\""),
            TokenKind::DocStart => Some("---"),
            TokenKind::DocEnd => Some("..."),
            TokenKind::FlowSeqOpen => Some("["),
            TokenKind::FlowSeqClose => Some("]"),
            TokenKind::FlowMapOpen => Some("{"),
            TokenKind::FlowMapClose => Some("}"),
            TokenKind::Scalar
            | TokenKind::Whitespace
            | TokenKind::Newline
            | TokenKind::Eof => None,
        }
    }

    /// Human-readable description for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Scalar => "scalar",
            TokenKind::SeqItem => "`- `",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Anchor => "`&`",
            TokenKind::Alias => "`*`",
            TokenKind::Tag => "`!`",
            TokenKind::CommentStart => "`#`",
            TokenKind::SingleQuote => "`'`",
            TokenKind::DoubleQuote => "`\"`",
            TokenKind::DocStart => "`---`",
            TokenKind::DocEnd => "`...`",
            TokenKind::FlowSeqOpen => "`[`",
            TokenKind::FlowSeqClose => "`]`",
            TokenKind::FlowMapOpen => "`{`",
            TokenKind::FlowMapClose => "`}`",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "line break",
            TokenKind::Eof => "end of input",
        }
    }

    /// Returns `true` for tokens a parser may skip unconditionally.
    ///
    /// Newlines are NOT trivia: YAML line structure is significant to the
    /// consumer even though this layer assigns it no meaning.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A classified, span-addressed unit of lexical input.
///
/// Immutable after creation; never owns text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for tests.
    pub const fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

/// Size assertions: TokenKind is a single byte; Token packs into 12 bytes
/// (kind + padding + two u32 offsets) so token vectors stay dense.
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
const _: () = assert!(std::mem::size_of::<Token>() <= 12);

#[cfg(test)]
mod tests;
