use super::*;
use pretty_assertions::assert_eq;

// === TokenKind discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Scalar content: 0
    assert_eq!(TokenKind::Scalar as u8, 0);

    // Indicators: 32-47
    assert_eq!(TokenKind::SeqItem as u8, 32);
    assert_eq!(TokenKind::Colon as u8, 33);
    assert_eq!(TokenKind::Comma as u8, 34);
    assert_eq!(TokenKind::Anchor as u8, 35);
    assert_eq!(TokenKind::Alias as u8, 36);
    assert_eq!(TokenKind::Tag as u8, 37);
    assert_eq!(TokenKind::CommentStart as u8, 38);
    assert_eq!(TokenKind::SingleQuote as u8, 39);
    assert_eq!(TokenKind::DoubleQuote as u8, 40);

    // Document markers: 48-63
    assert_eq!(TokenKind::DocStart as u8, 48);
    assert_eq!(TokenKind::DocEnd as u8, 49);

    // Flow delimiters: 80-95
    assert_eq!(TokenKind::FlowSeqOpen as u8, 80);
    assert_eq!(TokenKind::FlowMapClose as u8, 83);

    // Trivia: 112-127
    assert_eq!(TokenKind::Whitespace as u8, 112);
    assert_eq!(TokenKind::Newline as u8, 113);

    // Control: 255
    assert_eq!(TokenKind::Eof as u8, 255);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Lexeme ===

#[test]
fn fixed_lexeme_indicators() {
    assert_eq!(TokenKind::SeqItem.lexeme(), Some("- "));
    assert_eq!(TokenKind::Colon.lexeme(), Some(":"));
    assert_eq!(TokenKind::Comma.lexeme(), Some(","));
    assert_eq!(TokenKind::Anchor.lexeme(), Some("&"));
    assert_eq!(TokenKind::Alias.lexeme(), Some("*"));
    assert_eq!(TokenKind::Tag.lexeme(), Some("!"));
    assert_eq!(TokenKind::CommentStart.lexeme(), Some("#"));
    assert_eq!(TokenKind::SingleQuote.lexeme(), Some("'"));
    assert_eq!(TokenKind::DoubleQuote.lexeme(), Some("\""));
}

#[test]
fn fixed_lexeme_markers_and_delimiters() {
    assert_eq!(TokenKind::DocStart.lexeme(), Some("---"));
    assert_eq!(TokenKind::DocEnd.lexeme(), Some("..."));
    assert_eq!(TokenKind::FlowSeqOpen.lexeme(), Some("["));
    assert_eq!(TokenKind::FlowSeqClose.lexeme(), Some("]"));
    assert_eq!(TokenKind::FlowMapOpen.lexeme(), Some("{"));
    assert_eq!(TokenKind::FlowMapClose.lexeme(), Some("}"));
}

#[test]
fn variable_lexeme_returns_none() {
    assert_eq!(TokenKind::Scalar.lexeme(), None);
    assert_eq!(TokenKind::Whitespace.lexeme(), None);
    assert_eq!(TokenKind::Newline.lexeme(), None);
    assert_eq!(TokenKind::Eof.lexeme(), None);
}

// === Name ===

#[test]
fn name_returns_readable_description() {
    assert_eq!(TokenKind::Scalar.name(), "scalar");
    assert_eq!(TokenKind::SeqItem.name(), "`- `");
    assert_eq!(TokenKind::DocStart.name(), "`---`");
    assert_eq!(TokenKind::FlowMapOpen.name(), "`{`");
    assert_eq!(TokenKind::Whitespace.name(), "whitespace");
    assert_eq!(TokenKind::Newline.name(), "line break");
    assert_eq!(TokenKind::Eof.name(), "end of input");
}

// === Trivia ===

#[test]
fn trivia_classification() {
    assert!(TokenKind::Whitespace.is_trivia());

    // Newlines are significant to the consumer, not trivia.
    assert!(!TokenKind::Newline.is_trivia());
    assert!(!TokenKind::Scalar.is_trivia());
    assert!(!TokenKind::Eof.is_trivia());
}

// === Span ===

#[test]
fn span_len_and_empty() {
    let span = Span::new(3, 8);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::new(4, 4).is_empty());
    assert!(Span::DUMMY.is_empty());
}

#[test]
fn span_merge_covers_both() {
    let a = Span::new(2, 5);
    let b = Span::new(4, 9);
    assert_eq!(a.merge(b), Span::new(2, 9));
    assert_eq!(b.merge(a), Span::new(2, 9));
}

// === Token ===

#[test]
fn token_construction() {
    let tok = Token::new(TokenKind::Scalar, Span::new(0, 5));
    assert_eq!(tok.kind, TokenKind::Scalar);
    assert_eq!(tok.span.len(), 5);
}

#[test]
fn token_is_copy() {
    let tok = Token::dummy(TokenKind::Colon);
    let tok2 = tok; // Copy
    assert_eq!(tok, tok2);
}
