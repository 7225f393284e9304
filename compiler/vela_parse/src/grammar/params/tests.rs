use pretty_assertions::assert_eq;
use vela_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
use vela_ir::{Span, Token, TokenKind};

use super::*;

/// Lay out tokens the way the lexer would: one byte apart.
///
/// Index 0 plays the `(` of the caller's slicing convention.
fn seq(layout: &[(TokenKind, &str)]) -> Vec<Token> {
    let mut offset = 0;
    layout.iter()
        .map(|&(kind, text)| {
            let len = text.len() as u32;
            let token = Token::new(kind, text, Span::new(offset, offset + len));
            offset += len + 1;
            token
        })
        .collect()
}

fn check(tokens: &[Token]) -> (bool, Vec<Diagnostic>) {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let ok = ParamsRule.is_proper(tokens, &mut queue);
    (ok, queue.flush())
}

#[test]
fn accepts_an_empty_region() {
    let (ok, diags) = check(&seq(&[(TokenKind::Symbol, "(")]));
    assert!(ok);
    assert_eq!(diags, vec![]);

    // Even a fully empty slice is let through.
    let (ok, diags) = check(&[]);
    assert!(ok);
    assert_eq!(diags, vec![]);
}

#[test]
fn accepts_a_single_pair() {
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Primitive, "int"),
        (TokenKind::Identifier, "a"),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(ok);
    assert_eq!(diags, vec![]);
}

#[test]
fn accepts_comma_separated_pairs() {
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Primitive, "int"),
        (TokenKind::Identifier, "a"),
        (TokenKind::Symbol, ","),
        (TokenKind::Primitive, "bool"),
        (TokenKind::Identifier, "flag"),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(ok);
    assert_eq!(diags, vec![]);
}

#[test]
fn accepts_a_trailing_comma() {
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Primitive, "int"),
        (TokenKind::Identifier, "a"),
        (TokenKind::Symbol, ","),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(ok);
    assert_eq!(diags, vec![]);
}

#[test]
fn non_comma_after_a_pair_ends_the_walk() {
    // Whatever follows a complete pair that is not a comma terminates
    // the scan; the remainder is not inspected.
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Primitive, "int"),
        (TokenKind::Identifier, "a"),
        (TokenKind::Primitive, "bool"),
        (TokenKind::Identifier, "b"),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(ok);
    assert_eq!(diags, vec![]);
}

#[test]
fn reports_non_type_in_a_type_slot() {
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Identifier, "x"),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(!ok);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E1004);
    assert_eq!(diags[0].message, "Expected type but got 'x'");
    assert_eq!(diags[0].primary_span(), Some(tokens[1].span));
}

#[test]
fn reports_wrong_kind_in_an_identifier_slot() {
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Primitive, "int"),
        (TokenKind::Number, "42"),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(!ok);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E1002);
    assert_eq!(diags[0].message, "Expected identifier but got '42'.");
    assert_eq!(diags[0].primary_span(), Some(tokens[2].span));
}

#[test]
fn reports_a_type_with_nothing_after_it() {
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Primitive, "int"),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(!ok);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "Expected identifier.");
    assert_eq!(
        diags[0].primary_span(),
        Some(Span::point(tokens[1].span.end))
    );
}

#[test]
fn checks_pairs_after_a_comma() {
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Primitive, "int"),
        (TokenKind::Identifier, "a"),
        (TokenKind::Symbol, ","),
        (TokenKind::Primitive, "bool"),
        (TokenKind::Number, "9"),
    ]);

    let (ok, diags) = check(&tokens);
    assert!(!ok);
    assert_eq!(diags[0].message, "Expected identifier but got '9'.");
    assert_eq!(diags[0].primary_span(), Some(tokens[5].span));
}

#[test]
fn matches_is_the_full_check() {
    // No cheap gate of its own: `matches` reports like `is_proper`.
    let tokens = seq(&[
        (TokenKind::Symbol, "("),
        (TokenKind::Number, "7"),
    ]);

    let mut queue = DiagnosticQueue::new();
    assert!(!ParamsRule.matches(&tokens, &mut queue));
    assert_eq!(queue.error_count(), 1);
}
