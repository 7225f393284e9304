//! Parameter list checking.

use vela_diagnostic::{DiagnosticSink, ErrorCode};
use vela_ir::{Span, Token, TokenKind};

use crate::{ParseError, ParseRule};

/// Validates a comma-separated sequence of `type identifier` pairs.
///
/// Operates on the interior of a parenthesized parameter list as sliced
/// by [`FunctionRule`](crate::FunctionRule): index 0 holds the `(`
/// itself, so parameters start at index 1. The rule is independently
/// callable on any sequence with that shape.
///
/// An empty region — no tokens after the `(` — is accepted without
/// inspection: a zero-parameter list is valid by default, not a checked
/// case. A trailing comma is likewise let through.
pub struct ParamsRule;

impl ParseRule for ParamsRule {
    fn name(&self) -> &'static str {
        "parameter list"
    }

    /// Delegates directly to [`is_proper`](ParseRule::is_proper).
    ///
    /// The production has no distinguishing leading token, so
    /// applicability and validity coincide; unlike the usual gate, this
    /// one does report on violation.
    fn matches(&self, tokens: &[Token], sink: &mut dyn DiagnosticSink) -> bool {
        self.is_proper(tokens, sink)
    }

    fn is_proper(&self, tokens: &[Token], sink: &mut dyn DiagnosticSink) -> bool {
        // Parameters sit at indexes 1.., in strides of three:
        // type, identifier, separating comma.
        let mut position = 1;

        while position < tokens.len() {
            let ty = &tokens[position];
            if ty.kind != TokenKind::Primitive {
                ParseError::new(
                    self.name(),
                    ErrorCode::E1004,
                    format!("Expected type but got '{}'", ty.text),
                    ty.span,
                )
                .report(sink);
                return false;
            }

            match tokens.get(position + 1) {
                Some(param) if param.kind == TokenKind::Identifier => {}
                Some(param) => {
                    ParseError::new(
                        self.name(),
                        ErrorCode::E1002,
                        format!("Expected identifier but got '{}'.", param.text),
                        param.span,
                    )
                    .report(sink);
                    return false;
                }
                None => {
                    // The pair is cut short: a type with nothing after it.
                    ParseError::new(
                        self.name(),
                        ErrorCode::E1002,
                        "Expected identifier.",
                        Span::point(ty.span.end),
                    )
                    .report(sink);
                    return false;
                }
            }

            // A `,` continues the walk; anything else — including the end
            // of the region — terminates it as the final parameter.
            match tokens.get(position + 2) {
                Some(sep) if sep.text == "," => position += 3,
                _ => break,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests;
