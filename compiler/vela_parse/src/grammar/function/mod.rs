//! Function declaration checking.

use tracing::trace;

use vela_diagnostic::{DiagnosticSink, ErrorCode};
use vela_ir::{Token, TokenKind};

use crate::grammar::{end_span, ParamsRule};
use crate::{ParseError, ParseRule};

/// The keyword that opens a function declaration.
const FUNC: &str = "func";

/// Validates the `func name(params)` shape.
///
/// The parenthesized region is delegated to [`ParamsRule`]; everything
/// else is checked positionally. Success is a boolean signal only — no
/// declaration object is produced.
pub struct FunctionRule;

impl ParseRule for FunctionRule {
    fn name(&self) -> &'static str {
        "function declaration"
    }

    fn leading_keyword(&self) -> Option<&'static str> {
        Some(FUNC)
    }

    /// True iff the first token's text is the literal `func`.
    ///
    /// This is the whole dispatch key — no lookahead beyond token 0, and
    /// nothing is reported here.
    fn matches(&self, tokens: &[Token], _sink: &mut dyn DiagnosticSink) -> bool {
        tokens.first().is_some_and(|token| token.text == FUNC)
    }

    fn is_proper(&self, tokens: &[Token], sink: &mut dyn DiagnosticSink) -> bool {
        // The token after `func` is the declared function's name.
        match tokens.get(1) {
            Some(name) if name.kind == TokenKind::Identifier => {}
            found => {
                let span = found.map_or_else(|| end_span(tokens), |token| token.span);
                ParseError::new(self.name(), ErrorCode::E1002, "Expected identifier.", span)
                    .report(sink);
                return false;
            }
        }

        // Then the opening `(` of the parameter list.
        match tokens.get(2) {
            Some(open) if open.text == "(" => {}
            found => {
                let span = found.map_or_else(|| end_span(tokens), |token| token.span);
                ParseError::new(
                    self.name(),
                    ErrorCode::E1001,
                    "Expected '(' character.",
                    span,
                )
                .report(sink);
                return false;
            }
        }

        // Matching rule for the closing delimiter: scan the rest of the
        // sequence and take the LAST `)` found, so a stray `)` earlier in
        // the range cannot cut the parameter region short.
        let open_paren = 2;
        let close_paren = tokens[open_paren..]
            .iter()
            .rposition(|token| token.text == ")")
            .map(|index| index + open_paren);

        let Some(close_paren) = close_paren else {
            trace!("function declaration never closes its parameter list");
            ParseError::new(
                self.name(),
                ErrorCode::E1003,
                "Expected ')' character.",
                end_span(tokens),
            )
            .report(sink);
            return false;
        };

        // The parameter region runs from the `(` (inclusive, so the
        // sub-rule sees it at index 0) up to the matched `)` (exclusive).
        // The sub-rule reports its own diagnostics on failure.
        let params = &tokens[open_paren..close_paren];
        ParamsRule.matches(params, sink)
    }
}
