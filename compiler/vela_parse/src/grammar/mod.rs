//! Grammar productions, one rule per construct.

mod function;
mod params;

pub use function::FunctionRule;
pub use params::ParamsRule;

use vela_ir::{Span, Token};

/// Zero-length span just past the last token.
///
/// Diagnostics for a required token that is missing entirely point here,
/// so truncated sequences still get a precise location instead of an
/// out-of-range access.
pub(crate) fn end_span(tokens: &[Token]) -> Span {
    tokens
        .last()
        .map_or(Span::DUMMY, |token| Span::point(token.span.end))
}
