//! The two-phase contract every grammar rule implements.

use vela_diagnostic::DiagnosticSink;
use vela_ir::Token;

/// A grammar production validator.
///
/// Rules are stateless: every invocation is independent and reentrant,
/// and a rule never retains tokens or the sink beyond the call.
///
/// The two operations split cheap dispatch from real checking:
///
/// - [`matches`](Self::matches) is a conservative gate — true only when
///   the leading token(s) make this rule's production plausible. It is a
///   dispatch filter, not a validator, and must not report diagnostics
///   for near-misses.
/// - [`is_proper`](Self::is_proper) is the authoritative walk. It may
///   assume `matches` would have held, checks token positions in order,
///   and fail-fast reports exactly one diagnostic for the first violation
///   it finds before returning `false`. Remaining tokens are left
///   unexamined; there is no resynchronization.
///
/// Callers guarantee a non-empty sequence before calling `matches`;
/// implementations must nevertheless never index out of bounds, whatever
/// the input length. Violations are never surfaced as `Err` or panics —
/// only as a `false` return plus a report through the sink.
pub trait ParseRule {
    /// Name of the construct this rule checks, as used in diagnostics.
    fn name(&self) -> &'static str;

    /// The keyword that opens this production, if it has one.
    ///
    /// Used by [`RuleSet`](crate::RuleSet) to dispatch by leading-token
    /// text. Sub-rules reached only by delegation return `None`.
    fn leading_keyword(&self) -> Option<&'static str> {
        None
    }

    /// Quick applicability test on the leading token(s).
    fn matches(&self, tokens: &[Token], sink: &mut dyn DiagnosticSink) -> bool;

    /// Authoritative position-by-position validity check.
    fn is_proper(&self, tokens: &[Token], sink: &mut dyn DiagnosticSink) -> bool;
}
