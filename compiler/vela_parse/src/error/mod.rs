//! Parse error construction and reporting.

use vela_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use vela_ir::Span;

/// A single syntax violation found by a rule.
///
/// Binds the failing rule's identity, the offending token's position, and
/// the human-readable message. Constructed at the point of failure,
/// reported immediately, then gone — it has no lifecycle beyond the
/// [`report`](Self::report) call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a parse error should be reported, not silently dropped"]
pub struct ParseError {
    /// The construct whose rule found the violation.
    pub rule: &'static str,
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the offending token (or of the position where a
    /// required token was missing).
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(
        rule: &'static str,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        ParseError {
            rule,
            code,
            message: message.into(),
            span,
        }
    }

    /// Convert into a diagnostic pointing at the offending token.
    pub fn into_diagnostic(self) -> Diagnostic {
        let label = self.code.description();
        Diagnostic::error(self.code)
            .with_message(self.message)
            .with_label(self.span, label)
            .with_note(format!("while checking a {}", self.rule))
    }

    /// Report through the sink and discard.
    pub fn report(self, sink: &mut dyn DiagnosticSink) {
        sink.report(self.into_diagnostic());
    }
}
