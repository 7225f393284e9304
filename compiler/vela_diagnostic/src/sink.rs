//! The diagnostic sink capability.

use crate::Diagnostic;

/// Capability for receiving diagnostics.
///
/// Implemented by whoever drives validation — a compiler driver, a
/// language server, a test harness. Checking code borrows a sink per call
/// (`&mut dyn DiagnosticSink`) and never constructs or owns one, so there
/// is no hidden global output channel.
///
/// Implementations decide what "receiving" means: collect, render,
/// forward. Filtering and limits are the implementation's own policy
/// (see [`DiagnosticQueue`](crate::DiagnosticQueue)).
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}
