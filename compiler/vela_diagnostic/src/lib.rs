//! Diagnostic system for rich error reporting.
//!
//! Every syntax violation the checker finds is reported as a [`Diagnostic`]:
//! - Error code for searchability
//! - Clear message (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//!
//! Diagnostics travel through the [`DiagnosticSink`] capability: a
//! one-method contract implemented by whoever drives validation. The
//! checker borrows a sink per call and never owns one, so consumers decide
//! how diagnostics are stored or rendered. [`DiagnosticQueue`] is the
//! reference sink for drivers and tests.

mod diagnostic;
mod error_code;
pub mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::DiagnosticSink;
