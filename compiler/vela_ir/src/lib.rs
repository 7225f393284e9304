//! Vela IR - source model types for the Vela front end.
//!
//! This crate contains the data the grammar checker operates on:
//! - Spans for source locations
//! - Tokens and token kinds, as produced by the lexer
//!
//! It has no vela_* dependencies, so external tools (highlighters,
//! language servers) can depend on it without pulling in the checker.
//!
//! Token sequences are plain `&[Token]` slices. A rule that hands a
//! sub-range to another rule re-borrows the same slice; there is no
//! owning list type and no copying.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
