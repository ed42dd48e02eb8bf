//! Shared types and utilities used across all domain modules.

pub mod interval;
pub mod serde_util;

pub use interval::{Interval, IntervalKind, IntervalParseError, IntervalUnit};

/// A record identified by a short code (`"NEM"`, `"black_coal"`, ...).
///
/// Several nested records serialize as their code only; see
/// [`serde_util::code_only`].
pub trait Coded {
    fn code(&self) -> &str;
}
