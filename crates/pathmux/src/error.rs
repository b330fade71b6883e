//! Registration errors

use thiserror::Error;

/// Reasons a pattern can be refused by [`Paths`](crate::Paths).
///
/// Lookups never fail, so every variant is raised at registration time and
/// leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathsError {
    /// No handler was supplied for the pattern
    #[error("nil handler")]
    NilHandler,

    /// The pattern splits into more segments than the 15-bit counter holds
    #[error("path parts overflow: {0}")]
    PathOverflow(usize),

    /// A catch-all segment was found before the final position
    #[error("catch-all parameter must be last: {pattern}")]
    CatchAllNotLast { pattern: String },
}
