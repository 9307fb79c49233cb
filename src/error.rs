use core::fmt;

/// Failure kinds for list and cursor operations.
///
/// All failures are recoverable and surfaced as `Result` errors; no
/// operation has undefined behavior. Allocation exhaustion is the one
/// exception to the taxonomy: node allocation follows the global
/// allocator's abort convention, matching `Rc`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ListError {
    /// The cursor's target node is no longer part of any live chain.
    /// Treat the cursor as exhausted.
    ExpiredCursor,
    /// A structural precondition failed: `pop_front`/`front` on an empty
    /// list, or `erase_after` on a node with no successor.
    InvalidOperation,
    /// The cursor's target node belongs to a different list than the one
    /// asked to operate through it.
    WrongList,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::ExpiredCursor => f.write_str("cursor target is no longer in a live chain"),
            ListError::InvalidOperation => f.write_str("structural precondition failed"),
            ListError::WrongList => f.write_str("cursor belongs to a different list"),
        }
    }
}

impl std::error::Error for ListError {}
