use thiserror::Error;

/// Error returned by the position-based operations of the list types.
///
/// Positions are 1-based. An insert accepts positions `1..=len + 1`, a
/// removal accepts `1..=len`; everything else is rejected with this error
/// and the container is left untouched (see
/// [`INVARIANT_6`](`crate::invariants::INVARIANT_6`)).
///
/// This is deliberately distinct from the empty-container case, which the
/// `pop_*`/`peek` family reports as `None`, and from a failed lookup, which
/// `contains` reports as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid position {position} for a list of length {len}")]
pub struct InvalidPosition {
    /// The rejected 1-based position.
    pub position: usize,
    /// Length of the container at the time of the call.
    pub len: usize,
}
