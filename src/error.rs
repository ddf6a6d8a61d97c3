use crate::location::Location;

/// Failures surfaced by puzzle construction and queries.
///
/// Gameplay-rule violations (rotating after a win, moving the source into a disconnected neighbor) are not
/// errors; the commands treat them as no-ops.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// A coordinate fell outside the board.
    #[error("location {location:?} is outside the {width}x{height} board")]
    OutOfBounds {
        /// The offending location.
        location: Location,
        /// Board width in tiles.
        width: usize,
        /// Board height in tiles.
        height: usize,
    },
    /// A disjoint-set query named a location that was never registered; indicates a setup bug.
    #[error("location {0:?} was never registered in the disjoint set")]
    UnregisteredNode(Location),
    /// A bias mode name was not recognized.
    #[error("unrecognized bias mode {0:?}; expected \"normal\", \"horizontal\", or \"vertical\"")]
    InvalidConfiguration(String),
}
