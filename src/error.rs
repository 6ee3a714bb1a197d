//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Which of the two matrices in a [`MatrixModel`](crate::distance::MatrixModel)
/// an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// Travel durations in seconds.
    Duration,
    /// Travel distances in meters.
    Distance,
}

impl std::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixKind::Duration => f.write_str("duration"),
            MatrixKind::Distance => f.write_str("distance"),
        }
    }
}

/// Invalid input rejected by a routing or costing call.
///
/// Every variant is local to the call that produced it; no component keeps
/// state that an error could leave half-updated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// The duration and distance matrices cover a different number of waypoints.
    #[error("duration matrix covers {duration} waypoints but distance matrix covers {distance}")]
    DimensionMismatch {
        /// Size of the duration matrix.
        duration: usize,
        /// Size of the distance matrix.
        distance: usize,
    },

    /// A matrix row does not have one entry per waypoint.
    #[error("{matrix} matrix row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        /// Matrix containing the row.
        matrix: MatrixKind,
        /// Row index.
        row: usize,
        /// Entries found.
        len: usize,
        /// Entries expected.
        expected: usize,
    },

    /// An off-diagonal entry is NaN or negative.
    #[error("{matrix} matrix entry [{from}][{to}] is {value}, expected a non-negative number")]
    InvalidEntry {
        /// Matrix containing the entry.
        matrix: MatrixKind,
        /// Source waypoint.
        from: usize,
        /// Target waypoint.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// A route order references a waypoint outside `0..size`.
    #[error("waypoint {index} is out of range for {size} waypoints")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of waypoints in the matrix.
        size: usize,
    },

    /// A route order visits the same waypoint twice.
    #[error("waypoint {index} appears more than once in the route order")]
    DuplicateWaypoint {
        /// Repeated index.
        index: usize,
    },

    /// A route order does not visit every waypoint.
    #[error("route order visits {len} waypoints, expected {expected}")]
    OrderLengthMismatch {
        /// Length of the order.
        len: usize,
        /// Number of waypoints in the matrix.
        expected: usize,
    },

    /// A greedy walk found no unvisited waypoint with a finite metric.
    #[error("no reachable unvisited waypoint from {from} after visiting {visited} of {total}")]
    Unreachable {
        /// Waypoint the walk was stuck at.
        from: usize,
        /// Waypoints visited so far.
        visited: usize,
        /// Total waypoints.
        total: usize,
    },

    /// A route order crosses an edge with no finite distance or duration.
    #[error("leg {from} -> {to} is unreachable")]
    UnreachableLeg {
        /// Source waypoint.
        from: usize,
        /// Target waypoint.
        to: usize,
    },

    /// A strategy token that is not one of `original`, `nearest`, `shortest`, `fastest`.
    #[error("unknown route strategy `{0}`")]
    UnknownStrategy(String),

    /// A cost knob is NaN or infinite.
    #[error("cost setting `{field}` must be a finite number, got {value}")]
    InvalidCostSetting {
        /// Field name as it appears in the serialized config.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A cost configuration document could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid cost configuration: {0}")]
    ConfigParse(String),
}
