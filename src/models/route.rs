//! Route order and leg types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// A visiting order over waypoint indices.
///
/// A valid order for N waypoints is a permutation of `0..N`.
///
/// # Examples
///
/// ```
/// use routegen_core::models::RouteOrder;
///
/// let order = RouteOrder::identity(3);
/// assert_eq!(order.as_slice(), &[0, 1, 2]);
/// assert!(order.validate_for(3).is_ok());
/// assert!(order.validate_for(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteOrder(Vec<usize>);

impl RouteOrder {
    /// Wraps a sequence of waypoint indices without validating it.
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The order `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Waypoint indices in visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of waypoints in the order.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the order visits nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Directed hops `(order[k], order[k + 1])` in visiting order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Consumes the order, returning the indices.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Checks that every index is below `n` and appears at most once.
    pub fn check_indices(&self, n: usize) -> Result<(), RoutingError> {
        let mut seen = HashSet::with_capacity(self.0.len());
        for &index in &self.0 {
            if index >= n {
                return Err(RoutingError::IndexOutOfRange { index, size: n });
            }
            if !seen.insert(index) {
                return Err(RoutingError::DuplicateWaypoint { index });
            }
        }
        Ok(())
    }

    /// Checks that this order is a permutation of `0..n`.
    pub fn validate_for(&self, n: usize) -> Result<(), RoutingError> {
        self.check_indices(n)?;
        if self.0.len() != n {
            return Err(RoutingError::OrderLengthMismatch {
                len: self.0.len(),
                expected: n,
            });
        }
        Ok(())
    }
}

impl From<Vec<usize>> for RouteOrder {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl AsRef<[usize]> for RouteOrder {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// One directed hop of a trip, with running totals through this step.
///
/// `from_index`/`to_index` are original waypoint indices, not step positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    /// 1-based step number.
    pub step: usize,
    /// Waypoint the leg starts at.
    pub from_index: usize,
    /// Waypoint the leg ends at.
    pub to_index: usize,
    /// Leg distance in km.
    pub distance_km: f64,
    /// Leg duration in minutes.
    pub duration_min: f64,
    /// Leg cost, rounded to the minor currency unit.
    pub cost: f64,
    /// Distance through this leg, km.
    pub cumulative_distance_km: f64,
    /// Duration through this leg, minutes.
    pub cumulative_duration_min: f64,
    /// Cost through this leg.
    pub cumulative_cost: f64,
}
