//! Whole-trip totals.

use serde::{Deserialize, Serialize};

use super::RouteLeg;

/// Duration and distance of the waypoints in their supplied order.
///
/// Both values are rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripTotals {
    /// Total duration in minutes.
    pub duration_minutes: f64,
    /// Total distance in km.
    pub distance_km: f64,
}

/// Totals of an aggregated leg sequence.
///
/// Equal to the cumulative fields of the last leg, or all zero when there
/// are no legs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    /// Number of legs.
    pub legs: usize,
    /// Total distance in km.
    pub distance_km: f64,
    /// Total duration in minutes.
    pub duration_min: f64,
    /// Total cost.
    pub cost: f64,
}

impl TripSummary {
    /// Summarizes a leg sequence.
    pub fn from_legs(legs: &[RouteLeg]) -> Self {
        match legs.last() {
            Some(last) => Self {
                legs: legs.len(),
                distance_km: last.cumulative_distance_km,
                duration_min: last.cumulative_duration_min,
                cost: last.cumulative_cost,
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_empty() {
        assert_eq!(TripSummary::from_legs(&[]), TripSummary::default());
    }

    #[test]
    fn test_summary_uses_last_leg() {
        let leg = |step, cum: f64| RouteLeg {
            step,
            from_index: 0,
            to_index: 1,
            distance_km: 1.0,
            duration_min: 1.0,
            cost: 1.0,
            cumulative_distance_km: cum,
            cumulative_duration_min: cum * 2.0,
            cumulative_cost: cum * 3.0,
        };
        let s = TripSummary::from_legs(&[leg(1, 1.0), leg(2, 2.0)]);
        assert_eq!(s.legs, 2);
        assert_eq!(s.distance_km, 2.0);
        assert_eq!(s.duration_min, 4.0);
        assert_eq!(s.cost, 6.0);
    }
}
