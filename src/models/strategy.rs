//! Route ordering strategies and the metrics they compare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::MatrixModel;
use crate::error::RoutingError;

/// Which matrix drives a greedy walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Travel distance (meters).
    Distance,
    /// Travel duration (seconds).
    Duration,
}

impl Metric {
    /// Returns the metric value for the directed edge `from → to`.
    pub fn between(self, model: &MatrixModel, from: usize, to: usize) -> f64 {
        match self {
            Metric::Distance => model.distance(from, to),
            Metric::Duration => model.duration(from, to),
        }
    }
}

/// A selectable route-ordering policy.
///
/// Serialized as the tokens `original`, `nearest`, `shortest`, `fastest`.
///
/// # Examples
///
/// ```
/// use routegen_core::models::{Metric, Strategy};
///
/// let s: Strategy = "fastest".parse().unwrap();
/// assert_eq!(s, Strategy::FastestFirst);
/// assert_eq!(s.metric(), Some(Metric::Duration));
/// assert_eq!(Strategy::Original.to_string(), "original");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep the waypoints in the order they were supplied.
    #[default]
    #[serde(rename = "original")]
    Original,
    /// Greedy nearest-by-distance walk from waypoint 0.
    #[serde(rename = "nearest")]
    NearestNeighbor,
    /// Same walk as [`Strategy::NearestNeighbor`]; kept as its own selector.
    #[serde(rename = "shortest")]
    ShortestFirst,
    /// Greedy nearest-by-duration walk from waypoint 0.
    #[serde(rename = "fastest")]
    FastestFirst,
}

impl Strategy {
    /// All strategies in selector order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Original,
        Strategy::NearestNeighbor,
        Strategy::ShortestFirst,
        Strategy::FastestFirst,
    ];

    /// The metric a greedy strategy minimizes, or `None` for [`Strategy::Original`].
    pub fn metric(self) -> Option<Metric> {
        match self {
            Strategy::Original => None,
            Strategy::NearestNeighbor | Strategy::ShortestFirst => Some(Metric::Distance),
            Strategy::FastestFirst => Some(Metric::Duration),
        }
    }

    /// The selector token.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Original => "original",
            Strategy::NearestNeighbor => "nearest",
            Strategy::ShortestFirst => "shortest",
            Strategy::FastestFirst => "fastest",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| RoutingError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Nearest".parse::<Strategy>(),
            Err(RoutingError::UnknownStrategy("Nearest".into()))
        );
    }

    #[test]
    fn test_metrics() {
        assert_eq!(Strategy::Original.metric(), None);
        assert_eq!(Strategy::NearestNeighbor.metric(), Some(Metric::Distance));
        assert_eq!(Strategy::ShortestFirst.metric(), Some(Metric::Distance));
        assert_eq!(Strategy::FastestFirst.metric(), Some(Metric::Duration));
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&Strategy::ShortestFirst).expect("serialize");
        assert_eq!(json, "\"shortest\"");
        let back: Strategy = serde_json::from_str("\"nearest\"").expect("deserialize");
        assert_eq!(back, Strategy::NearestNeighbor);
    }

    #[test]
    fn test_metric_between() {
        let model = MatrixModel::from_rows(
            &[vec![0.0, 60.0], vec![60.0, 0.0]],
            &[vec![0.0, 1000.0], vec![1000.0, 0.0]],
        )
        .expect("valid");
        assert_eq!(Metric::Distance.between(&model, 0, 1), 1000.0);
        assert_eq!(Metric::Duration.between(&model, 0, 1), 60.0);
    }
}
