//! Leg cost formula.
//!
//! ```text
//! fuel     = distance_km * fuel_consumption / 100 * fuel_price
//! labour   = duration_h * hourly_rate
//! overhead = distance_km * overhead_per_km
//! total    = (fuel + labour + overhead) * (1 + profit_margin / 100)
//! ```
//!
//! Only the final value is rounded, to two decimals, half away from zero.

use crate::distance::{DenseMatrix, MatrixModel};
use crate::models::CostConfig;

pub(crate) const METERS_PER_KM: f64 = 1000.0;
pub(crate) const SECONDS_PER_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_PER_HOUR: f64 = 3600.0;

/// Rounds to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cost of travelling `distance_km` over `duration_hours` under `config`.
///
/// Inputs are not validated; zero or negative values flow through the
/// formula unchanged.
///
/// # Examples
///
/// ```
/// use routegen_core::evaluation::cost_of;
/// use routegen_core::models::CostConfig;
///
/// // 0.124 fuel + 0.25 labour + 0.05 overhead = 0.424, plus 20 % margin
/// let cost = cost_of(1.0, 1.0 / 60.0, &CostConfig::default());
/// assert_eq!(cost, 0.51);
/// ```
pub fn cost_of(distance_km: f64, duration_hours: f64, config: &CostConfig) -> f64 {
    let fuel = distance_km * config.fuel_consumption / 100.0 * config.fuel_price;
    let labour = duration_hours * config.hourly_rate;
    let overhead = distance_km * config.overhead_per_km;
    let base = fuel + labour + overhead;
    round2(base * (1.0 + config.profit_margin / 100.0))
}

/// Cost of the directed edge `from → to`, reading meters and seconds from `model`.
pub fn edge_cost(model: &MatrixModel, from: usize, to: usize, config: &CostConfig) -> f64 {
    cost_of(
        model.distance(from, to) / METERS_PER_KM,
        model.duration(from, to) / SECONDS_PER_HOUR,
        config,
    )
}

/// Applies [`edge_cost`] to every off-diagonal cell, for matrix display.
///
/// Independent of any route order. Diagonal cells are always 0.
pub fn price_matrix(model: &MatrixModel, config: &CostConfig) -> DenseMatrix {
    DenseMatrix::from_fn(model.size(), |from, to| {
        if from == to {
            0.0
        } else {
            edge_cost(model, from, to, config)
        }
    })
}
