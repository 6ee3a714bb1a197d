//! Cost configuration knobs.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// The five independent inputs of the leg cost formula.
///
/// Serialized with camelCase keys (`fuelPrice`, `fuelConsumption`,
/// `hourlyRate`, `overheadPerKm`, `profitMargin`).
///
/// # Examples
///
/// ```
/// use routegen_core::models::CostConfig;
///
/// let config = CostConfig::default().with_hourly_rate(18.0);
/// assert_eq!(config.fuel_price, 1.55);
/// assert_eq!(config.hourly_rate, 18.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostConfig {
    /// Fuel price, currency per litre.
    pub fuel_price: f64,
    /// Fuel consumption, litres per 100 km.
    pub fuel_consumption: f64,
    /// Labour rate, currency per hour.
    pub hourly_rate: f64,
    /// Vehicle overhead, currency per km.
    pub overhead_per_km: f64,
    /// Profit margin in percent, applied to the whole base cost.
    pub profit_margin: f64,
}

impl CostConfig {
    /// Creates a config from all five knobs.
    pub fn new(
        fuel_price: f64,
        fuel_consumption: f64,
        hourly_rate: f64,
        overhead_per_km: f64,
        profit_margin: f64,
    ) -> Self {
        Self {
            fuel_price,
            fuel_consumption,
            hourly_rate,
            overhead_per_km,
            profit_margin,
        }
    }

    /// Sets the fuel price.
    pub fn with_fuel_price(mut self, value: f64) -> Self {
        self.fuel_price = value;
        self
    }

    /// Sets the fuel consumption.
    pub fn with_fuel_consumption(mut self, value: f64) -> Self {
        self.fuel_consumption = value;
        self
    }

    /// Sets the hourly labour rate.
    pub fn with_hourly_rate(mut self, value: f64) -> Self {
        self.hourly_rate = value;
        self
    }

    /// Sets the per-km overhead.
    pub fn with_overhead_per_km(mut self, value: f64) -> Self {
        self.overhead_per_km = value;
        self
    }

    /// Sets the profit margin percentage.
    pub fn with_profit_margin(mut self, value: f64) -> Self {
        self.profit_margin = value;
        self
    }

    /// Rejects NaN or infinite knobs.
    pub fn validate(&self) -> Result<(), RoutingError> {
        let fields = [
            ("fuelPrice", self.fuel_price),
            ("fuelConsumption", self.fuel_consumption),
            ("hourlyRate", self.hourly_rate),
            ("overheadPerKm", self.overhead_per_km),
            ("profitMargin", self.profit_margin),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(RoutingError::InvalidCostSetting { field, value });
            }
        }
        Ok(())
    }

    /// Parses and validates a config from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self, RoutingError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RoutingError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for CostConfig {
    /// Reference values: £1.55/L, 8 L/100 km, £15/h, £0.05/km, 20 % margin.
    fn default() -> Self {
        Self::new(1.55, 8.0, 15.0, 0.05, 20.0)
    }
}
