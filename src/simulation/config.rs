// src/simulation/config.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling on the simulation horizon (about a century). A run is
/// O(duration) in time and memory, so an absurd duration is rejected rather
/// than attempted.
pub const MAX_DURATION_DAYS: u32 = 36_500;

/// Inputs for one simulation run. Every field has a default, so a partial
/// config file or CLI override set is enough to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Starting cash balance.
    pub cash: f64,
    /// Units on hand on day zero.
    pub initial_stock: u32,
    /// Units per shipment order.
    pub batch_size: u32,
    /// Purchase cost per unit.
    pub unit_cost: f64,
    /// Margin per unit sold.
    pub unit_benefit: f64,
    /// Holding cost per unit per 30 days; 0 disables storage charges.
    pub unit_monthly_storage: f64,
    /// Average demand in units per week.
    pub weekly_sales_rate: f64,
    /// Days between placing an order and its arrival.
    pub shipment_delay_days: u32,
    /// Simulation horizon in days.
    pub duration_days: u32,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            cash: 1000.0,
            initial_stock: 0,
            batch_size: 20,
            unit_cost: 25.0,
            unit_benefit: 10.0,
            unit_monthly_storage: 0.0,
            weekly_sales_rate: 7.0,
            shipment_delay_days: 14,
            duration_days: 360,
        }
    }
}

impl Parameters {
    /// Demand per day.
    pub fn sell_rate(&self) -> f64 {
        self.weekly_sales_rate / 7.0
    }

    /// Cash outflow for one order.
    pub fn batch_cost(&self) -> f64 {
        f64::from(self.batch_size) * self.unit_cost
    }

    /// Rejects parameter sets the engine cannot run on. Nothing is clamped;
    /// a bad value is an error, not a suggestion.
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        if self.duration_days == 0 {
            return Err(InvalidParameters::ZeroDuration);
        }
        if self.duration_days > MAX_DURATION_DAYS {
            return Err(InvalidParameters::DurationTooLong(self.duration_days));
        }
        if self.batch_size == 0 {
            return Err(InvalidParameters::ZeroBatchSize);
        }
        if !self.cash.is_finite() || !self.unit_benefit.is_finite() {
            return Err(InvalidParameters::NonFinite);
        }
        if !self.unit_cost.is_finite() || self.batch_cost() <= 0.0 {
            // A free batch would let the purchase loop order forever.
            return Err(InvalidParameters::NonPositiveBatchCost(self.unit_cost));
        }
        if !self.weekly_sales_rate.is_finite() || self.weekly_sales_rate < 0.0 {
            return Err(InvalidParameters::NegativeSalesRate(self.weekly_sales_rate));
        }
        if !self.unit_monthly_storage.is_finite() || self.unit_monthly_storage < 0.0 {
            return Err(InvalidParameters::NegativeStorageRate(
                self.unit_monthly_storage,
            ));
        }
        Ok(())
    }
}

/// Parameter sets rejected before any simulation starts.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidParameters {
    /// Horizon must cover at least one day.
    #[error("simulation duration must be at least one day")]
    ZeroDuration,
    /// Horizon beyond the supported ceiling.
    #[error("simulation duration {0} exceeds the supported maximum of {MAX_DURATION_DAYS} days")]
    DurationTooLong(u32),
    /// An order must contain at least one unit.
    #[error("batch size must be at least one unit")]
    ZeroBatchSize,
    /// A zero-cost batch would never exhaust cash.
    #[error("unit cost {0} makes the batch cost non-positive")]
    NonPositiveBatchCost(f64),
    /// Demand cannot be negative.
    #[error("weekly sales rate {0} is negative")]
    NegativeSalesRate(f64),
    /// Holding cost cannot be negative.
    #[error("monthly storage cost {0} is negative")]
    NegativeStorageRate(f64),
    /// Cash and margin must be finite numbers.
    #[error("non-finite numeric parameter")]
    NonFinite,
}
