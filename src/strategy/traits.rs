// src/strategy/traits.rs

use crate::model::queues::ShipmentQueue;
use std::fmt::Debug;

/// Defines the daily purchasing decision for the reseller.
///
/// We require `Debug` so the engine state can be printed if needed.
/// We require `Send` + `Sync` so simulations can run on worker threads.
pub trait ReplenishmentPolicy: Debug + Send + Sync {
    /// Places this day's orders, if any.
    ///
    /// The policy debits `cash` for each order and enqueues the matching
    /// shipment into `pipeline`. Returns the number of orders placed; the
    /// same day may see several when cash allows and coverage is short.
    ///
    /// # Arguments
    /// * `day` - Current simulation day (0-based).
    /// * `cash` - Cash balance, mutated by each purchase.
    /// * `stock` - Units on hand before today's arrivals.
    /// * `pipeline` - Shipments already ordered but not yet arrived.
    fn place_orders(
        &mut self,
        day: u32,
        cash: &mut f64,
        stock: f64,
        pipeline: &mut ShipmentQueue,
    ) -> u32;
}
