// src/simulation/engine.rs

use crate::model::queues::ShipmentQueue;
use crate::simulation::config::{InvalidParameters, Parameters};
use crate::strategy::implementations::ReorderPointPolicy;
use crate::strategy::traits::ReplenishmentPolicy;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// One day's snapshot, taken before that day's mutations are applied.
/// Serialize lets the reporting layer write it straight to CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub stock: f64,
    pub cash: f64,
}

/// The finished trajectory plus the inputs that produced it.
///
/// Never mutated after `run` returns; a parameter edit means a fresh run
/// whose result replaces this one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub params: Parameters,
    pub epoch: NaiveDate,
    pub history: Vec<DailyRecord>,
    /// Units across all orders placed during the run.
    pub units_ordered: u32,
    /// Units that actually arrived before the horizon; the remainder was
    /// still in flight when the simulation ended.
    pub units_arrived: u32,
}

impl Simulation {
    /// Date labels, one per simulated day.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.history.iter().map(|r| r.date).collect()
    }

    /// Stock series parallel to `dates`, for an external chart renderer.
    pub fn stock_series(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.stock).collect()
    }

    /// Cash series parallel to `dates`, for an external chart renderer.
    pub fn cash_series(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.cash).collect()
    }
}

/// Runs one simulation over validated parameters.
///
/// Pure in its inputs: dates derive from `epoch`, never the wall clock, so
/// identical arguments reproduce the trajectory bit for bit.
pub fn run(params: &Parameters, epoch: NaiveDate) -> Result<Simulation, InvalidParameters> {
    Ok(ResaleSimulation::new(params.clone(), epoch)?.run())
}

/// In-progress simulation state: the reseller's cash and stock, the
/// purchasing policy, and the pipeline of paid-for shipments.
pub struct ResaleSimulation {
    params: Parameters,
    epoch: NaiveDate,

    policy: Box<dyn ReplenishmentPolicy>,
    pipeline: ShipmentQueue,

    stock: f64,
    cash: f64,
    current_day: u32,

    history: Vec<DailyRecord>,
    units_ordered: u32,
    units_arrived: u32,
}

impl ResaleSimulation {
    pub fn new(params: Parameters, epoch: NaiveDate) -> Result<Self, InvalidParameters> {
        let policy = Box::new(ReorderPointPolicy::new(&params));
        Self::with_policy(params, epoch, policy)
    }

    /// Builds a simulation around a caller-supplied purchasing policy.
    pub fn with_policy(
        params: Parameters,
        epoch: NaiveDate,
        policy: Box<dyn ReplenishmentPolicy>,
    ) -> Result<Self, InvalidParameters> {
        params.validate()?;

        let stock = f64::from(params.initial_stock);
        let cash = params.cash;

        Ok(Self {
            params,
            epoch,
            policy,
            pipeline: ShipmentQueue::new(),
            stock,
            cash,
            current_day: 0,
            history: Vec::new(),
            units_ordered: 0,
            units_arrived: 0,
        })
    }

    pub fn run(mut self) -> Simulation {
        self.history.reserve(self.params.duration_days as usize);
        while self.current_day < self.params.duration_days {
            self.step();
        }
        // Shipments still in the pipeline are dropped with it: the horizon
        // truncates in-flight orders on purpose.
        if !self.pipeline.is_empty() {
            debug!(
                shipments = self.pipeline.len(),
                units = self.pipeline.pending_quantity(),
                "in-flight shipments truncated at the horizon"
            );
        }
        Simulation {
            params: self.params,
            epoch: self.epoch,
            history: self.history,
            units_ordered: self.units_ordered,
            units_arrived: self.units_arrived,
        }
    }

    /// One day of the ledger. The order of the phases is the contract:
    /// snapshot, storage, purchases, arrivals, sales. With a zero lead time
    /// an order placed in the purchase phase lands in the same day's arrival
    /// phase, before any selling happens.
    fn step(&mut self) {
        let day = self.current_day;

        // 1. Snapshot, before anything moves.
        self.history.push(DailyRecord {
            date: self.epoch + Duration::days(i64::from(day)),
            stock: self.stock,
            cash: self.cash,
        });

        // 2. Storage cost on everything held overnight.
        if self.params.unit_monthly_storage > 0.0 {
            self.cash -= self.stock * (self.params.unit_monthly_storage / 30.0);
        }

        // 3. Purchases. The policy may place several orders today.
        let pending_before = self.pipeline.pending_quantity();
        self.policy
            .place_orders(day, &mut self.cash, self.stock, &mut self.pipeline);
        self.units_ordered += self.pipeline.pending_quantity() - pending_before;

        // 4. Arrivals due today.
        let arrived = self.pipeline.release_due(day);
        self.stock += f64::from(arrived);
        self.units_arrived += arrived;

        // 5. Sales, capped at available stock. A sold unit recovers its
        // cost in full plus the margin; that cost was already paid at order
        // time. The double recovery is the model's accounting convention.
        let sell_rate = self.params.sell_rate();
        let unit_gain = self.params.unit_cost + self.params.unit_benefit;
        if self.stock > sell_rate {
            self.stock -= sell_rate;
            self.cash += sell_rate * unit_gain;
        } else {
            self.cash += self.stock * unit_gain;
            self.stock = 0.0;
        }

        self.current_day += 1;
    }
}
