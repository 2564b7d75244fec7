use bon::bon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{Quantity, cost::Cost, time::Seconds},
};

/// Reporting identity of a solution, never used in comparisons.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    Serialize,
    derive_more::Constructor,
    derive_more::Display,
)]
#[display("{name} #{iteration}")]
pub struct Label {
    pub name: String,
    pub iteration: u32,
}

/// Noise estimates of the two stochastic measurements behind a solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, derive_more::Constructor)]
pub struct Deviation {
    /// Deviation of the mean process cycle time.
    pub cycle_time: Seconds,

    /// Deviation of the simulation execution duration.
    pub duration: Seconds,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, derive_more::Constructor)]
pub struct SimulationWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SimulationWindow {
    /// Signed `end − start`.
    ///
    /// Optimos web client computes `start − end` instead. Only absolute differences of two
    /// durations are ever compared, so the sign does not affect any verdict.
    pub fn duration(&self) -> Seconds {
        Seconds::from(self.end - self.start)
    }
}

/// One evaluated configuration of a process-optimization run.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    label: Label,
    cycle_time: Seconds,
    cost: Cost,
    deviation: Option<Deviation>,
    simulation: Option<SimulationWindow>,
}

#[bon]
impl Solution {
    #[builder]
    pub fn new(
        #[builder(default)] label: Label,
        #[builder(into)] cycle_time: Seconds,
        #[builder(into)] cost: Cost,
        deviation: Option<Deviation>,
        simulation: Option<SimulationWindow>,
    ) -> Result<Self> {
        check_finite("cycle time", cycle_time)?;
        check_finite("cost", cost)?;
        if let Some(deviation) = deviation {
            check_deviation("cycle time deviation", deviation.cycle_time)?;
            check_deviation("duration deviation", deviation.duration)?;
        }
        Ok(Self { label, cycle_time, cost, deviation, simulation })
    }
}

impl Solution {
    pub const fn label(&self) -> &Label {
        &self.label
    }

    pub const fn cycle_time(&self) -> Seconds {
        self.cycle_time
    }

    pub const fn cost(&self) -> Cost {
        self.cost
    }

    #[must_use]
    pub const fn deviation(&self) -> Option<&Deviation> {
        self.deviation.as_ref()
    }

    #[must_use]
    pub fn duration(&self) -> Option<Seconds> {
        self.simulation.as_ref().map(SimulationWindow::duration)
    }

    /// Whether the solution can take part in the tolerant comparison.
    #[must_use]
    pub const fn has_noise_info(&self) -> bool {
        self.deviation.is_some() && self.simulation.is_some()
    }
}

fn check_finite<const TIME: isize, const COST: isize>(
    field: &'static str,
    value: Quantity<TIME, COST>,
) -> Result {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidInput { field, value: value.0.to_string() })
    }
}

/// Negative deviation would make every difference significant.
fn check_deviation(field: &'static str, value: Seconds) -> Result {
    check_finite(field, value)?;
    if value < Seconds::ZERO {
        return Err(Error::InvalidInput { field, value: value.0.to_string() });
    }
    Ok(())
}

#[cfg(test)]
impl Solution {
    /// Noise-free solution.
    pub(crate) fn point(cycle_time: f64, cost: f64) -> Self {
        Self::builder().cycle_time(cycle_time).cost(cost).build().unwrap()
    }

    /// Solution with a deviation and a simulation window of the given length.
    pub(crate) fn noisy(
        cycle_time: f64,
        cost: f64,
        deviation: f64,
        simulation_seconds: i64,
    ) -> Self {
        let start = DateTime::<Utc>::UNIX_EPOCH;
        Self::builder()
            .cycle_time(cycle_time)
            .cost(cost)
            .deviation(Deviation::new(deviation.into(), deviation.into()))
            .simulation(SimulationWindow::new(
                start,
                start + chrono::TimeDelta::seconds(simulation_seconds),
            ))
            .build()
            .unwrap()
    }
}
