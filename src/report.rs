//! Subset of the Optimos JSON report needed to rebuild the Pareto front.

use std::{io::Read, str::FromStr};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

use crate::{
    pareto::{Deviation, Label, Run, SimulationWindow, Solution},
    prelude::*,
};

#[derive(Debug, Default, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub initial_solution: Option<ReportedSolution>,

    /// Present while the optimizer is still running.
    #[serde(default)]
    pub current_solution: Option<ReportedSolution>,

    #[serde(default)]
    pub final_solutions: Option<Vec<ReportedSolution>>,
}

impl Report {
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl FromStr for Report {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl TryFrom<Report> for Run {
    type Error = Error;

    fn try_from(report: Report) -> Result<Self> {
        Ok(Self {
            initial: report.initial_solution.map(Solution::try_from).transpose()?,
            current: report.current_solution.map(Solution::try_from).transpose()?,
            finals: report
                .final_solutions
                .map(|finals| finals.into_iter().map(Solution::try_from).collect::<Result<_>>())
                .transpose()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportedSolution {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub iteration: u32,

    pub solution_info: SolutionInfo,
}

#[derive(Debug, Deserialize)]
pub struct SolutionInfo {
    pub mean_process_cycle_time: Option<f64>,
    pub total_pool_cost: Option<f64>,

    #[serde(default)]
    pub deviation_info: Option<DeviationInfo>,

    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub simulation_start_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub simulation_end_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct DeviationInfo {
    pub cycle_time_deviation: f64,
    pub execution_duration_deviation: f64,
}

impl TryFrom<ReportedSolution> for Solution {
    type Error = Error;

    fn try_from(reported: ReportedSolution) -> Result<Self> {
        let info = reported.solution_info;
        let simulation = info
            .simulation_start_date
            .zip(info.simulation_end_date)
            .map(|(start, end)| SimulationWindow::new(start, end));
        let deviation = info.deviation_info.map(|deviation| {
            Deviation::new(
                deviation.cycle_time_deviation.into(),
                deviation.execution_duration_deviation.into(),
            )
        });
        Self::builder()
            .label(Label::new(reported.name, reported.iteration))
            .cycle_time(
                info.mean_process_cycle_time.ok_or_else(|| Error::missing("mean process cycle time"))?,
            )
            .cost(info.total_pool_cost.ok_or_else(|| Error::missing("total pool cost"))?)
            .maybe_deviation(deviation)
            .maybe_simulation(simulation)
            .build()
    }
}

/// Accept both RFC 3339 and naive ISO 8601 timestamps, the latter are taken as UTC.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|timestamp| parse_timestamp(&timestamp).map_err(de::Error::custom))
        .transpose()
}

fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|timestamp| timestamp.to_utc())
        .or_else(|_| NaiveDateTime::from_str(timestamp).map(|timestamp| timestamp.and_utc()))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f")
                .map(|timestamp| timestamp.and_utc())
        })
}
