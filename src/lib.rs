//! Pareto front maintenance for Optimos process-optimization results.
//!
//! Every solution of an optimization run is characterised by its mean cycle time and its total
//! resource cost, both minimised. The [`Front`] keeps the non-dominated ones under a
//! [`DominanceRule`]: either [`Strict`] Pareto dominance, or the [`Tolerant`] refinement
//! which ignores differences smaller than the simulation noise.
#![allow(clippy::doc_markdown)]

mod error;
pub mod pareto;
mod prelude;
pub mod quantity;
pub mod report;

pub use crate::{
    error::{Error, Result},
    pareto::{
        Deviation,
        DominanceMode,
        DominanceRule,
        Front,
        FrontStatus,
        Label,
        Rule,
        Run,
        RunSummary,
        SimulationWindow,
        Solution,
        Strict,
        Tolerant,
    },
    quantity::{cost::Cost, time::Seconds},
    report::Report,
};
