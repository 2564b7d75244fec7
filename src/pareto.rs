mod dominance;
mod front;
mod run;
mod solution;

pub use self::{
    dominance::{DominanceMode, DominanceRule, Rule, Strict, Tolerant},
    front::{Front, FrontStatus},
    run::{Run, RunSummary},
    solution::{Deviation, Label, SimulationWindow, Solution},
};
