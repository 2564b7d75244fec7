use bon::Builder;
use itertools::Itertools;

use crate::{
    pareto::{
        dominance::DominanceRule,
        front::{Front, FrontStatus},
        solution::Solution,
    },
    prelude::*,
};

/// Solutions of a single optimization run, as reported by the optimizer.
#[derive(Builder, Clone, Debug, Default)]
pub struct Run {
    /// Baseline the optimization started from.
    pub initial: Option<Solution>,

    /// Latest solution of a run that is still in progress.
    pub current: Option<Solution>,

    /// All evaluated solutions, in the order they were produced.
    ///
    /// Absent until the optimizer finishes. Present but empty means it finished with nothing.
    pub finals: Option<Vec<Solution>>,
}

#[must_use]
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Final Pareto front.
    pub front: Front,

    /// Final solutions left outside the front, in their original order.
    pub others: Vec<Solution>,

    /// Where the initial solution stands against the front.
    pub initial_status: Option<FrontStatus>,
}

impl Run {
    /// Every solution mentioned by the run.
    pub fn solutions(&self) -> impl Iterator<Item = &Solution> {
        self.initial.iter().chain(&self.current).chain(self.finals())
    }

    /// Final solutions, empty while the run is in progress.
    #[must_use]
    pub fn finals(&self) -> &[Solution] {
        self.finals.as_deref().unwrap_or_default()
    }

    /// Fold the final solutions into the front and classify the initial solution against it.
    ///
    /// While the run has not reported its final solutions yet, the current solution alone forms
    /// the front. An empty list of final solutions yields an empty front, and the initial solution
    /// vacuously dominates it.
    #[instrument(skip_all, fields(n_finals = self.finals().len()))]
    pub fn summarize<R: DominanceRule + ?Sized>(&self, rule: &R) -> Result<RunSummary> {
        let front = match (&self.finals, &self.current) {
            (None, Some(current)) => {
                debug!(label = %current.label(), "in progress, using the current solution");
                Front::seeded(current.clone())
            }
            _ => Front::from_solutions(self.finals().iter().cloned(), rule)?,
        };

        let others = self
            .finals()
            .iter()
            .filter(|solution| !front.contains(solution))
            .cloned()
            .collect_vec();

        let initial_status =
            self.initial.as_ref().map(|initial| front.classify(initial, rule)).transpose()?;

        info!(
            n_optimal = front.len(),
            n_others = others.len(),
            initial_status = initial_status.map(tracing::field::display),
            "summarized",
        );
        Ok(RunSummary { front, others, initial_status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Label, pareto::dominance::Strict};

    fn labelled(iteration: u32, cycle_time: f64, cost: f64) -> Solution {
        Solution::builder()
            .label(Label::new("solution".to_string(), iteration))
            .cycle_time(cycle_time)
            .cost(cost)
            .build()
            .unwrap()
    }

    #[test]
    fn test_summarize_partitions_finals() {
        let run = Run::builder()
            .initial(labelled(0, 100.0, 100.0))
            .finals(vec![
                labelled(1, 80.0, 90.0),
                labelled(2, 60.0, 95.0),
                labelled(3, 50.0, 50.0),
                labelled(4, 40.0, 120.0),
                labelled(5, 70.0, 70.0),
            ])
            .build();
        let summary = run.summarize(&Strict).unwrap();

        assert_eq!(summary.front.as_slice(), [labelled(3, 50.0, 50.0), labelled(4, 40.0, 120.0)]);
        assert_eq!(
            summary.others,
            [labelled(1, 80.0, 90.0), labelled(2, 60.0, 95.0), labelled(5, 70.0, 70.0)],
        );
        assert_eq!(summary.initial_status, Some(FrontStatus::DominatedByFront));
    }

    #[test]
    fn test_summarize_in_progress() {
        let run = Run::builder()
            .initial(labelled(0, 100.0, 100.0))
            .current(labelled(7, 120.0, 80.0))
            .build();
        let summary = run.summarize(&Strict).unwrap();

        assert_eq!(summary.front.as_slice(), [labelled(7, 120.0, 80.0)]);
        assert!(summary.others.is_empty());
        assert_eq!(summary.initial_status, Some(FrontStatus::InFront));
    }

    #[test]
    fn test_summarize_prefers_finals_over_current() {
        let run = Run::builder()
            .current(labelled(7, 10.0, 10.0))
            .finals(vec![labelled(1, 50.0, 50.0)])
            .build();
        let summary = run.summarize(&Strict).unwrap();
        assert_eq!(summary.front.as_slice(), [labelled(1, 50.0, 50.0)]);
        assert_eq!(summary.initial_status, None);
    }

    #[test]
    fn test_summarize_finished_without_finals() {
        let run = Run::builder()
            .initial(labelled(0, 100.0, 100.0))
            .current(labelled(7, 120.0, 80.0))
            .finals(Vec::new())
            .build();
        let summary = run.summarize(&Strict).unwrap();
        assert!(summary.front.is_empty());
        assert_eq!(summary.initial_status, Some(FrontStatus::DominatesFront));
    }

    #[test]
    fn test_summarize_empty_run() {
        let run = Run::builder().initial(labelled(0, 100.0, 100.0)).build();
        let summary = run.summarize(&Strict).unwrap();
        assert!(summary.front.is_empty());
        assert_eq!(summary.initial_status, Some(FrontStatus::DominatesFront));
    }

    #[test]
    fn test_solutions() {
        let run = Run::builder()
            .initial(labelled(0, 1.0, 1.0))
            .finals(vec![labelled(1, 2.0, 2.0), labelled(2, 3.0, 3.0)])
            .build();
        let iterations = run.solutions().map(|it| it.label().iteration).collect_vec();
        assert_eq!(iterations, [0, 1, 2]);
    }
}
