use std::slice::Iter;

use serde::Serialize;

use crate::{
    pareto::{dominance::DominanceRule, solution::Solution},
    prelude::*,
};

/// Where a solution stands relative to a front.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrontStatus {
    /// The solution dominates every member: inserting it would replace the whole front.
    #[display("dominates the front")]
    DominatesFront,

    /// At least one member dominates the solution: inserting it would be rejected.
    #[display("dominated by the front")]
    DominatedByFront,

    /// The solution would join the front next to the members it does not dominate.
    #[display("in the front")]
    InFront,
}

impl FrontStatus {
    /// Whether the solution would end up in the front after an insertion.
    #[must_use]
    pub const fn is_admitted(self) -> bool {
        !matches!(self, Self::DominatedByFront)
    }
}

/// Ordered set of mutually non-dominated solutions.
///
/// The front is only ever changed by [`Front::insert`], which consumes it and produces the next
/// one. Members keep their insertion order.
#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Front(Vec<Solution>);

impl Front {
    /// Front pre-seeded with a baseline solution.
    pub fn seeded(baseline: Solution) -> Self {
        Self(vec![baseline])
    }

    /// Feed the solutions one by one into an empty front.
    pub fn from_solutions<R: DominanceRule + ?Sized>(
        solutions: impl IntoIterator<Item = Solution>,
        rule: &R,
    ) -> Result<Self> {
        solutions.into_iter().try_fold(Self::default(), |front, solution| front.insert(solution, rule))
    }

    /// Fold the solution into the front.
    ///
    /// Members dominated by the newcomer are dropped. The newcomer is appended unless any
    /// member dominates it. The entire front is scanned either way.
    ///
    /// Exact duplicates never dominate each other, so a solution equal to a member
    /// is admitted alongside it.
    pub fn insert<R: DominanceRule + ?Sized>(self, solution: Solution, rule: &R) -> Result<Self> {
        let mut kept = Vec::with_capacity(self.0.len() + 1);
        let mut admit = true;

        for member in self.0 {
            if rule.dominates(&solution, &member)? {
                trace!(dropped = %member.label(), by = %solution.label(), "purged");
                continue;
            }
            if rule.dominates(&member, &solution)? {
                admit = false;
            }
            kept.push(member);
        }

        if admit {
            debug!(label = %solution.label(), n_kept = kept.len(), "admitted");
            kept.push(solution);
        } else {
            debug!(label = %solution.label(), "rejected");
        }
        Ok(Self(kept))
    }

    /// Same as [`Front::insert`], but leaves this front intact.
    pub fn try_insert<R: DominanceRule + ?Sized>(
        &self,
        solution: Solution,
        rule: &R,
    ) -> Result<Self> {
        self.clone().insert(solution, rule)
    }

    /// Classify the solution against the front without changing it.
    ///
    /// Domination by any member takes precedence over dominating the others.
    /// An empty front is vacuously dominated: the result is [`FrontStatus::DominatesFront`].
    pub fn classify<R: DominanceRule + ?Sized>(
        &self,
        solution: &Solution,
        rule: &R,
    ) -> Result<FrontStatus> {
        let mut dominates_all = true;
        for member in &self.0 {
            if rule.dominates(member, solution)? {
                return Ok(FrontStatus::DominatedByFront);
            }
            if dominates_all && !rule.dominates(solution, member)? {
                dominates_all = false;
            }
        }
        Ok(if dominates_all { FrontStatus::DominatesFront } else { FrontStatus::InFront })
    }

    #[must_use]
    pub fn contains(&self, solution: &Solution) -> bool {
        self.0.contains(solution)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Solution> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Solution] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Front {
    type Item = &'a Solution;
    type IntoIter = Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
