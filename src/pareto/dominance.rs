use serde::{Deserialize, Serialize};

use crate::{
    pareto::solution::{Deviation, Solution},
    prelude::*,
    quantity::time::Seconds,
};

/// Decides whether one solution dominates another.
///
/// Implementations must be irreflexive and asymmetric, which keeps every [`crate::Front`]
/// free of mutually dominating members.
pub trait DominanceRule {
    /// Whether `challenger` dominates `incumbent`.
    fn dominates(&self, challenger: &Solution, incumbent: &Solution) -> Result<bool>;
}

/// Classic two-objective Pareto dominance: strictly lower cycle time **and** strictly lower cost.
#[derive(Copy, Clone, Debug, Default)]
pub struct Strict;

impl DominanceRule for Strict {
    fn dominates(&self, challenger: &Solution, incumbent: &Solution) -> Result<bool> {
        Ok(challenger.cycle_time() < incumbent.cycle_time() && challenger.cost() < incumbent.cost())
    }
}

/// Strict dominance which also requires both measured differences to exceed the noise.
///
/// The cycle time difference must be greater than the smaller of the two cycle time deviations,
/// and the simulation duration difference must be greater than the smaller of the two duration
/// deviations.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tolerant;

impl DominanceRule for Tolerant {
    fn dominates(&self, challenger: &Solution, incumbent: &Solution) -> Result<bool> {
        let challenger_noise = Noise::try_from(challenger)?;
        let incumbent_noise = Noise::try_from(incumbent)?;

        if !Strict.dominates(challenger, incumbent)? {
            return Ok(false);
        }

        let cycle_time_change = (incumbent.cycle_time() - challenger.cycle_time()).abs();
        let min_cycle_time_deviation =
            challenger_noise.deviation.cycle_time.min(incumbent_noise.deviation.cycle_time);

        let duration_change = (incumbent_noise.duration - challenger_noise.duration).abs();
        let min_duration_deviation =
            challenger_noise.deviation.duration.min(incumbent_noise.deviation.duration);

        Ok(cycle_time_change > min_cycle_time_deviation
            && duration_change > min_duration_deviation)
    }
}

/// Noise information of a single solution.
struct Noise<'a> {
    deviation: &'a Deviation,
    duration: Seconds,
}

impl<'a> TryFrom<&'a Solution> for Noise<'a> {
    type Error = Error;

    fn try_from(solution: &'a Solution) -> Result<Self> {
        match (solution.deviation(), solution.duration()) {
            (Some(deviation), Some(duration)) => Ok(Self { deviation, duration }),
            _ => Err(Error::UnsupportedMode { label: solution.label().clone() }),
        }
    }
}

/// Resolved rule, selected once and passed around by reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Rule {
    #[display("strict")]
    Strict,

    #[display("tolerant")]
    Tolerant,
}

impl DominanceRule for Rule {
    fn dominates(&self, challenger: &Solution, incumbent: &Solution) -> Result<bool> {
        match self {
            Self::Strict => Strict.dominates(challenger, incumbent),
            Self::Tolerant => Tolerant.dominates(challenger, incumbent),
        }
    }
}

/// User-facing rule selector.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DominanceMode {
    /// Plain Pareto dominance.
    #[default]
    Strict,

    /// Noise-aware dominance, fails on solutions without deviation information.
    Tolerant,

    /// Tolerant when every solution carries the deviation and the simulation window,
    /// strict otherwise.
    Auto,
}

impl DominanceMode {
    /// Pick the rule for the given batch of solutions.
    pub fn resolve<'a>(self, solutions: impl IntoIterator<Item = &'a Solution>) -> Rule {
        match self {
            Self::Strict => Rule::Strict,
            Self::Tolerant => Rule::Tolerant,
            Self::Auto => {
                if let Some(solution) = solutions.into_iter().find(|it| !it.has_noise_info()) {
                    warn!(label = %solution.label(), "no noise information, falling back to strict");
                    Rule::Strict
                } else {
                    Rule::Tolerant
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_dominates() {
        assert!(Strict.dominates(&Solution::point(9.0, 9.0), &Solution::point(10.0, 10.0)).unwrap());
    }

    #[test]
    fn test_strict_is_irreflexive() {
        let solution = Solution::point(10.0, 10.0);
        assert!(!Strict.dominates(&solution, &solution).unwrap());
    }

    #[test]
    fn test_strict_equal_objective_is_not_domination() {
        let incumbent = Solution::point(10.0, 10.0);
        assert!(!Strict.dominates(&Solution::point(10.0, 5.0), &incumbent).unwrap());
        assert!(!Strict.dominates(&Solution::point(5.0, 10.0), &incumbent).unwrap());
    }

    #[test]
    fn test_strict_is_asymmetric() {
        let better = Solution::point(1.0, 1.0);
        let worse = Solution::point(2.0, 2.0);
        assert!(Strict.dominates(&better, &worse).unwrap());
        assert!(!Strict.dominates(&worse, &better).unwrap());
    }

    #[test]
    fn test_tolerant_absorbs_differences_within_noise() {
        let challenger = Solution::noisy(9.0, 9.0, 5.0, 1000);
        let incumbent = Solution::noisy(10.0, 10.0, 5.0, 1001);
        assert!(Strict.dominates(&challenger, &incumbent).unwrap());
        assert!(!Tolerant.dominates(&challenger, &incumbent).unwrap());
    }

    #[test]
    fn test_tolerant_dominates_beyond_noise() {
        let challenger = Solution::noisy(9.0, 9.0, 0.5, 1000);
        let incumbent = Solution::noisy(10.0, 10.0, 0.5, 1010);
        assert!(Tolerant.dominates(&challenger, &incumbent).unwrap());
    }

    #[test]
    fn test_tolerant_requires_significant_duration_change() {
        // Cycle time differs well beyond the noise, but the durations are within it:
        let challenger = Solution::noisy(5.0, 9.0, 0.5, 1000);
        let incumbent = Solution::noisy(10.0, 10.0, 0.5, 1000);
        assert!(!Tolerant.dominates(&challenger, &incumbent).unwrap());
    }

    #[test]
    fn test_tolerant_uses_smaller_deviation() {
        let challenger = Solution::noisy(9.0, 9.0, 0.5, 1000);
        let incumbent = Solution::noisy(10.0, 10.0, 50.0, 1010);
        assert!(Tolerant.dominates(&challenger, &incumbent).unwrap());
    }

    #[test]
    fn test_tolerant_verdict_ignores_duration_sign() {
        let challenger = Solution::noisy(9.0, 9.0, 0.5, -1000);
        let incumbent = Solution::noisy(10.0, 10.0, 0.5, -1010);
        assert!(Tolerant.dominates(&challenger, &incumbent).unwrap());

        let challenger = Solution::noisy(9.0, 9.0, 5.0, -1000);
        let incumbent = Solution::noisy(10.0, 10.0, 5.0, -1001);
        assert!(!Tolerant.dominates(&challenger, &incumbent).unwrap());
    }

    #[test]
    fn test_tolerant_without_noise_is_unsupported() {
        let challenger = Solution::noisy(9.0, 9.0, 0.5, 1000);
        let incumbent = Solution::point(10.0, 10.0);
        assert!(matches!(
            Tolerant.dominates(&challenger, &incumbent),
            Err(Error::UnsupportedMode { .. }),
        ));
        assert!(matches!(
            Tolerant.dominates(&incumbent, &challenger),
            Err(Error::UnsupportedMode { .. }),
        ));
    }

    #[test]
    fn test_auto_resolves_to_tolerant() {
        let solutions = [Solution::noisy(1.0, 1.0, 0.0, 1), Solution::noisy(2.0, 2.0, 0.0, 2)];
        assert_eq!(DominanceMode::Auto.resolve(&solutions), Rule::Tolerant);
    }

    #[test]
    fn test_auto_falls_back_to_strict() {
        let solutions = [Solution::noisy(1.0, 1.0, 0.0, 1), Solution::point(2.0, 2.0)];
        assert_eq!(DominanceMode::Auto.resolve(&solutions), Rule::Strict);
    }

    #[test]
    fn test_explicit_modes_ignore_solutions() {
        let solutions = [Solution::point(2.0, 2.0)];
        assert_eq!(DominanceMode::Tolerant.resolve(&solutions), Rule::Tolerant);
        assert_eq!(DominanceMode::Strict.resolve(&solutions), Rule::Strict);
    }
}
