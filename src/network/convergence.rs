//! Convergence engine: classifies the trajectory of one initial state.
//!
//! One update step is `x' = sgn(W · x)`. Starting at iteration 1 the engine
//! loops with `(iteration, current, history)`:
//!
//! 1. `iteration == max_iterations` → [`Outcome::MaxIterationsReached`]; no
//!    candidate is computed for that iteration.
//! 2. `candidate = sgn(W · current)`.
//! 3. `candidate == current` → [`Outcome::FixedPoint`].
//! 4. Otherwise `candidate` is appended to the history; the earliest repeated
//!    pair `(i, j)` in the history yields [`Outcome::Cycle`] with
//!    `history[i..=j]`.
//! 5. Otherwise continue with `current = candidate`.
//!
//! The initial state is never part of the history: only produced states are
//! compared when looking for a cycle.

use serde::{Deserialize, Serialize};

use crate::config::MAXIMUM_ITERATIONS;
use crate::error::{HopfieldError, Result};
use crate::linalg::{matrix_vector_product, WeightMatrix};
use crate::network::activation::apply_activation;
use crate::network::state::BipolarVector;

/// Engine settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Iteration number at which a run is abandoned. Must be at least 1.
    pub max_iterations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAXIMUM_ITERATIONS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(HopfieldError::config("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// One computed update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationStep {
    /// 1-based iteration number.
    pub iteration: usize,
    /// State produced by this iteration.
    pub state: BipolarVector,
}

/// Terminal classification of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// `state` maps onto itself; found at iteration `iterations`.
    FixedPoint {
        state: BipolarVector,
        iterations: usize,
    },

    /// Produced states from the first recurrence to its repeat, inclusive.
    /// The first and last entries are equal.
    Cycle { states: Vec<BipolarVector> },

    /// Iteration budget exhausted before any classification.
    MaxIterationsReached,
}

impl Outcome {
    pub fn is_cycle(&self) -> bool {
        matches!(self, Outcome::Cycle { .. })
    }

    /// Number of transitions in the cycle, `states.len() - 1`.
    pub fn cycle_degree(&self) -> Option<usize> {
        match self {
            Outcome::Cycle { states } => Some(states.len().saturating_sub(1)),
            _ => None,
        }
    }

    pub fn fixed_point(&self) -> Option<&BipolarVector> {
        match self {
            Outcome::FixedPoint { state, .. } => Some(state),
            _ => None,
        }
    }
}

/// Full record of one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Convergence {
    /// Initial state of the run.
    pub original: BipolarVector,
    /// Every computed iteration, in order.
    pub steps: Vec<IterationStep>,
    pub outcome: Outcome,
}

/// Runs the synchronous update loop against one weight matrix.
pub struct ConvergenceEngine {
    weights: WeightMatrix,
    config: EngineConfig,
}

impl ConvergenceEngine {
    pub fn new(weights: WeightMatrix, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { weights, config })
    }

    /// Engine with [`EngineConfig::default`].
    pub fn with_defaults(weights: WeightMatrix) -> Self {
        Self {
            weights,
            config: EngineConfig::default(),
        }
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// One synchronous update: `sgn(W · state)`.
    pub fn step(&self, state: &BipolarVector) -> Result<BipolarVector> {
        let field = matrix_vector_product(self.weights.view(), state.to_array().view())?;
        Ok(apply_activation(&field))
    }

    /// Classify the trajectory starting at `initial`.
    pub fn run(&self, initial: &BipolarVector) -> Result<Convergence> {
        let mut iteration = 1;
        let mut current = initial.clone();
        let mut history: Vec<BipolarVector> = Vec::new();
        let mut steps = Vec::new();

        let outcome = loop {
            if iteration == self.config.max_iterations {
                break Outcome::MaxIterationsReached;
            }

            let candidate = self.step(&current)?;
            tracing::trace!(iteration, state = %candidate, "update");
            steps.push(IterationStep {
                iteration,
                state: candidate.clone(),
            });

            if candidate == current {
                break Outcome::FixedPoint {
                    state: candidate,
                    iterations: iteration,
                };
            }

            history.push(candidate.clone());
            if let Some((i, j)) = first_repeat(&history) {
                break Outcome::Cycle {
                    states: history[i..=j].to_vec(),
                };
            }

            current = candidate;
            iteration += 1;
        };

        tracing::debug!(original = %initial, ?outcome, "run classified");

        Ok(Convergence {
            original: initial.clone(),
            steps,
            outcome,
        })
    }
}

/// Earliest `(i, j)` with `i < j` and `history[i] == history[j]`, ordered by
/// `i` first, then `j`.
fn first_repeat(history: &[BipolarVector]) -> Option<(usize, usize)> {
    for i in 0..history.len() {
        for j in (i + 1)..history.len() {
            if history[i] == history[j] {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use ndarray::array;

    fn v(c: &[i8]) -> BipolarVector {
        BipolarVector::new(c.iter().copied()).unwrap()
    }

    fn engine(rows: &[Vec<f64>]) -> ConvergenceEngine {
        ConvergenceEngine::with_defaults(WeightMatrix::from_rows(rows).unwrap())
    }

    #[test]
    fn test_reference_matrix_first_step() {
        let engine = ConvergenceEngine::with_defaults(presets::case_one());
        let start = v(&[1, 1, 1]);
        // W·(1,1,1) = (0, -4/3, 0)
        assert_eq!(engine.step(&start).unwrap(), v(&[-1, -1, -1]));
    }

    #[test]
    fn test_reference_matrix_reaches_fixed_point() {
        let engine = ConvergenceEngine::with_defaults(presets::case_one());
        let run = engine.run(&v(&[1, 1, 1])).unwrap();

        assert_ne!(run.steps[0].state, run.original);
        assert_eq!(
            run.outcome,
            Outcome::FixedPoint {
                state: v(&[-1, 1, -1]),
                iterations: 3
            }
        );
        let trace: Vec<_> = run.steps.iter().map(|s| s.state.clone()).collect();
        assert_eq!(
            trace,
            vec![v(&[-1, -1, -1]), v(&[-1, 1, -1]), v(&[-1, 1, -1])]
        );
    }

    #[test]
    fn test_fixed_point_at_first_iteration() {
        let engine = ConvergenceEngine::with_defaults(presets::case_one());
        let run = engine.run(&v(&[1, -1, 1])).unwrap();
        assert_eq!(
            run.outcome,
            Outcome::FixedPoint {
                state: v(&[1, -1, 1]),
                iterations: 1
            }
        );
        assert_eq!(run.steps.len(), 1);
    }

    #[test]
    fn test_period_two_oscillation() {
        // W = -I sends v to -v.
        let engine = engine(&[vec![-1.0, 0.0], vec![0.0, -1.0]]);
        let run = engine.run(&v(&[1, 1])).unwrap();

        let states = match &run.outcome {
            Outcome::Cycle { states } => states.clone(),
            other => panic!("expected cycle, got {:?}", other),
        };
        assert_eq!(states, vec![v(&[-1, -1]), v(&[1, 1]), v(&[-1, -1])]);
        assert_eq!(states.first(), states.last());

        let distinct: std::collections::BTreeSet<_> = states.iter().collect();
        assert_eq!(distinct.len(), 2);
        assert_eq!(run.outcome.cycle_degree(), Some(2));
        assert_eq!(run.steps.len(), 3);
    }

    #[test]
    fn test_initial_state_not_in_history() {
        // (1,-1,-1) → (-1,-1,1) → (1,-1,-1) → (-1,-1,1): the start vector
        // recurs at iteration 2 but only produced states count.
        let engine = ConvergenceEngine::with_defaults(presets::case_one());
        let run = engine.run(&v(&[1, -1, -1])).unwrap();
        assert_eq!(
            run.outcome,
            Outcome::Cycle {
                states: vec![v(&[-1, -1, 1]), v(&[1, -1, -1]), v(&[-1, -1, 1])]
            }
        );
        assert_eq!(run.steps.len(), 3);
    }

    #[test]
    fn test_four_cycle_on_asymmetric_matrix() {
        let engine = ConvergenceEngine::with_defaults(presets::case_two());
        let run = engine.run(&v(&[1, 1])).unwrap();
        assert_eq!(
            run.outcome,
            Outcome::Cycle {
                states: vec![
                    v(&[1, -1]),
                    v(&[-1, -1]),
                    v(&[-1, 1]),
                    v(&[1, 1]),
                    v(&[1, -1]),
                ]
            }
        );
        assert_eq!(run.outcome.cycle_degree(), Some(4));
    }

    #[test]
    fn test_max_iterations_checked_before_step() {
        let config = EngineConfig { max_iterations: 2 };
        let engine = ConvergenceEngine::new(presets::case_two(), config).unwrap();
        let run = engine.run(&v(&[1, 1])).unwrap();
        assert_eq!(run.outcome, Outcome::MaxIterationsReached);
        // Only iteration 1 computes a candidate.
        assert_eq!(run.steps.len(), 1);
        assert_eq!(run.original, v(&[1, 1]));
    }

    #[test]
    fn test_max_iterations_of_one_computes_nothing() {
        let config = EngineConfig { max_iterations: 1 };
        let engine = ConvergenceEngine::new(presets::case_one(), config).unwrap();
        let run = engine.run(&v(&[1, -1, 1])).unwrap();
        assert_eq!(run.outcome, Outcome::MaxIterationsReached);
        assert!(run.steps.is_empty());
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        let err = ConvergenceEngine::new(presets::case_one(), EngineConfig { max_iterations: 0 })
            .err()
            .unwrap();
        assert!(matches!(err, HopfieldError::InvalidConfig(_)));
    }

    #[test]
    fn test_dimension_mismatch_surfaces() {
        let engine = ConvergenceEngine::with_defaults(presets::case_one());
        let err = engine.run(&v(&[1, 1])).unwrap_err();
        assert_eq!(
            err,
            HopfieldError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_determinism() {
        let engine = ConvergenceEngine::with_defaults(presets::case_two());
        for start in crate::network::enumerate_vectors(2) {
            let a = engine.run(&start).unwrap();
            let b = engine.run(&start).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.steps.len(), b.steps.len());
        }
    }

    #[test]
    fn test_steps_never_exceed_budget() {
        for seed in 0..16 {
            let weights = presets::random_symmetric(3, seed);
            let engine = ConvergenceEngine::with_defaults(weights);
            for start in crate::network::enumerate_vectors(3) {
                let run = engine.run(&start).unwrap();
                assert!(run.steps.len() < MAXIMUM_ITERATIONS);
                assert!(run.steps.iter().all(|s| s.iteration <= MAXIMUM_ITERATIONS));
            }
        }
    }

    #[test]
    fn test_closure_under_update() {
        for seed in 0..8 {
            let engine = ConvergenceEngine::with_defaults(presets::random_symmetric(3, seed));
            for start in crate::network::enumerate_vectors(3) {
                let next = engine.step(&start).unwrap();
                assert_eq!(next.dimension(), 3);
                assert!(next.components().iter().all(|&c| c == 1 || c == -1));
            }
        }
    }

    #[test]
    fn test_first_repeat_prefers_smallest_i() {
        let a = v(&[1]);
        let b = v(&[-1]);
        let history = vec![a.clone(), b.clone(), b, a];
        assert_eq!(first_repeat(&history), Some((0, 3)));
        assert_eq!(first_repeat(&history[..2]), None);
    }

    #[test]
    fn test_zero_matrix_collapses_to_negative_state() {
        let engine = ConvergenceEngine::with_defaults(
            WeightMatrix::new(array![[0.0, 0.0], [0.0, 0.0]]).unwrap(),
        );
        let run = engine.run(&v(&[1, 1])).unwrap();
        assert_eq!(
            run.outcome,
            Outcome::FixedPoint {
                state: v(&[-1, -1]),
                iterations: 2
            }
        );
    }

    #[test]
    fn test_outcome_json_tag() {
        let json = serde_json::to_string(&Outcome::MaxIterationsReached).unwrap();
        assert_eq!(json, r#"{"kind":"max_iterations_reached"}"#);
    }
}
