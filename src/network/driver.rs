//! Experiment driver: runs every initial state of one network.
//!
//! An experiment owns its stable-point set: nothing is shared between two
//! experiments, and starting a new one starts from an empty set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::BIPOLAR_VALUES;
use crate::error::Result;
use crate::linalg::WeightMatrix;
use crate::network::convergence::{Convergence, ConvergenceEngine, EngineConfig, Outcome};
use crate::network::state::BipolarVector;
use crate::validation::MatrixProperties;

/// Every state in `{+1, -1}^dimension`, lexicographic with `+1` first and the
/// first coordinate outermost: `(1,1), (1,-1), (-1,1), (-1,-1)` for N = 2.
pub fn enumerate_vectors(dimension: usize) -> Vec<BipolarVector> {
    let mut prefixes: Vec<Vec<i8>> = vec![Vec::with_capacity(dimension)];
    for _ in 0..dimension {
        prefixes = prefixes
            .into_iter()
            .flat_map(|prefix| {
                BIPOLAR_VALUES.iter().map(move |&value| {
                    let mut next = prefix.clone();
                    next.push(value);
                    next
                })
            })
            .collect();
    }
    prefixes.into_iter().map(BipolarVector::from_signs).collect()
}

/// Outcome of one experiment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub label: String,
    pub weights: WeightMatrix,
    pub properties: MatrixProperties,
    /// One entry per initial state, in enumeration order.
    pub runs: Vec<Convergence>,
    stable_points: BTreeSet<BipolarVector>,
}

impl ExperimentReport {
    /// Fixed points discovered by any run of this experiment.
    pub fn stable_points(&self) -> &BTreeSet<BipolarVector> {
        &self.stable_points
    }

    /// Runs that ended in a cycle.
    pub fn cycles(&self) -> impl Iterator<Item = &Convergence> {
        self.runs.iter().filter(|r| r.outcome.is_cycle())
    }

    /// Runs that ran out of iterations.
    pub fn exhausted(&self) -> impl Iterator<Item = &Convergence> {
        self.runs
            .iter()
            .filter(|r| r.outcome == Outcome::MaxIterationsReached)
    }
}

/// One weight matrix, all initial states.
pub struct Experiment {
    label: String,
    engine: ConvergenceEngine,
}

impl Experiment {
    pub fn new(label: impl Into<String>, weights: WeightMatrix, config: EngineConfig) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            engine: ConvergenceEngine::new(weights, config)?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn engine(&self) -> &ConvergenceEngine {
        &self.engine
    }

    /// Inspect the matrix, then run every state of matching dimension.
    pub fn run(&self) -> Result<ExperimentReport> {
        let weights = self.engine.weights();
        let properties = MatrixProperties::inspect(weights);

        let mut runs = Vec::new();
        let mut stable_points = BTreeSet::new();
        for start in enumerate_vectors(weights.order()) {
            let convergence = self.engine.run(&start)?;
            if let Some(state) = convergence.outcome.fixed_point() {
                stable_points.insert(state.clone());
            }
            runs.push(convergence);
        }

        tracing::info!(
            label = %self.label,
            runs = runs.len(),
            stable_points = stable_points.len(),
            "experiment finished"
        );

        Ok(ExperimentReport {
            label: self.label.clone(),
            weights: weights.clone(),
            properties,
            runs,
            stable_points,
        })
    }
}
