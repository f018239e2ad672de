//! Human-readable and JSON rendering of experiment reports.
//!
//! Rendering works on finished [`ExperimentReport`]s, so nothing printed here
//! can influence a classification.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::network::{BipolarVector, Convergence, ExperimentReport, Outcome};
use crate::validation::MatrixProperties;

const BANNER_RULE: &str = "=================";

/// `YES` / `NO`.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

/// `YES` / `NO`, or `N/A` when the check was not evaluated.
pub fn yes_no_na(value: Option<bool>) -> &'static str {
    value.map_or("N/A", yes_no)
}

/// `a -> b -> c`
pub fn cycle_chain(states: &[BipolarVector]) -> String {
    states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// `{a, b}`
pub fn stable_set(points: &BTreeSet<BipolarVector>) -> String {
    let parts: Vec<String> = points.iter().map(|p| p.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}

/// Writes the line-oriented narration of experiments.
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "\n{} {} {}\n", BANNER_RULE, text, BANNER_RULE)
    }

    pub fn properties(&mut self, props: &MatrixProperties) -> io::Result<()> {
        writeln!(
            self.out,
            "Does the input matrix have a non-negative diagonal? - {}",
            yes_no(props.non_negative_diagonal)
        )?;
        writeln!(
            self.out,
            "Is the input matrix symmetric?                      - {}",
            yes_no(props.symmetric)
        )?;
        writeln!(
            self.out,
            "Is the input matrix positive definite?              - {}",
            yes_no_na(props.positive_definite)
        )
    }

    /// Start line, one line per iteration, then the classification.
    pub fn run(&mut self, run: &Convergence) -> io::Result<()> {
        writeln!(
            self.out,
            "\nStarted synchronous update for vector: {}",
            run.original
        )?;
        for step in &run.steps {
            writeln!(self.out, "Result of iteration {}: {}", step.iteration, step.state)?;
        }

        match &run.outcome {
            Outcome::FixedPoint { state, iterations } => writeln!(
                self.out,
                "For vector {} stable point {} was found in {} iterations.",
                run.original, state, iterations
            ),
            Outcome::Cycle { states } => {
                writeln!(
                    self.out,
                    "For vector {} a {}-degree configuration was found:",
                    run.original,
                    run.outcome.cycle_degree().unwrap_or_default()
                )?;
                writeln!(self.out, "{}", cycle_chain(states))
            }
            Outcome::MaxIterationsReached => writeln!(
                self.out,
                "For vector {} updating stopped: the maximum number of iterations was reached.",
                run.original
            ),
        }
    }

    /// Full narration of one experiment, framed by start and end banners.
    pub fn experiment(&mut self, report: &ExperimentReport) -> io::Result<()> {
        self.banner(&format!("STARTED UPDATING FOR {}", report.label))?;
        self.properties(&report.properties)?;
        for run in &report.runs {
            self.run(run)?;
        }
        writeln!(
            self.out,
            "All stable points of the network: {}",
            stable_set(report.stable_points())
        )?;
        self.banner(&format!("FINISHED UPDATING FOR {}", report.label))
    }
}

/// Pretty-printed JSON array of reports.
pub fn write_json<W: Write>(out: W, reports: &[ExperimentReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(out, reports)?;
    Ok(())
}
