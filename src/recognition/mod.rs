//! Interval graph recognition.
//!
//! Three necessary conditions are checked in a fixed order, stopping at the
//! first one that fails:
//!
//! 1. **No asteroidal triple**: see [`asteroidal`]
//! 2. **No long cycle**: see [`cycles`]; the strategy comes from
//!    [`RecognizerConfig::cycle_check`]
//! 3. **A perfect elimination ordering exists**: see [`elimination`]
//!
//! A graph passing all three is chordal and free of asteroidal triples, which
//! characterizes interval graphs.
//!
//! # Module Structure
//!
//! - [`verdict`] - Verdict, reasons and witnesses
//! - [`asteroidal`] - Asteroidal triple search
//! - [`cycles`] - Chordless cycle search and the legacy cycle-basis heuristic
//! - [`elimination`] - Simplicial peeling

pub mod asteroidal;
pub mod cycles;
pub mod elimination;
pub mod verdict;


pub use verdict::{AsteroidalTriple, CycleCheck, EliminationFailure, LongCycle, Reason, Verdict};

use crate::graph::Graph;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Progress of a single recognition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    Start,
    CheckedTriple,
    CheckedCycle,
    CheckedOrdering,
    Done,
}

/// Settings for a [`Recognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecognizerConfig {
    /// Strategy of the long-cycle detector.
    pub cycle_check: CycleCheck,
}

/// A verdict together with the stages reached while computing it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Recognition {
    pub verdict: Verdict,
    pub stages: Vec<Stage>,
}

impl Recognition {
    /// Number of detectors that ran.
    pub fn checks_run(&self) -> usize {
        self.stages
            .iter()
            .filter(|s| !matches!(s, Stage::Start | Stage::Done))
            .count()
    }
}

/// Decides whether graphs are interval graphs.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
}

impl Recognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Returns the verdict for `graph`.
    pub fn decide(&self, graph: &Graph) -> Verdict {
        self.recognize(graph).verdict
    }

    /// Runs the checks in order and records each stage reached.
    ///
    /// No check runs after the first one that rules the graph out. `graph` is
    /// only read; detectors work on private copies.
    pub fn recognize(&self, graph: &Graph) -> Recognition {
        let mut stages = vec![Stage::Start];
        debug!("recognizing {}", graph);

        let verdict = 'checks: {
            let triple = asteroidal::find_asteroidal_triple(graph);
            stages.push(Stage::CheckedTriple);
            debug!("asteroidal triple: {:?}", triple);
            if let Some(triple) = triple {
                break 'checks Verdict::NotInterval(Reason::AsteroidalTriple(triple));
            }

            let cycle = cycles::find_long_cycle(graph, self.config.cycle_check);
            stages.push(Stage::CheckedCycle);
            debug!("long cycle ({:?}): {:?}", self.config.cycle_check, cycle);
            if let Some(cycle) = cycle {
                break 'checks Verdict::NotInterval(Reason::LongCycle(cycle));
            }

            let ordering = elimination::perfect_elimination_ordering(graph);
            stages.push(Stage::CheckedOrdering);
            debug!("elimination ordering: {:?}", ordering);
            match ordering {
                Ok(ordering) => Verdict::Interval { ordering },
                Err(failure) => Verdict::NotInterval(Reason::NoSimplicialOrdering(failure)),
            }
        };

        stages.push(Stage::Done);
        Recognition { verdict, stages }
    }
}

/// Decides `graph` with the default configuration.
pub fn decide(graph: &Graph) -> Verdict {
    Recognizer::default().decide(graph)
}
