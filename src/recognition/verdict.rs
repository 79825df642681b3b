//! Outcome of a recognition run and the witnesses backing it.

use crate::graph::Label;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy used by the long-cycle detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CycleCheck {
    /// Exact search for a chordless cycle on at least four vertices.
    #[default]
    Induced,
    /// Legacy heuristic: flag any fundamental-basis cycle longer than 3.
    ///
    /// Neither sound nor complete for chordality. Kept for parity with the
    /// earlier tool's verdicts.
    LegacyBasis,
}

/// Three vertices, each pair joined by a path avoiding the third's closed
/// neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsteroidalTriple {
    pub u: Label,
    pub v: Label,
    pub w: Label,
}

/// A cycle on more than three vertices, listed in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LongCycle {
    pub cycle: Vec<Label>,
    pub strategy: CycleCheck,
}

impl LongCycle {
    /// Number of vertices (and edges) on the cycle.
    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }
}

/// Point where simplicial peeling got stuck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EliminationFailure {
    /// Vertices peeled before getting stuck, in elimination order.
    pub eliminated: Vec<Label>,
    /// Remaining vertices, none of which is simplicial.
    pub stuck: Vec<Label>,
}

/// Why a graph is not an interval graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reason {
    AsteroidalTriple(AsteroidalTriple),
    LongCycle(LongCycle),
    NoSimplicialOrdering(EliminationFailure),
}

/// Result of deciding whether a graph is an interval graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// Carries a perfect elimination ordering of the graph.
    Interval { ordering: Vec<Label> },
    NotInterval(Reason),
}

impl Verdict {
    pub fn is_interval(&self) -> bool {
        matches!(self, Verdict::Interval { .. })
    }

    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Verdict::Interval { .. } => None,
            Verdict::NotInterval(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::AsteroidalTriple(t) => write!(
                f,
                "contains an asteroidal triple ({}, {}, {})",
                t.u, t.v, t.w
            ),
            Reason::LongCycle(c) => write!(
                f,
                "contains a cycle longer than 3 ({})",
                c.cycle.join(" - ")
            ),
            Reason::NoSimplicialOrdering(e) => write!(
                f,
                "has no simplicial elimination ordering (stuck on {})",
                e.stuck.join(", ")
            ),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Interval { .. } => write!(
                f,
                "The graph is an interval graph. Reason: it contains neither an asteroidal \
                 triple nor a cycle longer than 3, and it has a simplicial elimination ordering."
            ),
            Verdict::NotInterval(reason) => {
                write!(f, "Not an interval graph. Reason: {}.", reason)
            }
        }
    }
}
