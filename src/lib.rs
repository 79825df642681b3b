//! interval_check - interval graph recognition
//!
//! Decides whether an undirected graph is an interval graph by checking, in
//! order, for an asteroidal triple, for a long cycle and for a perfect
//! elimination ordering. The verdict carries a witness for whichever check
//! settled it.
//!
//! ```
//! use interval_check::graph::Graph;
//! use interval_check::recognition::{decide, Reason, Verdict};
//!
//! let square = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]).unwrap();
//! assert!(matches!(decide(&square), Verdict::NotInterval(Reason::LongCycle(_))));
//!
//! let path = Graph::from_edges([("a", "b"), ("b", "c")]).unwrap();
//! assert!(decide(&path).is_interval());
//! ```

pub mod graph;
pub mod io;
pub mod pipeline;
pub mod recognition;

pub use graph::Graph;
pub use recognition::{decide, Recognizer, RecognizerConfig, Verdict};
