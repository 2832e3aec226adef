//! Greedy coloring engine and trace replay.
//!
//! [`GreedyColoring`] turns a [`ConflictGraph`](crate::models::ConflictGraph)
//! into a proper [`ColorAssignment`](crate::models::ColorAssignment) plus
//! a step-by-step [`ColoringTrace`](crate::models::ColoringTrace);
//! [`Replay`] walks that trace for animated presentation.
//!
//! # Usage
//!
//! ```
//! use routine_graph::builder::GraphBuilder;
//! use routine_graph::coloring::{GreedyColoring, Replay, ReplayState};
//! use routine_graph::models::{Conflict, Product, Severity};
//!
//! let graph = GraphBuilder::new()
//!     .with_product(Product::new("Vitamin C"))
//!     .with_product(Product::new("Retinol"))
//!     .with_conflict(Conflict::new("Vitamin C", "Retinol", Severity::High))
//!     .build()
//!     .unwrap();
//!
//! let (assignment, trace) = GreedyColoring::new().color(&graph);
//! assert!(assignment.is_proper(&graph));
//!
//! let mut replay = Replay::new(trace);
//! while replay.advance() != ReplayState::Completed {}
//! assert_eq!(replay.current_assignment(), assignment);
//! ```

mod greedy;
mod replay;

pub use greedy::GreedyColoring;
pub use replay::{Replay, ReplayState};
