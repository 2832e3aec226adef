//! Skincare conflict-graph coloring and routine scheduling.
//!
//! Models skincare products as vertices of a conflict graph (edges are
//! pairwise ingredient conflicts), computes a proper vertex coloring with
//! a degree-ordered greedy algorithm, and projects color classes and
//! authored schedule tables onto day / time-of-day usage slots.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Product`, `Conflict`, `ConflictGraph`,
//!   `ColorAssignment`, `ColoringTrace`, `WeeklySchedule`, `ScheduleTable`
//! - **`builder`**: Validating graph construction (duplicate IDs,
//!   self-loops, dangling conflict references)
//! - **`coloring`**: Greedy coloring engine and trace replay
//! - **`projector`**: Schedule resolution, derived day tags, text export
//! - **`metrics`**: Graph/coloring efficiency indicators per skin type
//! - **`dataset`**: Static input data contract and the built-in dataset
//!
//! # Architecture
//!
//! The core is pure and synchronous: the graph is built once from static
//! input, coloring is a deterministic function of the graph, and replay
//! is a linear state machine over the recorded trace. Rendering,
//! animation timers, charts, and durable storage are collaborator
//! concerns that consume this crate's outputs.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of
//!   a graph and its application to timetabling problems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22

pub mod builder;
pub mod coloring;
pub mod dataset;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod projector;
