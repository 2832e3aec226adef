//! Error types for conflict-graph construction and schedule lookup.
//!
//! Build-time problems are detected eagerly and surfaced to the caller;
//! the coloring engine itself is total and has no error path.

use thiserror::Error;

use crate::models::SkinType;

/// A defect detected while building a conflict graph.
///
/// The builder collects every defect it finds and rejects the whole
/// build, rather than silently dropping offending entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two products share the same name.
    #[error("duplicate product name: '{name}'")]
    DuplicateProduct {
        /// The repeated vertex identifier.
        name: String,
    },

    /// A conflict names the same product on both ends.
    #[error("self-loop conflict on product: '{name}'")]
    SelfLoop {
        /// The product named twice.
        name: String,
    },

    /// A conflict references a product that does not exist.
    #[error("conflict ({product_a}, {product_b}) references unknown product '{unknown}'")]
    InvalidReference {
        /// First endpoint as given.
        product_a: String,
        /// Second endpoint as given.
        product_b: String,
        /// The endpoint that resolved to no vertex.
        unknown: String,
    },
}

/// A failure while resolving a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The requested skin type has no authored schedule.
    #[error("no schedule authored for skin type '{0}'")]
    SkinTypeNotFound(SkinType),

    /// A schedule entry references a product missing from the graph.
    #[error("schedule for '{skin_type}' references unknown product '{product}'")]
    UnknownProduct {
        /// The skin type whose schedule is defective.
        skin_type: SkinType,
        /// The unresolved product name.
        product: String,
    },
}
