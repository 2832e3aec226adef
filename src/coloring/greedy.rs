//! Degree-ordered greedy vertex coloring.
//!
//! # Algorithm
//!
//! 1. Compute the degree of every vertex.
//! 2. Order vertices by degree descending; equal degrees keep their
//!    insertion order (stable sort).
//! 3. For each vertex in that order, collect the colors of its
//!    already-colored neighbors and assign the smallest non-negative
//!    color not among them.
//!
//! The palette is unbounded: a vertex with k colored neighbors gets a
//! color index of at most k, so the engine never runs out of colors.
//!
//! Greedy coloring is a heuristic: it yields a proper coloring and an
//! upper bound on the chromatic number, not χ(G) itself.
//!
//! # Complexity
//! O(V log V) for the ordering plus O(V + E) for neighbor scans.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::models::{ColorAssignment, ColoringStep, ColoringTrace, ConflictGraph};

/// Greedy coloring engine.
///
/// A pure function of the input graph: two runs over the same graph
/// produce identical assignments and identical traces.
///
/// # Example
///
/// ```
/// use routine_graph::builder::GraphBuilder;
/// use routine_graph::coloring::GreedyColoring;
/// use routine_graph::models::{Conflict, Product, Severity};
///
/// let graph = GraphBuilder::new()
///     .with_product(Product::new("P1"))
///     .with_product(Product::new("P2"))
///     .with_product(Product::new("P3"))
///     .with_conflict(Conflict::new("P1", "P2", Severity::High))
///     .with_conflict(Conflict::new("P2", "P3", Severity::High))
///     .build()
///     .unwrap();
///
/// let (assignment, trace) = GreedyColoring::new().color(&graph);
/// assert!(assignment.is_proper(&graph));
/// assert_eq!(assignment.color_count(), 2);
/// assert_eq!(trace.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyColoring;

impl GreedyColoring {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Colors the graph, returning the assignment and its execution trace.
    ///
    /// Total over any valid graph: an empty graph yields empty results;
    /// isolated vertices receive color 0.
    pub fn color(&self, graph: &ConflictGraph) -> (ColorAssignment, ColoringTrace) {
        let order = self.vertex_order(graph);

        let mut assignment = ColorAssignment::new();
        let mut trace = ColoringTrace::new();

        for name in order {
            let neighbors: Vec<String> =
                graph.neighbors(&name).iter().map(|s| s.to_string()).collect();

            let blocked: BTreeSet<usize> = neighbors
                .iter()
                .filter_map(|n| assignment.color_of(n))
                .collect();

            // Smallest non-negative color not used by a colored neighbor.
            let color = (0..).find(|c| !blocked.contains(c)).unwrap_or(0);

            assignment.assign(name.clone(), color);
            trace.push(ColoringStep {
                vertex: name,
                color,
                blocked_colors: blocked,
                neighbors,
            });
        }

        log::debug!(
            "greedy coloring: {} vertices, {} colors",
            assignment.len(),
            assignment.color_count()
        );
        (assignment, trace)
    }

    /// Processing order: degree descending, insertion order on ties.
    ///
    /// The tie-break is part of the engine's contract — greedy results
    /// are order-sensitive, so it must stay fixed.
    fn vertex_order(&self, graph: &ConflictGraph) -> Vec<String> {
        let mut names: Vec<(usize, String)> = graph
            .products()
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.name.clone()))
            .collect();
        names.sort_by_key(|(i, name)| (Reverse(graph.degree(name)), *i));
        names.into_iter().map(|(_, name)| name).collect()
    }
}
