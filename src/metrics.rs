//! Graph and coloring efficiency metrics.
//!
//! Computes summary indicators from a conflict graph and its coloring,
//! both for the whole graph and per skin type (on the induced subgraph
//! of compatible products).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Vertex count (\|V\|) | Number of products |
//! | Edge count (\|E\|) | Number of conflicts |
//! | Colors used | Distinct colors in the greedy result (χ upper bound) |
//! | Max degree (Δ) | Largest neighbor count |
//! | Density | \|E\| / C(\|V\|, 2) |
//! | Efficiency score | Composite 0–100 score, higher = simpler routine |

use serde::{Deserialize, Serialize};

use crate::coloring::GreedyColoring;
use crate::models::{ColorAssignment, ConflictGraph, SkinType};

/// Reference scales for the efficiency score: a routine at or beyond
/// these values scores zero on the corresponding component.
const SCALE_PRODUCTS: f64 = 12.0;
const SCALE_CONFLICTS: f64 = 8.0;
const SCALE_COLORS: f64 = 6.0;

/// Summary indicators for one graph and its coloring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetrics {
    /// Number of products (|V|).
    pub vertex_count: usize,
    /// Number of conflicts (|E|).
    pub edge_count: usize,
    /// Distinct colors used by the coloring (upper bound on χ).
    pub colors_used: usize,
    /// Maximum degree (Δ).
    pub max_degree: usize,
    /// Edge density in `0.0..=1.0`.
    pub density: f64,
}

impl GraphMetrics {
    /// Computes metrics from a graph and a coloring of it.
    pub fn calculate(graph: &ConflictGraph, assignment: &ColorAssignment) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            colors_used: assignment.color_count(),
            max_degree: graph.max_degree(),
            density: graph.density(),
        }
    }

    /// Composite efficiency score in `0..=100`.
    ///
    /// Averages how far product count, conflict count, and colors used
    /// sit below their reference scales; fewer of each means a simpler,
    /// easier-to-follow routine and a higher score.
    pub fn efficiency_score(&self) -> u32 {
        let product_load = (self.vertex_count as f64 / SCALE_PRODUCTS).min(1.0);
        let conflict_load = (self.edge_count as f64 / SCALE_CONFLICTS).min(1.0);
        let color_load = (self.colors_used as f64 / SCALE_COLORS).min(1.0);
        let load = (product_load + conflict_load + color_load) / 3.0;
        (100.0 * (1.0 - load)).round() as u32
    }
}

/// Per-skin-type analysis: metrics of the induced compatible subgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinTypeAnalysis {
    /// The analyzed skin type.
    pub skin_type: SkinType,
    /// Metrics of the induced subgraph and its own greedy coloring.
    pub metrics: GraphMetrics,
    /// Time slots needed for this skin type's compatible products.
    pub slots_needed: usize,
}

impl SkinTypeAnalysis {
    /// Colors the induced subgraph of products suiting `skin_type` and
    /// summarizes it.
    pub fn calculate(graph: &ConflictGraph, skin_type: SkinType) -> Self {
        let subgraph = graph.subgraph_for_skin_type(skin_type);
        let (assignment, _) = GreedyColoring::new().color(&subgraph);
        let metrics = GraphMetrics::calculate(&subgraph, &assignment);
        let slots_needed = metrics.colors_used;
        Self {
            skin_type,
            metrics,
            slots_needed,
        }
    }

    /// Analyses for every skin type, in display order.
    pub fn for_all(graph: &ConflictGraph) -> Vec<Self> {
        SkinType::ALL
            .iter()
            .map(|&st| Self::calculate(graph, st))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::models::{Conflict, Product, Severity};

    fn sample_graph() -> ConflictGraph {
        GraphBuilder::new()
            .with_product(
                Product::new("Vitamin C")
                    .with_skin_type(SkinType::Normal)
                    .with_skin_type(SkinType::Dry),
            )
            .with_product(
                Product::new("Retinol")
                    .with_skin_type(SkinType::Normal)
                    .with_skin_type(SkinType::Dry),
            )
            .with_product(
                Product::new("AHA/BHA")
                    .with_skin_type(SkinType::Normal)
                    .with_skin_type(SkinType::Oily),
            )
            .with_product(Product::new("Moisturizer").for_all_skin_types())
            .with_conflict(Conflict::new("Vitamin C", "Retinol", Severity::High))
            .with_conflict(Conflict::new("Vitamin C", "AHA/BHA", Severity::High))
            .with_conflict(Conflict::new("Retinol", "AHA/BHA", Severity::High))
            .build()
            .unwrap()
    }

    #[test]
    fn test_graph_metrics() {
        let g = sample_graph();
        let (assignment, _) = GreedyColoring::new().color(&g);
        let m = GraphMetrics::calculate(&g, &assignment);

        assert_eq!(m.vertex_count, 4);
        assert_eq!(m.edge_count, 3);
        // Triangle among the three actives → 3 colors.
        assert_eq!(m.colors_used, 3);
        assert_eq!(m.max_degree, 2);
        assert!((m.density - 3.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_efficiency_score_bounds() {
        let g = sample_graph();
        let (assignment, _) = GreedyColoring::new().color(&g);
        let m = GraphMetrics::calculate(&g, &assignment);
        let score = m.efficiency_score();
        assert!(score <= 100);

        // Empty graph scores a perfect 100.
        let empty = GraphBuilder::new().build().unwrap();
        let (ea, _) = GreedyColoring::new().color(&empty);
        assert_eq!(GraphMetrics::calculate(&empty, &ea).efficiency_score(), 100);
    }

    #[test]
    fn test_simpler_routine_scores_higher() {
        let g = sample_graph();
        let (assignment, _) = GreedyColoring::new().color(&g);
        let full = GraphMetrics::calculate(&g, &assignment);

        let oily = SkinTypeAnalysis::calculate(&g, SkinType::Oily);
        // Oily keeps only AHA/BHA and Moisturizer: fewer products, no
        // conflicts, fewer slots.
        assert!(oily.metrics.efficiency_score() > full.efficiency_score());
    }

    #[test]
    fn test_skin_type_analysis_subgraph() {
        let g = sample_graph();
        let dry = SkinTypeAnalysis::calculate(&g, SkinType::Dry);

        // Vitamin C, Retinol, Moisturizer; one conflict edge survives.
        assert_eq!(dry.metrics.vertex_count, 3);
        assert_eq!(dry.metrics.edge_count, 1);
        assert_eq!(dry.slots_needed, 2);
    }

    #[test]
    fn test_analysis_for_all_skin_types() {
        let g = sample_graph();
        let all = SkinTypeAnalysis::for_all(&g);
        assert_eq!(all.len(), SkinType::ALL.len());
        assert_eq!(all[0].skin_type, SkinType::Normal);

        // Sensitive suits only Moisturizer: one product, one slot.
        let sensitive = all
            .iter()
            .find(|a| a.skin_type == SkinType::Sensitive)
            .unwrap();
        assert_eq!(sensitive.metrics.vertex_count, 1);
        assert_eq!(sensitive.slots_needed, 1);
    }
}
