//! Conflict graph model.
//!
//! An undirected, simple, unweighted graph over products. Vertices keep
//! their insertion order, which the greedy coloring engine uses as the
//! tie-break key for equal-degree vertices.
//!
//! The graph is immutable after construction — build one through
//! [`GraphBuilder`](crate::builder::GraphBuilder).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Conflict, Product, Severity, SkinType};

/// An immutable product conflict graph.
///
/// Invariants, enforced at build time:
/// - every edge endpoint references an existing vertex,
/// - no self-loops,
/// - no duplicate edges for the same unordered pair,
/// - no duplicate vertex names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictGraph {
    vertices: Vec<Product>,
    /// Vertex name → index into `vertices`.
    index: HashMap<String, usize>,
    /// Adjacency lists, parallel to `vertices`.
    adjacency: Vec<Vec<usize>>,
    /// Edges as index pairs (a < b) with severities.
    edges: Vec<(usize, usize, Severity)>,
}

impl ConflictGraph {
    /// Assembles a graph from pre-validated parts.
    ///
    /// Callers must guarantee the invariants listed on the type; the
    /// builder is the only intended entry point.
    pub(crate) fn from_parts(vertices: Vec<Product>, edges: Vec<(usize, usize, Severity)>) -> Self {
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();

        let mut adjacency = vec![Vec::new(); vertices.len()];
        for &(a, b, _) in &edges {
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        Self {
            vertices,
            index,
            adjacency,
            edges,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.vertices
    }

    /// Looks up a product by name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.index.get(name).map(|&i| &self.vertices[i])
    }

    /// Whether a vertex with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Insertion index of a vertex.
    pub fn vertex_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Degree of a vertex (0 for unknown names).
    pub fn degree(&self, name: &str) -> usize {
        self.index
            .get(name)
            .map(|&i| self.adjacency[i].len())
            .unwrap_or(0)
    }

    /// Maximum degree across all vertices (Δ). Zero for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Neighbor names of a vertex, in edge insertion order.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        match self.index.get(name) {
            Some(&i) => self.adjacency[i]
                .iter()
                .map(|&j| self.vertices[j].name.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether two vertices are adjacent.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    /// Edges as `(name_a, name_b, severity)` triples, insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Severity)> + '_ {
        self.edges.iter().map(move |&(a, b, sev)| {
            (
                self.vertices[a].name.as_str(),
                self.vertices[b].name.as_str(),
                sev,
            )
        })
    }

    /// Severity of the edge between two vertices, if present.
    pub fn conflict_severity(&self, a: &str, b: &str) -> Option<Severity> {
        let (&i, &j) = (self.index.get(a)?, self.index.get(b)?);
        let key = (i.min(j), i.max(j));
        self.edges
            .iter()
            .find(|&&(a, b, _)| (a, b) == key)
            .map(|&(_, _, sev)| sev)
    }

    /// Edge density: |E| / (|V| choose 2). Zero for graphs with < 2 vertices.
    pub fn density(&self) -> f64 {
        let v = self.vertices.len();
        if v < 2 {
            return 0.0;
        }
        let max_edges = v * (v - 1) / 2;
        self.edges.len() as f64 / max_edges as f64
    }

    /// Conflicts as owned records, e.g. for re-serialization.
    pub fn conflicts(&self) -> Vec<Conflict> {
        self.edges()
            .map(|(a, b, sev)| Conflict::new(a, b, sev))
            .collect()
    }

    /// Induced subgraph over products suitable for one skin type.
    ///
    /// Keeps vertex insertion order; keeps an edge only when both
    /// endpoints survive the filter.
    pub fn subgraph_for_skin_type(&self, skin_type: SkinType) -> ConflictGraph {
        let kept: Vec<Product> = self
            .vertices
            .iter()
            .filter(|p| p.suits(skin_type))
            .cloned()
            .collect();
        let remap: HashMap<&str, usize> = kept
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.as_str(), i))
            .collect();

        let edges = self
            .edges
            .iter()
            .filter_map(|&(a, b, sev)| {
                let na = remap.get(self.vertices[a].name.as_str())?;
                let nb = remap.get(self.vertices[b].name.as_str())?;
                Some((*na.min(nb), *na.max(nb), sev))
            })
            .collect();

        ConflictGraph::from_parts(kept, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    fn sample_graph() -> ConflictGraph {
        GraphBuilder::new()
            .with_product(Product::new("Vitamin C").with_skin_type(SkinType::Normal))
            .with_product(
                Product::new("Retinol")
                    .with_skin_type(SkinType::Normal)
                    .with_skin_type(SkinType::Dry),
            )
            .with_product(Product::new("AHA/BHA").with_skin_type(SkinType::Oily))
            .with_product(Product::new("Moisturizer").for_all_skin_types())
            .with_conflict(Conflict::new("Vitamin C", "Retinol", Severity::High))
            .with_conflict(Conflict::new("Retinol", "AHA/BHA", Severity::High))
            .build()
            .unwrap()
    }

    #[test]
    fn test_counts_and_lookup() {
        let g = sample_graph();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 2);
        assert!(g.contains("Retinol"));
        assert!(!g.contains("Sunscreen"));
        assert_eq!(g.product("AHA/BHA").unwrap().name, "AHA/BHA");
    }

    #[test]
    fn test_degree_and_neighbors() {
        let g = sample_graph();
        assert_eq!(g.degree("Retinol"), 2);
        assert_eq!(g.degree("Vitamin C"), 1);
        assert_eq!(g.degree("Moisturizer"), 0);
        assert_eq!(g.degree("nope"), 0);
        assert_eq!(g.max_degree(), 2);

        let n = g.neighbors("Retinol");
        assert_eq!(n, vec!["Vitamin C", "AHA/BHA"]);
        assert!(g.neighbors("Moisturizer").is_empty());
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let g = sample_graph();
        assert!(g.are_adjacent("Vitamin C", "Retinol"));
        assert!(g.are_adjacent("Retinol", "Vitamin C"));
        assert!(!g.are_adjacent("Vitamin C", "AHA/BHA"));
    }

    #[test]
    fn test_conflict_severity_lookup() {
        let g = sample_graph();
        assert_eq!(
            g.conflict_severity("Retinol", "Vitamin C"),
            Some(Severity::High)
        );
        assert_eq!(g.conflict_severity("Vitamin C", "Moisturizer"), None);
    }

    #[test]
    fn test_density() {
        let g = sample_graph();
        // 2 edges out of C(4,2) = 6 possible.
        assert!((g.density() - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let g = sample_graph();
        let names: Vec<_> = g.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Vitamin C", "Retinol", "AHA/BHA", "Moisturizer"]);
        assert_eq!(g.vertex_index("Vitamin C"), Some(0));
        assert_eq!(g.vertex_index("Moisturizer"), Some(3));
    }

    #[test]
    fn test_subgraph_for_skin_type() {
        let g = sample_graph();
        let sub = g.subgraph_for_skin_type(SkinType::Normal);
        // Vitamin C, Retinol, Moisturizer survive; AHA/BHA does not.
        assert_eq!(sub.vertex_count(), 3);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.are_adjacent("Vitamin C", "Retinol"));
        assert!(!sub.contains("AHA/BHA"));
    }
}
