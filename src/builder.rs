//! Conflict graph construction and validation.
//!
//! Builds a [`ConflictGraph`] from product and conflict records, checking
//! structural integrity before assembly. Detects:
//! - Duplicate product names
//! - Self-loop conflicts
//! - Conflicts referencing unknown products
//!
//! Policy: any defect rejects the whole build — the builder never
//! produces a graph with dangling references. Duplicate conflicts for the
//! same unordered pair are not an error; the first definition wins and
//! later ones are dropped.

use std::collections::{HashMap, HashSet};

use crate::errors::BuildError;
use crate::models::{Conflict, ConflictGraph, Product, Severity};

/// Validating builder for [`ConflictGraph`].
///
/// Products keep their insertion order in the finished graph; the greedy
/// engine uses that order as its tie-break key.
///
/// # Example
///
/// ```
/// use routine_graph::builder::GraphBuilder;
/// use routine_graph::models::{Conflict, Product, Severity};
///
/// let graph = GraphBuilder::new()
///     .with_product(Product::new("Vitamin C"))
///     .with_product(Product::new("Retinol"))
///     .with_conflict(Conflict::new("Vitamin C", "Retinol", Severity::High))
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert!(graph.are_adjacent("Vitamin C", "Retinol"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    products: Vec<Product>,
    conflicts: Vec<Conflict>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product (vertex).
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Adds a batch of products.
    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    /// Adds a conflict (edge).
    pub fn with_conflict(mut self, conflict: Conflict) -> Self {
        self.conflicts.push(conflict);
        self
    }

    /// Adds a batch of conflicts.
    pub fn with_conflicts(mut self, conflicts: impl IntoIterator<Item = Conflict>) -> Self {
        self.conflicts.extend(conflicts);
        self
    }

    /// Validates the collected records and assembles the graph.
    ///
    /// # Checks
    /// 1. No duplicate product names
    /// 2. No self-loop conflicts
    /// 3. Every conflict endpoint resolves to an existing product
    ///
    /// # Returns
    /// `Ok(graph)` if all checks pass, `Err(errors)` with every detected
    /// defect otherwise.
    pub fn build(self) -> Result<ConflictGraph, Vec<BuildError>> {
        let mut errors = Vec::new();

        let mut index: HashMap<&str, usize> = HashMap::new();
        for (i, p) in self.products.iter().enumerate() {
            if index.insert(p.name.as_str(), i).is_some() {
                errors.push(BuildError::DuplicateProduct {
                    name: p.name.clone(),
                });
            }
        }

        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
        let mut edges: Vec<(usize, usize, Severity)> = Vec::new();

        for c in &self.conflicts {
            if c.is_self_loop() {
                errors.push(BuildError::SelfLoop {
                    name: c.product_a.clone(),
                });
                continue;
            }

            let a = index.get(c.product_a.as_str());
            let b = index.get(c.product_b.as_str());
            let (a, b) = match (a, b) {
                (Some(&a), Some(&b)) => (a, b),
                _ => {
                    let unknown = if a.is_none() { &c.product_a } else { &c.product_b };
                    errors.push(BuildError::InvalidReference {
                        product_a: c.product_a.clone(),
                        product_b: c.product_b.clone(),
                        unknown: unknown.clone(),
                    });
                    continue;
                }
            };

            let (ka, kb) = c.pair_key();
            if !seen_pairs.insert((ka.to_string(), kb.to_string())) {
                // First definition wins for the unordered pair.
                log::debug!(
                    "dropping duplicate conflict ({}, {})",
                    c.product_a,
                    c.product_b
                );
                continue;
            }

            edges.push((a.min(b), a.max(b), c.severity));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        log::debug!(
            "built conflict graph: {} vertices, {} edges",
            self.products.len(),
            edges.len()
        );
        Ok(ConflictGraph::from_parts(self.products, edges))
    }
}
