//! Conflict (edge) model.
//!
//! A conflict is an unordered pair of distinct products whose active
//! ingredients should not be applied in the same time slot, labeled
//! with a severity level.
//!
//! Conflicts are normalized so `{A, B}` and `{B, A}` compare equal;
//! the graph builder relies on this to reject duplicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an ingredient conflict.
///
/// Ordered so that `Low < Medium < High`. The mapping from severity to
/// presentation style (edge color, stroke width) is owned by the
/// presentation collaborator, not this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Mild interaction; combining is discouraged but tolerable.
    Low,
    /// Noticeable interaction; separation recommended.
    Medium,
    /// Strong interaction; products must never share a slot.
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        };
        f.write_str(s)
    }
}

/// A pairwise ingredient conflict (graph edge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// First endpoint (product name).
    pub product_a: String,
    /// Second endpoint (product name).
    pub product_b: String,
    /// Conflict severity.
    pub severity: Severity,
}

impl Conflict {
    /// Creates a new conflict between two products.
    pub fn new(
        product_a: impl Into<String>,
        product_b: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            product_a: product_a.into(),
            product_b: product_b.into(),
            severity,
        }
    }

    /// Whether this conflict touches the given product.
    pub fn involves(&self, product: &str) -> bool {
        self.product_a == product || self.product_b == product
    }

    /// The other endpoint, if `product` is one of the two.
    pub fn other_endpoint(&self, product: &str) -> Option<&str> {
        if self.product_a == product {
            Some(&self.product_b)
        } else if self.product_b == product {
            Some(&self.product_a)
        } else {
            None
        }
    }

    /// Whether this is a self-loop (both endpoints identical).
    pub fn is_self_loop(&self) -> bool {
        self.product_a == self.product_b
    }

    /// Endpoints in lexicographic order, for unordered-pair comparison.
    ///
    /// `{A,B}` and `{B,A}` yield the same key.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.product_a <= self.product_b {
            (&self.product_a, &self.product_b)
        } else {
            (&self.product_b, &self.product_a)
        }
    }
}
