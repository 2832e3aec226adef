//! Coloring result models.
//!
//! A [`ColorAssignment`] maps vertex names to non-negative color indices;
//! a [`ColoringTrace`] is the ordered record of assignment events produced
//! by the greedy engine, replayable for step-by-step presentation.
//!
//! Color indices map 1:1 to usage time slots: every vertex sharing a color
//! can be applied in the same slot.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::ConflictGraph;

/// A vertex → color-index mapping.
///
/// Produced by the greedy engine; also constructible incrementally when
/// replaying a trace prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAssignment {
    colors: HashMap<String, usize>,
    /// Vertex names in assignment order.
    order: Vec<String>,
}

impl ColorAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a color for a vertex.
    ///
    /// Re-assigning an existing vertex overwrites its color but keeps its
    /// original position in the assignment order.
    pub fn assign(&mut self, vertex: impl Into<String>, color: usize) {
        let vertex = vertex.into();
        if self.colors.insert(vertex.clone(), color).is_none() {
            self.order.push(vertex);
        }
    }

    /// Color of a vertex, if assigned.
    pub fn color_of(&self, vertex: &str) -> Option<usize> {
        self.colors.get(vertex).copied()
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no vertex has been colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of distinct colors in use.
    ///
    /// This is the greedy upper bound on the chromatic number, not
    /// necessarily χ(G) itself.
    pub fn color_count(&self) -> usize {
        self.colors.values().collect::<HashSet<_>>().len()
    }

    /// Color classes: vertex names grouped by color index.
    ///
    /// Index `i` of the result holds the vertices colored `i`, each class
    /// in assignment order. Empty classes (unused indices below the
    /// maximum) come out as empty vectors.
    pub fn color_classes(&self) -> Vec<Vec<String>> {
        let slots = match self.colors.values().max() {
            Some(&max) => max + 1,
            None => return Vec::new(),
        };
        let mut classes = vec![Vec::new(); slots];
        for vertex in &self.order {
            classes[self.colors[vertex]].push(vertex.clone());
        }
        classes
    }

    /// Checks the proper-coloring invariant against a graph.
    ///
    /// Every edge whose endpoints are both colored must join two
    /// different colors; uncolored endpoints are ignored.
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        graph.edges().all(|(a, b, _)| {
            match (self.color_of(a), self.color_of(b)) {
                (Some(ca), Some(cb)) => ca != cb,
                _ => true,
            }
        })
    }

    /// Vertex names in assignment order.
    pub fn assigned_vertices(&self) -> &[String] {
        &self.order
    }
}

/// One assignment event in a coloring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringStep {
    /// The vertex being colored.
    pub vertex: String,
    /// The color index chosen (smallest not in `blocked_colors`).
    pub color: usize,
    /// Colors already used by colored neighbors at this moment.
    pub blocked_colors: BTreeSet<usize>,
    /// Neighbor names at assignment time.
    pub neighbors: Vec<String>,
}

impl ColoringStep {
    /// Colors available to this vertex within a bounded display palette.
    ///
    /// The engine itself uses an unbounded palette; this helper exists for
    /// presentations that render a fixed swatch list.
    pub fn available_within(&self, palette_size: usize) -> Vec<usize> {
        (0..palette_size)
            .filter(|c| !self.blocked_colors.contains(c))
            .collect()
    }

    /// Human-readable explanation of why this color was chosen.
    ///
    /// Drives the per-step explanatory text in animated presentations.
    pub fn explanation(&self) -> String {
        if self.blocked_colors.is_empty() {
            if self.neighbors.is_empty() {
                format!(
                    "{} has no neighbors, so the first slot (slot {}) is used.",
                    self.vertex,
                    self.color + 1
                )
            } else {
                format!(
                    "{} has no colored neighbors yet, so the first slot (slot {}) is used.",
                    self.vertex,
                    self.color + 1
                )
            }
        } else {
            let blocked: Vec<String> = self
                .blocked_colors
                .iter()
                .map(|c| format!("slot {}", c + 1))
                .collect();
            format!(
                "{} conflicts with {}; {} already taken by neighbors, so the smallest free slot is slot {}.",
                self.vertex,
                self.neighbors.join(", "),
                blocked.join(" and "),
                self.color + 1
            )
        }
    }
}

/// The ordered execution trace of one coloring run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringTrace {
    steps: Vec<ColoringStep>,
}

impl ColoringTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub(crate) fn push(&mut self, step: ColoringStep) {
        self.steps.push(step);
    }

    /// All steps, in execution order.
    pub fn steps(&self) -> &[ColoringStep] {
        &self.steps
    }

    /// Number of steps (equals the graph's vertex count).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at position `index`.
    pub fn step(&self, index: usize) -> Option<&ColoringStep> {
        self.steps.get(index)
    }

    /// Partial assignment after applying steps `0..=index`.
    ///
    /// Pure function of the trace; the presentation layer calls this to
    /// render the coloring state at any replay position. An `index` at or
    /// past the end yields the full assignment.
    pub fn snapshot(&self, index: usize) -> ColorAssignment {
        let mut assignment = ColorAssignment::new();
        for step in self.steps.iter().take(index.saturating_add(1)) {
            assignment.assign(step.vertex.clone(), step.color);
        }
        assignment
    }

    /// The complete assignment (all steps applied).
    pub fn final_assignment(&self) -> ColorAssignment {
        let mut assignment = ColorAssignment::new();
        for step in &self.steps {
            assignment.assign(step.vertex.clone(), step.color);
        }
        assignment
    }
}
