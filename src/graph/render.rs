//! Pure rendering of a graph's adjacency structure.
//!
//! Rendering is separated from the data structure: these functions produce
//! values (lines of text, or a serializable dump) and let the caller decide
//! the output sink.

use std::fmt::Display;

use serde::Serialize;

use crate::graph::weighted::{GhostWeightedGraph, VertexId};
use crate::GhostToken;

/// A structured, serializable snapshot of a graph's adjacency lists.
///
/// Vertices appear in insertion order; edges within each vertex in edge
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyDump<W> {
    /// Per-vertex adjacency entries.
    pub vertices: Vec<VertexDump<W>>,
}

/// One vertex and its incident edge records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexDump<W> {
    /// External vertex id.
    pub id: VertexId,
    /// Incident edge records in insertion order.
    pub edges: Vec<EdgeDump<W>>,
}

/// One adjacency record of a dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeDump<W> {
    /// Neighbor vertex id.
    pub target: VertexId,
    /// Edge weight.
    pub weight: W,
}

impl<'brand, W> GhostWeightedGraph<'brand, W> {
    /// Renders one line per vertex in insertion order:
    /// `"id -> (n1, w1) (n2, w2)"`.
    ///
    /// A vertex without edges renders as `"id ->"`.
    pub fn render_lines(&self, token: &GhostToken<'brand>) -> Vec<String>
    where
        W: Display,
    {
        self.ids
            .iter()
            .enumerate()
            .map(|(k, id)| {
                let pairs: Vec<String> = self
                    .adjacency
                    .borrow(token, k)
                    .iter()
                    .map(|e| format!("({}, {})", self.ids[e.target], e.weight))
                    .collect();
                if pairs.is_empty() {
                    format!("{id} ->")
                } else {
                    format!("{id} -> {}", pairs.join(" "))
                }
            })
            .collect()
    }

    /// Produces a structured adjacency dump suitable for serialization.
    pub fn dump(&self, token: &GhostToken<'brand>) -> AdjacencyDump<W>
    where
        W: Clone,
    {
        let vertices = self
            .ids
            .iter()
            .enumerate()
            .map(|(k, &id)| VertexDump {
                id,
                edges: self
                    .adjacency
                    .borrow(token, k)
                    .iter()
                    .map(|e| EdgeDump {
                        target: self.ids[e.target],
                        weight: e.weight.clone(),
                    })
                    .collect(),
            })
            .collect();

        AdjacencyDump { vertices }
    }
}
