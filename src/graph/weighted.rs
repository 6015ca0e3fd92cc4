//! A dynamic adjacency-list weighted undirected graph.
//!
//! This representation prioritizes **dynamic updates** (vertex/edge insertion,
//! vertex deletion) while preserving the crate's ghost-token aliasing
//! discipline:
//! - adjacency lists are stored as token-gated cells inside a `BrandedVec`
//! - reading requires `&GhostToken<'brand>`
//! - mutation requires `&mut GhostToken<'brand>`
//!
//! Vertices are identified by an external integer id and resolved through an
//! explicit registry (insertion-ordered id list plus an id → slot lookup
//! table), so every operation that references a vertex either succeeds or
//! fails with [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound).

use std::collections::HashMap;

use crate::collections::BrandedVec;
use crate::error::{GraphError, Result};
use crate::GhostToken;

/// External vertex identifier.
pub type VertexId = u32;

/// An adjacency record: the internal slot of the neighbor plus the edge weight.
///
/// Undirected edges are dual-stored: one `add_edge` call creates the record in
/// both endpoint lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge<W> {
    pub(crate) target: usize,
    pub(crate) weight: W,
}

/// A weighted undirected graph whose adjacency lists are branded.
///
/// Insertion order of vertices, and of edges within a vertex's list, is
/// preserved and observable: it drives iteration order, rendering and the
/// tie-breaking of the traversal-based algorithms.
///
/// ### Performance characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to internal vectors |
/// | `add_edge` | \(O(1)\) amortized | Appends both mirror records |
/// | `remove_vertex` | \(O(n + m)\) | Scans all adjacency lists |
/// | `degree` | \(O(1)\) | Adjacency-list length |
/// | `edge_count` | \(O(n)\) | Sums list lengths |
pub struct GhostWeightedGraph<'brand, W> {
    pub(crate) adjacency: BrandedVec<'brand, Vec<Edge<W>>>,
    pub(crate) ids: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
}

impl<'brand, W> GhostWeightedGraph<'brand, W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BrandedVec::new(),
            ids: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty graph with capacity for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            adjacency: BrandedVec::with_capacity(vertex_count),
            ids: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
        }
    }

    /// Resolves an external id to its internal slot.
    pub(crate) fn slot(&self, id: VertexId) -> Result<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Inserts a vertex with an empty edge list.
    ///
    /// Re-adding an existing id resets its edge list to empty (map-insert
    /// overwrite semantics); mirror records held by other vertices are left
    /// untouched. Never errors.
    pub fn add_vertex(&mut self, token: &mut GhostToken<'brand>, id: VertexId) {
        if let Some(&k) = self.index.get(&id) {
            self.adjacency.borrow_mut(token, k).clear();
        } else {
            let k = self.adjacency.len();
            self.adjacency.push(Vec::new());
            self.ids.push(id);
            self.index.insert(id, k);
        }
    }

    /// Adds an undirected edge between `u` and `v` with the given weight.
    ///
    /// Appends `(v, weight)` to `u`'s list and `(u, weight)` to `v`'s list in
    /// one call. Self-loops and parallel edges are not rejected; both lists
    /// are validated before either is touched, so a failed call leaves the
    /// graph unchanged.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is unregistered.
    pub fn add_edge(
        &self,
        token: &mut GhostToken<'brand>,
        u: VertexId,
        v: VertexId,
        weight: W,
    ) -> Result<()>
    where
        W: Copy,
    {
        let su = self.slot(u)?;
        let sv = self.slot(v)?;

        self.adjacency.borrow_mut(token, su).push(Edge {
            target: sv,
            weight,
        });
        self.adjacency.borrow_mut(token, sv).push(Edge {
            target: su,
            weight,
        });
        Ok(())
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// Deletes the vertex's slot, scrubs all remaining adjacency lists of
    /// records targeting it, and compacts internal slot indices. Since
    /// undirected edges are dual-stored, scrubbing the target side fully
    /// eliminates the vertex from the structure.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is absent.
    pub fn remove_vertex(&mut self, token: &mut GhostToken<'brand>, id: VertexId) -> Result<()> {
        let k = self.slot(id)?;
        tracing::trace!(id, slot = k, "removing vertex");

        self.adjacency.remove(k);
        self.ids.remove(k);
        self.index.remove(&id);

        // Drop records that targeted the removed slot, then shift the
        // indices that the removal compacted.
        self.adjacency.for_each_mut(token, |edges| {
            edges.retain(|e| e.target != k);
            for e in edges.iter_mut() {
                if e.target > k {
                    e.target -= 1;
                }
            }
        });

        for (i, vid) in self.ids.iter().enumerate().skip(k) {
            self.index.insert(*vid, i);
        }
        Ok(())
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored edge records.
    ///
    /// Each undirected edge contributes two records (one per endpoint).
    pub fn edge_count(&self, token: &GhostToken<'brand>) -> usize {
        self.adjacency.iter(token).map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `id` is registered.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the degree of a vertex (its adjacency-list length).
    ///
    /// A self-loop contributes two to the degree, as both of its mirror
    /// records land in the same list.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is absent.
    pub fn degree(&self, token: &GhostToken<'brand>, id: VertexId) -> Result<usize> {
        let k = self.slot(id)?;
        Ok(self.adjacency.borrow(token, k).len())
    }

    /// Iterates over vertex ids in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Iterates over the neighbors of `id` as `(neighbor id, weight)` pairs,
    /// in edge insertion order.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is absent.
    pub fn neighbors<'a>(
        &'a self,
        token: &'a GhostToken<'brand>,
        id: VertexId,
    ) -> Result<impl Iterator<Item = (VertexId, W)> + 'a>
    where
        W: Copy,
    {
        let k = self.slot(id)?;
        Ok(self
            .adjacency
            .borrow(token, k)
            .iter()
            .map(move |e| (self.ids[e.target], e.weight)))
    }

    /// Checks whether at least one edge connects `u` and `v`.
    ///
    /// Returns `false` if either endpoint is unregistered.
    pub fn has_edge(&self, token: &GhostToken<'brand>, u: VertexId, v: VertexId) -> bool
    where
        W: Copy,
    {
        self.edge_weight(token, u, v).is_some()
    }

    /// Returns the weight of the first stored edge record from `u` to `v`.
    pub fn edge_weight(&self, token: &GhostToken<'brand>, u: VertexId, v: VertexId) -> Option<W>
    where
        W: Copy,
    {
        let su = self.slot(u).ok()?;
        let sv = self.slot(v).ok()?;
        self.adjacency
            .borrow(token, su)
            .iter()
            .find(|e| e.target == sv)
            .map(|e| e.weight)
    }

    /// Computes basic degree statistics.
    pub fn statistics(&self, token: &GhostToken<'brand>) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count(token);

        let mut degrees: Vec<usize> = self.adjacency.iter(token).map(Vec::len).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match degrees.as_slice() {
            [] => (0, 0),
            [first, .., last] => (*first, *last),
            [only] => (*only, *only),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if vertex_count == 0 {
                0.0
            } else {
                edge_count as f64 / vertex_count as f64
            },
        }
    }
}

impl<'brand, W> Default for GhostWeightedGraph<'brand, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Degree statistics about a graph.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of stored edge records (two per undirected edge).
    pub edge_count: usize,
    /// Minimum degree over all vertices.
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Median degree over all vertices.
    pub median_degree: usize,
    /// Average degree \(= m/n\).
    pub average_degree: f64,
}
