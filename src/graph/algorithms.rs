//! Structural algorithms for [`GhostWeightedGraph`].
//!
//! All traversals are iterative (explicit stack plus a dense visited vector),
//! so graph size bounds memory, not call depth. The Hamiltonian search is
//! worst-case exponential and only intended for small graphs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Add;

use num_traits::Zero;

use crate::error::Result;
use crate::graph::weighted::{GhostWeightedGraph, VertexId};
use crate::GhostToken;

/// Eulerian classification of a graph, by odd-degree vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum EulerianClass {
    /// No odd-degree vertices: an Eulerian circuit may exist.
    Eulerian,
    /// Exactly two odd-degree vertices: an Eulerian trail may exist.
    SemiEulerian,
    /// Any other odd-degree count.
    NonEulerian,
}

impl std::fmt::Display for EulerianClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Eulerian => "Eulerian",
            Self::SemiEulerian => "Semi-Eulerian",
            Self::NonEulerian => "Non-Eulerian",
        })
    }
}

/// Hamiltonian classification of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum HamiltonianClass {
    /// A simple path covering every vertex exists from some start vertex.
    Hamiltonian,
    /// A walk visiting every vertex and closing back to its start exists.
    SemiHamiltonian,
    /// Neither search succeeded, or the graph has fewer than 3 vertices.
    NonHamiltonian,
}

impl std::fmt::Display for HamiltonianClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hamiltonian => "Hamiltonian",
            Self::SemiHamiltonian => "Semi-Hamiltonian",
            Self::NonHamiltonian => "Non-Hamiltonian",
        })
    }
}

impl<'brand, W> GhostWeightedGraph<'brand, W> {
    /// Checks whether every vertex is reachable from the first inserted one.
    ///
    /// Runs an iterative depth-first traversal from the graph's first vertex
    /// in insertion order and compares the visit count against the vertex
    /// count. The empty graph is vacuously connected.
    pub fn is_connected(&self, token: &GhostToken<'brand>) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return true;
        }

        let mut visited = vec![false; n];
        let mut stack = vec![0usize];
        visited[0] = true;
        let mut count = 1usize;

        while let Some(u) = stack.pop() {
            for e in self.adjacency.borrow(token, u) {
                if !visited[e.target] {
                    visited[e.target] = true;
                    count += 1;
                    stack.push(e.target);
                }
            }
        }

        count == n
    }

    /// Checks whether every pair of distinct vertices is joined by exactly one
    /// mutually-consistent edge.
    ///
    /// For each ordered pair `(u, v)` the check counts records in `u`'s list
    /// targeting `v` whose mirror `(u, same weight)` is present in `v`'s list;
    /// the pair passes iff that count is exactly one. Duplicate parallel edges
    /// therefore fail completeness. Empty and single-vertex graphs trivially
    /// pass. O(V² · E_avg).
    pub fn is_complete(&self, token: &GhostToken<'brand>) -> bool
    where
        W: PartialEq,
    {
        let n = self.vertex_count();
        for u in 0..n {
            for v in 0..n {
                if u != v && !self.has_unique_paired_edge(token, u, v) {
                    return false;
                }
            }
        }
        true
    }

    fn has_unique_paired_edge(&self, token: &GhostToken<'brand>, u: usize, v: usize) -> bool
    where
        W: PartialEq,
    {
        let list_u = self.adjacency.borrow(token, u);
        let list_v = self.adjacency.borrow(token, v);

        let count = list_u
            .iter()
            .filter(|e| {
                e.target == v
                    && list_v
                        .iter()
                        .any(|m| m.target == u && m.weight == e.weight)
            })
            .count();

        count == 1
    }

    /// Computes the shortest path from `start` to `end` using Dijkstra's
    /// algorithm.
    ///
    /// Returns the vertex ids along the path **excluding** `start`, ending in
    /// `end`. If `end` is unreachable (or equals `start`) the path is empty;
    /// that is documented behavior, not an error.
    ///
    /// The frontier is a binary min-heap keyed by tentative distance with lazy
    /// deletion: stale entries are popped and skipped when a shorter distance
    /// has already been recorded. Distances start as `None` ("infinity") and
    /// a relaxation only applies when the new sum is strictly smaller.
    ///
    /// # Preconditions
    /// Weights must be non-negative; negative weights make the result
    /// undefined.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// either endpoint is absent.
    #[tracing::instrument(skip(self, token), level = "debug")]
    pub fn shortest_path(
        &self,
        token: &GhostToken<'brand>,
        start: VertexId,
        end: VertexId,
    ) -> Result<Vec<VertexId>>
    where
        W: Copy + Ord + Add<Output = W> + Zero,
    {
        let s = self.slot(start)?;
        let t = self.slot(end)?;
        let n = self.vertex_count();

        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        let mut heap: BinaryHeap<Reverse<(W, usize)>> = BinaryHeap::new();

        dist[s] = Some(W::zero());
        heap.push(Reverse((W::zero(), s)));

        while let Some(Reverse((d, u))) = heap.pop() {
            // Skip stale entries superseded by a shorter recorded distance.
            if let Some(best) = dist[u] {
                if d > best {
                    continue;
                }
            }

            for e in self.adjacency.borrow(token, u) {
                let candidate = d + e.weight;
                if dist[e.target].map_or(true, |cur| candidate < cur) {
                    dist[e.target] = Some(candidate);
                    pred[e.target] = Some(u);
                    heap.push(Reverse((candidate, e.target)));
                }
            }
        }

        let mut path = Vec::new();
        let mut cur = t;
        while let Some(p) = pred[cur] {
            path.push(self.ids[cur]);
            cur = p;
        }
        path.reverse();

        tracing::debug!(len = path.len(), "shortest path reconstructed");
        Ok(path)
    }

    /// Classifies the graph by odd-degree vertex count.
    ///
    /// Connectivity is deliberately not consulted: a disconnected graph whose
    /// degrees are all even is still reported [`EulerianClass::Eulerian`].
    /// Degrees double-count self-loops, which is the correct convention for
    /// an undirected multigraph-capable structure.
    pub fn eulerian_class(&self, token: &GhostToken<'brand>) -> EulerianClass {
        let odd = self
            .adjacency
            .iter(token)
            .filter(|edges| edges.len() % 2 != 0)
            .count();

        match odd {
            0 => EulerianClass::Eulerian,
            2 => EulerianClass::SemiEulerian,
            _ => EulerianClass::NonEulerian,
        }
    }

    /// Classifies the graph by Hamiltonian path/cycle existence.
    ///
    /// Graphs with fewer than 3 vertices are always
    /// [`HamiltonianClass::NonHamiltonian`]. The first pass searches, from
    /// each start vertex, for a simple path covering all vertices; note that
    /// the path is **not** required to close back to its start, so this pass
    /// is a Hamiltonian *path* test. The second pass requires the walk to
    /// return to its start after visiting every vertex (a genuine cycle
    /// check) and reports [`HamiltonianClass::SemiHamiltonian`]. Both passes
    /// are preserved with these exact semantics.
    ///
    /// Worst-case exponential; intended for small graphs only.
    #[tracing::instrument(skip(self, token), level = "debug")]
    pub fn hamiltonian_class(&self, token: &GhostToken<'brand>) -> HamiltonianClass {
        let n = self.vertex_count();
        if n < 3 {
            return HamiltonianClass::NonHamiltonian;
        }

        for start in 0..n {
            if self.hamiltonian_path_from(token, start) {
                return HamiltonianClass::Hamiltonian;
            }
        }
        for start in 0..n {
            if self.closing_cycle_from(token, start) {
                return HamiltonianClass::SemiHamiltonian;
            }
        }
        HamiltonianClass::NonHamiltonian
    }

    /// Backtracking search for a simple path of `vertex_count` vertices
    /// starting at `start`, using an explicit frame stack of
    /// `(slot, edge cursor)` pairs.
    fn hamiltonian_path_from(&self, token: &GhostToken<'brand>, start: usize) -> bool {
        let n = self.vertex_count();
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some(&(u, cursor)) = stack.last() {
            // Every vertex is on the path; success regardless of closure.
            if stack.len() == n {
                return true;
            }

            let edges = self.adjacency.borrow(token, u);
            let mut pos = cursor;
            let mut next = None;
            while pos < edges.len() {
                let v = edges[pos].target;
                pos += 1;
                if !visited[v] {
                    next = Some(v);
                    break;
                }
            }

            match next {
                Some(v) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.1 = pos;
                    }
                    visited[v] = true;
                    stack.push((v, 0));
                }
                None => {
                    visited[u] = false;
                    stack.pop();
                }
            }
        }
        false
    }

    /// Backtracking search for a walk from `start` that visits every vertex
    /// and then closes back to `start` over an edge.
    fn closing_cycle_from(&self, token: &GhostToken<'brand>, start: usize) -> bool {
        let n = self.vertex_count();
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some(&(u, cursor)) = stack.last() {
            let edges = self.adjacency.borrow(token, u);
            let mut pos = cursor;
            let mut next = None;
            while pos < edges.len() {
                let v = edges[pos].target;
                pos += 1;
                // The path covers all vertices and an edge returns to the
                // start: a closed cycle.
                if v == start && stack.len() == n {
                    return true;
                }
                if !visited[v] {
                    next = Some(v);
                    break;
                }
            }

            match next {
                Some(v) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.1 = pos;
                    }
                    visited[v] = true;
                    stack.push((v, 0));
                }
                None => {
                    visited[u] = false;
                    stack.pop();
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GhostToken;

    fn build<'brand>(
        token: &mut GhostToken<'brand>,
        vertices: &[VertexId],
        edges: &[(VertexId, VertexId, u64)],
    ) -> GhostWeightedGraph<'brand, u64> {
        let mut graph = GhostWeightedGraph::with_capacity(vertices.len());
        for &id in vertices {
            graph.add_vertex(token, id);
        }
        for &(u, v, w) in edges {
            graph.add_edge(token, u, v, w).unwrap();
        }
        graph
    }

    #[test]
    fn empty_graph_is_connected() {
        GhostToken::new(|token| {
            let graph: GhostWeightedGraph<'_, u64> = GhostWeightedGraph::new();
            assert!(graph.is_connected(&token));
        });
    }

    #[test]
    fn star_graph_is_connected() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[(1, 2, 1), (1, 3, 1), (1, 4, 1)],
            );
            assert!(graph.is_connected(&token));
        });
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        GhostToken::new(|mut token| {
            let graph = build(&mut token, &[1, 2, 3], &[(1, 2, 1)]);
            assert!(!graph.is_connected(&token));
        });
    }

    #[test]
    fn k4_is_complete() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[
                    (1, 2, 1),
                    (1, 3, 1),
                    (1, 4, 1),
                    (2, 3, 1),
                    (2, 4, 1),
                    (3, 4, 1),
                ],
            );
            assert!(graph.is_complete(&token));
        });
    }

    #[test]
    fn missing_edge_fails_completeness() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[(1, 2, 1), (1, 3, 1), (1, 4, 1), (2, 3, 1), (2, 4, 1)],
            );
            assert!(!graph.is_complete(&token));
        });
    }

    #[test]
    fn duplicated_edge_fails_completeness() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[
                    (1, 2, 1),
                    (1, 2, 1), // parallel duplicate
                    (1, 3, 1),
                    (1, 4, 1),
                    (2, 3, 1),
                    (2, 4, 1),
                    (3, 4, 1),
                ],
            );
            assert!(!graph.is_complete(&token));
        });
    }

    #[test]
    fn trivial_graphs_are_complete() {
        GhostToken::new(|mut token| {
            let empty: GhostWeightedGraph<'_, u64> = GhostWeightedGraph::new();
            assert!(empty.is_complete(&token));

            let single = build(&mut token, &[1], &[]);
            assert!(single.is_complete(&token));
        });
    }

    #[test]
    fn shortest_path_on_sample_graph() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4, 5, 6],
                &[
                    (1, 2, 5),
                    (2, 3, 7),
                    (1, 3, 3),
                    (3, 5, 1),
                    (3, 4, 10),
                    (2, 4, 2),
                    (4, 5, 2),
                    (5, 6, 20),
                ],
            );

            // 1 -> 3 (3) -> 5 (1) -> 4 (2), total 6; beats 1 -> 2 -> 4 = 7.
            let path = graph.shortest_path(&token, 1, 4).unwrap();
            assert_eq!(path, vec![3, 5, 4]);

            let total: u64 = {
                let mut prev = 1;
                let mut sum = 0;
                for &next in &path {
                    sum += graph.edge_weight(&token, prev, next).unwrap();
                    prev = next;
                }
                sum
            };
            assert_eq!(total, 6);
        });
    }

    #[test]
    fn unreachable_end_yields_empty_path() {
        GhostToken::new(|mut token| {
            let graph = build(&mut token, &[1, 2, 3], &[(1, 2, 1)]);
            assert_eq!(graph.shortest_path(&token, 1, 3).unwrap(), Vec::<u32>::new());
        });
    }

    #[test]
    fn start_equals_end_yields_empty_path() {
        GhostToken::new(|mut token| {
            let graph = build(&mut token, &[1, 2], &[(1, 2, 1)]);
            assert_eq!(graph.shortest_path(&token, 1, 1).unwrap(), Vec::<u32>::new());
        });
    }

    #[test]
    fn shortest_path_unknown_endpoint_errors() {
        GhostToken::new(|mut token| {
            let graph = build(&mut token, &[1, 2], &[(1, 2, 1)]);
            assert_eq!(
                graph.shortest_path(&token, 1, 9).unwrap_err(),
                crate::GraphError::VertexNotFound(9)
            );
            assert_eq!(
                graph.shortest_path(&token, 9, 1).unwrap_err(),
                crate::GraphError::VertexNotFound(9)
            );
        });
    }

    #[test]
    fn cycle_graph_is_eulerian() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[(1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 1, 1)],
            );
            assert_eq!(graph.eulerian_class(&token), EulerianClass::Eulerian);
        });
    }

    #[test]
    fn path_graph_is_semi_eulerian() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[(1, 2, 1), (2, 3, 1), (3, 4, 1)],
            );
            assert_eq!(graph.eulerian_class(&token), EulerianClass::SemiEulerian);
        });
    }

    #[test]
    fn star_graph_is_non_eulerian() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[(1, 2, 1), (1, 3, 1), (1, 4, 1)],
            );
            assert_eq!(graph.eulerian_class(&token), EulerianClass::NonEulerian);
        });
    }

    #[test]
    fn disconnected_even_degrees_still_report_eulerian() {
        GhostToken::new(|mut token| {
            // Two disjoint triangles; all degrees even, no spanning circuit.
            let graph = build(
                &mut token,
                &[1, 2, 3, 4, 5, 6],
                &[
                    (1, 2, 1),
                    (2, 3, 1),
                    (3, 1, 1),
                    (4, 5, 1),
                    (5, 6, 1),
                    (6, 4, 1),
                ],
            );
            assert_eq!(graph.eulerian_class(&token), EulerianClass::Eulerian);
        });
    }

    #[test]
    fn small_graphs_are_non_hamiltonian() {
        GhostToken::new(|mut token| {
            let two = build(&mut token, &[1, 2], &[(1, 2, 1)]);
            assert_eq!(
                two.hamiltonian_class(&token),
                HamiltonianClass::NonHamiltonian
            );
        });
    }

    #[test]
    fn k4_is_hamiltonian() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[
                    (1, 2, 1),
                    (1, 3, 1),
                    (1, 4, 1),
                    (2, 3, 1),
                    (2, 4, 1),
                    (3, 4, 1),
                ],
            );
            assert_eq!(
                graph.hamiltonian_class(&token),
                HamiltonianClass::Hamiltonian
            );
        });
    }

    #[test]
    fn path_graph_counts_as_hamiltonian_under_path_semantics() {
        GhostToken::new(|mut token| {
            // The first pass only tests Hamiltonian *path* existence, so a
            // plain path graph already classifies as Hamiltonian.
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[(1, 2, 1), (2, 3, 1), (3, 4, 1)],
            );
            assert_eq!(
                graph.hamiltonian_class(&token),
                HamiltonianClass::Hamiltonian
            );
        });
    }

    #[test]
    fn star_graph_is_non_hamiltonian() {
        GhostToken::new(|mut token| {
            let graph = build(
                &mut token,
                &[1, 2, 3, 4],
                &[(1, 2, 1), (1, 3, 1), (1, 4, 1)],
            );
            assert_eq!(
                graph.hamiltonian_class(&token),
                HamiltonianClass::NonHamiltonian
            );
        });
    }

    #[test]
    fn classification_displays() {
        assert_eq!(EulerianClass::SemiEulerian.to_string(), "Semi-Eulerian");
        assert_eq!(
            HamiltonianClass::NonHamiltonian.to_string(),
            "Non-Hamiltonian"
        );
    }
}
