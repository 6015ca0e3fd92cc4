//! Graph layouts and algorithms designed to compose with ghost-token scopes.
//!
//! The module tree is intentionally small:
//! - `weighted`: the adjacency-list weighted undirected graph
//! - `algorithms`: connectivity, completeness, Dijkstra and
//!   Eulerian/Hamiltonian classification
//! - `render`: pure textual and structured dumps

pub mod algorithms;
pub mod render;
pub mod weighted;

pub use algorithms::{EulerianClass, HamiltonianClass};
pub use render::{AdjacencyDump, EdgeDump, VertexDump};
pub use weighted::{GhostWeightedGraph, GraphStatistics, VertexId};
