//! # `aura` - Token-Protected Weighted Graphs
//!
//! A small toolkit for weighted undirected graphs built on ghost tokens:
//! branded phantom types plus rank-2 polymorphism create protective type
//! boundaries, enabling safe interior mutability without runtime borrow
//! checking.
//!
//! ## Core abstractions
//!
//! 1. **Ghost tokens** ([`GhostToken`]): zero-sized linear capabilities,
//!    branded with a lifetime parameter for type-level separation. Exclusive
//!    access patterns are enforced at compile time.
//! 2. **Ghost cells** ([`GhostCell`]): safe interior mutability through token
//!    gating, with no runtime overhead.
//! 3. **Branded collections** ([`BrandedVec`]): token-gated access to whole
//!    collections; structural changes follow normal `&mut self` rules.
//! 4. **Graphs** ([`GhostWeightedGraph`]): an adjacency-list weighted
//!    undirected graph with classical structural algorithms — iterative DFS
//!    connectivity, completeness checking, Dijkstra shortest path and
//!    Eulerian/Hamiltonian classification.
//!
//! ## Safety guarantees
//!
//! - **Token linearity**: a `GhostToken<'brand>` cannot be duplicated, so at
//!   most one mutable reference to branded data exists at any time.
//! - **Branded separation**: data branded with different `'brand` lifetimes
//!   cannot be accessed with incompatible tokens.
//!
//! ## Example
//!
//! ```rust
//! use aura::{GhostToken, GhostWeightedGraph};
//!
//! GhostToken::new(|mut token| {
//!     let mut graph = GhostWeightedGraph::new();
//!     for id in 1..=3 {
//!         graph.add_vertex(&mut token, id);
//!     }
//!     graph.add_edge(&mut token, 1, 2, 5u64).unwrap();
//!     graph.add_edge(&mut token, 2, 3, 2u64).unwrap();
//!
//!     assert!(graph.is_connected(&token));
//!     assert_eq!(graph.shortest_path(&token, 1, 3).unwrap(), vec![2, 3]);
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod collections;
pub mod error;
pub mod graph;
pub mod token;

pub use cell::GhostCell;
pub use collections::BrandedVec;
pub use error::{GraphError, Result};
pub use graph::{
    AdjacencyDump, EdgeDump, EulerianClass, GhostWeightedGraph, GraphStatistics,
    HamiltonianClass, VertexDump, VertexId,
};
pub use token::GhostToken;

// Compile-time assertions for memory layout claims.
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // `GhostCell` is `repr(transparent)` over `UnsafeCell<T>` (brand is a ZST),
    // therefore it must match size and alignment exactly.
    assert!(
        mem::size_of::<GhostCell<'static, i32>>() == mem::size_of::<core::cell::UnsafeCell<i32>>()
    );
    assert!(
        mem::align_of::<GhostCell<'static, i32>>() == mem::align_of::<core::cell::UnsafeCell<i32>>()
    );
};
