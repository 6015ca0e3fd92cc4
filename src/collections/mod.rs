//! Branded collections.
//!
//! Containers that own many independently-mutable elements while gating all
//! element access through a single linear token.

pub mod branded_vec;

pub use branded_vec::BrandedVec;
