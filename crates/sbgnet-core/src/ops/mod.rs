//! The mutating engines over a [`Network`](crate::network::Network).
//!
//! Each submodule extends `Network` with one family of operations:
//!
//! - [`insert`]: deduplicating insertion (the `add_*` family)
//! - [`remove`]: cascading removal (the `remove_*` family)
//! - [`algebra`]: union, intersection, difference of two networks
//! - [`simplify`]: the gene-expression rewriter

pub mod algebra;
pub mod insert;
pub mod remove;
pub mod simplify;
