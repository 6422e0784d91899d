//! # sbgnet Core
//!
//! Element kinds and the network container for SBGN process description
//! maps.
//!
//! A [`Network`](network::Network) owns five insertion-ordered collections
//! (entities, processes, modulations, compartments, logical operators)
//! that behave as structurally deduplicated sets. On top of it sit:
//!
//! - **Insertion**: the `add_*` family interns elements; structurally
//!   equal values merge, nested references are rewritten to the network's
//!   canonical instances ([`ops::insert`])
//! - **Removal**: the `remove_*` family cascades so that nothing ever
//!   references a removed element ([`ops::remove`])
//! - **Lookup**: linear multi-criteria scans over each collection
//!   ([`network::Query`])
//! - **Algebra**: union, intersection and difference of two networks over
//!   deep-copied operands ([`ops::algebra`])
//! - **Rewriting**: collapsing transcription/translation patterns into
//!   direct production steps ([`ops::simplify`])
//! - **Views**: computed projections such as macromolecules and
//!   transcriptions, plus a petgraph topology projection ([`topology`])
//!
//! Parsing and writing of exchange notations is delegated to the
//! collaborator traits in [`io`]; the `sbgnet-text` crate provides the
//! textual notation implementation.
//!
//! ## Quick Start
//!
//! ```rust
//! use sbgnet_core::prelude::*;
//!
//! let mut net = Network::new();
//!
//! // Interning: equal structures collapse to one canonical instance.
//! let a = net.add_entity(EntityDef::macromolecule("TP53"));
//! let b = net.add_entity(EntityDef::macromolecule("TP53"));
//! assert_eq!(a, b);
//!
//! // Nested references are canonicalized on insertion.
//! net.add_process(
//!     ProcessDef::generic()
//!         .with_reactant(EntityDef::macromolecule("TP53"))
//!         .with_product(EntityDef::macromolecule("TP53*")),
//! );
//! assert_eq!(net.entity_count(), 2);
//!
//! // Removal cascades: no dangling references survive.
//! net.remove_entity(a).unwrap();
//! assert_eq!(net.process_count(), 0);
//! ```

pub mod compartment;
pub mod entity;
pub mod error;
pub mod io;
pub mod modulation;
pub mod network;
pub mod operator;
pub mod ops;
pub mod prelude;
pub mod process;
pub mod topology;
pub mod types;
