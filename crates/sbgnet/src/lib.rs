//! # sbgnet
//!
//! In-memory networks of SBGN process description elements: entities,
//! processes, modulations, compartments and logical operators, with
//! structural deduplication, cascading removal, network algebra and
//! gene-expression rewriting.
//!
//! ## Quick Start
//!
//! ```rust
//! use sbgnet::prelude::*;
//!
//! // Build from the textual notation...
//! let mut net = parse_network(
//!     "NecessaryStimulation(NucleicAcidFeature([ct:gene]TP53g) -> \
//!      GenericProcess(EmptySet() -> NucleicAcidFeature([ct:mRNA]TP53m)))\n\
//!      NecessaryStimulation(NucleicAcidFeature([ct:mRNA]TP53m) -> \
//!      GenericProcess(EmptySet() -> Macromolecule(TP53)))",
//! )
//! .unwrap();
//!
//! // ...collapse the two-step gene expression...
//! net.simplify_gene_expressions().unwrap();
//!
//! // ...and write it back out.
//! let text = SbgnTextWriter::new().write_network(&net);
//! assert!(text.contains("GenericProcess(EmptySet() -> Macromolecule(TP53))"));
//! ```
//!
//! ## Architecture
//!
//! sbgnet is organized into two library crates:
//!
//! - [`sbgnet_core`]: element kinds, the network container and its
//!   insertion/removal/lookup engines, network algebra, the
//!   gene-expression rewriter and the topology projection
//! - [`sbgnet_text`]: the textual notation parser/writer collaborators
//!   and JSON snapshots

pub use sbgnet_core as core;
pub use sbgnet_text as text;

/// Convenient imports for common usage.
pub mod prelude {
    pub use sbgnet_core::prelude::*;
    pub use sbgnet_text::{
        from_json, parse_network, read_json_file, to_json, write_json_file, write_text_file,
        SbgnTextParser, SbgnTextWriter, TextIoError,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
