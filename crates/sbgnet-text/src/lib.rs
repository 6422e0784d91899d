//! # sbgnet Text
//!
//! The textual notation collaborators for sbgnet networks: a nom-based
//! [`SbgnTextParser`] implementing the core's `NotationParser` contract, a
//! line-oriented [`SbgnTextWriter`] implementing `NotationWriter`, and a
//! serde/JSON snapshot for interchange with other tooling.
//!
//! ## Notation
//!
//! One element per line; nested elements use the same syntax everywhere.
//! Blank lines and `#` comments are ignored by [`parse_network`].
//!
//! ```text
//! Compartment(cytosol)
//! Macromolecule(TP53@cytosol)
//! NucleicAcidFeature([ct:mRNA]TP53m)
//! EmptySet()
//! GenericProcess(EmptySet() -> Macromolecule(TP53))
//! AndOperator(Macromolecule(A)|Macromolecule(B))
//! NecessaryStimulation(NucleicAcidFeature([ct:gene]TP53g) -> GenericProcess(EmptySet() -> NucleicAcidFeature([ct:mRNA]TP53m)))
//! ```
//!
//! Labels may not contain the reserved punctuation `( ) [ ] @ | , +`.

pub mod parse;
pub mod snapshot;
pub mod write;

pub use parse::{parse_network, SbgnTextParser};
pub use snapshot::{from_json, read_json_file, to_json, write_json_file, TextIoError};
pub use write::{write_text_file, SbgnTextWriter};
