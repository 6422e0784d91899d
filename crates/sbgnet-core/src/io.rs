//! Parser and writer collaborator contracts.
//!
//! The core performs no I/O of its own. Text handed to an `add_*_text` /
//! `remove_*_text` entry point goes through a [`NotationParser`]; exchange
//! documents are produced by a [`NotationWriter`] from the network's public
//! collections. Both are traits so notations can be swapped without
//! touching the container.

use crate::compartment::CompartmentDef;
use crate::entity::EntityDef;
use crate::error::ParseError;
use crate::modulation::ModulationDef;
use crate::network::Network;
use crate::operator::OperatorDef;
use crate::process::ProcessDef;

/// Turns a text fragment into a typed detached value.
///
/// Implementations fail with a [`ParseError`] naming the requested kind;
/// the core propagates that failure unchanged.
pub trait NotationParser {
    fn parse_entity(&self, text: &str) -> Result<EntityDef, ParseError>;
    fn parse_process(&self, text: &str) -> Result<ProcessDef, ParseError>;
    fn parse_modulation(&self, text: &str) -> Result<ModulationDef, ParseError>;
    fn parse_compartment(&self, text: &str) -> Result<CompartmentDef, ParseError>;
    fn parse_lo(&self, text: &str) -> Result<OperatorDef, ParseError>;
}

/// Serializes a network's five collections into an exchange document.
///
/// Writers only read; iteration over the collections is the core's whole
/// write-facing surface.
pub trait NotationWriter {
    fn write_network(&self, network: &Network) -> String;
}
