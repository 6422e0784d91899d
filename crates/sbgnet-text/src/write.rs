//! Line-oriented writer for the textual notation.

use sbgnet_core::io::NotationWriter;
use sbgnet_core::network::Network;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Writer collaborator emitting the compact textual notation.
///
/// The five collections are written in insertion order (compartments,
/// entities, processes, operators, modulations), one element per line, so
/// output is deterministic and [`parse_network`](crate::parse_network)
/// rebuilds an equal network.
#[derive(Debug, Clone, Copy)]
pub struct SbgnTextWriter;

impl SbgnTextWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SbgnTextWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotationWriter for SbgnTextWriter {
    fn write_network(&self, network: &Network) -> String {
        let mut out = String::new();
        for def in network.compartment_defs() {
            let _ = writeln!(out, "{}", def);
        }
        for def in network.entity_defs() {
            let _ = writeln!(out, "{}", def);
        }
        for def in network.process_defs() {
            let _ = writeln!(out, "{}", def);
        }
        for def in network.lo_defs() {
            let _ = writeln!(out, "{}", def);
        }
        for def in network.modulation_defs() {
            let _ = writeln!(out, "{}", def);
        }
        out
    }
}

/// Write a network to a file in the textual notation.
pub fn write_text_file<P: AsRef<Path>>(path: P, network: &Network) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SbgnTextWriter::new().write_network(network))
}
