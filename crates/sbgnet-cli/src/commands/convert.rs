//! Convert input documents into a single network and write it out.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use sbgnet::prelude::*;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The compact textual notation
    Txt,
    /// JSON snapshot of the container
    Json,
    /// Graphviz DOT of the topology projection
    Dot,
}

pub fn run(inputs: &[String], output: Option<&str>, format: Format, simplify: bool) -> Result<()> {
    if inputs.is_empty() {
        bail!("no input files given");
    }

    let mut merged: Option<Network> = None;
    for input in inputs {
        println!("{} Reading {}...", "→".blue(), input);
        let network = read_network(input)?;
        merged = Some(match merged {
            Some(acc) => acc.union(&network),
            None => network,
        });
    }
    let Some(mut network) = merged else {
        bail!("no input files given");
    };

    if simplify {
        let processes_before = network.process_count();
        network
            .simplify_gene_expressions()
            .context("collapsing gene expression patterns")?;
        println!(
            "{} Simplified: {} -> {} processes",
            "→".blue(),
            processes_before,
            network.process_count()
        );
    }

    let rendered = match format {
        Format::Txt => SbgnTextWriter::new().write_network(&network),
        Format::Json => to_json(&network)?,
        Format::Dot => network.to_dot(),
    };

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path))?;
            println!("{} Wrote {}", "✓".green(), path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Read one input document; `.json` snapshots are detected by extension,
/// everything else goes through the textual notation parser.
pub(crate) fn read_network(path: &str) -> Result<Network> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    if Path::new(path).extension().and_then(|e| e.to_str()) == Some("json") {
        Ok(from_json(&text)?)
    } else {
        Ok(parse_network(&text)?)
    }
}
