//! Show collection and view counts for an input document.

use anyhow::Result;
use colored::Colorize;

use super::convert::read_network;

pub fn run(input: &str) -> Result<()> {
    let network = read_network(input)?;

    println!("{}", "Network statistics".bold());
    println!("  entities:          {}", network.entity_count());
    println!("  processes:         {}", network.process_count());
    println!("  modulations:       {}", network.modulation_count());
    println!("  compartments:      {}", network.compartment_count());
    println!("  logical operators: {}", network.lo_count());
    println!();
    println!("{}", "Views".bold());
    println!("  macromolecules:    {}", network.macromolecules().len());
    println!("  associations:      {}", network.associations().len());
    println!("  transcriptions:    {}", network.transcriptions().len());
    println!("  translations:      {}", network.translations().len());

    Ok(())
}
