//! JSON snapshots of a network.
//!
//! The snapshot is the container's serde form: the five collections with
//! their handles and the id counter, so a reloaded network resumes exactly
//! where the saved one stopped.

use sbgnet_core::network::Network;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors from the JSON snapshot helpers.
#[derive(Debug)]
pub enum TextIoError {
    /// Serialization or deserialization failure.
    Json(String),
    /// Filesystem failure.
    Io(String),
}

impl fmt::Display for TextIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextIoError::Json(msg) => write!(f, "JSON error: {}", msg),
            TextIoError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for TextIoError {}

impl From<serde_json::Error> for TextIoError {
    fn from(e: serde_json::Error) -> Self {
        TextIoError::Json(e.to_string())
    }
}

impl From<std::io::Error> for TextIoError {
    fn from(e: std::io::Error) -> Self {
        TextIoError::Io(e.to_string())
    }
}

/// Serialize a network to pretty-printed JSON.
pub fn to_json(network: &Network) -> Result<String, TextIoError> {
    Ok(serde_json::to_string_pretty(network)?)
}

/// Deserialize a network from JSON.
pub fn from_json(text: &str) -> Result<Network, TextIoError> {
    Ok(serde_json::from_str(text)?)
}

/// Write a JSON snapshot to a file.
pub fn write_json_file<P: AsRef<Path>>(path: P, network: &Network) -> Result<(), TextIoError> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(network)?)?;
    Ok(())
}

/// Read a JSON snapshot from a file.
pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Network, TextIoError> {
    let text = fs::read_to_string(path)?;
    from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbgnet_core::prelude::*;

    fn sample() -> Network {
        let mut net = Network::new();
        net.add_modulation(ModulationDef::new(
            ModulationClass::Catalysis,
            EntityDef::macromolecule("E"),
            ProcessDef::generic()
                .with_reactant(EntityDef::macromolecule("S"))
                .with_product(EntityDef::macromolecule("P")),
        ));
        net
    }

    #[test]
    fn json_snapshot_round() {
        let net = sample();
        let json = to_json(&net).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, net);
        // Handles survive, so a restored network keeps minting fresh ones.
        let mut restored = restored;
        let extra = restored.add_entity(EntityDef::macromolecule("Q"));
        assert!(restored.entity(extra).is_some());
    }

    #[test]
    fn file_helpers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.json");
        let net = sample();
        write_json_file(&path, &net).unwrap();
        let restored = read_json_file(&path).unwrap();
        assert_eq!(restored, net);
    }
}
