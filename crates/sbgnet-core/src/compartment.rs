//! Compartments: the named containers entities live in.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A detached compartment value.
///
/// Structural equality is by label alone; exchange-format identifiers do not
/// participate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompartmentDef {
    pub label: String,
    /// Exchange-format identifier, if known. Excluded from equality.
    pub id: Option<String>,
}

impl CompartmentDef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Hash of the structural content, usable as a lookup criterion.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for CompartmentDef {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for CompartmentDef {}

impl Ord for CompartmentDef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}

impl PartialOrd for CompartmentDef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for CompartmentDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl fmt::Display for CompartmentDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compartment({})", self.label)
    }
}

/// A canonical compartment stored inside a network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compartment {
    /// Exchange-format identifier; derived from the network's counter when
    /// the inserted value did not supply one.
    pub id: String,
    pub label: String,
}

impl Compartment {
    pub(crate) fn from_def(def: CompartmentDef, fallback_id: String) -> Self {
        Self {
            id: def.id.unwrap_or(fallback_id),
            label: def.label,
        }
    }

    /// Detached copy of this compartment.
    pub fn to_def(&self) -> CompartmentDef {
        CompartmentDef {
            label: self.label.clone(),
            id: Some(self.id.clone()),
        }
    }
}
