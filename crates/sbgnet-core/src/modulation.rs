//! Modulations: directed influence edges onto processes.

use crate::operator::{SourceDef, SourceRef};
use crate::process::ProcessDef;
use crate::types::ProcessId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The influence arc classes of the process description notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModulationClass {
    Modulation,
    Stimulation,
    Catalysis,
    Inhibition,
    NecessaryStimulation,
}

impl ModulationClass {
    /// Class name as written in the textual notation.
    pub fn name(self) -> &'static str {
        match self {
            ModulationClass::Modulation => "Modulation",
            ModulationClass::Stimulation => "Stimulation",
            ModulationClass::Catalysis => "Catalysis",
            ModulationClass::Inhibition => "Inhibition",
            ModulationClass::NecessaryStimulation => "NecessaryStimulation",
        }
    }
}

/// A detached modulation value.
///
/// Structural equality is class + source + target; the identifier never
/// participates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulationDef {
    pub class: ModulationClass,
    pub source: SourceDef,
    pub target: Box<ProcessDef>,
    /// Exchange-format identifier, if known. Excluded from equality.
    pub id: Option<String>,
}

impl ModulationDef {
    pub fn new(class: ModulationClass, source: impl Into<SourceDef>, target: ProcessDef) -> Self {
        Self {
            class,
            source: source.into(),
            target: Box::new(target),
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

impl PartialEq for ModulationDef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ModulationDef {}

impl Ord for ModulationDef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for ModulationDef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ModulationDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Display for ModulationDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} -> {})", self.class.name(), self.source, self.target)
    }
}

/// A canonical modulation stored inside a network. Source and target name
/// the network's own stored elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modulation {
    pub id: String,
    pub class: ModulationClass,
    pub source: SourceRef,
    pub target: ProcessId,
}
