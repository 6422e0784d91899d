//! Entities: the biological object nodes of a map.

use crate::compartment::CompartmentDef;
use crate::types::{CompartmentId, UnitOfInformation};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The entity pool glyph classes of the process description notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityClass {
    Unspecified,
    SimpleChemical,
    Macromolecule,
    NucleicAcidFeature,
    Complex,
    /// The source/sink marker. Carries no attributes by construction.
    EmptySet,
    PerturbingAgent,
}

impl EntityClass {
    /// Class name as written in the textual notation.
    pub fn name(self) -> &'static str {
        match self {
            EntityClass::Unspecified => "UnspecifiedEntity",
            EntityClass::SimpleChemical => "SimpleChemical",
            EntityClass::Macromolecule => "Macromolecule",
            EntityClass::NucleicAcidFeature => "NucleicAcidFeature",
            EntityClass::Complex => "Complex",
            EntityClass::EmptySet => "EmptySet",
            EntityClass::PerturbingAgent => "PerturbingAgent",
        }
    }
}

/// A detached entity value: what the parser collaborator returns, what
/// callers build, and what the algebraic combinator copies across networks.
///
/// Structural equality is class + label + compartment + annotation set; the
/// exchange-format identifier never participates. Annotations compare with
/// set semantics (order irrelevant, duplicates collapse).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDef {
    pub class: EntityClass,
    pub label: Option<String>,
    pub compartment: Option<CompartmentDef>,
    pub uis: Vec<UnitOfInformation>,
    /// Exchange-format identifier, if known. Excluded from equality.
    pub id: Option<String>,
}

impl EntityDef {
    pub fn new(class: EntityClass) -> Self {
        Self {
            class,
            label: None,
            compartment: None,
            uis: Vec::new(),
            id: None,
        }
    }

    /// A labeled macromolecule.
    pub fn macromolecule(label: impl Into<String>) -> Self {
        Self::new(EntityClass::Macromolecule).with_label(label)
    }

    /// A labeled nucleic-acid feature.
    pub fn nucleic_acid_feature(label: impl Into<String>) -> Self {
        Self::new(EntityClass::NucleicAcidFeature).with_label(label)
    }

    /// The source/sink marker.
    pub fn empty_set() -> Self {
        Self::new(EntityClass::EmptySet)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn in_compartment(mut self, compartment: CompartmentDef) -> Self {
        self.compartment = Some(compartment);
        self
    }

    pub fn with_ui(mut self, ui: UnitOfInformation) -> Self {
        self.uis.push(ui);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether this entity carries the given prefixed annotation.
    pub fn has_ui(&self, prefix: &str, value: &str) -> bool {
        self.uis.iter().any(|ui| ui.is(prefix, value))
    }

    /// Hash of the structural content, usable as a lookup criterion.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Annotations under set semantics: sorted, duplicates collapsed.
    fn normalized_uis(&self) -> Vec<&UnitOfInformation> {
        let mut uis: Vec<&UnitOfInformation> = self.uis.iter().collect();
        uis.sort();
        uis.dedup();
        uis
    }
}

impl PartialEq for EntityDef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EntityDef {}

impl Ord for EntityDef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.compartment.cmp(&other.compartment))
            .then_with(|| self.normalized_uis().cmp(&other.normalized_uis()))
    }
}

impl PartialOrd for EntityDef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for EntityDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.label.hash(state);
        self.compartment.hash(state);
        self.normalized_uis().hash(state);
    }
}

impl fmt::Display for EntityDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class.name())?;
        if !self.uis.is_empty() {
            write!(f, "[")?;
            for (i, ui) in self.normalized_uis().iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", ui)?;
            }
            write!(f, "]")?;
        }
        if let Some(label) = &self.label {
            write!(f, "{}", label)?;
        }
        if let Some(compartment) = &self.compartment {
            write!(f, "@{}", compartment.label)?;
        }
        write!(f, ")")
    }
}

/// A canonical entity stored inside a network. The compartment reference
/// names the network's own stored compartment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub class: EntityClass,
    pub label: Option<String>,
    pub compartment: Option<CompartmentId>,
    pub uis: Vec<UnitOfInformation>,
}

impl Entity {
    /// Whether this entity carries the given prefixed annotation.
    pub fn has_ui(&self, prefix: &str, value: &str) -> bool {
        self.uis.iter().any(|ui| ui.is(prefix, value))
    }
}
