//! Processes: transformation nodes connecting reactants to products.

use crate::entity::EntityDef;
use crate::types::EntityId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The process glyph classes of the process description notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProcessClass {
    Generic,
    Association,
    Dissociation,
}

impl ProcessClass {
    /// Class name as written in the textual notation.
    pub fn name(self) -> &'static str {
        match self {
            ProcessClass::Generic => "GenericProcess",
            ProcessClass::Association => "Association",
            ProcessClass::Dissociation => "Dissociation",
        }
    }
}

/// A detached process value.
///
/// Structural equality is class + reactant multiset + product multiset.
/// Labels and identifiers do not participate; the stored order of each side
/// is preserved for output determinism but irrelevant to identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDef {
    pub class: ProcessClass,
    pub label: Option<String>,
    pub reactants: Vec<EntityDef>,
    pub products: Vec<EntityDef>,
    /// Exchange-format identifier, if known. Excluded from equality.
    pub id: Option<String>,
}

impl ProcessDef {
    pub fn new(class: ProcessClass) -> Self {
        Self {
            class,
            label: None,
            reactants: Vec::new(),
            products: Vec::new(),
            id: None,
        }
    }

    /// A generic process, the common case.
    pub fn generic() -> Self {
        Self::new(ProcessClass::Generic)
    }

    pub fn with_reactant(mut self, reactant: EntityDef) -> Self {
        self.reactants.push(reactant);
        self
    }

    pub fn with_product(mut self, product: EntityDef) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
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

    /// One side under multiset semantics: sorted, duplicates kept.
    fn normalized(side: &[EntityDef]) -> Vec<&EntityDef> {
        let mut entities: Vec<&EntityDef> = side.iter().collect();
        entities.sort();
        entities
    }
}

impl PartialEq for ProcessDef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ProcessDef {}

impl Ord for ProcessDef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| {
                Self::normalized(&self.reactants).cmp(&Self::normalized(&other.reactants))
            })
            .then_with(|| Self::normalized(&self.products).cmp(&Self::normalized(&other.products)))
    }
}

impl PartialOrd for ProcessDef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ProcessDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        Self::normalized(&self.reactants).hash(state);
        Self::normalized(&self.products).hash(state);
    }
}

impl fmt::Display for ProcessDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class.name())?;
        for (i, reactant) in self.reactants.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", reactant)?;
        }
        write!(f, " -> ")?;
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", product)?;
        }
        write!(f, ")")
    }
}

/// A canonical process stored inside a network. Reactants and products name
/// the network's own stored entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    pub id: String,
    pub class: ProcessClass,
    pub label: Option<String>,
    pub reactants: Vec<EntityId>,
    pub products: Vec<EntityId>,
}

impl Process {
    /// Whether the given entity appears on either side.
    pub fn touches(&self, entity: EntityId) -> bool {
        self.reactants.contains(&entity) || self.products.contains(&entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_compare_as_multisets() {
        let a = ProcessDef::generic()
            .with_reactant(EntityDef::macromolecule("A"))
            .with_reactant(EntityDef::macromolecule("B"))
            .with_product(EntityDef::macromolecule("AB"));
        let b = ProcessDef::generic()
            .with_reactant(EntityDef::macromolecule("B"))
            .with_reactant(EntityDef::macromolecule("A"))
            .with_product(EntityDef::macromolecule("AB"));
        assert_eq!(a, b);
        assert_eq!(a.structural_hash(), b.structural_hash());
    }

    #[test]
    fn duplicate_reactants_do_not_collapse() {
        let one = ProcessDef::generic()
            .with_reactant(EntityDef::macromolecule("A"))
            .with_product(EntityDef::macromolecule("A2"));
        let two = ProcessDef::generic()
            .with_reactant(EntityDef::macromolecule("A"))
            .with_reactant(EntityDef::macromolecule("A"))
            .with_product(EntityDef::macromolecule("A2"));
        assert_ne!(one, two);
    }

    #[test]
    fn label_excluded_from_equality() {
        let a = ProcessDef::generic().with_product(EntityDef::macromolecule("X"));
        let b = ProcessDef::generic()
            .with_product(EntityDef::macromolecule("X"))
            .with_label("production");
        assert_eq!(a, b);
    }

    #[test]
    fn display_notation() {
        let p = ProcessDef::generic()
            .with_reactant(EntityDef::empty_set())
            .with_product(EntityDef::macromolecule("TP53"));
        assert_eq!(p.to_string(), "GenericProcess(EmptySet() -> Macromolecule(TP53))");
    }
}
