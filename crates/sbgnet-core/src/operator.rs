//! Logical operators: boolean combinators over entities and operators.

use crate::entity::EntityDef;
use crate::types::{EntityId, OperatorId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The logical operator glyph classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OperatorClass {
    And,
    Or,
    Not,
    Delay,
}

impl OperatorClass {
    /// Class name as written in the textual notation.
    pub fn name(self) -> &'static str {
        match self {
            OperatorClass::And => "AndOperator",
            OperatorClass::Or => "OrOperator",
            OperatorClass::Not => "NotOperator",
            OperatorClass::Delay => "DelayOperator",
        }
    }
}

/// Entity-or-operator operand. Modulation sources and operator children both
/// range over this domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceDef {
    Entity(EntityDef),
    Operator(Box<OperatorDef>),
}

impl fmt::Display for SourceDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceDef::Entity(entity) => write!(f, "{}", entity),
            SourceDef::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl From<EntityDef> for SourceDef {
    fn from(entity: EntityDef) -> Self {
        SourceDef::Entity(entity)
    }
}

impl From<OperatorDef> for SourceDef {
    fn from(operator: OperatorDef) -> Self {
        SourceDef::Operator(Box::new(operator))
    }
}

/// A detached logical operator value.
///
/// Structural equality is class + unordered child set: child order is
/// irrelevant and duplicate children collapse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorDef {
    pub class: OperatorClass,
    pub children: Vec<SourceDef>,
    /// Exchange-format identifier, if known. Excluded from equality.
    pub id: Option<String>,
}

impl OperatorDef {
    pub fn new(class: OperatorClass) -> Self {
        Self {
            class,
            children: Vec::new(),
            id: None,
        }
    }

    pub fn with_child(mut self, child: impl Into<SourceDef>) -> Self {
        self.children.push(child.into());
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

    /// Children under set semantics: sorted, duplicates collapsed.
    fn normalized_children(&self) -> Vec<&SourceDef> {
        let mut children: Vec<&SourceDef> = self.children.iter().collect();
        children.sort();
        children.dedup();
        children
    }
}

impl PartialEq for OperatorDef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OperatorDef {}

impl Ord for OperatorDef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| self.normalized_children().cmp(&other.normalized_children()))
    }
}

impl PartialOrd for OperatorDef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for OperatorDef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.normalized_children().hash(state);
    }
}

impl fmt::Display for OperatorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class.name())?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}

/// Entity-or-operator reference inside a network; the stored counterpart of
/// [`SourceDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceRef {
    Entity(EntityId),
    Operator(OperatorId),
}

/// A canonical logical operator stored inside a network. Children name the
/// network's own stored entities and operators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogicalOperator {
    pub id: String,
    pub class: OperatorClass,
    pub children: Vec<SourceRef>,
}

impl LogicalOperator {
    /// Direct operator children.
    pub fn child_operators(&self) -> impl Iterator<Item = OperatorId> + '_ {
        self.children.iter().filter_map(|child| match child {
            SourceRef::Operator(id) => Some(*id),
            SourceRef::Entity(_) => None,
        })
    }

    /// Whether the given reference is a direct child.
    pub fn has_child(&self, child: SourceRef) -> bool {
        self.children.contains(&child)
    }
}
