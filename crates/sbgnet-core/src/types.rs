//! Shared types used across the sbgnet crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generates a typed handle into one of the network's collections.
///
/// Handles are plain u32 indices minted by the owning [`Network`]; they are
/// meaningless outside the network that issued them.
///
/// [`Network`]: crate::network::Network
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub(crate) u32);

        impl $name {
            /// The raw index behind this handle.
            pub fn raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id! {
    /// Handle to a stored entity.
    EntityId
}
define_id! {
    /// Handle to a stored process.
    ProcessId
}
define_id! {
    /// Handle to a stored modulation.
    ModulationId
}
define_id! {
    /// Handle to a stored compartment.
    CompartmentId
}
define_id! {
    /// Handle to a stored logical operator.
    OperatorId
}

/// Discriminant over the five element kinds a network stores.
///
/// Used by errors and by the parser collaborator contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Entity,
    Process,
    Modulation,
    Compartment,
    LogicalOperator,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Entity => "entity",
            ElementKind::Process => "process",
            ElementKind::Modulation => "modulation",
            ElementKind::Compartment => "compartment",
            ElementKind::LogicalOperator => "logical operator",
        };
        write!(f, "{}", name)
    }
}

/// A unit-of-information annotation on an entity.
///
/// In the process description notation these mark what an entity glyph
/// represents, e.g. `ct:gene` or `ct:mRNA` on a nucleic-acid feature.
/// Entities carry a *set* of these: order is irrelevant and duplicates
/// collapse under structural equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitOfInformation {
    pub prefix: Option<String>,
    pub value: String,
}

impl UnitOfInformation {
    /// A prefixed annotation, e.g. `UnitOfInformation::new("ct", "mRNA")`.
    pub fn new(prefix: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            value: value.into(),
        }
    }

    /// An annotation with no prefix.
    pub fn untyped(value: impl Into<String>) -> Self {
        Self {
            prefix: None,
            value: value.into(),
        }
    }

    /// Whether this annotation has the given prefix and value.
    pub fn is(&self, prefix: &str, value: &str) -> bool {
        self.prefix.as_deref() == Some(prefix) && self.value == value
    }
}

impl fmt::Display for UnitOfInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_of_information_display() {
        assert_eq!(UnitOfInformation::new("ct", "mRNA").to_string(), "ct:mRNA");
        assert_eq!(UnitOfInformation::untyped("receptor").to_string(), "receptor");
    }

    #[test]
    fn unit_of_information_is() {
        let ui = UnitOfInformation::new("ct", "gene");
        assert!(ui.is("ct", "gene"));
        assert!(!ui.is("ct", "mRNA"));
        assert!(!UnitOfInformation::untyped("gene").is("ct", "gene"));
    }
}
