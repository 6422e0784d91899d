//! sbgnet-core prelude: convenient imports for common usage.
//!
//! ```rust
//! use sbgnet_core::prelude::*;
//! ```

// Re-export the container and its lookup surface
pub use crate::network::{Network, Query};

// Re-export the element kinds
pub use crate::compartment::{Compartment, CompartmentDef};
pub use crate::entity::{Entity, EntityClass, EntityDef};
pub use crate::modulation::{Modulation, ModulationClass, ModulationDef};
pub use crate::operator::{LogicalOperator, OperatorClass, OperatorDef, SourceDef, SourceRef};
pub use crate::process::{Process, ProcessClass, ProcessDef};

// Re-export shared types
pub use crate::types::{
    CompartmentId, ElementKind, EntityId, ModulationId, OperatorId, ProcessId, UnitOfInformation,
};

// Re-export the collaborator traits
pub use crate::io::{NotationParser, NotationWriter};

// Re-export the topology projection
pub use crate::topology::Topology;

// Re-export error types
pub use crate::error::{NetworkError, ParseError, Result};
