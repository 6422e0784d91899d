//! The deduplicating insertion engine.
//!
//! Every `add_*` operation interns: if a structurally equal element is
//! already stored the network is unchanged and the canonical id comes back;
//! otherwise nested dependencies are interned recursively, the incoming
//! value's references are rewritten to canonical ids, and the element is
//! appended. Re-adding a structurally equal value is therefore a no-op.

use crate::compartment::{Compartment, CompartmentDef};
use crate::entity::{Entity, EntityDef};
use crate::error::Result;
use crate::io::NotationParser;
use crate::modulation::{Modulation, ModulationDef};
use crate::network::Network;
use crate::operator::{LogicalOperator, OperatorDef, SourceDef, SourceRef};
use crate::process::{Process, ProcessDef};
use crate::types::{CompartmentId, EntityId, ModulationId, OperatorId, ProcessId};
use log::debug;

impl Network {
    /// Intern a compartment. Returns the canonical id.
    pub fn add_compartment(&mut self, def: CompartmentDef) -> CompartmentId {
        if let Some(existing) = self.get_compartment_structural(&def) {
            debug!("add_compartment: {} already stored", def);
            return existing;
        }
        let raw = self.alloc();
        let id = CompartmentId(raw);
        let fallback = format!("comp_{}", raw);
        self.compartments
            .insert(id, Compartment::from_def(def, fallback));
        id
    }

    /// Intern an entity, interning its compartment first when it declares
    /// one. Returns the canonical id.
    pub fn add_entity(&mut self, def: EntityDef) -> EntityId {
        if let Some(existing) = self.get_entity_structural(&def) {
            debug!("add_entity: {} already stored", def);
            return existing;
        }
        let EntityDef {
            class,
            label,
            compartment,
            uis,
            id: supplied_id,
        } = def;
        let compartment = compartment.map(|c| self.add_compartment(c));
        let raw = self.alloc();
        let id = EntityId(raw);
        self.entities.insert(
            id,
            Entity {
                id: supplied_id.unwrap_or_else(|| format!("epn_{}", raw)),
                class,
                label,
                compartment,
                uis,
            },
        );
        id
    }

    /// Intern a process, interning every reactant and product and rewriting
    /// both sides to canonical ids. Returns the canonical id.
    pub fn add_process(&mut self, def: ProcessDef) -> ProcessId {
        if let Some(existing) = self.get_process_structural(&def) {
            debug!("add_process: {} already stored", def);
            return existing;
        }
        let ProcessDef {
            class,
            label,
            reactants,
            products,
            id: supplied_id,
        } = def;
        let reactants = reactants.into_iter().map(|e| self.add_entity(e)).collect();
        let products = products.into_iter().map(|e| self.add_entity(e)).collect();
        let raw = self.alloc();
        let id = ProcessId(raw);
        self.processes.insert(
            id,
            Process {
                id: supplied_id.unwrap_or_else(|| format!("proc_{}", raw)),
                class,
                label,
                reactants,
                products,
            },
        );
        id
    }

    /// Intern a logical operator, interning every child recursively.
    /// Returns the canonical id.
    pub fn add_lo(&mut self, def: OperatorDef) -> OperatorId {
        if let Some(existing) = self.get_lo_structural(&def) {
            debug!("add_lo: {} already stored", def);
            return existing;
        }
        let OperatorDef {
            class,
            children,
            id: supplied_id,
        } = def;
        let children = children
            .into_iter()
            .map(|child| self.intern_source(child))
            .collect();
        let raw = self.alloc();
        let id = OperatorId(raw);
        self.los.insert(
            id,
            LogicalOperator {
                id: supplied_id.unwrap_or_else(|| format!("op_{}", raw)),
                class,
                children,
            },
        );
        id
    }

    /// Intern a modulation, interning its source (entity or operator) and
    /// its target process. Returns the canonical id.
    pub fn add_modulation(&mut self, def: ModulationDef) -> ModulationId {
        if let Some(existing) = self.get_modulation_structural(&def) {
            debug!("add_modulation: {} already stored", def);
            return existing;
        }
        let ModulationDef {
            class,
            source,
            target,
            id: supplied_id,
        } = def;
        let source = self.intern_source(source);
        let target = self.add_process(*target);
        let raw = self.alloc();
        let id = ModulationId(raw);
        self.modulations.insert(
            id,
            Modulation {
                id: supplied_id.unwrap_or_else(|| format!("mod_{}", raw)),
                class,
                source,
                target,
            },
        );
        id
    }

    /// Intern an entity-or-operator value.
    pub(crate) fn intern_source(&mut self, source: SourceDef) -> SourceRef {
        match source {
            SourceDef::Entity(entity) => SourceRef::Entity(self.add_entity(entity)),
            SourceDef::Operator(operator) => SourceRef::Operator(self.add_lo(*operator)),
        }
    }

    // --- Text entry points: route through the parser collaborator ---

    /// Parse and intern an entity from its textual notation.
    pub fn add_entity_text<P: NotationParser>(&mut self, parser: &P, text: &str) -> Result<EntityId> {
        Ok(self.add_entity(parser.parse_entity(text)?))
    }

    /// Parse and intern a process from its textual notation.
    pub fn add_process_text<P: NotationParser>(
        &mut self,
        parser: &P,
        text: &str,
    ) -> Result<ProcessId> {
        Ok(self.add_process(parser.parse_process(text)?))
    }

    /// Parse and intern a modulation from its textual notation.
    pub fn add_modulation_text<P: NotationParser>(
        &mut self,
        parser: &P,
        text: &str,
    ) -> Result<ModulationId> {
        Ok(self.add_modulation(parser.parse_modulation(text)?))
    }

    /// Parse and intern a compartment from its textual notation.
    pub fn add_compartment_text<P: NotationParser>(
        &mut self,
        parser: &P,
        text: &str,
    ) -> Result<CompartmentId> {
        Ok(self.add_compartment(parser.parse_compartment(text)?))
    }

    /// Parse and intern a logical operator from its textual notation.
    pub fn add_lo_text<P: NotationParser>(&mut self, parser: &P, text: &str) -> Result<OperatorId> {
        Ok(self.add_lo(parser.parse_lo(text)?))
    }
}
