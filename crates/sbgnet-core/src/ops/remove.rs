//! The cascading removal engine.
//!
//! Removal is the mirror of insertion: every structural consumer of an
//! element is dissolved or rewritten before the element itself disappears,
//! so no operation leaves a dangling reference. All `remove_*` operations
//! fail with `NotFound` when the element is absent and leave the network
//! unchanged in that case.
//!
//! Because stored elements own their referents through ids, three
//! situations the reference semantics of a shared-object graph would
//! tolerate are handled explicitly here: operators that transitively
//! contain a removed entity are dissolved; operators are retained while any
//! modulation uses them as a source or another operator lists them as a
//! child; and entities that become structurally equal after a compartment
//! removal are merged back into one canonical instance, rewriting every
//! reference.

use crate::error::{NetworkError, Result};
use crate::io::NotationParser;
use crate::network::Network;
use crate::operator::SourceRef;
use crate::types::{CompartmentId, ElementKind, EntityId, ModulationId, OperatorId, ProcessId};
use log::debug;

impl Network {
    /// Remove an entity together with every process listing it as reactant
    /// or product, every modulation sourced from it, and every operator that
    /// (transitively) contains it as a child.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<()> {
        if !self.entities.contains_key(&id) {
            return Err(NetworkError::not_found(
                ElementKind::Entity,
                format!("no stored entity for handle {}", id.raw()),
            ));
        }
        debug!("remove_entity: {}", id.raw());

        let processes: Vec<ProcessId> = self
            .processes
            .iter()
            .filter(|(_, p)| p.touches(id))
            .map(|(pid, _)| *pid)
            .collect();
        for pid in processes {
            if self.processes.contains_key(&pid) {
                self.remove_process(pid)?;
            }
        }

        for mid in self.modulations_from(SourceRef::Entity(id)) {
            if self.modulations.contains_key(&mid) {
                self.remove_modulation(mid)?;
            }
        }

        let tainted: Vec<OperatorId> = self
            .los
            .keys()
            .copied()
            .filter(|op| self.operator_contains_entity(*op, id))
            .collect();
        for op in tainted {
            if self.los.contains_key(&op) {
                self.dissolve_operator(op)?;
            }
        }

        self.entities.shift_remove(&id);
        Ok(())
    }

    /// Remove a process together with every modulation targeting it.
    pub fn remove_process(&mut self, id: ProcessId) -> Result<()> {
        if !self.processes.contains_key(&id) {
            return Err(NetworkError::not_found(
                ElementKind::Process,
                format!("no stored process for handle {}", id.raw()),
            ));
        }
        debug!("remove_process: {}", id.raw());
        for mid in self.modulations_targeting(id) {
            if self.modulations.contains_key(&mid) {
                self.remove_modulation(mid)?;
            }
        }
        self.processes.shift_remove(&id);
        Ok(())
    }

    /// Remove a modulation. An operator source is conditionally removed
    /// afterwards via [`Network::remove_lo`].
    pub fn remove_modulation(&mut self, id: ModulationId) -> Result<()> {
        let Some(modulation) = self.modulations.shift_remove(&id) else {
            return Err(NetworkError::not_found(
                ElementKind::Modulation,
                format!("no stored modulation for handle {}", id.raw()),
            ));
        };
        debug!("remove_modulation: {}", id.raw());
        if let SourceRef::Operator(op) = modulation.source {
            if self.los.contains_key(&op) {
                self.remove_lo(op)?;
            }
        }
        Ok(())
    }

    /// Remove a compartment and clear the compartment reference on every
    /// entity pointing to it. The entities themselves stay. Entities that
    /// become structurally equal through the cleared reference are merged
    /// back into one canonical instance.
    pub fn remove_compartment(&mut self, id: CompartmentId) -> Result<()> {
        if self.compartments.shift_remove(&id).is_none() {
            return Err(NetworkError::not_found(
                ElementKind::Compartment,
                format!("no stored compartment for handle {}", id.raw()),
            ));
        }
        debug!("remove_compartment: {}", id.raw());
        let affected: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|(_, e)| e.compartment == Some(id))
            .map(|(eid, _)| *eid)
            .collect();
        for eid in &affected {
            if let Some(entity) = self.entities.get_mut(eid) {
                entity.compartment = None;
            }
        }
        if !affected.is_empty() {
            self.reintern();
        }
        Ok(())
    }

    /// Conditionally remove a logical operator.
    ///
    /// The operator is retained while any remaining modulation uses it as a
    /// source or any remaining operator lists it as a child; a retained
    /// operator keeps its subtree. Otherwise the operator is removed and
    /// its child operators are visited recursively under the same rule
    /// (child entities are left intact, since other elements may still
    /// reference them).
    pub fn remove_lo(&mut self, id: OperatorId) -> Result<()> {
        if !self.los.contains_key(&id) {
            return Err(NetworkError::not_found(
                ElementKind::LogicalOperator,
                format!("no stored logical operator for handle {}", id.raw()),
            ));
        }
        if self.operator_in_use(id) {
            debug!("remove_lo: {} retained, still referenced", id.raw());
            return Ok(());
        }
        debug!("remove_lo: {}", id.raw());
        if let Some(operator) = self.los.shift_remove(&id) {
            for child in operator.child_operators() {
                if self.los.contains_key(&child) {
                    self.remove_lo(child)?;
                }
            }
        }
        Ok(())
    }

    /// Unconditionally dissolve an operator whose subtree contains a
    /// removed entity: its modulations go first, then the operator itself,
    /// then orphaned child operators under the usual retention rule.
    fn dissolve_operator(&mut self, id: OperatorId) -> Result<()> {
        for mid in self.modulations_from(SourceRef::Operator(id)) {
            if self.modulations.contains_key(&mid) {
                self.remove_modulation(mid)?;
            }
        }
        if let Some(operator) = self.los.shift_remove(&id) {
            debug!("dissolve_operator: {}", id.raw());
            for child in operator.child_operators() {
                if self.los.contains_key(&child) && !self.operator_in_use(child) {
                    self.remove_lo(child)?;
                }
            }
        }
        Ok(())
    }

    // --- Re-interning after reference-clearing mutations ---

    /// Restore the no-structural-duplicates invariant after stored elements
    /// were mutated in place (compartment clearing). Later duplicates merge
    /// into the earliest canonical instance; every reference is rewritten.
    fn reintern(&mut self) {
        self.dedup_entities();
        self.dedup_operators();
        self.dedup_processes();
        self.dedup_modulations();
    }

    fn dedup_entities(&mut self) {
        loop {
            let Some((canonical, duplicate)) = self.first_duplicate_entity() else {
                break;
            };
            debug!(
                "reintern: merging entity {} into {}",
                duplicate.raw(),
                canonical.raw()
            );
            for process in self.processes.values_mut() {
                for slot in process
                    .reactants
                    .iter_mut()
                    .chain(process.products.iter_mut())
                {
                    if *slot == duplicate {
                        *slot = canonical;
                    }
                }
            }
            for modulation in self.modulations.values_mut() {
                if modulation.source == SourceRef::Entity(duplicate) {
                    modulation.source = SourceRef::Entity(canonical);
                }
            }
            for operator in self.los.values_mut() {
                for child in operator.children.iter_mut() {
                    if *child == SourceRef::Entity(duplicate) {
                        *child = SourceRef::Entity(canonical);
                    }
                }
            }
            self.entities.shift_remove(&duplicate);
        }
    }

    fn dedup_operators(&mut self) {
        loop {
            let Some((canonical, duplicate)) = self.first_duplicate_operator() else {
                break;
            };
            debug!(
                "reintern: merging operator {} into {}",
                duplicate.raw(),
                canonical.raw()
            );
            for modulation in self.modulations.values_mut() {
                if modulation.source == SourceRef::Operator(duplicate) {
                    modulation.source = SourceRef::Operator(canonical);
                }
            }
            for operator in self.los.values_mut() {
                for child in operator.children.iter_mut() {
                    if *child == SourceRef::Operator(duplicate) {
                        *child = SourceRef::Operator(canonical);
                    }
                }
            }
            self.los.shift_remove(&duplicate);
        }
    }

    fn dedup_processes(&mut self) {
        loop {
            let Some((canonical, duplicate)) = self.first_duplicate_process() else {
                break;
            };
            debug!(
                "reintern: merging process {} into {}",
                duplicate.raw(),
                canonical.raw()
            );
            for modulation in self.modulations.values_mut() {
                if modulation.target == duplicate {
                    modulation.target = canonical;
                }
            }
            self.processes.shift_remove(&duplicate);
        }
    }

    fn dedup_modulations(&mut self) {
        loop {
            let Some((_, duplicate)) = self.first_duplicate_modulation() else {
                break;
            };
            debug!("reintern: dropping duplicate modulation {}", duplicate.raw());
            self.modulations.shift_remove(&duplicate);
        }
    }

    fn first_duplicate_entity(&self) -> Option<(EntityId, EntityId)> {
        let ids: Vec<EntityId> = self.entities.keys().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            let def = self.entity_def(a)?;
            for &b in &ids[i + 1..] {
                if self.entity_def(b).as_ref() == Some(&def) {
                    return Some((a, b));
                }
            }
        }
        None
    }

    fn first_duplicate_operator(&self) -> Option<(OperatorId, OperatorId)> {
        let ids: Vec<OperatorId> = self.los.keys().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            let def = self.lo_def(a)?;
            for &b in &ids[i + 1..] {
                if self.lo_def(b).as_ref() == Some(&def) {
                    return Some((a, b));
                }
            }
        }
        None
    }

    fn first_duplicate_process(&self) -> Option<(ProcessId, ProcessId)> {
        let ids: Vec<ProcessId> = self.processes.keys().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            let def = self.process_def(a)?;
            for &b in &ids[i + 1..] {
                if self.process_def(b).as_ref() == Some(&def) {
                    return Some((a, b));
                }
            }
        }
        None
    }

    fn first_duplicate_modulation(&self) -> Option<(ModulationId, ModulationId)> {
        let ids: Vec<ModulationId> = self.modulations.keys().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            let def = self.modulation_def(a)?;
            for &b in &ids[i + 1..] {
                if self.modulation_def(b).as_ref() == Some(&def) {
                    return Some((a, b));
                }
            }
        }
        None
    }

    // --- Text entry points: route through the parser collaborator ---

    /// Parse an entity from its textual notation and remove its canonical
    /// instance.
    pub fn remove_entity_text<P: NotationParser>(&mut self, parser: &P, text: &str) -> Result<()> {
        let def = parser.parse_entity(text)?;
        let id = self
            .get_entity_structural(&def)
            .ok_or_else(|| NetworkError::not_found(ElementKind::Entity, text))?;
        self.remove_entity(id)
    }

    /// Parse a process from its textual notation and remove its canonical
    /// instance.
    pub fn remove_process_text<P: NotationParser>(&mut self, parser: &P, text: &str) -> Result<()> {
        let def = parser.parse_process(text)?;
        let id = self
            .get_process_structural(&def)
            .ok_or_else(|| NetworkError::not_found(ElementKind::Process, text))?;
        self.remove_process(id)
    }

    /// Parse a modulation from its textual notation and remove its
    /// canonical instance.
    pub fn remove_modulation_text<P: NotationParser>(
        &mut self,
        parser: &P,
        text: &str,
    ) -> Result<()> {
        let def = parser.parse_modulation(text)?;
        let id = self
            .get_modulation_structural(&def)
            .ok_or_else(|| NetworkError::not_found(ElementKind::Modulation, text))?;
        self.remove_modulation(id)
    }

    /// Parse a compartment from its textual notation and remove its
    /// canonical instance.
    pub fn remove_compartment_text<P: NotationParser>(
        &mut self,
        parser: &P,
        text: &str,
    ) -> Result<()> {
        let def = parser.parse_compartment(text)?;
        let id = self
            .get_compartment_structural(&def)
            .ok_or_else(|| NetworkError::not_found(ElementKind::Compartment, text))?;
        self.remove_compartment(id)
    }

    /// Parse a logical operator from its textual notation and conditionally
    /// remove its canonical instance.
    pub fn remove_lo_text<P: NotationParser>(&mut self, parser: &P, text: &str) -> Result<()> {
        let def = parser.parse_lo(text)?;
        let id = self
            .get_lo_structural(&def)
            .ok_or_else(|| NetworkError::not_found(ElementKind::LogicalOperator, text))?;
        self.remove_lo(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compartment::CompartmentDef;
    use crate::entity::EntityDef;
    use crate::modulation::{ModulationClass, ModulationDef};
    use crate::operator::{OperatorClass, OperatorDef};
    use crate::process::ProcessDef;

    #[test]
    fn removing_absent_entity_fails() {
        let mut net = Network::new();
        let id = net.add_entity(EntityDef::macromolecule("A"));
        net.remove_entity(id).unwrap();
        assert!(matches!(
            net.remove_entity(id),
            Err(NetworkError::NotFound { .. })
        ));
    }

    #[test]
    fn compartment_removal_clears_references() {
        let mut net = Network::new();
        let e = net.add_entity(
            EntityDef::macromolecule("A").in_compartment(CompartmentDef::new("cytosol")),
        );
        let c = net.entity(e).unwrap().compartment.unwrap();
        net.remove_compartment(c).unwrap();
        assert_eq!(net.compartment_count(), 0);
        assert_eq!(net.entity(e).unwrap().compartment, None);
    }

    #[test]
    fn compartment_removal_merges_colliding_entities() {
        let mut net = Network::new();
        let bare = net.add_entity(EntityDef::macromolecule("A"));
        let housed = net.add_entity(
            EntityDef::macromolecule("A").in_compartment(CompartmentDef::new("cytosol")),
        );
        let p = net.add_process(
            ProcessDef::generic()
                .with_reactant(
                    EntityDef::macromolecule("A").in_compartment(CompartmentDef::new("cytosol")),
                )
                .with_product(EntityDef::macromolecule("A*")),
        );
        assert_eq!(net.process(p).unwrap().reactants, vec![housed]);

        let c = net.entity(housed).unwrap().compartment.unwrap();
        net.remove_compartment(c).unwrap();

        // The two "A" entities collapsed into the earlier canonical one and
        // the process reactant was rewritten to it.
        assert_eq!(net.entity_count(), 2);
        assert_eq!(net.process(p).unwrap().reactants, vec![bare]);
    }

    #[test]
    fn operator_retained_while_sourced() {
        let mut net = Network::new();
        let op = net.add_lo(
            OperatorDef::new(OperatorClass::And)
                .with_child(EntityDef::macromolecule("A"))
                .with_child(EntityDef::macromolecule("B")),
        );
        let op_def = net.lo_def(op).unwrap();
        net.add_modulation(ModulationDef::new(
            ModulationClass::Stimulation,
            op_def,
            ProcessDef::generic()
                .with_reactant(EntityDef::macromolecule("S"))
                .with_product(EntityDef::macromolecule("P")),
        ));

        net.remove_lo(op).unwrap();
        assert_eq!(net.lo_count(), 1, "operator sourced by a modulation stays");
    }

    #[test]
    fn modulation_removal_sweeps_unused_operator_source() {
        let mut net = Network::new();
        let op_def = OperatorDef::new(OperatorClass::And)
            .with_child(EntityDef::macromolecule("A"))
            .with_child(EntityDef::macromolecule("B"));
        let m = net.add_modulation(ModulationDef::new(
            ModulationClass::Stimulation,
            op_def,
            ProcessDef::generic()
                .with_reactant(EntityDef::macromolecule("S"))
                .with_product(EntityDef::macromolecule("P")),
        ));
        assert_eq!(net.lo_count(), 1);

        net.remove_modulation(m).unwrap();
        assert_eq!(net.lo_count(), 0);
        // Child entities stay.
        assert!(net
            .get_entity_structural(&EntityDef::macromolecule("A"))
            .is_some());
    }

    #[test]
    fn nested_operator_removal_spares_shared_children() {
        let mut net = Network::new();
        let inner = OperatorDef::new(OperatorClass::Not).with_child(EntityDef::macromolecule("X"));
        let outer = OperatorDef::new(OperatorClass::And)
            .with_child(inner.clone())
            .with_child(EntityDef::macromolecule("Y"));

        let target = ProcessDef::generic()
            .with_reactant(EntityDef::macromolecule("S"))
            .with_product(EntityDef::macromolecule("P"));
        let m_outer = net.add_modulation(ModulationDef::new(
            ModulationClass::Inhibition,
            outer,
            target.clone(),
        ));
        // The inner operator is also a modulation source in its own right.
        net.add_modulation(ModulationDef::new(
            ModulationClass::Stimulation,
            inner,
            target,
        ));
        assert_eq!(net.lo_count(), 2);

        net.remove_modulation(m_outer).unwrap();
        // The outer operator goes; the inner one is still a source.
        assert_eq!(net.lo_count(), 1);
    }

    #[test]
    fn entity_removal_dissolves_containing_operator() {
        let mut net = Network::new();
        let a = net.add_entity(EntityDef::macromolecule("A"));
        net.add_modulation(ModulationDef::new(
            ModulationClass::Stimulation,
            OperatorDef::new(OperatorClass::And)
                .with_child(EntityDef::macromolecule("A"))
                .with_child(EntityDef::macromolecule("B")),
            ProcessDef::generic()
                .with_reactant(EntityDef::macromolecule("S"))
                .with_product(EntityDef::macromolecule("P")),
        ));
        assert_eq!(net.lo_count(), 1);
        assert_eq!(net.modulation_count(), 1);

        net.remove_entity(a).unwrap();
        assert_eq!(net.lo_count(), 0);
        assert_eq!(net.modulation_count(), 0);
        assert!(net.get_entity_structural(&EntityDef::macromolecule("B")).is_some());
    }
}
