//! The network container: five insertion-ordered, structurally
//! deduplicated collections and the read surface over them.
//!
//! All references between stored elements are typed ids into the container's
//! own collections, so the canonical-instance invariant holds by
//! construction: there is exactly one stored element per id and every
//! reference names the network's own instance. The mutating engines live in
//! [`crate::ops`].

use crate::compartment::{Compartment, CompartmentDef};
use crate::entity::{Entity, EntityClass, EntityDef};
use crate::modulation::{Modulation, ModulationClass, ModulationDef};
use crate::operator::{LogicalOperator, OperatorDef, SourceDef, SourceRef};
use crate::process::{Process, ProcessClass, ProcessDef};
use crate::types::{CompartmentId, EntityId, ModulationId, OperatorId, ProcessId};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A lookup criterion for the `get_*` family.
///
/// A scan returns the first element (in insertion order) satisfying *any* of
/// the supplied criteria. `Label` only applies to kinds that carry labels;
/// for the others it never matches.
#[derive(Debug, Clone, Copy)]
pub enum Query<'a, D> {
    /// Structural equality against a detached value.
    Structural(&'a D),
    /// Exchange-format identifier equality.
    Id(&'a str),
    /// Label equality.
    Label(&'a str),
    /// Structural hash equality.
    Hash(u64),
    /// Textual notation equality.
    Repr(&'a str),
}

/// An in-memory map of pathway elements.
///
/// The five collections behave as identity-deduplicated sets with stable
/// insertion order: membership is tested via structural equality, iteration
/// order is deterministic. Network equality compares all five collections as
/// sets of detached values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    pub(crate) entities: IndexMap<EntityId, Entity>,
    pub(crate) processes: IndexMap<ProcessId, Process>,
    pub(crate) modulations: IndexMap<ModulationId, Modulation>,
    pub(crate) compartments: IndexMap<CompartmentId, Compartment>,
    pub(crate) los: IndexMap<OperatorId, LogicalOperator>,
    pub(crate) next_id: u32,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Stored element access ---

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(&id)
    }

    pub fn modulation(&self, id: ModulationId) -> Option<&Modulation> {
        self.modulations.get(&id)
    }

    pub fn compartment(&self, id: CompartmentId) -> Option<&Compartment> {
        self.compartments.get(&id)
    }

    pub fn lo(&self, id: OperatorId) -> Option<&LogicalOperator> {
        self.los.get(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, e)| (*id, e))
    }

    pub fn processes(&self) -> impl Iterator<Item = (ProcessId, &Process)> {
        self.processes.iter().map(|(id, p)| (*id, p))
    }

    pub fn modulations(&self) -> impl Iterator<Item = (ModulationId, &Modulation)> {
        self.modulations.iter().map(|(id, m)| (*id, m))
    }

    pub fn compartments(&self) -> impl Iterator<Item = (CompartmentId, &Compartment)> {
        self.compartments.iter().map(|(id, c)| (*id, c))
    }

    pub fn los(&self) -> impl Iterator<Item = (OperatorId, &LogicalOperator)> {
        self.los.iter().map(|(id, o)| (*id, o))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn modulation_count(&self) -> usize {
        self.modulations.len()
    }

    pub fn compartment_count(&self) -> usize {
        self.compartments.len()
    }

    pub fn lo_count(&self) -> usize {
        self.los.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.processes.is_empty()
            && self.modulations.is_empty()
            && self.compartments.is_empty()
            && self.los.is_empty()
    }

    // --- Detached resolution (the deep-copy surface) ---

    /// Detached copy of a stored compartment.
    pub fn compartment_def(&self, id: CompartmentId) -> Option<CompartmentDef> {
        self.compartments.get(&id).map(Compartment::to_def)
    }

    /// Detached copy of a stored entity, compartment reference resolved.
    pub fn entity_def(&self, id: EntityId) -> Option<EntityDef> {
        let entity = self.entities.get(&id)?;
        let compartment = entity
            .compartment
            .and_then(|cid| self.compartment_def(cid));
        debug_assert_eq!(entity.compartment.is_some(), compartment.is_some());
        Some(EntityDef {
            class: entity.class,
            label: entity.label.clone(),
            compartment,
            uis: entity.uis.clone(),
            id: Some(entity.id.clone()),
        })
    }

    /// Detached copy of a stored process, both sides resolved.
    pub fn process_def(&self, id: ProcessId) -> Option<ProcessDef> {
        let process = self.processes.get(&id)?;
        let resolve = |side: &[EntityId]| -> Vec<EntityDef> {
            side.iter().filter_map(|eid| self.entity_def(*eid)).collect()
        };
        Some(ProcessDef {
            class: process.class,
            label: process.label.clone(),
            reactants: resolve(&process.reactants),
            products: resolve(&process.products),
            id: Some(process.id.clone()),
        })
    }

    /// Detached copy of a stored operator, children resolved recursively.
    pub fn lo_def(&self, id: OperatorId) -> Option<OperatorDef> {
        let operator = self.los.get(&id)?;
        let children = operator
            .children
            .iter()
            .filter_map(|child| self.source_def(*child))
            .collect();
        Some(OperatorDef {
            class: operator.class,
            children,
            id: Some(operator.id.clone()),
        })
    }

    /// Detached copy of a stored modulation, source and target resolved.
    pub fn modulation_def(&self, id: ModulationId) -> Option<ModulationDef> {
        let modulation = self.modulations.get(&id)?;
        let source = self.source_def(modulation.source)?;
        let target = self.process_def(modulation.target)?;
        Some(ModulationDef {
            class: modulation.class,
            source,
            target: Box::new(target),
            id: Some(modulation.id.clone()),
        })
    }

    /// Detached copy of an entity-or-operator reference.
    pub fn source_def(&self, source: SourceRef) -> Option<SourceDef> {
        match source {
            SourceRef::Entity(id) => self.entity_def(id).map(SourceDef::Entity),
            SourceRef::Operator(id) => self.lo_def(id).map(|o| SourceDef::Operator(Box::new(o))),
        }
    }

    pub fn entity_defs(&self) -> impl Iterator<Item = EntityDef> + '_ {
        self.entities.keys().filter_map(move |id| self.entity_def(*id))
    }

    pub fn process_defs(&self) -> impl Iterator<Item = ProcessDef> + '_ {
        self.processes.keys().filter_map(move |id| self.process_def(*id))
    }

    pub fn modulation_defs(&self) -> impl Iterator<Item = ModulationDef> + '_ {
        self.modulations
            .keys()
            .filter_map(move |id| self.modulation_def(*id))
    }

    pub fn compartment_defs(&self) -> impl Iterator<Item = CompartmentDef> + '_ {
        self.compartments
            .keys()
            .filter_map(move |id| self.compartment_def(*id))
    }

    pub fn lo_defs(&self) -> impl Iterator<Item = OperatorDef> + '_ {
        self.los.keys().filter_map(move |id| self.lo_def(*id))
    }

    // --- Lookup ---

    /// First entity satisfying any criterion, in insertion order.
    pub fn get_entity(&self, criteria: &[Query<'_, EntityDef>]) -> Option<EntityId> {
        self.entities.iter().find_map(|(id, stored)| {
            let hit = criteria.iter().any(|criterion| match criterion {
                Query::Structural(def) => self.entity_def(*id).as_ref() == Some(*def),
                Query::Id(s) => stored.id == *s,
                Query::Label(l) => stored.label.as_deref() == Some(*l),
                Query::Hash(h) => {
                    self.entity_def(*id).map(|d| d.structural_hash()) == Some(*h)
                }
                Query::Repr(r) => {
                    self.entity_def(*id).map(|d| d.to_string()).as_deref() == Some(*r)
                }
            });
            hit.then_some(*id)
        })
    }

    /// First process satisfying any criterion, in insertion order.
    pub fn get_process(&self, criteria: &[Query<'_, ProcessDef>]) -> Option<ProcessId> {
        self.processes.iter().find_map(|(id, stored)| {
            let hit = criteria.iter().any(|criterion| match criterion {
                Query::Structural(def) => self.process_def(*id).as_ref() == Some(*def),
                Query::Id(s) => stored.id == *s,
                Query::Label(l) => stored.label.as_deref() == Some(*l),
                Query::Hash(h) => {
                    self.process_def(*id).map(|d| d.structural_hash()) == Some(*h)
                }
                Query::Repr(r) => {
                    self.process_def(*id).map(|d| d.to_string()).as_deref() == Some(*r)
                }
            });
            hit.then_some(*id)
        })
    }

    /// First modulation satisfying any criterion, in insertion order.
    pub fn get_modulation(&self, criteria: &[Query<'_, ModulationDef>]) -> Option<ModulationId> {
        self.modulations.iter().find_map(|(id, stored)| {
            let hit = criteria.iter().any(|criterion| match criterion {
                Query::Structural(def) => self.modulation_def(*id).as_ref() == Some(*def),
                Query::Id(s) => stored.id == *s,
                Query::Label(_) => false,
                Query::Hash(h) => {
                    self.modulation_def(*id).map(|d| d.structural_hash()) == Some(*h)
                }
                Query::Repr(r) => {
                    self.modulation_def(*id).map(|d| d.to_string()).as_deref() == Some(*r)
                }
            });
            hit.then_some(*id)
        })
    }

    /// First compartment satisfying any criterion, in insertion order.
    pub fn get_compartment(&self, criteria: &[Query<'_, CompartmentDef>]) -> Option<CompartmentId> {
        self.compartments.iter().find_map(|(id, stored)| {
            let hit = criteria.iter().any(|criterion| match criterion {
                Query::Structural(def) => self.compartment_def(*id).as_ref() == Some(*def),
                Query::Id(s) => stored.id == *s,
                Query::Label(l) => stored.label == *l,
                Query::Hash(h) => {
                    self.compartment_def(*id).map(|d| d.structural_hash()) == Some(*h)
                }
                Query::Repr(r) => {
                    self.compartment_def(*id).map(|d| d.to_string()).as_deref() == Some(*r)
                }
            });
            hit.then_some(*id)
        })
    }

    /// First logical operator satisfying any criterion, in insertion order.
    pub fn get_lo(&self, criteria: &[Query<'_, OperatorDef>]) -> Option<OperatorId> {
        self.los.iter().find_map(|(id, stored)| {
            let hit = criteria.iter().any(|criterion| match criterion {
                Query::Structural(def) => self.lo_def(*id).as_ref() == Some(*def),
                Query::Id(s) => stored.id == *s,
                Query::Label(_) => false,
                Query::Hash(h) => self.lo_def(*id).map(|d| d.structural_hash()) == Some(*h),
                Query::Repr(r) => {
                    self.lo_def(*id).map(|d| d.to_string()).as_deref() == Some(*r)
                }
            });
            hit.then_some(*id)
        })
    }

    /// Structural membership shorthand for the insertion/removal engines.
    pub fn get_entity_structural(&self, def: &EntityDef) -> Option<EntityId> {
        self.get_entity(&[Query::Structural(def)])
    }

    pub fn get_process_structural(&self, def: &ProcessDef) -> Option<ProcessId> {
        self.get_process(&[Query::Structural(def)])
    }

    pub fn get_modulation_structural(&self, def: &ModulationDef) -> Option<ModulationId> {
        self.get_modulation(&[Query::Structural(def)])
    }

    pub fn get_compartment_structural(&self, def: &CompartmentDef) -> Option<CompartmentId> {
        self.get_compartment(&[Query::Structural(def)])
    }

    pub fn get_lo_structural(&self, def: &OperatorDef) -> Option<OperatorId> {
        self.get_lo(&[Query::Structural(def)])
    }

    // --- Reference queries used by the engines and the rewriter ---

    /// Modulations whose target is the given process.
    pub fn modulations_targeting(&self, process: ProcessId) -> Vec<ModulationId> {
        self.modulations
            .iter()
            .filter(|(_, m)| m.target == process)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Modulations whose source is the given reference.
    pub fn modulations_from(&self, source: SourceRef) -> Vec<ModulationId> {
        self.modulations
            .iter()
            .filter(|(_, m)| m.source == source)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Whether the operator (transitively) contains the entity as a child.
    pub(crate) fn operator_contains_entity(&self, op: OperatorId, entity: EntityId) -> bool {
        let Some(operator) = self.los.get(&op) else {
            return false;
        };
        operator.children.iter().any(|child| match child {
            SourceRef::Entity(e) => *e == entity,
            SourceRef::Operator(o) => self.operator_contains_entity(*o, entity),
        })
    }

    /// Whether anything still references the operator: a modulation source,
    /// or a child slot of another stored operator.
    pub(crate) fn operator_in_use(&self, op: OperatorId) -> bool {
        self.modulations
            .values()
            .any(|m| m.source == SourceRef::Operator(op))
            || self
                .los
                .iter()
                .any(|(id, o)| *id != op && o.has_child(SourceRef::Operator(op)))
    }

    // --- Derived read-only views ---

    /// All macromolecule entities.
    pub fn macromolecules(&self) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, e)| e.class == EntityClass::Macromolecule)
            .map(|(id, _)| *id)
            .collect()
    }

    /// All association processes.
    pub fn associations(&self) -> Vec<ProcessId> {
        self.processes
            .iter()
            .filter(|(_, p)| p.class == ProcessClass::Association)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Transcription processes: an empty-set first reactant producing an
    /// mRNA-annotated nucleic-acid feature, necessarily stimulated by a
    /// gene-annotated nucleic-acid feature. Processes with empty sides never
    /// match.
    pub fn transcriptions(&self) -> Vec<ProcessId> {
        self.processes
            .iter()
            .filter(|(id, p)| self.is_transcription(**id, p))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Translation processes: an empty-set first reactant producing a
    /// macromolecule, necessarily stimulated by an mRNA-annotated
    /// nucleic-acid feature. Processes with empty sides never match.
    pub fn translations(&self) -> Vec<ProcessId> {
        self.processes
            .iter()
            .filter(|(id, p)| self.is_translation(**id, p))
            .map(|(id, _)| *id)
            .collect()
    }

    fn is_transcription(&self, id: ProcessId, process: &Process) -> bool {
        self.produces_from_empty_set(process, |product| {
            product.class == EntityClass::NucleicAcidFeature && product.has_ui("ct", "mRNA")
        }) && self.has_necessary_stimulation_from(id, |source| {
            source.class == EntityClass::NucleicAcidFeature && source.has_ui("ct", "gene")
        })
    }

    fn is_translation(&self, id: ProcessId, process: &Process) -> bool {
        self.produces_from_empty_set(process, |product| {
            product.class == EntityClass::Macromolecule
        }) && self.has_necessary_stimulation_from(id, |source| {
            source.class == EntityClass::NucleicAcidFeature && source.has_ui("ct", "mRNA")
        })
    }

    /// First reactant is an empty-set marker and the first product satisfies
    /// the predicate.
    fn produces_from_empty_set(&self, process: &Process, product_matches: impl Fn(&Entity) -> bool) -> bool {
        let Some(first_reactant) = process
            .reactants
            .first()
            .and_then(|id| self.entities.get(id))
        else {
            return false;
        };
        if first_reactant.class != EntityClass::EmptySet {
            return false;
        }
        process
            .products
            .first()
            .and_then(|id| self.entities.get(id))
            .is_some_and(product_matches)
    }

    fn has_necessary_stimulation_from(
        &self,
        target: ProcessId,
        source_matches: impl Fn(&Entity) -> bool,
    ) -> bool {
        self.modulations.values().any(|m| {
            m.target == target
                && m.class == ModulationClass::NecessaryStimulation
                && match m.source {
                    SourceRef::Entity(e) => self.entities.get(&e).is_some_and(&source_matches),
                    SourceRef::Operator(_) => false,
                }
        })
    }

    // --- Id allocation for the insertion engine ---

    pub(crate) fn alloc(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.entity_count() == other.entity_count()
            && self.process_count() == other.process_count()
            && self.modulation_count() == other.modulation_count()
            && self.compartment_count() == other.compartment_count()
            && self.lo_count() == other.lo_count()
            && self.entity_defs().sorted().eq(other.entity_defs().sorted())
            && self.process_defs().sorted().eq(other.process_defs().sorted())
            && self
                .modulation_defs()
                .sorted()
                .eq(other.modulation_defs().sorted())
            && self
                .compartment_defs()
                .sorted()
                .eq(other.compartment_defs().sorted())
            && self.lo_defs().sorted().eq(other.lo_defs().sorted())
    }
}

impl Eq for Network {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityDef;
    use crate::types::UnitOfInformation;

    #[test]
    fn lookup_criteria_any_match_wins() {
        let mut net = Network::new();
        let a = net.add_entity(EntityDef::macromolecule("A").with_id("epn_a"));
        let b = net.add_entity(EntityDef::macromolecule("B"));

        assert_eq!(net.get_entity(&[Query::Id("epn_a")]), Some(a));
        assert_eq!(net.get_entity(&[Query::Label("B")]), Some(b));
        assert_eq!(net.get_entity(&[Query::Label("missing")]), None);

        // Either criterion is enough; the scan returns the first element hit.
        assert_eq!(
            net.get_entity(&[Query::Label("missing"), Query::Id("epn_a")]),
            Some(a)
        );
    }

    #[test]
    fn lookup_by_hash_and_repr() {
        let mut net = Network::new();
        let def = EntityDef::nucleic_acid_feature("TP53m")
            .with_ui(UnitOfInformation::new("ct", "mRNA"));
        let id = net.add_entity(def.clone());

        assert_eq!(net.get_entity(&[Query::Hash(def.structural_hash())]), Some(id));
        assert_eq!(
            net.get_entity(&[Query::Repr("NucleicAcidFeature([ct:mRNA]TP53m)")]),
            Some(id)
        );
    }

    #[test]
    fn network_equality_is_set_equality() {
        let mut left = Network::new();
        left.add_entity(EntityDef::macromolecule("A"));
        left.add_entity(EntityDef::macromolecule("B"));

        let mut right = Network::new();
        right.add_entity(EntityDef::macromolecule("B"));
        right.add_entity(EntityDef::macromolecule("A"));

        assert_eq!(left, right);

        right.add_entity(EntityDef::macromolecule("C"));
        assert_ne!(left, right);
    }
}
