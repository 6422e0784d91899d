//! Deduplicating insertion tests: idempotence and referential
//! canonicalization.

use sbgnet_core::prelude::*;

#[test]
fn inserting_twice_stores_once() {
    let mut net = Network::new();
    net.add_entity(EntityDef::macromolecule("TP53"));
    assert_eq!(net.entity_count(), 1);

    // A distinct but structurally equal instance is a no-op.
    net.add_entity(EntityDef::macromolecule("TP53").with_id("some-other-id"));
    assert_eq!(net.entity_count(), 1, "collection size unchanged");
}

#[test]
fn every_kind_dedups() {
    let mut net = Network::new();
    let process = ProcessDef::generic()
        .with_reactant(EntityDef::macromolecule("A"))
        .with_product(EntityDef::macromolecule("B"));
    let modulation = ModulationDef::new(
        ModulationClass::Inhibition,
        EntityDef::macromolecule("I"),
        process.clone(),
    );
    let operator = OperatorDef::new(OperatorClass::And)
        .with_child(EntityDef::macromolecule("A"))
        .with_child(EntityDef::macromolecule("I"));

    for _ in 0..2 {
        net.add_compartment(CompartmentDef::new("cytosol"));
        net.add_process(process.clone());
        net.add_modulation(modulation.clone());
        net.add_lo(operator.clone());
    }

    assert_eq!(net.compartment_count(), 1);
    assert_eq!(net.process_count(), 1);
    assert_eq!(net.modulation_count(), 1);
    assert_eq!(net.lo_count(), 1);
    assert_eq!(net.entity_count(), 3, "A, B and I");
}

#[test]
fn process_insertion_reuses_canonical_entities() {
    let mut net = Network::new();
    let canonical = net.add_entity(
        EntityDef::macromolecule("TP53").in_compartment(CompartmentDef::new("nucleus")),
    );

    let p = net.add_process(
        ProcessDef::generic()
            .with_reactant(
                EntityDef::macromolecule("TP53").in_compartment(CompartmentDef::new("nucleus")),
            )
            .with_product(EntityDef::macromolecule("MDM2")),
    );

    // The stored process references the pre-existing canonical instance;
    // no duplicate entity appeared.
    assert_eq!(net.entity_count(), 2);
    assert_eq!(net.process(p).unwrap().reactants, vec![canonical]);
}

#[test]
fn modulation_insertion_reuses_canonical_process() {
    let mut net = Network::new();
    let process = ProcessDef::generic()
        .with_reactant(EntityDef::macromolecule("S"))
        .with_product(EntityDef::macromolecule("P"));
    let canonical = net.add_process(process.clone());

    let m = net.add_modulation(ModulationDef::new(
        ModulationClass::Catalysis,
        EntityDef::macromolecule("E"),
        process,
    ));

    assert_eq!(net.process_count(), 1);
    assert_eq!(net.modulation(m).unwrap().target, canonical);
}

#[test]
fn operator_source_is_interned_once() {
    let mut net = Network::new();
    let operator = OperatorDef::new(OperatorClass::Or)
        .with_child(EntityDef::macromolecule("A"))
        .with_child(EntityDef::macromolecule("B"));
    let canonical = net.add_lo(operator.clone());

    let m = net.add_modulation(ModulationDef::new(
        ModulationClass::Stimulation,
        operator,
        ProcessDef::generic()
            .with_reactant(EntityDef::empty_set())
            .with_product(EntityDef::macromolecule("P")),
    ));

    assert_eq!(net.lo_count(), 1);
    assert_eq!(
        net.modulation(m).unwrap().source,
        SourceRef::Operator(canonical)
    );
}

#[test]
fn shared_compartment_is_one_instance() {
    let mut net = Network::new();
    let a = net.add_entity(
        EntityDef::macromolecule("A").in_compartment(CompartmentDef::new("cytosol")),
    );
    let b = net.add_entity(
        EntityDef::macromolecule("B").in_compartment(CompartmentDef::new("cytosol")),
    );

    assert_eq!(net.compartment_count(), 1);
    let shared = net.entity(a).unwrap().compartment;
    assert!(shared.is_some());
    assert_eq!(shared, net.entity(b).unwrap().compartment);
}
