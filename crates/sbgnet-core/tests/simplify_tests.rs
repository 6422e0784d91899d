//! Gene-expression rewriter tests: pattern collapse and re-homing of
//! auxiliary modulators.

use sbgnet_core::prelude::*;

fn gene(label: &str) -> EntityDef {
    EntityDef::nucleic_acid_feature(label).with_ui(UnitOfInformation::new("ct", "gene"))
}

fn mrna(label: &str) -> EntityDef {
    EntityDef::nucleic_acid_feature(label).with_ui(UnitOfInformation::new("ct", "mRNA"))
}

fn production(product: EntityDef) -> ProcessDef {
    ProcessDef::generic()
        .with_reactant(EntityDef::empty_set())
        .with_product(product)
}

/// gene --NecessaryStimulation--> transcription -> mRNA
/// mRNA --NecessaryStimulation--> translation -> protein
fn gene_expression_network() -> Network {
    let mut net = Network::new();
    net.add_modulation(ModulationDef::new(
        ModulationClass::NecessaryStimulation,
        gene("TP53g"),
        production(mrna("TP53m")),
    ));
    net.add_modulation(ModulationDef::new(
        ModulationClass::NecessaryStimulation,
        mrna("TP53m"),
        production(EntityDef::macromolecule("TP53")),
    ));
    net
}

#[test]
fn two_step_expression_collapses() {
    let mut net = gene_expression_network();
    assert_eq!(net.transcriptions().len(), 1);
    assert_eq!(net.translations().len(), 1);
    let transcription = net.transcriptions()[0];

    net.simplify_gene_expressions().unwrap();

    // Gene, mRNA, the transcription and both stimulations are gone.
    assert!(net.get_entity_structural(&gene("TP53g")).is_none());
    assert!(net.get_entity_structural(&mrna("TP53m")).is_none());
    assert!(net
        .get_process_structural(&production(mrna("TP53m")))
        .is_none());
    assert_eq!(net.modulation_count(), 0);

    // The translation and the protein remain.
    assert!(net
        .get_process_structural(&production(EntityDef::macromolecule("TP53")))
        .is_some());
    assert!(net
        .get_entity_structural(&EntityDef::macromolecule("TP53"))
        .is_some());

    // Nothing targets the removed transcription.
    for (_, modulation) in net.modulations() {
        assert_ne!(modulation.target, transcription);
    }
}

#[test]
fn auxiliary_modulators_are_rehomed() {
    let mut net = gene_expression_network();
    // An unrelated inhibitor of the transcription step.
    net.add_modulation(ModulationDef::new(
        ModulationClass::Inhibition,
        EntityDef::macromolecule("X"),
        production(mrna("TP53m")),
    ));

    net.simplify_gene_expressions().unwrap();

    // The inhibition now targets the translation directly.
    let translation = net
        .get_process_structural(&production(EntityDef::macromolecule("TP53")))
        .expect("translation survives");
    let rehomed = net.get_modulation_structural(&ModulationDef::new(
        ModulationClass::Inhibition,
        EntityDef::macromolecule("X"),
        production(EntityDef::macromolecule("TP53")),
    ));
    assert!(rehomed.is_some());
    assert_eq!(
        net.modulation(rehomed.unwrap()).unwrap().target,
        translation
    );

    // X itself stays in the network; the gene and mRNA are gone.
    assert!(net
        .get_entity_structural(&EntityDef::macromolecule("X"))
        .is_some());
    assert!(net.get_entity_structural(&gene("TP53g")).is_none());
    assert!(net.get_entity_structural(&mrna("TP53m")).is_none());
    assert_eq!(net.modulation_count(), 1);
}

#[test]
fn unrelated_patterns_are_untouched() {
    let mut net = gene_expression_network();
    // A plain catalysed reaction that matches no expression pattern.
    net.add_modulation(ModulationDef::new(
        ModulationClass::Catalysis,
        EntityDef::macromolecule("E"),
        ProcessDef::generic()
            .with_reactant(EntityDef::macromolecule("S"))
            .with_product(EntityDef::macromolecule("P")),
    ));

    net.simplify_gene_expressions().unwrap();

    assert!(net
        .get_modulation_structural(&ModulationDef::new(
            ModulationClass::Catalysis,
            EntityDef::macromolecule("E"),
            ProcessDef::generic()
                .with_reactant(EntityDef::macromolecule("S"))
                .with_product(EntityDef::macromolecule("P")),
        ))
        .is_some());
}

#[test]
fn transcription_without_translation_still_collapses() {
    let mut net = Network::new();
    net.add_modulation(ModulationDef::new(
        ModulationClass::NecessaryStimulation,
        gene("BRCA1g"),
        production(mrna("BRCA1m")),
    ));

    net.simplify_gene_expressions().unwrap();

    // The transcription and its gene trigger go; the orphaned mRNA entity
    // remains (no translation consumed it).
    assert!(net.get_entity_structural(&gene("BRCA1g")).is_none());
    assert_eq!(net.process_count(), 0);
    assert!(net.get_entity_structural(&mrna("BRCA1m")).is_some());
}

#[test]
fn rerunning_the_rewriter_is_a_no_op() {
    let mut net = gene_expression_network();
    net.simplify_gene_expressions().unwrap();
    let snapshot = net.clone();
    net.simplify_gene_expressions().unwrap();
    assert_eq!(net, snapshot);
}
