//! The gene-expression rewriter.
//!
//! Collapses two-step gene expression (a gene necessarily stimulating a
//! transcription that produces an mRNA, which necessarily stimulates a
//! translation that produces a protein) into the direct production step.
//! Modulators of the transcription other than the gene trigger are
//! re-homed onto the translation, so regulation survives the collapse.

use crate::entity::{EntityClass, EntityDef};
use crate::error::Result;
use crate::modulation::{ModulationClass, ModulationDef};
use crate::network::Network;
use crate::operator::SourceRef;
use crate::types::EntityId;
use log::info;

impl Network {
    /// Collapse every transcription/translation pair in the network.
    ///
    /// For each transcription the gene trigger and the transcription
    /// process are removed (with their modulations, per the standard
    /// cascade) while every other modulation targeting the transcription is
    /// collected. For each translation driven by an mRNA that some removed
    /// transcription produced, the collected modulations are re-targeted at
    /// the translation and the mRNA is removed, taking its driving
    /// modulation with it.
    pub fn simplify_gene_expressions(&mut self) -> Result<()> {
        let transcriptions = self.transcriptions();
        let mut collected: Vec<(EntityDef, Vec<ModulationDef>)> = Vec::new();

        for t in transcriptions {
            let Some(t_def) = self.process_def(t) else {
                continue;
            };
            let Some(mrna) = t_def.products.first().cloned() else {
                continue;
            };

            let mut auxiliary = Vec::new();
            let mut genes: Vec<EntityId> = Vec::new();
            for mid in self.modulations_targeting(t) {
                let Some(modulation) = self.modulation(mid) else {
                    continue;
                };
                let gene_trigger = modulation.class == ModulationClass::NecessaryStimulation
                    && match modulation.source {
                        SourceRef::Entity(e) => self.entity(e).is_some_and(|entity| {
                            entity.class == EntityClass::NucleicAcidFeature
                                && entity.has_ui("ct", "gene")
                        }),
                        SourceRef::Operator(_) => false,
                    };
                if gene_trigger {
                    if let SourceRef::Entity(e) = modulation.source {
                        genes.push(e);
                    }
                } else if let Some(def) = self.modulation_def(mid) {
                    auxiliary.push(def);
                }
            }
            collected.push((mrna, auxiliary));

            for gene in genes {
                if self.entity(gene).is_some() {
                    self.remove_entity(gene)?;
                }
            }
            if self.process(t).is_some() {
                self.remove_process(t)?;
            }
        }

        let translations = self.translations();
        let mut collapsed = 0usize;
        for tt in translations {
            let Some(tt_def) = self.process_def(tt) else {
                continue;
            };
            let drivers: Vec<EntityId> = self
                .modulations_targeting(tt)
                .into_iter()
                .filter_map(|mid| {
                    let modulation = self.modulation(mid)?;
                    if modulation.class != ModulationClass::NecessaryStimulation {
                        return None;
                    }
                    match modulation.source {
                        SourceRef::Entity(e) => self.entity(e).and_then(|entity| {
                            (entity.class == EntityClass::NucleicAcidFeature
                                && entity.has_ui("ct", "mRNA"))
                            .then_some(e)
                        }),
                        SourceRef::Operator(_) => None,
                    }
                })
                .collect();

            for mrna_id in drivers {
                let Some(source_def) = self.entity_def(mrna_id) else {
                    continue;
                };
                for (mrna, auxiliary) in &collected {
                    if *mrna == source_def {
                        for modulation in auxiliary {
                            let mut rehomed = modulation.clone();
                            rehomed.target = Box::new(tt_def.clone());
                            self.add_modulation(rehomed);
                        }
                        collapsed += 1;
                    }
                }
                // The driving modulation cascades away with its source.
                if self.entity(mrna_id).is_some() {
                    self.remove_entity(mrna_id)?;
                }
            }
        }

        if collapsed > 0 {
            info!("collapsed {} gene expression pattern(s)", collapsed);
        }
        Ok(())
    }
}
