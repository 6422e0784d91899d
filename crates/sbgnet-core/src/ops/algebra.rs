//! Algebraic combination of two networks.
//!
//! All three operations build a fresh network from detached copies of the
//! operands' elements and lean on the insertion engine for deduplication
//! and referential integrity. The result never aliases either operand.

use crate::network::Network;

impl Network {
    /// The union of two networks.
    ///
    /// Every element of `self`, then every element of `other`, is re-added
    /// in collection order (entities, processes, modulations, compartments,
    /// operators); structurally equal elements from the two operands merge.
    pub fn union(&self, other: &Network) -> Network {
        let mut result = Network::new();
        for operand in [self, other] {
            for def in operand.entity_defs() {
                result.add_entity(def);
            }
            for def in operand.process_defs() {
                result.add_process(def);
            }
            for def in operand.modulation_defs() {
                result.add_modulation(def);
            }
            for def in operand.compartment_defs() {
                result.add_compartment(def);
            }
            for def in operand.lo_defs() {
                result.add_lo(def);
            }
        }
        result
    }

    /// The intersection of two networks: elements of `self` structurally
    /// present in `other`.
    pub fn intersection(&self, other: &Network) -> Network {
        let mut result = Network::new();
        for def in self.entity_defs() {
            if other.get_entity_structural(&def).is_some() {
                result.add_entity(def);
            }
        }
        for def in self.process_defs() {
            if other.get_process_structural(&def).is_some() {
                result.add_process(def);
            }
        }
        for def in self.modulation_defs() {
            if other.get_modulation_structural(&def).is_some() {
                result.add_modulation(def);
            }
        }
        for def in self.compartment_defs() {
            if other.get_compartment_structural(&def).is_some() {
                result.add_compartment(def);
            }
        }
        for def in self.lo_defs() {
            if other.get_lo_structural(&def).is_some() {
                result.add_lo(def);
            }
        }
        result
    }

    /// The difference of two networks: elements of `self` structurally
    /// absent from `other`.
    ///
    /// Modulations are considered first, then processes, entities,
    /// compartments and operators; re-insertion through the engine pulls in
    /// whatever a retained element needs, so the result is a well-formed
    /// subgraph even when an endpoint itself is present in both operands.
    pub fn difference(&self, other: &Network) -> Network {
        let mut result = Network::new();
        for def in self.modulation_defs() {
            if other.get_modulation_structural(&def).is_none() {
                result.add_modulation(def);
            }
        }
        for def in self.process_defs() {
            if other.get_process_structural(&def).is_none() {
                result.add_process(def);
            }
        }
        for def in self.entity_defs() {
            if other.get_entity_structural(&def).is_none() {
                result.add_entity(def);
            }
        }
        for def in self.compartment_defs() {
            if other.get_compartment_structural(&def).is_none() {
                result.add_compartment(def);
            }
        }
        for def in self.lo_defs() {
            if other.get_lo_structural(&def).is_none() {
                result.add_lo(def);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compartment::CompartmentDef;
    use crate::entity::EntityDef;

    #[test]
    fn union_preserves_shared_compartments_without_aliasing() {
        let mut left = Network::new();
        left.add_entity(
            EntityDef::macromolecule("A").in_compartment(CompartmentDef::new("cytosol")),
        );
        let mut right = Network::new();
        right.add_entity(
            EntityDef::macromolecule("B").in_compartment(CompartmentDef::new("cytosol")),
        );

        let merged = left.union(&right);
        assert_eq!(merged.entity_count(), 2);
        assert_eq!(merged.compartment_count(), 1);

        // Mutating the union leaves the operands untouched.
        let (c, _) = merged.compartments().next().unwrap();
        let mut merged = merged;
        merged.remove_compartment(c).unwrap();
        assert_eq!(left.compartment_count(), 1);
        assert_eq!(right.compartment_count(), 1);
    }
}
