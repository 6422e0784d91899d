//! Read-only graph projection of a network.
//!
//! Entities, processes and operators become petgraph nodes; reactant,
//! product, child and modulation relations become directed edges. The
//! projection is recomputed from the collections on each construction and
//! never feeds back into the container; it exists for inspection and DOT
//! export. No layout is computed here.

use crate::network::Network;
use crate::operator::SourceRef;
use crate::types::{EntityId, OperatorId, ProcessId};
use petgraph::dot::Dot;
use petgraph::graph::{Graph, NodeIndex};
use std::collections::HashMap;

/// A petgraph view over one network.
pub struct Topology {
    graph: Graph<String, &'static str>,
    entity_index: HashMap<EntityId, NodeIndex>,
    process_index: HashMap<ProcessId, NodeIndex>,
    operator_index: HashMap<OperatorId, NodeIndex>,
}

impl Topology {
    /// Project the network's current state.
    pub fn from_network(network: &Network) -> Self {
        let mut graph = Graph::new();
        let mut entity_index = HashMap::new();
        let mut process_index = HashMap::new();
        let mut operator_index = HashMap::new();

        for (id, _) in network.entities() {
            let label = network
                .entity_def(id)
                .map(|def| def.to_string())
                .unwrap_or_default();
            entity_index.insert(id, graph.add_node(label));
        }
        for (id, process) in network.processes() {
            let node = graph.add_node(process.class.name().to_string());
            process_index.insert(id, node);
            for reactant in &process.reactants {
                if let Some(&from) = entity_index.get(reactant) {
                    graph.add_edge(from, node, "reactant");
                }
            }
            for product in &process.products {
                if let Some(&to) = entity_index.get(product) {
                    graph.add_edge(node, to, "product");
                }
            }
        }
        for (id, operator) in network.los() {
            operator_index.insert(id, graph.add_node(operator.class.name().to_string()));
        }
        for (id, operator) in network.los() {
            let Some(&node) = operator_index.get(&id) else {
                continue;
            };
            for child in &operator.children {
                let from = match child {
                    SourceRef::Entity(e) => entity_index.get(e).copied(),
                    SourceRef::Operator(o) => operator_index.get(o).copied(),
                };
                if let Some(from) = from {
                    graph.add_edge(from, node, "child");
                }
            }
        }
        for (_, modulation) in network.modulations() {
            let from = match modulation.source {
                SourceRef::Entity(e) => entity_index.get(&e).copied(),
                SourceRef::Operator(o) => operator_index.get(&o).copied(),
            };
            let to = process_index.get(&modulation.target).copied();
            if let (Some(from), Some(to)) = (from, to) {
                graph.add_edge(from, to, modulation.class.name());
            }
        }

        Self {
            graph,
            entity_index,
            process_index,
            operator_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes with no incident edges, by display label.
    pub fn isolated_nodes(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors_undirected(idx).next().is_none())
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Number of edges incident to the given entity.
    pub fn entity_degree(&self, id: EntityId) -> usize {
        self.entity_index
            .get(&id)
            .map(|&idx| self.graph.neighbors_undirected(idx).count())
            .unwrap_or(0)
    }

    /// Whether the process appears in the projection.
    pub fn has_process(&self, id: ProcessId) -> bool {
        self.process_index.contains_key(&id)
    }

    /// Whether the operator appears in the projection.
    pub fn has_operator(&self, id: OperatorId) -> bool {
        self.operator_index.contains_key(&id)
    }

    /// Graphviz DOT rendering of the projection.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.graph))
    }
}

impl Network {
    /// Graphviz DOT rendering of the network's current topology.
    pub fn to_dot(&self) -> String {
        Topology::from_network(self).to_dot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityDef;
    use crate::modulation::{ModulationClass, ModulationDef};
    use crate::process::ProcessDef;

    #[test]
    fn projection_counts_nodes_and_edges() {
        let mut net = Network::new();
        net.add_modulation(ModulationDef::new(
            ModulationClass::Catalysis,
            EntityDef::macromolecule("E"),
            ProcessDef::generic()
                .with_reactant(EntityDef::macromolecule("S"))
                .with_product(EntityDef::macromolecule("P")),
        ));

        let topology = Topology::from_network(&net);
        // Three entities plus one process.
        assert_eq!(topology.node_count(), 4);
        // Reactant, product and modulation edges.
        assert_eq!(topology.edge_count(), 3);
        assert!(topology.isolated_nodes().is_empty());

        let dot = net.to_dot();
        assert!(dot.contains("digraph"));
        assert!(dot.contains("Catalysis"));
    }
}
