use std::collections::HashMap;

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::alphabet::{SymbolClass, SymbolClassIterator};
use crate::dfa::{RunLengthDFA, State};

pub type TransitionGraph = DiGraph<State, SymbolClass>;

// one node per state, one edge per (state, symbol class) cell of the table
pub fn transition_graph() -> TransitionGraph {
    let mut state_to_index: HashMap<State, NodeIndex> = HashMap::new();
    let mut graph: TransitionGraph = DiGraph::new();
    for state in State::ALL {
        let index = graph.add_node(state);
        state_to_index.insert(state, index);
    }

    for state in State::ALL {
        for class in SymbolClassIterator::new() {
            let next = RunLengthDFA::transition(state, class).next;
            graph.add_edge(state_to_index[&state], state_to_index[&next], class);
        }
    }

    graph
}

pub fn to_dot(graph: &TransitionGraph) -> String {
    format!("{:?}", Dot::with_config(graph, &[]))
}
