/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use crate::constants::NodeId;
use crate::constants::Weight;
use crate::input_graph::InputGraph;

/// Adjacency list representation the search algorithms run on. The graph is
/// undirected, so every edge appears in the neighbor lists of both of its
/// endpoints. It is never mutated during a search.
pub struct SearchGraph {
    edges: Vec<Vec<Arc>>,
    num_nodes: usize,
}

impl SearchGraph {
    pub fn new(num_nodes: usize) -> Self {
        SearchGraph {
            edges: (0..num_nodes).map(|_| Vec::with_capacity(3)).collect(),
            num_nodes,
        }
    }

    pub fn from_input_graph(input_graph: &InputGraph) -> Self {
        let mut graph = SearchGraph::new(input_graph.get_num_nodes());
        for e in input_graph.get_edges() {
            graph.add_edge(e.from, e.to, e.weight);
        }
        graph
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.assert_valid_node_id(from);
        self.assert_valid_node_id(to);
        if from == to {
            warn!(
                "Loop edges are not allowed. Skipped edge! from: {}, to: {}, weight: {}",
                from, to, weight
            );
            return;
        }
        self.edges[from].push(Arc::new(to, weight));
        self.edges[to].push(Arc::new(from, weight));
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn get_neighbors(&self, node: NodeId) -> &Vec<Arc> {
        self.assert_valid_node_id(node);
        return &self.edges[node];
    }

    /// Returns the weight of the edge between the two given nodes, or `None`
    /// if they are not adjacent.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.assert_valid_node_id(from);
        self.assert_valid_node_id(to);
        self.edges[from]
            .iter()
            .find(|arc| arc.adj_node == to)
            .map(|arc| arc.weight)
    }

    fn assert_valid_node_id(&self, node: NodeId) {
        if node >= self.num_nodes {
            panic!(
                "invalid node id {}, must be in [0, {})",
                node, self.num_nodes
            );
        }
    }
}

#[derive(Clone)]
pub struct Arc {
    pub adj_node: NodeId,
    pub weight: Weight,
}

impl Arc {
    pub fn new(adj_node: NodeId, weight: Weight) -> Self {
        Arc { adj_node, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_visible_from_both_endpoints() {
        let mut g = SearchGraph::new(4);
        g.add_edge(0, 1, 1);
        g.add_edge(0, 2, 1);
        g.add_edge(2, 3, 1);
        assert_eq!(adj_nodes(g.get_neighbors(0)), vec![1, 2]);
        assert_eq!(adj_nodes(g.get_neighbors(2)), vec![0, 3]);
        assert_eq!(adj_nodes(g.get_neighbors(3)), vec![2]);
    }

    #[test]
    fn edge_weight_lookup() {
        let mut g = SearchGraph::new(3);
        g.add_edge(0, 1, 7);
        assert_eq!(Some(7), g.edge_weight(0, 1));
        assert_eq!(Some(7), g.edge_weight(1, 0));
        assert_eq!(None, g.edge_weight(0, 2));
    }

    #[test]
    fn skips_loops() {
        let mut g = SearchGraph::new(2);
        g.add_edge(1, 1, 5);
        assert!(g.get_neighbors(1).is_empty());
    }

    #[test]
    #[should_panic]
    fn panics_on_invalid_node_id() {
        let mut g = SearchGraph::new(2);
        g.add_edge(0, 2, 1);
    }

    #[test]
    fn keeps_isolated_nodes_from_input_graph() {
        let mut input_graph = InputGraph::new();
        let a = input_graph.add_node();
        let b = input_graph.add_node();
        let isolated = input_graph.add_node();
        input_graph.add_edge(a, b, 3);
        input_graph.freeze();
        let g = SearchGraph::from_input_graph(&input_graph);
        assert_eq!(3, g.get_num_nodes());
        assert!(g.get_neighbors(isolated).is_empty());
    }

    fn adj_nodes(edges: &Vec<Arc>) -> Vec<NodeId> {
        edges.iter().map(|e| e.adj_node).collect::<Vec<NodeId>>()
    }
}
