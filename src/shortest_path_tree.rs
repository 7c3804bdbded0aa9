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
use crate::constants::INVALID_NODE;
use crate::constants::WEIGHT_MAX;
use crate::shortest_path::ShortestPath;

/// The result of a single-source Dijkstra run: for every node of the graph the
/// minimum total weight from the start node and the predecessor on one such
/// minimum path. Unreachable nodes keep `WEIGHT_MAX` and no predecessor. The
/// predecessor links form a tree rooted at the start node.
pub struct ShortestPathTree {
    start: NodeId,
    distances: Vec<Weight>,
    predecessors: Vec<NodeId>,
}

impl ShortestPathTree {
    pub(crate) fn new(start: NodeId, distances: Vec<Weight>, predecessors: Vec<NodeId>) -> Self {
        ShortestPathTree {
            start,
            distances,
            predecessors,
        }
    }

    pub fn get_start(&self) -> NodeId {
        self.start
    }

    pub fn get_num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// Returns the minimum total weight from the start node to the given node,
    /// or `WEIGHT_MAX` if the node cannot be reached.
    pub fn get_distance(&self, node: NodeId) -> Weight {
        self.assert_valid_node_id(node);
        self.distances[node]
    }

    /// Returns the node preceding the given node on a shortest path from the
    /// start. The start node itself and unreachable nodes have no predecessor.
    pub fn get_predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.assert_valid_node_id(node);
        match self.predecessors[node] {
            INVALID_NODE => None,
            pred => Some(pred),
        }
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.get_distance(node) != WEIGHT_MAX
    }

    /// Walks the predecessor links back from `target` and returns the shortest
    /// path from the start node to `target` in forward order, or `None` if
    /// `target` cannot be reached. Never returns a partial path.
    pub fn calc_path(&self, target: NodeId) -> Option<ShortestPath> {
        self.assert_valid_node_id(target);
        if target == self.start {
            return Some(ShortestPath::singular(self.start));
        }
        if self.distances[target] == WEIGHT_MAX {
            return None;
        }
        let mut nodes = Vec::new();
        let mut node = target;
        while self.predecessors[node] != INVALID_NODE {
            nodes.push(node);
            node = self.predecessors[node];
        }
        if node != self.start {
            return None;
        }
        nodes.push(self.start);
        nodes = nodes.iter().rev().cloned().collect();
        Some(ShortestPath::new(
            self.start,
            target,
            self.distances[target],
            nodes,
        ))
    }

    fn assert_valid_node_id(&self, node: NodeId) {
        if node >= self.distances.len() {
            panic!(
                "invalid node id {}, must be in [0, {})",
                node,
                self.distances.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::Dijkstra;
    use crate::search_graph::SearchGraph;

    #[test]
    fn path_to_start_is_singular() {
        let g = triangle();
        let tree = Dijkstra::new(&g).calc_tree(0);
        let path = tree.calc_path(0).unwrap();
        assert_eq!(&vec![0], path.get_nodes());
        assert_eq!(0, path.get_weight());
    }

    #[test]
    fn reconstructed_path_consists_of_graph_edges() {
        let g = triangle();
        let tree = Dijkstra::new(&g).calc_tree(0);
        let path = tree.calc_path(2).unwrap();
        let nodes = path.get_nodes();
        let mut weight = 0;
        for pair in nodes.windows(2) {
            weight += g
                .edge_weight(pair[0], pair[1])
                .expect("consecutive path nodes must be adjacent");
        }
        assert_eq!(path.get_weight(), weight);
        assert_eq!(tree.get_distance(2), weight);
    }

    #[test]
    fn no_partial_path_for_unreachable_target() {
        // 0 -- 1    2
        let mut g = SearchGraph::new(3);
        g.add_edge(0, 1, 1);
        let tree = Dijkstra::new(&g).calc_tree(0);
        assert!(tree.calc_path(2).is_none());
        assert_eq!(WEIGHT_MAX, tree.get_distance(2));
        assert_eq!(None, tree.get_predecessor(2));
        assert!(!tree.is_reachable(2));
    }

    #[test]
    fn start_has_no_predecessor() {
        let g = triangle();
        let tree = Dijkstra::new(&g).calc_tree(0);
        assert_eq!(None, tree.get_predecessor(0));
        assert_eq!(0, tree.get_distance(0));
    }

    fn triangle() -> SearchGraph {
        let mut g = SearchGraph::new(3);
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(0, 2, 5);
        g
    }
}
