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

use std::collections::VecDeque;

use crate::constants::NodeId;
use crate::constants::WEIGHT_ZERO;
use crate::search_graph::SearchGraph;
use crate::shortest_path::ShortestPath;

/// Breadth-first search over a `SearchGraph`. Finds the path with the fewest
/// hops between two nodes, ignoring edge weights entirely. On graphs with
/// non-uniform weights this path and the minimum-weight path of `Dijkstra`
/// are in general different.
pub struct Bfs<'a> {
    graph: &'a SearchGraph,
}

impl<'a> Bfs<'a> {
    pub fn new(graph: &'a SearchGraph) -> Self {
        Bfs { graph }
    }

    /// Calculates the path with the fewest hops from `start` to `goal`, or
    /// `None` if `goal` cannot be reached. The returned path carries the
    /// total weight of its edges, which is not necessarily minimal.
    pub fn search(&self, start: NodeId, goal: NodeId) -> Option<ShortestPath> {
        let num_nodes = self.graph.get_num_nodes();
        assert!(
            start < num_nodes,
            "invalid start node {}, graph has {} nodes",
            start,
            num_nodes
        );
        assert!(
            goal < num_nodes,
            "invalid goal node {}, graph has {} nodes",
            goal,
            num_nodes
        );
        let mut visited = vec![false; num_nodes];
        visited[start] = true;
        let mut frontier: VecDeque<Vec<NodeId>> = VecDeque::new();
        frontier.push_back(vec![start]);

        // each node is visited at most once, the first time it is discovered,
        // which makes the first path that reaches the goal hop-minimal
        while let Some(path) = frontier.pop_front() {
            let node = *path.last().unwrap();
            if node == goal {
                return Some(self.build_path(path));
            }
            for arc in self.graph.get_neighbors(node) {
                if visited[arc.adj_node] {
                    continue;
                }
                visited[arc.adj_node] = true;
                let mut extended = path.clone();
                extended.push(arc.adj_node);
                frontier.push_back(extended);
            }
        }
        None
    }

    fn build_path(&self, nodes: Vec<NodeId>) -> ShortestPath {
        let source = nodes[0];
        let target = nodes[nodes.len() - 1];
        let mut weight = WEIGHT_ZERO;
        for pair in nodes.windows(2) {
            // consecutive frontier nodes are adjacent by construction
            weight += self.graph.edge_weight(pair[0], pair[1]).unwrap();
        }
        ShortestPath::new(source, target, weight, nodes)
    }
}
