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

use std::cmp;

use crate::constants::{NodeId, Weight, WEIGHT_MAX};
use crate::search_graph::SearchGraph;

/// All-pairs shortest distances, used as a brute-force oracle to cross-check
/// the Dijkstra results in tests.
pub struct FloydWarshall {
    num_nodes: usize,
    matrix: Vec<Weight>,
}

impl FloydWarshall {
    pub fn new(num_nodes: usize) -> Self {
        FloydWarshall {
            num_nodes,
            matrix: vec![WEIGHT_MAX; num_nodes * num_nodes],
        }
    }

    pub fn prepare(&mut self, graph: &SearchGraph) {
        assert_eq!(
            graph.get_num_nodes(),
            self.num_nodes,
            "graph has invalid number of nodes"
        );
        let n = self.num_nodes;
        for node in 0..n {
            // the adjacency lists contain each undirected edge twice, once per
            // endpoint, so this fills the matrix symmetrically
            for arc in graph.get_neighbors(node) {
                let idx = node * n + arc.adj_node;
                self.matrix[idx] = cmp::min(self.matrix[idx], arc.weight);
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        self.matrix[i * n + j] = 0;
                    }
                    let weight_ik = self.matrix[i * n + k];
                    let weight_kj = self.matrix[k * n + j];
                    if weight_ik == WEIGHT_MAX || weight_kj == WEIGHT_MAX {
                        continue;
                    }
                    let idx = i * n + j;
                    self.matrix[idx] = cmp::min(self.matrix[idx], weight_ik + weight_kj)
                }
            }
        }
    }

    pub fn calc_weight(&self, source: NodeId, target: NodeId) -> Weight {
        return self.matrix[source * self.num_nodes + target];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_weights() {
        // 0 -- 1 -- 3
        // |
        // 4 -- 5    2
        let mut g = SearchGraph::new(6);
        g.add_edge(0, 1, 6);
        g.add_edge(1, 3, 1);
        g.add_edge(0, 4, 1);
        g.add_edge(4, 5, 1);
        let mut fw = FloydWarshall::new(g.get_num_nodes());
        fw.prepare(&g);
        assert_eq!(7, fw.calc_weight(0, 3));
        assert_eq!(2, fw.calc_weight(0, 5));
        assert_eq!(9, fw.calc_weight(5, 3));
        // distances are symmetric on an undirected graph
        assert_eq!(fw.calc_weight(3, 5), fw.calc_weight(5, 3));
        assert_eq!(0, fw.calc_weight(1, 1));
        assert_eq!(WEIGHT_MAX, fw.calc_weight(0, 2));
        assert_eq!(WEIGHT_MAX, fw.calc_weight(2, 0));
    }
}
