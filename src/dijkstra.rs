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

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::NodeId;
use crate::constants::Weight;
use crate::constants::{INVALID_NODE, WEIGHT_MAX, WEIGHT_ZERO};
use crate::search_graph::SearchGraph;
use crate::shortest_path::ShortestPath;
use crate::shortest_path_tree::ShortestPathTree;

/// Dijkstra's algorithm over a `SearchGraph`. All edge weights are
/// non-negative by construction (`Weight` is unsigned), which the algorithm's
/// correctness depends on.
pub struct Dijkstra<'a> {
    graph: &'a SearchGraph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a SearchGraph) -> Self {
        Dijkstra { graph }
    }

    /// Calculates the minimum total weight and a predecessor link from `start`
    /// to every node of the graph. Nodes that cannot be reached keep
    /// `WEIGHT_MAX` and no predecessor. The returned tree is freshly allocated
    /// and owned by the caller.
    pub fn calc_tree(&self, start: NodeId) -> ShortestPathTree {
        let num_nodes = self.graph.get_num_nodes();
        assert!(
            start < num_nodes,
            "invalid start node {}, graph has {} nodes",
            start,
            num_nodes
        );
        let mut distances = vec![WEIGHT_MAX; num_nodes];
        let mut predecessors = vec![INVALID_NODE; num_nodes];
        let mut settled = vec![false; num_nodes];
        let mut heap = BinaryHeap::new();
        distances[start] = WEIGHT_ZERO;
        heap.push(HeapItem::new(WEIGHT_ZERO, start));

        // nodes that are not reachable never enter the heap, so the loop ends
        // as soon as the whole reachable component is settled
        while let Some(curr) = heap.pop() {
            if settled[curr.node] {
                // there is no decrease key operation, so duplicate heap items
                // must be filtered out here
                continue;
            }
            settled[curr.node] = true;
            for arc in self.graph.get_neighbors(curr.node) {
                if settled[arc.adj_node] {
                    continue;
                }
                let weight = curr.weight + arc.weight;
                if weight < distances[arc.adj_node] {
                    distances[arc.adj_node] = weight;
                    predecessors[arc.adj_node] = curr.node;
                    heap.push(HeapItem::new(weight, arc.adj_node));
                }
            }
        }
        ShortestPathTree::new(start, distances, predecessors)
    }

    /// Calculates the minimum-weight path from `start` to `target`.
    pub fn calc_path(&self, start: NodeId, target: NodeId) -> Option<ShortestPath> {
        self.calc_tree(start).calc_path(target)
    }

    /// Calculates the weight of the minimum-weight path from `start` to
    /// `target`, or `None` if `target` cannot be reached.
    pub fn calc_weight(&self, start: NodeId, target: NodeId) -> Option<Weight> {
        let tree = self.calc_tree(start);
        match tree.get_distance(target) {
            WEIGHT_MAX => None,
            weight => Some(weight),
        }
    }
}

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem {
    weight: Weight,
    node: NodeId,
}

impl HeapItem {
    fn new(weight: Weight, node: NodeId) -> HeapItem {
        HeapItem { weight, node }
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &HeapItem) -> Ordering {
        self.weight.cmp(&other.weight).reverse()
    }
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight
    }
}
