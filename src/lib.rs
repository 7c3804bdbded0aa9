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

#[macro_use]
extern crate log;

pub use crate::bfs::Bfs;
pub use crate::constants::*;
pub use crate::dijkstra::Dijkstra;
pub use crate::input_graph::Edge;
pub use crate::input_graph::InputGraph;
pub use crate::search_graph::Arc;
pub use crate::search_graph::SearchGraph;
pub use crate::shortest_path::ShortestPath;
pub use crate::shortest_path_tree::ShortestPathTree;

mod bfs;
mod constants;
mod dijkstra;
#[cfg(test)]
mod floyd_warshall;
mod input_graph;
mod search_graph;
mod shortest_path;
mod shortest_path_tree;

/// Calculates the shortest distances and predecessor links from `start` to
/// every node of the graph.
pub fn calc_tree(graph: &SearchGraph, start: NodeId) -> ShortestPathTree {
    Dijkstra::new(graph).calc_tree(start)
}

/// Calculates the minimum-weight path from `start` to `target`. Use
/// `calc_tree()` instead when you need paths from one start node to many
/// targets.
pub fn calc_path(graph: &SearchGraph, start: NodeId, target: NodeId) -> Option<ShortestPath> {
    Dijkstra::new(graph).calc_path(start, target)
}

/// Calculates the weight of the minimum-weight path from `start` to `target`.
pub fn calc_weight(graph: &SearchGraph, start: NodeId, target: NodeId) -> Option<Weight> {
    Dijkstra::new(graph).calc_weight(start, target)
}

/// Calculates the path with the fewest hops from `start` to `goal`, ignoring
/// edge weights.
pub fn calc_hop_path(graph: &SearchGraph, start: NodeId, goal: NodeId) -> Option<ShortestPath> {
    Bfs::new(graph).search(start, goal)
}
