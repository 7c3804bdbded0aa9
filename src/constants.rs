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

pub type NodeId = usize;
pub type Weight = usize;

/// Marks the absence of a node, for example the predecessor of a node that has
/// not been reached (yet).
pub const INVALID_NODE: NodeId = std::usize::MAX;

/// The distance of nodes that cannot be reached at all.
pub const WEIGHT_MAX: Weight = std::usize::MAX;

pub const WEIGHT_ZERO: Weight = 0;
