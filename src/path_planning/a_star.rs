//! A* route search over ship poses
//!
//! The search state is a pose (center cell plus long axis), so every grid
//! cell contributes two states. Successors come from [`ShipKinematics`];
//! straight moves and pivots carry different costs.
//!
//! The goal test fires when a successor is *created* on the finish cell,
//! not when it is popped. This returns as soon as the finish is touched,
//! which can miss an equally short route that would only show up after
//! further expansion.

use log::{debug, trace, warn};

use crate::common::{ClearanceMap, GridPoint, Pose, ShipPath, Turn};

use super::search_sets::{ClosedSet, OpenSet};
use super::ship_kinematics::ShipKinematics;

/// Configuration for the pose search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Cost of one straight move; also the heuristic's cost per cell
    pub straight_cost: u32,
    /// Cost of one pivot move
    pub turn_cost: u32,
    /// Give up after this many expansions (None = search to exhaustion)
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            straight_cost: 10,
            turn_cost: 15,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    /// Cost of the move that produced a pose with this turn flag
    pub fn move_cost(&self, turn: Turn) -> u32 {
        if turn.is_turn() {
            self.turn_cost
        } else {
            self.straight_cost
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    pose: Pose,
    g_cost: u32,
    h_cost: u32,
    parent_index: Option<usize>,
}

impl Node {
    fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }

    /// Re-parent onto a cheaper route; the turn flag follows the new move
    fn relax(&mut self, via: Pose, g_cost: u32, parent_index: usize) -> bool {
        if g_cost >= self.g_cost {
            return false;
        }
        self.g_cost = g_cost;
        self.parent_index = Some(parent_index);
        self.pose.turn = via.turn;
        true
    }
}

/// Result of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start-to-finish poses; empty when no route exists
    pub path: ShipPath,
    /// Accumulated move cost of `path`
    pub cost: Option<u32>,
    /// Nodes taken off the open set
    pub expanded: usize,
    /// Open nodes moved onto a cheaper parent
    pub relaxed: usize,
}

impl SearchOutcome {
    fn not_found(expanded: usize, relaxed: usize) -> Self {
        Self {
            path: ShipPath::new(),
            cost: None,
            expanded,
            relaxed,
        }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A* planner for the 1x3 ship
pub struct ShipAStarPlanner<'a, M: ClearanceMap + ?Sized> {
    kinematics: ShipKinematics<'a, M>,
    config: SearchConfig,
}

impl<'a, M: ClearanceMap + ?Sized> ShipAStarPlanner<'a, M> {
    pub fn new(map: &'a M, config: SearchConfig) -> Self {
        Self {
            kinematics: ShipKinematics::new(map),
            config,
        }
    }

    pub fn with_defaults(map: &'a M) -> Self {
        Self::new(map, SearchConfig::default())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Manhattan distance to the finish, in straight-move units.
    ///
    /// Admissible: there are no diagonal moves and each move shifts the
    /// center by exactly one cell for at least the straight cost.
    pub fn heuristic(&self, pose: &Pose, finish: GridPoint) -> u32 {
        self.config.straight_cost * pose.point().manhattan(&finish) as u32
    }

    /// Search from `start` until a pose centered on `finish` is generated.
    pub fn plan(&self, start: Pose, finish: GridPoint) -> SearchOutcome {
        trace!("[ShipAStar] plan: start={} finish=({},{})", start, finish.row, finish.col);

        if !self.kinematics.can_place(start.point(), start.orientation) {
            debug!("[ShipAStar] start {} does not fit", start);
            return SearchOutcome::not_found(0, 0);
        }

        let root = Node {
            pose: start,
            g_cost: 0,
            h_cost: self.heuristic(&start, finish),
            parent_index: None,
        };
        if root.h_cost == 0 {
            return SearchOutcome {
                path: ShipPath::from_poses(vec![start]),
                cost: Some(0),
                expanded: 0,
                relaxed: 0,
            };
        }

        let mut node_storage = vec![root];
        let mut open_set = OpenSet::new();
        let mut closed_set = ClosedSet::new();
        open_set.insert(start.key(), node_storage[0].f_cost(), 0);

        let mut expanded = 0;
        let mut relaxed = 0;
        while let Some(current_index) = open_set.pop_least() {
            if let Some(limit) = self.config.max_expansions {
                if expanded >= limit {
                    warn!("[ShipAStar] expansion limit {} reached, giving up", limit);
                    return SearchOutcome::not_found(expanded, relaxed);
                }
            }
            expanded += 1;

            let current = node_storage[current_index].clone();
            closed_set.insert(current.pose.key());
            trace!(
                "[ShipAStar] expand {} g={} h={} open={}",
                current.pose,
                current.g_cost,
                current.h_cost,
                open_set.len()
            );

            for successor in self.kinematics.successors(&current.pose).into_iter().flatten() {
                let key = successor.key();
                if closed_set.contains(&key) {
                    continue;
                }

                let g_cost = current.g_cost + self.config.move_cost(successor.turn);

                if let Some(open_index) = open_set.find(&key) {
                    let node = &mut node_storage[open_index];
                    if node.relax(successor, g_cost, current_index) {
                        relaxed += 1;
                        open_set.reposition(key, node.f_cost());
                    }
                    continue;
                }

                let node = Node {
                    pose: successor,
                    g_cost,
                    h_cost: self.heuristic(&successor, finish),
                    parent_index: Some(current_index),
                };
                let f_cost = node.f_cost();
                let is_goal = node.h_cost == 0;
                node_storage.push(node);
                let new_index = node_storage.len() - 1;

                if is_goal {
                    debug!(
                        "[ShipAStar] finish reached: cost={} expanded={} nodes={}",
                        g_cost,
                        expanded,
                        node_storage.len()
                    );
                    return SearchOutcome {
                        path: Self::build_path(new_index, &node_storage),
                        cost: Some(g_cost),
                        expanded,
                        relaxed,
                    };
                }
                open_set.insert(key, f_cost, new_index);
            }
        }

        debug!(
            "[ShipAStar] no route after expanding {} nodes ({} relaxed)",
            expanded, relaxed
        );
        SearchOutcome::not_found(expanded, relaxed)
    }

    fn build_path(goal_index: usize, node_storage: &[Node]) -> ShipPath {
        let mut poses = Vec::new();
        let mut current_index = Some(goal_index);

        while let Some(index) = current_index {
            let node = &node_storage[index];
            poses.push(node.pose);
            current_index = node.parent_index;
        }

        poses.reverse();
        ShipPath::from_poses(poses)
    }
}
