//! Open and closed sets for the pose search

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::common::PoseKey;

type Entry = (u32, u64, usize, PoseKey);

/// Candidate nodes ordered by f-cost.
///
/// Entries are `(f, seq, node, pose)`: equal f-costs pop in insertion
/// order. A side map gives find-by-pose. An entry is never mutated while
/// indexed; a cost change goes through [`OpenSet::reposition`].
#[derive(Debug, Default)]
pub struct OpenSet {
    queue: BTreeSet<Entry>,
    by_pose: HashMap<PoseKey, Entry>,
    next_seq: u64,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn insert(&mut self, key: PoseKey, f_cost: u32, node: usize) {
        let entry = (f_cost, self.next_seq, node, key);
        self.next_seq += 1;
        if let Some(stale) = self.by_pose.insert(key, entry) {
            self.queue.remove(&stale);
        }
        self.queue.insert(entry);
    }

    /// Remove the node with the least f-cost
    pub fn pop_least(&mut self) -> Option<usize> {
        let (_, _, node, key) = self.queue.pop_first()?;
        self.by_pose.remove(&key);
        Some(node)
    }

    /// Node currently open at this pose
    pub fn find(&self, key: &PoseKey) -> Option<usize> {
        self.by_pose.get(key).map(|&(_, _, node, _)| node)
    }

    /// Re-queue an open node after its f-cost dropped
    pub fn reposition(&mut self, key: PoseKey, f_cost: u32) {
        if let Some(entry) = self.by_pose.remove(&key) {
            self.queue.remove(&entry);
            self.insert(key, f_cost, entry.2);
        }
    }
}

/// Finalized poses
#[derive(Debug, Default)]
pub struct ClosedSet {
    poses: HashSet<PoseKey>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: PoseKey) -> bool {
        self.poses.insert(key)
    }

    pub fn contains(&self, key: &PoseKey) -> bool {
        self.poses.contains(key)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}
