//! One-shot hand-off of the latest computed route

use std::mem;

use crate::common::ShipPath;

/// Holds the most recent route until a consumer takes it.
///
/// Every store replaces the previous route, empty or not, and marks the slot
/// ready. `take` hands the route out once and clears the flag.
#[derive(Debug, Default)]
pub struct RouteSlot {
    path: ShipPath,
    ready: bool,
}

impl RouteSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, path: ShipPath) {
        self.path = path;
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn take(&mut self) -> Option<ShipPath> {
        if !self.ready {
            return None;
        }
        self.ready = false;
        Some(mem::take(&mut self.path))
    }

    /// Drop any stored route without handing it out
    pub fn clear(&mut self) {
        self.path = ShipPath::new();
        self.ready = false;
    }
}
