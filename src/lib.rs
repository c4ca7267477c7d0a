//! ship_route - route planning for a 1x3 ship on an obstacle grid
//!
//! This crate searches for a route for a rigid, oriented ship across a
//! binary obstacle grid. The search runs over poses (cell + long axis), with
//! straight moves and 90 degree pivots constrained by the ship's footprint.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;
pub mod sea;

// Re-export common types for convenience
pub use common::{GridPoint, Orientation, Pose, PoseKey, RawMap, ShipPath, Turn};
pub use common::{ClearanceMap, MapSource};
pub use common::{LoadError, SeaResult};
pub use path_planning::{SearchConfig, SearchOutcome, ShipAStarPlanner, ShipKinematics};
pub use sea::{RouteSlot, Sea, SeaConfig};
pub use utils::{Cell, MapCatalog, MapSymbols, ObstacleGrid};
