//! Utility modules for ship_route

pub mod grid_map;
pub mod map_catalog;

pub use grid_map::*;
pub use map_catalog::*;
