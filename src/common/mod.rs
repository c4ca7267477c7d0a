//! Common types, traits, and error definitions for ship_route
//!
//! This module provides the building blocks shared by the grid map, the
//! ship kinematics and the route search.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
