//! Common traits defining the seams between the map, the ship model and
//! map storage

use crate::common::error::SeaResult;
use crate::common::types::RawMap;

/// Free/occupied queries used by the ship kinematics
pub trait ClearanceMap {
    /// True only for an in-bounds free cell
    fn is_free(&self, row: i32, col: i32) -> bool;
}

/// Supplier of raw maps, e.g. a directory of map files
pub trait MapSource {
    /// Hand out the next map
    fn next_map(&mut self) -> SeaResult<RawMap>;
}

impl<F> ClearanceMap for F
where
    F: Fn(i32, i32) -> bool,
{
    fn is_free(&self, row: i32, col: i32) -> bool {
        self(row, col)
    }
}
