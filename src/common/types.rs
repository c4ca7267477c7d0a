//! Common types used throughout ship_route

use std::fmt;

use crate::path_planning::SearchConfig;

/// Grid cell address; negative coordinates mean "unset"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    /// The "unset" sentinel
    pub const EMPTY: GridPoint = GridPoint { row: -1, col: -1 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_empty(&self) -> bool {
        self.row < 0 || self.col < 0
    }

    pub fn equals(&self, row: i32, col: i32) -> bool {
        self.row == row && self.col == col
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Manhattan distance in cells
    pub fn manhattan(&self, other: &GridPoint) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl Default for GridPoint {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from(tuple: (i32, i32)) -> Self {
        Self { row: tuple.0, col: tuple.1 }
    }
}

/// Long axis of the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Long axis along the columns: occupies (r, c-1), (r, c), (r, c+1)
    Horizontal,
    /// Long axis along the rows: occupies (r-1, c), (r, c), (r+1, c)
    Vertical,
}

impl Orientation {
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit step (drow, dcol) along the long axis
    pub fn axis(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Pivot needed to reach a pose from its predecessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    None,
    Clockwise,
    Anticlockwise,
}

impl Turn {
    pub fn is_turn(self) -> bool {
        self != Turn::None
    }
}

/// Search identity of a pose: turn metadata excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoseKey {
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
}

/// Ship pose: center cell, long axis and how it was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
    pub turn: Turn,
}

impl Pose {
    pub fn new(row: i32, col: i32, orientation: Orientation, turn: Turn) -> Self {
        Self { row, col, orientation, turn }
    }

    /// Pose at a bare grid point, as placed before any move
    pub fn placed(point: GridPoint, orientation: Orientation) -> Self {
        Self::new(point.row, point.col, orientation, Turn::None)
    }

    pub fn point(&self) -> GridPoint {
        GridPoint::new(self.row, self.col)
    }

    pub fn key(&self) -> PoseKey {
        PoseKey {
            row: self.row,
            col: self.col,
            orientation: self.orientation,
        }
    }

    /// Same (row, col, orientation), whatever the turn flag
    pub fn same_place(&self, other: &Pose) -> bool {
        self.key() == other.key()
    }

    /// The three cells covered by the ship, center in the middle.
    ///
    /// Offsets saturate at the `i32` range, so a hull at the extremes maps
    /// to cells no grid contains.
    pub fn footprint(&self) -> [GridPoint; 3] {
        let (dr, dc) = self.orientation.axis();
        [
            GridPoint::new(self.row.saturating_sub(dr), self.col.saturating_sub(dc)),
            GridPoint::new(self.row, self.col),
            GridPoint::new(self.row.saturating_add(dr), self.col.saturating_add(dc)),
        ]
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        let turn = match self.turn {
            Turn::None => "",
            Turn::Clockwise => " cw",
            Turn::Anticlockwise => " acw",
        };
        write!(f, "({}, {}) {}{}", self.row, self.col, axis, turn)
    }
}

/// Route represented as a sequence of poses, start first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShipPath {
    pub poses: Vec<Pose>,
}

impl ShipPath {
    pub fn new() -> Self {
        Self { poses: Vec::new() }
    }

    pub fn from_poses(poses: Vec<Pose>) -> Self {
        Self { poses }
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pose> {
        self.poses.iter()
    }

    pub fn first(&self) -> Option<&Pose> {
        self.poses.first()
    }

    pub fn last(&self) -> Option<&Pose> {
        self.poses.last()
    }

    /// Number of poses entered through a pivot
    pub fn turn_count(&self) -> usize {
        self.poses.iter().skip(1).filter(|p| p.turn.is_turn()).count()
    }

    /// Sum of move costs along the route; the start pose is free
    pub fn total_cost(&self, config: &SearchConfig) -> u32 {
        self.poses.iter().skip(1).map(|p| config.move_cost(p.turn)).sum()
    }
}

impl<'a> IntoIterator for &'a ShipPath {
    type Item = &'a Pose;
    type IntoIter = std::slice::Iter<'a, Pose>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

/// Raw map payload handed over by a map source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMap {
    pub name: String,
    pub rows: Vec<Vec<u8>>,
}

impl RawMap {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<u8>>) -> Self {
        Self { name: name.into(), rows }
    }

    /// Split a byte payload on `\n`. A trailing terminator leaves a final
    /// empty row, which the grid loader drops.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Self {
        let rows = data.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect();
        Self::new(name, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_sentinel() {
        assert!(GridPoint::EMPTY.is_empty());
        assert!(GridPoint::new(-1, 4).is_empty());
        assert!(!GridPoint::new(0, 0).is_empty());
        let mut p = GridPoint::new(2, 3);
        p.clear();
        assert_eq!(p, GridPoint::default());
    }

    #[test]
    fn test_pose_identity_ignores_turn() {
        let a = Pose::new(1, 2, Orientation::Vertical, Turn::None);
        let b = Pose::new(1, 2, Orientation::Vertical, Turn::Clockwise);
        let c = Pose::new(1, 2, Orientation::Horizontal, Turn::None);
        assert!(a.same_place(&b));
        assert_eq!(a.key(), b.key());
        assert!(!a.same_place(&c));
    }

    #[test]
    fn test_footprint_follows_long_axis() {
        let v = Pose::new(3, 3, Orientation::Vertical, Turn::None);
        assert_eq!(
            v.footprint(),
            [GridPoint::new(2, 3), GridPoint::new(3, 3), GridPoint::new(4, 3)]
        );
        let h = Pose::new(3, 3, Orientation::Horizontal, Turn::None);
        assert_eq!(
            h.footprint(),
            [GridPoint::new(3, 2), GridPoint::new(3, 3), GridPoint::new(3, 4)]
        );

        let edge = Pose::new(i32::MAX, i32::MIN, Orientation::Vertical, Turn::None);
        assert_eq!(
            edge.footprint(),
            [
                GridPoint::new(i32::MAX - 1, i32::MIN),
                GridPoint::new(i32::MAX, i32::MIN),
                GridPoint::new(i32::MAX, i32::MIN),
            ]
        );
    }

    #[test]
    fn test_raw_map_splits_on_newline() {
        let raw = RawMap::from_bytes("a", b"--X\n---\n");
        assert_eq!(raw.rows, vec![b"--X".to_vec(), b"---".to_vec(), Vec::new()]);

        let raw = RawMap::from_bytes("b", b"---\n\n---");
        assert_eq!(raw.rows.len(), 3);
        assert!(raw.rows[1].is_empty());

        let raw = RawMap::from_bytes("c", b"");
        assert_eq!(raw.rows, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_path_cost_and_turns() {
        let path = ShipPath::from_poses(vec![
            Pose::new(3, 3, Orientation::Vertical, Turn::None),
            Pose::new(3, 4, Orientation::Horizontal, Turn::Clockwise),
            Pose::new(3, 5, Orientation::Horizontal, Turn::None),
        ]);
        assert_eq!(path.turn_count(), 1);
        assert_eq!(path.total_cost(&SearchConfig::default()), 25);
        assert_eq!(format!("{}", path.poses[1]), "(3, 4) H cw");
    }
}
