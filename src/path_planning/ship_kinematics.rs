//! Ship kinematics on an obstacle grid
//!
//! The ship is a 1x3 rigid body: its center cell plus one cell on each side
//! along its long axis. From any pose it can creep one cell forward or
//! backward along that axis, or pivot 90 degrees around the center while
//! sliding one cell sideways. Every move is checked against the cells the
//! hull sweeps through; a move that would clip an obstacle is not produced.
//!
//! Turn-clearance diagonals around center (r, c):
//!
//! ```text
//!   B . A        A: (r+1, c-1) and (r-1, c+1)
//!   . X .        B: (r+1, c+1) and (r-1, c-1)
//!   A . B
//! ```
//!
//! At least one diagonal pair must be free for a pivot. Which pair is free
//! decides the reported turn direction.

use crate::common::{ClearanceMap, GridPoint, Orientation, Pose, Turn};

/// Move generator bound to one clearance map
pub struct ShipKinematics<'a, M: ClearanceMap + ?Sized> {
    map: &'a M,
}

impl<'a, M: ClearanceMap + ?Sized> ShipKinematics<'a, M> {
    pub fn new(map: &'a M) -> Self {
        Self { map }
    }

    fn free(&self, row: i32, col: i32) -> bool {
        self.map.is_free(row, col)
    }

    /// Whether the whole hull fits at `point` with the given long axis
    pub fn can_place(&self, point: GridPoint, orientation: Orientation) -> bool {
        // center first: it bounds the coordinates before any offset is taken
        self.free(point.row, point.col)
            && Pose::placed(point, orientation)
                .footprint()
                .iter()
                .all(|cell| self.free(cell.row, cell.col))
    }

    fn diagonal_a(&self, p: &Pose) -> bool {
        self.free(p.row + 1, p.col - 1) && self.free(p.row - 1, p.col + 1)
    }

    fn diagonal_b(&self, p: &Pose) -> bool {
        self.free(p.row + 1, p.col + 1) && self.free(p.row - 1, p.col - 1)
    }

    /// Straight move by `step` cells along the long axis
    fn straight(&self, p: &Pose, step: i32) -> Option<Pose> {
        let (dr, dc) = p.orientation.axis();
        // the cell just beyond the bow (or stern) must be open water
        if self.free(p.row + 2 * step * dr, p.col + 2 * step * dc) {
            Some(Pose::new(p.row + step * dr, p.col + step * dc, p.orientation, Turn::None))
        } else {
            None
        }
    }

    /// Pivot into the perpendicular axis, sliding the center by `step`
    fn pivot(&self, p: &Pose, step: i32) -> Option<Pose> {
        let (dr, dc) = p.orientation.rotated().axis();
        let sweep_clear = self.free(p.row + 2 * step * dr, p.col + 2 * step * dc)
            && self.free(p.row + step * dr, p.col + step * dc)
            && self.free(p.row - step * dr, p.col - step * dc);
        if !sweep_clear {
            return None;
        }

        let a = self.diagonal_a(p);
        let b = self.diagonal_b(p);
        if !(a || b) {
            return None;
        }

        let turn = match p.orientation {
            Orientation::Vertical if b => Turn::Clockwise,
            Orientation::Horizontal if a => Turn::Clockwise,
            _ => Turn::Anticlockwise,
        };
        Some(Pose::new(
            p.row + step * dr,
            p.col + step * dc,
            p.orientation.rotated(),
            turn,
        ))
    }

    /// Candidate successors in the fixed order row+1, row-1, col-1, col+1.
    ///
    /// Slots that fail their clearance check are `None`. A pose whose center
    /// is not open water has no successors.
    pub fn successors(&self, p: &Pose) -> [Option<Pose>; 4] {
        if !self.free(p.row, p.col) {
            return [None; 4];
        }
        match p.orientation {
            Orientation::Vertical => [
                self.straight(p, 1),
                self.straight(p, -1),
                self.pivot(p, -1),
                self.pivot(p, 1),
            ],
            Orientation::Horizontal => [
                self.pivot(p, 1),
                self.pivot(p, -1),
                self.straight(p, -1),
                self.straight(p, 1),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{MapSymbols, ObstacleGrid};

    fn grid(rows: &[&str]) -> ObstacleGrid {
        ObstacleGrid::from_rows(rows, &MapSymbols::default()).unwrap()
    }

    fn moves(g: &ObstacleGrid, p: Pose) -> Vec<Pose> {
        ShipKinematics::new(g).successors(&p).into_iter().flatten().collect()
    }

    #[test]
    fn test_can_place_checks_long_axis() {
        let g = grid(&["-----", "--X--", "-----", "-----", "-----"]);
        let k = ShipKinematics::new(&g);
        assert!(!k.can_place(GridPoint::new(2, 2), Orientation::Vertical));
        assert!(k.can_place(GridPoint::new(2, 2), Orientation::Horizontal));
        assert!(k.can_place(GridPoint::new(3, 2), Orientation::Vertical));
        assert!(!k.can_place(GridPoint::new(0, 0), Orientation::Vertical));
        assert!(!k.can_place(GridPoint::new(4, 1), Orientation::Vertical));
    }

    #[test]
    fn test_open_water_vertical() {
        let g = grid(&["-------"; 7]);
        let p = Pose::new(3, 3, Orientation::Vertical, Turn::None);
        assert_eq!(
            moves(&g, p),
            vec![
                Pose::new(4, 3, Orientation::Vertical, Turn::None),
                Pose::new(2, 3, Orientation::Vertical, Turn::None),
                Pose::new(3, 2, Orientation::Horizontal, Turn::Clockwise),
                Pose::new(3, 4, Orientation::Horizontal, Turn::Clockwise),
            ]
        );
    }

    #[test]
    fn test_open_water_horizontal() {
        let g = grid(&["-------"; 7]);
        let p = Pose::new(3, 3, Orientation::Horizontal, Turn::None);
        assert_eq!(
            moves(&g, p),
            vec![
                Pose::new(4, 3, Orientation::Vertical, Turn::Clockwise),
                Pose::new(2, 3, Orientation::Vertical, Turn::Clockwise),
                Pose::new(3, 2, Orientation::Horizontal, Turn::None),
                Pose::new(3, 4, Orientation::Horizontal, Turn::None),
            ]
        );
    }

    #[test]
    fn test_turn_direction_follows_free_diagonal() {
        // (2,4) blocked kills pattern A, so a vertical ship turns clockwise
        // via B and a horizontal ship turns anticlockwise.
        let g = grid(&["-------", "-------", "----X--", "-------", "-------", "-------", "-------"]);
        let v = moves(&g, Pose::new(3, 3, Orientation::Vertical, Turn::None));
        assert!(v.iter().filter(|p| p.turn.is_turn()).all(|p| p.turn == Turn::Clockwise));
        let h = moves(&g, Pose::new(3, 3, Orientation::Horizontal, Turn::None));
        assert!(h.iter().filter(|p| p.turn.is_turn()).all(|p| p.turn == Turn::Anticlockwise));

        // (2,2) blocked kills pattern B instead.
        let g = grid(&["-------", "-------", "--X----", "-------", "-------", "-------", "-------"]);
        let v = moves(&g, Pose::new(3, 3, Orientation::Vertical, Turn::None));
        assert!(v.iter().filter(|p| p.turn.is_turn()).all(|p| p.turn == Turn::Anticlockwise));
        let h = moves(&g, Pose::new(3, 3, Orientation::Horizontal, Turn::None));
        assert!(h.iter().filter(|p| p.turn.is_turn()).all(|p| p.turn == Turn::Clockwise));
    }

    #[test]
    fn test_no_pivot_without_diagonal_clearance() {
        let g = grid(&["-------", "-------", "--X-X--", "-------", "-------", "-------", "-------"]);
        let v = moves(&g, Pose::new(3, 3, Orientation::Vertical, Turn::None));
        assert!(v.iter().all(|p| !p.turn.is_turn()));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_straight_blocked_beyond_bow() {
        let g = grid(&["-----", "-----", "-----", "-----", "--X--"]);
        let v = moves(&g, Pose::new(2, 2, Orientation::Vertical, Turn::None));
        assert!(!v.contains(&Pose::new(3, 2, Orientation::Vertical, Turn::None)));
        assert!(v.contains(&Pose::new(1, 2, Orientation::Vertical, Turn::None)));
    }

    #[test]
    fn test_pivot_needs_far_side_clear() {
        // the cell opposite the slide direction is swept by the stern
        let g = grid(&["-------", "-------", "-------", "--X----", "-------", "-------", "-------"]);
        let v = moves(&g, Pose::new(3, 3, Orientation::Vertical, Turn::None));
        assert!(!v.iter().any(|p| p.col == 4 && p.orientation == Orientation::Horizontal));
        assert!(!v.iter().any(|p| p.col == 2 && p.orientation == Orientation::Horizontal));
    }

    #[test]
    fn test_extreme_coordinates_are_off_grid() {
        let g = grid(&["-----"; 5]);
        let k = ShipKinematics::new(&g);
        for (row, col) in [(i32::MAX, 0), (i32::MIN, 2), (2, i32::MAX), (2, i32::MIN)] {
            assert!(!k.can_place(GridPoint::new(row, col), Orientation::Vertical));
            assert!(!k.can_place(GridPoint::new(row, col), Orientation::Horizontal));
            assert!(moves(&g, Pose::new(row, col, Orientation::Vertical, Turn::None)).is_empty());
            assert!(moves(&g, Pose::new(row, col, Orientation::Horizontal, Turn::None)).is_empty());
        }
    }
}
