// Path Planning module: ship kinematics and pose search

pub mod ship_kinematics;
pub mod search_sets;
pub mod a_star;

pub use ship_kinematics::*;
pub use search_sets::*;
pub use a_star::*;
