//! The simulation's state: the particle arena, the occupancy grid, the
//! render sink capability, and the scheduler that owns all three.

pub mod cell_grid;
pub mod particle;
pub mod sand_field;
pub mod sink;
