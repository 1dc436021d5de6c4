use std::fmt::Display;

use bevy::math::Vec2;

use crate::physics::fallingsand::util::vectors::XyVector;

/// A point in window space, logical pixels, origin at the top-left corner
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenCoord(pub Vec2);

impl Display for ScreenCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(ScreenCoord: ({}, {}))", self.0.x, self.0.y)
    }
}

impl ScreenCoord {
    /// The cell under this point, given the size of one cell in logical pixels
    /// Window space and grid space share their origin and axes, so this is
    /// a plain floor division.
    pub fn to_cell(&self, cell_size: f32) -> XyVector {
        XyVector::new(
            (self.0.x / cell_size).floor() as i32,
            (self.0.y / cell_size).floor() as i32,
        )
    }
}
