use std::fmt;

use super::particle::ParticleId;
use crate::physics::fallingsand::util::grid::Grid;
use crate::physics::fallingsand::util::vectors::XyVector;

/// The occupancy index of the simulation
/// A fixed-size rectangular field of slots, each holding at most one
/// particle handle. Owns no simulation logic, only indexed storage and
/// bounds checking; the arena in [`super::sand_field::SandField`] is the
/// other half of the slot <-> particle-position invariant.
pub struct CellGrid {
    grid: Grid<Option<ParticleId>>,
}

/// A grid was requested with a zero dimension
#[derive(Debug, Clone)]
pub struct InvalidGridSizeError {
    pub width: usize,
    pub height: usize,
}
impl fmt::Display for InvalidGridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a {}x{} grid has no cells to simulate",
            self.width, self.height
        )
    }
}

impl CellGrid {
    /// Create an empty grid
    /// Dimensions are fixed for the lifetime of the simulation; zero in
    /// either direction is the one unrecoverable configuration error.
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidGridSizeError> {
        if width == 0 || height == 0 {
            return Err(InvalidGridSizeError { width, height });
        }
        Ok(Self {
            grid: Grid::new_fill(width, height, None),
        })
    }

    pub fn get_width(&self) -> usize {
        self.grid.get_width()
    }
    pub fn get_height(&self) -> usize {
        self.grid.get_height()
    }

    /// True iff the position lies outside [0, width) x [0, height)
    pub fn is_out_of_bound(&self, pos: XyVector) -> bool {
        self.grid.is_out_of_bound(pos)
    }

    /// The slot's occupant
    /// Raw accessor; callers bounds-check first
    pub fn get_element(&self, pos: XyVector) -> Option<ParticleId> {
        *self.grid.get(pos)
    }

    /// Overwrite the slot's occupant
    /// Raw accessor; callers bounds-check first
    pub fn set_element(&mut self, pos: XyVector, value: Option<ParticleId>) {
        self.grid.set(pos, value);
    }

    /// Store a particle handle, but only into an in-bounds, empty slot
    /// Returns false and leaves the grid unchanged otherwise
    pub fn add_element(&mut self, pos: XyVector, id: ParticleId) -> bool {
        //  Can't add an element out of the grid
        if self.is_out_of_bound(pos) {
            return false;
        }
        //  Can't add an element on another element
        if self.get_element(pos).is_some() {
            return false;
        }
        self.set_element(pos, Some(id));
        true
    }

    /// Clear and return the slot's occupant
    /// No-op returning None if the slot is out of bounds or already empty
    pub fn remove_element(&mut self, pos: XyVector) -> Option<ParticleId> {
        if self.is_out_of_bound(pos) {
            return None;
        }
        self.grid.replace(pos, None)
    }
}
