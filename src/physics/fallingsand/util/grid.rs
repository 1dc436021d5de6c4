//! A simple 2d grid type backed by the ndarray crate.
//! The raw accessors are deliberately unchecked; callers are expected to
//! bounds-check with [`Grid::is_out_of_bound`] or go through
//! [`Grid::checked_get`].

use std::fmt;

use super::vectors::XyVector;

/// A simple 2d grid type
#[derive(Clone)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(ndarray::Array2::from_elem((height, width), value))
    }
    /// Create a new grid with the given width and height, and fill it with the given data
    pub fn new_from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        Self(ndarray::Array2::from_shape_vec((height, width), data).unwrap())
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid
    pub fn get_width(&self) -> usize {
        self.0.shape()[1]
    }
    /// Get the height of the grid
    pub fn get_height(&self) -> usize {
        self.0.shape()[0]
    }
    /// Get the total size of the grid
    pub fn total_size(&self) -> usize {
        self.0.len()
    }
    /// Get the data as a slice, row by row from the top
    pub fn get_data_slice(&self) -> &[T] {
        self.0.as_slice().unwrap()
    }
}

/// Defines when the user has exceeded the bounds of the grid
#[derive(Debug, Clone)]
pub struct GridOutOfBoundsError(pub XyVector);
impl fmt::Display for GridOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} went outside the constraints of grid", self.0)
    }
}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// True iff the position lies outside [0, width) x [0, height)
    pub fn is_out_of_bound(&self, pos: XyVector) -> bool {
        pos.x < 0
            || pos.y < 0
            || pos.x >= self.get_width() as i32
            || pos.y >= self.get_height() as i32
    }
    /// Gets the value at the given coordinate
    /// Panics if the coordinate is out of bounds
    pub fn get(&self, pos: XyVector) -> &T {
        &self.0[Self::transform_xy_coord_to_ndarray(pos)]
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, pos: XyVector) -> Result<&T, GridOutOfBoundsError> {
        if self.is_out_of_bound(pos) {
            return Err(GridOutOfBoundsError(pos));
        }
        Ok(self.get(pos))
    }
    /// Gets the value at the given coordinate, mutably
    pub fn get_mut(&mut self, pos: XyVector) -> &mut T {
        &mut self.0[Self::transform_xy_coord_to_ndarray(pos)]
    }
    /// Sets the value at the given coordinate, overwriting the old value
    pub fn set(&mut self, pos: XyVector, value: T) {
        self.replace(pos, value);
    }
    /// Like set, but gives you ownership of the original value
    pub fn replace(&mut self, pos: XyVector, replacement: T) -> T {
        let coord = Self::transform_xy_coord_to_ndarray(pos);
        std::mem::replace(&mut self.0[coord], replacement)
    }
    /// Transforms the coordinate to the ndarray coordinate system, row major
    fn transform_xy_coord_to_ndarray(pos: XyVector) -> [usize; 2] {
        [pos.y as usize, pos.x as usize]
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Get an iterator over the grid, row by row from the top
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.0.as_slice().unwrap().iter()
    }

    /// Get a mutable iterator over the grid
    pub fn iter_mut(&mut self) -> std::slice::IterMut<T> {
        self.0.as_slice_mut().unwrap().iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
