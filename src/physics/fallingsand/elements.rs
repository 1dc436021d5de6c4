//! This module contains all the materials that can live in a cell,
//! and their movement rules.

pub mod element;
pub mod gravel;
pub mod movement;
pub mod sand;
pub mod water;
