//! This module contains all the simulation related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * I try to maintain this module as "game engine agnostic" as possible.
//!   Bevy types only appear at thin conversion edges (colors, images).
//! * Physics should be highly unit tested.

pub mod fallingsand;
pub mod util;
