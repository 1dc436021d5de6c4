//! Pixelbox, a windowed falling sand toy.
//! The simulation lives in [`physics`] and knows nothing about windows;
//! [`entities`] and [`gui`] wrap it in a bevy frontend.

pub mod entities;
pub mod gui;
pub mod physics;
