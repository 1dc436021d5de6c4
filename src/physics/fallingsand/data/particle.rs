use bevy::render::color::Color;
use derive_more::From;

use crate::physics::fallingsand::elements::element::{ElementType, Shade};
use crate::physics::fallingsand::util::vectors::XyVector;
use crate::physics::util::clock::Clock;

/// A stable handle into the particle arena
/// The grid stores these instead of references; "no particle" is always
/// `None`, never a dangling index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct ParticleId(pub usize);

/// One unit of material occupying exactly one grid cell
/// The material and shade are fixed at creation; the position is kept in
/// lockstep with the grid slot that points at this particle.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    element: ElementType,
    pos: XyVector,
    shade: Shade,
    last_moved: Option<Clock>,
}

impl Particle {
    pub fn new(element: ElementType, pos: XyVector, shade: Shade) -> Self {
        Self {
            element,
            pos,
            shade,
            last_moved: None,
        }
    }

    pub fn get_element(&self) -> ElementType {
        self.element
    }
    pub fn get_pos(&self) -> XyVector {
        self.pos
    }
    pub fn get_shade(&self) -> Shade {
        self.shade
    }
    pub fn get_color(&self) -> Color {
        self.element.get_color(self.shade)
    }
    pub fn get_last_moved(&self) -> Option<Clock> {
        self.last_moved
    }

    /// True iff this particle already moved in the given generation
    pub fn moved_at(&self, clock: Clock) -> bool {
        self.last_moved
            .map_or(false, |c| c.get_current_tick() == clock.get_current_tick())
    }

    pub(crate) fn set_pos(&mut self, pos: XyVector) {
        self.pos = pos;
    }
    pub(crate) fn mark_moved(&mut self, clock: Clock) {
        self.last_moved = Some(clock);
    }
}
