use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cell_grid::{CellGrid, InvalidGridSizeError};
use super::particle::{Particle, ParticleId};
use super::sink::RenderSink;
use crate::physics::fallingsand::elements::element::{ElementType, VOID_COLOR};
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::XyVector;
use crate::physics::util::clock::Clock;

/// Chance that one cell of a brush disc gets a particle on a single
/// application. Low on purpose; the brush is applied every frame it is
/// held, so anything denser fills the disc solid immediately.
pub const BRUSH_FILL_PROBABILITY: f64 = 0.01;

/// The scheduler of the simulation
/// Owns the occupancy grid, the dense particle arena, the tick clock, the
/// rng behind every tie-break, and the render sink. Everything outside the
/// simulation goes through the entry points on this type; nothing else
/// touches the grid or the arena.
pub struct SandField<S: RenderSink> {
    grid: CellGrid,
    particles: Vec<Particle>,
    clock: Clock,
    rng: StdRng,
    sink: S,
}

/* Initialization */
impl<S: RenderSink> SandField<S> {
    /// Create an empty field with an entropy-seeded rng
    pub fn new(width: usize, height: usize, sink: S) -> Result<Self, InvalidGridSizeError> {
        Self::with_rng(width, height, sink, StdRng::from_entropy())
    }

    /// Create an empty field with a known seed, for reproducible scenarios
    pub fn new_seeded(
        width: usize,
        height: usize,
        sink: S,
        seed: u64,
    ) -> Result<Self, InvalidGridSizeError> {
        Self::with_rng(width, height, sink, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        width: usize,
        height: usize,
        sink: S,
        rng: StdRng,
    ) -> Result<Self, InvalidGridSizeError> {
        Ok(Self {
            grid: CellGrid::new(width, height)?,
            particles: Vec::new(),
            clock: Clock::new(),
            rng,
            sink,
        })
    }
}

/* Getters & Setters */
impl<S: RenderSink> SandField<S> {
    pub fn get_width(&self) -> usize {
        self.grid.get_width()
    }
    pub fn get_height(&self) -> usize {
        self.grid.get_height()
    }
    pub fn get_particle_count(&self) -> usize {
        self.particles.len()
    }
    pub fn get_sink(&self) -> &S {
        &self.sink
    }
    /// The particle behind a handle
    /// Handles come from [`Self::get_particle_at`] and stay valid until the
    /// next removal
    pub fn get_particle(&self, id: ParticleId) -> &Particle {
        &self.particles[id.0]
    }
    /// The occupant of a cell, or None for an empty or out-of-bounds cell
    pub fn get_particle_at(&self, pos: XyVector) -> Option<ParticleId> {
        if self.grid.is_out_of_bound(pos) {
            return None;
        }
        self.grid.get_element(pos)
    }
    /// The material in a cell, or None for an empty or out-of-bounds cell
    pub fn get_element_at(&self, pos: XyVector) -> Option<ElementType> {
        self.get_particle_at(pos)
            .map(|id| self.get_particle(id).get_element())
    }

    /// A uniform draw from {-1, +1}, the only nondeterminism in the engine
    pub(crate) fn random_side(&mut self) -> i32 {
        if self.rng.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }
}

/* The movement primitive */
impl<S: RenderSink> SandField<S> {
    /// Try to move one particle by (dx, dy)
    ///
    /// Succeeds into an empty in-bounds cell, or by swapping with an
    /// occupant whose material is in `swappable` and which has not already
    /// moved this tick; an empty `swappable` means only empty destinations
    /// are acceptable. On success everything is kept consistent at once:
    /// positions, grid slots, moved-this-tick marks, and sink
    /// notifications. On failure nothing changes at all.
    pub fn try_move(&mut self, id: ParticleId, dx: i32, dy: i32, swappable: &[ElementType]) -> bool {
        let pos = self.particles[id.0].get_pos();
        let next = pos.offset(dx, dy);

        if self.grid.is_out_of_bound(next) {
            return false;
        }

        match self.grid.get_element(next) {
            None => {
                self.grid.set_element(pos, None);
                self.grid.set_element(next, Some(id));

                let particle = &mut self.particles[id.0];
                particle.set_pos(next);
                particle.mark_moved(self.clock);
                let color = particle.get_color();

                self.sink.clear(pos);
                self.sink.paint(next, color);
                true
            }
            Some(other) => {
                // A particle that already took its move this tick can
                // neither be displaced again nor used as a stepping stone
                if self.particles[other.0].moved_at(self.clock) {
                    return false;
                }
                if !swappable.contains(&self.particles[other.0].get_element()) {
                    return false;
                }

                self.grid.set_element(pos, Some(other));
                self.grid.set_element(next, Some(id));

                self.particles[other.0].set_pos(pos);
                self.particles[other.0].mark_moved(self.clock);
                self.particles[id.0].set_pos(next);
                self.particles[id.0].mark_moved(self.clock);

                let other_color = self.particles[other.0].get_color();
                let color = self.particles[id.0].get_color();
                self.sink.paint(pos, other_color);
                self.sink.paint(next, color);
                true
            }
        }
    }
}

/* The per-tick loop */
impl<S: RenderSink> SandField<S> {
    /// Run one simulation tick
    /// Every live particle is visited exactly once in arena order; a
    /// particle that was already swapped somewhere by an earlier mover is
    /// skipped. A particle whose rule fails every fallback just stays put
    /// until the next tick.
    pub fn simulate(&mut self) {
        self.clock.advance();
        for idx in 0..self.particles.len() {
            let element = self.particles[idx].get_element();
            if self.particles[idx].moved_at(self.clock) {
                continue;
            }
            element.process(self, ParticleId(idx));
        }
    }
}

/* Brush operations */
impl<S: RenderSink> SandField<S> {
    /// Create a particle of `element` at `pos` and insert it atomically
    /// Fails silently (returns false, changes nothing) on an occupied or
    /// out-of-bounds cell; the shade draw only happens once the slot is won
    /// so discarded inserts don't consume randomness.
    pub fn add_element(&mut self, pos: XyVector, element: ElementType) -> bool {
        let id = ParticleId::from(self.particles.len());
        if !self.grid.add_element(pos, id) {
            return false;
        }
        let shade = element.pick_shade(&mut self.rng);
        let particle = Particle::new(element, pos, shade);
        self.sink.paint(pos, particle.get_color());
        self.particles.push(particle);
        true
    }

    /// Spray particles of `element` across the disc of `radius` cells
    /// around `center`
    /// Every cell of the bounding square with squared distance <= radius^2
    /// is filled independently with [`BRUSH_FILL_PROBABILITY`]; a radius of
    /// one degenerates to a single-cell add.
    pub fn add_elements(&mut self, center: XyVector, radius: u32, element: ElementType) {
        if radius <= 1 {
            self.add_element(center, element);
            return;
        }
        let r = radius as i32;
        for (dx, dy) in (-r..=r).cartesian_product(-r..=r) {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            if self.rng.gen_bool(BRUSH_FILL_PROBABILITY) {
                self.add_element(center.offset(dx, dy), element);
            }
        }
    }

    /// Remove whatever occupies `pos`
    /// Returns false for an empty or out-of-bounds cell. The arena tail is
    /// swapped into the vacated index, and its grid slot is re-pointed, so
    /// the arena stays dense.
    pub fn remove_element(&mut self, pos: XyVector) -> bool {
        let Some(id) = self.grid.remove_element(pos) else {
            return false;
        };
        self.sink.clear(pos);

        let removed = self.particles.swap_remove(id.0);
        debug_assert_eq!(removed.get_pos(), pos);
        if id.0 < self.particles.len() {
            let moved_pos = self.particles[id.0].get_pos();
            self.grid.set_element(moved_pos, Some(id));
        }
        true
    }

    /// Remove every occupant of the disc of `radius` cells around `center`
    pub fn remove_elements(&mut self, center: XyVector, radius: u32) {
        if radius <= 1 {
            self.remove_element(center);
            return;
        }
        let r = radius as i32;
        for (dx, dy) in (-r..=r).cartesian_product(-r..=r) {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            self.remove_element(center.offset(dx, dy));
        }
    }
}

/* Drawing */
impl<S: RenderSink> SandField<S> {
    /// Render the whole field into a fresh image, one pixel per cell
    pub fn get_texture(&self) -> RawImage {
        let mut out = RawImage::new_filled(
            self.get_width() as u32,
            self.get_height() as u32,
            VOID_COLOR,
        );
        for particle in &self.particles {
            out.set_pixel(particle.get_pos(), particle.get_color());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::fallingsand::data::sink::NullSink;

    fn field(width: usize, height: usize) -> SandField<NullSink> {
        SandField::new_seeded(width, height, NullSink, 42).unwrap()
    }

    /// Every live particle's stored position must match the one grid slot
    /// holding its handle, and every occupied slot must belong to exactly
    /// one live particle.
    fn assert_occupancy_invariant(field: &SandField<NullSink>) {
        let mut occupied = 0;
        for y in 0..field.get_height() as i32 {
            for x in 0..field.get_width() as i32 {
                let pos = XyVector::new(x, y);
                if let Some(id) = field.grid.get_element(pos) {
                    occupied += 1;
                    assert_eq!(field.particles[id.0].get_pos(), pos);
                }
            }
        }
        assert_eq!(occupied, field.particles.len());
    }

    #[test]
    fn test_add_element_exclusivity() {
        let mut field = field(4, 4);
        let pos = XyVector::new(2, 2);

        assert!(field.add_element(pos, ElementType::Sand));
        assert!(!field.add_element(pos, ElementType::Water));
        assert!(!field.add_element(XyVector::new(-1, 0), ElementType::Sand));
        assert!(!field.add_element(XyVector::new(4, 0), ElementType::Sand));

        assert_eq!(field.get_particle_count(), 1);
        assert_eq!(field.get_element_at(pos), Some(ElementType::Sand));
        assert_occupancy_invariant(&field);
    }

    #[test]
    fn test_remove_element_swaps_tail_into_place() {
        let mut field = field(4, 4);
        field.add_element(XyVector::new(0, 0), ElementType::Sand);
        field.add_element(XyVector::new(1, 0), ElementType::Gravel);
        field.add_element(XyVector::new(2, 0), ElementType::Water);

        // Removing the middle particle moves the water into its arena slot
        assert!(field.remove_element(XyVector::new(1, 0)));
        assert_eq!(field.get_particle_count(), 2);
        assert_eq!(field.get_element_at(XyVector::new(1, 0)), None);
        assert_eq!(
            field.get_element_at(XyVector::new(2, 0)),
            Some(ElementType::Water)
        );
        assert_occupancy_invariant(&field);

        // Removing an empty or out-of-bounds cell is a no-op
        assert!(!field.remove_element(XyVector::new(1, 0)));
        assert!(!field.remove_element(XyVector::new(9, 9)));
        assert_eq!(field.get_particle_count(), 2);
    }

    #[test]
    fn test_boundary_moves_never_change_state() {
        let mut field = field(3, 3);
        field.add_element(XyVector::new(0, 0), ElementType::Sand);
        field.add_element(XyVector::new(2, 2), ElementType::Water);
        field.clock.advance();

        let corner = field.get_particle_at(XyVector::new(0, 0)).unwrap();
        let floor = field.get_particle_at(XyVector::new(2, 2)).unwrap();

        assert!(!field.try_move(corner, -1, 0, &[]));
        assert!(!field.try_move(corner, 0, -1, &[]));
        assert!(!field.try_move(floor, 1, 0, &[]));
        assert!(!field.try_move(floor, 0, 1, &[]));

        assert_eq!(field.get_particle(corner).get_pos(), XyVector::new(0, 0));
        assert_eq!(field.get_particle(floor).get_pos(), XyVector::new(2, 2));
        assert!(!field.get_particle(corner).moved_at(field.clock));
        assert_occupancy_invariant(&field);
    }

    #[test]
    fn test_swap_exchanges_positions_and_conserves_count() {
        let mut field = field(3, 3);
        field.add_element(XyVector::new(1, 0), ElementType::Sand);
        field.add_element(XyVector::new(1, 1), ElementType::Water);
        field.clock.advance();

        let sand = field.get_particle_at(XyVector::new(1, 0)).unwrap();
        assert!(field.try_move(sand, 0, 1, &[ElementType::Water]));

        assert_eq!(
            field.get_element_at(XyVector::new(1, 1)),
            Some(ElementType::Sand)
        );
        assert_eq!(
            field.get_element_at(XyVector::new(1, 0)),
            Some(ElementType::Water)
        );
        assert_eq!(field.get_particle_count(), 2);
        assert_occupancy_invariant(&field);
    }

    #[test]
    fn test_blocked_by_a_particle_that_already_moved() {
        let mut field = field(3, 3);
        field.add_element(XyVector::new(1, 0), ElementType::Sand);
        field.add_element(XyVector::new(1, 1), ElementType::Water);
        field.clock.advance();

        let sand = field.get_particle_at(XyVector::new(1, 0)).unwrap();
        let water = field.get_particle_at(XyVector::new(1, 1)).unwrap();
        field.particles[water.0].mark_moved(field.clock);

        // The water took its move this tick, so even a swappable kind
        // cannot displace it until the next tick
        assert!(!field.try_move(sand, 0, 1, &[ElementType::Water]));
        assert_eq!(field.get_particle(sand).get_pos(), XyVector::new(1, 0));

        field.clock.advance();
        assert!(field.try_move(sand, 0, 1, &[ElementType::Water]));
        assert_occupancy_invariant(&field);
    }

    #[test]
    fn test_blocked_by_a_non_swappable_kind() {
        let mut field = field(3, 3);
        field.add_element(XyVector::new(1, 0), ElementType::Sand);
        field.add_element(XyVector::new(1, 1), ElementType::Gravel);
        field.clock.advance();

        let sand = field.get_particle_at(XyVector::new(1, 0)).unwrap();
        assert!(!field.try_move(sand, 0, 1, &[ElementType::Water]));
        assert!(!field.try_move(sand, 0, 1, &[]));
        assert_eq!(field.get_particle(sand).get_pos(), XyVector::new(1, 0));
        assert_occupancy_invariant(&field);
    }

    #[test]
    fn test_brush_radius_one_is_a_single_cell_add() {
        let mut field = field(16, 16);
        field.add_elements(XyVector::new(5, 5), 1, ElementType::Sand);

        assert_eq!(field.get_particle_count(), 1);
        assert_eq!(
            field.get_element_at(XyVector::new(5, 5)),
            Some(ElementType::Sand)
        );
    }

    #[test]
    fn test_brush_spray_density_and_disc_bounds() {
        let mut field = field(64, 64);
        let center = XyVector::new(31, 31);
        let radius = 10u32;
        // One application deposits on the order of disc-area x 1%; many
        // applications converge toward (but can never exceed) the disc
        for _ in 0..200 {
            field.add_elements(center, radius, ElementType::Sand);
        }

        let disc_cells = (-10i32..=10)
            .cartesian_product(-10i32..=10)
            .filter(|(dx, dy)| dx * dx + dy * dy <= 100)
            .count();
        assert!(field.get_particle_count() > 0);
        assert!(field.get_particle_count() <= disc_cells);
        for particle in &field.particles {
            let d = particle.get_pos().offset(-center.x, -center.y);
            assert!(d.x * d.x + d.y * d.y <= (radius * radius) as i32);
        }
        assert_occupancy_invariant(&field);
    }

    #[test]
    fn test_brush_removal_clears_the_whole_disc() {
        let mut field = field(21, 21);
        for y in 0..21 {
            for x in 0..21 {
                assert!(field.add_element(XyVector::new(x, y), ElementType::Gravel));
            }
        }

        let center = XyVector::new(10, 10);
        field.remove_elements(center, 5);

        for y in 0..21i32 {
            for x in 0..21i32 {
                let d = XyVector::new(x, y).offset(-center.x, -center.y);
                let inside = d.x * d.x + d.y * d.y <= 25;
                assert_eq!(field.get_element_at(XyVector::new(x, y)).is_none(), inside);
            }
        }
        assert_occupancy_invariant(&field);
    }

    #[test]
    fn test_ticks_relocate_but_never_create_or_destroy() {
        let mut field = field(32, 32);
        field.add_elements(XyVector::new(15, 5), 6, ElementType::Sand);
        field.add_elements(XyVector::new(10, 10), 6, ElementType::Water);
        field.add_elements(XyVector::new(20, 8), 4, ElementType::Gravel);
        for _ in 0..50 {
            field.add_element(XyVector::new(16, 0), ElementType::Sand);
            let before = field.get_particle_count();
            field.simulate();
            assert_eq!(field.get_particle_count(), before);
            assert_occupancy_invariant(&field);
        }
    }
}
