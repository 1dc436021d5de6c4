use super::movement;
use crate::physics::fallingsand::data::particle::ParticleId;
use crate::physics::fallingsand::data::sand_field::SandField;
use crate::physics::fallingsand::data::sink::RenderSink;

/// One tick of water: fall, else tumble diagonally, else spread sideways
/// Strictly into empty cells; water displaces nothing.
pub fn process<S: RenderSink>(field: &mut SandField<S>, id: ParticleId) {
    movement::fluid_process(field, id);
}
