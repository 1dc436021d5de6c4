use super::element::ElementType;
use super::movement;
use crate::physics::fallingsand::data::particle::ParticleId;
use crate::physics::fallingsand::data::sand_field::SandField;
use crate::physics::fallingsand::data::sink::RenderSink;

/// Sand sinks through water but not through anything else
const SWAPPABLE: &[ElementType] = &[ElementType::Water];

/// One tick of sand: fall straight down, else tumble diagonally
pub fn process<S: RenderSink>(field: &mut SandField<S>, id: ParticleId) {
    movement::powder_process(field, id, SWAPPABLE);
}
