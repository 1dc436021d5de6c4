use super::element::ElementType;
use crate::physics::fallingsand::data::particle::ParticleId;
use crate::physics::fallingsand::data::sand_field::SandField;
use crate::physics::fallingsand::data::sink::RenderSink;

/// Gravel sinks through water but not through anything else
const SWAPPABLE: &[ElementType] = &[ElementType::Water];

/// One tick of gravel: fall straight down or stay put
/// Denser and more angular than sand, so no diagonal tumbling
pub fn process<S: RenderSink>(field: &mut SandField<S>, id: ParticleId) {
    field.try_move(id, 0, 1, SWAPPABLE);
}
