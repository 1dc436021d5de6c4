//! Movement rules shared between materials
//! Each helper runs one particle's rule for one tick: a prioritized list
//! of [`SandField::try_move`] attempts where the first success ends the
//! rule. Ties between the two lateral directions are broken by a single
//! uniform sign draw per invocation, which is what keeps piles from
//! leaning to one side over many ticks.

use crate::physics::fallingsand::data::particle::ParticleId;
use crate::physics::fallingsand::data::sand_field::SandField;
use crate::physics::fallingsand::data::sink::RenderSink;
use crate::physics::fallingsand::elements::element::ElementType;

/// Fall-then-tumble rule for granular solids
/// Straight down first, then the diagonal on a random side, then the
/// opposite diagonal. The swappable set decides what counts as fallable
/// through rather than solid ground.
pub fn powder_process<S: RenderSink>(
    field: &mut SandField<S>,
    id: ParticleId,
    swappable: &[ElementType],
) {
    if field.try_move(id, 0, 1, swappable) {
        return;
    }
    let mut side = field.random_side();
    for _ in 0..2 {
        if field.try_move(id, side, 1, swappable) {
            return;
        }
        side = -side;
    }
}

/// Fall-then-spread rule for liquids
/// Same fall order as a powder but strictly into empty cells, with a
/// final pure-lateral pass that produces the spreading behavior. The
/// lateral pass reuses the diagonal pass's initial side.
pub fn fluid_process<S: RenderSink>(field: &mut SandField<S>, id: ParticleId) {
    if field.try_move(id, 0, 1, &[]) {
        return;
    }
    let mut side = field.random_side();
    for _ in 0..2 {
        if field.try_move(id, side, 1, &[]) {
            return;
        }
        side = -side;
    }
    for _ in 0..2 {
        if field.try_move(id, side, 0, &[]) {
            return;
        }
        side = -side;
    }
}
