use bevy::render::color::Color;
use rand::Rng;
use strum_macros::{Display, EnumIter};

use super::{gravel, sand, water};
use crate::physics::fallingsand::data::particle::ParticleId;
use crate::physics::fallingsand::data::sand_field::SandField;
use crate::physics::fallingsand::data::sink::RenderSink;

/// The color of a cell nothing lives in
pub const VOID_COLOR: Color = Color::BLACK;

/// All the materials that can live in a cell
/// Closed set; adding a material means adding a variant here, a palette
/// entry below, and a rule module next to the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ElementType {
    Sand,
    Gravel,
    Water,
}

/// The display attribute of one particle, chosen once at creation
/// Most particles get the base shade; a few get the alternate one so that
/// piles don't render as flat blocks of a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Base,
    Alt,
}

/// How likely a freshly created particle is to get the base shade
const BASE_SHADE_WEIGHT: f64 = 0.9;

impl ElementType {
    /// Draw a display shade for a new particle of this material
    pub fn pick_shade<R: Rng>(self, rng: &mut R) -> Shade {
        if rng.gen_bool(BASE_SHADE_WEIGHT) {
            Shade::Base
        } else {
            Shade::Alt
        }
    }

    /// The palette entry for this material under the given shade
    pub fn get_color(self, shade: Shade) -> Color {
        match (self, shade) {
            (ElementType::Sand, Shade::Base) => Color::rgb_u8(0xff, 0xda, 0x79),
            (ElementType::Sand, Shade::Alt) => Color::rgb_u8(0xcc, 0xae, 0x62),
            (ElementType::Gravel, Shade::Base) => Color::rgb_u8(0x84, 0x81, 0x7a),
            (ElementType::Gravel, Shade::Alt) => Color::rgb_u8(0xaa, 0xa6, 0x9d),
            (ElementType::Water, Shade::Base) => Color::rgb_u8(0x34, 0xac, 0xe0),
            (ElementType::Water, Shade::Alt) => Color::rgb_u8(0x22, 0x70, 0x93),
        }
    }

    /// Run this material's movement rule for one particle
    /// Called at most once per particle per tick by [`SandField::simulate`]
    pub fn process<S: RenderSink>(self, field: &mut SandField<S>, id: ParticleId) {
        match self {
            ElementType::Sand => sand::process(field, id),
            ElementType::Gravel => gravel::process(field, id),
            ElementType::Water => water::process(field, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_material_set_is_closed() {
        assert_eq!(ElementType::iter().count(), 3);
    }

    #[test]
    fn test_shades_are_distinct() {
        for element in ElementType::iter() {
            assert_ne!(
                element.get_color(Shade::Base),
                element.get_color(Shade::Alt)
            );
            assert_ne!(element.get_color(Shade::Base), VOID_COLOR);
        }
    }
}
