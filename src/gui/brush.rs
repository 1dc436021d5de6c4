use bevy::app::{App, Plugin, Update};
use bevy::ecs::event::EventReader;
use bevy::ecs::query::With;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Query, Res, ResMut, Resource};
use bevy::gizmos::gizmos::Gizmos;
use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;
use bevy::input::Input;
use bevy::log::debug;
use bevy::math::Vec2;
use bevy::render::color::Color;
use bevy::window::{CursorMoved, PrimaryWindow, Window};

use super::element_picker::ElementSelection;
use crate::entities::sandbox::{SandboxData, SandboxPlugin, CELL_SIZE};
use crate::physics::util::vectors::ScreenCoord;

/// The brush is a circle that can be resized and moved around the screen.
pub struct BrushPlugin;

impl Plugin for BrushPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Brush::default());
        app.add_systems(
            Update,
            (
                Brush::move_brush_system,
                Brush::draw_brush_system,
                Brush::resize_brush_system,
                // Brush edits land after the tick, so they become visible
                // starting with the next tick's iteration
                Brush::apply_brush_system.after(SandboxPlugin::process_system),
            ),
        );
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct Brush {
    /// Cursor position in window space
    pub position: Vec2,
    /// Radius in cells
    pub radius: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            radius: 4,
        }
    }
}

/// Bevy Systems
impl Brush {
    pub fn move_brush_system(
        mut brush: ResMut<Brush>,
        mut cursor_moved_events: EventReader<CursorMoved>,
    ) {
        for event in cursor_moved_events.read() {
            brush.position = event.position;
        }
    }

    pub fn draw_brush_system(
        brush: Res<Brush>,
        windows: Query<&Window, With<PrimaryWindow>>,
        mut gizmos: Gizmos,
    ) {
        let window = windows.single();
        // Window space runs y-down from the top-left; gizmos draw in world
        // space, y-up from the center
        let center = Vec2::new(
            brush.position.x - window.width() / 2.0,
            window.height() / 2.0 - brush.position.y,
        );
        gizmos.circle_2d(center, brush.radius as f32 * CELL_SIZE, Color::WHITE);
    }

    pub fn resize_brush_system(keys: Res<Input<KeyCode>>, mut brush: ResMut<Brush>) {
        if keys.just_pressed(KeyCode::Equals) {
            brush.radius *= 2;
        }
        if keys.just_pressed(KeyCode::Minus) && brush.radius > 1 {
            brush.radius /= 2;
        }
    }

    pub fn apply_brush_system(
        mouse: Res<Input<MouseButton>>,
        brush: Res<Brush>,
        element_picker: Res<ElementSelection>,
        mut sandbox: Query<&mut SandboxData>,
    ) {
        if !mouse.pressed(MouseButton::Left) && !mouse.pressed(MouseButton::Right) {
            return;
        }
        let Ok(mut sandbox) = sandbox.get_single_mut() else {
            return;
        };
        let cell = ScreenCoord(brush.position).to_cell(CELL_SIZE);
        if mouse.pressed(MouseButton::Left) {
            debug!("brush add {:?} at {:?}", element_picker.0, cell);
            sandbox
                .field
                .add_elements(cell, brush.radius, element_picker.0);
        }
        if mouse.pressed(MouseButton::Right) {
            debug!("brush remove at {:?}", cell);
            sandbox.field.remove_elements(cell, brush.radius);
        }
    }
}
