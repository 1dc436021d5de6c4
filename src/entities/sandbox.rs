use bevy::app::{App, Plugin, Startup, Update};
use bevy::asset::{Assets, Handle};
use bevy::core_pipeline::core_2d::Camera2dBundle;
use bevy::ecs::component::Component;
use bevy::ecs::query::With;
use bevy::ecs::system::{Commands, Query, ResMut};
use bevy::log::info;
use bevy::math::{Vec2, Vec3};
use bevy::render::texture::Image;
use bevy::sprite::{Sprite, SpriteBundle};
use bevy::transform::components::Transform;
use bevy::window::{PrimaryWindow, Window};

use crate::physics::fallingsand::data::sand_field::SandField;
use crate::physics::fallingsand::data::sink::FrameBufferSink;

/// The size of one grid cell in logical pixels
pub const CELL_SIZE: f32 = 10.0;

/// The entity that owns the simulation and the texture it is drawn into
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::setup);
        app.add_systems(Update, Self::process_system);
    }
}

/// Acts as the single owner of the field; every outside mutation goes
/// through the field's entry points
#[derive(Component)]
pub struct SandboxData {
    pub field: SandField<FrameBufferSink>,
}

/// Bevy Systems
impl SandboxPlugin {
    /// Size the grid from the primary window, once; the grid never resizes
    pub fn setup(
        mut commands: Commands,
        windows: Query<&Window, With<PrimaryWindow>>,
        mut images: ResMut<Assets<Image>>,
    ) {
        let window = windows.single();
        let cols = (window.width() / CELL_SIZE).ceil() as usize;
        let rows = (window.height() / CELL_SIZE).ceil() as usize;
        info!("sandbox grid is {}x{} cells", cols, rows);

        let field = SandField::new(cols, rows, FrameBufferSink::new(cols, rows))
            .expect("the window is too small to hold a single cell");
        let texture = images.add(field.get_texture().to_bevy_image());

        commands.spawn(Camera2dBundle::default());

        // Anchor the sprite so cell (0, 0) sits exactly at the window's
        // top-left corner; the ceil division means the grid may overhang
        // the right and bottom edges by a fraction of a cell
        let size = Vec2::new(cols as f32 * CELL_SIZE, rows as f32 * CELL_SIZE);
        let translation = Vec3::new(
            (size.x - window.width()) / 2.0,
            (window.height() - size.y) / 2.0,
            0.0,
        );
        commands.spawn((
            SandboxData { field },
            SpriteBundle {
                texture,
                sprite: Sprite {
                    custom_size: Some(size),
                    ..Default::default()
                },
                transform: Transform::from_translation(translation),
                ..Default::default()
            },
        ));
    }

    /// Run this system every frame to advance the simulation one tick and
    /// push the sink's frame into the texture
    pub fn process_system(
        mut sandbox: Query<(&mut SandboxData, &Handle<Image>)>,
        mut images: ResMut<Assets<Image>>,
    ) {
        for (mut sandbox, texture) in sandbox.iter_mut() {
            sandbox.field.simulate();
            if let Some(image) = images.get_mut(texture) {
                image
                    .data
                    .copy_from_slice(&sandbox.field.get_sink().get_frame().pixels);
            }
        }
    }
}
