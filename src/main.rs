use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use pixelbox::entities::sandbox::SandboxPlugin;
use pixelbox::gui::brush::BrushPlugin;
use pixelbox::gui::element_picker::ElementSelection;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Pixelbox".to_string(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(EguiPlugin)
        .insert_resource(ElementSelection::default())
        .add_plugins((SandboxPlugin, BrushPlugin))
        .add_systems(Update, ElementSelection::element_picker_system)
        .run();
}
