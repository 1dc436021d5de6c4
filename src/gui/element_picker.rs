use bevy::ecs::system::{ResMut, Resource};
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

use crate::physics::fallingsand::elements::element::ElementType;

/// The material the brush currently deposits
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSelection(pub ElementType);

impl Default for ElementSelection {
    fn default() -> Self {
        Self(ElementType::Sand)
    }
}

/// A window used to select an element to place
impl ElementSelection {
    pub fn element_picker_system(
        mut contexts: EguiContexts,
        mut selection: ResMut<ElementSelection>,
    ) {
        egui::Window::new("Element Picker")
            .anchor(egui::Align2::RIGHT_TOP, [0.0, 0.0])
            .show(contexts.ctx_mut(), |ui| {
                ui.label(format!("Current Selection: {}", selection.0));
                ui.separator();
                ui.label("Elements");
                for element in ElementType::iter() {
                    ui.radio_value(&mut selection.0, element, element.to_string());
                }
            });
    }
}
