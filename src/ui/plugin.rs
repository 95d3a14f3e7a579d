use super::{UiFocus, UiState};
use bevy::prelude::*;

/// Plugin for the HUD and its input-blocking bookkeeping.
pub struct SlingUiPlugin;

impl Plugin for SlingUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_egui::EguiPlugin)
            .insert_resource(UiState::default())
            .insert_resource(UiFocus::default())
            .add_systems(
                PreUpdate,
                super::focus_ui.after(bevy_egui::EguiSet::BeginFrame),
            )
            .add_systems(Update, super::hud::update_ui);
    }
}
