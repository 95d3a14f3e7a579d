use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Whether scene pointer interactions are allowed this frame.
#[derive(Resource)]
pub struct UiFocus {
    pub inputs_enabled: bool,
}

impl Default for UiFocus {
    fn default() -> Self {
        Self {
            inputs_enabled: true,
        }
    }
}

pub(super) fn focus_ui(mut contexts: EguiContexts, mut focus: ResMut<UiFocus>) {
    focus.inputs_enabled = !contexts.ctx_mut().wants_pointer_input();
}
