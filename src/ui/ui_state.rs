use bevy::prelude::*;

/// HUD state persisted across frames.
#[derive(Resource)]
pub struct UiState {
    pub running: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { running: true }
    }
}
