use bevy::prelude::*;

mod click;
mod track;

/// Cursor position in world space, tracked every frame.
#[derive(Default, Copy, Clone, Debug, Resource)]
pub struct SceneMouse {
    pub point: Option<Vec2>,
}

pub struct LaunchMousePlugin;

impl Plugin for LaunchMousePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SceneMouse::default())
            .add_systems(PreUpdate, track::track_mouse_state)
            .add_systems(
                Update,
                (click::handle_sling_click, click::handle_sling_drag).chain(),
            );
    }
}
