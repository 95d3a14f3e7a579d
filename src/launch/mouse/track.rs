use super::SceneMouse;
use crate::MainCamera;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub fn track_mouse_state(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scene_mouse: ResMut<SceneMouse>,
    camera: Query<(&GlobalTransform, &Camera), With<MainCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    for (camera_transform, camera) in camera.iter() {
        if let Some(cursor) = window.cursor_position() {
            scene_mouse.point = camera.viewport_to_world_2d(camera_transform, cursor);
        }
    }
}
