use super::SceneMouse;
use crate::config::SlingConfig;
use crate::launch::{self, LaunchPhase, LaunchState, Projectile};
use crate::ui::UiFocus;
use bevy::prelude::*;
use bevy_rapier::prelude::*;

/// Pointer press/release edges of the launch phase machine.
pub fn handle_sling_click(
    mut commands: Commands,
    config: Res<SlingConfig>,
    ui_focus: Res<UiFocus>,
    scene_mouse: Res<SceneMouse>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut state: ResMut<LaunchState>,
    mut projectile: Query<(Entity, &Transform, &mut GravityScale, &mut RigidBody), With<Projectile>>,
) {
    if !ui_focus.inputs_enabled {
        return;
    }
    let Ok((entity, transform, mut gravity, mut body)) = projectile.get_single_mut() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        if let (LaunchPhase::Attached, Some(point)) = (&state.phase, scene_mouse.point) {
            let center = transform.translation.truncate();
            let half_extent = config.projectile_radius + config.pick_margin;
            if launch::hits_projectile(center, half_extent, point) {
                // Kinematic for the duration of the drag: the cursor drives
                // the transform and the tether stays inert.
                *body = RigidBody::KinematicPositionBased;
                gravity.0 = 0.0;
                state.phase = LaunchPhase::Dragging;
            }
        }
    }

    if mouse.just_released(MouseButton::Left) {
        if matches!(state.phase, LaunchPhase::Dragging) {
            commands.entity(entity).remove::<ImpulseJoint>();
            *body = RigidBody::Dynamic;
            gravity.0 = 1.0;
            state.phase = LaunchPhase::PendingLaunch {
                timer: Timer::from_seconds(config.launch_delay, TimerMode::Once),
            };
        }
    }
}

/// Drives the projectile straight from the cursor while dragging. No
/// smoothing, and no velocity accumulates from the drag itself.
pub fn handle_sling_drag(
    scene_mouse: Res<SceneMouse>,
    state: Res<LaunchState>,
    mut projectile: Query<(&mut Transform, &mut Velocity), With<Projectile>>,
) {
    if !matches!(state.phase, LaunchPhase::Dragging) {
        return;
    }
    let Ok((mut transform, mut velocity)) = projectile.get_single_mut() else {
        return;
    };
    if let Some(point) = scene_mouse.point {
        transform.translation.x = point.x;
        transform.translation.y = point.y;
        *velocity = Velocity::zero();
    }
}
