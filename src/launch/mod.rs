//! The slingshot launch controller: the projectile lifecycle from tethered
//! rest, through dragging, to the deferred launch impulse and the
//! out-of-bounds reset.

use crate::config::SlingConfig;
use crate::parry::bounding_volume::Aabb;
use bevy::prelude::*;
use bevy_rapier::prelude::*;
use na::{point, vector};

pub use mouse::SceneMouse;

mod mouse;

/// The launched body.
#[derive(Component)]
pub struct Projectile;

/// The fixed body the tether attaches to.
#[derive(Component)]
pub struct SlingAnchor;

pub type ProjectileComponentsMut<'a> = (
    Entity,
    &'a mut Transform,
    &'a mut Velocity,
    &'a mut GravityScale,
    &'a mut RigidBody,
);

/// Lifecycle of the projectile.
///
/// The tether joint exists exactly while `Attached` or `Dragging`; gravity is
/// re-enabled the moment the tether is removed on release.
#[derive(Clone, Debug, Default)]
pub enum LaunchPhase {
    /// Tethered at rest, gravity off.
    #[default]
    Attached,
    /// The cursor drives the body directly; the tether is still attached but
    /// inert because the body is kinematic for the duration of the drag.
    Dragging,
    /// Tether removed and gravity restored. The impulse is applied once the
    /// timer elapses, after one physics step has settled. Leaving this phase
    /// early drops the timer, and with it the impulse.
    PendingLaunch { timer: Timer },
    /// Flying; waiting to fall past the reset line.
    Launched,
}

impl LaunchPhase {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchPhase::Attached => "attached",
            LaunchPhase::Dragging => "dragging",
            LaunchPhase::PendingLaunch { .. } => "pending launch",
            LaunchPhase::Launched => "launched",
        }
    }
}

#[derive(Clone, Debug, Default, Resource)]
pub struct LaunchState {
    pub phase: LaunchPhase,
    /// Completed launches since startup.
    pub attempts: u32,
}

pub struct LaunchPlugin;

impl Plugin for LaunchPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LaunchState::default())
            .add_plugins(mouse::LaunchMousePlugin)
            .add_systems(Update, (apply_pending_launch, reset_lost_projectile).chain());
    }
}

/// Velocity applied at release: proportional to the draw distance, directed
/// from the projectile position back toward the anchor.
pub fn launch_velocity(position: Vec2, anchor: Vec2, scale: f32) -> Vec2 {
    (anchor - position) * scale
}

/// Picking uses the axis-aligned bounds of the projectile, not its shape.
pub fn pick_bounds(center: Vec2, half_extent: f32) -> Aabb {
    Aabb::from_half_extents(point![center.x, center.y], vector![half_extent, half_extent])
}

pub fn hits_projectile(center: Vec2, half_extent: f32, p: Vec2) -> bool {
    pick_bounds(center, half_extent).contains_local_point(&point![p.x, p.y])
}

fn tether_joint(config: &SlingConfig) -> SpringJointBuilder {
    SpringJointBuilder::new(0.0, config.tether_stiffness, config.tether_damping)
        .local_anchor1(Vect::ZERO)
        .local_anchor2(Vect::ZERO)
}

/// (Re)creates the tether between the projectile and the anchor.
pub fn attach_tether(
    commands: &mut Commands,
    projectile: Entity,
    anchor: Entity,
    config: &SlingConfig,
) {
    commands
        .entity(projectile)
        .insert(ImpulseJoint::new(anchor, tether_joint(config)));
}

/// Applies the deferred launch impulse once the settle delay elapses.
fn apply_pending_launch(
    time: Res<Time>,
    config: Res<SlingConfig>,
    mut state: ResMut<LaunchState>,
    mut projectile: Query<(&Transform, &mut Velocity), With<Projectile>>,
) {
    let LaunchPhase::PendingLaunch { timer } = &mut state.phase else {
        return;
    };
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    let Ok((transform, mut velocity)) = projectile.get_single_mut() else {
        return;
    };

    // Read the position the physics step settled on, not the last drag sample.
    velocity.linvel = launch_velocity(
        transform.translation.truncate(),
        config.anchor,
        config.impulse_scale,
    );
    state.attempts += 1;
    state.phase = LaunchPhase::Launched;
}

/// Returns the projectile to the sling once it falls past the reset line.
fn reset_lost_projectile(
    mut commands: Commands,
    config: Res<SlingConfig>,
    mut state: ResMut<LaunchState>,
    mut projectile: Query<ProjectileComponentsMut, With<Projectile>>,
    anchors: Query<Entity, With<SlingAnchor>>,
) {
    let Ok((entity, mut transform, mut velocity, mut gravity, mut body)) =
        projectile.get_single_mut()
    else {
        return;
    };
    if !config.out_of_bounds(transform.translation.y) {
        return;
    }
    let Ok(anchor) = anchors.get_single() else {
        return;
    };
    reset_projectile(
        &mut commands,
        &config,
        &mut state,
        entity,
        &mut transform,
        &mut velocity,
        &mut gravity,
        &mut body,
        anchor,
    );
}

/// Teleports the projectile back to the sling and re-tethers it. Idempotent.
#[allow(clippy::too_many_arguments)]
pub fn reset_projectile(
    commands: &mut Commands,
    config: &SlingConfig,
    state: &mut LaunchState,
    entity: Entity,
    transform: &mut Transform,
    velocity: &mut Velocity,
    gravity: &mut GravityScale,
    body: &mut RigidBody,
    anchor: Entity,
) {
    transform.translation = config.anchor.extend(transform.translation.z);
    transform.rotation = Quat::IDENTITY;
    *velocity = Velocity::zero();
    gravity.0 = 0.0;
    *body = RigidBody::Dynamic;
    attach_tether(commands, entity, anchor, config);
    state.phase = LaunchPhase::Attached;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene;
    use crate::ui::UiFocus;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn launch_velocity_points_back_toward_the_anchor() {
        let velocity = launch_velocity(Vec2::new(100.0, 500.0), Vec2::new(150.0, 450.0), 0.1);
        assert!(velocity.x > 0.0 && velocity.y < 0.0);
        assert_relative_eq!(velocity.x, 5.0);
        assert_relative_eq!(velocity.y, -5.0);
    }

    #[test]
    fn launch_speed_is_proportional_to_draw_distance() {
        // Two pulls of distance 100, different directions, same speed.
        let velocity = launch_velocity(Vec2::new(-60.0, -80.0), Vec2::ZERO, 0.1);
        assert_relative_eq!(velocity.length(), 10.0, epsilon = 1.0e-4);
        let other = launch_velocity(Vec2::new(100.0, 0.0), Vec2::ZERO, 0.1);
        assert_relative_eq!(other.length(), 10.0, epsilon = 1.0e-4);
    }

    #[test]
    fn picking_uses_padded_axis_aligned_bounds() {
        let center = Vec2::new(10.0, -20.0);
        assert!(hits_projectile(center, 24.0, center));
        // A corner point outside the disc but inside the box still picks.
        assert!(hits_projectile(center, 24.0, center + Vec2::new(23.0, 23.0)));
        assert!(!hits_projectile(center, 24.0, center + Vec2::new(25.0, 0.0)));
        assert!(!hits_projectile(center, 24.0, center - Vec2::new(0.0, 25.0)));
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, TransformPlugin))
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
                DT,
            )))
            .insert_resource(ButtonInput::<MouseButton>::default())
            .insert_resource(UiFocus::default())
            .insert_resource(SlingConfig::default())
            .add_plugins(LaunchPlugin)
            .add_systems(Startup, |mut commands: Commands, config: Res<SlingConfig>| {
                scene::spawn_slingshot(&mut commands, &config);
            });
        // Zero gravity keeps velocities constant between steps, so the
        // deferred-impulse assertions are exact.
        app.world_mut()
            .resource_mut::<RapierConfiguration>()
            .gravity = Vect::ZERO;
        app.update();
        app
    }

    fn press_left(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
    }

    fn release_left(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
    }

    fn point_at(app: &mut App, point: Vec2) {
        app.world_mut().resource_mut::<SceneMouse>().point = Some(point);
    }

    fn projectile_entity(app: &mut App) -> Entity {
        let mut query = app
            .world_mut()
            .query_filtered::<Entity, With<Projectile>>();
        query.single(app.world())
    }

    fn phase(app: &App) -> LaunchPhase {
        app.world().resource::<LaunchState>().phase.clone()
    }

    fn run_reset(app: &mut App) {
        app.world_mut().run_system_once(
            |mut commands: Commands,
             config: Res<SlingConfig>,
             mut state: ResMut<LaunchState>,
             mut projectile: Query<ProjectileComponentsMut, With<Projectile>>,
             anchors: Query<Entity, With<SlingAnchor>>| {
                let (entity, mut transform, mut velocity, mut gravity, mut body) =
                    projectile.single_mut();
                reset_projectile(
                    &mut commands,
                    &config,
                    &mut state,
                    entity,
                    &mut transform,
                    &mut velocity,
                    &mut gravity,
                    &mut body,
                    anchors.single(),
                );
            },
        );
    }

    #[test]
    fn drag_and_release_launches_after_the_settle_delay() {
        let mut app = test_app();
        let config = *app.world().resource::<SlingConfig>();
        let entity = projectile_entity(&mut app);

        // Grab the projectile at rest.
        point_at(&mut app, config.anchor);
        press_left(&mut app);
        assert!(matches!(phase(&app), LaunchPhase::Dragging));
        assert!(matches!(
            *app.world().get::<RigidBody>(entity).unwrap(),
            RigidBody::KinematicPositionBased
        ));
        assert!(app.world().get::<ImpulseJoint>(entity).is_some());

        // Pull down-left; the transform follows the cursor verbatim.
        let pulled = config.anchor + Vec2::new(-50.0, -50.0);
        point_at(&mut app, pulled);
        app.update();
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_relative_eq!(transform.translation.x, pulled.x, epsilon = 1.0e-3);
        assert_relative_eq!(transform.translation.y, pulled.y, epsilon = 1.0e-3);

        // Release: tether gone, gravity back, impulse still pending.
        release_left(&mut app);
        assert!(matches!(phase(&app), LaunchPhase::PendingLaunch { .. }));
        assert!(app.world().get::<ImpulseJoint>(entity).is_none());
        assert_relative_eq!(app.world().get::<GravityScale>(entity).unwrap().0, 1.0);
        assert_relative_eq!(
            app.world().get::<Velocity>(entity).unwrap().linvel.length(),
            0.0,
            epsilon = 1.0e-3
        );

        // 50 ms at 60 Hz: a handful of ticks crosses the delay.
        for _ in 0..4 {
            app.update();
        }
        assert!(matches!(phase(&app), LaunchPhase::Launched));
        let velocity = app.world().get::<Velocity>(entity).unwrap();
        let expected = launch_velocity(pulled, config.anchor, config.impulse_scale);
        assert!(velocity.linvel.x > 0.0 && velocity.linvel.y > 0.0);
        assert_relative_eq!(velocity.linvel.x, expected.x, epsilon = 0.1);
        assert_relative_eq!(velocity.linvel.y, expected.y, epsilon = 0.1);
        assert_eq!(app.world().resource::<LaunchState>().attempts, 1);
    }

    #[test]
    fn pressing_away_from_the_projectile_does_nothing() {
        let mut app = test_app();
        let config = *app.world().resource::<SlingConfig>();
        let entity = projectile_entity(&mut app);

        point_at(&mut app, config.anchor + Vec2::new(200.0, 0.0));
        press_left(&mut app);
        assert!(matches!(phase(&app), LaunchPhase::Attached));
        assert!(matches!(
            *app.world().get::<RigidBody>(entity).unwrap(),
            RigidBody::Dynamic
        ));
        assert!(app.world().get::<ImpulseJoint>(entity).is_some());
        release_left(&mut app);
        assert!(matches!(phase(&app), LaunchPhase::Attached));
    }

    #[test]
    fn reset_fires_only_past_the_margin_line() {
        let mut app = test_app();
        let config = *app.world().resource::<SlingConfig>();
        let entity = projectile_entity(&mut app);

        // Detach so the tether can't pull the body back during the step.
        app.world_mut().entity_mut(entity).remove::<ImpulseJoint>();
        app.world_mut()
            .get_mut::<Transform>(entity)
            .unwrap()
            .translation
            .y = config.fall_line();
        app.update();
        assert_relative_eq!(
            app.world().get::<Transform>(entity).unwrap().translation.y,
            config.fall_line(),
            epsilon = 1.0e-3
        );
        assert!(app.world().get::<ImpulseJoint>(entity).is_none());

        app.world_mut()
            .get_mut::<Transform>(entity)
            .unwrap()
            .translation
            .y = config.fall_line() - 1.0;
        app.update();
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_relative_eq!(transform.translation.x, config.anchor.x, epsilon = 1.0e-3);
        assert_relative_eq!(transform.translation.y, config.anchor.y, epsilon = 1.0e-3);
        assert!(app.world().get::<ImpulseJoint>(entity).is_some());
        assert!(matches!(phase(&app), LaunchPhase::Attached));
    }

    #[test]
    fn reset_during_the_pending_window_cancels_the_impulse() {
        let mut app = test_app();
        let config = *app.world().resource::<SlingConfig>();
        let entity = projectile_entity(&mut app);

        point_at(&mut app, config.anchor);
        press_left(&mut app);
        point_at(&mut app, config.anchor + Vec2::new(-40.0, -30.0));
        app.update();
        release_left(&mut app);
        assert!(matches!(phase(&app), LaunchPhase::PendingLaunch { .. }));

        // The projectile escapes before the delay elapses.
        app.world_mut()
            .get_mut::<Transform>(entity)
            .unwrap()
            .translation
            .y = config.fall_line() - 1.0;
        app.update();
        assert!(matches!(phase(&app), LaunchPhase::Attached));

        // Well past the launch delay: no stale impulse fires.
        for _ in 0..10 {
            app.update();
        }
        assert!(matches!(phase(&app), LaunchPhase::Attached));
        assert_relative_eq!(
            app.world().get::<Velocity>(entity).unwrap().linvel.length(),
            0.0,
            epsilon = 1.0e-3
        );
        assert!(app.world().get::<ImpulseJoint>(entity).is_some());
        assert_eq!(app.world().resource::<LaunchState>().attempts, 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut app = test_app();
        let config = *app.world().resource::<SlingConfig>();
        let entity = projectile_entity(&mut app);

        {
            let mut transform = app.world_mut().get_mut::<Transform>(entity).unwrap();
            transform.translation = Vec3::new(40.0, -90.0, 1.0);
            transform.rotation = Quat::from_rotation_z(1.0);
        }
        app.world_mut().get_mut::<Velocity>(entity).unwrap().linvel = Vec2::new(12.0, 3.0);

        let snapshot = |app: &App| {
            let transform = app.world().get::<Transform>(entity).unwrap();
            let velocity = app.world().get::<Velocity>(entity).unwrap();
            (
                transform.translation,
                transform.rotation,
                velocity.linvel,
                velocity.angvel,
                app.world().get::<ImpulseJoint>(entity).is_some(),
                app.world().get::<GravityScale>(entity).unwrap().0,
            )
        };

        run_reset(&mut app);
        let once = snapshot(&app);
        run_reset(&mut app);
        assert_eq!(once, snapshot(&app));

        assert_eq!(once.0.truncate(), config.anchor);
        assert_eq!(once.1, Quat::IDENTITY);
        assert_eq!(once.2, Vec2::ZERO);
        assert!(once.4);
        assert_eq!(once.5, 0.0);
        assert!(matches!(phase(&app), LaunchPhase::Attached));
    }
}
