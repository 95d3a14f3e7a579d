use crate::config::SlingConfig;
use crate::launch::{LaunchPhase, LaunchState, Projectile};
use bevy::color::palettes::css;
use bevy::prelude::*;
use bevy::sprite::{ColorMaterial, Mesh2dHandle};
use bevy_rapier::prelude::*;
use bevy_rapier::render::DebugRenderContext;

/// Flat color attached to a physics entity; a matching display mesh is
/// generated from its collider shape.
#[derive(Copy, Clone, Component)]
pub struct ColliderRender {
    pub color: Color,
}

impl From<Color> for ColliderRender {
    fn from(color: Color) -> Self {
        Self { color }
    }
}

pub struct SceneRenderPlugin;

impl Plugin for SceneRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (attach_collider_shapes, draw_tether, draw_world_bounds),
        );
    }
}

/// Generates display meshes for newly added renderable colliders.
fn attach_collider_shapes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    colliders: Query<(Entity, &Collider, &ColliderRender), Added<ColliderRender>>,
) {
    for (entity, collider, render) in colliders.iter() {
        let mesh = if let Some(ball) = collider.raw.as_ball() {
            meshes.add(Circle::new(ball.radius))
        } else if let Some(cuboid) = collider.raw.as_cuboid() {
            meshes.add(Rectangle::new(
                cuboid.half_extents.x * 2.0,
                cuboid.half_extents.y * 2.0,
            ))
        } else {
            let extents = collider.raw.compute_local_aabb().extents();
            meshes.add(Rectangle::new(extents.x, extents.y))
        };
        commands.entity(entity).insert((
            Mesh2dHandle(mesh),
            materials.add(render.color),
            VisibilityBundle::default(),
        ));
    }
}

/// Draws the sling post and, while the projectile is tethered, the band.
fn draw_tether(
    mut gizmos: Gizmos,
    config: Res<SlingConfig>,
    state: Res<LaunchState>,
    projectile: Query<&Transform, With<Projectile>>,
) {
    let anchor = config.anchor;
    gizmos.line_2d(
        anchor - Vec2::Y * config.projectile_radius * 3.0,
        anchor,
        css::SADDLE_BROWN,
    );

    if !matches!(state.phase, LaunchPhase::Attached | LaunchPhase::Dragging) {
        return;
    }
    if let Ok(transform) = projectile.get_single() {
        gizmos.line_2d(anchor, transform.translation.truncate(), css::DARK_SLATE_GRAY);
    }
}

/// Outlines the playable area down to the reset line when the debug overlay
/// is on.
fn draw_world_bounds(
    mut gizmos: Gizmos,
    config: Res<SlingConfig>,
    debug_render: Res<DebugRenderContext>,
) {
    if !debug_render.enabled {
        return;
    }
    let bounds = config.world_bounds();
    let center = bounds.center();
    let extents = bounds.extents();
    gizmos.rect_2d(
        Vec2::new(center.x, center.y),
        0.0,
        Vec2::new(extents.x, extents.y),
        css::ORANGE_RED,
    );
}
