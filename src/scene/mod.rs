use crate::cli::CliArgs;
use crate::config::SlingConfig;
use crate::launch::{self, Projectile, SlingAnchor};
use crate::render::ColliderRender;
use crate::styling::ColorGenerator;
use crate::utils::{ColliderBundle, RigidBodyBundle};
use bevy::color::palettes::css;
use bevy::prelude::*;
use bevy_rapier::prelude::*;

pub use level::{Block, Level};

mod level;

/// Marker for static level obstacles.
#[derive(Component)]
pub struct LevelBlock;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    args: Res<CliArgs>,
    config: Res<SlingConfig>,
    mut colors: ResMut<ColorGenerator>,
) {
    let level = load_level(&args);
    log::info!("spawning level {:?} ({} blocks)", level.name, level.blocks.len());

    spawn_slingshot(&mut commands, &config);

    for block in &level.blocks {
        spawn_block(&mut commands, &config, block, colors.gen_color());
    }
}

fn load_level(args: &CliArgs) -> Level {
    match &args.level {
        Some(path) => Level::from_file(path).unwrap_or_else(|err| {
            log::error!("failed to load level {}: {err:#}", path.display());
            Level::builtin()
        }),
        None => Level::builtin(),
    }
}

/// Spawns the anchor body and the tethered projectile resting on it.
pub fn spawn_slingshot(commands: &mut Commands, config: &SlingConfig) -> (Entity, Entity) {
    let anchor = commands
        .spawn((
            SlingAnchor,
            RigidBody::Fixed,
            TransformBundle::from(Transform::from_translation(config.anchor.extend(0.0))),
        ))
        .id();

    let projectile = commands
        .spawn((
            Projectile,
            RigidBodyBundle {
                gravity_scale: GravityScale(0.0),
                sleeping: Sleeping::disabled(),
                ..RigidBodyBundle::dynamic()
            },
            ColliderBundle {
                restitution: Restitution::coefficient(config.projectile_restitution),
                ..ColliderBundle::new(Collider::ball(config.projectile_radius))
            },
            SpatialBundle::from_transform(Transform::from_translation(config.anchor.extend(1.0))),
            ColliderRender::from(Color::from(css::CRIMSON)),
        ))
        .id();
    launch::attach_tether(commands, projectile, anchor, config);

    (anchor, projectile)
}

fn spawn_block(commands: &mut Commands, config: &SlingConfig, block: &Block, color: Color) {
    let position = config.screen_to_world(Vec2::new(block.x, block.y));
    commands.spawn((
        LevelBlock,
        RigidBodyBundle::fixed(),
        ColliderBundle::new(Collider::cuboid(block.half_extent, block.half_extent)),
        SpatialBundle::from_transform(Transform::from_translation(position.extend(0.0))),
        ColliderRender::from(color),
    ));
}
