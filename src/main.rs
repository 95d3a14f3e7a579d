extern crate bevy_rapier2d as bevy_rapier;
extern crate nalgebra as na;

pub use bevy_rapier::parry;

use crate::cli::CliArgs;
use crate::config::SlingConfig;
use bevy::prelude::*;
use bevy_rapier::prelude::*;
use bevy_rapier::render::DebugRenderContext;
use clap::Parser;

mod cli;
mod config;
mod launch;
mod operation;
mod render;
mod scene;
mod styling;
mod ui;
mod utils;

#[derive(Component)]
pub struct MainCamera;

fn main() {
    let args = CliArgs::parse();
    let config = SlingConfig::from_args(&args);

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.53, 0.81, 0.92)))
        .insert_resource(config)
        .insert_resource(args)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Slingshot".to_string(),
                resolution: (config.width, config.height).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
        .add_plugins(RapierDebugRenderPlugin::default().disabled())
        .add_plugins(ui::SlingUiPlugin)
        .add_plugins(styling::StylingPlugin)
        .add_plugins(operation::OperationsPlugin)
        .add_plugins(scene::ScenePlugin)
        .add_plugins(render::SceneRenderPlugin)
        .add_plugins(launch::LaunchPlugin)
        .add_systems(Startup, (setup_graphics, setup_physics))
        .run();
}

fn setup_graphics(mut commands: Commands) {
    commands.spawn((Camera2dBundle::default(), MainCamera));
}

fn setup_physics(
    args: Res<CliArgs>,
    config: Res<SlingConfig>,
    mut rapier_config: ResMut<RapierConfiguration>,
    mut debug_render_context: ResMut<DebugRenderContext>,
) {
    rapier_config.gravity = Vect::new(0.0, -config.gravity);
    debug_render_context.enabled = args.debug_render;
}
