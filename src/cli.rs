use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Canvas width, in pixels.
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,
    /// Canvas height, in pixels.
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,
    /// Scale applied to the draw distance when computing the launch velocity.
    #[arg(long, default_value_t = 0.1)]
    pub impulse_scale: f32,
    /// Distance below the viewport before a lost projectile resets.
    #[arg(long, default_value_t = 100.0)]
    pub reset_margin: f32,
    /// Start with the physics debug overlay enabled.
    #[arg(long, default_value_t = false)]
    pub debug_render: bool,
    /// JSON level file to load instead of the builtin layout.
    #[arg(long)]
    pub level: Option<PathBuf>,
}
