use bevy::prelude::*;

pub use color_generator::ColorGenerator;

mod color_generator;

pub struct StylingPlugin;

impl Plugin for StylingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ColorGenerator::default());
    }
}
