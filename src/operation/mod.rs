use crate::config::SlingConfig;
use crate::launch::{self, LaunchState, Projectile, ProjectileComponentsMut, SlingAnchor};
use crate::scene::LevelBlock;
use bevy::prelude::*;

/// Deferred scene edits requested by the HUD, applied once per frame.
pub enum Operation {
    ResetProjectile,
    ClearBlocks,
}

#[derive(Default, Resource)]
pub struct Operations {
    stack: Vec<Operation>,
}

impl Operations {
    pub fn push(&mut self, op: Operation) {
        self.stack.push(op);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.stack.iter()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

pub struct OperationsPlugin;

impl Plugin for OperationsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Operations::default())
            .add_systems(Update, process_operations)
            .add_systems(Last, clear_operations);
    }
}

fn process_operations(
    mut commands: Commands,
    operations: Res<Operations>,
    config: Res<SlingConfig>,
    mut state: ResMut<LaunchState>,
    mut projectile: Query<ProjectileComponentsMut, With<Projectile>>,
    anchors: Query<Entity, With<SlingAnchor>>,
    blocks: Query<Entity, With<LevelBlock>>,
) {
    for op in operations.iter() {
        match op {
            Operation::ResetProjectile => {
                let (Ok((entity, mut transform, mut velocity, mut gravity, mut body)), Ok(anchor)) =
                    (projectile.get_single_mut(), anchors.get_single())
                else {
                    continue;
                };
                launch::reset_projectile(
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
            Operation::ClearBlocks => {
                for entity in blocks.iter() {
                    commands.entity(entity).despawn_recursive();
                }
            }
        }
    }
}

fn clear_operations(mut operations: ResMut<Operations>) {
    operations.clear();
}
