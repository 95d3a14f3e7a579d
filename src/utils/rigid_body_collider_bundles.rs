use bevy::prelude::Bundle;
use bevy_rapier::prelude::*;

#[derive(Clone, Bundle)]
pub struct ColliderBundle {
    pub collider: Collider,
    pub restitution: Restitution,
    pub mass_properties: ColliderMassProperties,
}

impl ColliderBundle {
    pub fn new(collider: Collider) -> Self {
        Self {
            collider,
            restitution: Default::default(),
            mass_properties: Default::default(),
        }
    }
}

#[derive(Copy, Clone, Default, Bundle)]
pub struct RigidBodyBundle {
    pub rigid_body: RigidBody,
    pub velocity: Velocity,
    pub gravity_scale: GravityScale,
    pub sleeping: Sleeping,
    pub damping: Damping,
}

impl RigidBodyBundle {
    pub fn dynamic() -> Self {
        Self {
            rigid_body: RigidBody::Dynamic,
            ..Default::default()
        }
    }

    pub fn fixed() -> Self {
        Self {
            rigid_body: RigidBody::Fixed,
            ..Default::default()
        }
    }
}
