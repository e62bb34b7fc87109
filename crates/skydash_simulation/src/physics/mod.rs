//! Physics glue module
//!
//! Collision layers, grounding oracle и kinematic integrator.
//! Полноценный Rapier pipeline не поднимаем: ground = axis-aligned slab'ы,
//! классификация коллайдеров — через Rapier `CollisionGroups`.

pub mod collision;
pub mod ground;
pub mod movement;

// Re-export основных типов
pub use collision::*;
pub use ground::{ground_slab_bundle, spawn_ground_slab, GroundProbe, GroundSurface};
pub use movement::{integrate_kinematic_bodies, KinematicBody};

use bevy::prelude::*;

use crate::SimulationSet;

/// Physics Plugin: интеграция displacement после всех writers tick
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_kinematic_bodies.in_set(SimulationSet::Integrate),
        );
    }
}
