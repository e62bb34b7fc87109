//! Movement domain — locomotion & jump state machine
//!
//! Содержит:
//! - CharacterKinematics (vertical velocity, coyote, jump buffer, jump count)
//! - MovementLock (mutual exclusion между locomotion и manoeuvres)
//! - GroundContact (ответ Grounding Oracle за tick)
//! - AnimationState (флаги для presentation layer)
//! - Smoothing math (SmoothDamp для facing)

pub mod components;
pub mod locomotion;
pub mod smoothing;
pub mod systems;


pub use components::*;
pub use locomotion::*;
pub use systems::*;

use bevy::prelude::*;

use crate::SimulationSet;

/// Movement Plugin
///
/// Ground probe идёт ДО locomotion: ground state решает, засчитан ли
/// buffered jump в tick приземления.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, detect_ground.in_set(SimulationSet::Ground))
            .add_systems(FixedUpdate, update_locomotion.in_set(SimulationSet::Locomotion))
            .add_systems(
                FixedUpdate,
                publish_animation_state.in_set(SimulationSet::Presentation),
            );
    }
}
