//! Combat domain — target acquisition + attack resolution
//!
//! Содержит:
//! - acquire_targets (ranked nearest enemies, чистая функция)
//! - EnemyColliders SystemParam, Hurtbox, Enemy
//! - WeaponBehavior trait (Bash homing lunge, Slash)
//! - try_attack / resolve_attacks / AttackCompleted

pub mod attack;
pub mod targeting;
pub mod weapon;


pub use attack::*;
pub use targeting::*;
pub use weapon::*;

use bevy::prelude::*;

use crate::SimulationSet;

/// Combat Plugin
///
/// resolve_attacks — после dash start (dash intent этого tick выигрывает lock),
/// report_attack_completion — после advance_maneuvers.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackCompleted>();

        app.add_systems(
            FixedUpdate,
            resolve_attacks
                .in_set(SimulationSet::ManeuverStart)
                .after(crate::maneuver::start_dashes),
        )
        .add_systems(
            FixedUpdate,
            report_attack_completion
                .in_set(SimulationSet::ManeuverAdvance)
                .after(crate::maneuver::advance_maneuvers),
        );
    }
}
