//! Maneuver domain — time-boxed движения (dash, weapon attack)
//!
//! Содержит:
//! - Maneuver (direction, speed, duration, elapsed) + ActiveManeuver slot
//! - Dash Controller (try_start_dash, start_dashes)
//! - advance / cancel systems
//! - DashIntent / CancelManeuver / ManeuverFinished events

pub mod components;
pub mod dash;
pub mod events;
pub mod systems;


pub use components::*;
pub use dash::*;
pub use events::*;
pub use systems::*;

use bevy::prelude::*;

use crate::SimulationSet;

/// Maneuver Plugin
///
/// Старт manoeuvres — до locomotion (lock уже виден locomotion в том же tick),
/// advance — после (один writer translation за tick).
pub struct ManeuverPlugin;

impl Plugin for ManeuverPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DashIntent>()
            .add_event::<CancelManeuver>()
            .add_event::<ManeuverFinished>();

        app.add_systems(
            FixedUpdate,
            (cancel_maneuvers, start_dashes)
                .chain()
                .in_set(SimulationSet::ManeuverStart),
        )
        .add_systems(
            FixedUpdate,
            advance_maneuvers.in_set(SimulationSet::ManeuverAdvance),
        );
    }
}
