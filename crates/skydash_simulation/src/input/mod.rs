//! Input domain — edge detection для логических кнопок
//!
//! Содержит:
//! - ButtonEdge (just pressed / just released / double activation)
//! - ResetTimer (countdown с generation counter)
//! - PlayerInput (stick + jump + attack detectors)
//! - InputBindings (double activation → действие)
//! - ButtonEvent / MoveStick / DoubleActivation events

pub mod components;
pub mod edge;
pub mod events;
pub mod systems;

#[cfg(test)]
mod edge_tests;

pub use components::*;
pub use edge::*;
pub use events::*;
pub use systems::*;

use bevy::prelude::*;

use crate::SimulationSet;

/// Input Plugin
///
/// Порядок в FixedUpdate:
/// 1. tick_input_windows — окна double click прошлых нажатий
/// 2. apply_input_events — события этого tick (без схлопывания)
/// 3. route_double_activations — DoubleActivation → DashIntent
/// ...
/// N. clear_input_pulses — в самом конце tick
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ButtonEvent>()
            .add_event::<MoveStick>()
            .add_event::<DoubleActivation>()
            .init_resource::<InputBindings>();

        app.add_systems(
            FixedUpdate,
            (tick_input_windows, apply_input_events, route_double_activations)
                .chain()
                .in_set(SimulationSet::Input),
        )
        .add_systems(FixedUpdate, clear_input_pulses.in_set(SimulationSet::Cleanup));
    }
}
