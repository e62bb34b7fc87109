//! Input systems (FixedUpdate, `SimulationSet::Input` / `SimulationSet::Cleanup`)

use bevy::prelude::*;

use super::{
    Activation, ButtonEvent, ButtonEventKind, DoubleActivation, DoubleActivationAction,
    InputBindings, MoveStick, PlayerInput,
};
use crate::maneuver::DashIntent;

/// System: отсчёт double click окон (до применения событий этого tick)
pub fn tick_input_windows(mut inputs: Query<&mut PlayerInput>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut input in inputs.iter_mut() {
        input.tick(delta);
    }
}

/// System: применяет сырые `ButtonEvent` / `MoveStick` к edge detectors
///
/// Каждое событие меняет состояние сразу и синхронно — press/release/press
/// внутри одного tick НЕ схлопываются.
pub fn apply_input_events(
    mut sticks: EventReader<MoveStick>,
    mut buttons: EventReader<ButtonEvent>,
    mut inputs: Query<&mut PlayerInput>,
    mut doubles: EventWriter<DoubleActivation>,
) {
    for stick in sticks.read() {
        let Ok(mut input) = inputs.get_mut(stick.entity) else {
            continue;
        };
        input.stick = stick.axis.clamp_length_max(1.0);
    }

    for event in buttons.read() {
        let Ok(mut input) = inputs.get_mut(event.entity) else {
            continue;
        };

        let edge = input.button_mut(event.button);
        match event.kind {
            ButtonEventKind::Pressed => {
                if edge.on_activate() == Activation::Double {
                    doubles.write(DoubleActivation {
                        entity: event.entity,
                        button: event.button,
                    });
                    crate::logger::log(&format!(
                        "👆👆 Input: double activation {:?} (entity: {:?})",
                        event.button, event.entity
                    ));
                }
            }
            ButtonEventKind::Released => {
                edge.on_deactivate();
            }
        }
    }
}

/// System: double activation → действие по `InputBindings`
pub fn route_double_activations(
    mut doubles: EventReader<DoubleActivation>,
    bindings: Res<InputBindings>,
    mut dash_intents: EventWriter<DashIntent>,
) {
    for double in doubles.read() {
        match bindings.action_for(double.button) {
            DoubleActivationAction::Dash => {
                dash_intents.write(DashIntent {
                    entity: double.entity,
                });
            }
            DoubleActivationAction::Ignore => {}
        }
    }
}

/// System: гасит одно-tick pulses (последняя система fixed tick)
pub fn clear_input_pulses(mut inputs: Query<&mut PlayerInput>) {
    for mut input in inputs.iter_mut() {
        input.end_tick();
    }
}
