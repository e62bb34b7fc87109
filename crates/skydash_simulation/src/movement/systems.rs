//! Movement systems (FixedUpdate)

use bevy::prelude::*;

use super::components::{AnimationState, CharacterKinematics, GroundContact, MovementLock};
use super::locomotion::LocomotionInput;
use crate::config::ControllerTuning;
use crate::input::PlayerInput;
use crate::physics::{GroundProbe, KinematicBody, GROUND_LAYER};
use crate::ui::CameraRig;

/// System: Grounding Oracle → `GroundContact` (SimulationSet::Ground)
pub fn detect_ground(
    mut characters: Query<(&Transform, &mut GroundContact)>,
    ground: GroundProbe,
    tuning: Res<ControllerTuning>,
) {
    for (transform, mut contact) in characters.iter_mut() {
        contact.grounded =
            ground.is_grounded(transform.translation, tuning.ground_probe_radius, GROUND_LAYER);
    }
}

/// System: locomotion tick (SimulationSet::Locomotion)
///
/// Translation пишет только при свободном lock; vertical velocity копится всегда.
pub fn update_locomotion(
    mut characters: Query<(
        Entity,
        &PlayerInput,
        &GroundContact,
        &MovementLock,
        &mut CharacterKinematics,
        &mut KinematicBody,
    )>,
    tuning: Res<ControllerTuning>,
    camera: Res<CameraRig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, input, contact, lock, mut kinematics, mut body) in characters.iter_mut() {
        let locomotion_input = LocomotionInput {
            grounded: contact.grounded,
            stick: input.stick,
            jump_pressed: input.jump.just_pressed(),
            jump_released: input.jump.just_released(),
            camera_yaw: camera.yaw_degrees,
            locked: lock.is_locked(),
        };

        let step = kinematics.tick(&locomotion_input, &tuning, delta);

        if step.landed {
            crate::logger::log(&format!("🦶 {:?} landed", entity));
        }
        if step.jumped {
            crate::logger::log(&format!(
                "⬆️ {:?} jump #{} (vv: {:.2})",
                entity, kinematics.jump_count, kinematics.vertical_velocity
            ));
        }
        if step.jump_cut {
            crate::logger::log(&format!("✂️ {:?} jump cut", entity));
        }
        if step.started_falling {
            crate::logger::log(&format!("🍂 {:?} started falling", entity));
        }

        if let Some(displacement) = step.displacement {
            body.push(displacement);
        }
    }
}

/// System: flags для animation blending (SimulationSet::Presentation)
pub fn publish_animation_state(
    mut characters: Query<(&CharacterKinematics, &KinematicBody, &mut AnimationState)>,
) {
    for (kinematics, body, mut animation) in characters.iter_mut() {
        let grounded = kinematics.grounded_last_tick;

        let next = AnimationState {
            grounded,
            jumping: !grounded && kinematics.vertical_velocity > 0.0,
            free_falling: kinematics.started_falling && kinematics.vertical_velocity < 0.0,
            speed: body.horizontal_speed(),
        };

        // set_if_neq: Changed<AnimationState> только при реальной смене
        animation.set_if_neq(next);
    }
}
