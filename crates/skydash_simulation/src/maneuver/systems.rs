//! Maneuver systems: advance / cancel

use bevy::prelude::*;

use super::components::{ActiveManeuver, Maneuver, ManeuverKind, ManeuverStep};
use super::events::{CancelManeuver, ManeuverFinished};
use crate::movement::{CharacterKinematics, MovementLock};
use crate::physics::KinematicBody;

/// Закрыть manoeuvre: отпустить lock, dash гасит vertical velocity
fn finish_maneuver(
    maneuver: &Maneuver,
    lock: &mut MovementLock,
    kinematics: &mut CharacterKinematics,
) {
    if maneuver.kind == ManeuverKind::Dash {
        kinematics.vertical_velocity = 0.0;
    }
    lock.release(maneuver.kind.lock_owner());
}

/// System: CancelManeuver (SimulationSet::ManeuverStart, до старта новых)
pub fn cancel_maneuvers(
    mut cancels: EventReader<CancelManeuver>,
    mut characters: Query<(&mut ActiveManeuver, &mut MovementLock, &mut CharacterKinematics)>,
    mut finished: EventWriter<ManeuverFinished>,
) {
    for cancel in cancels.read() {
        let Ok((mut active, mut lock, mut kinematics)) = characters.get_mut(cancel.entity) else {
            continue;
        };

        let Some(maneuver) = active.0.take() else {
            continue;
        };

        finish_maneuver(&maneuver, &mut lock, &mut kinematics);
        finished.write(ManeuverFinished {
            entity: cancel.entity,
            kind: maneuver.kind,
            cancelled: true,
        });

        crate::logger::log(&format!(
            "⛔ Maneuver {:?} cancelled (entity: {:?}, elapsed: {:.3}s)",
            maneuver.kind, cancel.entity, maneuver.elapsed
        ));
    }
}

/// System: один tick активных manoeuvres (SimulationSet::ManeuverAdvance)
///
/// Manoeuvre двигает персонажа и в tick старта. Lock отпускается в tick,
/// где elapsed >= total_duration.
pub fn advance_maneuvers(
    mut characters: Query<(
        Entity,
        &mut ActiveManeuver,
        &mut MovementLock,
        &mut CharacterKinematics,
        &mut KinematicBody,
    )>,
    time: Res<Time<Fixed>>,
    mut finished: EventWriter<ManeuverFinished>,
) {
    let delta = time.delta_secs();

    for (entity, mut active, mut lock, mut kinematics, mut body) in characters.iter_mut() {
        let Some(maneuver) = active.0.as_mut() else {
            continue;
        };

        let (displacement, step) = maneuver.advance(delta);
        body.push(displacement);

        if step == ManeuverStep::Running {
            continue;
        }

        let Some(maneuver) = active.0.take() else {
            continue;
        };

        finish_maneuver(&maneuver, &mut lock, &mut kinematics);
        finished.write(ManeuverFinished {
            entity,
            kind: maneuver.kind,
            cancelled: false,
        });

        crate::logger::log(&format!(
            "✅ Maneuver {:?} completed (entity: {:?}, elapsed: {:.3}s)",
            maneuver.kind, entity, maneuver.elapsed
        ));
    }
}
