//! Dash Controller
//!
//! Dash стартует только если: `can_dash`, нет активного manoeuvre, lock свободен.
//! Отказ — тихий (bool), это ожидаемый input noise, а не ошибка.

use bevy::prelude::*;

use super::components::{ActiveManeuver, Maneuver};
use super::events::DashIntent;
use crate::config::ControllerTuning;
use crate::movement::{CharacterKinematics, LockOwner, MovementLock};

/// Попытка начать dash вдоль текущего facing
///
/// При успехе: can_dash = false, lock захвачен, vertical velocity = 0.
pub fn try_start_dash(
    kinematics: &mut CharacterKinematics,
    lock: &mut MovementLock,
    active: &mut ActiveManeuver,
    tuning: &ControllerTuning,
) -> bool {
    if !kinematics.can_dash || active.is_active() || lock.is_locked() {
        return false;
    }

    let Some(maneuver) = Maneuver::dash(kinematics.facing_direction(), tuning) else {
        return false;
    };

    if !lock.try_acquire(LockOwner::Dash) {
        return false;
    }

    kinematics.can_dash = false;
    kinematics.vertical_velocity = 0.0;
    active.0 = Some(maneuver);
    true
}

/// System: DashIntent → dash (SimulationSet::ManeuverStart)
pub fn start_dashes(
    mut intents: EventReader<DashIntent>,
    mut characters: Query<(&mut CharacterKinematics, &mut MovementLock, &mut ActiveManeuver)>,
    tuning: Res<ControllerTuning>,
) {
    for intent in intents.read() {
        let Ok((mut kinematics, mut lock, mut active)) = characters.get_mut(intent.entity) else {
            continue;
        };

        if try_start_dash(&mut kinematics, &mut lock, &mut active, &tuning) {
            crate::logger::log(&format!(
                "💨 Dash started (entity: {:?}, yaw: {:.1}, duration: {:.3}s)",
                intent.entity,
                kinematics.facing_yaw,
                tuning.dash_duration()
            ));
        } else {
            crate::logger::log(&format!(
                "🚫 Dash rejected (entity: {:?}, can_dash: {}, lock: {:?})",
                intent.entity,
                kinematics.can_dash,
                lock.owner()
            ));
        }
    }
}
