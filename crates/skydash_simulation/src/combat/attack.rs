//! Attack resolution: Idle → Attacking → Idle
//!
//! Атака стартует только при: attack just pressed, нет активного manoeuvre,
//! lock свободен, есть хотя бы одна цель. Иначе — тихий drop (без очереди).

use bevy::prelude::*;

use super::targeting::{AcquiredTarget, EnemyColliders};
use super::weapon::EquippedWeapon;
use crate::input::PlayerInput;
use crate::maneuver::{ActiveManeuver, ManeuverFinished, ManeuverKind};
use crate::movement::{CharacterKinematics, MovementLock};

/// Атака дошла до конца (не отменена)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackCompleted {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub weapon: String,
}

/// Попытка атаки по уже ранжированным целям (берём первую)
///
/// Возвращает выбранную цель, если атака стартовала.
pub fn try_attack(
    origin: Vec3,
    weapon: &EquippedWeapon,
    targets: &[AcquiredTarget],
    kinematics: &mut CharacterKinematics,
    lock: &mut MovementLock,
    active: &mut ActiveManeuver,
) -> Option<Entity> {
    if active.is_active() || lock.is_locked() {
        return None;
    }

    let target = targets.first()?;
    let plan = weapon.behavior.plan_attack(origin, target);

    if !lock.try_acquire(plan.maneuver.kind.lock_owner()) {
        return None;
    }

    if let Some(yaw) = plan.face_yaw {
        kinematics.face_immediately(yaw);
    }
    active.0 = Some(plan.maneuver);
    Some(target.entity)
}

/// System: attack button → attack manoeuvre (SimulationSet::ManeuverStart)
pub fn resolve_attacks(
    mut attackers: Query<(
        Entity,
        &Transform,
        &PlayerInput,
        &EquippedWeapon,
        &mut CharacterKinematics,
        &mut MovementLock,
        &mut ActiveManeuver,
    )>,
    enemies: EnemyColliders,
) {
    for (entity, transform, input, weapon, mut kinematics, mut lock, mut active) in
        attackers.iter_mut()
    {
        if !input.attack.just_pressed() {
            continue;
        }

        if active.is_active() || lock.is_locked() {
            crate::logger::log(&format!(
                "🚫 Attack dropped: busy (entity: {:?}, lock: {:?})",
                entity,
                lock.owner()
            ));
            continue;
        }

        let origin = transform.translation;
        let targets = enemies.acquire(origin, weapon.config.attack_range, weapon.target_count());

        match try_attack(origin, weapon, &targets, &mut kinematics, &mut lock, &mut active) {
            Some(target) => {
                crate::logger::log(&format!(
                    "⚔️ Attack started: {} (attacker: {:?}, target: {:?}, candidates: {})",
                    weapon.config.name,
                    entity,
                    target,
                    targets.len()
                ));
            }
            None => {
                crate::logger::log(&format!(
                    "🚫 Attack dropped: no target in {:.1}m (entity: {:?})",
                    weapon.config.attack_range, entity
                ));
            }
        }
    }
}

/// System: ManeuverFinished(Attack) → AttackCompleted
pub fn report_attack_completion(
    mut finished: EventReader<ManeuverFinished>,
    weapons: Query<&EquippedWeapon>,
    mut completed: EventWriter<AttackCompleted>,
) {
    for event in finished.read() {
        let ManeuverKind::Attack { target } = event.kind else {
            continue;
        };
        if event.cancelled {
            continue;
        }

        let Ok(weapon) = weapons.get(event.entity) else {
            continue;
        };

        completed.write(AttackCompleted {
            attacker: event.entity,
            target,
            damage: weapon.config.damage,
            weapon: weapon.config.name.clone(),
        });

        crate::logger::log(&format!(
            "💥 Attack completed: {} → {:?} ({} dmg)",
            weapon.config.name, target, weapon.config.damage
        ));
    }
}
