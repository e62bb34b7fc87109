//! Weapon behaviours — как оружие превращает цель в manoeuvre
//!
//! Trait на стыке: attack resolution не знает, чем бьёт персонаж.

use bevy::prelude::*;

use crate::combat::targeting::AcquiredTarget;
use crate::config::{WeaponConfig, WeaponKind};
use crate::maneuver::{Maneuver, ManeuverKind};
use crate::movement::smoothing::direction_to_yaw;

/// План атаки: manoeuvre + мгновенный поворот к цели
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackPlan {
    pub maneuver: Maneuver,
    pub face_yaw: Option<f32>,
}

pub trait WeaponBehavior: Send + Sync + 'static {
    fn plan_attack(&self, origin: Vec3, target: &AcquiredTarget) -> AttackPlan;
}

/// Горизонтальное направление к цели (Y отбрасываем)
fn flat_offset(origin: Vec3, target: Vec3) -> Vec3 {
    let offset = target - origin;
    Vec3::new(offset.x, 0.0, offset.z)
}

/// Homing lunge: летим к точке цели со скоростью `dash_power`
///
/// Точка фиксируется в момент старта, duration = distance / dash_power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bash {
    pub dash_power: f32,
}

impl WeaponBehavior for Bash {
    fn plan_attack(&self, origin: Vec3, target: &AcquiredTarget) -> AttackPlan {
        let offset = flat_offset(origin, target.position);
        let distance = offset.length();
        let duration = if self.dash_power > 0.0 {
            distance / self.dash_power
        } else {
            0.0
        };

        AttackPlan {
            maneuver: Maneuver::new(
                ManeuverKind::Attack {
                    target: target.entity,
                },
                offset,
                self.dash_power,
                duration,
            ),
            face_yaw: (distance > 0.0).then(|| direction_to_yaw(offset)),
        }
    }
}

/// Удар на месте: стоим `swing_time`, развернувшись к цели
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slash {
    pub swing_time: f32,
}

impl WeaponBehavior for Slash {
    fn plan_attack(&self, origin: Vec3, target: &AcquiredTarget) -> AttackPlan {
        let offset = flat_offset(origin, target.position);

        AttackPlan {
            maneuver: Maneuver::new(
                ManeuverKind::Attack {
                    target: target.entity,
                },
                Vec3::ZERO,
                0.0,
                self.swing_time,
            ),
            face_yaw: (offset.length_squared() > 0.0).then(|| direction_to_yaw(offset)),
        }
    }
}

/// Экипированное оружие: числа из конфига + поведение
#[derive(Component)]
pub struct EquippedWeapon {
    pub config: WeaponConfig,
    pub behavior: Box<dyn WeaponBehavior>,
}

impl EquippedWeapon {
    pub fn from_config(config: WeaponConfig) -> Self {
        let behavior: Box<dyn WeaponBehavior> = match config.kind {
            WeaponKind::Bash { dash_power } => Box::new(Bash { dash_power }),
            WeaponKind::Slash { swing_time } => Box::new(Slash { swing_time }),
        };

        Self { config, behavior }
    }

    pub fn target_count(&self) -> usize {
        self.config.target_count as usize
    }
}

impl std::fmt::Debug for EquippedWeapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EquippedWeapon")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
