//! Maneuver value object + per-character slot
//!
//! Maneuver (dash / weapon attack) — time-boxed линейное движение.
//! Пока активен — единственный writer translation персонажа (держит MovementLock).

use bevy::prelude::*;

use crate::config::ControllerTuning;
use crate::movement::LockOwner;

/// Допуск накопления float: 5 × 0.02 должно закрыть duration 0.1
pub const TIME_EPSILON: f32 = 1e-4;

/// Вид manoeuvre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum ManeuverKind {
    Dash,
    Attack { target: Entity },
}

impl ManeuverKind {
    /// Кто держит MovementLock, пока manoeuvre активен
    pub fn lock_owner(&self) -> LockOwner {
        match self {
            ManeuverKind::Dash => LockOwner::Dash,
            ManeuverKind::Attack { .. } => LockOwner::Attack,
        }
    }
}

/// Результат одного advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManeuverStep {
    Running,
    Finished,
}

/// Resumable manoeuvre: двигается раз в fixed tick, пока не истечёт duration
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Maneuver {
    pub kind: ManeuverKind,
    /// Unit vector (или ZERO для manoeuvre на месте)
    pub direction: Vec3,
    /// m/s вдоль direction
    pub speed: f32,
    pub total_duration: f32,
    pub elapsed: f32,
}

impl Maneuver {
    pub fn new(kind: ManeuverKind, direction: Vec3, speed: f32, total_duration: f32) -> Self {
        Self {
            kind,
            direction: direction.normalize_or_zero(),
            speed,
            total_duration: total_duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Dash вдоль `direction`: duration = distance / (power × move_speed)
    ///
    /// None — dash выключен конфигом (нулевая дистанция или скорость).
    pub fn dash(direction: Vec3, tuning: &ControllerTuning) -> Option<Self> {
        let speed = tuning.dash_speed();
        if tuning.dash_distance <= 0.0 || speed <= 0.0 {
            return None;
        }

        Some(Self::new(ManeuverKind::Dash, direction, speed, tuning.dash_duration()))
    }

    /// Один tick: elapsed += delta, смещение = direction × speed × delta
    pub fn advance(&mut self, delta: f32) -> (Vec3, ManeuverStep) {
        self.elapsed += delta;
        let displacement = self.direction * self.speed * delta;

        let step = if self.is_complete() {
            ManeuverStep::Finished
        } else {
            ManeuverStep::Running
        };

        (displacement, step)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed + TIME_EPSILON >= self.total_duration
    }

    pub fn remaining(&self) -> f32 {
        (self.total_duration - self.elapsed).max(0.0)
    }
}

/// Слот активного manoeuvre персонажа (не больше одного)
///
/// `is_dashing` / `is_attacking` — производные, отдельных флагов нет.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActiveManeuver(pub Option<Maneuver>);

impl ActiveManeuver {
    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.0, Some(Maneuver { kind: ManeuverKind::Dash, .. }))
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.0, Some(Maneuver { kind: ManeuverKind::Attack { .. }, .. }))
    }

    pub fn get(&self) -> Option<&Maneuver> {
        self.0.as_ref()
    }
}
