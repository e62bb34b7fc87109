//! Movement компоненты: kinematic state, movement lock, animation flags

use bevy::prelude::*;

use crate::config::ControllerTuning;
use crate::movement::smoothing::yaw_to_direction;

/// Kinematic state персонажа (владелец — locomotion state machine)
///
/// Обновляется ровно один раз за fixed tick в `update_locomotion`.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterKinematics {
    /// Вертикальная скорость (m/s), > 0 = вверх
    pub vertical_velocity: f32,
    /// Результат ground check прошлого tick (после фильтра "на подъёме не приземляемся")
    pub grounded_last_tick: bool,
    /// Остаток coyote time (секунды, >= 0)
    pub coyote_timer: f32,
    /// Остаток jump buffer (секунды, >= 0)
    pub jump_buffer_timer: f32,
    /// Прыжков с последнего касания земли (0..=max_jumps)
    pub jump_count: u32,
    pub can_dash: bool,
    /// One-shot: coyote истёк в воздухе (сход с уступа без прыжка съедает первый прыжок)
    pub started_falling: bool,
    /// Текущий yaw (градусы, 0 = +Z, 90 = +X)
    pub facing_yaw: f32,
    /// Скорость сглаживания поворота (SmoothDamp state)
    pub rotation_velocity: f32,
    /// Yaw, к которому поворачиваемся / в котором идём
    pub target_yaw: f32,
    /// Целевая горизонтальная скорость этого tick (m/s)
    pub speed: f32,
}

impl Default for CharacterKinematics {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            grounded_last_tick: false,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            jump_count: 0,
            can_dash: true,
            started_falling: false,
            facing_yaw: 0.0,
            rotation_velocity: 0.0,
            target_yaw: 0.0,
            speed: 0.0,
        }
    }
}

impl CharacterKinematics {
    pub fn new(tuning: &ControllerTuning) -> Self {
        Self {
            coyote_timer: tuning.coyote_time,
            ..Default::default()
        }
    }

    /// Unit vector взгляда (горизонтальный)
    pub fn facing_direction(&self) -> Vec3 {
        yaw_to_direction(self.facing_yaw)
    }

    /// Мгновенный поворот (без сглаживания)
    pub fn face_immediately(&mut self, yaw: f32) {
        self.facing_yaw = yaw.rem_euclid(360.0);
        self.target_yaw = self.facing_yaw;
        self.rotation_velocity = 0.0;
    }
}

/// Результат grounding oracle в текущем tick (сырой, без фильтров)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct GroundContact {
    pub grounded: bool,
}

/// Кто держит movement lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum LockOwner {
    Dash,
    Attack,
}

/// Mutual exclusion: кто пишет translation персонажа
///
/// Свободен → translation пишет locomotion. Занят → только владелец (manoeuvre).
/// Захват только через `try_acquire` (check-then-set в одном вызове).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct MovementLock {
    owner: Option<LockOwner>,
}

impl MovementLock {
    pub fn is_locked(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owner(&self) -> Option<LockOwner> {
        self.owner
    }

    /// Захватить lock. Занят → false, состояние не меняется.
    pub fn try_acquire(&mut self, owner: LockOwner) -> bool {
        if self.owner.is_some() {
            return false;
        }

        self.owner = Some(owner);
        true
    }

    /// Отпустить lock. Отпускать чужой lock — ошибка программиста.
    pub fn release(&mut self, owner: LockOwner) {
        debug_assert_eq!(
            self.owner,
            Some(owner),
            "MovementLock released by {:?} while held by {:?}",
            owner,
            self.owner
        );

        if self.owner == Some(owner) {
            self.owner = None;
        } else {
            crate::logger::log_error(&format!(
                "❌ MovementLock: release by {:?} while held by {:?}",
                owner, self.owner
            ));
        }
    }
}

/// Флаги для animation blending (presentation layer читает, симуляция пишет)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimationState {
    pub grounded: bool,
    pub jumping: bool,
    pub free_falling: bool,
    pub speed: f32,
}
