//! Controller tuning (design-time параметры персонажа)
//!
//! Все значения приходят извне (RON), валидируются ОДИН раз при загрузке.
//! Симуляция дальше доверяет им и не перепроверяет каждый tick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Политика расхода jump buffer
///
/// В исходных контроллерах встречаются обе, поэтому выбор вынесен в конфиг.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum JumpGate {
    /// Прыжок разрешён пока grounded ИЛИ coyote_timer > 0
    #[default]
    Coyote,
    /// Прыжок разрешён только если ground probe в этот tick вернул grounded
    StrictGround,
}

/// Параметры локомоции, прыжка и dash
///
/// Нулевое значение grace-окна (coyote, buffer, double click) отключает окно.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct ControllerTuning {
    /// Coyote time: сколько секунд после схода с земли прыжок ещё засчитывается
    pub coyote_time: f32,
    /// Jump buffer: сколько секунд помним ранний press до приземления
    pub jump_buffer_time: f32,
    /// Вертикальная скорость прыжка (m/s)
    pub jump_impulse: f32,
    /// Жёсткий потолок прыжков за одно отрывание от земли (2 = double jump)
    pub max_jumps: u32,
    /// Максимальная горизонтальная скорость при полном отклонении стика (m/s)
    pub move_speed: f32,
    /// Гравитация (m/s², отрицательная = вниз). Применяется с множителем x2
    pub gravity: f32,
    /// Terminal velocity: ниже `-max_fall_speed` вертикальная скорость не растёт
    pub max_fall_speed: f32,
    /// Time constant сглаживания поворота (critically damped)
    pub rotation_smooth_time: f32,
    /// Dash power (множитель к move_speed)
    pub dash_power: f32,
    /// Dash distance (метры)
    pub dash_distance: f32,
    /// Окно распознавания double activation (секунды)
    pub double_click_time: f32,
    /// Радиус ground probe сферы у ступней (метры)
    pub ground_probe_radius: f32,
    pub jump_gate: JumpGate,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            coyote_time: 0.1,
            jump_buffer_time: 0.15,
            jump_impulse: 15.0,
            max_jumps: 2,
            move_speed: 5.0,
            gravity: -9.81,
            max_fall_speed: 50.0,
            rotation_smooth_time: 0.05,
            dash_power: 10.0,
            dash_distance: 5.0,
            double_click_time: 0.3,
            ground_probe_radius: 0.2,
            jump_gate: JumpGate::Coyote,
        }
    }
}

impl ControllerTuning {
    /// Полная длительность dash: `distance / (power × move_speed)`
    pub fn dash_duration(&self) -> f32 {
        self.dash_distance / (self.dash_power * self.move_speed)
    }

    /// Скорость dash (m/s)
    pub fn dash_speed(&self) -> f32 {
        self.dash_power * self.move_speed
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("jump_impulse", self.jump_impulse),
            ("move_speed", self.move_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("rotation_smooth_time", self.rotation_smooth_time),
            ("dash_power", self.dash_power),
            ("dash_distance", self.dash_distance),
            ("double_click_time", self.double_click_time),
            ("ground_probe_radius", self.ground_probe_radius),
        ];

        for (field, value) in non_negative {
            // `!(v >= 0)` ловит и NaN
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "gravity",
                value: self.gravity,
            });
        }

        if self.dash_distance > 0.0 && !(self.dash_speed() > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "dash_power * move_speed",
                value: self.dash_speed(),
            });
        }

        Ok(())
    }
}
