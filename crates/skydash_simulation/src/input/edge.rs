//! Input edge detector (press/release pulses + double activation)
//!
//! Один `ButtonEdge` на логическую кнопку (jump, attack).
//!
//! # Pulses
//! `just_pressed` / `just_released` / `double_activated` живут ровно один tick:
//! их гасит `end_tick()` в конце fixed tick, поэтому потребитель видит каждый
//! переход один раз, сколько бы раз он ни опрашивал кнопку внутри tick.
//!
//! # Double activation
//! Первая активация открывает окно `double_click_time`. Вторая активация внутри
//! окна НЕ даёт обычный press/release — вместо этого один раз взводится
//! `double_activated`. Окно истекло без второй активации → молча закрывается.

use bevy::prelude::*;

use crate::maneuver::TIME_EPSILON;

/// Countdown с generation counter
///
/// `restart()` инвалидирует любой ещё идущий отсчёт того же таймера:
/// старый generation больше не `is_current()`.
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct ResetTimer {
    remaining: f32,
    generation: u64,
    running: bool,
}

impl ResetTimer {
    /// Запустить заново. Duration <= 0 → таймер сразу неактивен.
    pub fn restart(&mut self, duration: f32) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.remaining = duration.max(0.0);
        self.running = duration > 0.0;
        self.generation
    }

    /// Остановить без срабатывания (in-flight generation становится устаревшим)
    pub fn cancel(&mut self) {
        if self.running {
            self.generation = self.generation.wrapping_add(1);
        }
        self.running = false;
        self.remaining = 0.0;
    }

    /// Отсчитать `delta`. Возвращает generation истёкшего отсчёта.
    ///
    /// Остаток в пределах `TIME_EPSILON` считается истёкшим: 15 × 0.02
    /// закрывает окно 0.3 в тот же tick.
    pub fn tick(&mut self, delta: f32) -> Option<u64> {
        if !self.running {
            return None;
        }

        self.remaining = (self.remaining - delta).max(0.0);
        if self.remaining <= TIME_EPSILON {
            self.remaining = 0.0;
            self.running = false;
            return Some(self.generation);
        }

        None
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.running && self.generation == generation
    }
}

/// Результат `on_activate()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Обычный press (взведён `just_pressed`)
    Press,
    /// Вторая активация внутри окна (взведён `double_activated`)
    Double,
}

/// Edge state одной логической кнопки
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct ButtonEdge {
    is_down: bool,
    just_pressed: bool,
    just_released: bool,
    double_activated: bool,
    /// Release второй (double) активации тоже подавляется
    suppress_release: bool,
    double_click_time: f32,
    double_window: ResetTimer,
}

impl ButtonEdge {
    pub fn new(double_click_time: f32) -> Self {
        Self {
            double_click_time: double_click_time.max(0.0),
            ..Default::default()
        }
    }

    /// Device сообщил активацию (pointer down / key down)
    pub fn on_activate(&mut self) -> Activation {
        self.is_down = true;

        if self.double_window.is_running() {
            self.double_window.cancel();
            self.double_activated = true;
            self.suppress_release = true;
            return Activation::Double;
        }

        self.double_window.restart(self.double_click_time);
        self.just_pressed = true;
        Activation::Press
    }

    /// Device сообщил деактивацию. Возвращает true если взведён `just_released`.
    pub fn on_deactivate(&mut self) -> bool {
        self.is_down = false;

        if self.suppress_release {
            self.suppress_release = false;
            return false;
        }

        self.just_released = true;
        true
    }

    /// Отсчёт double click окна (вызывается раз в tick ДО применения событий)
    pub fn tick(&mut self, delta: f32) {
        self.double_window.tick(delta);
    }

    /// Погасить одно-tick pulses
    pub fn end_tick(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
        self.double_activated = false;
    }

    pub fn is_down(&self) -> bool {
        self.is_down
    }

    pub fn just_pressed(&self) -> bool {
        self.just_pressed
    }

    pub fn just_released(&self) -> bool {
        self.just_released
    }

    pub fn double_activated(&self) -> bool {
        self.double_activated
    }

    /// Ждём ли вторую активацию (окно открыто)
    pub fn awaiting_second_activation(&self) -> bool {
        self.double_window.is_running()
    }

    pub fn double_window_remaining(&self) -> f32 {
        self.double_window.remaining()
    }

    pub fn double_window(&self) -> &ResetTimer {
        &self.double_window
    }
}
