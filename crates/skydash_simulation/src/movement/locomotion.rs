//! Locomotion & jump state machine — один fixed tick
//!
//! Порядок внутри tick фиксирован:
//! 1. ground state (coyote, jump_count, gravity)
//! 2. jump buffer → jump impulse
//! 3. jump-cut
//! 4. horizontal movement + facing
//! 5. displacement для integrator (только если lock свободен)
//!
//! Чистая логика над `CharacterKinematics`, без ECS — ECS обёртка в `systems.rs`.

use bevy::prelude::*;

use super::components::CharacterKinematics;
use super::smoothing::{smooth_damp_angle, stick_yaw, yaw_to_direction};
use crate::config::{ControllerTuning, JumpGate};

/// Вход одного tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionInput {
    /// Ответ Grounding Oracle в этом tick
    pub grounded: bool,
    pub stick: Vec2,
    pub jump_pressed: bool,
    pub jump_released: bool,
    /// Yaw камеры (градусы) — facing reference для stick
    pub camera_yaw: f32,
    /// MovementLock занят (dash / attack)
    pub locked: bool,
}

/// Что произошло за tick (для логов / animation / тестов)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionStep {
    /// Смещение для integrator. None — translation владеет manoeuvre.
    pub displacement: Option<Vec3>,
    pub landed: bool,
    pub left_ground: bool,
    pub started_falling: bool,
    pub jumped: bool,
    pub jump_cut: bool,
}

impl CharacterKinematics {
    /// Один fixed tick locomotion
    pub fn tick(&mut self, input: &LocomotionInput, tuning: &ControllerTuning, delta: f32) -> LocomotionStep {
        let mut step = LocomotionStep::default();

        let grounded = self.update_ground_state(input.grounded, tuning, delta, &mut step);
        self.update_jump(input, grounded, tuning, delta, &mut step);
        self.apply_jump_cut(input, &mut step);

        let horizontal = self.update_horizontal(input, tuning, delta);
        if !input.locked {
            step.displacement = Some(horizontal + Vec3::Y * self.vertical_velocity * delta);
        }

        step
    }

    /// Шаги 1–3: ground / coyote / gravity. Возвращает эффективный grounded.
    fn update_ground_state(
        &mut self,
        probe_grounded: bool,
        tuning: &ControllerTuning,
        delta: f32,
        step: &mut LocomotionStep,
    ) -> bool {
        // На подъёме не приземляемся: probe ещё касается пола в первые тики прыжка
        let grounded = probe_grounded && self.vertical_velocity <= 0.0;

        if grounded {
            step.landed = !self.grounded_last_tick;

            self.coyote_timer = tuning.coyote_time;
            self.jump_count = 0;
            self.started_falling = false;
            self.vertical_velocity = self.vertical_velocity.max(0.0);
            self.can_dash = true;
        } else {
            step.left_ground = self.grounded_last_tick;

            self.coyote_timer = (self.coyote_timer - delta).max(0.0);
            if self.coyote_timer <= 0.0 && !self.started_falling {
                self.started_falling = true;
                step.started_falling = true;

                // Сход с уступа без прыжка съедает первый прыжок
                if self.jump_count == 0 {
                    self.jump_count = 1;
                }
            }

            // x2 gravity: snappier fall
            self.vertical_velocity += tuning.gravity * delta * 2.0;
            self.vertical_velocity = self.vertical_velocity.max(-tuning.max_fall_speed);
        }

        self.grounded_last_tick = grounded;
        grounded
    }

    /// Шаг 4: jump buffer и его расход
    fn update_jump(
        &mut self,
        input: &LocomotionInput,
        grounded: bool,
        tuning: &ControllerTuning,
        delta: f32,
        step: &mut LocomotionStep,
    ) {
        if input.jump_pressed {
            self.jump_buffer_timer = tuning.jump_buffer_time;
        } else {
            self.jump_buffer_timer = (self.jump_buffer_timer - delta).max(0.0);
        }

        // Нажатие этого tick честно даже при jump_buffer_time = 0
        let wants_jump = input.jump_pressed || self.jump_buffer_timer > 0.0;
        // Gate только для первого прыжка; air jump идёт по одному buffer
        let gate_open = self.jump_count > 0
            || match tuning.jump_gate {
                JumpGate::Coyote => grounded || self.coyote_timer > 0.0,
                JumpGate::StrictGround => grounded,
            };

        if wants_jump && gate_open && !input.locked && self.jump_count < tuning.max_jumps {
            self.jump_buffer_timer = 0.0;
            self.vertical_velocity = tuning.jump_impulse;
            self.jump_count += 1;
            step.jumped = true;
        }
    }

    /// Шаг 5: short hop
    fn apply_jump_cut(&mut self, input: &LocomotionInput, step: &mut LocomotionStep) {
        if input.jump_released && self.vertical_velocity > 0.0 {
            self.vertical_velocity *= 0.5;
            self.coyote_timer = 0.0;
            step.jump_cut = true;
        }
    }

    /// Шаг 6: горизонтальная скорость + сглаженный поворот
    fn update_horizontal(&mut self, input: &LocomotionInput, tuning: &ControllerTuning, delta: f32) -> Vec3 {
        if input.locked {
            self.speed = 0.0;
            return Vec3::ZERO;
        }

        let magnitude = input.stick.length().min(1.0);
        self.speed = magnitude * tuning.move_speed;

        if magnitude > 0.0 {
            self.target_yaw = stick_yaw(input.stick, input.camera_yaw);
            self.facing_yaw = smooth_damp_angle(
                self.facing_yaw,
                self.target_yaw,
                &mut self.rotation_velocity,
                tuning.rotation_smooth_time,
                delta,
            )
            .rem_euclid(360.0);
        }

        yaw_to_direction(self.target_yaw) * self.speed * delta
    }
}
