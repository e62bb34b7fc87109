//! Input components: edge detectors игрока + привязки double activation

use bevy::prelude::*;

use super::ButtonEdge;

/// Логическая кнопка (UI button / key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum InputButton {
    Jump,
    Attack,
}

/// Состояние input одного player-controlled персонажа
///
/// Заполняется из `ButtonEvent` / `MoveStick` в начале fixed tick,
/// pulses гасятся в конце того же tick.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerInput {
    /// Analog stick / virtual joystick (x = вправо, y = вперёд), длина 0..=1
    pub stick: Vec2,
    pub jump: ButtonEdge,
    pub attack: ButtonEdge,
}

impl PlayerInput {
    pub fn new(double_click_time: f32) -> Self {
        Self {
            stick: Vec2::ZERO,
            jump: ButtonEdge::new(double_click_time),
            attack: ButtonEdge::new(double_click_time),
        }
    }

    pub fn button(&self, button: InputButton) -> &ButtonEdge {
        match button {
            InputButton::Jump => &self.jump,
            InputButton::Attack => &self.attack,
        }
    }

    pub fn button_mut(&mut self, button: InputButton) -> &mut ButtonEdge {
        match button {
            InputButton::Jump => &mut self.jump,
            InputButton::Attack => &mut self.attack,
        }
    }

    pub fn tick(&mut self, delta: f32) {
        self.jump.tick(delta);
        self.attack.tick(delta);
    }

    pub fn end_tick(&mut self) {
        self.jump.end_tick();
        self.attack.end_tick();
    }
}

/// Что делает double activation кнопки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum DoubleActivationAction {
    #[default]
    Ignore,
    Dash,
}

/// Привязки double activation → действие
///
/// По умолчанию double tap прыжка = dash.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct InputBindings {
    pub jump_double: DoubleActivationAction,
    pub attack_double: DoubleActivationAction,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            jump_double: DoubleActivationAction::Dash,
            attack_double: DoubleActivationAction::Ignore,
        }
    }
}

impl InputBindings {
    pub fn action_for(&self, button: InputButton) -> DoubleActivationAction {
        match button {
            InputButton::Jump => self.jump_double,
            InputButton::Attack => self.attack_double,
        }
    }
}
