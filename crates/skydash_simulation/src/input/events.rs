//! Input events
//!
//! Host (UI buttons, keyboard, virtual joystick) пишет `ButtonEvent` / `MoveStick`,
//! симуляция применяет их в начале ближайшего fixed tick в порядке прихода.

use bevy::prelude::*;

use super::InputButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEventKind {
    Pressed,
    Released,
}

/// Сырое событие кнопки от device
#[derive(Event, Debug, Clone, Copy)]
pub struct ButtonEvent {
    pub entity: Entity,
    pub button: InputButton,
    pub kind: ButtonEventKind,
}

impl ButtonEvent {
    pub fn pressed(entity: Entity, button: InputButton) -> Self {
        Self {
            entity,
            button,
            kind: ButtonEventKind::Pressed,
        }
    }

    pub fn released(entity: Entity, button: InputButton) -> Self {
        Self {
            entity,
            button,
            kind: ButtonEventKind::Released,
        }
    }
}

/// Новое положение стика (длина > 1 обрезается до 1)
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveStick {
    pub entity: Entity,
    pub axis: Vec2,
}

/// Event: распознана double activation кнопки (ровно один раз на пару нажатий)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleActivation {
    pub entity: Entity,
    pub button: InputButton,
}
