//! Weapon data (числовые параметры оружия)
//!
//! Поведение (какой manoeuvre запускает атака) живёт в `combat::weapon`,
//! здесь только то, что приходит из ассетов.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Тип поведения оружия
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Рывок к ближайшей цели со скоростью `dash_power` m/s
    Bash { dash_power: f32 },
    /// Удар на месте: поворот к цели + lock на `swing_time` секунд
    Slash { swing_time: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub name: String,
    /// Радиус target acquisition (метры)
    pub attack_range: f32,
    /// Сколько ближайших целей выбирать (0 = оружие никогда не находит цель)
    pub target_count: u32,
    pub damage: u32,
    pub kind: WeaponKind,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            name: "Bash".to_string(),
            attack_range: 10.0,
            target_count: 3,
            damage: 10,
            kind: WeaponKind::Bash { dash_power: 20.0 },
        }
    }
}

impl WeaponConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.attack_range >= 0.0) {
            return Err(ConfigError::Negative {
                field: "attack_range",
                value: self.attack_range,
            });
        }

        match self.kind {
            WeaponKind::Bash { dash_power } if !(dash_power > 0.0) => {
                Err(ConfigError::NonPositive {
                    field: "kind.dash_power",
                    value: dash_power,
                })
            }
            WeaponKind::Slash { swing_time } if !(swing_time > 0.0) => {
                Err(ConfigError::NonPositive {
                    field: "kind.swing_time",
                    value: swing_time,
                })
            }
            _ => Ok(()),
        }
    }
}
