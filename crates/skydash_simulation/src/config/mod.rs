//! Config domain — design-time tunables
//!
//! Содержит:
//! - ControllerTuning (coyote, buffer, jump, dash, double click)
//! - JumpGate (политика расхода jump buffer)
//! - WeaponConfig / WeaponKind (параметры оружия)
//! - RON loader + ConfigError

pub mod loader;
pub mod tuning;
pub mod weapon;

#[cfg(test)]
mod loader_tests;

pub use loader::*;
pub use tuning::*;
pub use weapon::*;
