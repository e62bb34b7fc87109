//! UI domain — интерфейс к presentation layer
//!
//! Содержит:
//! - CameraRig (facing reference + world → screen)
//! - TargetIndicatorPool (сверка маркеров с целями)
//! - BoundPlayer (явная привязка игрока вместо singleton lookup)

pub mod indicators;
pub mod projection;

pub use indicators::*;
pub use projection::*;

use bevy::prelude::*;

/// UI Plugin: индикаторы целей в presentation tick (Update)
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .init_resource::<TargetIndicatorPool>()
            .init_resource::<BoundPlayer>()
            .add_systems(Update, update_target_indicators);
    }
}
