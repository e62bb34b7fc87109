//! Player domain — player-controlled персонаж
//!
//! Содержит:
//! - Player marker
//! - player_bundle / spawn_player (полный набор компонентов контроллера)
//! - привязка BoundPlayer при spawn / despawn

use bevy::prelude::*;

use crate::combat::EquippedWeapon;
use crate::config::{ControllerTuning, WeaponConfig};
use crate::input::PlayerInput;
use crate::maneuver::ActiveManeuver;
use crate::movement::{AnimationState, CharacterKinematics, GroundContact, MovementLock};
use crate::physics::{player_groups, KinematicBody};
use crate::ui::BoundPlayer;

/// Marker component для player-controlled entity
///
/// Input systems читают только `PlayerInput`, так что marker нужен для
/// привязки UI и для host-кода (камера, HUD).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Все компоненты контроллера. Ступни персонажа — в `position`.
pub fn player_bundle(position: Vec3, tuning: &ControllerTuning, weapon: &WeaponConfig) -> impl Bundle {
    (
        Player,
        Transform::from_translation(position),
        KinematicBody::default(),
        CharacterKinematics::new(tuning),
        GroundContact::default(),
        MovementLock::default(),
        ActiveManeuver::default(),
        PlayerInput::new(tuning.double_click_time),
        EquippedWeapon::from_config(weapon.clone()),
        AnimationState::default(),
        player_groups(),
    )
}

pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    tuning: &ControllerTuning,
    weapon: &WeaponConfig,
) -> Entity {
    let entity = commands.spawn(player_bundle(position, tuning, weapon)).id();

    crate::logger::log_info(&format!(
        "🧍 Player spawned at {:?} (weapon: {}, entity: {:?})",
        position, weapon.name, entity
    ));

    entity
}

/// System: новый Player → BoundPlayer, despawn → unbind
pub fn bind_spawned_player(
    spawned: Query<Entity, Added<Player>>,
    mut removed: RemovedComponents<Player>,
    mut bound: ResMut<BoundPlayer>,
) {
    for entity in removed.read() {
        if bound.get() == Some(entity) {
            bound.unbind();
            crate::logger::log(&format!("🔗 BoundPlayer released ({:?})", entity));
        }
    }

    for entity in spawned.iter() {
        if bound.is_bound() && bound.get() != Some(entity) {
            crate::logger::log_warning(&format!(
                "⚠️ Second Player {:?} ignored (bound: {:?})",
                entity,
                bound.get()
            ));
            continue;
        }

        bound.bind(entity);
        crate::logger::log(&format!("🔗 BoundPlayer → {:?}", entity));
    }
}

/// Player Plugin: привязка BoundPlayer (Update, до UI)
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoundPlayer>().add_systems(
            Update,
            bind_spawned_player.before(crate::ui::update_target_indicators),
        );
    }
}
