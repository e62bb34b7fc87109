//! SKYDASH Simulation Core
//!
//! Player controller на Bevy 0.16 (headless ECS):
//! - Input edge detection (just pressed / released / double activation)
//! - Locomotion & jump state machine (coyote time, jump buffer, double jump)
//! - Dash и weapon attacks как time-boxed manoeuvres под MovementLock
//! - Ranked target acquisition для атак и UI индикаторов
//!
//! Всё, что трогает состояние персонажа, крутится в FixedUpdate в порядке
//! `SimulationSet`. Presentation (индикаторы) — в Update.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod combat;
pub mod config;
pub mod input;
pub mod logger;
pub mod maneuver;
pub mod movement;
pub mod physics;
pub mod player;
pub mod ui;

// Re-export основных типов
pub use combat::{
    acquire_targets, spawn_enemy, AcquiredTarget, AttackCompleted, CombatPlugin, EnemyColliders,
    EquippedWeapon, Hurtbox, WeaponBehavior,
};
pub use config::{load_config, ConfigError, ControllerTuning, JumpGate, SkydashConfig, WeaponConfig, WeaponKind};
pub use input::{
    ButtonEvent, DoubleActivation, DoubleActivationAction, InputBindings, InputButton, InputPlugin, MoveStick,
    PlayerInput,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use maneuver::{ActiveManeuver, CancelManeuver, DashIntent, Maneuver, ManeuverFinished, ManeuverKind, ManeuverPlugin};
pub use movement::{AnimationState, CharacterKinematics, GroundContact, LockOwner, MovementLock, MovementPlugin};
pub use physics::{spawn_ground_slab, GroundSurface, KinematicBody, PhysicsPlugin};
pub use player::{player_bundle, spawn_player, Player, PlayerPlugin};
pub use ui::{BoundPlayer, CameraRig, TargetIndicatorPool, UiPlugin};

/// Fixed tick симуляции (50Hz)
pub const FIXED_TIMESTEP: Duration = Duration::from_millis(20);

/// Порядок фаз fixed tick
///
/// Ground → ManeuverStart → Locomotion: lock, захваченный manoeuvre в этом
/// tick, уже блокирует прыжок и ходьбу. ManeuverAdvance → Integrate: ровно
/// один writer translation за tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Ground,
    ManeuverStart,
    Locomotion,
    ManeuverAdvance,
    Integrate,
    Presentation,
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Input,
                SimulationSet::Ground,
                SimulationSet::ManeuverStart,
                SimulationSet::Locomotion,
                SimulationSet::ManeuverAdvance,
                SimulationSet::Integrate,
                SimulationSet::Presentation,
                SimulationSet::Cleanup,
            )
                .chain(),
        );

        app
            // Fixed timestep 50Hz (0.02s — удобно считать coyote / dash окна)
            .insert_resource(Time::<Fixed>::from_duration(FIXED_TIMESTEP))
            .init_resource::<ControllerTuning>()
            // Подсистемы
            .add_plugins((
                InputPlugin,
                PhysicsPlugin,
                MovementPlugin,
                ManeuverPlugin,
                CombatPlugin,
                UiPlugin,
                PlayerPlugin,
            ));

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Без `SimulationPlugin`: тесты и binary добавляют его сами.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(FIXED_TIMESTEP));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
