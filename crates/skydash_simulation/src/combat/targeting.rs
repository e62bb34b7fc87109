//! Target acquisition: N ближайших врагов в радиусе
//!
//! Чистая функция от состояния мира: нет кэша, нет side effects.
//! Вызывается и attack resolution, и UI indicators в одном tick.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionGroups, Group};

use crate::physics::{enemy_groups, matches_mask, ENEMY_LAYER};

/// Маркер врага (для spawn / debug)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Enemy;

/// Сфера, по которой врага можно выбрать целью
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Hurtbox {
    pub radius: f32,
}

impl Default for Hurtbox {
    fn default() -> Self {
        Self { radius: 0.5 }
    }
}

/// Одна цель из snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquiredTarget {
    pub entity: Entity,
    /// Евклидово расстояние origin → центр коллайдера
    pub distance: f32,
    pub position: Vec3,
}

/// Ranked query: коллайдеры `mask`, чья сфера пересекает сферу `range`
///
/// Сортировка по возрастанию distance, равные — в порядке поступления (stable sort).
/// Длина = min(max_count, число валидных коллайдеров).
pub fn acquire_targets<'a>(
    origin: Vec3,
    range: f32,
    mask: Group,
    max_count: usize,
    candidates: impl IntoIterator<Item = (Entity, Vec3, &'a CollisionGroups, &'a Hurtbox)>,
) -> Vec<AcquiredTarget> {
    if max_count == 0 {
        return Vec::new();
    }

    let mut targets: Vec<AcquiredTarget> = candidates
        .into_iter()
        .filter(|(_, _, groups, _)| matches_mask(groups, mask))
        .filter_map(|(entity, position, _, hurtbox)| {
            let distance = origin.distance(position);
            (distance - hurtbox.radius <= range).then_some(AcquiredTarget {
                entity,
                distance,
                position,
            })
        })
        .collect();

    targets.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    targets.truncate(max_count);
    targets
}

/// SystemParam: все коллайдеры с Hurtbox
#[derive(SystemParam)]
pub struct EnemyColliders<'w, 's> {
    colliders: Query<
        'w,
        's,
        (
            Entity,
            &'static Transform,
            &'static CollisionGroups,
            &'static Hurtbox,
        ),
    >,
}

impl EnemyColliders<'_, '_> {
    /// Враги (ENEMY_LAYER) в радиусе `range` от `origin`
    pub fn acquire(&self, origin: Vec3, range: f32, max_count: usize) -> Vec<AcquiredTarget> {
        acquire_targets(
            origin,
            range,
            ENEMY_LAYER,
            max_count,
            self.colliders
                .iter()
                .map(|(entity, transform, groups, hurtbox)| {
                    (entity, transform.translation, groups, hurtbox)
                }),
        )
    }
}

pub fn enemy_bundle(position: Vec3, hurtbox_radius: f32) -> impl Bundle {
    (
        Enemy,
        Transform::from_translation(position),
        Hurtbox {
            radius: hurtbox_radius,
        },
        enemy_groups(),
    )
}

pub fn spawn_enemy(commands: &mut Commands, position: Vec3, hurtbox_radius: f32) -> Entity {
    commands.spawn(enemy_bundle(position, hurtbox_radius)).id()
}
