//! Target indicators: пул on-screen маркеров для текущих целей игрока
//!
//! Каждый presentation tick пул сверяется с упорядоченным списком screen
//! позиций: лишние маркеры освобождаются с хвоста, недостающие создаются.
//! Сами виджеты рисует host, он читает `markers()`.

use bevy::prelude::*;

use crate::combat::{EnemyColliders, EquippedWeapon};
use crate::ui::CameraRig;

/// Игрок, для которого рисуются индикаторы
///
/// Явный Option вместо глобального "current instance".
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundPlayer(Option<Entity>);

impl BoundPlayer {
    pub fn bind(&mut self, entity: Entity) {
        debug_assert!(
            self.0.is_none() || self.0 == Some(entity),
            "BoundPlayer already bound to {:?}",
            self.0
        );
        self.0 = Some(entity);
    }

    pub fn unbind(&mut self) {
        self.0 = None;
    }

    pub fn is_bound(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<Entity> {
        self.0
    }
}

/// Один on-screen маркер
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorMarker {
    /// Стабильный id инстанса (host мапит его на виджет)
    pub id: u64,
    pub screen_position: Vec2,
}

/// Итог одной сверки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorDiff {
    pub created: usize,
    pub released: usize,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TargetIndicatorPool {
    markers: Vec<IndicatorMarker>,
    /// Смещение маркера относительно цели на экране (пиксели)
    pub offset: Vec2,
    next_id: u64,
}

impl TargetIndicatorPool {
    pub fn with_offset(offset: Vec2) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    pub fn markers(&self) -> &[IndicatorMarker] {
        &self.markers
    }

    /// Привести пул к `positions` (порядок = порядок целей)
    pub fn reconcile(&mut self, positions: &[Vec2]) -> IndicatorDiff {
        let mut diff = IndicatorDiff::default();

        if self.markers.len() > positions.len() {
            diff.released = self.markers.len() - positions.len();
            self.markers.truncate(positions.len());
        }

        while self.markers.len() < positions.len() {
            self.markers.push(IndicatorMarker {
                id: self.next_id,
                screen_position: Vec2::ZERO,
            });
            self.next_id += 1;
            diff.created += 1;
        }

        for (marker, position) in self.markers.iter_mut().zip(positions) {
            marker.screen_position = *position + self.offset;
        }

        diff
    }
}

/// System: цели игрока → screen positions → пул (Update)
///
/// Игрок отвязан → пул сверяется с пустым списком и гасит старые маркеры.
pub fn update_target_indicators(
    bound: Res<BoundPlayer>,
    players: Query<(&Transform, &EquippedWeapon)>,
    enemies: EnemyColliders,
    camera: Res<CameraRig>,
    mut pool: ResMut<TargetIndicatorPool>,
) {
    let positions: Vec<Vec2> = match bound.get().map(|player| players.get(player)) {
        // До первой привязки пул пуст, сверять нечего
        None if pool.markers().is_empty() => return,
        Some(Ok((transform, weapon))) if weapon.target_count() > 0 => enemies
            .acquire(
                transform.translation,
                weapon.config.attack_range,
                weapon.target_count(),
            )
            .iter()
            .filter_map(|target| camera.world_to_screen(target.position))
            .collect(),
        _ => Vec::new(),
    };

    let diff = pool.reconcile(&positions);
    if diff != IndicatorDiff::default() {
        crate::logger::log(&format!(
            "🎯 Indicators: {} active (+{} / -{})",
            pool.markers().len(),
            diff.created,
            diff.released
        ));
    }
}
