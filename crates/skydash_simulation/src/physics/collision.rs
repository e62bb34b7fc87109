//! Collision classification (layers / masks)
//!
//! ## Архитектура:
//! - **Memberships:** на каком слое объект находится
//! - **Filters:** с какими слоями объект взаимодействует
//!
//! Ground probe и target acquisition фильтруют коллайдеры по membership
//! через `matches_mask()`.

use bevy_rapier3d::prelude::{CollisionGroups, Group};

/// Layer 1: Player (character controller)
pub const PLAYER_LAYER: Group = Group::GROUP_1;

/// Layer 2: Ground (полы, платформы — то, на чём можно стоять)
pub const GROUND_LAYER: Group = Group::GROUP_2;

/// Layer 3: Enemies (цели для target acquisition)
pub const ENEMY_LAYER: Group = Group::GROUP_3;

/// Mask: Player взаимодействует с Ground + Enemies
pub const PLAYER_FILTER: Group = GROUND_LAYER.union(ENEMY_LAYER);

pub fn player_groups() -> CollisionGroups {
    CollisionGroups::new(PLAYER_LAYER, PLAYER_FILTER)
}

pub fn ground_groups() -> CollisionGroups {
    CollisionGroups::new(GROUND_LAYER, PLAYER_LAYER.union(ENEMY_LAYER))
}

pub fn enemy_groups() -> CollisionGroups {
    CollisionGroups::new(ENEMY_LAYER, PLAYER_LAYER.union(GROUND_LAYER))
}

/// Коллайдер попадает под маску запроса
pub fn matches_mask(groups: &CollisionGroups, mask: Group) -> bool {
    groups.memberships.intersects(mask)
}
