//! Grounding oracle: sphere overlap у ступней против ground коллайдеров
//!
//! Чистый запрос без кэша: одинаковый мир → одинаковый ответ, сколько бы раз
//! за tick его ни вызывали.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionGroups, Group};

use super::collision::{ground_groups, matches_mask};

/// Ground collider: axis-aligned slab с центром в `Transform.translation`
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct GroundSurface {
    pub half_extents: Vec3,
}

impl GroundSurface {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// Высота верхней грани
    pub fn top(&self, center: Vec3) -> f32 {
        center.y + self.half_extents.y
    }

    /// Точка в горизонтальной проекции slab
    pub fn contains_xz(&self, center: Vec3, point: Vec3) -> bool {
        (point.x - center.x).abs() <= self.half_extents.x
            && (point.z - center.z).abs() <= self.half_extents.z
    }
}

/// Sphere vs AABB overlap (closest point test)
pub fn sphere_overlaps_box(sphere: Vec3, radius: f32, box_center: Vec3, half_extents: Vec3) -> bool {
    let closest = sphere.clamp(box_center - half_extents, box_center + half_extents);
    closest.distance_squared(sphere) <= radius * radius
}

/// Grounded ли персонаж со ступнями в `position`
///
/// `surfaces` — (center, surface, groups) всех ground коллайдеров мира.
pub fn is_grounded<'a>(
    position: Vec3,
    radius: f32,
    mask: Group,
    surfaces: impl IntoIterator<Item = (Vec3, &'a GroundSurface, &'a CollisionGroups)>,
) -> bool {
    surfaces.into_iter().any(|(center, surface, groups)| {
        matches_mask(groups, mask)
            && sphere_overlaps_box(position, radius, center, surface.half_extents)
    })
}

/// Допуск: насколько ступни могут быть ниже верхней грани и всё ещё
/// считаться "сверху" при разрешении падения
pub const FLOOR_SKIN: f32 = 1e-3;

/// Разрешение движения `from → to` против ground slabs
///
/// При спуске сквозь верхнюю грань ступни ставятся на неё (берём самую высокую).
/// Стены не резолвим: slab'ы — только пол.
pub fn resolve_floor<'a>(
    from: Vec3,
    to: Vec3,
    mask: Group,
    surfaces: impl IntoIterator<Item = (Vec3, &'a GroundSurface, &'a CollisionGroups)>,
) -> Vec3 {
    if to.y >= from.y {
        return to;
    }

    let mut resolved = to;
    for (center, surface, groups) in surfaces {
        if !matches_mask(groups, mask) || !surface.contains_xz(center, to) {
            continue;
        }

        let top = surface.top(center);
        if from.y >= top - FLOOR_SKIN && to.y < top && resolved.y < top {
            resolved.y = top;
        }
    }

    resolved
}

/// SystemParam: ground коллайдеры мира
#[derive(SystemParam)]
pub struct GroundProbe<'w, 's> {
    surfaces: Query<'w, 's, (&'static Transform, &'static GroundSurface, &'static CollisionGroups)>,
}

impl GroundProbe<'_, '_> {
    pub fn is_grounded(&self, position: Vec3, radius: f32, mask: Group) -> bool {
        is_grounded(
            position,
            radius,
            mask,
            self.surfaces
                .iter()
                .map(|(transform, surface, groups)| (transform.translation, surface, groups)),
        )
    }

    pub fn resolve_floor(&self, from: Vec3, to: Vec3, mask: Group) -> Vec3 {
        resolve_floor(
            from,
            to,
            mask,
            self.surfaces
                .iter()
                .map(|(transform, surface, groups)| (transform.translation, surface, groups)),
        )
    }
}

/// Bundle ground slab'а (верхняя грань на `center.y + half_extents.y`)
pub fn ground_slab_bundle(center: Vec3, half_extents: Vec3) -> impl Bundle {
    (
        Transform::from_translation(center),
        GroundSurface::new(half_extents),
        ground_groups(),
    )
}

pub fn spawn_ground_slab(commands: &mut Commands, center: Vec3, half_extents: Vec3) -> Entity {
    commands.spawn(ground_slab_bundle(center, half_extents)).id()
}
