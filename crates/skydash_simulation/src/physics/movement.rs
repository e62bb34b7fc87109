//! Kinematic motion integrator
//!
//! Архитектура:
//! - Кто-то один за tick (locomotion ИЛИ manoeuvre) кладёт displacement в `KinematicBody`
//! - `integrate_kinematic_bodies` применяет его к Transform, резолвит пол
//! - Resulting velocity = фактическое смещение / dt (для animation/debug)
//!
//! Детерминизм: fixed timestep, никакого Rapier solver'а — только наши slab'ы.

use bevy::prelude::*;

use super::collision::GROUND_LAYER;
use super::ground::{GroundProbe, GroundSurface};

/// Kinematic body персонажа
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct KinematicBody {
    /// Смещение, накопленное за текущий tick
    pub pending_displacement: Vec3,
    /// Фактическая скорость после последней интеграции (m/s)
    pub velocity: Vec3,
}

impl KinematicBody {
    /// Добавить смещение этого tick
    pub fn push(&mut self, displacement: Vec3) {
        self.pending_displacement += displacement;
    }

    /// Горизонтальная скорость (XZ)
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }
}

/// Система интеграции displacement → Transform
///
/// Работает в FixedUpdate после locomotion и manoeuvres.
/// `Without<GroundSurface>`: GroundProbe читает Transform пола в той же системе.
pub fn integrate_kinematic_bodies(
    mut bodies: Query<(&mut Transform, &mut KinematicBody), Without<GroundSurface>>,
    ground: GroundProbe,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut body) in bodies.iter_mut() {
        let from = transform.translation;
        let to = ground.resolve_floor(from, from + body.pending_displacement, GROUND_LAYER);

        transform.translation = to;
        body.velocity = if delta > 0.0 {
            (to - from) / delta
        } else {
            Vec3::ZERO
        };
        body.pending_displacement = Vec3::ZERO;
    }
}
