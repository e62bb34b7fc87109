//! Camera rig: facing reference для stick + world → screen projection
//!
//! Управление камерой вне симуляции: host пишет yaw/position, мы только читаем.
//! Left-handed Y-up (как у движка-хоста): yaw 0° смотрит в +Z, +X справа.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct CameraRig {
    /// Yaw камеры (градусы) — поворачивает stick input
    pub yaw_degrees: f32,
    /// Pitch (градусы), < 0 = смотрит вниз
    pub pitch_degrees: f32,
    pub position: Vec3,
    /// Vertical field of view (градусы)
    pub fov_y_degrees: f32,
    /// Размер экрана (пиксели)
    pub viewport: Vec2,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            yaw_degrees: 0.0,
            pitch_degrees: -30.0,
            position: Vec3::new(0.0, 8.0, -10.0),
            fov_y_degrees: 60.0,
            viewport: Vec2::new(1920.0, 1080.0),
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraRig {
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        let pitch = self.pitch_degrees.to_radians();
        Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), yaw.cos() * pitch.cos())
    }

    /// World point → screen pixels (origin top-left). None — точка за камерой.
    pub fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }

        let view = Mat4::look_to_lh(self.position, self.forward(), Vec3::Y);
        let projection = Mat4::perspective_lh(
            self.fov_y_degrees.to_radians(),
            self.viewport.x / self.viewport.y,
            self.near,
            self.far,
        );

        let clip = projection * view * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}
