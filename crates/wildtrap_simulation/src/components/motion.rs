//! Motion — всё про форму и движение entity

use bevy::prelude::*;

/// Движение и форма entity (позиция, скорость, hitbox)
///
/// Плоскость XY — пол арены, Z — высота (прыжок, полёт птиц).
/// Velocity в world units/sec, интегрирует её внешняя physics система.
///
/// Инвариант: |velocity.xy| ≤ speed (voluntary движение).
/// Z-компонента управляется gravity/jump логикой вне AI core.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Motion {
    pub position: Vec3,
    /// Угол поворота (радианы, 0 = +X)
    pub angle: f32,
    pub velocity: Vec3,
    /// Максимальная voluntary скорость (units/sec)
    pub speed: f32,
    /// Только для рендера
    pub scale: Vec2,
    /// Направление взгляда (unit vector или ноль)
    pub facing: Vec2,
    /// Полные размеры hitbox (x, y, z)
    pub hitbox: Vec3,
    /// 1.0 — обычная гравитация, 0.0 — без гравитации
    pub gravity: f32,
    pub solid: bool,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            angle: 0.0,
            velocity: Vec3::ZERO,
            speed: 0.0,
            scale: Vec2::new(10.0, 10.0),
            facing: Vec2::ZERO,
            hitbox: Vec3::ZERO,
            gravity: 1.0,
            solid: false,
        }
    }
}

impl Motion {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..default()
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_hitbox(mut self, hitbox: Vec3) -> Self {
        self.hitbox = hitbox;
        self
    }

    /// Позиция на полу (без высоты)
    pub fn planar_position(&self) -> Vec2 {
        self.position.truncate()
    }

    pub fn planar_velocity(&self) -> Vec2 {
        self.velocity.truncate()
    }

    /// Половина hitbox по XY (для clearance проверок)
    pub fn half_extents(&self) -> Vec2 {
        self.hitbox.truncate().abs() * 0.5
    }

    /// Повернуться к направлению (без движения)
    pub fn face(&mut self, direction: Vec2) {
        if direction.length_squared() <= f32::EPSILON {
            return;
        }
        let direction = direction.normalize();
        self.facing = direction;
        self.angle = direction.y.atan2(direction.x);
    }

    /// Двигаться по direction со скоростью `speed` (clamp к self.speed)
    ///
    /// Z velocity не трогаем — это зона gravity/jump.
    pub fn set_heading(&mut self, direction: Vec2, speed: f32) {
        let direction = direction.normalize_or_zero();
        let speed = speed.clamp(0.0, self.speed.max(0.0));
        self.velocity.x = direction.x * speed;
        self.velocity.y = direction.y * speed;
        self.face(direction);
    }

    /// Остановить voluntary движение (XY)
    pub fn stop(&mut self) {
        self.velocity.x = 0.0;
        self.velocity.y = 0.0;
    }
}
