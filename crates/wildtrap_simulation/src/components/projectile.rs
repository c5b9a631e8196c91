//! Projectile/Damaging — компоненты атакующих entity (стрелы, бомбы, магия)
//!
//! Создаются Action Emitters как независимые entity.
//! Уничтожение (lifetime, попадание) — дело physics/lifetime систем.

use bevy::prelude::*;

/// Категория снаряда — управляет downstream lifetime/collision поведением
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum ProjectileKind {
    Trap,
    PhantomTrap,
    #[default]
    Arrow,
    /// Бомба с фитилём (отскакивает, взрывается по таймеру)
    BombFused,
    Fireball,
}

/// Снаряд в полёте / на земле
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    /// Сколько ms снаряд лежит на земле после падения
    pub sticks_in_ground_ms: f32,
    pub kind: ProjectileKind,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            sticks_in_ground_ms: 3000.0,
            kind: ProjectileKind::Arrow,
        }
    }
}

/// Тип урона (для реакции цели, звуков, статистики)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum DamageKind {
    #[default]
    Arrow,
    Bomb,
    Fireball,
    Lightning,
}

/// Наносит урон при контакте
///
/// Инвариант: `excluded_entity` — тот кто создал атаку (нет self-damage).
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Damaging {
    pub kind: DamageKind,
    pub damage: u32,
    pub excluded_entity: Entity,
}

impl Damaging {
    pub fn new(kind: DamageKind, damage: u32, source: Entity) -> Self {
        Self {
            kind,
            damage,
            excluded_entity: source,
        }
    }

    /// Может ли задеть entity
    pub fn can_hit(&self, target: Entity) -> bool {
        target != self.excluded_entity
    }
}

/// Отскакивает от пола/стен `bounces` раз
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Bounceable {
    pub bounces: u32,
}

impl Default for Bounceable {
    fn default() -> Self {
        Self { bounces: 1 }
    }
}

/// Доворачивает в полёте к `target` со скоростью `speed`
///
/// Наведение выполняет physics; AI только выставляет цель при выстреле.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HomingProjectile {
    pub target: Entity,
    pub speed: f32,
}

impl HomingProjectile {
    /// Скорость, направленная на текущую позицию цели
    pub fn steer(&self, from: Vec3, target_position: Vec3) -> Vec3 {
        (target_position - from).normalize_or_zero() * self.speed
    }
}

/// Мгновенный area effect (удар молнии) с радиусом
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AreaEffect {
    pub radius: f32,
    /// Сколько ms эффект ещё активен
    pub remaining_ms: f32,
}

impl AreaEffect {
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        center.distance_squared(point) <= self.radius * self.radius
    }
}
