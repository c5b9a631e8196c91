//! Маркеры мира: игрок, препятствия, внешние collision/knockback сигналы

use bevy::prelude::*;

use super::Motion;

/// Игрок (AI читает только его Motion.position)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Motion)]
pub struct Player;

/// Твёрдое препятствие (стена, камень) — участвует в LOS/clearance
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Motion)]
pub struct Obstacle;

/// Collision, зарегистрированная physics системой на прошлом шаге
///
/// AI только читает (boar прекращает рывок об стену). Снимает physics.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Collision {
    pub other: Entity,
}

/// Entity может быть отброшен; пока `knocked` — velocity принадлежит physics
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Knockable {
    pub knocked: bool,
}
