//! Ловушки игрока: общий footprint + варианты через композицию

use bevy::prelude::*;

/// Общая часть любой ловушки: где стоит, размер, сколько живёт
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TrapFootprint {
    pub position: Vec2,
    pub scale: Vec2,
    /// Оставшееся время жизни (ms)
    pub duration_ms: f32,
}

impl Default for TrapFootprint {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::new(3.0, 3.0),
            duration_ms: 10_000.0,
        }
    }
}

impl TrapFootprint {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..default()
        }
    }

    /// Уменьшить lifetime. true — ловушка истекла
    pub fn tick(&mut self, elapsed_ms: f32) -> bool {
        self.duration_ms -= elapsed_ms;
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.duration_ms <= 0.0
    }
}

/// Ловушка с уроном и замедлением
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Trap {
    pub footprint: TrapFootprint,
    pub damage: u32,
    /// Множитель скорости пойманного (0.1 = 10% скорости)
    pub slow_factor: f32,
}

impl Trap {
    pub fn at(position: Vec2) -> Self {
        Self {
            footprint: TrapFootprint::at(position),
            damage: 15,
            slow_factor: 0.1,
        }
    }

    /// Скорость пойманного врага
    pub fn slowed_speed(&self, original_speed: f32) -> f32 {
        original_speed * self.slow_factor
    }
}

/// Фантомная ловушка — только footprint, без урона
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct PhantomTrap {
    pub footprint: TrapFootprint,
}

impl PhantomTrap {
    pub fn at(position: Vec2) -> Self {
        Self {
            footprint: TrapFootprint::at(position),
        }
    }
}
