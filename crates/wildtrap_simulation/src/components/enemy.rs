//! Enemy — общая часть всех враждебных NPC

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::Motion;

/// Архетип врага — определяет какой behavior модуль им управляет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Charger: wind-up → рывок по зафиксированному направлению
    Boar,
    /// Melee: просто идёт на игрока
    #[default]
    Barbarian,
    /// Heavy melee: плавный поворот + смех по cooldown
    Troll,
    /// Grenadier: бросает бомбы по дуге
    Bomber,
    /// Ranged: стреляет стрелами при чистой линии
    Archer,
    /// Aerial: стая + пикирование
    Bird,
    /// Caster: Moving → Preparing → Aiming → Shooting
    Wizard,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Boar => "boar",
            EnemyKind::Barbarian => "barbarian",
            EnemyKind::Troll => "troll",
            EnemyKind::Bomber => "bomber",
            EnemyKind::Archer => "archer",
            EnemyKind::Bird => "bird",
            EnemyKind::Wizard => "wizard",
        }
    }

    pub const ALL: [EnemyKind; 7] = [
        EnemyKind::Boar,
        EnemyKind::Barbarian,
        EnemyKind::Troll,
        EnemyKind::Bomber,
        EnemyKind::Archer,
        EnemyKind::Bird,
        EnemyKind::Wizard,
    ];
}

/// Враг (создаётся внешней фабрикой при спавне)
///
/// Health уменьшает внешняя collision resolution, уничтожение тоже внешнее.
/// AI только читает health (flee/aggression) и ведёт свои таймеры.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
#[require(Motion)]
pub struct Enemy {
    pub health: i32,
    pub max_health: i32,
    /// Контактный урон
    pub damage: u32,
    pub kind: EnemyKind,
    /// Общий attack cooldown (ms, тикает к нулю в orchestrator)
    pub cooldown: f32,
    /// Think-gate аккумулятор (ms с последнего решения)
    pub pathfind_time: f32,
    /// Jitter к следующему порогу think-gate (ms)
    pub think_jitter: f32,
    pub points: u32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new(EnemyKind::default())
    }
}

impl Enemy {
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            health: 100,
            max_health: 100,
            damage: 10,
            kind,
            cooldown: 0.0,
            pathfind_time: 0.0,
            think_jitter: 0.0,
            points: 1,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self.max_health = health;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Доля оставшегося здоровья (0..1)
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f32 / self.max_health as f32).min(1.0)
    }

    pub fn can_attack(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub fn tick_cooldown(&mut self, elapsed_ms: f32) {
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - elapsed_ms).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_defaults() {
        let enemy = Enemy::new(EnemyKind::Archer);
        assert_eq!(enemy.health, 100);
        assert_eq!(enemy.kind, EnemyKind::Archer);
        assert!(enemy.is_alive());
        assert!(enemy.can_attack());
    }

    #[test]
    fn test_health_fraction() {
        let mut enemy = Enemy::new(EnemyKind::Barbarian).with_health(80);
        enemy.health = 20;
        assert!((enemy.health_fraction() - 0.25).abs() < 1e-6);

        enemy.health = -5;
        assert_eq!(enemy.health_fraction(), 0.0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_cooldown_ticks_to_zero() {
        let mut enemy = Enemy::new(EnemyKind::Archer);
        enemy.cooldown = 100.0;

        enemy.tick_cooldown(60.0);
        assert_eq!(enemy.cooldown, 40.0);
        assert!(!enemy.can_attack());

        enemy.tick_cooldown(60.0);
        assert_eq!(enemy.cooldown, 0.0);
        assert!(enemy.can_attack());
    }

    #[test]
    fn test_kind_tags_are_unique() {
        let mut tags: Vec<_> = EnemyKind::ALL.iter().map(|k| k.as_str()).collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), EnemyKind::ALL.len());
    }
}
