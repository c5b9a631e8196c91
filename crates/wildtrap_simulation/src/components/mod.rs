//! ECS Components, которые AI core читает/пишет
//!
//! Организация по доменам:
//! - motion: позиция, скорость, hitbox (Motion)
//! - enemy: общая часть врагов (Enemy, EnemyKind)
//! - projectile: атакующие entity (Projectile, Damaging, Bounceable, AreaEffect)
//! - trap: ловушки игрока (TrapFootprint, Trap, PhantomTrap)
//! - world: маркеры (Player, Obstacle) + внешние сигналы (Collision, Knockable)
//!
//! Per-archetype state (Boar, Wizard, ...) живёт в crate::ai::components.

pub mod enemy;
pub mod motion;
pub mod projectile;
pub mod trap;
pub mod world;

// Re-exports для удобного импорта
pub use enemy::*;
pub use motion::*;
pub use projectile::*;
pub use trap::*;
pub use world::*;
