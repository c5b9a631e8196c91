//! Enemy AI module
//!
//! Per-tick решения врагов: think-gate, state machine на архетип,
//! спавн атак и звуковые запросы. Обрабатывается в FixedUpdate.

use bevy::prelude::*;

use crate::audio::SoundEffectRequest;
use crate::components::{
    AreaEffect, Bounceable, Collision, Damaging, Enemy, HomingProjectile, Knockable, Motion,
    Obstacle, PhantomTrap, Player, Projectile, Trap,
};
use crate::DeterministicRng;

pub mod behaviors;
pub mod components;
pub mod config;
pub mod context;
pub mod emitters;
pub mod events;
pub mod gate;
pub mod spatial;
pub mod systems;


// Re-export основных типов
pub use components::*;
pub use config::AiConfig;
pub use context::{AiActions, AiContext, ObstacleSnapshot, ProjectileSpawn};
pub use events::BoarResetRequested;
pub use gate::decide_to_pathfind;
pub use spatial::{choose_direction, path_clear, random_direction, PathClearance};
pub use systems::{apply_boar_resets, boar_reset, enemy_ai_step};

/// Enemy AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. apply_boar_resets — внешние reset запросы
/// 2. enemy_ai_step — тик всех врагов
pub struct EnemyAiPlugin;

impl Plugin for EnemyAiPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SoundEffectRequest>()
            .add_event::<BoarResetRequested>()
            .init_resource::<AiConfig>();

        // Reflection (inspector, scene dump)
        app.register_type::<Motion>()
            .register_type::<Enemy>()
            .register_type::<Player>()
            .register_type::<Obstacle>()
            .register_type::<Collision>()
            .register_type::<Knockable>()
            .register_type::<Projectile>()
            .register_type::<Damaging>()
            .register_type::<Bounceable>()
            .register_type::<HomingProjectile>()
            .register_type::<AreaEffect>()
            .register_type::<Trap>()
            .register_type::<PhantomTrap>()
            .register_type::<Boar>()
            .register_type::<Troll>()
            .register_type::<Bomber>()
            .register_type::<Archer>()
            .register_type::<Bird>()
            .register_type::<Wizard>();

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_systems(
            FixedUpdate,
            (apply_boar_resets, enemy_ai_step).chain(), // Последовательно для детерминизма
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_registers_reflected_components() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, EnemyAiPlugin));

        let registry = app.world().resource::<AppTypeRegistry>().read();
        assert!(registry.get(std::any::TypeId::of::<Motion>()).is_some());
        assert!(registry.get(std::any::TypeId::of::<Boar>()).is_some());
        assert!(registry.get(std::any::TypeId::of::<Wizard>()).is_some());
        assert!(registry.get(std::any::TypeId::of::<HomingProjectile>()).is_some());
    }
}
