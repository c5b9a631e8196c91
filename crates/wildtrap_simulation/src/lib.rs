//! Wildtrap Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: per-tick AI врагов.
//! Bevy `World` — это registry (entity → компоненты).
//! Physics, рендер, аудио-плеер и спавн врагов живут снаружи.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod audio;
pub mod components;
pub mod error;
pub mod logger;

// Re-export базовых типов для удобства
pub use ai::{boar_reset, AiConfig, BoarResetRequested, EnemyAiPlugin};
pub use audio::{SoundEffect, SoundEffectRequest};
pub use components::*;
pub use error::{AiError, AiResult};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};

/// Частота simulation tick
pub const TICK_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .add_plugins(EnemyAiPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Единственный источник случайности AI: направления, jitter, задержки.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Равномерное float в [0, 1)
    pub fn uniform(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает ровно на один fixed tick за `app.update()`,
/// поэтому прогон не зависит от wall clock.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ)) // 60Hz FixedUpdate
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(1.0 / TICK_HZ),
        ))
        .add_plugins(EnemyAiPlugin);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_in_unit_range() {
        let mut rng = DeterministicRng::new(7);
        for _ in 0..1000 {
            let value = rng.uniform();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = DeterministicRng::new(99);
        let mut b = DeterministicRng::new(99);
        let xs: Vec<f32> = (0..16).map(|_| a.uniform()).collect();
        let ys: Vec<f32> = (0..16).map(|_| b.uniform()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_simulation_plugin_installs_ai() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, SimulationPlugin));
        app.update();

        assert!(app.world().contains_resource::<AiConfig>());
        assert_eq!(app.world().resource::<DeterministicRng>().seed, 42);
    }

    #[test]
    fn test_headless_app_keeps_requested_seed() {
        let app = create_headless_app(777);
        assert_eq!(app.world().resource::<DeterministicRng>().seed, 777);
    }
}
