//! Контекст одного AI тика: config, RNG, снапшоты мира и буфер действий
//!
//! Behavior модули не трогают World напрямую. Они читают снапшоты
//! (obstacles, flock), мутируют только компоненты своего entity и
//! складывают side effects (spawn, звук) в AiActions. Orchestrator
//! применяет буфер после обхода всех врагов.

use bevy::prelude::*;

use crate::ai::AiConfig;
use crate::audio::{SoundEffect, SoundEffectRequest};
use crate::components::{AreaEffect, Bounceable, Damaging, HomingProjectile, Motion, Projectile};
use crate::DeterministicRng;

/// Препятствие для LOS/clearance (AABB на плоскости)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub entity: Entity,
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl ObstacleSnapshot {
    pub fn from_motion(entity: Entity, motion: &Motion) -> Self {
        Self {
            entity,
            center: motion.planar_position(),
            half_extents: motion.half_extents(),
        }
    }
}

/// Соседняя птица (снапшот до мутаций тика)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockMate {
    pub entity: Entity,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Новый атакующий entity, который orchestrator заспавнит
#[derive(Debug, Clone)]
pub struct ProjectileSpawn {
    pub motion: Motion,
    pub damaging: Damaging,
    pub projectile: Option<Projectile>,
    pub bounceable: Option<Bounceable>,
    pub homing: Option<HomingProjectile>,
    pub area: Option<AreaEffect>,
}

/// Side effects, накопленные за тик
#[derive(Debug, Default)]
pub struct AiActions {
    pub spawns: Vec<ProjectileSpawn>,
    pub sounds: Vec<SoundEffectRequest>,
}

/// Вход behavior модуля: кто думает, где игрок, сколько прошло
#[derive(Debug, Clone, Copy)]
pub struct ActorTick {
    pub entity: Entity,
    pub player: Entity,
    pub player_position: Vec3,
    pub elapsed_ms: f32,
}

pub struct AiContext<'a> {
    pub config: &'a AiConfig,
    pub rng: &'a mut DeterministicRng,
    pub obstacles: &'a [ObstacleSnapshot],
    pub flock: &'a [FlockMate],
    pub actions: AiActions,
}

impl<'a> AiContext<'a> {
    pub fn new(
        config: &'a AiConfig,
        rng: &'a mut DeterministicRng,
        obstacles: &'a [ObstacleSnapshot],
        flock: &'a [FlockMate],
    ) -> Self {
        Self {
            config,
            rng,
            obstacles,
            flock,
            actions: AiActions::default(),
        }
    }

    pub fn request_sound(&mut self, effect: SoundEffect) {
        self.actions.sounds.push(SoundEffectRequest::once(effect));
    }

    pub fn spawn(&mut self, spawn: ProjectileSpawn) {
        self.actions.spawns.push(spawn);
    }

    pub fn is_obstacle(&self, entity: Entity) -> bool {
        self.obstacles.iter().any(|obstacle| obstacle.entity == entity)
    }

    /// Лог перехода фазы (только в debug режиме)
    pub fn trace(&self, entity: Entity, message: &str) {
        if self.config.debug {
            crate::logger::log(&format!("AI {:?}: {}", entity, message));
        }
    }
}
