//! Action Emitters — спавн атакующих entity + звук
//!
//! Каждый emitter кладёт ProjectileSpawn в AiContext (orchestrator
//! создаст entity после тика) и просит звук. Damaging всегда исключает
//! кастера: своя стрела/бомба/молния его не ранит.

use bevy::prelude::*;

use crate::ai::context::{AiContext, ProjectileSpawn};
use crate::audio::SoundEffect;
use crate::components::{
    AreaEffect, Bounceable, DamageKind, Damaging, HomingProjectile, Motion, Projectile,
    ProjectileKind,
};

/// Минимальное время полёта бомбы (сек), чтобы дуга оставалась конечной
const MIN_BOMB_FLIGHT_SECS: f32 = 0.05;

const ARROW_HITBOX: Vec3 = Vec3::new(4.0, 4.0, 4.0);
const BOMB_HITBOX: Vec3 = Vec3::new(8.0, 8.0, 8.0);
const FIREBALL_HITBOX: Vec3 = Vec3::new(12.0, 12.0, 12.0);

/// Направление полёта по плоскости; если цель под ногами — куда смотрим
fn aim_direction(origin: &Motion, target: Vec3) -> Vec2 {
    let to_target = target.truncate() - origin.planar_position();
    if to_target.length_squared() > f32::EPSILON {
        return to_target.normalize();
    }
    if origin.facing.length_squared() > f32::EPSILON {
        return origin.facing.normalize();
    }
    Vec2::X
}

/// Снаряд по прямой с постоянной скоростью (без гравитации)
fn straight_shot(origin: &Motion, target: Vec3, speed: f32, hitbox: Vec3, launch_height: f32) -> Motion {
    let direction = aim_direction(origin, target);
    let mut motion = Motion {
        position: origin.position + Vec3::Z * launch_height,
        speed,
        hitbox,
        gravity: 0.0,
        ..default()
    };
    motion.set_heading(direction, speed);
    motion
}

/// Стрела по прямой к цели
pub fn shoot_arrow(caster: Entity, origin: &Motion, target: Vec3, ctx: &mut AiContext) {
    let tuning = &ctx.config.projectiles;
    let spawn = ProjectileSpawn {
        motion: straight_shot(origin, target, tuning.arrow_speed, ARROW_HITBOX, tuning.launch_height),
        damaging: Damaging::new(DamageKind::Arrow, tuning.arrow_damage, caster),
        projectile: Some(Projectile {
            sticks_in_ground_ms: tuning.arrow_sticks_ms,
            kind: ProjectileKind::Arrow,
        }),
        bounceable: None,
        homing: None,
        area: None,
    };

    ctx.spawn(spawn);
    ctx.request_sound(SoundEffect::ArrowShot);
}

/// Бомба по баллистической дуге, приземляется в target через bomb_flight_ms
///
/// Фитиль тикает после падения (sticks_in_ground_ms), бомба отскакивает.
pub fn throw_bomb(caster: Entity, origin: &Motion, target: Vec3, ctx: &mut AiContext) {
    let tuning = &ctx.config.projectiles;
    let flight = (tuning.bomb_flight_ms / 1000.0).max(MIN_BOMB_FLIGHT_SECS);
    let gravity = tuning.gravity.max(0.0);

    let start = origin.position + Vec3::Z * tuning.launch_height;
    let delta = target - start;
    let planar = delta.truncate() / flight;
    // z(t) = z0 + vz*t - g*t²/2 = target.z при t = flight
    let vertical = (delta.z + 0.5 * gravity * flight * flight) / flight;

    let mut motion = Motion {
        position: start,
        velocity: planar.extend(vertical),
        speed: planar.length(),
        hitbox: BOMB_HITBOX,
        gravity: 1.0,
        ..default()
    };
    motion.face(aim_direction(origin, target));

    let spawn = ProjectileSpawn {
        motion,
        damaging: Damaging::new(DamageKind::Bomb, tuning.bomb_damage, caster),
        projectile: Some(Projectile {
            sticks_in_ground_ms: tuning.bomb_fuse_ms,
            kind: ProjectileKind::BombFused,
        }),
        bounceable: Some(Bounceable {
            bounces: tuning.bomb_bounces,
        }),
        homing: None,
        area: None,
    };

    ctx.spawn(spawn);
    ctx.request_sound(SoundEffect::BombThrow);
}

/// Огненный шар: вылетает к locked target, дальше наводится на `homing_target`
pub fn shoot_fireball(
    caster: Entity,
    origin: &Motion,
    target: Vec3,
    homing_target: Entity,
    ctx: &mut AiContext,
) {
    let tuning = &ctx.config.projectiles;
    let spawn = ProjectileSpawn {
        motion: straight_shot(origin, target, tuning.fireball_speed, FIREBALL_HITBOX, tuning.launch_height),
        damaging: Damaging::new(DamageKind::Fireball, tuning.fireball_damage, caster),
        projectile: Some(Projectile {
            sticks_in_ground_ms: 0.0,
            kind: ProjectileKind::Fireball,
        }),
        bounceable: None,
        homing: Some(HomingProjectile {
            target: homing_target,
            speed: tuning.fireball_speed,
        }),
        area: None,
    };

    ctx.spawn(spawn);
    ctx.request_sound(SoundEffect::Fireball);
}

/// Мгновенный удар по площади с центром в target
pub fn trigger_lightning(caster: Entity, target: Vec3, ctx: &mut AiContext) {
    let tuning = &ctx.config.projectiles;
    let diameter = tuning.lightning_radius.max(0.0) * 2.0;
    let spawn = ProjectileSpawn {
        motion: Motion {
            position: target.truncate().extend(0.0),
            hitbox: Vec3::new(diameter, diameter, 0.0),
            gravity: 0.0,
            ..default()
        },
        damaging: Damaging::new(DamageKind::Lightning, tuning.lightning_damage, caster),
        projectile: None,
        bounceable: None,
        homing: None,
        area: Some(AreaEffect {
            radius: tuning.lightning_radius,
            remaining_ms: tuning.lightning_duration_ms,
        }),
    };

    ctx.spawn(spawn);
    ctx.request_sound(SoundEffect::Lightning);
}
