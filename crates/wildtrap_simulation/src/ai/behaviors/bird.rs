//! Bird: Flocking → Swooping → Returning → Flocking
//!
//! В стае: alignment + cohesion + separation + притяжение к игроку.
//! Пикирование по направлению, зафиксированному в момент старта.
//! У каждой птицы свой swoop cooldown.

use bevy::prelude::*;

use crate::ai::components::{Bird, BirdPhase};
use crate::ai::config::BirdTuning;
use crate::ai::context::{ActorTick, AiContext, FlockMate};
use crate::ai::spatial::{choose_direction, planar_distance};
use crate::components::Motion;

/// ms → sec для вертикальной скорости (swoop_speed задан в units/ms)
const MS_PER_SEC: f32 = 1000.0;

pub fn bird_tick(tick: &ActorTick, motion: &mut Motion, bird: &mut Bird, ctx: &mut AiContext) {
    let tuning = ctx.config.bird.clone();
    let vertical_speed = bird.swoop_speed.max(0.0) * MS_PER_SEC;

    match bird.phase {
        BirdPhase::Flocking => {
            bird.swoop_cooldown = (bird.swoop_cooldown - tick.elapsed_ms).max(0.0);

            let distance = planar_distance(motion, tick.player_position);
            if bird.swoop_cooldown <= 0.0 && distance <= tuning.swoop_range {
                let direction = choose_direction(motion, tick.player_position, ctx.rng);
                bird.phase = BirdPhase::Swooping;
                bird.swoop_timer = 0.0;
                bird.swoop_direction = direction;
                // Возвращаться будем на текущую высоту полёта
                bird.original_z = motion.position.z;
                motion.set_heading(direction, motion.speed);
                motion.velocity.z = -vertical_speed;
                ctx.trace(tick.entity, "bird Flocking → Swooping");
                return;
            }

            let seek = choose_direction(motion, tick.player_position, ctx.rng);
            let heading = flock_heading(tick.entity, motion, seek, ctx.flock, &tuning);
            motion.set_heading(heading, motion.speed * bird.swarm_speed);
            motion.velocity.z = 0.0;
        }
        BirdPhase::Swooping => {
            bird.swoop_timer += tick.elapsed_ms;

            if bird.swoop_timer >= tuning.swoop_ms {
                bird.phase = BirdPhase::Returning;
                bird.swoop_timer = 0.0;
                motion.velocity.z = vertical_speed;
                ctx.trace(tick.entity, "bird Swooping → Returning");
                return;
            }

            motion.set_heading(bird.swoop_direction, motion.speed);
            // Ниже пола не ныряем
            motion.velocity.z = if motion.position.z > 0.0 { -vertical_speed } else { 0.0 };
        }
        BirdPhase::Returning => {
            if motion.position.z >= bird.original_z {
                bird.phase = BirdPhase::Flocking;
                bird.swoop_direction = Vec2::ZERO;
                bird.swoop_cooldown = tuning.swoop_cooldown_ms.max(0.0);
                motion.velocity.z = 0.0;
                ctx.trace(tick.entity, "bird Returning → Flocking");
                return;
            }

            let seek = choose_direction(motion, tick.player_position, ctx.rng);
            let heading = flock_heading(tick.entity, motion, seek, ctx.flock, &tuning);
            motion.set_heading(heading, motion.speed * bird.swarm_speed);
            motion.velocity.z = vertical_speed;
        }
    }
}

/// Взвешенная сумма правил стаи; без соседей — просто к игроку
fn flock_heading(
    own: Entity,
    motion: &Motion,
    seek: Vec2,
    flock: &[FlockMate],
    tuning: &BirdTuning,
) -> Vec2 {
    let position = motion.planar_position();
    let mut velocity_sum = Vec2::ZERO;
    let mut position_sum = Vec2::ZERO;
    let mut separation = Vec2::ZERO;
    let mut neighbours = 0u32;

    for mate in flock.iter().filter(|mate| mate.entity != own) {
        let offset = position - mate.position.truncate();
        let distance = offset.length();
        if distance > tuning.flock_radius {
            continue;
        }

        neighbours += 1;
        velocity_sum += mate.velocity.truncate();
        position_sum += mate.position.truncate();

        if distance < tuning.separation_radius && distance > f32::EPSILON {
            // Чем ближе сосед, тем сильнее отталкивание
            separation += offset / (distance * distance);
        }
    }

    if neighbours == 0 {
        return seek;
    }

    let count = neighbours as f32;
    let alignment = (velocity_sum / count).normalize_or_zero();
    let cohesion = (position_sum / count - position).normalize_or_zero();
    let separation = separation.normalize_or_zero();

    let blended = alignment * tuning.alignment_weight
        + cohesion * tuning.cohesion_weight
        + separation * tuning.separation_weight
        + seek * tuning.seek_weight;

    let heading = blended.normalize_or_zero();
    if heading == Vec2::ZERO {
        seek
    } else {
        heading
    }
}
