//! Boar (charger): Roaming → Preparing → Charging → Roaming
//!
//! Направление рывка фиксируется в конце wind-up, а не в начале:
//! игрок может увернуться, пока кабан готовится.

use bevy::prelude::*;

use super::{hold_and_face, pursue};
use crate::ai::components::{Boar, BoarPhase};
use crate::ai::context::{ActorTick, AiContext};
use crate::ai::gate::decide_to_pathfind;
use crate::ai::spatial::{choose_direction, path_clear, planar_distance};
use crate::audio::SoundEffect;
use crate::components::{Collision, Enemy, Motion};

pub fn boar_tick(
    tick: &ActorTick,
    enemy: &mut Enemy,
    motion: &mut Motion,
    boar: &mut Boar,
    collision: Option<&Collision>,
    ctx: &mut AiContext,
) {
    let tuning = ctx.config.boar.clone();

    match boar.phase {
        BoarPhase::Roaming => {
            boar.cooldown_timer = (boar.cooldown_timer - tick.elapsed_ms).max(0.0);

            if !decide_to_pathfind(enemy, tuning.thinking_ms, tick.elapsed_ms, ctx) {
                return;
            }

            let distance = planar_distance(motion, tick.player_position);
            let in_range = distance <= tuning.trigger_radius && boar.cooldown_timer <= 0.0;

            if in_range {
                let direction = choose_direction(motion, tick.player_position, ctx.rng);
                if path_clear(motion, direction, distance, ctx.obstacles).clear {
                    boar.phase = BoarPhase::Preparing;
                    boar.prepare_timer = 0.0;
                    hold_and_face(motion, tick.player_position);
                    ctx.trace(tick.entity, "boar Roaming → Preparing");
                    return;
                }
            }

            let roam_speed = motion.speed * tuning.roam_speed_factor;
            pursue(motion, tick.player_position, roam_speed, ctx);
        }
        BoarPhase::Preparing => {
            hold_and_face(motion, tick.player_position);
            boar.prepare_timer += tick.elapsed_ms;

            if boar.prepare_timer >= tuning.prepare_ms {
                let direction = choose_direction(motion, tick.player_position, ctx.rng);
                boar.phase = BoarPhase::Charging;
                boar.prepare_timer = 0.0;
                boar.charge_timer = 0.0;
                boar.charge_direction = direction;
                motion.set_heading(direction, motion.speed);
                ctx.request_sound(SoundEffect::BoarCharge);
                ctx.trace(tick.entity, "boar Preparing → Charging");
            }
        }
        BoarPhase::Charging => {
            let hit_wall = collision.is_some_and(|collision| ctx.is_obstacle(collision.other));
            boar.charge_timer += tick.elapsed_ms;

            if hit_wall || boar.charge_timer >= tuning.charge_ms {
                end_charge(boar, motion, tuning.cooldown_ms);
                ctx.trace(tick.entity, "boar Charging → Roaming");
                return;
            }

            motion.set_heading(boar.charge_direction, motion.speed);
        }
    }
}

fn end_charge(boar: &mut Boar, motion: &mut Motion, cooldown_ms: f32) {
    boar.phase = BoarPhase::Roaming;
    boar.charge_timer = 0.0;
    boar.charge_direction = Vec2::ZERO;
    boar.cooldown_timer = cooldown_ms.max(0.0);
    motion.stop();
}

/// Вернуть кабана в состояние свежего спавна (respawn/reuse)
pub fn reset_boar(enemy: &mut Enemy, motion: &mut Motion, boar: &mut Boar) {
    boar.reset();
    enemy.pathfind_time = 0.0;
    enemy.think_jitter = 0.0;
    motion.stop();
}
