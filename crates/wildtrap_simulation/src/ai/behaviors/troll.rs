//! Troll (heavy melee): поворачивается плавно, идёт туда, куда смотрит
//!
//! Смех — отдельный длинный cooldown, не связан с движением.

use bevy::prelude::*;

use super::pursuit_heading;
use crate::ai::components::Troll;
use crate::ai::context::{ActorTick, AiContext};
use crate::ai::gate::decide_to_pathfind;
use crate::ai::spatial::{approach_angle, planar_distance};
use crate::audio::SoundEffect;
use crate::components::{Enemy, Motion};

pub fn troll_tick(
    tick: &ActorTick,
    enemy: &mut Enemy,
    motion: &mut Motion,
    troll: &mut Troll,
    ctx: &mut AiContext,
) {
    let tuning = ctx.config.troll.clone();

    troll.laugh_cooldown -= tick.elapsed_ms;
    if troll.laugh_cooldown <= 0.0 {
        ctx.request_sound(SoundEffect::TrollLaugh);
        troll.laugh_cooldown = tuning.laugh_interval_ms + ctx.rng.uniform() * tuning.laugh_jitter_ms.max(0.0);
    }

    if decide_to_pathfind(enemy, tuning.thinking_ms, tick.elapsed_ms, ctx) {
        let heading = pursuit_heading(motion, tick.player_position, ctx);
        troll.desired_angle = heading.y.atan2(heading.x);
    }

    let fraction = (tuning.turn_rate * tick.elapsed_ms).clamp(0.0, 1.0);
    let angle = approach_angle(motion.angle, troll.desired_angle, fraction);
    let facing = Vec2::from_angle(angle);

    if planar_distance(motion, tick.player_position) <= tuning.attack_range {
        motion.stop();
        motion.face(facing);
    } else {
        motion.set_heading(facing, motion.speed);
    }
}
