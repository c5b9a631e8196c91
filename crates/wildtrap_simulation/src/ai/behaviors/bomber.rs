//! Bomber (grenadier): Approaching ↔ Aiming
//!
//! В Aiming стоит и смотрит на игрока, после задержки бросает бомбу
//! в последнюю известную позицию и перебрасывает задержку с jitter.

use super::{hold_and_face, pursue};
use crate::ai::components::{Bomber, BomberPhase};
use crate::ai::context::{ActorTick, AiContext};
use crate::ai::emitters::throw_bomb;
use crate::ai::gate::decide_to_pathfind;
use crate::ai::spatial::planar_distance;
use crate::components::{Enemy, Motion};

pub fn bomber_tick(
    tick: &ActorTick,
    enemy: &mut Enemy,
    motion: &mut Motion,
    bomber: &mut Bomber,
    ctx: &mut AiContext,
) {
    let tuning = ctx.config.bomber.clone();

    match bomber.phase {
        BomberPhase::Approaching => {
            if planar_distance(motion, tick.player_position) <= tuning.throw_range {
                bomber.phase = BomberPhase::Aiming;
                bomber.throw_bomb_delay_timer = 0.0;
                hold_and_face(motion, tick.player_position);
                ctx.trace(tick.entity, "bomber Approaching → Aiming");
                return;
            }

            if decide_to_pathfind(enemy, tuning.thinking_ms, tick.elapsed_ms, ctx) {
                let speed = motion.speed;
                pursue(motion, tick.player_position, speed, ctx);
            }
        }
        BomberPhase::Aiming => {
            hold_and_face(motion, tick.player_position);
            bomber.throw_bomb_delay_timer += tick.elapsed_ms;

            if bomber.throw_bomb_delay_timer >= bomber.throw_bomb_delay {
                throw_bomb(tick.entity, motion, tick.player_position, ctx);
                bomber.phase = BomberPhase::Approaching;
                bomber.throw_bomb_delay_timer = 0.0;
                bomber.throw_bomb_delay = tuning.throw_delay_ms + ctx.rng.uniform() * tuning.throw_jitter_ms.max(0.0);
                ctx.trace(tick.entity, "bomber Aiming → Approaching (bomb thrown)");
            }
        }
    }
}
