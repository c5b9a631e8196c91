//! Archer: Approaching ↔ Aiming, стреляет только по чистой линии

use super::{hold_and_face, pursue};
use crate::ai::components::{Archer, ArcherPhase};
use crate::ai::context::{ActorTick, AiContext};
use crate::ai::emitters::shoot_arrow;
use crate::ai::gate::decide_to_pathfind;
use crate::ai::spatial::{choose_direction, path_clear, planar_distance};
use crate::components::{Enemy, Motion};

/// Есть ли прямая линия до игрока
fn line_of_sight(motion: &Motion, tick: &ActorTick, ctx: &mut AiContext) -> bool {
    let distance = planar_distance(motion, tick.player_position);
    let direction = choose_direction(motion, tick.player_position, ctx.rng);
    path_clear(motion, direction, distance, ctx.obstacles).clear
}

pub fn archer_tick(
    tick: &ActorTick,
    enemy: &mut Enemy,
    motion: &mut Motion,
    archer: &mut Archer,
    ctx: &mut AiContext,
) {
    let tuning = ctx.config.archer.clone();

    match archer.phase {
        ArcherPhase::Approaching => {
            let in_range = planar_distance(motion, tick.player_position) <= tuning.shoot_range;

            if in_range && enemy.can_attack() && line_of_sight(motion, tick, ctx) {
                archer.phase = ArcherPhase::Aiming;
                archer.draw_arrow_time = 0.0;
                hold_and_face(motion, tick.player_position);
                ctx.trace(tick.entity, "archer Approaching → Aiming");
                return;
            }

            // В радиусе, но перезаряжается — ждём на месте
            if in_range && !enemy.can_attack() {
                hold_and_face(motion, tick.player_position);
                return;
            }

            if decide_to_pathfind(enemy, tuning.thinking_ms, tick.elapsed_ms, ctx) {
                let speed = motion.speed;
                pursue(motion, tick.player_position, speed, ctx);
            }
        }
        ArcherPhase::Aiming => {
            hold_and_face(motion, tick.player_position);
            archer.draw_arrow_time += tick.elapsed_ms;

            if archer.draw_arrow_time < tuning.draw_ms {
                return;
            }

            archer.phase = ArcherPhase::Approaching;
            archer.draw_arrow_time = 0.0;

            if line_of_sight(motion, tick, ctx) {
                shoot_arrow(tick.entity, motion, tick.player_position, ctx);
                enemy.cooldown = tuning.cooldown_ms.max(0.0);
                ctx.trace(tick.entity, "archer Aiming → Approaching (arrow shot)");
            } else {
                ctx.trace(tick.entity, "archer Aiming → Approaching (line blocked)");
            }
        }
    }
}
