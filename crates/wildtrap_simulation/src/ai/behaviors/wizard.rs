//! Wizard (caster): Moving → Preparing → Aiming → Shooting → Moving
//!
//! Ровно один переход за тик. Активный таймер определяется только
//! `WizardState`. Цель фиксируется на входе в Preparing и ещё
//! переопределяется в Aiming (игрок может уйти из-под удара).

use super::{hold_and_face, pursue};
use crate::ai::components::{Wizard, WizardState};
use crate::ai::context::{ActorTick, AiContext};
use crate::ai::emitters::{shoot_fireball, trigger_lightning};
use crate::ai::gate::decide_to_pathfind;
use crate::ai::spatial::{choose_direction, path_clear, planar_distance};
use crate::components::{Enemy, Motion};

pub fn wizard_tick(
    tick: &ActorTick,
    enemy: &mut Enemy,
    motion: &mut Motion,
    wizard: &mut Wizard,
    ctx: &mut AiContext,
) {
    let tuning = ctx.config.wizard.clone();

    match wizard.state {
        WizardState::Moving => {
            wizard.shoot_cooldown = (wizard.shoot_cooldown - tick.elapsed_ms).max(0.0);
            let distance = planar_distance(motion, tick.player_position);

            if wizard.shoot_cooldown <= 0.0 && distance <= tuning.attack_range {
                wizard.state = WizardState::Preparing;
                wizard.prepare_timer = 0.0;
                wizard.locked_target = tick.player_position;
                hold_and_face(motion, wizard.locked_target);
                ctx.trace(tick.entity, "wizard Moving → Preparing");
                return;
            }

            if !decide_to_pathfind(enemy, tuning.thinking_ms, tick.elapsed_ms, ctx) {
                return;
            }

            if distance > tuning.standoff_range {
                let speed = motion.speed;
                pursue(motion, tick.player_position, speed, ctx);
            } else {
                hold_and_face(motion, tick.player_position);
            }
        }
        WizardState::Preparing => {
            hold_and_face(motion, wizard.locked_target);
            wizard.prepare_timer += tick.elapsed_ms;

            if wizard.prepare_timer >= tuning.prepare_ms {
                wizard.state = WizardState::Aiming;
                wizard.prepare_timer = 0.0;
                wizard.aim_timer = 0.0;
                ctx.trace(tick.entity, "wizard Preparing → Aiming");
            }
        }
        WizardState::Aiming => {
            wizard.locked_target = tick.player_position;
            hold_and_face(motion, wizard.locked_target);
            wizard.aim_timer += tick.elapsed_ms;

            if wizard.aim_timer >= tuning.aim_ms {
                wizard.state = WizardState::Shooting;
                wizard.aim_timer = 0.0;
                ctx.trace(tick.entity, "wizard Aiming → Shooting");
            }
        }
        WizardState::Shooting => {
            cast(tick, motion, wizard, ctx);
            wizard.state = WizardState::Moving;
            wizard.shoot_cooldown = tuning.cooldown_ms.max(0.0);
            ctx.trace(tick.entity, "wizard Shooting → Moving");
        }
    }
}

/// Молния если цель близко, иначе fireball (только по чистой линии)
fn cast(tick: &ActorTick, motion: &Motion, wizard: &Wizard, ctx: &mut AiContext) {
    let target = wizard.locked_target;
    let distance = planar_distance(motion, target);

    if distance <= ctx.config.wizard.lightning_trigger_range {
        trigger_lightning(tick.entity, target, ctx);
        return;
    }

    let direction = choose_direction(motion, target, ctx.rng);
    if path_clear(motion, direction, distance, ctx.obstacles).clear {
        shoot_fireball(tick.entity, motion, target, tick.player, ctx);
    } else {
        ctx.trace(tick.entity, "wizard fireball fizzled (line blocked)");
    }
}
