//! Per-archetype behavior модули
//!
//! Один модуль на архетип, каждый — маленький state machine.
//! Общий контракт: не блокировать, не уничтожать чужие entity,
//! мутировать только свои компоненты, спавн только через AiContext.

use bevy::prelude::*;

use crate::ai::context::AiContext;
use crate::ai::spatial::{choose_direction, planar_distance, steer_around_obstacles};
use crate::components::Motion;

pub mod archer;
pub mod barbarian;
pub mod bird;
pub mod boar;
pub mod bomber;
pub mod troll;
pub mod wizard;

pub use archer::archer_tick;
pub use barbarian::barbarian_tick;
pub use bird::bird_tick;
pub use boar::boar_tick;
pub use bomber::bomber_tick;
pub use troll::troll_tick;
pub use wizard::wizard_tick;

/// Heading к цели с обходом препятствий
pub(crate) fn pursuit_heading(motion: &Motion, target: Vec3, ctx: &mut AiContext) -> Vec2 {
    let desired = choose_direction(motion, target, ctx.rng);
    let probe = planar_distance(motion, target).min(ctx.config.avoidance_probe);
    steer_around_obstacles(
        motion,
        desired,
        probe,
        ctx.config.avoidance_attempts,
        ctx.obstacles,
        ctx.rng,
    )
}

/// Идти к цели со скоростью `speed` (clamp к Motion.speed)
pub(crate) fn pursue(motion: &mut Motion, target: Vec3, speed: f32, ctx: &mut AiContext) {
    let heading = pursuit_heading(motion, target, ctx);
    motion.set_heading(heading, speed);
}

/// Стоять и смотреть на цель
pub(crate) fn hold_and_face(motion: &mut Motion, target: Vec3) {
    motion.stop();
    motion.face(target.truncate() - motion.planar_position());
}
