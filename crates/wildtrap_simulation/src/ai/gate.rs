//! Think-gate: как часто враг пересчитывает путь
//!
//! Между решениями враг едет по последнему выбранному heading.
//! Порог = base + jitter, jitter перебрасывается на каждом срабатывании.

use crate::ai::context::AiContext;
use crate::components::Enemy;

/// Накопить elapsed и решить, пора ли думать заново
///
/// true → аккумулятор сброшен в 0, новый jitter выбран.
/// Сравнение через `>=`: нулевой/отрицательный base = думать каждый тик.
pub fn decide_to_pathfind(
    enemy: &mut Enemy,
    base_thinking_time: f32,
    elapsed_ms: f32,
    ctx: &mut AiContext,
) -> bool {
    enemy.pathfind_time += elapsed_ms.max(0.0);

    if enemy.pathfind_time < base_thinking_time + enemy.think_jitter {
        return false;
    }

    enemy.pathfind_time = 0.0;
    enemy.think_jitter = ctx.rng.uniform() * ctx.config.think_jitter_ms.max(0.0);
    true
}
