//! Spatial helpers: направления, straight-line clearance, углы
//!
//! Всё на плоскости XY (Z — высота, в LOS не участвует).

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::ai::context::ObstacleSnapshot;
use crate::components::Motion;
use crate::DeterministicRng;

/// Результат проверки прямой линии
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathClearance {
    pub clear: bool,
    /// max_distance если чисто, иначе дистанция до первого контакта
    pub distance: f32,
}

impl PathClearance {
    fn open(distance: f32) -> Self {
        Self {
            clear: true,
            distance,
        }
    }
}

/// Равномерно случайный unit vector на плоскости
pub fn random_direction(rng: &mut DeterministicRng) -> Vec2 {
    Vec2::from_angle(rng.uniform() * TAU)
}

/// Unit vector от актора к игроку
///
/// Если актор стоит прямо на игроке (направления нет) — случайное.
pub fn choose_direction(motion: &Motion, player_position: Vec3, rng: &mut DeterministicRng) -> Vec2 {
    let to_player = player_position.truncate() - motion.planar_position();
    if to_player.length_squared() <= f32::EPSILON {
        return random_direction(rng);
    }
    to_player.normalize()
}

pub fn planar_distance(motion: &Motion, target: Vec3) -> f32 {
    motion.planar_position().distance(target.truncate())
}

/// Идём лучом от актора по `direction` до `max_distance`
///
/// Каждое препятствие расширяется на half-extents самого актора
/// (проверяем проход тела, не точки). Если тело уже залезло в
/// препятствие, луч проверяется против его настоящего бокса: уйти от
/// стены можно, стрелять сквозь неё нельзя.
/// Пустой список препятствий — всегда чисто.
pub fn path_clear(
    motion: &Motion,
    direction: Vec2,
    max_distance: f32,
    obstacles: &[ObstacleSnapshot],
) -> PathClearance {
    let max_distance = max_distance.max(0.0);
    let direction = direction.normalize_or_zero();

    if obstacles.is_empty() || direction == Vec2::ZERO {
        return PathClearance::open(max_distance);
    }

    let origin = motion.planar_position();
    let own_half = motion.half_extents();
    let mut nearest = max_distance;
    let mut blocked = false;

    for obstacle in obstacles {
        let half = obstacle.half_extents + own_half;
        let Some((enter, _)) = ray_aabb_span(origin, direction, obstacle.center - half, obstacle.center + half) else {
            continue;
        };

        let entry = if enter >= 0.0 {
            enter
        } else {
            // Тело перекрывает препятствие: проверяем настоящий бокс
            let real = obstacle.half_extents;
            match ray_aabb_span(origin, direction, obstacle.center - real, obstacle.center + real) {
                Some((real_enter, _)) => real_enter.max(0.0),
                None => continue,
            }
        };

        if entry < nearest {
            nearest = entry;
            blocked = true;
        }
    }

    PathClearance {
        clear: !blocked,
        distance: nearest,
    }
}

/// Slab test: (вход, выход) луча в AABB
///
/// Вход отрицательный, если origin внутри. None — луч не пересекает бокс.
fn ray_aabb_span(origin: Vec2, direction: Vec2, min: Vec2, max: Vec2) -> Option<(f32, f32)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for (o, d, lo, hi) in [
        (origin.x, direction.x, min.x, max.x),
        (origin.y, direction.y, min.y, max.y),
    ] {
        if d.abs() <= f32::EPSILON {
            // Луч параллелен slab'у
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (t1, t2) = {
            let a = (lo - o) * inv;
            let b = (hi - o) * inv;
            if a <= b { (a, b) } else { (b, a) }
        };
        t_enter = t_enter.max(t1);
        t_exit = t_exit.min(t2);
    }

    if t_enter > t_exit || t_exit < 0.0 {
        return None;
    }
    Some((t_enter, t_exit))
}

/// Обход препятствий: прямой путь или первый свободный случайный
///
/// Если всё закрыто — направление с самым длинным свободным отрезком.
pub fn steer_around_obstacles(
    motion: &Motion,
    desired: Vec2,
    probe: f32,
    attempts: u32,
    obstacles: &[ObstacleSnapshot],
    rng: &mut DeterministicRng,
) -> Vec2 {
    let direct = path_clear(motion, desired, probe, obstacles);
    if direct.clear {
        return desired;
    }

    let mut best = (desired, direct.distance);
    for _ in 0..attempts {
        let candidate = random_direction(rng);
        let clearance = path_clear(motion, candidate, probe, obstacles);
        if clearance.clear {
            return candidate;
        }
        if clearance.distance > best.1 {
            best = (candidate, clearance.distance);
        }
    }
    best.0
}

/// Кратчайшая разница углов в (-PI, PI]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    delta
}

/// Плавно довернуть `current` к `target`, закрывая `fraction` разницы
pub fn approach_angle(current: f32, target: f32, fraction: f32) -> f32 {
    let fraction = fraction.clamp(0.0, 1.0);
    current + shortest_angle_delta(current, target) * fraction
}
