//! Barbarian (melee brawler): идёт на игрока, в радиусе атаки стоит
//!
//! При низком здоровье убегает от игрока.

use super::{hold_and_face, pursuit_heading};
use crate::ai::context::{ActorTick, AiContext};
use crate::ai::gate::decide_to_pathfind;
use crate::ai::spatial::{choose_direction, planar_distance, steer_around_obstacles};
use crate::components::{Enemy, Motion};

pub fn barbarian_tick(tick: &ActorTick, enemy: &mut Enemy, motion: &mut Motion, ctx: &mut AiContext) {
    let tuning = ctx.config.barbarian.clone();
    let fleeing = enemy.health_fraction() <= tuning.flee_health_fraction;
    let distance = planar_distance(motion, tick.player_position);

    if !fleeing && distance <= tuning.attack_range {
        hold_and_face(motion, tick.player_position);
        return;
    }

    if !decide_to_pathfind(enemy, tuning.thinking_ms, tick.elapsed_ms, ctx) {
        return;
    }

    let heading = if fleeing {
        let away = -choose_direction(motion, tick.player_position, ctx.rng);
        steer_around_obstacles(
            motion,
            away,
            ctx.config.avoidance_probe,
            ctx.config.avoidance_attempts,
            ctx.obstacles,
            ctx.rng,
        )
    } else {
        pursuit_heading(motion, tick.player_position, ctx)
    };

    motion.set_heading(heading, motion.speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::behaviors::test_support::actor_tick;
    use crate::ai::AiConfig;
    use crate::components::EnemyKind;
    use crate::DeterministicRng;
    use bevy::prelude::*;

    fn config() -> AiConfig {
        let mut config = AiConfig::default();
        config.think_jitter_ms = 0.0;
        config.barbarian.thinking_ms = 0.0;
        config
    }

    #[test]
    fn test_pursues_at_full_speed() {
        let config = config();
        let mut rng = DeterministicRng::new(1);
        let mut ctx = AiContext::new(&config, &mut rng, &[], &[]);
        let mut enemy = Enemy::new(EnemyKind::Barbarian);
        let mut motion = Motion::at(Vec3::ZERO).with_speed(120.0);

        barbarian_tick(&actor_tick(Vec3::new(0.0, -300.0, 0.0), 16.0), &mut enemy, &mut motion, &mut ctx);

        let velocity = motion.planar_velocity();
        assert!((velocity.length() - 120.0).abs() < 1e-3);
        assert!((velocity.normalize() + Vec2::Y).length() < 1e-5);
    }

    #[test]
    fn test_holds_inside_attack_range() {
        let config = config();
        let mut rng = DeterministicRng::new(1);
        let mut ctx = AiContext::new(&config, &mut rng, &[], &[]);
        let mut enemy = Enemy::new(EnemyKind::Barbarian);
        let mut motion = Motion::at(Vec3::ZERO).with_speed(120.0);
        motion.set_heading(Vec2::X, 120.0);

        barbarian_tick(&actor_tick(Vec3::new(20.0, 0.0, 0.0), 16.0), &mut enemy, &mut motion, &mut ctx);

        assert_eq!(motion.planar_velocity(), Vec2::ZERO);
        assert_eq!(motion.facing, Vec2::X);
    }

    #[test]
    fn test_flees_at_low_health() {
        let config = config();
        let mut rng = DeterministicRng::new(1);
        let mut ctx = AiContext::new(&config, &mut rng, &[], &[]);
        let mut enemy = Enemy::new(EnemyKind::Barbarian);
        enemy.health = 10;
        let mut motion = Motion::at(Vec3::ZERO).with_speed(120.0);

        barbarian_tick(&actor_tick(Vec3::new(20.0, 0.0, 0.0), 16.0), &mut enemy, &mut motion, &mut ctx);

        assert!(motion.planar_velocity().x < 0.0);
    }

    #[test]
    fn test_keeps_heading_between_decisions() {
        let mut config = config();
        config.barbarian.thinking_ms = 1000.0;
        let mut rng = DeterministicRng::new(1);
        let mut ctx = AiContext::new(&config, &mut rng, &[], &[]);
        let mut enemy = Enemy::new(EnemyKind::Barbarian);
        let mut motion = Motion::at(Vec3::ZERO).with_speed(120.0);
        motion.set_heading(Vec2::Y, 120.0);

        barbarian_tick(&actor_tick(Vec3::new(500.0, 0.0, 0.0), 16.0), &mut enemy, &mut motion, &mut ctx);

        assert_eq!(motion.facing, Vec2::Y);
    }
}
