//! Enemy AI integration tests
//!
//! Гоняем enemy_ai_step на голом World через RunSystemOnce:
//! - Charger: trigger radius, wind-up ровно prepare_ms, locked direction
//! - Caster: полный цикл из четырёх тиков → ровно одна атака
//! - boar_reset посреди рывка
//! - Нет self-damage, битые entity не ломают тик

use bevy::ecs::event::Events;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use std::time::Duration;

use wildtrap_simulation::ai::{
    apply_boar_resets, boar_reset, enemy_ai_step, AiConfig, Archer, Boar, BoarPhase,
    BoarResetRequested, Troll, Wizard, WizardState,
};
use wildtrap_simulation::{
    Collision, DamageKind, Damaging, DeterministicRng, Enemy, EnemyKind, HomingProjectile,
    Knockable, Motion, Obstacle, Player, SoundEffect, SoundEffectRequest,
};

const TICK: Duration = Duration::from_millis(100);

/// Helper: голый World со всеми ресурсами, которые читает AI
fn ai_world(config: AiConfig) -> World {
    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(DeterministicRng::new(42));
    world.insert_resource(Time::<()>::default());
    world.init_resource::<Events<SoundEffectRequest>>();
    world.init_resource::<Events<BoarResetRequested>>();
    world
}

/// Один AI тик длиной `delta`
fn step(world: &mut World, delta: Duration) {
    world.resource_mut::<Time>().advance_by(delta);
    world.run_system_once(enemy_ai_step).expect("enemy_ai_step runs");
}

fn spawn_player(world: &mut World, position: Vec3) -> Entity {
    world.spawn((Player, Motion::at(position))).id()
}

fn move_player(world: &mut World, player: Entity, position: Vec3) {
    world.get_mut::<Motion>(player).expect("player has motion").position = position;
}

fn damaging_entities(world: &mut World) -> Vec<Damaging> {
    let mut query = world.query::<&Damaging>();
    query.iter(world).cloned().collect()
}

fn boar_state(world: &World, boar: Entity) -> Boar {
    world.get::<Boar>(boar).expect("boar state").clone()
}

fn charger_config() -> AiConfig {
    let mut config = AiConfig::default();
    config.think_jitter_ms = 0.0;
    config.boar.thinking_ms = 200.0;
    config.boar.trigger_radius = 50.0;
    config.boar.prepare_ms = 1000.0;
    config
}

fn spawn_boar(world: &mut World) -> Entity {
    world
        .spawn((
            Enemy::new(EnemyKind::Boar),
            Motion::at(Vec3::ZERO).with_speed(250.0),
            Boar::default(),
        ))
        .id()
}

#[test]
fn test_charger_wind_up_and_locked_charge() {
    let mut world = ai_world(charger_config());
    let player = spawn_player(&mut world, Vec3::new(100.0, 0.0, 0.0));
    let boar = spawn_boar(&mut world);

    // Дальше trigger radius — никакого wind-up
    for _ in 0..10 {
        step(&mut world, TICK);
        assert_eq!(boar_state(&world, boar).phase, BoarPhase::Roaming);
    }

    // Игрок подошёл — ждём срабатывания think-gate
    move_player(&mut world, player, Vec3::new(40.0, 0.0, 0.0));
    let mut waited = 0;
    while !boar_state(&world, boar).is_preparing() {
        step(&mut world, TICK);
        waited += 1;
        assert!(waited <= 3, "think-gate should fire within its interval");
    }

    // Wind-up: стоит на месте ровно prepare_ms (10 тиков по 100ms)
    for _ in 0..9 {
        step(&mut world, TICK);
        let state = boar_state(&world, boar);
        assert!(state.is_preparing());
        let motion = world.get::<Motion>(boar).expect("boar motion");
        assert!(motion.planar_velocity().length() < 1e-6);
    }

    // Игрок уходит в последний момент — направление берётся сейчас
    move_player(&mut world, player, Vec3::new(0.0, 40.0, 0.0));
    step(&mut world, TICK);

    let state = boar_state(&world, boar);
    assert!(state.is_charging());
    assert!((state.charge_direction - Vec2::Y).length() < 1e-5);

    let sounds: Vec<_> = world
        .resource::<Events<SoundEffectRequest>>()
        .iter_current_update_events()
        .map(|request| request.effect)
        .collect();
    assert_eq!(sounds, vec![SoundEffect::BoarCharge]);

    // Во время рывка игрок двигается — направление зафиксировано
    move_player(&mut world, player, Vec3::new(-300.0, -300.0, 0.0));
    step(&mut world, TICK);
    let state = boar_state(&world, boar);
    assert!(state.is_charging());
    assert!((state.charge_direction - Vec2::Y).length() < 1e-5);

    let velocity = world.get::<Motion>(boar).expect("boar motion").planar_velocity();
    assert!((velocity - Vec2::new(0.0, 250.0)).length() < 1e-3);
}

#[test]
fn test_charge_ends_on_obstacle_collision() {
    let mut world = ai_world(charger_config());
    spawn_player(&mut world, Vec3::new(0.0, 500.0, 0.0));
    let wall = world
        .spawn((Obstacle, Motion::at(Vec3::new(0.0, 300.0, 0.0)).with_hitbox(Vec3::splat(40.0))))
        .id();
    let boar = world
        .spawn((
            Enemy::new(EnemyKind::Boar),
            Motion::at(Vec3::ZERO).with_speed(250.0),
            Boar {
                phase: BoarPhase::Charging,
                charge_direction: Vec2::Y,
                ..Boar::default()
            },
        ))
        .id();

    step(&mut world, TICK);
    assert!(boar_state(&world, boar).is_charging());

    // Physics сообщила о столкновении со стеной
    world.entity_mut(boar).insert(Collision { other: wall });
    step(&mut world, TICK);

    let state = boar_state(&world, boar);
    assert_eq!(state.phase, BoarPhase::Roaming);
    assert!(state.cooldown_timer > 0.0);
}

#[test]
fn test_boar_reset_mid_charge() {
    let mut world = ai_world(charger_config());
    spawn_player(&mut world, Vec3::new(1000.0, 0.0, 0.0));
    let boar = world
        .spawn((
            Enemy::new(EnemyKind::Boar),
            Motion::at(Vec3::ZERO).with_speed(250.0),
            Boar {
                phase: BoarPhase::Charging,
                charge_timer: 600.0,
                charge_direction: Vec2::X,
                cooldown_timer: 0.0,
                prepare_timer: 0.0,
            },
        ))
        .id();

    boar_reset(&mut world, boar).expect("reset succeeds");

    let state = boar_state(&world, boar);
    assert!(!state.is_charging());
    assert!(!state.is_preparing());
    assert_eq!(state.charge_timer, 0.0);
    assert_eq!(state.charge_direction, Vec2::ZERO);

    // Следующий тик — как у свежего спавна: бродит, не рвётся
    step(&mut world, TICK);
    let state = boar_state(&world, boar);
    assert_eq!(state.phase, BoarPhase::Roaming);
    assert_eq!(state.charge_timer, 0.0);
}

#[test]
fn test_boar_reset_event() {
    let mut world = ai_world(charger_config());
    let boar = world
        .spawn((
            Enemy::new(EnemyKind::Boar),
            Motion::at(Vec3::ZERO).with_speed(250.0),
            Boar {
                phase: BoarPhase::Preparing,
                prepare_timer: 700.0,
                ..Boar::default()
            },
        ))
        .id();

    world.send_event(BoarResetRequested { entity: boar });
    world.run_system_once(apply_boar_resets).expect("apply_boar_resets runs");

    let state = boar_state(&world, boar);
    assert_eq!(state.phase, BoarPhase::Roaming);
    assert_eq!(state.prepare_timer, 0.0);
}

#[test]
fn test_wizard_four_tick_cycle_spawns_once() {
    let mut world = ai_world(AiConfig::default());
    let player = spawn_player(&mut world, Vec3::new(400.0, 0.0, 0.0));
    let wizard = world
        .spawn((
            Enemy::new(EnemyKind::Wizard),
            Motion::at(Vec3::ZERO).with_speed(80.0),
            Wizard::default(),
        ))
        .id();

    let long_tick = Duration::from_millis(5000);
    let mut states = Vec::new();
    for _ in 0..4 {
        step(&mut world, long_tick);
        states.push(world.get::<Wizard>(wizard).expect("wizard state").state);
    }

    assert_eq!(
        states,
        vec![
            WizardState::Preparing,
            WizardState::Aiming,
            WizardState::Shooting,
            WizardState::Moving
        ]
    );

    let attacks = damaging_entities(&mut world);
    assert_eq!(attacks.len(), 1);
    assert_eq!(attacks[0].excluded_entity, wizard);
    assert_eq!(attacks[0].kind, DamageKind::Fireball);

    // Огненный шар наводится на игрока
    let mut homing = world.query::<&HomingProjectile>();
    let targets: Vec<Entity> = homing.iter(&world).map(|homing| homing.target).collect();
    assert_eq!(targets, vec![player]);
}

#[test]
fn test_attacks_never_hurt_their_caster() {
    let mut world = ai_world(AiConfig::default());
    spawn_player(&mut world, Vec3::new(0.0, 0.0, 0.0));
    let archer = world
        .spawn((
            Enemy::new(EnemyKind::Archer),
            Motion::at(Vec3::new(300.0, 0.0, 0.0)).with_speed(90.0),
            Archer::default(),
        ))
        .id();
    let wizard = world
        .spawn((
            Enemy::new(EnemyKind::Wizard),
            Motion::at(Vec3::new(-150.0, 0.0, 0.0)).with_speed(80.0),
            Wizard::default(),
        ))
        .id();

    for _ in 0..200 {
        step(&mut world, TICK);
    }

    let attacks = damaging_entities(&mut world);
    assert!(attacks.iter().any(|attack| attack.kind == DamageKind::Arrow));
    assert!(attacks.iter().any(|attack| attack.kind == DamageKind::Lightning));

    for attack in attacks {
        let caster = match attack.kind {
            DamageKind::Arrow => archer,
            _ => wizard,
        };
        assert_eq!(attack.excluded_entity, caster);
        assert!(!attack.can_hit(caster));
    }
}

#[test]
fn test_malformed_entity_is_skipped() {
    let mut config = AiConfig::default();
    config.think_jitter_ms = 0.0;
    config.barbarian.thinking_ms = 0.0;
    let mut world = ai_world(config);
    spawn_player(&mut world, Vec3::new(500.0, 0.0, 0.0));

    // Troll без Troll компонента (гонка respawn/reuse)
    let broken = world
        .spawn((Enemy::new(EnemyKind::Troll), Motion::at(Vec3::ZERO).with_speed(70.0)))
        .id();
    let barbarian = world
        .spawn((
            Enemy::new(EnemyKind::Barbarian),
            Motion::at(Vec3::new(0.0, 100.0, 0.0)).with_speed(110.0),
        ))
        .id();

    step(&mut world, TICK);

    let broken_motion = world.get::<Motion>(broken).expect("motion");
    assert_eq!(broken_motion.planar_velocity(), Vec2::ZERO);
    assert!(world.get::<Troll>(broken).is_none());

    let barbarian_motion = world.get::<Motion>(barbarian).expect("motion");
    assert!(barbarian_motion.planar_velocity().x > 0.0);
}

#[test]
fn test_dead_and_knocked_enemies_are_not_processed() {
    let mut config = AiConfig::default();
    config.think_jitter_ms = 0.0;
    config.barbarian.thinking_ms = 0.0;
    let mut world = ai_world(config);
    spawn_player(&mut world, Vec3::new(500.0, 0.0, 0.0));

    let mut dead_enemy = Enemy::new(EnemyKind::Barbarian);
    dead_enemy.health = 0;
    let dead = world
        .spawn((dead_enemy, Motion::at(Vec3::ZERO).with_speed(110.0)))
        .id();
    let knocked = world
        .spawn((
            Enemy::new(EnemyKind::Barbarian),
            Motion::at(Vec3::ZERO).with_speed(110.0),
            Knockable { knocked: true },
        ))
        .id();

    step(&mut world, TICK);

    for entity in [dead, knocked] {
        let motion = world.get::<Motion>(entity).expect("motion");
        assert_eq!(motion.planar_velocity(), Vec2::ZERO);
    }
}

#[test]
fn test_frozen_config_stops_ai() {
    let mut config = AiConfig::default();
    config.frozen = true;
    config.think_jitter_ms = 0.0;
    config.barbarian.thinking_ms = 0.0;
    let mut world = ai_world(config);
    spawn_player(&mut world, Vec3::new(500.0, 0.0, 0.0));
    let barbarian = world
        .spawn((Enemy::new(EnemyKind::Barbarian), Motion::at(Vec3::ZERO).with_speed(110.0)))
        .id();

    step(&mut world, TICK);

    let motion = world.get::<Motion>(barbarian).expect("motion");
    assert_eq!(motion.planar_velocity(), Vec2::ZERO);
}

#[test]
fn test_no_player_is_a_noop() {
    let mut world = ai_world(AiConfig::default());
    let boar = spawn_boar(&mut world);

    step(&mut world, TICK);

    assert_eq!(boar_state(&world, boar).phase, BoarPhase::Roaming);
    assert!(damaging_entities(&mut world).is_empty());
}
