//! Headless симуляция Wildtrap
//!
//! Запускает Bevy App без рендера: арена, игрок, по врагу каждого
//! архетипа, 1000 тиков AI.

use bevy::prelude::*;
use wildtrap_simulation::ai::{Archer, Bird, Boar, Bomber, Troll, Wizard};
use wildtrap_simulation::{
    create_headless_app, log_info, Enemy, EnemyKind, Motion, Obstacle, Player, SoundEffectRequest,
};

/// Упрощённая интеграция velocity вместо внешней physics (только для демо)
fn integrate_motion(time: Res<Time>, mut bodies: Query<&mut Motion>) {
    let dt = time.delta_secs();
    for mut motion in bodies.iter_mut() {
        let velocity = motion.velocity;
        motion.position += velocity * dt;
        motion.position.z = motion.position.z.max(0.0);
    }
}

/// Считаем звуковые запросы (аудио-бэкенда в headless нет)
fn count_sounds(mut events: EventReader<SoundEffectRequest>, mut total: Local<usize>) {
    for request in events.read() {
        *total += 1;
        log_info(&format!("sound #{}: {}", *total, request.effect.as_str()));
    }
}

fn spawn_arena(world: &mut World) {
    world.spawn((Player, Motion::at(Vec3::ZERO).with_speed(150.0)));

    for center in [Vec3::new(150.0, 0.0, 0.0), Vec3::new(-200.0, 120.0, 0.0)] {
        world.spawn((
            Obstacle,
            Motion {
                solid: true,
                ..Motion::at(center).with_hitbox(Vec3::new(40.0, 120.0, 60.0))
            },
        ));
    }

    let body = Vec3::new(20.0, 20.0, 20.0);
    let enemy_at = |kind: EnemyKind, position: Vec3, speed: f32| {
        (
            Enemy::new(kind),
            Motion::at(position).with_speed(speed).with_hitbox(body),
        )
    };

    world.spawn((enemy_at(EnemyKind::Boar, Vec3::new(400.0, 0.0, 0.0), 260.0), Boar::default()));
    world.spawn(enemy_at(EnemyKind::Barbarian, Vec3::new(-400.0, 0.0, 0.0), 110.0));
    world.spawn((enemy_at(EnemyKind::Troll, Vec3::new(0.0, 400.0, 0.0), 70.0), Troll::default()));
    world.spawn((enemy_at(EnemyKind::Bomber, Vec3::new(0.0, -500.0, 0.0), 90.0), Bomber::default()));
    world.spawn((enemy_at(EnemyKind::Archer, Vec3::new(500.0, 500.0, 0.0), 90.0), Archer::default()));
    world.spawn((enemy_at(EnemyKind::Wizard, Vec3::new(-500.0, -500.0, 0.0), 80.0), Wizard::default()));

    for i in 0..5 {
        let offset = Vec3::new(i as f32 * 25.0, 300.0, 480.0);
        let (enemy, motion) = enemy_at(EnemyKind::Bird, offset, 150.0);
        world.spawn((enemy, Motion { gravity: 0.0, ..motion }, Bird::default()));
    }
}

fn main() {
    let seed = 42;
    println!("Starting Wildtrap headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_systems(FixedUpdate, integrate_motion.after(wildtrap_simulation::ai::enemy_ai_step))
        .add_systems(Update, count_sounds);
    spawn_arena(app.world_mut());

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            println!("Tick {}: {} entities", tick, entity_count);
        }
    }

    println!("Simulation complete!");
}
