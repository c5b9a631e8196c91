//! enemy_ai_step — orchestrator: один проход по всем живым врагам за тик
//!
//! Порядок:
//! 1. Снапшоты мира (игрок, препятствия, стая) до любых мутаций
//! 2. Для каждого врага (по возрастанию Entity index): cooldown, dispatch по EnemyKind
//! 3. Буфер действий → Commands (спавн) + SoundEffectRequest events
//!
//! Враг без нужного per-archetype компонента пропускается с warning,
//! остальные обрабатываются как обычно.

use bevy::prelude::*;

use crate::ai::behaviors::{
    archer_tick, barbarian_tick, bird_tick, boar_tick, bomber_tick, troll_tick, wizard_tick,
};
use crate::ai::components::{Archer, Bird, Boar, Bomber, Troll, Wizard};
use crate::ai::context::{ActorTick, AiActions, AiContext, FlockMate, ObstacleSnapshot};
use crate::ai::AiConfig;
use crate::audio::SoundEffectRequest;
use crate::components::{Collision, Enemy, EnemyKind, Knockable, Motion, Obstacle, Player};
use crate::error::{AiError, AiResult};
use crate::logger::{log, log_warning};
use crate::DeterministicRng;

type EnemyAiData = (
    Entity,
    &'static mut Enemy,
    &'static mut Motion,
    Option<&'static mut Boar>,
    Option<&'static mut Troll>,
    Option<&'static mut Bomber>,
    Option<&'static mut Archer>,
    Option<&'static mut Bird>,
    Option<&'static mut Wizard>,
    Option<&'static Collision>,
    Option<&'static Knockable>,
);

/// Per-tick AI всех врагов (`step`)
pub fn enemy_ai_step(
    time: Res<Time>,
    config: Res<AiConfig>,
    mut rng: ResMut<DeterministicRng>,
    players: Query<(Entity, &Motion), (With<Player>, Without<Enemy>)>,
    obstacles: Query<(Entity, &Motion), (With<Obstacle>, Without<Enemy>)>,
    mut enemies: Query<EnemyAiData>,
    mut commands: Commands,
    mut sound_events: EventWriter<SoundEffectRequest>,
) {
    if config.frozen {
        return;
    }

    let Ok((player, player_motion)) = players.single() else {
        if config.debug {
            log("enemy_ai_step: no single Player, skipping tick");
        }
        return;
    };
    let player_position = player_motion.position;
    let elapsed_ms = time.delta_secs() * 1000.0;

    let mut obstacle_snapshots: Vec<ObstacleSnapshot> = obstacles
        .iter()
        .map(|(entity, motion)| ObstacleSnapshot::from_motion(entity, motion))
        .collect();
    obstacle_snapshots.sort_by_key(|obstacle| obstacle.entity.index());

    let mut flock: Vec<FlockMate> = enemies
        .iter()
        .filter(|(_, enemy, _, _, _, _, _, bird, ..)| bird.is_some() && enemy.is_alive())
        .map(|(entity, _, motion, ..)| FlockMate {
            entity,
            position: motion.position,
            velocity: motion.velocity,
        })
        .collect();
    flock.sort_by_key(|mate| mate.entity.index());

    let mut order: Vec<Entity> = enemies.iter().map(|(entity, ..)| entity).collect();
    order.sort_by_key(|entity| entity.index());

    let mut ctx = AiContext::new(&config, &mut rng, &obstacle_snapshots, &flock);

    for entity in order {
        let Ok((_, mut enemy, mut motion, boar, troll, bomber, archer, bird, wizard, collision, knockable)) =
            enemies.get_mut(entity)
        else {
            continue;
        };

        if !enemy.is_alive() || knockable.is_some_and(|knockable| knockable.knocked) {
            continue;
        }

        enemy.tick_cooldown(elapsed_ms);

        let tick = ActorTick {
            entity,
            player,
            player_position,
            elapsed_ms,
        };
        let enemy = &mut *enemy;
        let motion = &mut *motion;

        let result: AiResult<()> = match enemy.kind {
            EnemyKind::Boar => require(boar, entity, "Boar")
                .map(|mut boar| boar_tick(&tick, enemy, motion, &mut boar, collision, &mut ctx)),
            EnemyKind::Barbarian => {
                barbarian_tick(&tick, enemy, motion, &mut ctx);
                Ok(())
            }
            EnemyKind::Troll => require(troll, entity, "Troll")
                .map(|mut troll| troll_tick(&tick, enemy, motion, &mut troll, &mut ctx)),
            EnemyKind::Bomber => require(bomber, entity, "Bomber")
                .map(|mut bomber| bomber_tick(&tick, enemy, motion, &mut bomber, &mut ctx)),
            EnemyKind::Archer => require(archer, entity, "Archer")
                .map(|mut archer| archer_tick(&tick, enemy, motion, &mut archer, &mut ctx)),
            EnemyKind::Bird => require(bird, entity, "Bird")
                .map(|mut bird| bird_tick(&tick, motion, &mut bird, &mut ctx)),
            EnemyKind::Wizard => require(wizard, entity, "Wizard")
                .map(|mut wizard| wizard_tick(&tick, enemy, motion, &mut wizard, &mut ctx)),
        };

        if let Err(err) = result {
            log_warning(&format!("enemy_ai_step: skipping {:?}: {}", entity, err));
        }
    }

    let AiActions { spawns, sounds } = ctx.actions;

    for spawn in spawns {
        let mut entity_commands = commands.spawn((spawn.motion, spawn.damaging));
        if let Some(projectile) = spawn.projectile {
            entity_commands.insert(projectile);
        }
        if let Some(bounceable) = spawn.bounceable {
            entity_commands.insert(bounceable);
        }
        if let Some(homing) = spawn.homing {
            entity_commands.insert(homing);
        }
        if let Some(area) = spawn.area {
            entity_commands.insert(area);
        }
    }

    for sound in sounds {
        sound_events.write(sound);
    }
}

fn require<T>(component: Option<T>, entity: Entity, name: &'static str) -> AiResult<T> {
    component.ok_or(AiError::MissingComponent {
        entity,
        component: name,
    })
}
