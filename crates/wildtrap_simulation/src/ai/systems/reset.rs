//! boar_reset — внешний хук сброса charger'а без уничтожения entity

use bevy::prelude::*;

use crate::ai::behaviors::boar::reset_boar;
use crate::ai::components::Boar;
use crate::ai::events::BoarResetRequested;
use crate::components::{Enemy, EnemyKind, Motion};
use crate::error::{AiError, AiResult};
use crate::logger::log_warning;

type BoarResetData = (&'static mut Enemy, &'static mut Motion, Option<&'static mut Boar>);

/// Сбросить кабана напрямую через World (respawn код вне schedule)
pub fn boar_reset(world: &mut World, entity: Entity) -> AiResult<()> {
    let mut query = world.query::<BoarResetData>();
    let (enemy, motion, boar) = query
        .get_mut(world, entity)
        .map_err(|_| missing(entity, "Enemy"))?;

    reset_checked(entity, enemy, motion, boar)
}

/// Обработчик BoarResetRequested (перед enemy_ai_step в FixedUpdate)
pub fn apply_boar_resets(
    mut events: EventReader<BoarResetRequested>,
    mut boars: Query<BoarResetData>,
) {
    for request in events.read() {
        let result = match boars.get_mut(request.entity) {
            Ok((enemy, motion, boar)) => reset_checked(request.entity, enemy, motion, boar),
            Err(_) => Err(missing(request.entity, "Enemy")),
        };

        if let Err(err) = result {
            log_warning(&format!("boar reset skipped: {}", err));
        }
    }
}

fn reset_checked(
    entity: Entity,
    mut enemy: Mut<Enemy>,
    mut motion: Mut<Motion>,
    boar: Option<Mut<Boar>>,
) -> AiResult<()> {
    if enemy.kind != EnemyKind::Boar {
        return Err(AiError::WrongArchetype {
            entity,
            expected: EnemyKind::Boar,
            found: enemy.kind,
        });
    }

    let mut boar = boar.ok_or_else(|| missing(entity, "Boar"))?;
    reset_boar(&mut enemy, &mut motion, &mut boar);
    Ok(())
}

fn missing(entity: Entity, component: &'static str) -> AiError {
    AiError::MissingComponent { entity, component }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::components::BoarPhase;

    #[test]
    fn test_boar_reset_rejects_other_archetypes() {
        let mut world = World::new();
        let entity = world.spawn(Enemy::new(EnemyKind::Archer)).id();

        let result = boar_reset(&mut world, entity);
        assert!(matches!(result, Err(AiError::WrongArchetype { .. })));
    }

    #[test]
    fn test_boar_reset_reports_missing_boar_state() {
        let mut world = World::new();
        let entity = world.spawn(Enemy::new(EnemyKind::Boar)).id();

        let result = boar_reset(&mut world, entity);
        assert!(matches!(
            result,
            Err(AiError::MissingComponent { component: "Boar", .. })
        ));
    }

    #[test]
    fn test_boar_reset_unknown_entity() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        assert!(boar_reset(&mut world, entity).is_err());
    }

    #[test]
    fn test_boar_reset_clears_charge() {
        let mut world = World::new();
        let entity = world
            .spawn((
                Enemy::new(EnemyKind::Boar),
                Boar {
                    phase: BoarPhase::Charging,
                    charge_timer: 400.0,
                    charge_direction: Vec2::Y,
                    ..Boar::default()
                },
            ))
            .id();

        boar_reset(&mut world, entity).expect("boar resets");

        let boar = world.get::<Boar>(entity).expect("boar still exists");
        assert_eq!(boar.phase, BoarPhase::Roaming);
        assert_eq!(boar.charge_timer, 0.0);
    }
}
