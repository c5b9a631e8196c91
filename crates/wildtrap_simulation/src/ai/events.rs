//! AI Events — внешние команды для AI

use bevy::prelude::*;

/// Сбросить charger в состояние свежего спавна (respawn / reuse из пула)
///
/// Обрабатывается в FixedUpdate перед enemy_ai_step, поэтому следующий
/// же AI тик видит чистого кабана.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoarResetRequested {
    pub entity: Entity,
}
