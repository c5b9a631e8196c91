//! Ошибки AI core
//!
//! Ни одна из них не фатальна для тика: orchestrator логирует и
//! переходит к следующему entity.

use bevy::prelude::Entity;
use thiserror::Error;

use crate::components::EnemyKind;

#[derive(Debug, Error)]
pub enum AiError {
    /// У entity нет компонента, без которого архетип не может думать
    #[error("entity {entity:?} is missing required component {component}")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    /// Reset/команда адресована не тому архетипу
    #[error("entity {entity:?} is a {found:?}, expected {expected:?}")]
    WrongArchetype {
        entity: Entity,
        expected: EnemyKind,
        found: EnemyKind,
    },

    #[error("invalid AI config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type AiResult<T> = Result<T, AiError>;
