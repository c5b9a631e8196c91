//! Audio cues — AI только просит проиграть звук
//!
//! Загрузка/микширование/устройство — снаружи. Читатель
//! `SoundEffectRequest` (audio backend) решает, что с ним делать.

use bevy::prelude::*;

/// Именованные звуковые эффекты, которые может запросить AI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SoundEffect {
    ArrowShot,
    BoarCharge,
    BombThrow,
    Fireball,
    Lightning,
    TrollLaugh,
}

impl SoundEffect {
    /// Ключ ассета для audio backend
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::ArrowShot => "arrow_shot",
            SoundEffect::BoarCharge => "boar_charge",
            SoundEffect::BombThrow => "bomb_throw",
            SoundEffect::Fireball => "fireball",
            SoundEffect::Lightning => "lightning",
            SoundEffect::TrollLaugh => "troll_laugh",
        }
    }
}

/// Event: запрос проиграть звук (fire-and-forget)
///
/// repeat: 0 — один раз, -1 — бесконечный loop, N — ещё N повторов.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SoundEffectRequest {
    pub effect: SoundEffect,
    pub repeat: i32,
}

impl SoundEffectRequest {
    pub fn once(effect: SoundEffect) -> Self {
        Self { effect, repeat: 0 }
    }
}
