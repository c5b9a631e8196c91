//! AI config — все тюнинги архетипов в одном Resource
//!
//! Единицы: расстояния в world units, время в ms, скорости в units/sec.
//! Нулевые/отрицательные длительности = мгновенный переход (таймеры
//! сравниваются через `>=`, на длительность никто не делит).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AiResult;

/// Глобальные параметры AI (передаётся в orchestrator, не global state)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Подробные логи переходов фаз
    pub debug: bool,
    /// Freeze mode: AI step ничего не делает
    pub frozen: bool,
    /// Верхняя граница случайной добавки к порогу think-gate
    pub think_jitter_ms: f32,
    /// Длина луча для обхода препятствий при преследовании
    pub avoidance_probe: f32,
    /// Сколько случайных направлений пробовать, если прямой путь закрыт
    pub avoidance_attempts: u32,
    pub boar: BoarTuning,
    pub barbarian: BarbarianTuning,
    pub troll: TrollTuning,
    pub bomber: BomberTuning,
    pub archer: ArcherTuning,
    pub bird: BirdTuning,
    pub wizard: WizardTuning,
    pub projectiles: ProjectileTuning,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            debug: false,
            frozen: false,
            think_jitter_ms: 150.0,
            avoidance_probe: 120.0,
            avoidance_attempts: 6,
            boar: BoarTuning::default(),
            barbarian: BarbarianTuning::default(),
            troll: TrollTuning::default(),
            bomber: BomberTuning::default(),
            archer: ArcherTuning::default(),
            bird: BirdTuning::default(),
            wizard: WizardTuning::default(),
            projectiles: ProjectileTuning::default(),
        }
    }
}

impl AiConfig {
    /// Парсит JSON; отсутствующие поля берутся из Default
    pub fn from_json_str(json: &str) -> AiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoarTuning {
    pub thinking_ms: f32,
    /// Дистанция, с которой boar начинает wind-up
    pub trigger_radius: f32,
    pub prepare_ms: f32,
    pub charge_ms: f32,
    /// Пауза после рывка до следующего trigger
    pub cooldown_ms: f32,
    /// Доля Motion.speed при обычном преследовании (рывок — полная скорость)
    pub roam_speed_factor: f32,
}

impl Default for BoarTuning {
    fn default() -> Self {
        Self {
            thinking_ms: 400.0,
            trigger_radius: 300.0,
            prepare_ms: 1000.0,
            charge_ms: 1200.0,
            cooldown_ms: 2500.0,
            roam_speed_factor: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarbarianTuning {
    pub thinking_ms: f32,
    /// Ближе этого — стоим (контактный урон делает collision)
    pub attack_range: f32,
    /// При health ≤ этой доли — убегаем
    pub flee_health_fraction: f32,
}

impl Default for BarbarianTuning {
    fn default() -> Self {
        Self {
            thinking_ms: 300.0,
            attack_range: 40.0,
            flee_health_fraction: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrollTuning {
    pub thinking_ms: f32,
    pub attack_range: f32,
    /// Доля оставшегося угла, закрываемая за 1 ms (angular interpolation)
    pub turn_rate: f32,
    pub laugh_interval_ms: f32,
    pub laugh_jitter_ms: f32,
}

impl Default for TrollTuning {
    fn default() -> Self {
        Self {
            thinking_ms: 600.0,
            attack_range: 60.0,
            turn_rate: 0.003,
            laugh_interval_ms: 20_000.0,
            laugh_jitter_ms: 5_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BomberTuning {
    pub thinking_ms: f32,
    pub throw_range: f32,
    /// Базовая задержка прицеливания перед броском
    pub throw_delay_ms: f32,
    /// Случайная добавка к задержке после каждого броска
    pub throw_jitter_ms: f32,
}

impl Default for BomberTuning {
    fn default() -> Self {
        Self {
            thinking_ms: 500.0,
            throw_range: 350.0,
            throw_delay_ms: 1500.0,
            throw_jitter_ms: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcherTuning {
    pub thinking_ms: f32,
    pub shoot_range: f32,
    /// Время натяжения тетивы
    pub draw_ms: f32,
    /// Cooldown после выстрела (пишется в Enemy.cooldown)
    pub cooldown_ms: f32,
}

impl Default for ArcherTuning {
    fn default() -> Self {
        Self {
            thinking_ms: 500.0,
            shoot_range: 400.0,
            draw_ms: 800.0,
            cooldown_ms: 1500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdTuning {
    /// Радиус, в котором другие птицы считаются стаей
    pub flock_radius: f32,
    pub separation_radius: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub separation_weight: f32,
    /// Тяга стаи к игроку
    pub seek_weight: f32,
    pub swoop_ms: f32,
    pub swoop_cooldown_ms: f32,
    /// Пикируем только если игрок ближе (по XY)
    pub swoop_range: f32,
}

impl Default for BirdTuning {
    fn default() -> Self {
        Self {
            flock_radius: 150.0,
            separation_radius: 30.0,
            alignment_weight: 0.5,
            cohesion_weight: 0.3,
            separation_weight: 0.8,
            seek_weight: 0.4,
            swoop_ms: 500.0,
            swoop_cooldown_ms: 2000.0,
            swoop_range: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardTuning {
    pub thinking_ms: f32,
    /// Дистанция, на которой wizard перестаёт подходить
    pub standoff_range: f32,
    /// Максимальная дистанция начала атаки
    pub attack_range: f32,
    pub prepare_ms: f32,
    pub aim_ms: f32,
    /// Пауза в Moving после выстрела
    pub cooldown_ms: f32,
    /// Locked target ближе этого — бьём молнией, иначе fireball
    pub lightning_trigger_range: f32,
}

impl Default for WizardTuning {
    fn default() -> Self {
        Self {
            thinking_ms: 500.0,
            standoff_range: 300.0,
            attack_range: 450.0,
            prepare_ms: 1200.0,
            aim_ms: 400.0,
            cooldown_ms: 3000.0,
            lightning_trigger_range: 250.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub arrow_speed: f32,
    pub arrow_damage: u32,
    pub arrow_sticks_ms: f32,
    pub bomb_damage: u32,
    /// Время полёта бомбы до точки цели (ms)
    pub bomb_flight_ms: f32,
    /// Фитиль: сколько бомба лежит до взрыва
    pub bomb_fuse_ms: f32,
    pub bomb_bounces: u32,
    pub fireball_speed: f32,
    pub fireball_damage: u32,
    pub lightning_damage: u32,
    pub lightning_radius: f32,
    pub lightning_duration_ms: f32,
    /// Ускорение свободного падения (units/sec²) — для расчёта дуги бомбы
    pub gravity: f32,
    /// Высота над позицией стрелка, с которой вылетает снаряд
    pub launch_height: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            arrow_speed: 600.0,
            arrow_damage: 10,
            arrow_sticks_ms: 3000.0,
            bomb_damage: 30,
            bomb_flight_ms: 900.0,
            bomb_fuse_ms: 2000.0,
            bomb_bounces: 1,
            fireball_speed: 400.0,
            fireball_damage: 20,
            lightning_damage: 25,
            lightning_radius: 200.0,
            lightning_duration_ms: 500.0,
            gravity: 980.0,
            launch_height: 20.0,
        }
    }
}
