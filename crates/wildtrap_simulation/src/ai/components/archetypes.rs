//! Per-archetype AI state (один компонент на архетип)
//!
//! Каждый компонент держит ровно одну фазу (enum) — две одновременно
//! активные фазы невозможны по построению. Переходы двигает только
//! накопленное время + distance/LOS проверки, внешних сигналов нет.

use bevy::prelude::*;

/// Фазы charger'а
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum BoarPhase {
    /// Преследование / ожидание trigger
    #[default]
    Roaming,
    /// Wind-up: стоит и смотрит на цель
    Preparing,
    /// Рывок по зафиксированному направлению
    Charging,
}

/// Boar — charger
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Boar {
    pub phase: BoarPhase,
    /// Оставшийся cooldown после рывка (ms)
    pub cooldown_timer: f32,
    /// Накоплено в Preparing (ms)
    pub prepare_timer: f32,
    /// Накоплено в Charging (ms)
    pub charge_timer: f32,
    /// Фиксируется на переходе Preparing → Charging, дальше не меняется
    pub charge_direction: Vec2,
}

impl Boar {
    pub fn is_preparing(&self) -> bool {
        self.phase == BoarPhase::Preparing
    }

    pub fn is_charging(&self) -> bool {
        self.phase == BoarPhase::Charging
    }

    /// Вернуть в состояние "только что заспавнился"
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Troll — heavy melee с плавным поворотом
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Troll {
    /// Куда хотим смотреть (радианы); Motion.angle догоняет его
    pub desired_angle: f32,
    /// До следующего смеха (ms)
    pub laugh_cooldown: f32,
}

impl Default for Troll {
    fn default() -> Self {
        Self {
            desired_angle: 0.0,
            laugh_cooldown: 20_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum BomberPhase {
    #[default]
    Approaching,
    /// Стоит, смотрит на цель, ждёт throw_bomb_delay
    Aiming,
}

/// Bomber — grenadier
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Bomber {
    pub phase: BomberPhase,
    /// Текущий порог прицеливания (перебрасывается с jitter после броска)
    pub throw_bomb_delay: f32,
    /// Накоплено в Aiming (ms)
    pub throw_bomb_delay_timer: f32,
}

impl Default for Bomber {
    fn default() -> Self {
        Self {
            phase: BomberPhase::Approaching,
            throw_bomb_delay: 1500.0,
            throw_bomb_delay_timer: 0.0,
        }
    }
}

impl Bomber {
    pub fn is_aiming(&self) -> bool {
        self.phase == BomberPhase::Aiming
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum ArcherPhase {
    #[default]
    Approaching,
    /// Натягивает тетиву (стоит)
    Aiming,
}

/// Archer — ranged, стреляет только при чистой линии
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Archer {
    pub phase: ArcherPhase,
    pub draw_arrow_time: f32,
}

impl Archer {
    pub fn is_aiming(&self) -> bool {
        self.phase == ArcherPhase::Aiming
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum BirdPhase {
    #[default]
    Flocking,
    /// Пикирование по зафиксированному направлению
    Swooping,
    /// Набор высоты обратно до original_z
    Returning,
}

/// Bird — летает стаей, периодически пикирует на игрока
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Bird {
    pub phase: BirdPhase,
    /// Доля Motion.speed в стае (пикирование — полная скорость)
    pub swarm_speed: f32,
    /// Вертикальная скорость пикирования/набора высоты (units/ms)
    pub swoop_speed: f32,
    /// Накоплено в Swooping (ms)
    pub swoop_timer: f32,
    pub swoop_direction: Vec2,
    /// Крейсерская высота (запоминается при старте пикирования)
    pub original_z: f32,
    /// До следующего пикирования (ms), у каждой птицы свой
    pub swoop_cooldown: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            phase: BirdPhase::Flocking,
            swarm_speed: 0.6,
            swoop_speed: 0.5,
            swoop_timer: 0.0,
            swoop_direction: Vec2::ZERO,
            original_z: 480.0,
            swoop_cooldown: 2000.0,
        }
    }
}

impl Bird {
    pub fn is_swooping(&self) -> bool {
        self.phase == BirdPhase::Swooping
    }
}

/// Состояния caster'а; активный таймер определяется только этим enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum WizardState {
    #[default]
    Moving,
    Preparing,
    Aiming,
    Shooting,
}

/// Wizard — caster (fireball / молния)
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Wizard {
    pub state: WizardState,
    /// Moving: до следующей атаки (ms)
    pub shoot_cooldown: f32,
    /// Preparing: накоплено (ms)
    pub prepare_timer: f32,
    /// Aiming: накоплено (ms)
    pub aim_timer: f32,
    /// Фиксируется при входе в Preparing, обновляется в Aiming
    pub locked_target: Vec3,
}
