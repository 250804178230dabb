//! Combat resolution.
//!
//! Pure functions over combatant records, the resource pool and a [`Dice`]
//! stream. Nothing here performs I/O; every outcome comes back as a report
//! carrying its log lines.
//!
//! - [`resolve_volley`]: the Attack action
//! - [`emergency_power`], [`scan`], [`retreat`]: special actions
//! - [`enemy_attack`]: the enemy's turn
//! - [`mitigate`] / [`apply_damage`]: shields-before-hull absorption
//!
//! [`Dice`]: crate::env::Dice

pub mod damage;
pub mod enemy;
pub mod hit;
pub mod mitigation;
pub mod result;
pub mod special;
pub mod volley;

pub use damage::{Affinity, DamageType, Multiplier, RollRange, WeaknessMap};
pub use enemy::enemy_attack;
pub use hit::{classify_enemy_roll, classify_weapon_roll, roll_damage};
pub use mitigation::{DamageReport, apply_damage, mitigate};
pub use result::{AttackOutcome, EnemyAttackReport, ShotOutcome, ShotResult, VolleyReport};
pub use special::{
    EmergencyPowerOutcome, EmergencyPowerReport, RetreatReport, ScanEntry, ScanReport,
    emergency_power, retreat, scan,
};
pub use volley::resolve_volley;
