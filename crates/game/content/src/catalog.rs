//! Built-in content used when no data directory is available.
//!
//! The shipped `data/` files mirror these definitions. Tests and the
//! in-memory oracles can rely on this catalog without touching disk.

use combat_core::{
    DamageType, EnemyTemplate, ModuleDefinition, ModuleKind, Multiplier, PilotRecord, RollRange,
    UtilityEffect, WeaknessMap, WeaponData,
};

/// Id of the enemy engaged when none is requested.
pub const DEFAULT_ENEMY_ID: &str = "pirate_sholen";

/// Name given to a fresh pilot.
pub const DEFAULT_PILOT_NAME: &str = "ShiroWalker";

fn weapon(id: &str, data: WeaponData, description: &str) -> ModuleDefinition {
    ModuleDefinition::new(id, ModuleKind::Weapon(data)).with_description(description)
}

fn mining(id: &str, power_cost: u32, efficiency: u32, description: &str) -> ModuleDefinition {
    ModuleDefinition::new(
        id,
        ModuleKind::Mining {
            power_cost,
            efficiency: Multiplier::from_hundredths(efficiency),
        },
    )
    .with_description(description)
}

fn utility(id: &str, effect: UtilityEffect, description: &str) -> ModuleDefinition {
    ModuleDefinition::new(id, ModuleKind::Utility(effect)).with_description(description)
}

fn special(id: &str, description: &str) -> ModuleDefinition {
    ModuleDefinition::new(id, ModuleKind::Special).with_description(description)
}

/// Every module a ship can install.
pub fn builtin_modules() -> Vec<ModuleDefinition> {
    vec![
        weapon(
            "Pulse Laser",
            WeaponData::new(DamageType::Energy, RollRange::new(12, 22)).with_power_cost(15),
            "Standard ship laser, reliable mid-range energy weapon.",
        ),
        weapon(
            "Mass Driver",
            WeaponData::new(DamageType::Kinetic, RollRange::new(8, 16))
                .with_ammo_cost(2)
                .with_power_cost(5),
            "Kinetic slug thrower, uses ammo but effective against armor.",
        ),
        weapon(
            "Plasma Cannon",
            WeaponData::new(DamageType::Blast, RollRange::new(16, 28))
                .with_ammo_cost(3)
                .with_power_cost(12),
            "High-damage plasma bolt weapon; heavy power and ammo usage.",
        ),
        weapon(
            "Beam Lance",
            WeaponData::new(DamageType::Energy, RollRange::new(24, 38)).with_power_cost(20),
            "Advanced beam weapon that cuts through armor at close range.",
        ),
        mining(
            "Basic Mining Drill",
            5,
            100,
            "Entry-level mining laser with standard yield output.",
        ),
        mining(
            "Advanced Drill",
            8,
            140,
            "Improved mining rig for faster extraction and better yields.",
        ),
        mining(
            "Industrial Excavator",
            15,
            200,
            "Heavy-duty mining unit, optimized for rich ore belts.",
        ),
        utility(
            "Cargo Pod",
            UtilityEffect::CargoBonus(25),
            "Increases cargo capacity by +25 units.",
        ),
        utility(
            "Medium Cargo Bay",
            UtilityEffect::CargoBonus(60),
            "Expanded cargo space for trade or transport.",
        ),
        utility(
            "Passenger Hold",
            UtilityEffect::PassengerCapacity(10),
            "Allows for carrying passengers on missions.",
        ),
        utility(
            "Shield Booster",
            UtilityEffect::ShieldBonus(15),
            "Improves total shield capacity.",
        ),
        utility(
            "Reactor Upgrade",
            UtilityEffect::PowerBonus(10),
            "Increases base power grid output for sustained combat.",
        ),
        utility(
            "Nanite Repair Bay",
            UtilityEffect::RepairRate(5),
            "Slowly regenerates hull integrity after combat.",
        ),
        special(
            "Scanner Array",
            "Increases scan success rate when surveying belts or ships.",
        ),
        special("Warp Stabilizer", "Reduces fuel consumption by 10%."),
        special(
            "Pirate Transponder",
            "Masks your identity from pirates; reduces ambush chance.",
        ),
    ]
}

/// The pirate raider fought in ambushes.
pub fn pirate_raider() -> EnemyTemplate {
    EnemyTemplate {
        id: DEFAULT_ENEMY_ID.to_owned(),
        name: "Sholen Raider".to_owned(),
        class: "Frigate".to_owned(),
        hull: 100,
        armor: 98,
        shields: 60,
        weakness: WeaknessMap::new()
            .with(DamageType::Kinetic, Multiplier::from_hundredths(110))
            .with(DamageType::Energy, Multiplier::from_hundredths(90))
            .with(DamageType::Blast, Multiplier::from_hundredths(120)),
        damage: RollRange::new(8, 18),
        accuracy: 12,
    }
}

pub fn builtin_enemies() -> Vec<EnemyTemplate> {
    vec![pirate_raider()]
}

pub fn starter_pilot() -> PilotRecord {
    PilotRecord::starter(DEFAULT_PILOT_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_ids_are_unique() {
        let modules = builtin_modules();
        let mut ids: Vec<_> = modules.iter().map(|def| def.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), modules.len());
    }

    #[test]
    fn starter_loadout_is_known() {
        let modules = builtin_modules();
        for id in starter_pilot().modules.iter() {
            assert!(modules.iter().any(|def| &def.id == id), "{id} missing");
        }
    }

    #[test]
    fn mass_driver_pays_in_ammo() {
        let driver = builtin_modules()
            .into_iter()
            .find(|def| def.id.as_str() == "Mass Driver")
            .and_then(|def| def.kind.weapon())
            .unwrap();
        assert_eq!(
            driver.cost(),
            Some(combat_core::ResourceCost::new(combat_core::ResourceKind::Ammo, 2))
        );
    }
}
