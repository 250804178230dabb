use crate::combat::WeaknessMap;

/// Hull, armor and shields of one combatant.
///
/// `hull` is signed: damage may push it below zero, and any value `<= 0`
/// means destroyed. Use [`CombatantState::display_hull`] for output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub name: String,
    pub hull: i32,
    /// Shown in status lines, never consumed.
    pub armor: u32,
    pub shields: u32,
    /// Empty for the player, who takes every damage type at face value.
    pub weakness: WeaknessMap,
}

impl CombatantState {
    pub fn new(name: impl Into<String>, hull: u32, armor: u32, shields: u32) -> Self {
        Self {
            name: name.into(),
            hull: i32::try_from(hull).unwrap_or(i32::MAX),
            armor,
            shields,
            weakness: WeaknessMap::new(),
        }
    }

    #[must_use]
    pub fn with_weakness(mut self, weakness: WeaknessMap) -> Self {
        self.weakness = weakness;
        self
    }

    pub const fn is_destroyed(&self) -> bool {
        self.hull <= 0
    }

    /// Hull clamped at zero.
    pub const fn display_hull(&self) -> u32 {
        if self.hull < 0 { 0 } else { self.hull as u32 }
    }

    /// `"<name>: Hull H | Armor A | Shields S"`.
    pub fn status_line(&self) -> String {
        format!(
            "{}: Hull {} | Armor {} | Shields {}",
            self.name,
            self.display_hull(),
            self.armor,
            self.shields
        )
    }
}
