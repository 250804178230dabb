/// What the player chose to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerAction {
    /// Fire every installed weapon.
    Attack,
    EmergencyPower,
    Scan,
    Retreat,
    /// Unrecognized input. The turn passes and the enemy still attacks.
    Skip,
}

impl PlayerAction {
    /// Menu shown to the player, in selection order.
    pub const MENU: [(&'static str, Self); 4] = [
        ("1", Self::Attack),
        ("2", Self::EmergencyPower),
        ("3", Self::Scan),
        ("4", Self::Retreat),
    ];

    /// Parses free-form input. Anything unrecognized becomes [`PlayerAction::Skip`].
    pub fn from_input(input: &str) -> Self {
        let normalized = input.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "attack" | "fire" => Self::Attack,
            "2" | "emergency power" | "emergency_power" | "emergency" => Self::EmergencyPower,
            "3" | "scan" | "scan enemy" => Self::Scan,
            "4" | "retreat" | "flee" => Self::Retreat,
            _ => Self::Skip,
        }
    }

    /// Human label for menus.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::EmergencyPower => "Emergency Power",
            Self::Scan => "Scan Enemy",
            Self::Retreat => "Retreat",
            Self::Skip => "Skip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_keys_and_words() {
        assert_eq!(PlayerAction::from_input("1"), PlayerAction::Attack);
        assert_eq!(PlayerAction::from_input(" 2 \n"), PlayerAction::EmergencyPower);
        assert_eq!(PlayerAction::from_input("SCAN"), PlayerAction::Scan);
        assert_eq!(PlayerAction::from_input("retreat"), PlayerAction::Retreat);
    }

    #[test]
    fn unknown_input_skips() {
        assert_eq!(PlayerAction::from_input(""), PlayerAction::Skip);
        assert_eq!(PlayerAction::from_input("5"), PlayerAction::Skip);
        assert_eq!(PlayerAction::from_input("dance"), PlayerAction::Skip);
    }
}
