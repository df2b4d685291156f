//! Game configuration

use crate::board::Player;

/// Rule options for a game.
///
/// The defaults give the plain rule set: White opens, non-capturing moves
/// are always allowed, and a chain may repeat its previous direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side that makes the first move
    pub first_player: Player,
    /// Reject non-capturing moves while any capture is available
    pub mandatory_capture: bool,
    /// Reject chain steps that repeat the previous step's direction
    pub forbid_repeated_direction: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Player::White,
            mandatory_capture: false,
            forbid_repeated_direction: false,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tournament rules: captures are compulsory and a chain must change
    /// direction on every step.
    pub fn strict() -> Self {
        Self {
            mandatory_capture: true,
            forbid_repeated_direction: true,
            ..Self::default()
        }
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_mandatory_capture(mut self, enabled: bool) -> Self {
        self.mandatory_capture = enabled;
        self
    }

    pub fn with_forbid_repeated_direction(mut self, enabled: bool) -> Self {
        self.forbid_repeated_direction = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.first_player, Player::White);
        assert!(!config.mandatory_capture);
        assert!(!config.forbid_repeated_direction);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_first_player(Player::Black)
            .with_mandatory_capture(true);
        assert_eq!(config.first_player, Player::Black);
        assert!(config.mandatory_capture);
        assert!(!config.forbid_repeated_direction);

        let strict = GameConfig::strict();
        assert!(strict.mandatory_capture && strict.forbid_repeated_direction);
        assert_eq!(strict.first_player, Player::White);
    }
}
