//! Game settings and preferences
//!
//! Owned by the settings shell: which mini-game is mounted, the emoji skin,
//! and the trivia category forwarded opaquely to the quiz source. The shell
//! also owns the panel-open flag that pauses the sim; that flag travels in
//! `TickInput`, not here.

use serde::{Deserialize, Serialize};

/// Which mini-game the shell mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameKind {
    #[default]
    AvoidObstacle,
    Tapper,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::AvoidObstacle => "Avoid Obstacle",
            GameKind::Tapper => "Tapper",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "avoid obstacle" | "avoid" | "avoider" => Some(GameKind::AvoidObstacle),
            "tapper" | "tap" => Some(GameKind::Tapper),
            _ => None,
        }
    }
}

/// Open Trivia DB category id, forwarded opaquely to the quiz source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory(pub u32);

impl QuizCategory {
    /// A few categories the settings picker offers
    pub const GENERAL_KNOWLEDGE: QuizCategory = QuizCategory(9);
    pub const FILM: QuizCategory = QuizCategory(11);
    pub const SCIENCE_AND_NATURE: QuizCategory = QuizCategory(17);
    pub const SPORTS: QuizCategory = QuizCategory(21);
    pub const GEOGRAPHY: QuizCategory = QuizCategory(22);

    /// The `category=` query parameter value
    pub fn api_id(&self) -> u32 {
        self.0
    }
}

/// Player preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Selected mini-game
    pub game: GameKind,
    /// Avoider skin
    pub player_emoji: String,
    pub obstacle_emoji: String,
    /// Tapper skin
    pub target_emoji: String,
    /// Shared lives display
    pub life_emoji: String,
    /// Trivia category filter; None means any category
    pub quiz_category: Option<QuizCategory>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameKind::default(),
            player_emoji: "🐟".to_string(),
            obstacle_emoji: "🦈".to_string(),
            target_emoji: "🎯".to_string(),
            life_emoji: "❤️".to_string(),
            quiz_category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_kind_round_trips_through_strings() {
        for kind in [GameKind::AvoidObstacle, GameKind::Tapper] {
            assert_eq!(GameKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(GameKind::from_str("tap"), Some(GameKind::Tapper));
        assert_eq!(GameKind::from_str("pinball"), None);
    }

    #[test]
    fn settings_serde_round_trip() {
        let mut settings = Settings::default();
        settings.game = GameKind::Tapper;
        settings.quiz_category = Some(QuizCategory::SCIENCE_AND_NATURE);

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn defaults_match_the_stock_skin() {
        let settings = Settings::default();
        assert_eq!(settings.player_emoji, "🐟");
        assert_eq!(settings.obstacle_emoji, "🦈");
        assert_eq!(settings.life_emoji, "❤️");
        assert_eq!(settings.quiz_category, None);
    }
}
