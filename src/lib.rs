//! Trivia Rush - arcade mini-games interrupted by trivia questions
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session state machine, entity fields, tick loop)
//! - `quiz`: Trivia question model and Open Trivia DB wire parsing
//! - `settings`: Player preferences (emojis, selected game, quiz category)
//!
//! Rendering, touch input and the actual network fetch live outside this
//! crate; the shell drives `sim::tick` with a `TickInput` each 100 ms and
//! reads back state plus drained `GameEvent`s.

pub mod quiz;
pub mod settings;
pub mod sim;

pub use quiz::{Question, QuizError, QuizSource};
pub use settings::{GameKind, QuizCategory, Settings};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (one tick per collision scan, 100 ms)
    pub const TICK_HZ: u32 = 10;
    /// Ticks per whole second of game time
    pub const TICKS_PER_SECOND: u32 = TICK_HZ;

    /// Play field dimensions (logical pixels, portrait phone)
    pub const PLAY_WIDTH: f32 = 360.0;
    pub const PLAY_HEIGHT: f32 = 640.0;

    /// Session defaults
    pub const START_LIVES: u8 = 3;
    /// Lives granted for a correct trivia answer
    pub const ANSWER_REWARD_LIVES: u8 = 1;
    /// Whole points granted for a correct trivia answer
    pub const ANSWER_REWARD_POINTS: u64 = 1;

    /// Obstacle Avoider tuning
    pub mod avoider {
        use super::{ms_to_ticks, PLAY_WIDTH};

        /// Player sits at a fixed quarter of the field width
        pub const PLAYER_X: f32 = PLAY_WIDTH / 4.0;
        /// Obstacles spawn at the right edge and exit past the left edge
        pub const SPAWN_X: f32 = PLAY_WIDTH;
        pub const EXIT_X: f32 = -50.0;
        /// Collision range between player and obstacle centers (px)
        pub const COLLISION_RANGE: f32 = 20.0;

        /// Spawn cadence
        pub const SPAWN_INTERVAL_TICKS: u32 = ms_to_ticks(2000);
        /// Initial edge-to-edge travel time
        pub const START_TRAVEL_TICKS: u32 = ms_to_ticks(4000);
        /// Travel time lost per difficulty ramp step
        pub const RAMP_STEP_TICKS: u32 = ms_to_ticks(500);
        /// Travel time floor; the game stays theoretically dodgeable
        pub const MIN_TRAVEL_TICKS: u32 = ms_to_ticks(1500);
        /// Difficulty ramp cadence
        pub const RAMP_INTERVAL_TICKS: u32 = ms_to_ticks(30_000);

        /// Dodge invulnerability window after a press
        pub const DODGE_TICKS: u32 = ms_to_ticks(500);

        /// First round is short, later rounds run the full length
        pub const FIRST_ROUND_SECS: u32 = 5;
        pub const ROUND_SECS: u32 = 20;
        /// Survival trickle per countdown second, in hundredths of a point
        pub const TRICKLE_CENTIPOINTS: u64 = 5;
    }

    /// Target Tapper tuning
    pub mod tapper {
        use super::ms_to_ticks;

        /// Rendered target size (px)
        pub const TARGET_SIZE: f32 = 60.0;
        /// Vertical band reserved for the HUD at top and bottom
        pub const TOP_MARGIN: f32 = 100.0;
        /// Right-edge margin keeping spawned targets fully on screen
        pub const SPAWN_MARGIN_X: f32 = 100.0;

        pub const SPAWN_INTERVAL_TICKS: u32 = ms_to_ticks(1000);
        /// Visibility window before an untapped target counts as a miss
        pub const LIFETIME_TICKS: u32 = ms_to_ticks(2000);

        /// Every round, including the first, is this short
        pub const ROUND_SECS: u32 = 4;
        /// Reward per tapped target, in hundredths of a point
        pub const TAP_CENTIPOINTS: u64 = 5;
    }

    /// Convert a wall-clock duration in milliseconds to whole ticks
    pub const fn ms_to_ticks(ms: u32) -> u32 {
        ms * TICK_HZ / 1000
    }
}
