//! Session state machine and core simulation types
//!
//! The session (lives, points, phase) is shared by every mini-game; the
//! drivers own their entities and countdowns and report back through it.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avoider::AvoiderGame;
use super::tapper::TapperGame;
use crate::consts::*;
use crate::settings::GameKind;

/// Score in hundredths of a point.
///
/// Play accrues fractional increments (0.05 per survived second or tapped
/// target) on top of whole points from correct answers; fixed-point keeps
/// the sim deterministic and comparison exact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Points(u64);

impl Points {
    pub const ZERO: Points = Points(0);

    pub const fn from_whole(points: u64) -> Self {
        Points(points * 100)
    }

    pub const fn from_hundredths(hundredths: u64) -> Self {
        Points(hundredths)
    }

    pub const fn hundredths(&self) -> u64 {
        self.0
    }
}

impl std::ops::Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Round countdown expired, a trivia question must be answered
    QuizPending,
    /// Lives ran out; the pending question doubles as a "continue?" prompt
    GameOver,
}

/// How an answer was resolved, so the caller applies side effects exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct answer: caller grants the reward and resumes the round
    Correct,
    /// Wrong answer with lives remaining: round ends, no life lost
    Wrong,
    /// Wrong answer on the game-over prompt: caller must restart the session
    RestartRequested,
}

/// The shared lives/points/phase state machine.
///
/// Drivers never touch lives or points directly; they call the mutators,
/// which self-gate on the pause flag and the pending-quiz phase. That gating
/// is the fairness guarantee: no damage while the settings panel or a
/// question is on screen.
#[derive(Debug, Clone)]
pub struct Session {
    lives: u8,
    points: Points,
    phase: SessionPhase,
    /// Mirror of the externally owned settings-panel flag
    paused: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            lives: START_LIVES,
            points: Points::ZERO,
            phase: SessionPhase::Playing,
            paused: false,
        }
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn points(&self) -> Points {
        self.points
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// A trivia prompt must be shown and gameplay is frozen
    pub fn is_quiz_to_answer(&self) -> bool {
        matches!(self.phase, SessionPhase::QuizPending | SessionPhase::GameOver)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Update the pause mirror from the shell's settings-panel flag
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Timers and mutations are inert under this condition
    pub fn is_frozen(&self) -> bool {
        self.paused || self.is_quiz_to_answer()
    }

    /// Take a hit. No-op while frozen. Returns true if the hit landed.
    ///
    /// Lives bottom out at 1: the transition from 1 sets game over instead
    /// of decrementing, so 0 is never observed.
    pub fn lose_life(&mut self) -> bool {
        if self.is_frozen() {
            return false;
        }
        debug_assert!(self.lives >= 1);

        if self.lives > 1 {
            self.lives -= 1;
            log::debug!("life lost, {} remaining", self.lives);
        } else {
            self.phase = SessionPhase::GameOver;
            log::info!("game over at {} points", self.points);
        }
        true
    }

    /// Unconditional life grant; callers check pause/quiz state themselves
    pub fn earn_lives(&mut self, lives: u8) {
        self.lives = self.lives.saturating_add(lives);
    }

    /// Unconditional point grant; callers check pause/quiz state themselves
    pub fn earn_points(&mut self, points: Points) {
        self.points += points;
    }

    /// Interrupt the round with a trivia question. No-op while paused or
    /// while a question is already pending.
    pub fn show_quiz(&mut self) -> bool {
        if self.paused || self.is_quiz_to_answer() {
            return false;
        }
        self.phase = SessionPhase::QuizPending;
        log::debug!("quiz requested");
        true
    }

    /// Resolve the pending question. The caller applies the outcome's side
    /// effects (reward, countdown reset, or restart) exactly once.
    pub fn on_answer(&mut self, correct: bool) -> AnswerOutcome {
        if correct {
            self.phase = SessionPhase::Playing;
            AnswerOutcome::Correct
        } else if self.is_game_over() {
            // A wrong answer to the continue? prompt confirms the reset.
            AnswerOutcome::RestartRequested
        } else {
            self.phase = SessionPhase::Playing;
            AnswerOutcome::Wrong
        }
    }

    /// Reset to initial values, then run the driver's own reset synchronously
    /// so entities and countdown clear in the same logical step.
    pub fn restart_with<F: FnOnce()>(&mut self, reset: F) {
        self.lives = START_LIVES;
        self.points = Points::ZERO;
        self.phase = SessionPhase::Playing;
        log::info!("session restarted");
        reset();
    }
}

/// Gameplay events for the shell (UI, sfx), drained each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LifeLost,
    GameOver,
    /// Round countdown expired; the shell should fetch and show a question
    QuizRequested,
    ObstacleHit,
    TargetTapped,
    TargetMissed,
    AnswerCorrect,
    AnswerWrong,
    Restarted,
}

/// The mounted mini-game driver
#[derive(Debug, Clone)]
pub enum MiniGame {
    Avoider(AvoiderGame),
    Tapper(TapperGame),
}

impl MiniGame {
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::AvoidObstacle => MiniGame::Avoider(AvoiderGame::new()),
            GameKind::Tapper => MiniGame::Tapper(TapperGame::new()),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            MiniGame::Avoider(_) => GameKind::AvoidObstacle,
            MiniGame::Tapper(_) => GameKind::Tapper,
        }
    }

    /// Restart callback content: clear entities, reset pacing and countdown
    pub fn reset(&mut self) {
        match self {
            MiniGame::Avoider(game) => game.reset(),
            MiniGame::Tapper(game) => game.reset(),
        }
    }

    /// Shared answer logic: the next round starts from a full countdown
    pub fn reset_countdown(&mut self) {
        match self {
            MiniGame::Avoider(game) => game.reset_countdown(),
            MiniGame::Tapper(game) => game.reset_countdown(),
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        match self {
            MiniGame::Avoider(game) => game.seconds_remaining(),
            MiniGame::Tapper(game) => game.seconds_remaining(),
        }
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter; does not advance while frozen
    pub time_ticks: u64,
    pub session: Session,
    pub game: MiniGame,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(kind: GameKind, seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            session: Session::new(),
            game: MiniGame::new(kind),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Drain events accumulated since the last call (shell-facing)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Full restart (shell restart button): session reset plus the driver's
    /// own reset in one synchronous step.
    pub fn restart(&mut self) {
        let Self {
            session,
            game,
            events,
            ..
        } = self;
        session.restart_with(|| game.reset());
        events.push(GameEvent::Restarted);
    }
}
