//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session and the mounted mini-game
//! deterministically. The shell calls `tick` once per 100 ms with the
//! inputs gathered since the last call.

use super::state::{AnswerOutcome, GameEvent, GameState, MiniGame, Points};
use crate::consts::{ANSWER_REWARD_LIVES, ANSWER_REWARD_POINTS};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Settings panel open; the externally owned pause flag
    pub settings_open: bool,
    /// Dodge press this tick (Obstacle Avoider)
    pub dodge_pressed: bool,
    /// Dodge release this tick (Obstacle Avoider)
    pub dodge_released: bool,
    /// Target ids tapped this tick (Target Tapper)
    pub taps: Vec<u32>,
    /// Verdict for the pending trivia question, reported by the quiz resolver
    pub answer: Option<bool>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    let GameState {
        session,
        game,
        rng,
        events,
        time_ticks,
        ..
    } = state;

    session.set_paused(input.settings_open);

    // Resolve a pending answer before anything else. The settings panel
    // sits above the quiz dialog, so answers are ignored while it is open.
    if let Some(correct) = input.answer
        && session.is_quiz_to_answer()
        && !session.is_paused()
    {
        match session.on_answer(correct) {
            AnswerOutcome::Correct => {
                session.earn_lives(ANSWER_REWARD_LIVES);
                session.earn_points(Points::from_whole(ANSWER_REWARD_POINTS));
                game.reset_countdown();
                events.push(GameEvent::AnswerCorrect);
            }
            AnswerOutcome::Wrong => {
                game.reset_countdown();
                events.push(GameEvent::AnswerWrong);
            }
            AnswerOutcome::RestartRequested => {
                session.restart_with(|| game.reset());
                events.push(GameEvent::Restarted);
            }
        }
    }

    // One frozen-predicate snapshot per tick: while the settings panel or a
    // question is up every timer is inert, and nothing catches up on resume.
    if session.is_frozen() {
        return;
    }

    *time_ticks += 1;
    let now = *time_ticks;
    match game {
        MiniGame::Avoider(g) => g.tick(now, input, session, events),
        MiniGame::Tapper(g) => g.tick(now, input, session, rng, events),
    }
}
