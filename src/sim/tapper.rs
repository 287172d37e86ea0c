//! Target Tapper mini-game
//!
//! Targets pop up at seeded-random positions and must be tapped inside a
//! fixed visibility window. Taps earn fractional points; an untapped target
//! costs a life. The round countdown is short and identical every round.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::countdown::{CountdownStep, RoundCountdown};
use super::field::{Entity, EntityField};
use super::state::{GameEvent, Points, Session};
use super::tick::TickInput;
use crate::consts::tapper::*;
use crate::consts::{PLAY_HEIGHT, PLAY_WIDTH};

/// Target payload: a fixed 2-D position for the visibility window
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub pos: Vec2,
}

#[derive(Debug, Clone)]
pub struct TapperGame {
    field: EntityField<Target>,
    countdown: RoundCountdown,
    /// Ticks until the next spawn
    spawn_in: u32,
}

impl Default for TapperGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TapperGame {
    pub fn new() -> Self {
        Self {
            field: EntityField::new(),
            countdown: RoundCountdown::new(ROUND_SECS, ROUND_SECS),
            spawn_in: SPAWN_INTERVAL_TICKS,
        }
    }

    pub fn targets(&self) -> impl Iterator<Item = &Entity<Target>> {
        self.field.iter()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.seconds_remaining()
    }

    /// Shared answer logic: next round starts from a full countdown
    pub fn reset_countdown(&mut self) {
        self.countdown.reset();
    }

    /// Restart callback content: clear targets, restart the countdown
    pub fn reset(&mut self) {
        self.field.clear();
        self.countdown.reset();
        self.spawn_in = SPAWN_INTERVAL_TICKS;
    }

    /// Advance one unfrozen tick
    pub(crate) fn tick(
        &mut self,
        now: u64,
        input: &TickInput,
        session: &mut Session,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
    ) {
        // Taps first: a tap this tick beats an expiry this tick. Resolution
        // is idempotent, so duplicate taps on one target score once.
        for &id in &input.taps {
            if self.field.resolve(id) {
                session.earn_points(Points::from_hundredths(TAP_CENTIPOINTS));
                events.push(GameEvent::TargetTapped);
            }
        }

        // Untapped targets whose window elapsed are misses.
        for _missed in self.field.drain_expired(now) {
            events.push(GameEvent::TargetMissed);
            if session.lose_life() {
                events.push(if session.is_game_over() {
                    GameEvent::GameOver
                } else {
                    GameEvent::LifeLost
                });
            }
        }

        self.spawn_in -= 1;
        if self.spawn_in == 0 {
            self.spawn_in = SPAWN_INTERVAL_TICKS;
            let pos = Vec2::new(
                rng.random_range(0.0..PLAY_WIDTH - SPAWN_MARGIN_X),
                rng.random_range(TOP_MARGIN..PLAY_HEIGHT - TOP_MARGIN),
            );
            self.field.spawn(now, LIFETIME_TICKS, Target { pos });
        }

        if let CountdownStep::Expired = self.countdown.tick() {
            if session.show_quiz() {
                events.push(GameEvent::QuizRequested);
            }
        }
    }
}
