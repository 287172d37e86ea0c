//! Obstacle Avoider mini-game
//!
//! Obstacles cross the field right to left; the player holds a fixed x and
//! dodges with a transient press window. Surviving trickles points, the
//! round countdown interrupts with a trivia question, and collisions cost
//! lives through the shared session.

use super::countdown::{CountdownStep, RoundCountdown};
use super::field::{Entity, EntityField};
use super::state::{GameEvent, Points, Session};
use super::tick::TickInput;
use crate::consts::avoider::*;

/// Obstacle payload: a horizontal crosser; its x is derived from the
/// entity's motion progress, so no per-tick position state is needed.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle;

/// Current x of an obstacle, linear from the right edge to past the left
pub fn obstacle_x(entity: &Entity<Obstacle>, now: u64) -> f32 {
    SPAWN_X + (EXIT_X - SPAWN_X) * entity.progress(now)
}

#[derive(Debug, Clone)]
pub struct AvoiderGame {
    field: EntityField<Obstacle>,
    countdown: RoundCountdown,
    /// Edge-to-edge travel time for newly spawned obstacles
    travel_ticks: u32,
    /// Ticks until the next spawn
    spawn_in: u32,
    /// Ticks until the next difficulty step
    ramp_in: u32,
    /// Remaining dodge invulnerability
    dodge_ticks: u32,
}

impl Default for AvoiderGame {
    fn default() -> Self {
        Self::new()
    }
}

impl AvoiderGame {
    pub fn new() -> Self {
        Self {
            field: EntityField::new(),
            countdown: RoundCountdown::new(FIRST_ROUND_SECS, ROUND_SECS),
            travel_ticks: START_TRAVEL_TICKS,
            spawn_in: SPAWN_INTERVAL_TICKS,
            ramp_in: RAMP_INTERVAL_TICKS,
            dodge_ticks: 0,
        }
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Entity<Obstacle>> {
        self.field.iter()
    }

    /// The dodge window exempts the player from collisions while active
    pub fn is_dodging(&self) -> bool {
        self.dodge_ticks > 0
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.seconds_remaining()
    }

    /// Shared answer logic: next round starts from a full countdown
    pub fn reset_countdown(&mut self) {
        self.countdown.reset();
    }

    /// Restart callback content: clear obstacles, restore the spawn pace
    pub fn reset(&mut self) {
        self.field.clear();
        self.countdown.reset();
        self.travel_ticks = START_TRAVEL_TICKS;
        self.spawn_in = SPAWN_INTERVAL_TICKS;
        self.ramp_in = RAMP_INTERVAL_TICKS;
        self.dodge_ticks = 0;
    }

    /// Advance one unfrozen tick
    pub(crate) fn tick(
        &mut self,
        now: u64,
        input: &TickInput,
        session: &mut Session,
        events: &mut Vec<GameEvent>,
    ) {
        // Dodge window: a press opens/refreshes it, release closes it early.
        if input.dodge_pressed {
            self.dodge_ticks = DODGE_TICKS;
        }
        if input.dodge_released {
            self.dodge_ticks = 0;
        } else {
            self.dodge_ticks = self.dodge_ticks.saturating_sub(1);
        }

        // Obstacles that finished their crossing leave silently.
        self.field.drain_expired(now);

        self.spawn_in -= 1;
        if self.spawn_in == 0 {
            self.spawn_in = SPAWN_INTERVAL_TICKS;
            self.field.spawn(now, self.travel_ticks, Obstacle);
        }

        // Difficulty ramp: newer obstacles cross faster, down to a floor.
        self.ramp_in -= 1;
        if self.ramp_in == 0 {
            self.ramp_in = RAMP_INTERVAL_TICKS;
            self.travel_ticks = self
                .travel_ticks
                .saturating_sub(RAMP_STEP_TICKS)
                .max(MIN_TRAVEL_TICKS);
            log::debug!("obstacle travel time now {} ticks", self.travel_ticks);
        }

        match self.countdown.tick() {
            CountdownStep::Running => {}
            CountdownStep::SecondElapsed => {
                session.earn_points(Points::from_hundredths(TRICKLE_CENTIPOINTS));
            }
            CountdownStep::Expired => {
                session.earn_points(Points::from_hundredths(TRICKLE_CENTIPOINTS));
                if session.show_quiz() {
                    events.push(GameEvent::QuizRequested);
                }
            }
        }

        // Collision scan. The quiz may have fired this very tick; re-check
        // right before dealing damage.
        if !self.is_dodging() && !session.is_frozen() {
            let hits: Vec<u32> = self
                .field
                .iter()
                .filter(|e| (obstacle_x(e, now) - PLAYER_X).abs() < COLLISION_RANGE)
                .map(|e| e.id)
                .collect();
            for id in hits {
                if self.field.resolve(id) {
                    events.push(GameEvent::ObstacleHit);
                    if session.lose_life() {
                        events.push(if session.is_game_over() {
                            GameEvent::GameOver
                        } else {
                            GameEvent::LifeLost
                        });
                    }
                }
            }
        }
    }
}
