//! Trivia Rush entry point
//!
//! Headless auto-play demo: runs the sim with a scripted input policy and
//! logs the session as it goes. Useful as a smoke test of the whole loop;
//! the real game runs inside a UI shell that drives `sim::tick` itself.
//!
//! Usage: trivia-rush [avoid|tapper] [seed] [seconds]

use trivia_rush::consts::TICKS_PER_SECOND;
use trivia_rush::settings::GameKind;
use trivia_rush::sim::{GameEvent, GameState, MiniGame, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let kind = args
        .next()
        .and_then(|s| GameKind::from_str(&s))
        .unwrap_or_default();
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xDECAF);
    let seconds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60);

    log::info!("{} demo, seed {seed}, {seconds}s", kind.as_str());

    let mut state = GameState::new(kind, seed);
    for _ in 0..seconds * TICKS_PER_SECOND {
        let input = script(&state);
        tick(&mut state, &input);

        for event in state.take_events() {
            match event {
                GameEvent::QuizRequested => log::info!("quiz time!"),
                GameEvent::GameOver => log::info!("game over"),
                event => log::debug!("{event:?}"),
            }
        }
    }

    println!(
        "{}: {} lives, {} points after {} ticks",
        kind.as_str(),
        state.session.lives(),
        state.session.points(),
        state.time_ticks
    );
}

/// Perfect-player policy: dodge constantly, tap everything, ace every quiz
fn script(state: &GameState) -> TickInput {
    if state.session.is_quiz_to_answer() {
        return TickInput {
            answer: Some(true),
            ..Default::default()
        };
    }
    match &state.game {
        MiniGame::Avoider(_) => TickInput {
            dodge_pressed: true,
            ..Default::default()
        },
        MiniGame::Tapper(game) => TickInput {
            taps: game.targets().map(|t| t.id).collect(),
            ..Default::default()
        },
    }
}
