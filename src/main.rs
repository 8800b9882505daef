//! Stardrift entry point
//!
//! Owns the fixed-timestep loop and drives the sim headlessly with a
//! scripted input sequence: events are logged where a windowed frontend
//! would play sounds, the draw list is built each frame exactly as a
//! renderer would consume it, and the final state snapshot is printed as
//! JSON. A windowed frontend swaps the script for real key polling and
//! hands `render::build_frame` to its canvas.

use std::env;

use stardrift::render;
use stardrift::sim::{GameEvent, GameState, InputState, frame};

/// Demo length when `STARDRIFT_FRAMES` is unset (10 seconds at 60 Hz)
const DEFAULT_FRAMES: u64 = 600;
const DEFAULT_SEED: u64 = 0xC0FFEE;

fn main() {
    env_logger::init();

    let seed = env_u64("STARDRIFT_SEED", DEFAULT_SEED);
    let frames = env_u64("STARDRIFT_FRAMES", DEFAULT_FRAMES);
    log::info!("stardrift starting: seed={seed}, frames={frames}");

    let mut state = GameState::new(seed);

    for n in 0..frames {
        let input = demo_input(n);
        let events = frame(&mut state, &input);

        for event in events {
            match event {
                // A windowed frontend plays the pickup sample here
                GameEvent::StarCollected { star } => {
                    log::info!("beep! star {} collected, score {}", star.0, state.score);
                }
                GameEvent::StarSpawned { star } => {
                    log::debug!("star {} spawned ({} alive)", star.0, state.stars.len());
                }
            }
        }

        let draw_list = render::build_frame(&state);
        log::trace!("frame {n}: {} draw commands", draw_list.len());

        if n % 60 == 0 {
            log::info!(
                "t={:>4}s score={} stars={}",
                n / 60,
                state.score,
                state.stars.len()
            );
        }
    }

    log::info!(
        "run complete: score={} stars={} ticks={}",
        state.score,
        state.stars.len(),
        state.time_ticks
    );

    let snapshot =
        serde_json::to_string_pretty(&state).expect("game state snapshot serializes");
    println!("{snapshot}");
}

/// Scripted held-key pattern: thrust up, carve left, boost through the
/// wrap, drift right, coast.
fn demo_input(frame_index: u64) -> InputState {
    match (frame_index / 60) % 10 {
        0 | 1 => InputState {
            thrust: true,
            ..Default::default()
        },
        2 | 3 => InputState {
            thrust: true,
            left: true,
            ..Default::default()
        },
        4 => InputState {
            thrust: true,
            boost: true,
            ..Default::default()
        },
        5 | 6 => InputState {
            right: true,
            thrust: true,
            ..Default::default()
        },
        7 => InputState {
            reverse: true,
            ..Default::default()
        },
        _ => InputState::default(),
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparseable {name}={raw:?}");
            default
        }),
        Err(_) => default,
    }
}
