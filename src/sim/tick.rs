//! Fixed timestep game loop
//!
//! One rendered frame = SUBSTEPS physics substeps followed by a single
//! star spawn attempt. Within a substep the ordering is fixed: drain
//! removals, reset forces, wrap position, apply input forces, step the
//! space, resolve contacts.

use crate::consts::*;
use crate::sim::shape::CollisionKind;
use crate::sim::state::{GameEvent, GameState};

/// Held-key snapshot for one rendered frame (deterministic input).
///
/// The frontend samples its keyboard once per frame; every substep of
/// that frame consults the same snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Forward thrust (exclusive with `reverse`; `reverse` loses)
    pub thrust: bool,
    pub reverse: bool,
    /// Modifier turning held thrust into full-magnitude boost
    pub boost: bool,
}

/// Advance the game by one rendered frame. Returns the events the
/// frontend should react to (sounds, HUD flashes).
pub fn frame(state: &mut GameState, input: &InputState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..SUBSTEPS {
        substep(state, input, &mut events);
    }

    if let Some(star) = state.try_spawn_star() {
        events.push(GameEvent::StarSpawned { star });
    }

    events
}

/// One physics substep. Exposed separately so tests and replay tools can
/// drive the loop at substep granularity.
pub fn substep(state: &mut GameState, input: &InputState, events: &mut Vec<GameEvent>) {
    state.drain_removals();

    let player = state.player;
    player.reset_forces(&mut state.space);
    player.validate_position(&mut state.space);

    // Steering: both keys held cancel to no net turn
    match (input.left, input.right) {
        (true, false) => player.turn_left(&mut state.space),
        (false, true) => player.turn_right(&mut state.space),
        _ => {}
    }
    // Forward thrust wins over reverse; the boost modifier upgrades it
    if input.thrust {
        if input.boost {
            player.boost(&mut state.space);
        } else {
            player.accelerate(&mut state.space);
        }
    } else if input.reverse {
        player.reverse(&mut state.space);
    }

    let contacts = state.space.step(SIM_DT);
    state.time_ticks += 1;

    for contact in contacts {
        // Ship×Star is the only pair registered for reporting
        let Some(star) = contact.body_of(CollisionKind::Star) else {
            continue;
        };
        state.score += SCORE_PER_STAR;
        log::trace!("star {} touched, score {}", star.0, state.score);
        events.push(GameEvent::StarCollected { star });
        // Collected stars stay in the world and keep scoring on later
        // contacts; nothing is queued onto `pending_removals` here.
    }
}
