//! Per-tick simulation step
//!
//! Advances a [`Session`] by one frame: phase transitions, player input,
//! scrolling, spawning, then collision arbitration. Nothing here draws.

use super::autopilot;
use super::input::Keys;
use super::player::JumpKind;
use super::state::{DeathCause, GameEvent, GamePhase, Session};
use crate::consts::CANVAS_HEIGHT;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held keys sampled at the start of the frame
    pub keys: Keys,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the session by one tick
///
/// Returns the keys this tick treated as one-shot presses. The caller
/// should clear them from its held set so one physical press acts once.
pub fn tick(state: &mut Session, input: &TickInput) -> Keys {
    state.events.clear();

    let keys = if input.idle_mode {
        input.keys | autopilot::decide(state)
    } else {
        input.keys
    };

    match state.phase {
        GamePhase::NotStarted => {
            if keys.contains(Keys::START) {
                state.start();
                // The press that started the run must not also jump
                return Keys::START | Keys::JUMP;
            }
            return Keys::empty();
        }
        GamePhase::GameOver => {
            if keys.contains(Keys::RESTART) {
                state.restart();
                return Keys::RESTART | Keys::JUMP;
            }
            return Keys::empty();
        }
        GamePhase::Running => {}
    }

    let mut consumed = Keys::empty();
    if keys.contains(Keys::JUMP) {
        match state.player.jump(&state.tuning) {
            Some(JumpKind::Ground) => state.events.push(GameEvent::Jumped),
            Some(JumpKind::Double) => state.events.push(GameEvent::DoubleJumped),
            None => {}
        }
        consumed |= Keys::JUMP;
    }

    advance_world(state, keys.contains(Keys::DOWN));

    if let Some(cause) = check_collisions(state) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver(cause));
    }

    consumed
}

/// Counters, speed ramp, scrolling, spawning and player physics
fn advance_world(state: &mut Session, down_held: bool) {
    state.frame_count += 1;
    state.score = state.frame_count / state.tuning.ticks_per_point;

    if state.frame_count % state.tuning.speed_interval == 0 {
        state.speed += state.tuning.speed_step;
        state.events.push(GameEvent::SpeedUp(state.speed));
    }
    let speed = state.speed;

    for layer in &mut state.layers {
        layer.scroll(speed);
    }

    for platform in &mut state.platforms {
        platform.scroll(speed);
    }
    state.platforms.retain(|p| !p.is_off_screen());
    while state.platforms.len() < state.tuning.min_platforms {
        state.spawn_platform();
    }

    for obstacle in &mut state.obstacles {
        obstacle.scroll(speed);
    }
    state.obstacles.retain(|o| !o.is_off_screen());
    state.maybe_spawn_obstacle();

    if state
        .player
        .update(down_held, &state.platforms, &state.tuning)
    {
        state.events.push(GameEvent::Landed);
    }
}

/// First obstacle overlapping the player's hitbox, or a fall off the screen
pub fn check_collisions(state: &Session) -> Option<DeathCause> {
    let hitbox = state.player.hitbox();
    if let Some(obstacle) = state.obstacles.iter().find(|o| o.collides_with(&hitbox)) {
        return Some(DeathCause::Obstacle(obstacle.kind));
    }
    if state.player.pos.y > CANVAS_HEIGHT {
        return Some(DeathCause::Fell);
    }
    None
}
