//! Idle/demo autopilot
//!
//! Reads the session and synthesizes the keys a reasonable player would
//! hold this tick. Used for the attract loop and the headless demo.

use super::collision::Rect;
use super::input::Keys;
use super::obstacle::ObstacleKind;
use super::state::{GamePhase, Session};
use crate::consts::*;

/// Ticks of warning before an obstacle reaches the player
const REACTION_TICKS: f32 = 6.0;
/// Ticks before the ledge at which to take off over a gap
const LEDGE_TICKS: f32 = 1.5;

/// Keys the autopilot wants held for the coming tick
pub fn decide(state: &Session) -> Keys {
    match state.phase {
        GamePhase::NotStarted => return Keys::START,
        GamePhase::GameOver => return Keys::RESTART,
        GamePhase::Running => {}
    }

    let player = &state.player;
    let front = PLAYER_X + PLAYER_WIDTH;
    let reach = state.speed * REACTION_TICKS;

    // Nearest obstacle that has not fully passed the player
    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.rect.right() > PLAYER_X && o.rect.x - front < reach)
        .min_by(|a, b| a.rect.x.total_cmp(&b.rect.x));

    if let Some(obstacle) = threat {
        return match obstacle.kind {
            ObstacleKind::Duck => Keys::DOWN,
            ObstacleKind::Jump if player.on_ground => Keys::JUMP,
            ObstacleKind::Jump => Keys::empty(),
        };
    }

    let body = Rect::new(PLAYER_X, player.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT);

    if player.on_ground {
        // Take off at the end of a platform that is followed by a gap
        let current = state
            .platforms
            .iter()
            .position(|p| body.overlaps_span(p.x, p.width));
        if let Some(i) = current {
            let ledge = state.platforms[i].right();
            let gap_follows = state
                .platforms
                .get(i + 1)
                .is_none_or(|next| next.x > ledge);
            if gap_follows && ledge - front < state.speed * LEDGE_TICKS {
                return Keys::JUMP;
            }
        }
        return Keys::empty();
    }

    // Falling with nothing below: spend the flip
    let ground_below = state
        .platforms
        .iter()
        .any(|p| body.overlaps_span(p.x, p.width));
    if player.vel_y > 0.0 && !player.has_double_jumped && !ground_below {
        return Keys::JUMP;
    }

    Keys::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::platform::Platform;
    use crate::tuning::Tuning;

    fn running() -> Session {
        let mut state = Session::new(9, Tuning::flat_and_empty());
        state.start();
        state
    }

    #[test]
    fn test_starts_and_restarts() {
        let mut state = Session::new(9, Tuning::default());
        assert_eq!(decide(&state), Keys::START);
        state.phase = GamePhase::GameOver;
        assert_eq!(decide(&state), Keys::RESTART);
    }

    #[test]
    fn test_runs_idle_on_open_ground() {
        assert_eq!(decide(&running()), Keys::empty());
    }

    #[test]
    fn test_jumps_near_jump_obstacle() {
        let mut state = running();
        state.obstacles.push(Obstacle::new(200.0, GROUND_Y, ObstacleKind::Jump));
        assert_eq!(decide(&state), Keys::JUMP);

        // Too far away to react yet
        state.obstacles[0].rect.x = 800.0;
        assert_eq!(decide(&state), Keys::empty());
    }

    #[test]
    fn test_slides_under_duck_obstacle() {
        let mut state = running();
        state.obstacles.push(Obstacle::new(200.0, GROUND_Y, ObstacleKind::Duck));
        assert_eq!(decide(&state), Keys::DOWN);
    }

    #[test]
    fn test_jumps_at_ledge_before_gap() {
        let mut state = running();
        state.platforms = vec![
            Platform::new(0.0, PLAYER_X + PLAYER_WIDTH + 5.0, false),
            Platform::new(PLAYER_X + PLAYER_WIDTH + 150.0, 300.0, true),
        ];
        assert_eq!(decide(&state), Keys::JUMP);
    }

    #[test]
    fn test_flips_when_falling_over_gap() {
        let mut state = running();
        state.platforms = vec![Platform::new(400.0, 300.0, true)];
        state.player.on_ground = false;
        state.player.vel_y = 2.0;
        assert_eq!(decide(&state), Keys::JUMP);

        state.player.has_double_jumped = true;
        assert_eq!(decide(&state), Keys::empty());
    }
}
