//! Frame driver
//!
//! One call to [`FrameDriver::frame`] per display refresh: sample input,
//! tick the session, draw, publish the score. The host owns scheduling.

use crate::distance_label;
use crate::render::{DrawSink, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, InputState, Session, TickInput, tick};
use crate::tuning::Tuning;

/// External text display for the running score
pub trait ScoreDisplay {
    fn show(&mut self, label: &str);
}

/// Discards score updates (headless use)
impl ScoreDisplay for () {
    fn show(&mut self, _label: &str) {}
}

pub struct FrameDriver {
    pub session: Session,
    pub input: InputState,
    pub settings: Settings,
    /// Let the autopilot play
    pub idle_mode: bool,
    last_phase: GamePhase,
}

impl FrameDriver {
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let session = Session::new(seed, tuning);
        let last_phase = session.phase;
        Self {
            session,
            input: InputState::new(),
            settings,
            idle_mode: false,
            last_phase,
        }
    }

    /// Advance the simulation one tick without drawing
    pub fn step(&mut self) {
        let input = TickInput {
            keys: self.input.snapshot(),
            idle_mode: self.idle_mode,
        };
        let consumed = tick(&mut self.session, &input);
        // One physical press, one action
        self.input.consume(consumed);

        self.log_tick();
    }

    /// Run one full frame: update, then draw, then publish the score
    pub fn frame(&mut self, sink: &mut impl DrawSink, score: &mut impl ScoreDisplay) {
        self.step();
        render(&self.session, &self.settings, sink);
        score.show(&distance_label(self.session.score));
    }

    fn log_tick(&mut self) {
        for event in &self.session.events {
            match event {
                GameEvent::Started => {
                    log::info!("Run started with seed: {}", self.session.seed)
                }
                GameEvent::GameOver(cause) => log::info!(
                    "Game over ({:?}) at distance {} speed {:.1}",
                    cause,
                    self.session.score,
                    self.session.speed
                ),
                GameEvent::SpeedUp(speed) => log::debug!("World speed now {:.1}", speed),
                GameEvent::Jumped | GameEvent::DoubleJumped | GameEvent::Landed => {
                    log::trace!("{:?}", event)
                }
                GameEvent::PlatformSpawned { .. } | GameEvent::ObstacleSpawned(_) => {}
            }
        }

        if self.session.phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, self.session.phase);
            self.last_phase = self.session.phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawList;
    use crate::sim::{Keys, PlayerState};

    #[derive(Default)]
    struct Label(Vec<String>);

    impl ScoreDisplay for Label {
        fn show(&mut self, label: &str) {
            self.0.push(label.to_string());
        }
    }

    fn driver() -> FrameDriver {
        FrameDriver::new(11, Tuning::flat_and_empty(), Settings::default())
    }

    #[test]
    fn test_frame_updates_draws_and_scores() {
        let mut driver = driver();
        let mut list = DrawList::new();
        let mut label = Label::default();

        driver.input.press(Keys::START);
        driver.frame(&mut list, &mut label);
        assert_eq!(driver.session.phase, GamePhase::Running);
        assert!(!list.commands.is_empty());

        driver.input.release(Keys::START);
        for _ in 0..20 {
            list.clear();
            driver.frame(&mut list, &mut label);
        }
        assert_eq!(label.0.last().map(String::as_str), Some("DISTANCE: 2"));
        assert_eq!(label.0.len(), 21);
    }

    #[test]
    fn test_held_jump_fires_once() {
        let mut driver = driver();
        driver.input.press(Keys::START);
        driver.step();

        driver.input.press(Keys::JUMP);
        driver.step();
        assert_eq!(driver.session.player.state, PlayerState::Jump);
        assert!(!driver.input.snapshot().contains(Keys::JUMP));

        // Key still physically down, but no second press was seen: no flip
        for _ in 0..5 {
            driver.step();
        }
        assert_eq!(driver.session.player.state, PlayerState::Jump);
        assert!(!driver.session.player.has_double_jumped);

        // A fresh press flips
        driver.input.press(Keys::JUMP);
        driver.step();
        assert_eq!(driver.session.player.state, PlayerState::Flip);
    }

    #[test]
    fn test_start_press_does_not_jump() {
        let mut driver = driver();
        driver.input.press(Keys::START | Keys::JUMP);
        driver.step();
        driver.step();
        assert!(driver.session.player.on_ground);
        assert_eq!(driver.session.player.state, PlayerState::Run);
    }

    #[test]
    fn test_headless_score_display() {
        let mut driver = driver();
        driver.idle_mode = true;
        let mut list = DrawList::new();
        for _ in 0..50 {
            list.clear();
            driver.frame(&mut list, &mut ());
        }
        assert_ne!(driver.session.phase, GamePhase::NotStarted);
    }
}
