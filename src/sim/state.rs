//! Session state and core simulation types
//!
//! Everything a run needs lives in [`Session`]; there is no global state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleKind};
use super::parallax::ParallaxLayer;
use super::platform::Platform;
use super::player::Player;
use crate::consts::*;
use crate::tuning::Tuning;

/// Top-level phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended; the world is frozen until restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Obstacle(ObstacleKind),
    /// Dropped below the bottom of the screen through a gap
    Fell,
}

/// Something that happened during the last tick, for hosts (logging, sound)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    DoubleJumped,
    Landed,
    PlatformSpawned { has_gap: bool },
    ObstacleSpawned(ObstacleKind),
    SpeedUp(f32),
    GameOver(DeathCause),
}

/// Parallax bands, far to near: (scroll factor, RGBA)
const LAYERS: [(f32, [u8; 4]); 2] = [
    // Far skyline barely moves
    (0.01, [0xe0, 0xe0, 0xe0, 0xff]),
    (0.3, [0xc0, 0xc0, 0xc0, 0xff]),
];

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Seed of the current run
    pub seed: u64,
    /// World generation RNG, seeded from `seed`
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Horizontal scroll per tick
    pub speed: f32,
    /// Distance score, derived from `frame_count`
    pub score: u64,
    /// Ticks simulated in the current run
    pub frame_count: u64,
    pub player: Player,
    /// Ground segments, ordered left to right
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub layers: Vec<ParallaxLayer>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Create a session on the title screen. The opening world is already
    /// laid out so it can be drawn behind the start prompt.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            speed: tuning.base_speed,
            tuning,
            phase: GamePhase::NotStarted,
            score: 0,
            frame_count: 0,
            player: Player::default(),
            platforms: Vec::new(),
            obstacles: Vec::new(),
            layers: Vec::new(),
            events: Vec::new(),
        };
        session.reset_world();
        session
    }

    /// Begin a run from the title screen
    pub fn start(&mut self) {
        self.reset_world();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
    }

    /// Discard the finished run and begin a new one with a fresh seed
    /// drawn from this session's generator
    pub fn restart(&mut self) {
        self.seed = self.rng.random();
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.start();
    }

    /// Reset counters, player and entities to the opening layout
    fn reset_world(&mut self) {
        self.speed = self.tuning.base_speed;
        self.score = 0;
        self.frame_count = 0;
        self.player = Player::default();
        self.obstacles.clear();

        self.platforms = (0..INITIAL_PLATFORMS)
            .map(|i| {
                Platform::new(
                    i as f32 * INITIAL_PLATFORM_WIDTH,
                    INITIAL_PLATFORM_WIDTH,
                    false,
                )
            })
            .collect();

        let rng = &mut self.rng;
        self.layers = LAYERS
            .iter()
            .map(|&(factor, color)| ParallaxLayer::new(&mut *rng, factor, color, 0.0))
            .collect();
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Append one platform after the rightmost one, maybe leaving a gap
    pub fn spawn_platform(&mut self) {
        let t = &self.tuning;
        let has_gap = self.rng.random_bool(t.gap_chance);
        let gap = if has_gap {
            self.rng.random_range(t.gap_min..t.gap_max)
        } else {
            0.0
        };
        let width = self
            .rng
            .random_range(t.platform_width_min..t.platform_width_max);

        let x = self.platforms.last().map_or(0.0, |p| p.right() + gap);
        log::trace!("platform spawned at x={x:.1} width={width:.1} gap={gap:.1}");
        self.platforms.push(Platform::new(x, width, has_gap));
        self.events.push(GameEvent::PlatformSpawned { has_gap });
    }

    /// Roll for an obstacle on the rightmost platform
    pub fn maybe_spawn_obstacle(&mut self) {
        let Some(anchor) = self.platforms.last() else {
            return;
        };
        let (x, width, top) = (anchor.x, anchor.width, anchor.top());

        if !self.rng.random_bool(self.tuning.obstacle_chance) {
            return;
        }
        let kind = if self.rng.random_bool(0.5) {
            ObstacleKind::Jump
        } else {
            ObstacleKind::Duck
        };
        log::trace!("{kind:?} obstacle spawned on platform at x={x:.1}");
        self.obstacles.push(Obstacle::centered_on(x, width, top, kind));
        self.events.push(GameEvent::ObstacleSpawned(kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_on_title_screen() {
        let session = Session::new(1, Tuning::default());
        assert_eq!(session.phase, GamePhase::NotStarted);
        assert_eq!(session.platforms.len(), INITIAL_PLATFORMS);
        assert_eq!(session.layers.len(), 2);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.speed, 6.0);
    }

    #[test]
    fn test_opening_platforms_are_contiguous() {
        let session = Session::new(1, Tuning::default());
        for pair in session.platforms.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
    }

    #[test]
    fn test_spawned_platform_follows_rightmost() {
        let mut session = Session::new(3, Tuning::default());
        for _ in 0..200 {
            let prev_right = session.platforms.last().map(|p| p.right()).unwrap_or(0.0);
            session.spawn_platform();
            let p = session.platforms.last().unwrap();
            let gap = p.x - prev_right;
            assert!((200.0..400.0).contains(&p.width));
            if p.has_gap {
                // Positions far from the origin lose a little precision
                assert!((99.9..200.1).contains(&gap), "gap {gap}");
            } else {
                assert_eq!(gap, 0.0);
            }
        }
    }

    #[test]
    fn test_obstacle_anchored_to_rightmost_platform() {
        let tuning = Tuning {
            obstacle_chance: 1.0,
            ..Tuning::default()
        };
        let mut session = Session::new(5, tuning);
        session.maybe_spawn_obstacle();
        assert_eq!(session.obstacles.len(), 1);

        let anchor = session.platforms.last().unwrap();
        let o = &session.obstacles[0];
        assert!(o.rect.x >= anchor.x && o.rect.right() <= anchor.right());
        assert!(o.rect.bottom() <= anchor.top());
    }

    #[test]
    fn test_no_obstacle_without_platforms() {
        let tuning = Tuning {
            obstacle_chance: 1.0,
            ..Tuning::default()
        };
        let mut session = Session::new(5, tuning);
        session.platforms.clear();
        session.maybe_spawn_obstacle();
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = Session::new(42, Tuning::default());
        let mut b = Session::new(42, Tuning::default());
        for _ in 0..20 {
            a.spawn_platform();
            b.spawn_platform();
        }
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.layers, b.layers);
    }

    #[test]
    fn test_restart_reseeds() {
        let mut session = Session::new(42, Tuning::default());
        session.start();
        session.frame_count = 500;
        session.speed = 9.0;
        session.phase = GamePhase::GameOver;

        session.restart();
        assert_eq!(session.phase, GamePhase::Running);
        assert_ne!(session.seed, 42);
        assert_eq!(session.frame_count, 0);
        assert_eq!(session.speed, 6.0);
        assert_eq!(session.player, Player::default());
    }
}
