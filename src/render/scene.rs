//! Frame composition
//!
//! Walks the session back to front and issues draw calls. Every sprite
//! has a solid silhouette fallback for when its image is not loaded.

use glam::Vec2;

use super::sink::{Asset, Color, DrawSink, TextStyle};
use crate::consts::*;
use crate::distance_label;
use crate::settings::Settings;
use crate::sim::{GamePhase, Obstacle, ObstacleKind, Player, PlayerState, Rect, Session};

const BACKGROUND: Color = Color::WHITE;
const MOON: Color = Color::rgb(0xdd, 0xdd, 0xdd);
const PLATFORM_FILL: Color = Color::rgb(0xf7, 0xf5, 0xf5);
const SHADOW: Color = Color::rgba(0, 0, 0, 77);
/// Placeholder fill for sprites that are not loaded
const SILHOUETTE: Color = Color::BLACK;
const DUCK_FALLBACK: Color = Color::RED;
const HITBOX_OUTLINE: Color = Color::rgba(0xff, 0x00, 0x00, 0xc0);
const GAME_OVER_VEIL: Color = Color::rgba(0xff, 0xff, 0xff, 230);
const TITLE_VEIL: Color = Color::rgba(0xff, 0xff, 0xff, 204);

const MOON_CENTER: Vec2 = Vec2::new(1000.0, 100.0);
const MOON_RADIUS: f32 = 50.0;

/// Ticks each run-cycle frame stays on screen
const RUN_FRAME_TICKS: u64 = 10;

/// Draw one complete frame
pub fn render(session: &Session, settings: &Settings, sink: &mut impl DrawSink) {
    sink.fill_rect(Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT), BACKGROUND);
    sink.fill_circle(MOON_CENTER, MOON_RADIUS, MOON);

    if settings.parallax {
        for layer in &session.layers {
            let color = Color::from(layer.color);
            for rect in layer.visible_rects(CANVAS_WIDTH) {
                sink.fill_rect(rect, color);
            }
        }
    }

    for platform in &session.platforms {
        sink.fill_rect(platform.rect(), PLATFORM_FILL);
        sink.stroke_line(
            Vec2::new(platform.x, platform.top()),
            Vec2::new(platform.right(), platform.top()),
            3.0,
            Color::BLACK,
        );
    }

    for obstacle in &session.obstacles {
        draw_obstacle(obstacle, sink);
    }

    draw_player(&session.player, session.frame_count, settings, sink);

    if settings.show_hitboxes {
        sink.stroke_rect(session.player.hitbox(), 1.0, HITBOX_OUTLINE);
        for obstacle in &session.obstacles {
            sink.stroke_rect(obstacle.rect, 1.0, HITBOX_OUTLINE);
        }
    }

    match session.phase {
        GamePhase::GameOver => draw_game_over(session.score, sink),
        GamePhase::NotStarted => draw_title(sink),
        GamePhase::Running => {}
    }
}

/// Sprite if available, otherwise a solid block of `fallback`
fn sprite_or_silhouette(
    sink: &mut impl DrawSink,
    asset: Asset,
    rect: Rect,
    rotation: f32,
    fallback: Color,
) -> bool {
    if sink.try_draw_asset(asset, rect, rotation) {
        return true;
    }
    if rotation == 0.0 {
        sink.fill_rect(rect, fallback);
    } else {
        sink.fill_rotated_rect(rect, rotation, fallback);
    }
    false
}

/// Sprite rect for a player state. The flip sprite is a 30px square
/// spinning about the middle of the upright body.
pub fn player_sprite_rect(player: &Player) -> Rect {
    match player.state {
        PlayerState::Flip => {
            let center = player.pos + Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0);
            Rect::new(center.x - 15.0, center.y - 15.0, 30.0, 30.0)
        }
        _ => player.hitbox(),
    }
}

/// Which sprite represents the player this frame
pub fn player_asset(player: &Player, frame_count: u64) -> Asset {
    match player.state {
        PlayerState::Flip => Asset::WJump,
        PlayerState::Slide => Asset::Sliding,
        PlayerState::Jump => Asset::Jump,
        PlayerState::Run => {
            if (frame_count / RUN_FRAME_TICKS) % 2 == 0 {
                Asset::Run1
            } else {
                Asset::Run2
            }
        }
    }
}

fn draw_player(player: &Player, frame_count: u64, settings: &Settings, sink: &mut impl DrawSink) {
    if player.on_ground && settings.ground_shadow {
        sink.fill_rect(Rect::new(player.pos.x, GROUND_Y, 40.0, 5.0), SHADOW);
    }

    let rotation = match player.state {
        PlayerState::Flip => settings.effective_rotation(player.rotation),
        _ => 0.0,
    };
    sprite_or_silhouette(
        sink,
        player_asset(player, frame_count),
        player_sprite_rect(player),
        rotation,
        SILHOUETTE,
    );
}

fn draw_obstacle(obstacle: &Obstacle, sink: &mut impl DrawSink) {
    let r = obstacle.rect;
    match obstacle.kind {
        ObstacleKind::Jump => {
            if !sprite_or_silhouette(sink, Asset::ObstacleJump, r, 0.0, SILHOUETTE) {
                // Tank turret
                sink.fill_rect(Rect::new(r.x + 5.0, r.y - 10.0, 30.0, 10.0), SILHOUETTE);
            }
        }
        ObstacleKind::Duck => {
            if !sprite_or_silhouette(sink, Asset::ObstacleDuck, r, 0.0, DUCK_FALLBACK) {
                // Pipe flanges
                sink.fill_rect(Rect::new(r.x - 10.0, r.y + 10.0, 10.0, 10.0), DUCK_FALLBACK);
                sink.fill_rect(Rect::new(r.right(), r.y + 10.0, 10.0, 10.0), DUCK_FALLBACK);
            }
        }
    }
}

fn draw_game_over(score: u64, sink: &mut impl DrawSink) {
    let mid = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    sink.fill_rect(Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT), GAME_OVER_VEIL);
    sink.fill_text(
        "GAME OVER",
        mid + Vec2::new(0.0, -40.0),
        TextStyle::new(60.0, true),
        Color::BLACK,
    );
    sink.fill_text(
        &distance_label(score),
        mid + Vec2::new(0.0, 20.0),
        TextStyle::new(30.0, false),
        Color::BLACK,
    );
    sink.fill_text(
        "Press R to Restart",
        mid + Vec2::new(0.0, 60.0),
        TextStyle::new(20.0, false),
        Color::BLACK,
    );
}

fn draw_title(sink: &mut impl DrawSink) {
    sink.fill_rect(Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT), TITLE_VEIL);
    sink.fill_text(
        "Press SPACE to Start",
        Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        TextStyle::new(40.0, true),
        Color::BLACK,
    );
}
