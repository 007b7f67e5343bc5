//! Rendering
//!
//! All drawing is primitive shapes; there are no texture assets. The
//! playing scene renders the world through a y-down camera whose
//! horizontal center follows the player, then switches back to the
//! default camera for the HUD overlay. The menu scenes are plain
//! centered text.

use macroquad::prelude::*;

use crate::game::components::tuning;
use crate::game::World;
use crate::scene::{Game, Scene};
use crate::session::Session;

const PLAYER_BODY: Color = Color::new(1.0, 0.42, 0.42, 1.0);
const ENEMY_BODY: Color = Color::new(1.0, 0.28, 0.34, 1.0);
const PLATFORM_FILL: Color = Color::new(0.545, 0.27, 0.075, 1.0);
const PLATFORM_TOP: Color = Color::new(0.627, 0.32, 0.176, 1.0);
const COIN_RING: Color = Color::new(1.0, 0.70, 0.0, 1.0);
const GOAL_POLE: Color = Color::new(0.545, 0.27, 0.075, 1.0);
const SKY: Color = Color::new(0.53, 0.81, 0.92, 1.0);

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha)
}

/// Draw the current frame for whatever scene the game is in.
pub fn draw(game: &Game) {
    match game.scene() {
        Scene::Title => draw_title(),
        Scene::Playing => {
            if let Some(session) = game.session() {
                draw_playing(session);
            }
        }
        Scene::GameOver => draw_game_over(game.final_score()),
        Scene::Victory => draw_victory(game.final_score()),
    }
}

fn draw_playing(session: &Session) {
    clear_background(SKY);

    // y-down world camera, horizontally tracking the player
    let camera = Camera2D {
        target: session.camera_target(),
        zoom: vec2(2.0 / tuning::SCREEN_W, -2.0 / tuning::SCREEN_H),
        ..Default::default()
    };
    set_camera(&camera);

    let world = session.world();
    draw_platforms(world);
    draw_goal(world);
    draw_coins(world);
    draw_enemies(world);
    draw_player(world, session.player_airborne_anim());
    draw_effects(world);

    set_default_camera();
    draw_hud(session);
}

fn draw_platforms(world: &World) {
    for (idx, _) in world.platforms.iter() {
        let entity = world.handle(idx);
        let pos = match world.positions.get(entity) {
            Some(p) => p.0,
            None => continue,
        };
        let half = tuning::PLATFORM_SIZE * 0.5;
        draw_rectangle(
            pos.x - half.x,
            pos.y - half.y,
            tuning::PLATFORM_SIZE.x,
            tuning::PLATFORM_SIZE.y,
            PLATFORM_FILL,
        );
        // Lighter strip along the walkable top edge
        draw_rectangle(
            pos.x - half.x,
            pos.y - half.y,
            tuning::PLATFORM_SIZE.x,
            6.0,
            PLATFORM_TOP,
        );
    }
}

fn draw_goal(world: &World) {
    for (idx, _) in world.goals.iter() {
        let entity = world.handle(idx);
        let pos = match world.positions.get(entity) {
            Some(p) => p.0,
            None => continue,
        };
        let half = tuning::GOAL_SIZE * 0.5;
        // Pole behind the flag
        draw_rectangle(pos.x - half.x - 4.0, pos.y - half.y - 20.0, 4.0, 80.0, GOAL_POLE);
        draw_rectangle(
            pos.x - half.x,
            pos.y - half.y,
            tuning::GOAL_SIZE.x,
            tuning::GOAL_SIZE.y,
            GREEN,
        );
    }
}

fn draw_coins(world: &World) {
    for (idx, _) in world.coins.iter() {
        let entity = world.handle(idx);
        let pos = match world.positions.get(entity) {
            Some(p) => p.0,
            None => continue,
        };
        draw_circle(pos.x, pos.y, 10.0, GOLD);
        draw_circle_lines(pos.x, pos.y, 10.0, 2.0, COIN_RING);
    }
}

fn draw_enemies(world: &World) {
    for (idx, _) in world.enemies.iter() {
        let entity = world.handle(idx);
        let pos = match world.positions.get(entity) {
            Some(p) => p.0,
            None => continue,
        };
        let half = tuning::ENEMY_SIZE * 0.5;
        draw_rectangle(
            pos.x - half.x,
            pos.y - half.y,
            tuning::ENEMY_SIZE.x,
            tuning::ENEMY_SIZE.y,
            ENEMY_BODY,
        );
        // Frown and eyes
        draw_circle(pos.x - 7.0, pos.y - 6.0, 4.0, WHITE);
        draw_circle(pos.x + 7.0, pos.y - 6.0, 4.0, WHITE);
        draw_circle(pos.x - 7.0, pos.y - 6.0, 2.0, BLACK);
        draw_circle(pos.x + 7.0, pos.y - 6.0, 2.0, BLACK);
        draw_rectangle(pos.x - 6.0, pos.y + 7.0, 12.0, 2.0, BLACK);
    }
}

fn draw_player(world: &World, airborne: bool) {
    let player = match world.player() {
        Some(p) => p,
        None => return,
    };
    let pos = match world.positions.get(player) {
        Some(p) => p.0,
        None => return,
    };
    let half = tuning::PLAYER_SIZE * 0.5;

    draw_rectangle(
        pos.x - half.x,
        pos.y - half.y,
        tuning::PLAYER_SIZE.x,
        tuning::PLAYER_SIZE.y,
        PLAYER_BODY,
    );
    draw_circle(pos.x - 6.0, pos.y - 6.0, 4.0, WHITE);
    draw_circle(pos.x + 6.0, pos.y - 6.0, 4.0, WHITE);
    draw_circle(pos.x - 6.0, pos.y - 6.0, 2.0, BLACK);
    draw_circle(pos.x + 6.0, pos.y - 6.0, 2.0, BLACK);
    if airborne {
        // Open mouth plus raised arms for the jump pose
        draw_circle(pos.x, pos.y + 7.0, 3.0, BLACK);
        draw_rectangle(pos.x - half.x - 4.0, pos.y - 10.0, 4.0, 10.0, PLAYER_BODY);
        draw_rectangle(pos.x + half.x, pos.y - 10.0, 4.0, 10.0, PLAYER_BODY);
    } else {
        draw_rectangle(pos.x - 6.0, pos.y + 6.0, 12.0, 2.0, BLACK);
    }
}

fn draw_effects(world: &World) {
    for (idx, text) in world.texts.iter() {
        let entity = world.handle(idx);
        let (pos, alpha) = match (world.positions.get(entity), world.lifetimes.get(entity)) {
            (Some(p), Some(l)) => (p.0, l.alpha()),
            _ => continue,
        };
        let dims = measure_text(&text.text, None, text.size as u16, 1.0);
        draw_text(
            &text.text,
            pos.x - dims.width * 0.5,
            pos.y,
            text.size,
            with_alpha(text.color, alpha),
        );
    }

    for (idx, burst) in world.bursts.iter() {
        let entity = world.handle(idx);
        let (pos, lifetime) = match (world.positions.get(entity), world.lifetimes.get(entity)) {
            (Some(p), Some(l)) => (p.0, *l),
            _ => continue,
        };
        // Ring doubles in size over its lifetime while fading out
        let radius = burst.radius * (1.0 + lifetime.progress());
        draw_circle_lines(
            pos.x,
            pos.y,
            radius,
            3.0,
            with_alpha(burst.color, lifetime.alpha()),
        );
    }
}

fn draw_hud(session: &Session) {
    let state = session.state();
    draw_text(&format!("Score: {}", state.score), 20.0, 30.0, 24.0, WHITE);
    draw_text(&format!("Lives: {}", state.lives), 20.0, 56.0, 24.0, WHITE);
    draw_text(
        &format!("Level: {}", state.current_level),
        20.0,
        82.0,
        24.0,
        WHITE,
    );
}

fn draw_centered(text: &str, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (screen_width() - dims.width) * 0.5, y, size, color);
}

fn draw_title() {
    clear_background(SKY);
    let mid = screen_height() * 0.5;
    draw_centered("MASTER PLATFORMER", mid - 60.0, 48.0, WHITE);
    draw_centered("Arrows / A D to move, Space to jump", mid + 10.0, 24.0, WHITE);
    draw_centered("Stomp enemies, grab coins, reach the flag", mid + 40.0, 24.0, WHITE);
    draw_centered("Press Space to start", mid + 90.0, 28.0, YELLOW);
}

fn draw_game_over(score: u32) {
    clear_background(BLACK);
    let mid = screen_height() * 0.5;
    draw_centered("GAME OVER", mid - 40.0, 48.0, RED);
    draw_centered(&format!("Final score: {score}"), mid + 10.0, 28.0, WHITE);
    draw_centered("Press R to restart", mid + 60.0, 24.0, WHITE);
}

fn draw_victory(score: u32) {
    clear_background(SKY);
    let mid = screen_height() * 0.5;
    draw_centered("YOU WIN!", mid - 40.0, 48.0, GOLD);
    draw_centered(&format!("Final score: {score}"), mid + 10.0, 28.0, WHITE);
    draw_centered("Press R to play again", mid + 60.0, 24.0, WHITE);
}
