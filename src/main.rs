//! Skyhopper, a small side-scrolling platformer.
//!
//! Frame loop: sample input, advance the scene machine by one clamped
//! tick, forward audio cues, draw. All gameplay state lives in the
//! scene machine; this file only wires the runtime together.

mod audio;
mod catalog;
mod game;
mod input;
mod render;
mod scene;
mod session;

use macroquad::prelude::*;

use audio::AudioOutput;
use catalog::LevelCatalog;
use game::components::tuning;
use input::InputState;
use scene::Game;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Long frames (window drags, debugger pauses) are clamped so a single
/// tick can never tunnel the player through a platform.
const MAX_DT: f32 = 1.0 / 20.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Skyhopper v{VERSION}"),
        window_width: tuning::SCREEN_W as i32,
        window_height: tuning::SCREEN_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let catalog = match LevelCatalog::load() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to parse bundled levels: {err}");
            return;
        }
    };
    if catalog.is_empty() {
        eprintln!("no levels bundled, nothing to play");
        return;
    }
    println!("Skyhopper v{VERSION}: {} levels loaded", catalog.len());

    let audio = AudioOutput::init();
    let mut input = InputState::new();
    let mut game = Game::new();
    let mut cues = Vec::new();

    loop {
        let dt = get_frame_time().min(MAX_DT);
        let now = get_time();
        let snapshot = input.sample();

        game.frame(&catalog, &snapshot, now, dt, &mut cues);
        for cue in cues.drain(..) {
            audio.play(cue);
        }

        render::draw(&game);
        next_frame().await;
    }
}
