//! Input sampling
//!
//! Polls keyboard and touch state once per frame into a plain snapshot
//! the simulation consumes. The snapshot is deliberately free of any
//! windowing types so the session and its tests never touch the input
//! backend.
//!
//! Touch layout: left third of the screen moves left, right third moves
//! right, the middle third jumps. Held zones persist until the touch
//! ends; taps anywhere double as start/restart on the menu screens.

use macroquad::prelude::{is_key_down, is_key_pressed, screen_width, touches, KeyCode, TouchPhase};

/// One frame of player intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub start_pressed: bool,
    pub restart_pressed: bool,
}

/// Which movement zone a touch landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TouchZone {
    Left,
    Middle,
    Right,
}

fn touch_zone(x: f32, width: f32) -> TouchZone {
    if x < width / 3.0 {
        TouchZone::Left
    } else if x < width * 2.0 / 3.0 {
        TouchZone::Middle
    } else {
        TouchZone::Right
    }
}

/// Persistent input state across frames (held touch zones).
#[derive(Default)]
pub struct InputState {
    touch_left: bool,
    touch_right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll the backend and build this frame's snapshot.
    pub fn sample(&mut self) -> InputSnapshot {
        let mut snap = InputSnapshot {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            jump_pressed: is_key_pressed(KeyCode::Space)
                || is_key_pressed(KeyCode::Up)
                || is_key_pressed(KeyCode::W),
            start_pressed: is_key_pressed(KeyCode::Space),
            restart_pressed: is_key_pressed(KeyCode::R),
        };

        let width = screen_width();
        for touch in touches() {
            match touch.phase {
                TouchPhase::Started => {
                    match touch_zone(touch.position.x, width) {
                        TouchZone::Left => self.touch_left = true,
                        TouchZone::Right => self.touch_right = true,
                        TouchZone::Middle => snap.jump_pressed = true,
                    }
                    // Any tap works on the menu screens
                    snap.start_pressed = true;
                    snap.restart_pressed = true;
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    match touch_zone(touch.position.x, width) {
                        TouchZone::Left => self.touch_left = false,
                        TouchZone::Right => self.touch_right = false,
                        TouchZone::Middle => {}
                    }
                }
                TouchPhase::Moved | TouchPhase::Stationary => {}
            }
        }

        snap.left |= self.touch_left;
        snap.right |= self.touch_right;
        snap
    }
}
