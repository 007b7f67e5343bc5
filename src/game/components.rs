//! Game components
//!
//! The closed set of component types for the platformer. Components are
//! plain data structs; behavior lives in the physics pass and the session
//! controller. Every entity kind is a fixed combination of these, spawned
//! through the typed constructors on `World`.

use macroquad::prelude::{Color, Vec2};

/// Gameplay constants, taken together as the game's feel.
pub mod tuning {
    use macroquad::prelude::Vec2;

    /// Logical screen size in world units
    pub const SCREEN_W: f32 = 1024.0;
    pub const SCREEN_H: f32 = 576.0;

    /// Horizontal player speed (units/s)
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Jump impulse magnitude (units/s, applied upward)
    pub const JUMP_FORCE: f32 = 500.0;
    /// Downward acceleration (units/s^2)
    pub const GRAVITY: f32 = 1200.0;

    /// Player must be this far above an enemy's center for an overlap to
    /// count as a stomp. Near-ties resolve as a hit on purpose.
    pub const STOMP_THRESHOLD: f32 = 10.0;
    /// Stomping grants a bounce at this fraction of the jump impulse
    pub const STOMP_BOUNCE_FACTOR: f32 = 0.5;

    /// Enemies reverse patrol direction at these screen-space x bounds
    pub const PATROL_MARGIN: f32 = 50.0;

    /// Falling this far below the screen costs a life
    pub const FALL_MARGIN: f32 = 100.0;

    /// Coin bobbing: y = base_y + sin(t * FLOAT_RATE + phase) * FLOAT_AMPLITUDE
    pub const FLOAT_RATE: f32 = 3.0;
    pub const FLOAT_AMPLITUDE: f32 = 8.0;
    /// Phase offset between consecutive coins in a level
    pub const FLOAT_PHASE_STEP: f32 = 60.0;

    /// Scoring
    pub const STOMP_SCORE: u32 = 100;
    pub const COIN_SCORE: u32 = 50;
    pub const GOAL_SCORE: u32 = 500;

    /// Lives at the start of a playthrough
    pub const STARTING_LIVES: i32 = 3;

    /// Delay between touching the goal and loading the next level (s)
    pub const LEVEL_RELOAD_DELAY: f64 = 1.0;

    /// Sprite dimensions
    pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 32.0);
    pub const ENEMY_SIZE: Vec2 = Vec2::new(32.0, 32.0);
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(64.0, 32.0);
    pub const COIN_SIZE: Vec2 = Vec2::new(24.0, 24.0);
    pub const GOAL_SIZE: Vec2 = Vec2::new(20.0, 60.0);
}

// =============================================================================
// Physics / movement
// =============================================================================

/// World position (center of the entity's sprite and collision box)
#[derive(Debug, Clone, Copy, Default)]
pub struct Position(pub Vec2);

/// Velocity for dynamic entities. Only the player and enemies carry one;
/// platforms, coins and the goal never move through physics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// Axis-aligned collision box, centered on the entity's position.
#[derive(Debug, Clone, Copy)]
pub struct CollisionBox {
    pub half: Vec2,
}

impl CollisionBox {
    pub fn from_size(size: Vec2) -> Self {
        Self { half: size * 0.5 }
    }
}

/// Gravity subject. Grounded entities have their vertical velocity clamped
/// to zero until a jump impulse is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Body {
    pub grounded: bool,
}

// =============================================================================
// Kind markers and per-kind state
// =============================================================================

/// Marks the player entity. The jump-sprite flag is entity-local state,
/// not a captured variable somewhere outside the entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player {
    /// Showing the jump pose; cleared on landing
    pub airborne_anim: bool,
}

/// Marks enemy entities.
#[derive(Debug, Clone, Copy)]
pub struct Enemy;

/// Patrol movement state for enemies.
#[derive(Debug, Clone, Copy)]
pub struct Patrol {
    /// -1.0 or +1.0
    pub dir: f32,
    /// Patrol speed (units/s), always positive
    pub speed: f32,
}

/// Marks static platform entities. Platforms never change shape or
/// position after creation and never participate as gravity subjects.
#[derive(Debug, Clone, Copy)]
pub struct Platform;

/// Marks the level goal marker.
#[derive(Debug, Clone, Copy)]
pub struct Goal;

/// Collectible coin. Bobs around its spawn height with a per-coin phase.
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub base_y: f32,
    pub phase: f32,
}

// =============================================================================
// Effect entities (short-lived, non-interactive)
// =============================================================================

/// Remaining time-to-live for effect entities. The only built-in TTL in
/// the entity model; expired effects self-destroy.
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    /// Full lifetime at spawn (seconds)
    pub total: f32,
    /// Seconds left before despawn
    pub remaining: f32,
    /// Fade-out window at the end of the lifetime (seconds)
    pub fade: f32,
}

impl Lifetime {
    pub fn new(life: f32, fade: f32) -> Self {
        Self {
            total: life,
            remaining: life,
            fade,
        }
    }

    /// Opacity for rendering: 1.0 until the fade window, then linear to 0.
    pub fn alpha(&self) -> f32 {
        if self.fade <= 0.0 {
            return 1.0;
        }
        (self.remaining / self.fade).clamp(0.0, 1.0)
    }

    /// Elapsed fraction of the lifetime, 0.0 at spawn to 1.0 at expiry.
    pub fn progress(&self) -> f32 {
        if self.total <= 0.0 {
            return 1.0;
        }
        1.0 - (self.remaining / self.total).clamp(0.0, 1.0)
    }
}

/// Floating score/banner text that drifts upward while fading.
#[derive(Debug, Clone)]
pub struct FloatingText {
    pub text: String,
    pub color: Color,
    pub size: f32,
    /// Upward drift (units/s); 0 for stationary banners
    pub rise_speed: f32,
}

/// Expanding ring shown when a coin is picked up.
#[derive(Debug, Clone, Copy)]
pub struct Burst {
    pub radius: f32,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_alpha() {
        let fresh = Lifetime::new(1.0, 0.5);
        assert_eq!(fresh.alpha(), 1.0);

        let fading = Lifetime {
            total: 1.0,
            remaining: 0.25,
            fade: 0.5,
        };
        assert!((fading.alpha() - 0.5).abs() < 1e-6);

        let expired = Lifetime {
            total: 1.0,
            remaining: 0.0,
            fade: 0.5,
        };
        assert_eq!(expired.alpha(), 0.0);
    }

    #[test]
    fn test_lifetime_progress() {
        let mut life = Lifetime::new(0.5, 0.1);
        assert_eq!(life.progress(), 0.0);
        life.remaining = 0.25;
        assert!((life.progress() - 0.5).abs() < 1e-6);
        life.remaining = 0.0;
        assert_eq!(life.progress(), 1.0);
    }

    #[test]
    fn test_collision_box_half_extents() {
        let b = CollisionBox::from_size(tuning::PLAYER_SIZE);
        assert_eq!(b.half, Vec2::new(16.0, 16.0));
    }
}
