//! Physics and collision resolution
//!
//! Runs once per simulation tick: uniform gravity on airborne bodies,
//! velocity integration, post-move grounding correction against the
//! static platform set, and a full pairwise overlap scan between the
//! player and the entities it can interact with. Entity counts are tens,
//! not thousands, so the pairwise scan stays correct without a broad
//! phase.

use macroquad::prelude::Vec2;

use super::components::tuning;
use super::entity::Entity;
use super::event::{ContactEvent, ContactKind, Events};
use super::world::World;

/// Tolerance for "resting directly atop" a platform (world units).
const GROUND_TOLERANCE: f32 = 1.0;

/// Accumulate gravity on airborne bodies. Grounded bodies have their
/// vertical velocity clamped to zero until a jump impulse is applied.
pub fn apply_gravity(world: &mut World, dt: f32) {
    for (idx, body) in world.bodies.iter() {
        let entity = world.handle(idx);
        if let Some(vel) = world.velocities.get_mut(entity) {
            if body.grounded {
                vel.0.y = 0.0;
            } else {
                vel.0.y += tuning::GRAVITY * dt;
            }
        }
    }
}

/// Integrate velocity into position for all dynamic entities. Horizontal
/// patrol and input movement are applied directly to positions by their
/// owners; velocity here carries the vertical motion.
pub fn integrate(world: &mut World, dt: f32) {
    for (idx, vel) in world.velocities.iter() {
        let entity = world.handle(idx);
        if let Some(pos) = world.positions.get_mut(entity) {
            pos.0 += vel.0 * dt;
        }
    }
}

/// Post-move grounding correction: a body that has sunk into a platform
/// from above this tick is snapped onto the surface with its downward
/// velocity zeroed. Bodies with no platform under them become airborne.
pub fn resolve_platforms(world: &mut World, dt: f32) {
    let platforms: Vec<(Vec2, Vec2)> = world
        .platforms
        .iter()
        .filter_map(|(idx, _)| {
            let entity = world.handle(idx);
            let pos = world.positions.get(entity)?.0;
            let half = world.boxes.get(entity)?.half;
            Some((pos, half))
        })
        .collect();

    let bodies: Vec<Entity> = world
        .bodies
        .iter()
        .map(|(idx, _)| world.handle(idx))
        .collect();

    for entity in bodies {
        let (pos, half, vy) = match (
            world.positions.get(entity),
            world.boxes.get(entity),
            world.velocities.get(entity),
        ) {
            (Some(p), Some(b), Some(v)) => (p.0, b.half, v.0.y),
            _ => continue,
        };

        // Moving upward: never snaps onto a surface
        if vy < 0.0 {
            if let Some(body) = world.bodies.get_mut(entity) {
                body.grounded = false;
            }
            continue;
        }

        // How far the body can have sunk into a platform this tick
        let max_penetration = vy * dt + GROUND_TOLERANCE;
        let bottom = pos.y + half.y;

        let mut landed_on: Option<f32> = None;
        for &(p_pos, p_half) in &platforms {
            let top = p_pos.y - p_half.y;
            let overlap_x = (pos.x - p_pos.x).abs() < half.x + p_half.x;
            let penetration = bottom - top;
            if overlap_x && penetration >= -GROUND_TOLERANCE && penetration <= max_penetration {
                landed_on = Some(match landed_on {
                    Some(existing) => existing.min(top),
                    None => top,
                });
            }
        }

        match landed_on {
            Some(top) => {
                if let Some(p) = world.positions.get_mut(entity) {
                    p.0.y = top - half.y;
                }
                if let Some(v) = world.velocities.get_mut(entity) {
                    v.0.y = 0.0;
                }
                if let Some(body) = world.bodies.get_mut(entity) {
                    body.grounded = true;
                }
            }
            None => {
                if let Some(body) = world.bodies.get_mut(entity) {
                    body.grounded = false;
                }
            }
        }
    }
}

/// Apply a jump impulse: sets vertical velocity to the fixed upward
/// magnitude, only while grounded. A jump request while airborne is
/// silently ignored. Returns whether the jump was applied.
pub fn jump(world: &mut World, entity: Entity, impulse: f32) -> bool {
    let grounded = world.bodies.get(entity).map(|b| b.grounded).unwrap_or(false);
    if !grounded {
        return false;
    }
    if let Some(vel) = world.velocities.get_mut(entity) {
        vel.0.y = -impulse;
    }
    if let Some(body) = world.bodies.get_mut(entity) {
        body.grounded = false;
    }
    true
}

/// Axis-aligned box overlap test (boxes centered on their positions).
pub fn aabb_overlap(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> bool {
    (a_pos.x - b_pos.x).abs() < a_half.x + b_half.x
        && (a_pos.y - b_pos.y).abs() < a_half.y + b_half.y
}

/// How a player-enemy overlap resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// Player landed on top: enemy is defeated
    Stomp,
    /// Anything else, including near-ties: player takes the hit
    Hit,
}

/// Classify a player-enemy overlap. A stomp requires the player's center
/// to be more than the threshold above the enemy's; the asymmetry
/// (near-ties resolve as hits) is deliberate and load-bearing for
/// perceived fairness.
pub fn classify_enemy_contact(player_y: f32, enemy_y: f32) -> EnemyContact {
    if player_y < enemy_y - tuning::STOMP_THRESHOLD {
        EnemyContact::Stomp
    } else {
        EnemyContact::Hit
    }
}

/// Scan the player against every live enemy, coin and goal, emitting one
/// contact event per overlapping pair per tick.
pub fn detect_contacts(world: &World, events: &mut Events) {
    let player = match world.player() {
        Some(p) => p,
        None => return,
    };
    let (p_pos, p_half) = match (world.positions.get(player), world.boxes.get(player)) {
        (Some(p), Some(b)) => (p.0, b.half),
        _ => return,
    };

    let scan = |indices: Vec<u32>, kind: ContactKind, events: &mut Events| {
        for idx in indices {
            let other = world.handle(idx);
            let (o_pos, o_half) = match (world.positions.get(other), world.boxes.get(other)) {
                (Some(p), Some(b)) => (p.0, b.half),
                _ => continue,
            };
            if aabb_overlap(p_pos, p_half, o_pos, o_half) {
                events.contacts.send(ContactEvent {
                    subject: player,
                    other,
                    kind,
                });
            }
        }
    };

    scan(
        world.enemies.iter().map(|(idx, _)| idx).collect(),
        ContactKind::Enemy,
        events,
    );
    scan(
        world.coins.iter().map(|(idx, _)| idx).collect(),
        ContactKind::Coin,
        events,
    );
    scan(
        world.goals.iter().map(|(idx, _)| idx).collect(),
        ContactKind::Goal,
        events,
    );
}
