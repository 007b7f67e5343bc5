//! Game world
//!
//! The World is the central container for one level's entities:
//! - entity allocation and lifetime tracking
//! - component storage for the closed component set
//! - deferred despawn (to avoid invalidating iterators mid-pass)
//!
//! Component types are fixed at compile time; the entity kinds of this
//! game (player, platform, enemy, coin, goal, effect) are each a known
//! combination of components built by the typed spawners below.

use macroquad::prelude::{Color, Vec2};

use super::component::ComponentStorage;
use super::components::*;
use super::entity::{Entity, EntityAllocator};

/// The game world containing all entities and their components.
pub struct World {
    entities: EntityAllocator,

    /// Entities queued for despawn at end of tick
    despawn_queue: Vec<Entity>,

    // Core
    pub positions: ComponentStorage<Position>,
    pub velocities: ComponentStorage<Velocity>,
    pub boxes: ComponentStorage<CollisionBox>,
    pub bodies: ComponentStorage<Body>,

    // Kind markers and per-kind state
    pub players: ComponentStorage<Player>,
    pub enemies: ComponentStorage<Enemy>,
    pub patrols: ComponentStorage<Patrol>,
    pub platforms: ComponentStorage<Platform>,
    pub goals: ComponentStorage<Goal>,
    pub coins: ComponentStorage<Coin>,

    // Effects
    pub lifetimes: ComponentStorage<Lifetime>,
    pub texts: ComponentStorage<FloatingText>,
    pub bursts: ComponentStorage<Burst>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            despawn_queue: Vec::new(),

            positions: ComponentStorage::new(),
            velocities: ComponentStorage::new(),
            boxes: ComponentStorage::new(),
            bodies: ComponentStorage::new(),

            players: ComponentStorage::new(),
            enemies: ComponentStorage::new(),
            patrols: ComponentStorage::new(),
            platforms: ComponentStorage::new(),
            goals: ComponentStorage::new(),
            coins: ComponentStorage::new(),

            lifetimes: ComponentStorage::new(),
            texts: ComponentStorage::new(),
            bursts: ComponentStorage::new(),
        }
    }

    // =========================================================================
    // Entity management
    // =========================================================================

    /// Spawn a bare entity at a position.
    pub fn spawn_at(&mut self, position: Vec2) -> Entity {
        let entity = self.entities.allocate();
        self.positions.insert(entity, Position(position));
        entity
    }

    /// Queue an entity for despawn at end of tick. Despawning a dead or
    /// unknown handle is a no-op, not an error.
    pub fn despawn(&mut self, entity: Entity) {
        if self.is_alive(entity) {
            self.despawn_queue.push(entity);
        }
    }

    /// Immediately despawn an entity and all its components.
    /// Prefer `despawn()` during the tick to avoid iterator issues.
    pub fn despawn_immediate(&mut self, entity: Entity) {
        if !self.entities.free(entity) {
            return; // Already dead
        }

        let idx = entity.index();
        self.positions.clear_slot(idx);
        self.velocities.clear_slot(idx);
        self.boxes.clear_slot(idx);
        self.bodies.clear_slot(idx);
        self.players.clear_slot(idx);
        self.enemies.clear_slot(idx);
        self.patrols.clear_slot(idx);
        self.platforms.clear_slot(idx);
        self.goals.clear_slot(idx);
        self.coins.clear_slot(idx);
        self.lifetimes.clear_slot(idx);
        self.texts.clear_slot(idx);
        self.bursts.clear_slot(idx);
    }

    /// Process all queued despawns. Call at end of tick.
    pub fn flush_despawns(&mut self) {
        let queue = std::mem::take(&mut self.despawn_queue);
        for entity in queue {
            self.despawn_immediate(entity);
        }
    }

    /// Despawn everything at once (scene teardown / level reload).
    pub fn clear(&mut self) {
        self.entities.clear();
        self.despawn_queue.clear();
        self.positions.clear();
        self.velocities.clear();
        self.boxes.clear();
        self.bodies.clear();
        self.players.clear();
        self.enemies.clear();
        self.patrols.clear();
        self.platforms.clear();
        self.goals.clear();
        self.coins.clear();
        self.lifetimes.clear();
        self.texts.clear();
        self.bursts.clear();
    }

    /// Check if an entity is currently alive.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Number of alive entities.
    pub fn entity_count(&self) -> u32 {
        self.entities.alive_count()
    }

    /// Rebuild a live handle from a storage index (for marker iteration).
    pub fn handle(&self, index: u32) -> Entity {
        self.entities.handle(index)
    }

    /// The live player entity, if one exists. The session keeps exactly
    /// one alive while a level is active.
    pub fn player(&self) -> Option<Entity> {
        self.players.iter().next().map(|(idx, _)| self.handle(idx))
    }

    // =========================================================================
    // Kind spawners
    // =========================================================================

    /// Spawn the player at a position (airborne until the first ground
    /// resolution lands it).
    pub fn spawn_player(&mut self, position: Vec2) -> Entity {
        let entity = self.spawn_at(position);
        self.players.insert(entity, Player::default());
        self.velocities.insert(entity, Velocity::default());
        self.boxes
            .insert(entity, CollisionBox::from_size(tuning::PLAYER_SIZE));
        self.bodies.insert(entity, Body { grounded: false });
        entity
    }

    /// Spawn a platform from its top-left corner (the authored format).
    /// Stored center-anchored like every other entity; no Body, so it is
    /// never a gravity subject.
    pub fn spawn_platform(&mut self, top_left: Vec2) -> Entity {
        let entity = self.spawn_at(top_left + tuning::PLATFORM_SIZE * 0.5);
        self.platforms.insert(entity, Platform);
        self.boxes
            .insert(entity, CollisionBox::from_size(tuning::PLATFORM_SIZE));
        entity
    }

    /// Spawn a patrolling enemy.
    pub fn spawn_enemy(&mut self, position: Vec2, dir: f32, speed: f32) -> Entity {
        let entity = self.spawn_at(position);
        self.enemies.insert(entity, Enemy);
        self.patrols.insert(entity, Patrol { dir, speed });
        self.velocities.insert(entity, Velocity::default());
        self.boxes
            .insert(entity, CollisionBox::from_size(tuning::ENEMY_SIZE));
        self.bodies.insert(entity, Body { grounded: false });
        entity
    }

    /// Spawn a coin bobbing around its spawn height.
    pub fn spawn_coin(&mut self, position: Vec2, phase: f32) -> Entity {
        let entity = self.spawn_at(position);
        self.coins.insert(
            entity,
            Coin {
                base_y: position.y,
                phase,
            },
        );
        self.boxes
            .insert(entity, CollisionBox::from_size(tuning::COIN_SIZE));
        entity
    }

    /// Spawn the level goal marker.
    pub fn spawn_goal(&mut self, position: Vec2) -> Entity {
        let entity = self.spawn_at(position);
        self.goals.insert(entity, Goal);
        self.boxes
            .insert(entity, CollisionBox::from_size(tuning::GOAL_SIZE));
        entity
    }

    /// Spawn floating text that drifts upward and fades out.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn_floating_text(
        &mut self,
        position: Vec2,
        text: impl Into<String>,
        color: Color,
        size: f32,
        rise_speed: f32,
        life: f32,
        fade: f32,
    ) -> Entity {
        let entity = self.spawn_at(position);
        self.texts.insert(
            entity,
            FloatingText {
                text: text.into(),
                color,
                size,
                rise_speed,
            },
        );
        self.lifetimes.insert(entity, Lifetime::new(life, fade));
        entity
    }

    /// Spawn an expanding ring effect (coin pickup flash).
    pub fn spawn_burst(
        &mut self,
        position: Vec2,
        radius: f32,
        color: Color,
        life: f32,
        fade: f32,
    ) -> Entity {
        let entity = self.spawn_at(position);
        self.bursts.insert(entity, Burst { radius, color });
        self.lifetimes.insert(entity, Lifetime::new(life, fade));
        entity
    }

    // =========================================================================
    // Effect lifetimes
    // =========================================================================

    /// Tick effect lifetimes: drift floating texts upward and queue
    /// expired effects for despawn. Effects are the only entities with a
    /// built-in time-to-live.
    pub fn tick_lifetimes(&mut self, dt: f32) {
        let mut expired = Vec::new();
        for (idx, lifetime) in self.lifetimes.iter_mut() {
            lifetime.remaining -= dt;
            if lifetime.remaining <= 0.0 {
                expired.push(idx);
            }
        }

        for (idx, text) in self.texts.iter() {
            if let Some(pos) = self.positions.get_mut(self.entities.handle(idx)) {
                pos.0.y -= text.rise_speed * dt;
            }
        }

        for idx in expired {
            let entity = self.entities.handle(idx);
            self.despawn(entity);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{vec2, YELLOW};

    #[test]
    fn test_spawn_and_despawn() {
        let mut world = World::new();

        let e1 = world.spawn_at(vec2(0.0, 0.0));
        let e2 = world.spawn_at(vec2(10.0, 0.0));
        assert_eq!(world.entity_count(), 2);

        world.despawn_immediate(e1);
        assert_eq!(world.entity_count(), 1);
        assert!(!world.is_alive(e1));
        assert!(world.is_alive(e2));
    }

    #[test]
    fn test_despawn_is_idempotent() {
        let mut world = World::new();

        let e = world.spawn_at(vec2(0.0, 0.0));
        world.despawn(e);
        world.despawn(e); // second queue attempt is a no-op
        world.flush_despawns();
        assert_eq!(world.entity_count(), 0);

        // Despawning a dead handle must also be a no-op
        world.despawn(e);
        world.despawn_immediate(e);
        world.flush_despawns();
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_spawn_player_components() {
        let mut world = World::new();
        let player = world.spawn_player(vec2(100.0, 400.0));

        assert!(world.players.contains(player));
        assert!(world.velocities.contains(player));
        assert!(world.boxes.contains(player));
        assert!(world.bodies.contains(player));
        assert_eq!(world.player(), Some(player));
    }

    #[test]
    fn test_platform_is_static() {
        let mut world = World::new();
        let platform = world.spawn_platform(vec2(0.0, 544.0));

        // Center-anchored from top-left authoring
        assert_eq!(world.positions.get(platform).unwrap().0, vec2(32.0, 560.0));
        // Never a gravity subject
        assert!(!world.bodies.contains(platform));
        assert!(!world.velocities.contains(platform));
    }

    #[test]
    fn test_effect_self_destroys() {
        let mut world = World::new();
        let fx = world.spawn_floating_text(vec2(0.0, 0.0), "+100", YELLOW, 20.0, 50.0, 0.1, 0.05);

        world.tick_lifetimes(0.05);
        world.flush_despawns();
        assert!(world.is_alive(fx));

        world.tick_lifetimes(0.06);
        world.flush_despawns();
        assert!(!world.is_alive(fx));
    }

    #[test]
    fn test_floating_text_rises() {
        let mut world = World::new();
        let fx = world.spawn_floating_text(vec2(0.0, 100.0), "+50", YELLOW, 16.0, 30.0, 1.0, 0.4);

        world.tick_lifetimes(0.5);
        let y = world.positions.get(fx).unwrap().0.y;
        assert!((y - 85.0).abs() < 1e-4);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut world = World::new();
        world.spawn_player(vec2(0.0, 0.0));
        world.spawn_platform(vec2(0.0, 544.0));
        world.spawn_coin(vec2(50.0, 50.0), 0.0);

        world.clear();
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.players.count(), 0);
        assert_eq!(world.platforms.count(), 0);
        assert_eq!(world.coins.count(), 0);
    }
}
