//! Entity identifiers with generational indices
//!
//! Entities are lightweight handles referencing game objects. The
//! generational index pattern prevents dangling references: each slot
//! carries a generation counter that increments when the slot is reused,
//! so a handle to a stomped enemy can never alias a freshly spawned one.

/// A unique identifier for a game entity.
///
/// Consists of an index (which slot in the entity array) and a generation
/// (which version of that slot). Two entities with the same index but
/// different generations are different entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Index into component storage
    index: u32,
    /// Generation counter, increments when the slot is reused
    generation: u32,
}

impl Entity {
    /// Create an entity handle. Only the allocator builds these.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Get the index of this entity (for component array access).
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the generation of this entity.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// A null/invalid entity reference, for "no entity" fields.
    pub const NULL: Entity = Entity { index: u32::MAX, generation: 0 };

    /// Check if this is the null entity.
    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

/// Allocates and tracks entity lifetimes.
///
/// Maintains a pool of slots, reusing freed ones with incremented
/// generations so stale handles stop matching.
pub struct EntityAllocator {
    /// Generation counter per slot
    generations: Vec<u32>,
    /// Freed slots available for reuse
    free_indices: Vec<u32>,
    /// Next fresh index when no freed slot is available
    next_fresh: u32,
    /// Number of currently alive entities
    alive_count: u32,
}

impl EntityAllocator {
    /// Create a new allocator with no entities.
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            next_fresh: 0,
            alive_count: 0,
        }
    }

    /// Allocate a new entity.
    pub fn allocate(&mut self) -> Entity {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Reuse a freed slot; its generation was bumped on free
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.next_fresh;
            self.next_fresh += 1;
            self.generations.push(0);
            Entity::new(index, 0)
        }
    }

    /// Free an entity, making its slot available for reuse.
    /// Returns true if the entity was alive and is now freed.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        self.generations[entity.index as usize] += 1;
        self.free_indices.push(entity.index);
        self.alive_count -= 1;
        true
    }

    /// Check if an entity is currently alive.
    pub fn is_alive(&self, entity: Entity) -> bool {
        if entity.is_null() {
            return false;
        }
        let idx = entity.index as usize;
        idx < self.generations.len() && self.generations[idx] == entity.generation
    }

    /// Rebuild a live handle for a slot index, e.g. when iterating a
    /// component storage (which only knows indices). Returns the handle
    /// with the slot's current generation.
    pub fn handle(&self, index: u32) -> Entity {
        let generation = self.generations.get(index as usize).copied().unwrap_or(0);
        Entity::new(index, generation)
    }

    /// Get the number of currently alive entities.
    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }

    /// Clear all entities, invalidating every outstanding handle.
    pub fn clear(&mut self) {
        for gen in &mut self.generations {
            *gen += 1;
        }
        self.free_indices.clear();
        for i in 0..self.next_fresh {
            self.free_indices.push(i);
        }
        self.alive_count = 0;
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        assert_eq!(alloc.alive_count(), 2);
        assert!(alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));

        alloc.free(e1);
        assert_eq!(alloc.alive_count(), 1);
        assert!(!alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));
    }

    #[test]
    fn test_generation_prevents_reuse_collision() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        let old_gen = e1.generation();
        alloc.free(e1);

        // Reuses slot 0 but with a new generation
        let e2 = alloc.allocate();
        assert_eq!(e2.index(), e1.index());
        assert_ne!(e2.generation(), old_gen);

        // The old handle no longer matches
        assert!(!alloc.is_alive(e1));
        assert!(alloc.is_alive(e2));
    }

    #[test]
    fn test_double_free_is_noop() {
        let mut alloc = EntityAllocator::new();

        let e = alloc.allocate();
        assert!(alloc.free(e));
        assert!(!alloc.free(e));
        assert_eq!(alloc.alive_count(), 0);
    }

    #[test]
    fn test_handle_rebuilds_current_generation() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        alloc.free(e1);
        let e2 = alloc.allocate();

        let rebuilt = alloc.handle(e2.index());
        assert_eq!(rebuilt, e2);
        assert!(alloc.is_alive(rebuilt));
    }

    #[test]
    fn test_clear_invalidates_all() {
        let mut alloc = EntityAllocator::new();

        let e1 = alloc.allocate();
        let e2 = alloc.allocate();
        alloc.clear();

        assert_eq!(alloc.alive_count(), 0);
        assert!(!alloc.is_alive(e1));
        assert!(!alloc.is_alive(e2));
    }

    #[test]
    fn test_null_entity() {
        let alloc = EntityAllocator::new();
        assert!(!alloc.is_alive(Entity::NULL));
        assert!(Entity::NULL.is_null());
    }
}
