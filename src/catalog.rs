//! Level catalog
//!
//! The immutable table of hand-authored level definitions. Levels are
//! bundled as RON files and embedded at compile time so the same binary
//! works on native and WASM without filesystem access.
//!
//! Levels are numbered consecutively from 1. Asking for a level past the
//! authored maximum returns None; that is not an error but the signal
//! that the playthrough is complete.

use macroquad::prelude::{vec2, Vec2};
use ron::error::SpannedError;
use serde::{Deserialize, Serialize};

/// A 2D point in the authored level data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn to_vec2(self) -> Vec2 {
        vec2(self.x, self.y)
    }
}

/// A static platform, positioned by its top-left corner (64x32 slab).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub pos: Point,
}

/// A patrolling enemy: start position, initial direction and speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemySpec {
    pub pos: Point,
    /// -1.0 (left) or +1.0 (right)
    pub dir: f32,
    /// Patrol speed in units/s, always positive
    pub speed: f32,
}

/// A collectible coin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoinSpec {
    pub pos: Point,
}

/// One complete level: where the player starts, what stands in the
/// world, and where the goal is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub player_start: Point,
    pub platforms: Vec<PlatformSpec>,
    pub enemies: Vec<EnemySpec>,
    pub coins: Vec<CoinSpec>,
    pub goal: Point,
}

/// The read-only level table. No mutation API by design.
pub struct LevelCatalog {
    levels: Vec<LevelDefinition>,
}

/// Bundled level sources, in play order.
const LEVEL_SOURCES: [&str; 3] = [
    include_str!("../assets/levels/level1.ron"),
    include_str!("../assets/levels/level2.ron"),
    include_str!("../assets/levels/level3.ron"),
];

impl LevelCatalog {
    /// Parse the bundled levels. Fails only if a bundled file is
    /// malformed, which is a packaging defect rather than a runtime
    /// condition.
    pub fn load() -> Result<Self, SpannedError> {
        let levels = LEVEL_SOURCES
            .iter()
            .map(|src| ron::from_str(src))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { levels })
    }

    /// Look up a level by its 1-based number. None past the last
    /// authored level means "all levels complete".
    pub fn get(&self, number: u32) -> Option<&LevelDefinition> {
        number
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx as usize))
    }

    /// Number of authored levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_levels_parse() {
        let catalog = LevelCatalog::load().expect("bundled levels must parse");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_lookup_is_one_based() {
        let catalog = LevelCatalog::load().unwrap();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(1).is_some());
        assert!(catalog.get(3).is_some());
        // Past the authored maximum: the all-complete signal
        assert!(catalog.get(4).is_none());
    }

    #[test]
    fn test_level_one_contents() {
        let catalog = LevelCatalog::load().unwrap();
        let level = catalog.get(1).unwrap();

        assert_eq!(level.player_start.to_vec2(), vec2(100.0, 400.0));
        assert_eq!(level.platforms.len(), 20);
        assert_eq!(level.enemies.len(), 2);
        assert_eq!(level.coins.len(), 4);
        assert_eq!(level.goal.to_vec2(), vec2(900.0, 330.0));

        let first_enemy = &level.enemies[0];
        assert_eq!(first_enemy.dir, 1.0);
        assert_eq!(first_enemy.speed, 50.0);
    }

    #[test]
    fn test_enemy_specs_are_sane() {
        let catalog = LevelCatalog::load().unwrap();
        for number in 1..=catalog.len() as u32 {
            let level = catalog.get(number).unwrap();
            for enemy in &level.enemies {
                assert!(enemy.dir == 1.0 || enemy.dir == -1.0);
                assert!(enemy.speed > 0.0);
            }
        }
    }
}
