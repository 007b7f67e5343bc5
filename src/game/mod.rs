//! Game foundation module
//!
//! A small ECS-style framework for the platformer:
//! - Entity: generational index for safe entity references
//! - Component: plain data structs attached to entities
//! - World: container for all entities and their components
//! - Event: contact queue between the collision pass and the session
//!
//! The component set is closed and known at compile time; each entity
//! kind (player, platform, enemy, coin, goal, effect) is a fixed
//! combination built by the typed spawners on `World`.

pub mod component;
pub mod components;
pub mod entity;
pub mod event;
pub mod physics;
pub mod world;

pub use entity::Entity;
pub use event::Events;
pub use world::World;
