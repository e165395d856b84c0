//! Test utilities and mock types for gridlet development.
//!
//! Provides a mock implementation of [`SceneAccess`], terse entity
//! builders using the reference styles, hand-authored layouts in
//! [`fixtures`], a seeded RNG helper, and an FNV-1a frame hash for
//! determinism checks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridlet_core::{Entity, EntityKind, EntityStyle, Position, SceneAccess};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use fixtures::{
    corner_layout, count_kind, crowded_layout, goal_above_agent_layout, tie_layout,
};

/// Mock scene implementing [`SceneAccess`].
///
/// Entities are drawn in the order given; no invariants are checked, so
/// tests can build deliberately malformed scenes.
#[derive(Clone, Debug)]
pub struct MockScene {
    size: u32,
    entities: Vec<Entity>,
}

impl MockScene {
    pub fn new(size: u32, entities: Vec<Entity>) -> Self {
        Self { size, entities }
    }
}

impl SceneAccess for MockScene {
    fn grid_size(&self) -> u32 {
        self.size
    }

    fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// Reference-style agent at `(x, y)`.
pub fn agent_at(x: i32, y: i32) -> Entity {
    Entity::from_style(EntityKind::Agent, Position::new(x, y), &EntityStyle::agent())
}

/// Reference-style goal at `(x, y)`.
pub fn goal_at(x: i32, y: i32) -> Entity {
    Entity::from_style(EntityKind::Goal, Position::new(x, y), &EntityStyle::goal())
}

/// Reference-style hazard at `(x, y)`.
pub fn hazard_at(x: i32, y: i32) -> Entity {
    Entity::from_style(EntityKind::Hazard, Position::new(x, y), &EntityStyle::hazard())
}

/// The RNG every engine component uses, seeded.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Hash flat frame data by the bit pattern of every value.
///
/// Two frames hash equal only if they are bit-identical, so `-0.0` and
/// `0.0` differ. Not cryptographic; used for cheap equality checks over
/// long rollouts.
pub fn frame_hash(data: &[f32]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &v in data {
        for &b in &v.to_bits().to_le_bytes() {
            hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
        }
    }
    hash
}
