//! Collision detection, reward, and replace-on-consumption.
//!
//! After every move the agent's cell is checked against the other
//! entities. The first one found there is consumed: it is removed, a
//! fresh entity of the same kind spawns on a random free cell, and its
//! reward is paid out. Goal and hazard counts therefore never change
//! within an episode.

use gridlet_core::{EntityKind, PlacementError, Position};
use rand::Rng;

use crate::config::EntityStyles;
use crate::episode::Episode;

/// An entity the agent ran into, and its replacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Consumption {
    /// Kind of the consumed entity (and of its replacement).
    pub kind: EntityKind,
    /// Cell where it was consumed, i.e. the agent's cell.
    pub at: Position,
    /// Cell where the replacement spawned.
    pub respawned_at: Position,
}

/// Outcome of one collision check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    /// Reward of the consumed entity, or 0.0.
    pub reward: f32,
    /// Episode termination. Always false: episodes never end on their own.
    pub done: bool,
    /// What was consumed, if anything.
    pub consumed: Option<Consumption>,
}

impl Collision {
    /// No collision this step.
    pub const NONE: Collision = Collision {
        reward: 0.0,
        done: false,
        consumed: None,
    };
}

/// Resolve a collision between the agent and whatever shares its cell.
///
/// Entities are scanned in episode order and only the first match is
/// consumed. The replacement is placed with every remaining entity,
/// the agent included, counted as occupied, and is appended to the end
/// of the episode.
///
/// # Errors
///
/// Returns [`PlacementError::ExhaustedGrid`] if no cell is free for the
/// replacement; the episode is then unchanged. A valid episode always
/// has one: the agent's previous cell was vacated by the move that
/// caused the collision.
pub fn resolve_collision<R: Rng + ?Sized>(
    episode: &mut Episode,
    styles: &EntityStyles,
    rng: &mut R,
) -> Result<Collision, PlacementError> {
    let at = episode.agent().position;
    let hit = episode
        .entities()
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(i, e)| (e.position == at).then_some(i));
    let Some(index) = hit else {
        return Ok(Collision::NONE);
    };

    let (consumed, respawned_at) = episode.replace(index, styles, rng)?;
    let reward = consumed.reward.unwrap_or(0.0);
    tracing::debug!(
        kind = %consumed.kind,
        at = %at,
        respawned_at = %respawned_at,
        reward,
        "entity consumed"
    );
    Ok(Collision {
        reward,
        done: false,
        consumed: Some(Consumption {
            kind: consumed.kind,
            at,
            respawned_at,
        }),
    })
}
