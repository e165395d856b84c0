//! Hand-authored entity layouts.
//!
//! Each layout is agent-first with pairwise distinct positions, so it
//! can be passed straight to the engine's episode constructor.

use crate::{agent_at, goal_at, hazard_at};
use gridlet_core::{Entity, EntityKind, Position};

/// 5x5 layout with the agent at `(2, 2)` and a goal directly above it
/// at `(2, 1)`: one `Up` collects the goal.
pub fn goal_above_agent_layout() -> Vec<Entity> {
    vec![
        agent_at(2, 2),
        goal_at(2, 1),
        goal_at(0, 4),
        goal_at(4, 0),
        hazard_at(3, 3),
        hazard_at(0, 0),
    ]
}

/// 5x5 layout with the agent pinned in the top-left corner.
pub fn corner_layout() -> Vec<Entity> {
    vec![
        agent_at(0, 0),
        goal_at(4, 4),
        goal_at(3, 4),
        goal_at(4, 3),
        hazard_at(2, 2),
        hazard_at(1, 3),
    ]
}

/// A layout where a hazard and then a goal both sit on `(1, 0)`, one
/// step right of the agent. Violates distinctness on purpose, to pin
/// the first-match tie-break, so layout validation rejects it.
pub fn tie_layout() -> Vec<Entity> {
    vec![
        agent_at(0, 0),
        hazard_at(1, 0),
        goal_at(1, 0),
        goal_at(2, 2),
    ]
}

/// A `size x size` layout that fills every cell but one: agent at
/// `(0, 0)`, hazards along the first row, goals elsewhere, and
/// `(size-1, size-1)` left free.
pub fn crowded_layout(size: u32) -> Vec<Entity> {
    let n = size as i32;
    let mut entities = vec![agent_at(0, 0)];
    for y in 0..n {
        for x in 0..n {
            let p = Position::new(x, y);
            if p == Position::new(0, 0) || p == Position::new(n - 1, n - 1) {
                continue;
            }
            if y == 0 {
                entities.push(hazard_at(x, y));
            } else {
                entities.push(goal_at(x, y));
            }
        }
    }
    entities
}

/// Number of entities of `kind` in `entities`.
pub fn count_kind(entities: &[Entity], kind: EntityKind) -> usize {
    entities.iter().filter(|e| e.kind == kind).count()
}
