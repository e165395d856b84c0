//! Agent movement.

use gridlet_core::{Action, Position};

use crate::episode::Episode;

/// Outcome of one move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    /// Agent position before the move.
    pub from: Position,
    /// Agent position after the move; equals `from` when blocked.
    pub to: Position,
    /// Whether the move would have left the grid.
    pub blocked: bool,
}

/// Move the agent one cell in the direction of `action`.
///
/// A move that would leave `[0, size)` on either axis is blocked: the
/// agent stays where it is and no error is raised. The grid never wraps.
/// Other entities are not consulted; stepping onto one is handled by
/// [`resolve_collision`](crate::collision::resolve_collision).
pub fn apply_move(episode: &mut Episode, action: Action) -> Movement {
    let from = episode.agent().position;
    match episode.grid().translate(from, action) {
        Some(to) => {
            episode.agent_mut().position = to;
            Movement {
                from,
                to,
                blocked: false,
            }
        }
        None => {
            tracing::trace!(?action, position = %from, "move blocked by grid edge");
            Movement {
                from,
                to: from,
                blocked: true,
            }
        }
    }
}
