//! Per-episode counters.
//!
//! [`EpisodeStats`] accumulates over the steps of one episode and is
//! zeroed on every reset. Purely informational: nothing in the engine
//! reads it back.

use gridlet_core::EntityKind;

use crate::collision::Collision;
use crate::movement::Movement;

/// Running totals for the current episode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeStats {
    /// Steps taken since the last reset.
    pub steps: u64,
    /// Sum of step rewards, accumulated in `f64`.
    pub total_reward: f64,
    /// Goals consumed.
    pub goals_collected: u64,
    /// Hazards consumed.
    pub hazards_hit: u64,
    /// Moves blocked by the grid edge.
    pub blocked_moves: u64,
}

impl EpisodeStats {
    /// Fold one step into the totals.
    pub fn record(&mut self, movement: &Movement, collision: &Collision, reward: f32) {
        self.steps += 1;
        self.total_reward += f64::from(reward);
        if movement.blocked {
            self.blocked_moves += 1;
        }
        match collision.consumed.map(|c| c.kind) {
            Some(EntityKind::Goal) => self.goals_collected += 1,
            Some(EntityKind::Hazard) => self.hazards_hit += 1,
            Some(EntityKind::Agent) | None => {}
        }
    }

    /// Mean reward per step, or 0.0 before the first step.
    pub fn mean_reward(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.total_reward / self.steps as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Consumption;
    use gridlet_core::Position;

    fn moved(blocked: bool) -> Movement {
        let p = Position::new(0, 0);
        Movement {
            from: p,
            to: p,
            blocked,
        }
    }

    fn consumed(kind: EntityKind, reward: f32) -> Collision {
        Collision {
            reward,
            done: false,
            consumed: Some(Consumption {
                kind,
                at: Position::new(0, 0),
                respawned_at: Position::new(1, 1),
            }),
        }
    }

    #[test]
    fn default_stats_are_zero() {
        let s = EpisodeStats::default();
        assert_eq!(s.steps, 0);
        assert_eq!(s.total_reward, 0.0);
        assert_eq!(s.mean_reward(), 0.0);
    }

    #[test]
    fn record_counts_each_outcome() {
        let mut s = EpisodeStats::default();
        s.record(&moved(false), &consumed(EntityKind::Goal, 1.0), 1.0);
        s.record(&moved(false), &consumed(EntityKind::Hazard, -1.0), -1.0);
        s.record(&moved(true), &Collision::NONE, -0.25);
        s.record(&moved(false), &consumed(EntityKind::Goal, 1.0), 1.0);
        assert_eq!(s.steps, 4);
        assert_eq!(s.goals_collected, 2);
        assert_eq!(s.hazards_hit, 1);
        assert_eq!(s.blocked_moves, 1);
        assert_eq!(s.total_reward, 0.75);
        assert_eq!(s.mean_reward(), 0.1875);
    }
}
