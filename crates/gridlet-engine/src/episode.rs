//! The mutable state of one episode.
//!
//! An [`Episode`] is an ordered entity list on a [`SquareGrid`], with the
//! agent always at index 0. Only the movement and collision resolvers in
//! this crate mutate it; reset replaces it wholesale.

use gridlet_core::{Entity, EntityKind, LayoutError, PlacementError, Position, SceneAccess};
use gridlet_space::{allocate, SquareGrid};
use rand::Rng;

use crate::config::EntityStyles;

/// Entities of one episode, agent first.
#[derive(Clone, Debug, PartialEq)]
pub struct Episode {
    grid: SquareGrid,
    entities: Vec<Entity>,
}

impl Episode {
    /// Populate a fresh episode with random, pairwise distinct positions.
    ///
    /// Places the agent first, then `goal_count` goals, then
    /// `hazard_count` hazards, each draw treating every earlier entity as
    /// occupied. Draw order is fixed, so a seeded `rng` reproduces the
    /// same layout.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::ExhaustedGrid`] if the grid has fewer
    /// than `1 + goal_count + hazard_count` cells.
    pub fn populate<R: Rng + ?Sized>(
        grid: SquareGrid,
        goal_count: usize,
        hazard_count: usize,
        styles: &EntityStyles,
        rng: &mut R,
    ) -> Result<Self, PlacementError> {
        let mut episode = Self {
            grid,
            entities: Vec::with_capacity(1 + goal_count + hazard_count),
        };
        episode.spawn(EntityKind::Agent, styles, rng)?;
        for _ in 0..goal_count {
            episode.spawn(EntityKind::Goal, styles, rng)?;
        }
        for _ in 0..hazard_count {
            episode.spawn(EntityKind::Hazard, styles, rng)?;
        }
        Ok(episode)
    }

    /// Build an episode from a hand-authored layout.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] unless the agent is first and unique and
    /// every position is inside the grid and distinct.
    pub fn from_entities(grid: SquareGrid, entities: Vec<Entity>) -> Result<Self, LayoutError> {
        let agents = entities.iter().filter(|e| e.is_agent()).count();
        match entities.iter().position(Entity::is_agent) {
            None => return Err(LayoutError::NoAgent),
            Some(0) => {}
            Some(index) => return Err(LayoutError::AgentNotFirst { index }),
        }
        if agents > 1 {
            return Err(LayoutError::MultipleAgents { count: agents });
        }

        let mut seen = vec![false; grid.cell_count()];
        for e in &entities {
            let rank = grid
                .canonical_rank(e.position)
                .ok_or(LayoutError::OutOfBounds {
                    position: e.position,
                    size: grid.size(),
                })?;
            if std::mem::replace(&mut seen[rank], true) {
                return Err(LayoutError::Overlap {
                    position: e.position,
                });
            }
        }
        Ok(Self { grid, entities })
    }

    /// Build an episode without layout checks.
    #[cfg(test)]
    pub(crate) fn unchecked(grid: SquareGrid, entities: Vec<Entity>) -> Self {
        Self { grid, entities }
    }

    /// The grid this episode lives on.
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    /// The agent.
    pub fn agent(&self) -> &Entity {
        &self.entities[0]
    }

    /// All entities, agent first.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Positions of every entity, agent included.
    pub fn occupied(&self) -> Vec<Position> {
        self.entities.iter().map(|e| e.position).collect()
    }

    /// Number of entities of `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    pub(crate) fn agent_mut(&mut self) -> &mut Entity {
        &mut self.entities[0]
    }

    /// Remove the entity at `index` and append a fresh one of the same
    /// kind on a random free cell. The rest keep their order.
    ///
    /// The new cell is drawn before anything is removed, so on error the
    /// episode is unchanged. The removed entity's cell counts as
    /// occupied for the draw.
    pub(crate) fn replace<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        styles: &EntityStyles,
        rng: &mut R,
    ) -> Result<(Entity, Position), PlacementError> {
        debug_assert!(index > 0, "the agent is never replaced");
        let position = allocate(&self.grid, &self.occupied(), rng)?;
        let removed = self.entities.remove(index);
        let kind = removed.kind;
        self.entities
            .push(Entity::from_style(kind, position, styles.get(kind)));
        Ok((removed, position))
    }

    /// Append a new entity of `kind` on a random free cell.
    fn spawn<R: Rng + ?Sized>(
        &mut self,
        kind: EntityKind,
        styles: &EntityStyles,
        rng: &mut R,
    ) -> Result<Position, PlacementError> {
        let position = allocate(&self.grid, &self.occupied(), rng)?;
        self.entities
            .push(Entity::from_style(kind, position, styles.get(kind)));
        Ok(position)
    }
}

impl SceneAccess for Episode {
    fn grid_size(&self) -> u32 {
        self.grid.size()
    }

    fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn agent(&self) -> Option<&Entity> {
        self.entities.first()
    }
}
