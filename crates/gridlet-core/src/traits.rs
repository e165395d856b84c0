//! Read-only access to a scene for rendering and inspection.

use crate::entity::{Entity, EntityKind};

/// Read-only view over one episode's entities.
///
/// Implemented by the engine's episode state and by test mocks. The
/// renderer only ever sees a scene through this trait.
pub trait SceneAccess {
    /// Grid side length.
    fn grid_size(&self) -> u32;

    /// Live entities in draw order.
    fn entities(&self) -> &[Entity];

    /// The agent entity, if present.
    ///
    /// The default scans [`entities`](Self::entities) for the first
    /// entity of kind [`EntityKind::Agent`].
    fn agent(&self) -> Option<&Entity> {
        self.entities().iter().find(|e| e.kind == EntityKind::Agent)
    }
}
