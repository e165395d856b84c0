//! Core types and traits for the gridlet grid-world simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! grid positions, entities and their styles, the discrete action set,
//! the error taxonomy, and the [`SceneAccess`] read trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod entity;
pub mod error;
pub mod traits;

pub use action::Action;
pub use entity::{Entity, EntityKind, EntityStyle, Position, CHANNELS};
pub use error::{ActionError, LayoutError, ObsError, PlacementError};
pub use traits::SceneAccess;
