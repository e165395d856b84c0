//! Gridlet: a deterministic grid-world environment for reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridlet sub-crates. For most users, adding `gridlet` as a single dependency
//! is sufficient.
//!
//! An agent walks a square grid collecting goals (+1) and avoiding hazards
//! (−1). Consumed entities respawn on a random free cell, so the episode
//! never runs out of either. Observations are `84×84×3` frames of the whole
//! grid or of a 3×3 window around the agent.
//!
//! # Quick start
//!
//! ```rust
//! use gridlet::prelude::*;
//!
//! let mut env = Environment::new(EnvConfig::new(false, 5)).unwrap();
//! assert_eq!(env.observation_shape(), [84, 84, 3]);
//!
//! let mut total = 0.0;
//! for t in 0..50 {
//!     let result = env.step(Action::ALL[t % 4]).unwrap();
//!     assert!(!result.done);
//!     total += result.reward;
//! }
//! assert_eq!(env.stats().steps, 50);
//! assert_eq!(env.stats().total_reward, f64::from(total));
//!
//! // Same seed, same episode.
//! let first = env.reset_with_seed(3).unwrap();
//! assert_eq!(env.reset_with_seed(3).unwrap(), first);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridlet-core` | Positions, entities, actions, errors, `SceneAccess` |
//! | [`space`] | `gridlet-space` | The square grid and free-cell placement |
//! | [`obs`] | `gridlet-obs` | Canvas painting, cropping, resizing, rendering |
//! | [`engine`] | `gridlet-engine` | Episodes, movement, collisions, the environment |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`gridlet-core`).
///
/// Contains [`types::Position`], [`types::Entity`], [`types::Action`], the
/// error enums, and the [`types::SceneAccess`] read trait.
pub use gridlet_core as types;

/// Grid geometry and placement (`gridlet-space`).
///
/// Provides [`space::SquareGrid`] and the [`space::allocate`] placement
/// allocator.
pub use gridlet_space as space;

/// Observation rendering (`gridlet-obs`).
///
/// [`obs::Renderer`] turns any [`types::SceneAccess`] into an [`obs::Frame`].
pub use gridlet_obs as obs;

/// Episode engine (`gridlet-engine`).
///
/// [`engine::Environment`] is the reset/step façade; [`engine::Episode`],
/// [`engine::apply_move`] and [`engine::resolve_collision`] are the pieces
/// it is built from.
pub use gridlet_engine as engine;

/// Common imports for typical gridlet usage.
///
/// ```rust
/// use gridlet::prelude::*;
/// ```
///
/// This imports the environment, its configuration, the action set, the
/// observation frame, and the error types.
pub mod prelude {
    // Core types
    pub use gridlet_core::{Action, Entity, EntityKind, EntityStyle, Position, SceneAccess};

    // Errors
    pub use gridlet_core::{ActionError, LayoutError, ObsError, PlacementError};

    // Space
    pub use gridlet_space::SquareGrid;

    // Observation
    pub use gridlet_obs::{Frame, RenderSpec, Renderer, ViewMode};

    // Engine
    pub use gridlet_engine::{
        ConfigError, EntityStyles, EnvConfig, EnvError, Environment, Episode, EpisodeStats,
        StepResult,
    };
}
