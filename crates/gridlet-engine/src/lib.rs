//! Episode engine for the gridlet grid-world simulator.
//!
//! Owns the mutable episode state and the rules that change it:
//! populating an episode, moving the agent, resolving collisions with
//! replace-on-consumption, and the [`Environment`] reset/step façade
//! that ties them to the observation renderer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collision;
pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod movement;
pub mod stats;

pub use collision::{resolve_collision, Collision, Consumption};
pub use config::{ConfigError, EntityStyles, EnvConfig};
pub use env::{Environment, StepInfo, StepResult};
pub use episode::Episode;
pub use error::EnvError;
pub use movement::{apply_move, Movement};
pub use stats::EpisodeStats;
