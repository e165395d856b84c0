//! The aggregate error returned by [`Environment`](crate::env::Environment).

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use gridlet_core::{ActionError, LayoutError, ObsError, PlacementError};

use crate::config::ConfigError;

/// Any failure surfaced by the environment façade.
///
/// Component errors pass through unchanged; nothing is retried.
#[derive(Debug, PartialEq)]
pub enum EnvError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// No free cell was left for an entity.
    Placement(PlacementError),
    /// An action code outside `0..4`.
    Action(ActionError),
    /// A hand-authored episode was malformed.
    Layout(LayoutError),
    /// Rendering failed.
    Obs(ObsError),
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Placement(e) => write!(f, "placement: {e}"),
            Self::Action(e) => write!(f, "action: {e}"),
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::Obs(e) => write!(f, "observation: {e}"),
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Placement(e) => Some(e),
            Self::Action(e) => Some(e),
            Self::Layout(e) => Some(e),
            Self::Obs(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EnvError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PlacementError> for EnvError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

impl From<ActionError> for EnvError {
    fn from(e: ActionError) -> Self {
        Self::Action(e)
    }
}

impl From<LayoutError> for EnvError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<ObsError> for EnvError {
    fn from(e: ObsError) -> Self {
        Self::Obs(e)
    }
}

// Lets `step` take an `Action` through the same `TryInto` path as raw codes.
impl From<Infallible> for EnvError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
