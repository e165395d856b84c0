//! Error types for the gridlet simulator.
//!
//! Organised by the subsystem that raises them: placement, action
//! decoding, hand-authored layouts, and observation rendering. Each is
//! a local precondition violation with no recovery inside the
//! simulator; they propagate to the environment caller unmodified.

use std::error::Error;
use std::fmt;

use crate::entity::{Position, CHANNELS};

/// Errors from the placement allocator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// Every cell of the grid is occupied.
    ExhaustedGrid {
        /// Grid side length.
        size: u32,
        /// Number of distinct occupied cells at the time of the request.
        occupied: usize,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExhaustedGrid { size, occupied } => write!(
                f,
                "no free cell on {size}x{size} grid ({occupied} cells occupied)"
            ),
        }
    }
}

impl Error for PlacementError {}

/// Errors from decoding an integer action code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The code is outside `0..4`.
    InvalidAction {
        /// The rejected code.
        code: i64,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { code } => {
                write!(f, "invalid action code {code}, expected 0..4")
            }
        }
    }
}

impl Error for ActionError {}

/// Errors from validating a hand-authored entity layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout contains no agent.
    NoAgent,
    /// The agent is not the first entity.
    AgentNotFirst {
        /// Index at which the agent was found.
        index: usize,
    },
    /// More than one agent is present.
    MultipleAgents {
        /// Number of agents found.
        count: usize,
    },
    /// An entity lies outside the grid.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid side length.
        size: u32,
    },
    /// Two entities share a cell.
    Overlap {
        /// The shared position.
        position: Position,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAgent => write!(f, "layout has no agent"),
            Self::AgentNotFirst { index } => {
                write!(f, "agent must be the first entity, found at index {index}")
            }
            Self::MultipleAgents { count } => {
                write!(f, "layout has {count} agents, expected exactly 1")
            }
            Self::OutOfBounds { position, size } => {
                write!(f, "entity at {position} outside [0, {size}) x [0, {size})")
            }
            Self::Overlap { position } => write!(f, "multiple entities at {position}"),
        }
    }
}

impl Error for LayoutError {}

/// Errors from the observation renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObsError {
    /// A partial view was requested on a scene without an agent.
    MissingAgent,
    /// An entity names a colour plane outside `0..CHANNELS`.
    ChannelOutOfRange {
        /// The offending channel.
        channel: u8,
    },
    /// Malformed renderer configuration.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ObsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAgent => write!(f, "partial view requires an agent in the scene"),
            Self::ChannelOutOfRange { channel } => {
                write!(f, "channel {channel} out of range, expected 0..{CHANNELS}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid render config: {reason}"),
        }
    }
}

impl Error for ObsError {}
