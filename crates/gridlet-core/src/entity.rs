//! Grid positions, placed entities, and per-kind entity styles.

use std::fmt;

/// Number of colour planes in a rendered frame.
///
/// Every entity paints into exactly one of these planes, selected by
/// [`Entity::channel`].
pub const CHANNELS: usize = 3;

/// A cell coordinate on the square grid.
///
/// `x` is the column and `y` is the row, both 0-indexed. Moving
/// [`Up`](crate::Action::Up) decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Position {
    /// Construct a position from a column and a row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position shifted by `(dx, dy)`. No bounds checking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// What an entity is, which decides how a collision with it is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The single agent-controlled entity.
    Agent,
    /// A rewarding target; consumed and respawned on contact.
    Goal,
    /// A penalising target; consumed and respawned on contact.
    Hazard,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agent => write!(f, "agent"),
            Self::Goal => write!(f, "goal"),
            Self::Hazard => write!(f, "hazard"),
        }
    }
}

/// A placed object on the grid.
///
/// Plain data. Construction performs no validation; callers are
/// responsible for passing a channel below [`CHANNELS`] and a position
/// inside the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Top-left cell of the entity.
    pub position: Position,
    /// Side length in cells of the painted block (1 for every reference entity).
    pub footprint: u32,
    /// Value painted into the entity's colour plane.
    pub intensity: f32,
    /// Colour plane the entity paints, in `0..CHANNELS`.
    pub channel: u8,
    /// Reward granted when the agent collides with this entity.
    /// `None` for the agent itself.
    pub reward: Option<f32>,
    /// Entity kind.
    pub kind: EntityKind,
}

impl Entity {
    /// Construct an entity from its raw attributes.
    pub fn new(
        position: Position,
        footprint: u32,
        intensity: f32,
        channel: u8,
        reward: Option<f32>,
        kind: EntityKind,
    ) -> Self {
        Self {
            position,
            footprint,
            intensity,
            channel,
            reward,
            kind,
        }
    }

    /// Construct an entity of `kind` at `position` from a style template.
    pub fn from_style(kind: EntityKind, position: Position, style: &EntityStyle) -> Self {
        Self::new(
            position,
            style.footprint,
            style.intensity,
            style.channel,
            style.reward,
            kind,
        )
    }

    /// Whether this entity is the agent.
    pub fn is_agent(&self) -> bool {
        self.kind == EntityKind::Agent
    }
}

/// Visual and reward template for one entity kind.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityStyle {
    /// Painted block side length.
    pub footprint: u32,
    /// Painted value.
    pub intensity: f32,
    /// Colour plane.
    pub channel: u8,
    /// Collision reward, `None` for the agent.
    pub reward: Option<f32>,
}

impl EntityStyle {
    /// Reference agent style: blue plane, no reward.
    pub fn agent() -> Self {
        Self {
            footprint: 1,
            intensity: 1.0,
            channel: 2,
            reward: None,
        }
    }

    /// Reference goal style: green plane, reward `+1`.
    pub fn goal() -> Self {
        Self {
            footprint: 1,
            intensity: 1.0,
            channel: 1,
            reward: Some(1.0),
        }
    }

    /// Reference hazard style: red plane, reward `-1`.
    pub fn hazard() -> Self {
        Self {
            footprint: 1,
            intensity: 1.0,
            channel: 0,
            reward: Some(-1.0),
        }
    }
}
