//! Environment configuration, validation, and error types.
//!
//! [`EnvConfig`] is the input for constructing an
//! [`Environment`](crate::env::Environment).
//! [`validate()`](EnvConfig::validate) checks structural invariants up
//! front. Whether the configured entities fit on the grid is not checked
//! here: the first reset reports that as
//! [`PlacementError::ExhaustedGrid`](gridlet_core::PlacementError::ExhaustedGrid).

use std::error::Error;
use std::fmt;

use gridlet_core::{EntityKind, EntityStyle, ObsError, CHANNELS};
use gridlet_obs::{RenderSpec, ViewMode};
use gridlet_space::{SpaceError, SquareGrid};

// ── EntityStyles ───────────────────────────────────────────────────

/// The per-kind templates entities are built from.
///
/// Consumed entities respawn with the style of their kind, so a style
/// change applies to every entity of that kind for the whole episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityStyles {
    /// Agent template. Default: footprint 1, intensity 1.0, channel 2, no reward.
    pub agent: EntityStyle,
    /// Goal template. Default: footprint 1, intensity 1.0, channel 1, reward +1.0.
    pub goal: EntityStyle,
    /// Hazard template. Default: footprint 1, intensity 1.0, channel 0, reward −1.0.
    pub hazard: EntityStyle,
}

impl Default for EntityStyles {
    fn default() -> Self {
        Self {
            agent: EntityStyle::agent(),
            goal: EntityStyle::goal(),
            hazard: EntityStyle::hazard(),
        }
    }
}

impl EntityStyles {
    /// The template for `kind`.
    pub fn get(&self, kind: EntityKind) -> &EntityStyle {
        match kind {
            EntityKind::Agent => &self.agent,
            EntityKind::Goal => &self.goal,
            EntityKind::Hazard => &self.hazard,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in [EntityKind::Agent, EntityKind::Goal, EntityKind::Hazard] {
            let style = self.get(kind);
            let invalid = |reason: String| ConfigError::InvalidStyle { kind, reason };
            if style.footprint == 0 {
                return Err(invalid("footprint must be at least 1".to_string()));
            }
            if style.channel as usize >= CHANNELS {
                return Err(invalid(format!(
                    "channel {} is not below {CHANNELS}",
                    style.channel
                )));
            }
            if !style.intensity.is_finite() {
                return Err(invalid(format!(
                    "intensity must be finite, got {}",
                    style.intensity
                )));
            }
            if let Some(reward) = style.reward {
                if !reward.is_finite() {
                    return Err(invalid(format!("reward must be finite, got {reward}")));
                }
            }
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnvConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The grid size is zero or too large.
    Grid(SpaceError),
    /// The render settings are invalid.
    Render(ObsError),
    /// An entity style is unusable.
    InvalidStyle {
        /// Which kind's style failed.
        kind: EntityKind,
        /// Description of the failure.
        reason: String,
    },
    /// `blocked_move_penalty` is NaN or infinite.
    InvalidPenalty {
        /// The invalid value.
        value: f32,
    },
    /// A hand-authored episode was built on a grid of a different size.
    GridMismatch {
        /// `EnvConfig::size`.
        configured: u32,
        /// Size of the episode's grid.
        episode: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
            Self::InvalidStyle { kind, reason } => {
                write!(f, "invalid {kind} style: {reason}")
            }
            Self::InvalidPenalty { value } => {
                write!(f, "blocked_move_penalty must be finite, got {value}")
            }
            Self::GridMismatch {
                configured,
                episode,
            } => write!(
                f,
                "episode grid is {episode}x{episode} but config size is {configured}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Grid(e)
    }
}

impl From<ObsError> for ConfigError {
    fn from(e: ObsError) -> Self {
        Self::Render(e)
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Complete configuration for an [`Environment`](crate::env::Environment).
///
/// # Examples
///
/// ```
/// use gridlet_engine::EnvConfig;
///
/// let config = EnvConfig::new(true, 7);
/// assert_eq!(config.size, 7);
/// assert!(config.partial);
/// assert_eq!((config.goal_count, config.hazard_count), (3, 2));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnvConfig {
    /// Grid side length. Default: 5.
    pub size: u32,
    /// Render an agent-centred window instead of the whole grid. Default: false.
    pub partial: bool,
    /// Side of the partial-view window in canvas cells; odd. Default: 3.
    pub view_window: u32,
    /// Goals kept on the grid at all times. Default: 3.
    pub goal_count: usize,
    /// Hazards kept on the grid at all times. Default: 2.
    pub hazard_count: usize,
    /// Seed for the episode RNG. Default: 0.
    pub seed: u64,
    /// Observation rows. Default: 84.
    pub obs_height: usize,
    /// Observation columns. Default: 84.
    pub obs_width: usize,
    /// Per-kind entity templates.
    pub styles: EntityStyles,
    /// Added to the reward of a step whose move was blocked. Default: 0.0.
    pub blocked_move_penalty: f32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            size: 5,
            partial: false,
            view_window: 3,
            goal_count: 3,
            hazard_count: 2,
            seed: 0,
            obs_height: 84,
            obs_width: 84,
            styles: EntityStyles::default(),
            blocked_move_penalty: 0.0,
        }
    }
}

impl EnvConfig {
    /// Default configuration with the given view mode and grid size.
    pub fn new(partial: bool, size: u32) -> Self {
        Self {
            partial,
            size,
            ..Self::default()
        }
    }

    /// The grid this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Grid`] for a zero or oversized grid.
    pub fn grid(&self) -> Result<SquareGrid, ConfigError> {
        Ok(SquareGrid::new(self.size)?)
    }

    /// The renderer settings this configuration describes.
    pub fn render_spec(&self) -> RenderSpec {
        let view = if self.partial {
            ViewMode::Partial {
                window: self.view_window,
            }
        } else {
            ViewMode::Full
        };
        RenderSpec {
            view,
            output_height: self.obs_height,
            output_width: self.obs_width,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be non-empty and addressable.
        self.grid()?;
        // 2. Render settings. The window is only checked when used.
        self.render_spec().validate()?;
        // 3. Styles must paint a real channel with finite values.
        self.styles.validate()?;
        // 4. Penalty must not poison the reward stream.
        if !self.blocked_move_penalty.is_finite() {
            return Err(ConfigError::InvalidPenalty {
                value: self.blocked_move_penalty,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_environment() {
        let c = EnvConfig::default();
        assert_eq!(c.size, 5);
        assert!(!c.partial);
        assert_eq!(c.goal_count, 3);
        assert_eq!(c.hazard_count, 2);
        assert_eq!(c.render_spec().output_shape(), [84, 84, 3]);
        assert_eq!(c.blocked_move_penalty, 0.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_flag_selects_window() {
        let spec = EnvConfig::new(true, 5).render_spec();
        assert_eq!(spec.view, ViewMode::Partial { window: 3 });
        assert_eq!(EnvConfig::new(false, 5).render_spec().view, ViewMode::Full);
    }

    #[test]
    fn zero_size_rejected() {
        let c = EnvConfig::new(false, 0);
        assert_eq!(c.validate(), Err(ConfigError::Grid(SpaceError::EmptySpace)));
    }

    #[test]
    fn even_window_rejected_only_for_partial_view() {
        let mut c = EnvConfig::default();
        c.view_window = 4;
        assert!(c.validate().is_ok());
        c.partial = true;
        assert!(matches!(c.validate(), Err(ConfigError::Render(_))));
    }

    #[test]
    fn zero_output_rejected() {
        let c = EnvConfig {
            obs_height: 0,
            ..EnvConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::Render(_))));
    }

    #[test]
    fn bad_styles_rejected() {
        let mut c = EnvConfig::default();
        c.styles.goal.channel = 3;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidStyle {
                kind: EntityKind::Goal,
                ..
            })
        ));

        let mut c = EnvConfig::default();
        c.styles.hazard.reward = Some(f32::NAN);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidStyle {
                kind: EntityKind::Hazard,
                ..
            })
        ));

        let mut c = EnvConfig::default();
        c.styles.agent.footprint = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_finite_penalty_rejected() {
        let c = EnvConfig {
            blocked_move_penalty: f32::INFINITY,
            ..EnvConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidPenalty { .. })
        ));
    }

    #[test]
    fn overfull_grid_is_not_a_config_error() {
        let c = EnvConfig {
            size: 2,
            goal_count: 10,
            ..EnvConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn error_display_names_the_problem() {
        let e = ConfigError::GridMismatch {
            configured: 5,
            episode: 4,
        };
        assert!(e.to_string().contains("4x4"));
        assert!(ConfigError::Grid(SpaceError::EmptySpace).source().is_some());
    }
}
