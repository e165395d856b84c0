//! Render specification types.

use gridlet_core::ObsError;

/// Which part of the canvas an observation shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// The whole bordered canvas (fully observable).
    Full,
    /// A square window around the agent (partially observable).
    Partial {
        /// Window side length in canvas cells. Must be odd so the agent
        /// sits at its centre; the reference view uses 3.
        window: u32,
    },
}

impl ViewMode {
    /// The reference partial view: a 3x3 window.
    pub const LOCAL_3X3: ViewMode = ViewMode::Partial { window: 3 };

    /// `Full` when `partial` is false, otherwise [`LOCAL_3X3`](Self::LOCAL_3X3).
    pub fn from_partial(partial: bool) -> Self {
        if partial {
            Self::LOCAL_3X3
        } else {
            Self::Full
        }
    }
}

/// How to turn a scene into an observation frame.
///
/// # Examples
///
/// ```
/// use gridlet_obs::{RenderSpec, ViewMode};
///
/// let spec = RenderSpec::default();
/// assert_eq!(spec.output_shape(), [84, 84, 3]);
/// assert_eq!(spec.view, ViewMode::Full);
///
/// let partial = RenderSpec { view: ViewMode::LOCAL_3X3, ..RenderSpec::default() };
/// assert!(partial.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSpec {
    /// Full canvas or agent-local window.
    pub view: ViewMode,
    /// Output rows. Default: 84.
    pub output_height: usize,
    /// Output columns. Default: 84.
    pub output_width: usize,
}

impl Default for RenderSpec {
    fn default() -> Self {
        Self {
            view: ViewMode::Full,
            output_height: 84,
            output_width: 84,
        }
    }
}

impl RenderSpec {
    /// `[output_height, output_width, CHANNELS]`.
    pub fn output_shape(&self) -> [usize; 3] {
        [
            self.output_height,
            self.output_width,
            gridlet_core::CHANNELS,
        ]
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ObsError::InvalidConfig`] for a zero output dimension or
    /// a partial window that is zero or even.
    pub fn validate(&self) -> Result<(), ObsError> {
        if self.output_height == 0 || self.output_width == 0 {
            return Err(ObsError::InvalidConfig {
                reason: format!(
                    "output size must be non-zero, got {}x{}",
                    self.output_height, self.output_width
                ),
            });
        }
        if let ViewMode::Partial { window } = self.view {
            if window == 0 || window % 2 == 0 {
                return Err(ObsError::InvalidConfig {
                    reason: format!("partial window must be odd and non-zero, got {window}"),
                });
            }
        }
        Ok(())
    }
}
