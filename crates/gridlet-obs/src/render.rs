//! The observation renderer.

use crate::canvas::{paint_canvas, BORDER_VALUE};
use crate::frame::Frame;
use crate::geometry::CropWindow;
use crate::resize::resize_nearest_into;
use crate::spec::{RenderSpec, ViewMode};
use gridlet_core::{ObsError, SceneAccess};

/// Renders scenes into fixed-size observation frames.
///
/// Pipeline: [`paint_canvas`] → optional agent-centred crop → each
/// channel resized on its own with nearest-neighbour sampling → planes
/// stacked back into HWC order.
///
/// # Examples
///
/// ```
/// use gridlet_core::{Entity, EntityKind, EntityStyle, Position, SceneAccess};
/// use gridlet_obs::{RenderSpec, Renderer};
///
/// struct OneAgent(Vec<Entity>);
/// impl SceneAccess for OneAgent {
///     fn grid_size(&self) -> u32 { 5 }
///     fn entities(&self) -> &[Entity] { &self.0 }
/// }
///
/// let scene = OneAgent(vec![Entity::from_style(
///     EntityKind::Agent,
///     Position::new(2, 2),
///     &EntityStyle::agent(),
/// )]);
/// let renderer = Renderer::new(RenderSpec::default()).unwrap();
/// let frame = renderer.render(&scene).unwrap();
/// assert_eq!(frame.shape(), [84, 84, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Renderer {
    spec: RenderSpec,
}

impl Renderer {
    /// Create a renderer after validating `spec`.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderSpec::validate`] failures.
    pub fn new(spec: RenderSpec) -> Result<Self, ObsError> {
        spec.validate()?;
        Ok(Self { spec })
    }

    /// The validated render specification.
    pub fn spec(&self) -> &RenderSpec {
        &self.spec
    }

    /// Shape of every frame this renderer produces.
    pub fn output_shape(&self) -> [usize; 3] {
        self.spec.output_shape()
    }

    /// Render `scene` into an observation frame.
    ///
    /// Pure: never mutates the scene, and the same scene always yields
    /// the same frame.
    ///
    /// # Errors
    ///
    /// - [`ObsError::ChannelOutOfRange`] if an entity's channel is invalid.
    /// - [`ObsError::MissingAgent`] for a partial view of an agentless scene.
    pub fn render<S: SceneAccess + ?Sized>(&self, scene: &S) -> Result<Frame, ObsError> {
        let canvas = paint_canvas(scene)?;
        let view = match self.spec.view {
            ViewMode::Full => canvas,
            ViewMode::Partial { window } => {
                let agent = scene.agent().ok_or(ObsError::MissingAgent)?;
                let w = CropWindow::around(agent.position, window);
                canvas.crop(w.top, w.left, w.side, w.side, BORDER_VALUE)
            }
        };

        let out_h = self.spec.output_height;
        let out_w = self.spec.output_width;
        let in_shape = [view.height(), view.width()];
        let mut planes = Vec::with_capacity(view.channels());
        for ch in 0..view.channels() {
            let mut resized = vec![0.0f32; out_h * out_w];
            resize_nearest_into(&view.plane(ch), in_shape, [out_h, out_w], &mut resized)?;
            planes.push(resized);
        }
        Ok(Frame::from_planes(out_h, out_w, &planes))
    }
}
