//! Observation rendering for gridlet episodes.
//!
//! A scene is rasterised into a bordered canvas, optionally cropped to a
//! window around the agent, and resized per channel with nearest
//! neighbour sampling into a fixed-size HWC [`Frame`].
//!
//! Rendering is a pure function of the scene: the same entities always
//! produce bit-identical frames.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod frame;
pub mod geometry;
pub mod render;
pub mod resize;
pub mod spec;

pub use canvas::{paint_canvas, BORDER_VALUE};
pub use frame::Frame;
pub use geometry::CropWindow;
pub use render::Renderer;
pub use resize::{nearest_source_index, resize_nearest, resize_nearest_into};
pub use spec::{RenderSpec, ViewMode};
