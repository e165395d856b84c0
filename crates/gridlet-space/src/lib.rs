//! Spatial structure for gridlet episodes.
//!
//! This crate defines [`SquareGrid`], the bounded coordinate space every
//! episode lives on, and the placement allocator that draws uniformly
//! random free cells from it.
//!
//! The grid is never materialised: it only bounds placement and movement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod placement;

pub use error::SpaceError;
pub use grid::SquareGrid;
pub use placement::{allocate, free_cells};
