//! Rasterising a scene onto the bordered canvas.

use crate::frame::Frame;
use gridlet_core::{ObsError, SceneAccess, CHANNELS};

/// Value of the permanent one-cell frame around the grid, in every channel.
pub const BORDER_VALUE: f32 = 1.0;

/// Paint `scene` onto a `(size + 2) x (size + 2) x CHANNELS` canvas.
///
/// The canvas starts at [`BORDER_VALUE`] everywhere with the interior
/// zeroed. Each entity then writes its intensity into its own channel
/// over a `footprint x footprint` block at canvas `(y + 1, x + 1)`,
/// clipped to the canvas. Entities are painted in scene order, so a
/// later entity overwrites an earlier one on a shared cell.
///
/// # Errors
///
/// Returns [`ObsError::ChannelOutOfRange`] if an entity's channel is not
/// below [`CHANNELS`].
pub fn paint_canvas<S: SceneAccess + ?Sized>(scene: &S) -> Result<Frame, ObsError> {
    let side = scene.grid_size() as usize + 2;
    let mut canvas = Frame::filled(side, side, CHANNELS, BORDER_VALUE);
    for row in 1..side - 1 {
        for col in 1..side - 1 {
            for ch in 0..CHANNELS {
                canvas.set(row, col, ch, 0.0);
            }
        }
    }

    for entity in scene.entities() {
        let ch = entity.channel as usize;
        if ch >= CHANNELS {
            return Err(ObsError::ChannelOutOfRange {
                channel: entity.channel,
            });
        }
        let fp = entity.footprint as i64;
        let row0 = entity.position.y as i64 + 1;
        let col0 = entity.position.x as i64 + 1;
        let rows = row0.max(0)..(row0 + fp).min(side as i64);
        for row in rows {
            let cols = col0.max(0)..(col0 + fp).min(side as i64);
            for col in cols {
                canvas.set(row as usize, col as usize, ch, entity.intensity);
            }
        }
    }

    Ok(canvas)
}
