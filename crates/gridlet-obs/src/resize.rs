//! Nearest-neighbour resampling of single-channel planes.
//!
//! Output cell `d` samples input cell `floor((d + 0.5) * src / dst)`,
//! i.e. the input cell containing the output cell's centre. Computed in
//! integer arithmetic so results never depend on float rounding, and
//! values are copied, never blended.

use gridlet_core::ObsError;

/// Source index sampled by destination index `dst` when resampling an
/// axis of length `src_len` to `dst_len`.
///
/// # Examples
///
/// ```
/// use gridlet_obs::nearest_source_index;
///
/// // 7 -> 84: each source cell covers 12 output cells.
/// assert_eq!(nearest_source_index(0, 7, 84), 0);
/// assert_eq!(nearest_source_index(11, 7, 84), 0);
/// assert_eq!(nearest_source_index(12, 7, 84), 1);
/// assert_eq!(nearest_source_index(83, 7, 84), 6);
/// ```
#[inline]
pub fn nearest_source_index(dst: usize, src_len: usize, dst_len: usize) -> usize {
    debug_assert!(src_len > 0 && dst_len > 0);
    let idx = ((2 * dst + 1) * src_len) / (2 * dst_len);
    idx.min(src_len - 1)
}

/// Resample a row-major `[H, W]` plane to `[out_h, out_w]`.
///
/// # Panics
///
/// Panics if the input or output shape is invalid. Use
/// [`resize_nearest_into`] for a fallible variant.
pub fn resize_nearest(
    input: &[f32],
    input_shape: [usize; 2],
    out_h: usize,
    out_w: usize,
) -> Vec<f32> {
    let mut output = vec![0.0f32; out_h * out_w];
    resize_nearest_into(input, input_shape, [out_h, out_w], &mut output)
        .unwrap_or_else(|e| panic!("resize_nearest: {e}"));
    output
}

/// Resample into a caller-provided buffer (no allocation).
///
/// # Errors
///
/// Returns [`ObsError::InvalidConfig`] if any dimension is zero or a
/// buffer length does not match its shape.
pub fn resize_nearest_into(
    input: &[f32],
    input_shape: [usize; 2],
    output_shape: [usize; 2],
    output: &mut [f32],
) -> Result<(), ObsError> {
    let [h, w] = input_shape;
    let [out_h, out_w] = output_shape;
    if h == 0 || w == 0 || out_h == 0 || out_w == 0 {
        return Err(ObsError::InvalidConfig {
            reason: format!("cannot resize {h}x{w} to {out_h}x{out_w}"),
        });
    }
    if input.len() != h * w {
        return Err(ObsError::InvalidConfig {
            reason: format!("input length {} != {}x{}", input.len(), h, w),
        });
    }
    if output.len() != out_h * out_w {
        return Err(ObsError::InvalidConfig {
            reason: format!("output length {} != {}x{}", output.len(), out_h, out_w),
        });
    }

    let col_map: Vec<usize> = (0..out_w)
        .map(|c| nearest_source_index(c, w, out_w))
        .collect();
    for r in 0..out_h {
        let src_row = nearest_source_index(r, h, out_h) * w;
        let dst_row = r * out_w;
        for (c, &src_c) in col_map.iter().enumerate() {
            output[dst_row + c] = input[src_row + src_c];
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identity_resize_is_copy() {
        let input: Vec<f32> = (0..12).map(|i| i as f32).collect();
        assert_eq!(resize_nearest(&input, [3, 4], 3, 4), input);
    }

    #[test]
    fn upsample_3x3_to_84_gives_28_wide_blocks() {
        let input: Vec<f32> = (0..9).map(|i| i as f32).collect();
        let out = resize_nearest(&input, [3, 3], 84, 84);
        assert_eq!(out.len(), 84 * 84);
        for r in 0..84 {
            for c in 0..84 {
                let expected = ((r / 28) * 3 + c / 28) as f32;
                assert_eq!(out[r * 84 + c], expected, "({r},{c})");
            }
        }
    }

    #[test]
    fn downsample_picks_centre_cell() {
        // 4 -> 2: output 0 samples floor(0.5 * 2) = 1, output 1 samples 3.
        let input = vec![0.0, 1.0, 2.0, 3.0];
        assert_eq!(resize_nearest(&input, [1, 4], 1, 2), vec![1.0, 3.0]);
    }

    #[test]
    fn bad_shapes_rejected() {
        let mut out = vec![0.0; 4];
        assert!(resize_nearest_into(&[0.0; 3], [2, 2], [2, 2], &mut out).is_err());
        assert!(resize_nearest_into(&[0.0; 4], [2, 2], [3, 2], &mut out).is_err());
        assert!(resize_nearest_into(&[], [0, 2], [2, 2], &mut out).is_err());
    }

    proptest! {
        #[test]
        fn output_values_come_from_input(
            h in 1usize..10,
            w in 1usize..10,
            out_h in 1usize..40,
            out_w in 1usize..40,
        ) {
            let input: Vec<f32> = (0..h * w).map(|i| i as f32).collect();
            let out = resize_nearest(&input, [h, w], out_h, out_w);
            prop_assert_eq!(out.len(), out_h * out_w);
            for v in out {
                prop_assert!(v.fract() == 0.0 && (v as usize) < h * w);
            }
        }

        #[test]
        fn index_is_monotone_and_in_range(src in 1usize..50, dst in 1usize..120) {
            let mut prev = 0;
            for d in 0..dst {
                let s = nearest_source_index(d, src, dst);
                prop_assert!(s < src);
                prop_assert!(s >= prev);
                prev = s;
            }
        }
    }
}
