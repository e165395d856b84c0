//! Dense HWC `f32` tensors.

/// A dense `height x width x channels` tensor in HWC (row-major,
/// channel-minor) layout.
///
/// Used both for the bordered canvas and for the final observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<f32>,
}

impl Frame {
    /// A frame with every element set to `fill`.
    pub fn filled(height: usize, width: usize, channels: usize, fill: f32) -> Self {
        Self {
            height,
            width,
            channels,
            data: vec![fill; height * width * channels],
        }
    }

    /// Stack equally sized single-channel planes into one frame.
    ///
    /// Plane `i` becomes channel `i`. Each plane must hold
    /// `height * width` values in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if a plane has the wrong length.
    pub fn from_planes(height: usize, width: usize, planes: &[Vec<f32>]) -> Self {
        let channels = planes.len();
        let mut data = vec![0.0f32; height * width * channels];
        for (ch, plane) in planes.iter().enumerate() {
            assert_eq!(
                plane.len(),
                height * width,
                "plane {ch} has {} values, expected {}x{}",
                plane.len(),
                height,
                width
            );
            for (i, &v) in plane.iter().enumerate() {
                data[i * channels + ch] = v;
            }
        }
        Self {
            height,
            width,
            channels,
            data,
        }
    }

    /// `[height, width, channels]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, self.channels]
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    fn index(&self, row: usize, col: usize, ch: usize) -> usize {
        debug_assert!(row < self.height && col < self.width && ch < self.channels);
        (row * self.width + col) * self.channels + ch
    }

    /// Value at `(row, col, ch)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn get(&self, row: usize, col: usize, ch: usize) -> f32 {
        self.data[self.index(row, col, ch)]
    }

    /// Overwrite the value at `(row, col, ch)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    pub fn set(&mut self, row: usize, col: usize, ch: usize, value: f32) {
        let i = self.index(row, col, ch);
        self.data[i] = value;
    }

    /// Extract one channel as a row-major `height * width` plane.
    pub fn plane(&self, ch: usize) -> Vec<f32> {
        assert!(ch < self.channels, "channel {ch} >= {}", self.channels);
        self.data
            .iter()
            .skip(ch)
            .step_by(self.channels)
            .copied()
            .collect()
    }

    /// Copy a `height x width` window whose top-left corner is at
    /// `(top, left)`. Cells falling outside this frame read as `pad`.
    pub fn crop(&self, top: i64, left: i64, height: usize, width: usize, pad: f32) -> Self {
        let mut out = Self::filled(height, width, self.channels, pad);
        for r in 0..height {
            let src_r = top + r as i64;
            if src_r < 0 || src_r >= self.height as i64 {
                continue;
            }
            for c in 0..width {
                let src_c = left + c as i64;
                if src_c < 0 || src_c >= self.width as i64 {
                    continue;
                }
                for ch in 0..self.channels {
                    let v = self.get(src_r as usize, src_c as usize, ch);
                    out.set(r, c, ch, v);
                }
            }
        }
        out
    }

    /// Flat HWC data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
