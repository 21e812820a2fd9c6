//! Fixed-window moving average
//!
//! A ring of `W` samples with a running sum. Each push replaces the oldest
//! sample, so the average always covers exactly the last `W` slots.
//!
//! Slots start at zero and are averaged like any other sample. During the
//! first `W` pushes the output therefore ramps up towards the input instead
//! of tracking it immediately:
//!
//! ```text
//! push(v) n times, n < W  =>  average = v * n / W
//! push(v) n times, n >= W =>  average = v
//! ```

/// Window length used by every sensor axis
pub const WINDOW: usize = 8;

/// Moving average over the last `W` pushed samples
///
/// No heap, no reset. One writer, consumed synchronously by its owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingBuffer<const W: usize = WINDOW> {
    samples: [f64; W],
    index: usize,
    sum: f64,
    average: f64,
}

impl<const W: usize> Default for SmoothingBuffer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> SmoothingBuffer<W> {
    /// Create a buffer with every slot zeroed
    pub const fn new() -> Self {
        assert!(W > 0, "smoothing window must hold at least one sample");
        Self {
            samples: [0.0; W],
            index: 0,
            sum: 0.0,
            average: 0.0,
        }
    }

    /// Push a sample and return the updated average
    ///
    /// The outgoing sample is subtracted from the running sum before the new
    /// one is added, keeping the update O(1).
    pub fn push(&mut self, value: f64) -> f64 {
        self.sum -= self.samples[self.index];
        self.samples[self.index] = value;
        self.sum += value;
        self.average = self.sum / W as f64;

        self.index += 1;
        if self.index >= W {
            self.index = 0;
        }

        self.average
    }

    /// Average computed by the most recent push
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Running sum of the stored samples
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Window length
    pub const fn len(&self) -> usize {
        W
    }

    /// Always false; the window is never empty, zeroed slots count
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Stored samples in slot order (not push order)
    pub fn samples(&self) -> &[f64; W] {
        &self.samples
    }

    /// Slot the next push will overwrite
    pub fn next_slot(&self) -> usize {
        self.index
    }
}
