use std::time::Duration;

use image::RgbImage;

/// An ordered run of rendered frames with one uniform per-frame duration.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<RgbImage>,
    frame_duration: Duration,
}

impl FrameSequence {
    pub fn new(frames: Vec<RgbImage>, frame_duration: Duration) -> Self {
        Self { frames, frame_duration }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&RgbImage> {
        self.frames.get(index)
    }

    /// Dimensions of the first frame, if any.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|frame| (frame.width(), frame.height()))
    }

    /// Total wall time of one traversal, every frame held for its full duration.
    pub fn total_duration(&self) -> Duration {
        self.frame_duration * self.frames.len() as u32
    }

    /// Index of the frame on display after `elapsed`, wrapping over the run.
    /// `None` when the sequence is empty; a zero duration pins the first frame.
    pub fn frame_index_at(&self, elapsed: Duration) -> Option<usize> {
        if self.frames.is_empty() {
            return None;
        }
        if self.frames.len() == 1 || self.frame_duration.is_zero() {
            return Some(0);
        }
        let index = (elapsed.as_nanos() / self.frame_duration.as_nanos()) as usize;
        Some(index % self.frames.len())
    }
}
