use std::time::{Duration, Instant};

use super::series::FrameSequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing { frame: usize },
}

/// Timed frame-advance state machine for one traversal of a sequence.
///
/// The caller supplies the clock: pass a monotonic `now` to [`Playback::update`]
/// and redraw when it reports a change. Each frame is held for the sequence's
/// uniform duration, including the last one, after which the machine returns to
/// [`PlaybackState::Idle`]. Starting again begins a fresh traversal.
#[derive(Debug)]
pub struct Playback {
    state: PlaybackState,
    frame_count: usize,
    frame_duration: Duration,
    frame_started: Option<Instant>,
}

impl Playback {
    pub fn new(sequence: &FrameSequence) -> Self {
        Self {
            state: PlaybackState::Idle,
            frame_count: sequence.len(),
            frame_duration: sequence.frame_duration(),
            frame_started: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    /// Index of the frame currently on display, if any.
    pub fn current_frame(&self) -> Option<usize> {
        match self.state {
            PlaybackState::Playing { frame } => Some(frame),
            PlaybackState::Idle => None,
        }
    }

    /// Begin a traversal at frame 0. A machine over an empty sequence stays idle.
    pub fn start(&mut self, now: Instant) {
        if self.frame_count == 0 {
            return;
        }
        self.state = PlaybackState::Playing { frame: 0 };
        self.frame_started = Some(now);
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Idle;
        self.frame_started = None;
    }

    /// Advance the machine to `now`. Returns true when the displayed frame
    /// changed and the caller should redraw.
    pub fn update(&mut self, now: Instant) -> bool {
        let PlaybackState::Playing { frame } = self.state else {
            return false;
        };
        let Some(started) = self.frame_started else {
            return false;
        };

        if now.duration_since(started) < self.frame_duration {
            return false;
        }

        if frame + 1 >= self.frame_count {
            // last frame held for its full duration; traversal is over
            self.stop();
            return false;
        }

        self.state = PlaybackState::Playing { frame: frame + 1 };
        self.frame_started = Some(now);
        true
    }
}
