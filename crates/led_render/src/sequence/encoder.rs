use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};
use log::debug;

use super::series::FrameSequence;
use crate::LedError;

/// Encode a sequence as a looping GIF, every frame held for the sequence's
/// uniform duration. Fails on an empty sequence or mismatched frame sizes;
/// callers rendering through one [`crate::BoardRenderer`] get uniform sizes
/// by construction.
pub fn encode_gif(sequence: &FrameSequence) -> Result<Vec<u8>, LedError> {
    let (width, height) = sequence.dimensions().ok_or(LedError::EmptySequence)?;

    for (index, frame) in sequence.frames().iter().enumerate() {
        if frame.dimensions() != (width, height) {
            return Err(LedError::FrameSizeMismatch {
                index,
                expected: (width, height),
                actual: frame.dimensions(),
            });
        }
    }

    debug!(
        "encoding {} frame(s) of {width}x{height} at {:?} per frame",
        sequence.len(),
        sequence.frame_duration()
    );

    let delay = Delay::from_saturating_duration(sequence.frame_duration());
    let mut buffer = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buffer);
        encoder.set_repeat(Repeat::Infinite)?;
        for frame in sequence.frames() {
            let rgba = DynamicImage::ImageRgb8(frame.clone()).into_rgba8();
            encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
        }
    }

    Ok(buffer)
}
