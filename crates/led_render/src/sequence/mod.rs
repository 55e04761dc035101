pub mod encoder;
pub mod playback;
pub mod playlist;
pub mod series;
