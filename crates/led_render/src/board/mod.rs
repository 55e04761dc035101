pub mod font;
pub mod geometry;
pub mod scene;
pub mod tile;
