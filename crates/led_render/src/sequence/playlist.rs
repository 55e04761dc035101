use log::warn;

use crate::board::scene::Scene;
use crate::BoardRenderer;

pub const MAX_SCENES: usize = 4;

/// Ordered list of up to [`MAX_SCENES`] scenes. Frame order out of
/// [`ScenePlaylist::render_all`] always equals scene order.
#[derive(Clone, Debug, Default)]
pub struct ScenePlaylist {
    scenes: Vec<Scene>,
}

impl ScenePlaylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scenes<I: IntoIterator<Item = Scene>>(scenes: I) -> Self {
        let mut playlist = Self::new();
        for scene in scenes {
            playlist.push(scene);
        }
        playlist
    }

    /// Append a scene; input beyond the limit is dropped, matching the
    /// fixed scene slots of the input boundary.
    pub fn push(&mut self, scene: Scene) {
        if self.scenes.len() == MAX_SCENES {
            warn!("scene playlist is full ({MAX_SCENES} scenes); dropping extra scene");
            return;
        }
        self.scenes.push(scene);
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn first(&self) -> Option<&Scene> {
        self.scenes.first()
    }

    /// Keep only the first scene (single-scene mode).
    pub fn truncate_to_first(&mut self) {
        self.scenes.truncate(1);
    }

    /// Render every scene in order with the same renderer, so all frames
    /// share the board dimensions by construction.
    pub fn render_all(&self, renderer: &BoardRenderer) -> Vec<image::RgbImage> {
        self.scenes.iter().map(|scene| renderer.render_scene(scene)).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn push_drops_scenes_beyond_the_limit() {
        let mut playlist = ScenePlaylist::new();
        for _ in 0..6 {
            playlist.push(Scene::blank());
        }
        assert_eq!(playlist.len(), MAX_SCENES);
    }

    #[test]
    fn render_all_preserves_scene_order() {
        let playlist = ScenePlaylist::from_scenes([Scene::new(["HI"]), Scene::new(["OK"])]);
        let renderer = BoardRenderer::default();
        let frames = playlist.render_all(&renderer);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], renderer.render_scene(&Scene::new(["HI"])));
        assert_eq!(frames[1], renderer.render_scene(&Scene::new(["OK"])));
        assert_ne!(frames[0], frames[1]);
    }

    #[test]
    fn truncate_to_first_keeps_one_scene() {
        let mut playlist = ScenePlaylist::from_scenes([Scene::new(["A"]), Scene::new(["B"])]);
        playlist.truncate_to_first();
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.first(), Some(&Scene::new(["A"])));
    }
}
