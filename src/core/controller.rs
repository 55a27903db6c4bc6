use super::constants::{LOOK_AT_TARGET, PROJECTOR_OFF_INTENSITY, PROJECTOR_ON_INTENSITY};
use super::scene::{Scene, SlideIndex};
use super::scroll::dolly_z;

#[derive(Clone, Debug)]
pub struct SceneController {
    scene: Scene,
    projector_on: bool,
    slide: SlideIndex,
    scroll_value: i32,
}

impl SceneController {
    /// Take ownership of an assembled scene. The starting slide is whatever
    /// the projector was assembled with.
    pub fn new(scene: Scene) -> Self {
        let slide = scene.projector.map.unwrap_or(SlideIndex::INITIAL);
        let projector_on = scene.projector.intensity > PROJECTOR_OFF_INTENSITY;
        Self {
            scene,
            projector_on,
            slide,
            scroll_value: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn projector_on(&self) -> bool {
        self.projector_on
    }

    pub fn projector_intensity(&self) -> f32 {
        self.scene.projector.intensity
    }

    pub fn slide(&self) -> SlideIndex {
        self.slide
    }

    pub fn scroll_value(&self) -> i32 {
        self.scroll_value
    }

    /// Switch the projector on or off.
    pub fn toggle(&mut self) {
        self.projector_on = !self.projector_on;
        self.scene.projector.intensity = if self.projector_on {
            PROJECTOR_ON_INTENSITY
        } else {
            PROJECTOR_OFF_INTENSITY
        };
    }

    /// Step back one slide. The gobo changes even while the projector is off.
    pub fn previous(&mut self) -> SlideIndex {
        self.select(self.slide.previous())
    }

    /// Step forward one slide. The gobo changes even while the projector is off.
    pub fn next(&mut self) -> SlideIndex {
        self.select(self.slide.next())
    }

    fn select(&mut self, slide: SlideIndex) -> SlideIndex {
        self.slide = slide;
        self.scene.projector.map = Some(slide);
        slide
    }

    pub fn set_scroll_value(&mut self, value: i32) {
        self.scroll_value = value;
    }

    /// Per-frame camera update: dolly along z from the scroll value, then
    /// re-point at the fixed target.
    pub fn update_camera(&mut self) {
        if let Some(z) = dolly_z(self.scroll_value) {
            self.scene.camera.position.z = z;
        }
        self.scene.camera.look_at(LOOK_AT_TARGET);
    }

    /// Match the camera aspect to a new viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.scene.camera.set_viewport(width, height);
    }
}
