/// Normalized position inside a scene, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamp `value` into range; non-finite input maps to the start.
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Progress(value.clamp(0.0, 1.0))
        } else {
            Progress(0.0)
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

/// Vertical placement of a scene inside the scrollable content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneGeometry {
    pub top: f32,
    pub height: f32,
}

impl SceneGeometry {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// How far the scene's pinned content must be pushed down so it stays at
    /// the viewport top while the scene scrolls past.
    pub fn pinned_offset(&self, scroll_y: f32, viewport_height: f32) -> f32 {
        let travel = (self.height - viewport_height).max(0.0);
        (scroll_y - self.top).clamp(0.0, travel)
    }
}

/// Progress through `scene` for a viewport scrolled to `scroll_y`.
///
/// 0 when the scene's top edge sits at the viewport top, 1 once its bottom
/// edge reaches the viewport bottom.
pub fn scene_progress(scroll_y: f32, viewport_height: f32, scene: SceneGeometry) -> Progress {
    if !scroll_y.is_finite() || !viewport_height.is_finite() {
        return Progress::START;
    }
    let travel = scene.height - viewport_height;
    if travel <= f32::EPSILON {
        return if scroll_y >= scene.top {
            Progress::END
        } else {
            Progress::START
        };
    }
    Progress::new((scroll_y - scene.top) / travel)
}
