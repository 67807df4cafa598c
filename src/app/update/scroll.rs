use super::super::state::{App, NAVBAR_HEIGHT};

impl App {
    /// The viewport height stays window-derived; see `handle_window_resized`.
    pub(super) fn handle_scrolled(&mut self, offset_y: f32, viewport_width: f32) {
        let width = finite_or(viewport_width, self.viewport.width).max(1.0);
        self.viewport.scroll_y = finite_or(offset_y, 0.0).max(0.0);

        if width != self.viewport.width {
            self.viewport.width = width;
            self.relayout();
        } else {
            self.refresh_scenes();
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        self.viewport.width = width.max(1.0);
        // The scrollable sits below the navigation bar.
        self.viewport.height = (height - NAVBAR_HEIGHT).max(1.0);
        self.relayout();
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
