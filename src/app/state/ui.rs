use crate::contact::{ContactForm, FieldErrors, SubmissionStatus};
use crate::layout::Section;
use crate::motion::{ActiveIndex, Progress, Thresholds};

/// Latest viewport geometry of the site scrollable.
pub struct ViewportState {
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
    pub(in crate::app) scroll_y: f32,
}

/// Progress of the two scroll-driven scenes.
pub struct SceneState {
    pub(in crate::app) experience_progress: Progress,
    pub(in crate::app) experience_thresholds: Thresholds,
    pub(in crate::app) projects_progress: Progress,
    pub(in crate::app) active_project: ActiveIndex,
}

pub struct NavState {
    pub(in crate::app) menu_open: bool,
    pub(in crate::app) current: Section,
}

pub struct ContactState {
    pub(in crate::app) form: ContactForm,
    pub(in crate::app) errors: FieldErrors,
    pub(in crate::app) status: SubmissionStatus,
}
