mod constants;
mod intro;
mod ui;

use crate::config::AppConfig;
use crate::contact::{ContactForm, EmailClient, FieldErrors, SubmissionStatus};
use crate::content::{EXPERIENCES, PROJECTS};
use crate::layout::{ResponsiveModes, Section, SiteLayout};
use crate::motion::{ActiveIndex, Progress, Thresholds, scene_progress};
use iced::Task;
use std::time::Duration;
use tracing::{debug, info};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use intro::IntroState;
pub(in crate::app) use ui::{ContactState, NavState, SceneState, ViewportState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) intro: IntroState,
    pub(super) viewport: ViewportState,
    pub(super) modes: ResponsiveModes,
    pub(super) layout: SiteLayout,
    pub(super) scenes: SceneState,
    pub(super) nav: NavState,
    pub(super) contact: ContactState,
    pub(super) email: EmailClient,
}

impl App {
    pub fn bootstrap(config: AppConfig) -> (Self, Task<Message>) {
        let width = sanitize_dimension(config.window_width);
        let height = (sanitize_dimension(config.window_height) - NAVBAR_HEIGHT).max(1.0);
        let intro = IntroState::new(
            config.intro_enabled,
            Duration::from_millis(config.intro_step_ms),
        );
        let email = EmailClient::new(config.contact.clone());
        if !config.contact.has_credentials() {
            tracing::warn!("Email credentials missing; contact submissions will fail");
        }

        let mut app = App {
            intro,
            viewport: ViewportState {
                width,
                height,
                scroll_y: 0.0,
            },
            modes: ResponsiveModes::for_width(width),
            layout: SiteLayout::compute(width, height, PROJECTS.len(), EXPERIENCES.len()),
            scenes: SceneState {
                experience_progress: Progress::START,
                experience_thresholds: Thresholds::for_items(EXPERIENCES.len()),
                projects_progress: Progress::START,
                active_project: ActiveIndex::new(PROJECTS.len()),
            },
            nav: NavState {
                menu_open: false,
                current: Section::Home,
            },
            contact: ContactState {
                form: ContactForm::default(),
                errors: FieldErrors::default(),
                status: SubmissionStatus::Idle,
            },
            email,
            config,
        };
        app.relayout();
        info!(
            width,
            height,
            timeline = %app.modes.timeline,
            showcase = %app.modes.showcase,
            intro = app.intro.is_running(),
            "Portfolio state initialized"
        );
        (app, Task::none())
    }

    /// Recompute breakpoints and section geometry for the current viewport.
    pub(super) fn relayout(&mut self) {
        let modes = ResponsiveModes::for_width(self.viewport.width);
        if modes != self.modes {
            info!(
                width = self.viewport.width,
                timeline = %modes.timeline,
                showcase = %modes.showcase,
                "Layout mode changed"
            );
            self.modes = modes;
        }
        self.layout = SiteLayout::compute(
            self.viewport.width,
            self.viewport.height,
            PROJECTS.len(),
            EXPERIENCES.len(),
        );
        let max_scroll = (self.layout.total_height() - self.layout.viewport_height()).max(0.0);
        self.viewport.scroll_y = self.viewport.scroll_y.clamp(0.0, max_scroll);
        debug!(
            total_height = self.layout.total_height(),
            viewport_height = self.layout.viewport_height(),
            "Recomputed site layout"
        );
        self.refresh_scenes();
    }

    /// Derive scene progress and the active project from the scroll offset.
    pub(super) fn refresh_scenes(&mut self) {
        let vh = self.layout.viewport_height();
        let scroll_y = self.viewport.scroll_y;
        self.scenes.experience_progress =
            scene_progress(scroll_y, vh, self.layout.geometry(Section::Experience));
        self.scenes.projects_progress =
            scene_progress(scroll_y, vh, self.layout.geometry(Section::Projects));
        if let Some(idx) = self
            .scenes
            .active_project
            .update(self.scenes.projects_progress.get())
        {
            if let Some(project) = PROJECTS.get(idx) {
                info!(idx, title = project.title, "Showcasing project");
            }
        }
        self.nav.current = self.layout.section_at(scroll_y + 1.0);
    }
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() { value.max(1.0) } else { 1.0 }
}
