//! Responsive layout: breakpoints and section geometry.
//!
//! The page is one vertical stack of sections inside a scrollable. Section
//! heights are derived from the viewport so scene boundaries are known
//! without measuring widgets after layout.

use crate::motion::SceneGeometry;

/// Widths below this use the single-column experience timeline.
pub const TIMELINE_MOBILE_BELOW: f32 = 768.0;
/// Widths at or below this use the compact project showcase.
pub const SHOWCASE_MOBILE_MAX: f32 = 639.0;

const EXPERIENCE_DESKTOP_VH_PER_ITEM: f32 = 1.2;
const EXPERIENCE_MOBILE_VH_PER_ITEM: f32 = 1.6;
const EXPERIENCE_MIN_VH: f32 = 1.2;
const CONTACT_MIN_HEIGHT: f32 = 760.0;
const CONTENT_MIN_HEIGHT: f32 = 560.0;
const FOOTER_HEIGHT: f32 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Desktop,
}

/// The views that switch layout, each with its own breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Timeline,
    Showcase,
}

impl LayoutMode {
    pub fn for_width(width: f32, breakpoint: Breakpoint) -> Self {
        let mobile = match breakpoint {
            Breakpoint::Timeline => width < TIMELINE_MOBILE_BELOW,
            Breakpoint::Showcase => width <= SHOWCASE_MOBILE_MAX,
        };
        if mobile {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LayoutMode::Mobile => "mobile",
            LayoutMode::Desktop => "desktop",
        };
        write!(f, "{}", label)
    }
}

/// Layout modes for every responsive view at one viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveModes {
    pub timeline: LayoutMode,
    pub showcase: LayoutMode,
}

impl ResponsiveModes {
    pub fn for_width(width: f32) -> Self {
        ResponsiveModes {
            timeline: LayoutMode::for_width(width, Breakpoint::Timeline),
            showcase: LayoutMode::for_width(width, Breakpoint::Showcase),
        }
    }
}

/// Page sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Testimonials,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Testimonials,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections reachable from the navigation bar.
    pub const NAVIGABLE: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
            Section::Footer => "Footer",
        }
    }
}

/// Geometry of every section for one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLayout {
    viewport_height: f32,
    scenes: Vec<(Section, SceneGeometry)>,
}

impl SiteLayout {
    pub fn compute(
        viewport_width: f32,
        viewport_height: f32,
        project_count: usize,
        experience_count: usize,
    ) -> Self {
        let vh = if viewport_height.is_finite() {
            viewport_height.max(1.0)
        } else {
            1.0
        };
        let modes = ResponsiveModes::for_width(viewport_width);
        let experience_per_item = if modes.timeline.is_mobile() {
            EXPERIENCE_MOBILE_VH_PER_ITEM
        } else {
            EXPERIENCE_DESKTOP_VH_PER_ITEM
        };

        let mut top = 0.0;
        let scenes = Section::ALL
            .iter()
            .map(|&section| {
                let height = match section {
                    Section::Home | Section::About | Section::Skills | Section::Testimonials => {
                        vh.max(CONTENT_MIN_HEIGHT)
                    }
                    Section::Projects => vh * project_count.max(1) as f32,
                    Section::Experience => (vh * experience_per_item * experience_count as f32)
                        .max(vh * EXPERIENCE_MIN_VH),
                    Section::Contact => vh.max(CONTACT_MIN_HEIGHT),
                    Section::Footer => FOOTER_HEIGHT,
                };
                let geometry = SceneGeometry { top, height };
                top += height;
                (section, geometry)
            })
            .collect();

        SiteLayout {
            viewport_height: vh,
            scenes,
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn geometry(&self, section: Section) -> SceneGeometry {
        self.scenes
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, geometry)| *geometry)
            .unwrap_or_default()
    }

    pub fn total_height(&self) -> f32 {
        self.scenes
            .last()
            .map(|(_, geometry)| geometry.bottom())
            .unwrap_or(0.0)
    }

    /// Scroll offset that puts `section` at the viewport top.
    pub fn scroll_target(&self, section: Section) -> f32 {
        let max_scroll = (self.total_height() - self.viewport_height).max(0.0);
        self.geometry(section).top.clamp(0.0, max_scroll)
    }

    /// The section under the viewport's top edge.
    pub fn section_at(&self, scroll_y: f32) -> Section {
        self.scenes
            .iter()
            .find(|(_, geometry)| scroll_y < geometry.bottom())
            .map(|(section, _)| *section)
            .unwrap_or(Section::Footer)
    }
}
