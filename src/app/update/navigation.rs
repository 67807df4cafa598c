use super::super::state::App;
use super::Effect;
use crate::layout::Section;
use tracing::debug;

impl App {
    pub(super) fn handle_navigate(&mut self, section: Section, effects: &mut Vec<Effect>) {
        self.nav.menu_open = false;
        let target = self.layout.scroll_target(section);
        debug!(section = section.label(), target, "Navigating to section");
        self.viewport.scroll_y = target;
        self.refresh_scenes();
        effects.push(Effect::ScrollTo(target));
    }

    pub(super) fn handle_toggle_menu(&mut self) {
        self.nav.menu_open = !self.nav.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use std::time::{Duration, Instant};

    fn build_test_app(intro_enabled: bool) -> App {
        let mut config = AppConfig::default();
        config.intro_enabled = intro_enabled;
        config.intro_step_ms = 100;
        let (app, _task) = App::bootstrap(config);
        app
    }

    #[test]
    fn navigation_scrolls_to_section_top_and_closes_menu() {
        let mut app = build_test_app(false);
        app.reduce(Message::ToggleMenu);
        assert!(app.nav.menu_open);

        let effects = app.reduce(Message::NavigateTo(Section::Projects));
        let expected = app.layout.geometry(Section::Projects).top;
        assert!(matches!(effects.as_slice(), [Effect::ScrollTo(y)] if *y == expected));
        assert!(!app.nav.menu_open);
        assert_eq!(app.nav.current, Section::Projects);
        assert_eq!(app.viewport.scroll_y, expected);
    }

    #[test]
    fn open_link_becomes_an_effect() {
        let mut app = build_test_app(false);
        let effects = app.reduce(Message::OpenLink("https://atmos.muheeb.dev/".into()));
        assert!(matches!(effects.as_slice(), [Effect::OpenLink(url)] if url.contains("atmos")));
    }

    #[test]
    fn intro_ends_on_skip() {
        let mut app = build_test_app(true);
        assert!(app.intro.is_running());
        let effects = app.reduce(Message::SkipIntro);
        assert!(!app.intro.is_running());
        assert!(matches!(effects.as_slice(), [Effect::MeasureWindow]));
        assert!(app.reduce(Message::SkipIntro).is_empty());
    }

    #[test]
    fn intro_ends_after_all_greetings() {
        let mut app = build_test_app(true);
        let start = Instant::now();
        app.reduce(Message::Tick(start));
        assert!(app.intro.is_running());
        let effects = app.reduce(Message::Tick(start + Duration::from_secs(5)));
        assert!(!app.intro.is_running());
        assert!(matches!(effects.as_slice(), [Effect::MeasureWindow]));
    }
}
