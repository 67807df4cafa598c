use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::SkipIntro => {
                if self.intro.finish() {
                    effects.push(Effect::MeasureWindow);
                }
            }
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::Scrolled {
                offset_y,
                viewport_width,
            } => self.handle_scrolled(offset_y, viewport_width),
            Message::NavigateTo(section) => self.handle_navigate(section, &mut effects),
            Message::ToggleMenu => self.handle_toggle_menu(),
            Message::OpenLink(url) => effects.push(Effect::OpenLink(url)),
            Message::ContactFieldChanged(field, value) => {
                self.handle_contact_field_changed(field, value)
            }
            Message::ContactServiceSelected(service) => {
                self.handle_contact_service_selected(service)
            }
            Message::SubmitContact => self.handle_submit_contact(&mut effects),
            Message::ContactSent(result) => self.handle_contact_sent(result, Instant::now()),
        }

        effects
    }

    fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.intro.advance(now) {
            effects.push(Effect::MeasureWindow);
        }
        let window = self.config.contact.status_display();
        self.contact.status.settle(now, window);
    }
}
