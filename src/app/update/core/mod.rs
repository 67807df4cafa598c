mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::{App, TICK_INTERVAL};
use iced::event;
use iced::time;
use iced::window;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = Vec::new();

        if app.intro.is_running() {
            subscriptions.push(event::listen_with(runtime::intro_event_to_message));
        } else {
            subscriptions.push(window::resize_events().map(|(_id, size)| {
                Message::WindowResized {
                    width: size.width,
                    height: size.height,
                }
            }));
        }

        if app.intro.is_running() || app.contact.status.is_settling() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
