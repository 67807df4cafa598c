use super::super::super::messages::Message;
use super::super::super::state::{App, SITE_SCROLL_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::{error, info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SendContact(request) => {
                let client = self.email.clone();
                info!(
                    service = %request.template_params.service,
                    "Dispatching contact message"
                );
                Task::perform(
                    async move {
                        client.send(request).await.map_err(|err| {
                            error!("Email sending error: {err:#}");
                            format!("{err:#}")
                        })
                    },
                    Message::ContactSent,
                )
            }
            Effect::ScrollTo(y) => {
                scrollable::scroll_to(SITE_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::OpenLink(url) => {
                if let Err(err) = crate::browser::open_url(&url) {
                    warn!(%url, "Failed to open link: {err:#}");
                }
                Task::none()
            }
            Effect::MeasureWindow => window::get_latest()
                .and_then(window::get_size)
                .map(|size| Message::WindowResized {
                    width: size.width,
                    height: size.height,
                }),
        }
    }
}

/// Any key press or click while the intro plays skips it.
pub(super) fn intro_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(Message::SkipIntro),
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::SkipIntro),
        _ => None,
    }
}
