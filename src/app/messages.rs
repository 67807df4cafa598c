use crate::contact::{Field, Service};
use crate::layout::Section;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    SkipIntro,
    WindowResized {
        width: f32,
        height: f32,
    },
    /// Only the width is taken from the scrollable; its height shrinks
    /// while the mobile menu is open.
    Scrolled {
        offset_y: f32,
        viewport_width: f32,
    },
    NavigateTo(Section),
    ToggleMenu,
    OpenLink(String),
    ContactFieldChanged(Field, String),
    ContactServiceSelected(Service),
    SubmitContact,
    ContactSent(Result<(), String>),
}
