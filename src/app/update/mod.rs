use crate::contact::EmailRequest;

mod contact;
mod core;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    SendContact(EmailRequest),
    ScrollTo(f32),
    OpenLink(String),
    /// Re-read the window size once the site replaces the intro.
    MeasureWindow,
}
