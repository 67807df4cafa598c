use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Fixed chrome and sizing used by the views.
pub(crate) const NAVBAR_HEIGHT: f32 = 64.0;
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub(crate) const TIMELINE_DOT_PX: f32 = 28.0;
pub(crate) const TIMELINE_CARD_WIDTH_PX: f32 = 320.0;
pub(crate) const TIMELINE_CARD_SLOT_PX: f32 = 240.0;
pub(crate) const SHOWCASE_IMAGE_FRACTION: f32 = 0.62;
pub(crate) const HEADING_SIZE: f32 = 44.0;
pub(crate) const BODY_SIZE: f32 = 17.0;
pub(crate) static SITE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("site-scroll"));
