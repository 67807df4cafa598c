//! Scroll-driven animation math.
//!
//! A scene is a tall region of the page whose content stays pinned while the
//! viewport scrolls through it. The fraction of the scene scrolled so far is
//! the scene's [`Progress`]; it is split into one equal sub-range per item and
//! each item animates over its own sub-range. Everything here is pure and
//! recomputed from scratch on every scroll or resize.

mod mapper;
mod partition;
mod progress;
mod selector;

pub use mapper::ItemMotion;
pub use partition::Thresholds;
pub use progress::{Progress, SceneGeometry, scene_progress};
pub use selector::ActiveIndex;
