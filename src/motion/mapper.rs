use super::partition::ItemRange;
use super::progress::Progress;

/// Vertical travel of a timeline card before it settles.
const CARD_RISE_PX: f32 = 30.0;
/// Horizontal travel of a card in the single-column layout.
const CARD_SLIDE_PX: f32 = -24.0;

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Position of `progress` inside `range`, clamped to `[0, 1]`.
///
/// A degenerate range behaves like a step at its end.
pub fn local_progress(progress: Progress, range: ItemRange) -> f32 {
    let p = progress.get();
    let width = range.end - range.start;
    if width <= f32::EPSILON {
        return if p >= range.end { 1.0 } else { 0.0 };
    }
    ((p - range.start) / width).clamp(0.0, 1.0)
}

/// Visual parameters of one item at a given scene progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMotion {
    pub opacity: f32,
    pub scale: f32,
    pub offset_y: f32,
    pub offset_x: f32,
}

impl ItemMotion {
    pub const SETTLED: ItemMotion = ItemMotion {
        opacity: 1.0,
        scale: 1.0,
        offset_y: 0.0,
        offset_x: 0.0,
    };

    pub fn at(idx: usize, range: ItemRange, progress: Progress) -> Self {
        let t = local_progress(progress, range);
        // Even cards rise from below the line, odd ones drop from above.
        let rise = if idx % 2 == 0 {
            CARD_RISE_PX
        } else {
            -CARD_RISE_PX
        };
        ItemMotion {
            opacity: lerp(0.0, 1.0, t),
            scale: lerp(0.0, 1.0, t),
            offset_y: lerp(rise, 0.0, t),
            offset_x: lerp(CARD_SLIDE_PX, 0.0, t),
        }
    }
}
