/// Upper bounds of the equal progress segments assigned to each item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Thresholds(Vec<f32>);

/// The `[start, end)` slice of progress over which one item animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRange {
    pub start: f32,
    pub end: f32,
}

impl Thresholds {
    /// `t_i = (i + 1) / n` for every item; empty when there are no items.
    pub fn for_items(count: usize) -> Self {
        let n = count as f32;
        Thresholds((0..count).map(|i| (i + 1) as f32 / n).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn range(&self, idx: usize) -> Option<ItemRange> {
        let end = *self.0.get(idx)?;
        let start = if idx == 0 { 0.0 } else { self.0[idx - 1] };
        Some(ItemRange { start, end })
    }
}
