//! Vertical viewport over the option rows.

/// Scroll offset and height of a row viewport.
///
/// The height is capped by the configured maximum; the offset is clamped
/// to the content length whenever either changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self { offset: 0, height }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize, content_len: usize) {
        self.height = height;
        self.clamp(content_len);
    }

    /// Rows currently in view.
    pub fn range(&self, content_len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(content_len);
        let end = (self.offset + self.height).min(content_len);
        start..end
    }

    pub fn max_offset(&self, content_len: usize) -> usize {
        content_len.saturating_sub(self.height)
    }

    /// Keep the offset within the content.
    pub fn clamp(&mut self, content_len: usize) {
        self.offset = self.offset.min(self.max_offset(content_len));
    }

    /// Scroll by `delta` rows. Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: isize, content_len: usize) -> bool {
        let max = self.max_offset(content_len);
        let next = self.offset.saturating_add_signed(delta).min(max);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Scroll the minimum amount needed to bring `index` into view.
    pub fn ensure_visible(&mut self, index: usize, content_len: usize) {
        if self.height == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.height {
            self.offset = index + 1 - self.height;
        }
        self.clamp(content_len);
    }

    /// Whether the content is taller than the viewport.
    pub fn needs_scrollbar(&self, content_len: usize) -> bool {
        content_len > self.height
    }

    /// Scrollbar thumb as (start, length) in rows of the viewport.
    pub fn thumb(&self, content_len: usize) -> Option<(usize, usize)> {
        if !self.needs_scrollbar(content_len) || self.height == 0 {
            return None;
        }
        let len = (self.height * self.height / content_len).max(1);
        let travel = self.height - len;
        let max = self.max_offset(content_len);
        let start = if max == 0 { 0 } else { self.offset * travel / max };
        Some((start, len))
    }
}
