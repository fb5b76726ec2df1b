//! Hit testing for mouse interactions.

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge, clamped to the coordinate space.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// What a clickable region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// The closed control; toggles the overlay.
    Trigger,
    /// The clear button.
    Clear,
    /// The remove button on a chip, carrying the chip's value.
    RemoveChip(String),
    /// The search field.
    Search,
    /// The expand/collapse affordance of a node, by node id.
    Chevron(String),
    /// An option row, by node id. Stays valid when the rows are rebuilt
    /// before the next render.
    Row(String),
    /// The option list background (scroll target).
    List,
}

#[derive(Debug, Clone)]
struct HitBox {
    target: HitTarget,
    rect: Rect,
}

/// Clickable regions of the last render.
#[derive(Debug, Default)]
pub struct HitMap {
    /// Hit boxes in render order (later boxes are on top)
    boxes: Vec<HitBox>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all hit boxes (call at start of each render)
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn register(&mut self, target: HitTarget, rect: Rect) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.boxes.push(HitBox { target, rect });
    }

    /// Find the topmost target at a position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitTarget> {
        self.boxes
            .iter()
            .rev()
            .find(|b| b.rect.contains(x, y))
            .map(|b| &b.target)
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_boxes_win() {
        let mut map = HitMap::new();
        map.register(HitTarget::Trigger, Rect::new(0, 0, 20, 1));
        map.register(HitTarget::Clear, Rect::new(16, 0, 1, 1));
        assert_eq!(map.hit_test(16, 0), Some(&HitTarget::Clear));
        assert_eq!(map.hit_test(3, 0), Some(&HitTarget::Trigger));
        assert_eq!(map.hit_test(3, 1), None);
    }

    #[test]
    fn edges_clamp_at_coordinate_limit() {
        let rect = Rect::new(u16::MAX - 2, u16::MAX - 1, 10, 5);
        assert_eq!(rect.right(), u16::MAX);
        assert_eq!(rect.bottom(), u16::MAX);
        assert!(rect.contains(u16::MAX - 1, u16::MAX - 1));
    }
}
