use crate::core::data::point::Point;

/// A drag gesture over the render buffer, recorded corner to corner in the
/// order the pointer visited them. Lives only for the duration of a capture;
/// nothing persists it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionRect {
    pub start: Point,
    pub end: Point,
}

/// A selection with its corners sorted so that width and height are
/// non-negative. `width`/`height` of zero mean the gesture never opened up
/// an area; capture rejects those.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NormalizedRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl SelectionRect {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn normalized(&self) -> NormalizedRect {
        let left = self.start.x.min(self.end.x);
        let top = self.start.y.min(self.end.y);
        let right = self.start.x.max(self.end.x);
        let bottom = self.start.y.max(self.end.y);

        NormalizedRect {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }
}

impl NormalizedRect {
    /// Intersects the rect with a `width` x `height` buffer at origin.
    #[must_use]
    pub fn clamped_to(&self, width: u32, height: u32) -> NormalizedRect {
        let left = self.left.clamp(0, width as i32);
        let top = self.top.clamp(0, height as i32);
        let right = (self.left + self.width).clamp(0, width as i32);
        let bottom = (self.top + self.height).clamp(0, height as i32);

        NormalizedRect {
            left,
            top,
            width: (right - left).max(0),
            height: (bottom - top).max(0),
        }
    }
}
