use crate::foundation::core::Canvas;

/// Inclusive integer pixel rectangle used for scissoring and line clipping.
///
/// A rectangle is empty when `x1 < x0` or `y1 < y0`; [`ClipRect::intersect`]
/// produces empty rectangles for disjoint inputs and drawing treats them as
/// "clip everything".
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClipRect {
    /// Leftmost column, inclusive.
    pub x0: i32,
    /// Topmost row, inclusive.
    pub y0: i32,
    /// Rightmost column, inclusive.
    pub x1: i32,
    /// Bottommost row, inclusive.
    pub y1: i32,
}

impl ClipRect {
    /// Rectangle spanning the two corner points, normalized so that
    /// `x0 <= x1` and `y0 <= y1`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// The full pixel area of a canvas.
    pub fn from_canvas(canvas: Canvas) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: canvas.width.saturating_sub(1) as i32,
            y1: canvas.height.saturating_sub(1) as i32,
        }
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Intersection of two rectangles; empty when they are disjoint.
    pub fn intersect(self, other: Self) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    /// True when the pixel lies inside the rectangle.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

// Cohen-Sutherland outcodes. INSIDE is the absence of all bits.
const LEFT: u8 = 0b0001;
const RIGHT: u8 = 0b0010;
const TOP: u8 = 0b0100;
const BOTTOM: u8 = 0b1000;

fn outcode(rect: ClipRect, x: f64, y: f64) -> u8 {
    let mut code = 0;
    if x < f64::from(rect.x0) {
        code |= LEFT;
    } else if x > f64::from(rect.x1) {
        code |= RIGHT;
    }
    if y < f64::from(rect.y0) {
        code |= TOP;
    } else if y > f64::from(rect.y1) {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland line clipping against an inclusive pixel rectangle.
///
/// Returns the clipped endpoints, or `None` when the segment lies fully
/// outside the rectangle (or the rectangle is empty). A zero-length segment
/// inside the rectangle is accepted as a single point.
pub fn clip_line(
    rect: ClipRect,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Option<((i32, i32), (i32, i32))> {
    if rect.is_empty() {
        return None;
    }

    let (mut fx0, mut fy0) = (f64::from(x0), f64::from(y0));
    let (mut fx1, mut fy1) = (f64::from(x1), f64::from(y1));
    let mut code0 = outcode(rect, fx0, fy0);
    let mut code1 = outcode(rect, fx1, fy1);

    loop {
        if code0 | code1 == 0 {
            let clamp = |x: f64, lo: i32, hi: i32| (x.round() as i32).clamp(lo, hi);
            return Some((
                (clamp(fx0, rect.x0, rect.x1), clamp(fy0, rect.y0, rect.y1)),
                (clamp(fx1, rect.x0, rect.x1), clamp(fy1, rect.y0, rect.y1)),
            ));
        }
        if code0 & code1 != 0 {
            return None;
        }

        // Push the endpoint with the larger outcode onto the violated edge.
        let out = if code0 >= code1 { code0 } else { code1 };
        let (x, y) = if out & TOP != 0 {
            let t = (f64::from(rect.y0) - fy0) / (fy1 - fy0);
            (fx0 + (fx1 - fx0) * t, f64::from(rect.y0))
        } else if out & BOTTOM != 0 {
            let t = (f64::from(rect.y1) - fy0) / (fy1 - fy0);
            (fx0 + (fx1 - fx0) * t, f64::from(rect.y1))
        } else if out & RIGHT != 0 {
            let t = (f64::from(rect.x1) - fx0) / (fx1 - fx0);
            (f64::from(rect.x1), fy0 + (fy1 - fy0) * t)
        } else {
            let t = (f64::from(rect.x0) - fx0) / (fx1 - fx0);
            (f64::from(rect.x0), fy0 + (fy1 - fy0) * t)
        };

        if out == code0 {
            fx0 = x;
            fy0 = y;
            code0 = outcode(rect, fx0, fy0);
        } else {
            fx1 = x;
            fy1 = y;
            code1 = outcode(rect, fx1, fy1);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/clip.rs"]
mod tests;
