//! Cubic Bezier flattening by recursive De Casteljau midpoint subdivision.

use kurbo::Point;

use crate::foundation::core::Rgba8;
use crate::raster::surface::Surface;

// Subdivision stops once the control net deviates from the chord by less
// than this many pixels.
const FLATNESS_TOLERANCE: f64 = 0.25;

// Hard recursion bound; 2^20 segments is far beyond any on-screen curve.
const MAX_DEPTH: u8 = 20;

impl Surface {
    /// Flatten and draw a cubic Bezier curve.
    ///
    /// The curve is subdivided at the parametric midpoint until each piece is
    /// flat enough (or the depth bound is hit), then drawn as a connected
    /// polyline from `p0` to `p3`. Non-finite control points draw nothing.
    pub fn draw_cubic_bezier(&mut self, p0: Point, p1: Point, p2: Point, p3: Point, color: Rgba8) {
        if ![p0, p1, p2, p3]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
        {
            return;
        }
        self.bezier_segment(p0, p1, p2, p3, color, 0);
    }

    fn bezier_segment(
        &mut self,
        p0: Point,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Rgba8,
        depth: u8,
    ) {
        if depth >= MAX_DEPTH || is_flat(p0, p1, p2, p3) {
            self.draw_line(
                round_coord(p0.x),
                round_coord(p0.y),
                round_coord(p3.x),
                round_coord(p3.y),
                color,
            );
            return;
        }

        let p01 = p0.midpoint(p1);
        let p12 = p1.midpoint(p2);
        let p23 = p2.midpoint(p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let mid = p012.midpoint(p123);

        self.bezier_segment(p0, p01, p012, mid, color, depth + 1);
        self.bezier_segment(mid, p123, p23, p3, color, depth + 1);
    }
}

fn is_flat(p0: Point, p1: Point, p2: Point, p3: Point) -> bool {
    chord_distance(p1, p0, p3).max(chord_distance(p2, p0, p3)) <= FLATNESS_TOLERANCE
}

// Distance from `p` to the chord `a..b`, falling back to the distance to `a`
// when the chord is degenerate.
fn chord_distance(p: Point, a: Point, b: Point) -> f64 {
    let chord = b - a;
    let len = chord.hypot();
    if len <= f64::EPSILON {
        return (p - a).hypot();
    }
    (chord.cross(p - a) / len).abs()
}

fn round_coord(v: f64) -> i32 {
    v.round() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bezier.rs"]
mod tests;
