//! Scan conversion of lines, rectangles, circles and ellipses.
//!
//! Outline primitives use the classic integer-only incremental algorithms
//! (Bresenham for lines, midpoint for circles and ellipses); filled
//! primitives emit horizontal spans per scanline. Everything blends with
//! straight source-over and honors the surface scissor.

use crate::foundation::core::Rgba8;
use crate::foundation::math::lerp_u8;
use crate::raster::clip::clip_line;
use crate::raster::surface::Surface;

impl Surface {
    /// Draw a line segment with Bresenham's algorithm.
    ///
    /// The segment is clipped against the current scissor first
    /// (Cohen-Sutherland), so the pixel walk never leaves the clip
    /// rectangle.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8) {
        let Some(((mut x0, mut y0), (x1, y1))) = clip_line(self.clip(), x0, y0, x1, y1) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draw a horizontal span `[x0, x1]` on row `y`.
    pub fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgba8) {
        self.blend_hspan(x0, x1, y, color);
    }

    /// Draw a vertical span `[y0, y1]` on column `x`.
    pub fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgba8) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.blend_pixel(x, y, color);
        }
    }

    /// Draw a one-pixel rectangle outline spanning the two corner points.
    pub fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        self.draw_hline(x0, x1, y0, color);
        if y1 > y0 {
            self.draw_hline(x0, x1, y1, color);
        }
        // Corners already covered; keep each edge pixel blended once.
        if y1 > y0 + 1 {
            self.draw_vline(x0, y0 + 1, y1 - 1, color);
            if x1 > x0 {
                self.draw_vline(x1, y0 + 1, y1 - 1, color);
            }
        }
    }

    /// Fill a rectangle spanning the two corner points.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.blend_hspan(x0, x1, y, color);
        }
    }

    /// Fill a rectangle with a bilinear gradient between the four corner
    /// colors, ordered top-left, top-right, bottom-left, bottom-right.
    pub fn fill_rect_gradient(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        corners: [Rgba8; 4],
    ) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        let [tl, tr, bl, br] = corners;
        let w = x1 - x0;
        let h = y1 - y0;

        for y in y0..=y1 {
            let ty = if h == 0 {
                0
            } else {
                (((y - y0) as i64 * 255) / h as i64) as u16
            };
            let left = lerp_rgba(tl, bl, ty);
            let right = lerp_rgba(tr, br, ty);
            for x in x0..=x1 {
                let tx = if w == 0 {
                    0
                } else {
                    (((x - x0) as i64 * 255) / w as i64) as u16
                };
                self.blend_pixel(x, y, lerp_rgba(left, right, tx));
            }
        }
    }

    /// Draw a circle outline with the midpoint algorithm.
    ///
    /// A zero radius degenerates to a single pixel; negative radii draw
    /// nothing.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba8) {
        if radius < 0 {
            return;
        }
        if radius == 0 {
            self.blend_pixel(cx, cy, color);
            return;
        }

        let mut x = radius;
        let mut y = 0;
        let mut d = 1 - radius;
        while y <= x {
            self.circle_points(cx, cy, x, y, color);
            y += 1;
            if d < 0 {
                d += 2 * y + 1;
            } else {
                x -= 1;
                d += 2 * (y - x) + 1;
            }
        }
    }

    // Blend the 8-way symmetric points, skipping duplicates on the axes and
    // the diagonal.
    fn circle_points(&mut self, cx: i32, cy: i32, x: i32, y: i32, color: Rgba8) {
        self.blend_pixel(cx + x, cy + y, color);
        if x != 0 {
            self.blend_pixel(cx - x, cy + y, color);
        }
        if y != 0 {
            self.blend_pixel(cx + x, cy - y, color);
            if x != 0 {
                self.blend_pixel(cx - x, cy - y, color);
            }
        }
        if x != y {
            self.blend_pixel(cx + y, cy + x, color);
            if y != 0 {
                self.blend_pixel(cx - y, cy + x, color);
            }
            if x != 0 {
                self.blend_pixel(cx + y, cy - x, color);
                if y != 0 {
                    self.blend_pixel(cx - y, cy - x, color);
                }
            }
        }
    }

    /// Fill the disk `dx*dx + dy*dy <= radius*radius` with horizontal spans.
    pub fn fill_disk(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba8) {
        if radius < 0 {
            return;
        }
        let r2 = i64::from(radius) * i64::from(radius);
        for dy in -radius..=radius {
            let rest = r2 - i64::from(dy) * i64::from(dy);
            let w = span_half_width(rest, |w| w * w <= rest);
            self.blend_hspan(cx - w, cx + w, cy + dy, color);
        }
    }

    /// Draw an ellipse outline with the two-region midpoint algorithm.
    ///
    /// Zero radii degenerate to a line or a single pixel; negative radii
    /// draw nothing.
    pub fn draw_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba8) {
        if rx < 0 || ry < 0 {
            return;
        }
        if rx == 0 && ry == 0 {
            self.blend_pixel(cx, cy, color);
            return;
        }
        if rx == 0 {
            self.draw_vline(cx, cy - ry, cy + ry, color);
            return;
        }
        if ry == 0 {
            self.draw_hline(cx - rx, cx + rx, cy, color);
            return;
        }

        let rx2 = i64::from(rx) * i64::from(rx);
        let ry2 = i64::from(ry) * i64::from(ry);
        let two_rx2 = 2 * rx2;
        let two_ry2 = 2 * ry2;

        let mut x: i64 = 0;
        let mut y: i64 = i64::from(ry);
        let mut dx: i64 = 0;
        let mut dy: i64 = two_rx2 * y;

        // Region 1: gradient magnitude < 1, step in x.
        let mut d1 = ry2 - rx2 * i64::from(ry) + rx2 / 4;
        while dx < dy {
            self.ellipse_points(cx, cy, x as i32, y as i32, color);
            x += 1;
            dx += two_ry2;
            if d1 < 0 {
                d1 += dx + ry2;
            } else {
                y -= 1;
                dy -= two_rx2;
                d1 += dx - dy + ry2;
            }
        }

        // Region 2: step in y until the ellipse closes.
        let mut d2 = ry2 * (2 * x + 1) * (2 * x + 1) / 4 + rx2 * (y - 1) * (y - 1) - rx2 * ry2;
        while y >= 0 {
            self.ellipse_points(cx, cy, x as i32, y as i32, color);
            y -= 1;
            dy -= two_rx2;
            if d2 > 0 {
                d2 += rx2 - dy;
            } else {
                x += 1;
                dx += two_ry2;
                d2 += dx - dy + rx2;
            }
        }
    }

    fn ellipse_points(&mut self, cx: i32, cy: i32, x: i32, y: i32, color: Rgba8) {
        self.blend_pixel(cx + x, cy + y, color);
        if x != 0 {
            self.blend_pixel(cx - x, cy + y, color);
        }
        if y != 0 {
            self.blend_pixel(cx + x, cy - y, color);
            if x != 0 {
                self.blend_pixel(cx - x, cy - y, color);
            }
        }
    }

    /// Fill the ellipse `(dx/rx)^2 + (dy/ry)^2 <= 1` with horizontal spans.
    pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba8) {
        if rx < 0 || ry < 0 {
            return;
        }
        if ry == 0 {
            self.blend_hspan(cx - rx, cx + rx, cy, color);
            return;
        }

        let rx2 = i64::from(rx) * i64::from(rx);
        let ry2 = i64::from(ry) * i64::from(ry);
        let bound = rx2 * ry2;
        for dy in -ry..=ry {
            // Widest w with w^2*ry^2 + dy^2*rx^2 <= rx^2*ry^2.
            let rest = bound - i64::from(dy) * i64::from(dy) * rx2;
            let w = span_half_width(rest / ry2.max(1), |w| w * w * ry2 <= rest);
            self.blend_hspan(cx - w, cx + w, cy + dy, color);
        }
    }
}

fn lerp_rgba(a: Rgba8, b: Rgba8, t: u16) -> Rgba8 {
    Rgba8 {
        r: lerp_u8(a.r, b.r, t),
        g: lerp_u8(a.g, b.g, t),
        b: lerp_u8(a.b, b.b, t),
        a: lerp_u8(a.a, b.a, t),
    }
}

// Integer half-width of a span: float estimate corrected against the exact
// integer predicate.
fn span_half_width(estimate_sq: i64, inside: impl Fn(i64) -> bool) -> i32 {
    let mut w = (estimate_sq.max(0) as f64).sqrt().floor() as i64;
    while inside(w + 1) {
        w += 1;
    }
    while w > 0 && !inside(w) {
        w -= 1;
    }
    w as i32
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scan.rs"]
mod tests;
