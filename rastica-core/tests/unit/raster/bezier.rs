use super::*;
use crate::foundation::core::Canvas;

const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);

fn surface(w: u32, h: u32) -> Surface {
    Surface::new(Canvas {
        width: w,
        height: h,
    })
    .unwrap()
}

fn drawn_pixels(s: &Surface) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..s.height() as i32 {
        for x in 0..s.width() as i32 {
            if s.pixel(x, y).is_some_and(|p| p.a != 0) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn collinear_control_points_match_a_line() {
    let mut curve = surface(16, 16);
    curve.draw_cubic_bezier(
        Point::new(0.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(8.0, 8.0),
        Point::new(12.0, 12.0),
        WHITE,
    );

    let mut line = surface(16, 16);
    line.draw_line(0, 0, 12, 12, WHITE);

    assert_eq!(drawn_pixels(&curve), drawn_pixels(&line));
}

#[test]
fn curve_is_a_connected_polyline_between_endpoints() {
    let mut s = surface(32, 32);
    s.draw_cubic_bezier(
        Point::new(2.0, 16.0),
        Point::new(10.0, 0.0),
        Point::new(22.0, 31.0),
        Point::new(29.0, 14.0),
        WHITE,
    );
    let px = drawn_pixels(&s);
    assert!(px.contains(&(2, 16)), "start point drawn");
    assert!(px.contains(&(29, 14)), "end point drawn");

    // Every pixel of the flattened polyline touches another one.
    assert!(px.len() > 2);
    for &(x, y) in &px {
        let connected = px.iter().any(|&(ox, oy)| {
            (ox, oy) != (x, y) && (ox - x).abs() <= 1 && (oy - y).abs() <= 1
        });
        assert!(connected, "({x},{y}) is isolated");
    }
}

#[test]
fn subdivision_terminates_for_wild_control_points() {
    let mut s = surface(8, 8);
    s.draw_cubic_bezier(
        Point::new(0.0, 0.0),
        Point::new(1.0e6, -1.0e6),
        Point::new(-1.0e6, 1.0e6),
        Point::new(7.0, 7.0),
        WHITE,
    );
    let px = drawn_pixels(&s);
    assert!(px.contains(&(0, 0)));
    assert!(px.contains(&(7, 7)));
}

#[test]
fn non_finite_control_points_draw_nothing() {
    let mut s = surface(8, 8);
    s.draw_cubic_bezier(
        Point::new(0.0, 0.0),
        Point::new(f64::NAN, 2.0),
        Point::new(4.0, f64::INFINITY),
        Point::new(7.0, 7.0),
        WHITE,
    );
    assert!(drawn_pixels(&s).is_empty());
}

#[test]
fn degenerate_single_point_curve_is_one_pixel() {
    let mut s = surface(8, 8);
    let p = Point::new(3.0, 4.0);
    s.draw_cubic_bezier(p, p, p, p, WHITE);
    assert_eq!(drawn_pixels(&s), vec![(3, 4)]);
}
