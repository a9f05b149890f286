use super::*;

fn rect10() -> ClipRect {
    ClipRect::new(0, 0, 10, 10)
}

#[test]
fn rect_normalizes_and_intersects() {
    let r = ClipRect::new(5, 7, 1, 2);
    assert_eq!(r, ClipRect::new(1, 2, 5, 7));

    let a = ClipRect::new(0, 0, 4, 4);
    let b = ClipRect::new(2, 2, 8, 8);
    assert_eq!(a.intersect(b), ClipRect::new(2, 2, 4, 4));

    let disjoint = ClipRect::new(6, 6, 9, 9);
    assert!(a.intersect(disjoint).is_empty());
}

#[test]
fn fully_inside_is_accepted_unchanged() {
    assert_eq!(
        clip_line(rect10(), 1, 1, 8, 8),
        Some(((1, 1), (8, 8)))
    );
}

#[test]
fn fully_outside_is_rejected() {
    assert_eq!(clip_line(rect10(), -5, 0, -1, 10), None);
    assert_eq!(clip_line(rect10(), 0, 12, 10, 20), None);
    assert_eq!(clip_line(rect10(), 11, -3, 20, 9), None);
}

#[test]
fn crossing_segment_is_clipped_to_the_border() {
    assert_eq!(
        clip_line(rect10(), -5, 5, 15, 5),
        Some(((0, 5), (10, 5)))
    );
    assert_eq!(
        clip_line(rect10(), 5, -5, 5, 15),
        Some(((5, 0), (5, 10)))
    );
}

#[test]
fn diagonal_through_corners_is_clipped() {
    assert_eq!(
        clip_line(rect10(), -2, -2, 12, 12),
        Some(((0, 0), (10, 10)))
    );
}

#[test]
fn outside_segment_crossing_only_a_corner_region_is_rejected() {
    // Both endpoints sit above and to the left, with the segment passing
    // diagonally by the corner without entering.
    assert_eq!(clip_line(rect10(), -4, 2, 2, -4), None);
}

#[test]
fn zero_length_segments() {
    assert_eq!(clip_line(rect10(), 4, 4, 4, 4), Some(((4, 4), (4, 4))));
    assert_eq!(clip_line(rect10(), -4, -4, -4, -4), None);
}

#[test]
fn empty_rect_rejects_everything() {
    let empty = ClipRect::new(0, 0, 4, 4).intersect(ClipRect::new(6, 6, 9, 9));
    assert!(empty.is_empty());
    assert_eq!(clip_line(empty, 0, 0, 9, 9), None);
}
