use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 4).is_err());
    assert!(Canvas::new(4, 0).is_err());

    let canvas = Canvas::new(4, 3).unwrap();
    assert_eq!(canvas.pixel_count(), 12);
    assert_eq!(canvas.checked_byte_len(), Some(48));
}

#[test]
fn rgba8_constructors_and_bytes() {
    assert_eq!(Rgba8::rgb(1, 2, 3).a, 255);
    assert!(Rgba8::TRANSPARENT.is_transparent());
    assert!(!Rgba8::rgb(0, 0, 0).is_transparent());
    assert_eq!(Rgba8::rgba(9, 8, 7, 6).to_bytes(), [9, 8, 7, 6]);
}
