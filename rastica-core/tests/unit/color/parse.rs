use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorSpec = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c.rgba8(), Rgba8::rgb(255, 0, 0));

    let c: ColorSpec = serde_json::from_value(json!("#0000FF80")).unwrap();
    assert_eq!(c.rgba8(), Rgba8::rgba(0, 0, 255, 128));
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorSpec = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c.rgba8(), Rgba8::rgb(64, 128, 191));

    let c: ColorSpec = serde_json::from_value(json!([0.0, 1.0, 0.0, 0.5])).unwrap();
    assert_eq!(c.rgba8(), Rgba8::rgba(0, 255, 0, 128));
}

#[test]
fn parses_hsl_and_hsv_objects() {
    let c: ColorSpec = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c.rgba8(), Rgba8::rgb(255, 0, 0));

    let c: ColorSpec = serde_json::from_value(json!({"h": 120.0, "s": 1.0, "v": 1.0})).unwrap();
    assert_eq!(c.rgba8(), Rgba8::rgb(0, 255, 0));
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(ColorSpec::new(Rgba8::rgb(255, 0, 0))).unwrap();
    assert_eq!(v, json!("#ff0000"));

    let v = serde_json::to_value(ColorSpec::new(Rgba8::rgba(0, 0, 255, 128))).unwrap();
    assert_eq!(v, json!("#0000ff80"));
}

#[test]
fn rejects_malformed_inputs() {
    assert!(serde_json::from_value::<ColorSpec>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<ColorSpec>(json!([0.1, 0.2])).is_err());
    assert!(serde_json::from_value::<ColorSpec>(json!("not-a-color")).is_err());
}

#[test]
fn default_is_transparent() {
    assert_eq!(ColorSpec::default().rgba8(), Rgba8::TRANSPARENT);
}
