use super::*;

#[test]
fn parses_minimal_scene_with_defaults() {
    let scene = Scene::from_json(r#"{ "canvas": { "width": 8, "height": 6 } }"#).unwrap();
    assert_eq!(scene.canvas.width, 8);
    assert_eq!(scene.background.rgba8().a, 0);
    assert!(scene.shapes.is_empty());
}

#[test]
fn parses_shapes_and_groups() {
    let json = r##"
{
  "canvas": { "width": 32, "height": 32 },
  "background": "#202020",
  "shapes": [
    { "line": { "from": [0, 0], "to": [10, 0], "color": "#ff0000" } },
    { "circle": { "center": [16, 16], "radius": 5, "filled": true, "color": [0.0, 1.0, 0.0] } },
    {
      "group": {
        "clip": { "x0": 4, "y0": 4, "x1": 12, "y1": 12 },
        "shapes": [
          { "rect": { "x0": 0, "y0": 0, "x1": 31, "y1": 31, "filled": true, "color": { "h": 200.0, "s": 0.5, "l": 0.5 } } }
        ]
      }
    }
  ]
}
"##;
    let scene = Scene::from_json(json).unwrap();
    assert_eq!(scene.shapes.len(), 3);
    match &scene.shapes[2] {
        Shape::Group { clip, shapes } => {
            assert_eq!(*clip, Some(crate::raster::clip::ClipRect::new(4, 4, 12, 12)));
            assert_eq!(shapes.len(), 1);
        }
        other => panic!("expected group, got {other:?}"),
    }
}

#[test]
fn json_round_trip_preserves_the_scene() {
    let json = r##"
{
  "canvas": { "width": 16, "height": 16 },
  "shapes": [
    { "bezier": { "p0": [0.0, 0.0], "p1": [4.0, 8.0], "p2": [8.0, 8.0], "p3": [12.0, 0.0], "color": "#336699" } }
  ]
}
"##;
    let scene = Scene::from_json(json).unwrap();
    let reparsed = Scene::from_json(&scene.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.shapes.len(), 1);
    assert_eq!(reparsed.canvas, scene.canvas);
}

#[test]
fn validate_rejects_zero_canvas() {
    let err = Scene::from_json(r#"{ "canvas": { "width": 0, "height": 6 } }"#).unwrap_err();
    assert!(err.to_string().contains("canvas dimensions"));
}

#[test]
fn validate_rejects_negative_radii() {
    let json = r##"
{
  "canvas": { "width": 8, "height": 8 },
  "shapes": [ { "circle": { "center": [4, 4], "radius": -1, "color": "#ffffff" } } ]
}
"##;
    let err = Scene::from_json(json).unwrap_err();
    assert!(err.to_string().contains("radius"));

    let json = r##"
{
  "canvas": { "width": 8, "height": 8 },
  "shapes": [ { "ellipse": { "center": [4, 4], "rx": 2, "ry": -3, "color": "#ffffff" } } ]
}
"##;
    assert!(Scene::from_json(json).is_err());
}

#[test]
fn validate_rejects_non_finite_bezier_points() {
    let scene = Scene {
        canvas: Canvas {
            width: 8,
            height: 8,
        },
        background: ColorSpec::default(),
        shapes: vec![Shape::Bezier {
            p0: [0.0, 0.0],
            p1: [f64::NAN, 1.0],
            p2: [2.0, 2.0],
            p3: [3.0, 3.0],
            color: ColorSpec::default(),
        }],
    };
    assert!(scene.validate().is_err());
}

#[test]
fn validation_recurses_into_groups() {
    let scene = Scene {
        canvas: Canvas {
            width: 8,
            height: 8,
        },
        background: ColorSpec::default(),
        shapes: vec![Shape::Group {
            clip: None,
            shapes: vec![Shape::Circle {
                center: [0, 0],
                radius: -5,
                filled: false,
                color: ColorSpec::default(),
            }],
        }],
    };
    assert!(scene.validate().is_err());
}
