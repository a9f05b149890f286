use crate::color::parse::ColorSpec;
use crate::foundation::core::Canvas;
use crate::foundation::error::{RasticaError, RasticaResult};
use crate::raster::clip::ClipRect;

/// A complete drawable scene.
///
/// A scene is a pure data model that can be built programmatically or
/// serialized/deserialized via Serde (JSON). Rendering a scene into pixels is
/// performed by [`crate::render_scene`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Background color the surface is cleared to (default transparent).
    #[serde(default)]
    pub background: ColorSpec,
    /// Shapes drawn in order, later shapes over earlier ones.
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// A drawable primitive or a scissored group of primitives.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Line segment between two pixel endpoints.
    Line {
        /// Start point `[x, y]`.
        from: [i32; 2],
        /// End point `[x, y]`.
        to: [i32; 2],
        /// Stroke color.
        color: ColorSpec,
    },
    /// Axis-aligned rectangle spanning two corner points (inclusive).
    Rect {
        /// First corner x.
        x0: i32,
        /// First corner y.
        y0: i32,
        /// Second corner x.
        x1: i32,
        /// Second corner y.
        y1: i32,
        /// Fill instead of outlining.
        #[serde(default)]
        filled: bool,
        /// Outline or fill color.
        color: ColorSpec,
        /// Optional bilinear gradient corners (top-left, top-right,
        /// bottom-left, bottom-right); used instead of `color` when the
        /// rectangle is filled.
        #[serde(default)]
        gradient: Option<[ColorSpec; 4]>,
    },
    /// Circle outline or disk.
    Circle {
        /// Center `[x, y]`.
        center: [i32; 2],
        /// Radius in pixels, must be >= 0.
        radius: i32,
        /// Fill the disk instead of outlining.
        #[serde(default)]
        filled: bool,
        /// Outline or fill color.
        color: ColorSpec,
    },
    /// Axis-aligned ellipse outline or filled ellipse.
    Ellipse {
        /// Center `[x, y]`.
        center: [i32; 2],
        /// Horizontal semi-axis in pixels, must be >= 0.
        rx: i32,
        /// Vertical semi-axis in pixels, must be >= 0.
        ry: i32,
        /// Fill instead of outlining.
        #[serde(default)]
        filled: bool,
        /// Outline or fill color.
        color: ColorSpec,
    },
    /// Cubic Bezier curve flattened to a polyline.
    Bezier {
        /// Start point.
        p0: [f64; 2],
        /// First control point.
        p1: [f64; 2],
        /// Second control point.
        p2: [f64; 2],
        /// End point.
        p3: [f64; 2],
        /// Stroke color.
        color: ColorSpec,
    },
    /// Nested shapes, optionally scissored to a rectangle.
    Group {
        /// Scissor rectangle applied while drawing the children.
        #[serde(default)]
        clip: Option<ClipRect>,
        /// Child shapes drawn in order.
        shapes: Vec<Shape>,
    },
}

impl Scene {
    /// Parse and validate a scene from JSON.
    pub fn from_json(json: &str) -> RasticaResult<Self> {
        let scene: Self =
            serde_json::from_str(json).map_err(|e| RasticaError::serde(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json(&self) -> RasticaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RasticaError::serde(e.to_string()))
    }

    /// Check the scene invariants the renderer relies on.
    pub fn validate(&self) -> RasticaResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(RasticaError::scene("canvas dimensions must be > 0"));
        }
        for shape in &self.shapes {
            validate_shape(shape)?;
        }
        Ok(())
    }
}

fn validate_shape(shape: &Shape) -> RasticaResult<()> {
    match shape {
        Shape::Line { .. } | Shape::Rect { .. } => Ok(()),
        Shape::Circle { radius, .. } => {
            if *radius < 0 {
                return Err(RasticaError::scene(format!(
                    "circle radius must be >= 0, got {radius}"
                )));
            }
            Ok(())
        }
        Shape::Ellipse { rx, ry, .. } => {
            if *rx < 0 || *ry < 0 {
                return Err(RasticaError::scene(format!(
                    "ellipse radii must be >= 0, got ({rx}, {ry})"
                )));
            }
            Ok(())
        }
        Shape::Bezier { p0, p1, p2, p3, .. } => {
            let finite = [p0, p1, p2, p3]
                .iter()
                .all(|p| p[0].is_finite() && p[1].is_finite());
            if !finite {
                return Err(RasticaError::scene("bezier control points must be finite"));
            }
            Ok(())
        }
        Shape::Group { shapes, .. } => {
            for child in shapes {
                validate_shape(child)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
