use kurbo::Point;

use crate::foundation::error::RasticaResult;
use crate::raster::surface::Surface;
use crate::scene::model::{Scene, Shape};

/// Rasterize a scene into a fresh surface.
///
/// The surface is cleared to the scene background, then shapes are drawn in
/// order with straight source-over blending. Groups push their scissor
/// rectangle for the duration of their children.
#[tracing::instrument(skip(scene), fields(
    width = scene.canvas.width,
    height = scene.canvas.height,
    shapes = scene.shapes.len(),
))]
pub fn render_scene(scene: &Scene) -> RasticaResult<Surface> {
    scene.validate()?;
    let mut surface = Surface::new(scene.canvas)?;
    surface.clear(scene.background.rgba8());
    for shape in &scene.shapes {
        draw_shape(&mut surface, shape);
    }
    Ok(surface)
}

fn draw_shape(surface: &mut Surface, shape: &Shape) {
    match shape {
        Shape::Line { from, to, color } => {
            surface.draw_line(from[0], from[1], to[0], to[1], color.rgba8());
        }
        Shape::Rect {
            x0,
            y0,
            x1,
            y1,
            filled,
            color,
            gradient,
        } => match (*filled, gradient) {
            (true, Some(corners)) => {
                surface.fill_rect_gradient(*x0, *y0, *x1, *y1, corners.map(|c| c.rgba8()));
            }
            (true, None) => surface.fill_rect(*x0, *y0, *x1, *y1, color.rgba8()),
            (false, _) => surface.draw_rect(*x0, *y0, *x1, *y1, color.rgba8()),
        },
        Shape::Circle {
            center,
            radius,
            filled,
            color,
        } => {
            if *filled {
                surface.fill_disk(center[0], center[1], *radius, color.rgba8());
            } else {
                surface.draw_circle(center[0], center[1], *radius, color.rgba8());
            }
        }
        Shape::Ellipse {
            center,
            rx,
            ry,
            filled,
            color,
        } => {
            if *filled {
                surface.fill_ellipse(center[0], center[1], *rx, *ry, color.rgba8());
            } else {
                surface.draw_ellipse(center[0], center[1], *rx, *ry, color.rgba8());
            }
        }
        Shape::Bezier {
            p0,
            p1,
            p2,
            p3,
            color,
        } => {
            surface.draw_cubic_bezier(
                Point::new(p0[0], p0[1]),
                Point::new(p1[0], p1[1]),
                Point::new(p2[0], p2[1]),
                Point::new(p3[0], p3[1]),
                color.rgba8(),
            );
        }
        Shape::Group { clip, shapes } => {
            if let Some(rect) = clip {
                surface.push_clip(*rect);
            }
            for child in shapes {
                draw_shape(surface, child);
            }
            if clip.is_some() {
                surface.pop_clip();
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
