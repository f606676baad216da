//! Per-element rasterization.

use crate::pixmap::Pixmap;
use kurbo::{Rect, Shape as _};
use omniboard_core::{Element, History, Rgba, Tool, geometry};

/// Fixed board background. The eraser paints in this color.
pub const BACKGROUND: Rgba = Rgba::white();

/// Template images always draw at this square footprint, centered on
/// their anchor.
pub const TEMPLATE_SIZE: f64 = 300.0;

/// Low-opacity shading overlay for 3D stars.
const STAR_SHADE: Rgba = Rgba::new(0, 0, 0, 26);

/// Flattening tolerance for circle/ellipse outlines.
const CURVE_TOLERANCE: f64 = 0.1;

/// Render one element onto the surface.
///
/// Pure with respect to the element; mutates only the pixmap. Degenerate
/// elements (empty point sequence, missing anchors) are no-ops.
pub fn render_element(surface: &mut Pixmap, element: &Element) {
    // Template short-circuits all path-based logic; color and stroke
    // width are ignored.
    if let Some(image) = &element.template {
        let half = TEMPLATE_SIZE / 2.0;
        let dest = Rect::new(
            image.position.x - half,
            image.position.y - half,
            image.position.x + half,
            image.position.y + half,
        );
        surface.draw_bitmap(&image.rgba, image.width, image.height, dest);
        return;
    }

    let color = if element.tool == Tool::Eraser {
        BACKGROUND
    } else {
        element.color
    };
    let width = element.stroke_width;

    match element.tool {
        Tool::Pencil | Tool::Eraser => {
            if element.points.is_empty() {
                return;
            }
            surface.stroke_polyline(&element.points, width, color);
        }
        Tool::Line => {
            let (Some(start), Some(end)) = (element.start, element.end) else {
                return;
            };
            surface.stroke_segment(start, end, width, color);
        }
        Tool::Rectangle => {
            let (Some(start), Some(end)) = (element.start, element.end) else {
                return;
            };
            if element.three_d {
                let cube = geometry::cube(start, end);
                surface.stroke_path(&geometry::rectangle_path(start, end), width, color);
                for (front, back) in cube.connectors {
                    surface.stroke_segment(front, back, width, color);
                }
                surface.stroke_path(&cube.back_path(), width, color);
            } else {
                surface.stroke_path(&geometry::rectangle_path(start, end), width, color);
            }
        }
        Tool::Circle => {
            let (Some(start), Some(end)) = (element.start, element.end) else {
                return;
            };
            if element.three_d {
                let sphere = geometry::sphere(start, end);
                surface.stroke_path(&sphere.outline.to_path(CURVE_TOLERANCE), width, color);
                surface.stroke_path(&sphere.equator.to_path(CURVE_TOLERANCE), width, color);
                surface.stroke_path(&sphere.meridian.to_path(CURVE_TOLERANCE), width, color);
            } else {
                let circle = geometry::circle(start, end);
                surface.stroke_path(&circle.to_path(CURVE_TOLERANCE), width, color);
            }
        }
        Tool::Triangle => {
            let (Some(start), Some(end)) = (element.start, element.end) else {
                return;
            };
            let path = if element.three_d {
                geometry::wedge_path(start, end)
            } else {
                geometry::triangle_path(start, end)
            };
            surface.stroke_path(&path, width, color);
        }
        Tool::Star => {
            let (Some(start), Some(end)) = (element.start, element.end) else {
                return;
            };
            let path = geometry::star_path(start, end);
            surface.stroke_path(&path, width, color);
            if element.three_d {
                surface.fill_path(&path, STAR_SHADE);
            }
        }
        // A template element without its payload has nothing to draw.
        Tool::Template => {}
    }
}

/// Repaint the persistent surface from scratch: background fill, then
/// every committed element in draw order. History is the single source
/// of truth for the visible state.
pub fn replay(surface: &mut Pixmap, history: &History) {
    log::trace!("replaying {} elements", history.len());
    surface.fill(BACKGROUND);
    for element in history.elements() {
        render_element(surface, element);
    }
}
