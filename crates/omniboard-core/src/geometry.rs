//! Path construction for each tool variant.
//!
//! Pure functions from element anchors to stroke geometry. The rasterizer
//! consumes these; tests can assert on vertices and segments directly.

use kurbo::{BezPath, Circle, Ellipse, Point, Rect, Vec2};

/// Cube depth as a fraction of the front-face width.
pub const CUBE_DEPTH_RATIO: f64 = 0.4;
/// Flattening ratio for the sphere equator/meridian ellipses.
pub const SPHERE_FLATTEN_RATIO: f64 = 0.4;
/// Wedge depth as a fraction of the horizontal span.
pub const WEDGE_DEPTH_X_RATIO: f64 = 0.3;
/// Wedge lift as a fraction of the vertical span.
pub const WEDGE_DEPTH_Y_RATIO: f64 = 0.2;
/// Star inner radius as a fraction of the outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;

/// Open polyline through the given points, in order.
pub fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
    }
    path
}

/// Single segment from `start` to `end`.
pub fn segment_path(start: Point, end: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(end);
    path
}

/// Axis-aligned rectangle spanning the two anchors. Handles either sign
/// of width/height.
pub fn rectangle(start: Point, end: Point) -> Rect {
    Rect::from_points(start, end)
}

/// Closed outline of [`rectangle`].
pub fn rectangle_path(start: Point, end: Point) -> BezPath {
    let rect = rectangle(start, end);
    let mut path = BezPath::new();
    path.move_to(Point::new(rect.x0, rect.y0));
    path.line_to(Point::new(rect.x1, rect.y0));
    path.line_to(Point::new(rect.x1, rect.y1));
    path.line_to(Point::new(rect.x0, rect.y1));
    path.close_path();
    path
}

/// Oblique-projection cube: front face, four connector edges and the
/// back-face outline. Not a true perspective cube.
#[derive(Debug, Clone)]
pub struct CubeGeometry {
    /// Front face outline.
    pub front: Rect,
    /// One connector per front corner, front point first.
    pub connectors: [(Point, Point); 4],
    /// Back-face corners in outline order (top-left, top-right,
    /// bottom-right, bottom-left).
    pub back: [Point; 4],
}

impl CubeGeometry {
    /// Closed outline through the back-face corners.
    pub fn back_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.back[0]);
        path.line_to(self.back[1]);
        path.line_to(self.back[2]);
        path.line_to(self.back[3]);
        path.close_path();
        path
    }
}

/// Cube geometry for a rectangle drawn with the 3D flag.
///
/// Depth is 40% of the signed width; back corners sit diagonally up-right
/// of their front corners, so every connector has length `depth * sqrt(2)`.
pub fn cube(start: Point, end: Point) -> CubeGeometry {
    let width = end.x - start.x;
    let height = end.y - start.y;
    let depth = width * CUBE_DEPTH_RATIO;
    let shift = Vec2::new(depth, -depth);

    let front_corners = [
        start,
        Point::new(start.x + width, start.y),
        Point::new(start.x + width, start.y + height),
        Point::new(start.x, start.y + height),
    ];

    CubeGeometry {
        front: rectangle(start, end),
        connectors: [
            (front_corners[0], front_corners[0] + shift),
            (front_corners[1], front_corners[1] + shift),
            (front_corners[2], front_corners[2] + shift),
            (front_corners[3], front_corners[3] + shift),
        ],
        back: [
            front_corners[0] + shift,
            front_corners[1] + shift,
            front_corners[2] + shift,
            front_corners[3] + shift,
        ],
    }
}

/// Circle centered at `start` with radius `|end - start|`.
pub fn circle(start: Point, end: Point) -> Circle {
    Circle::new(start, start.distance(end))
}

/// Wireframe-sphere approximation: full outline plus flattened equator
/// and meridian ellipses.
#[derive(Debug, Clone)]
pub struct SphereGeometry {
    pub outline: Circle,
    pub equator: Ellipse,
    pub meridian: Ellipse,
}

/// Sphere geometry for a circle drawn with the 3D flag.
pub fn sphere(start: Point, end: Point) -> SphereGeometry {
    let outline = circle(start, end);
    let radius = outline.radius;
    SphereGeometry {
        outline,
        equator: Ellipse::new(start, Vec2::new(radius, radius * SPHERE_FLATTEN_RATIO), 0.0),
        meridian: Ellipse::new(start, Vec2::new(radius * SPHERE_FLATTEN_RATIO, radius), 0.0),
    }
}

/// Isosceles triangle vertices: bottom-left, bottom-right, then the apex
/// at the horizontal midpoint of the anchors and `start.y`.
pub fn triangle_vertices(start: Point, end: Point) -> [Point; 3] {
    [
        Point::new(start.x, end.y),
        Point::new(end.x, end.y),
        Point::new((start.x + end.x) / 2.0, start.y),
    ]
}

/// Closed triangle outline.
pub fn triangle_path(start: Point, end: Point) -> BezPath {
    let [bottom_left, bottom_right, apex] = triangle_vertices(start, end);
    let mut path = BezPath::new();
    path.move_to(bottom_left);
    path.line_to(bottom_right);
    path.line_to(apex);
    path.close_path();
    path
}

/// Extruded-wedge approximation for a triangle drawn with the 3D flag:
/// the front triangle, then an edge from the apex to a depth-offset point
/// (30% of the horizontal span, -20% of the vertical span), connected back
/// to the right base corner.
pub fn wedge_path(start: Point, end: Point) -> BezPath {
    let [bottom_left, bottom_right, apex] = triangle_vertices(start, end);
    let depth = Vec2::new(
        (end.x - start.x) * WEDGE_DEPTH_X_RATIO,
        -(end.y - start.y) * WEDGE_DEPTH_Y_RATIO,
    );

    let mut path = BezPath::new();
    path.move_to(bottom_left);
    path.line_to(bottom_right);
    path.line_to(apex);
    path.line_to(bottom_left);
    path.line_to(apex + depth);
    path.line_to(bottom_right);
    path
}

/// Vertices of a 5-point star centered at `center`: outer and inner points
/// alternate at 72-degree spacing starting at an 18-degree offset, with the
/// inner radius at 40% of the outer. Always exactly 10 vertices.
pub fn star_vertices(center: Point, outer_radius: f64) -> Vec<Point> {
    let inner_radius = outer_radius * STAR_INNER_RATIO;
    let mut vertices = Vec::with_capacity(10);
    for i in 0..5 {
        let outer_angle = (18.0 + i as f64 * 72.0).to_radians();
        vertices.push(Point::new(
            center.x + outer_angle.cos() * outer_radius,
            center.y - outer_angle.sin() * outer_radius,
        ));
        let inner_angle = (54.0 + i as f64 * 72.0).to_radians();
        vertices.push(Point::new(
            center.x + inner_angle.cos() * inner_radius,
            center.y - inner_angle.sin() * inner_radius,
        ));
    }
    vertices
}

/// Closed 5-point star outline; outer radius is `|end - start|`.
pub fn star_path(start: Point, end: Point) -> BezPath {
    let vertices = star_vertices(start, start.distance(end));
    let mut path = BezPath::new();
    path.move_to(vertices[0]);
    for vertex in &vertices[1..] {
        path.line_to(*vertex);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rectangle_bounds() {
        let rect = rectangle(Point::new(10.0, 10.0), Point::new(110.0, 60.0));
        assert!((rect.x0 - 10.0).abs() < EPS);
        assert!((rect.y0 - 10.0).abs() < EPS);
        assert!((rect.x1 - 110.0).abs() < EPS);
        assert!((rect.y1 - 60.0).abs() < EPS);
    }

    #[test]
    fn test_rectangle_negative_span() {
        // Dragging up-left must produce the same outline.
        let rect = rectangle(Point::new(110.0, 60.0), Point::new(10.0, 10.0));
        assert!((rect.x0 - 10.0).abs() < EPS);
        assert!((rect.y0 - 10.0).abs() < EPS);
        assert!((rect.x1 - 110.0).abs() < EPS);
        assert!((rect.y1 - 60.0).abs() < EPS);
    }

    #[test]
    fn test_cube_connector_lengths() {
        // depth = 0.4 * 100 = 40; each connector spans (40, -40).
        let geometry = cube(Point::new(10.0, 10.0), Point::new(110.0, 60.0));
        let expected = 40.0 * 2.0_f64.sqrt();
        assert_eq!(geometry.connectors.len(), 4);
        for (front, back) in geometry.connectors {
            assert!((front.distance(back) - expected).abs() < EPS);
            assert!((back.x - front.x - 40.0).abs() < EPS);
            assert!((back.y - front.y + 40.0).abs() < EPS);
        }
    }

    #[test]
    fn test_cube_back_face_matches_connectors() {
        let geometry = cube(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        for (i, (_, back)) in geometry.connectors.iter().enumerate() {
            assert_eq!(*back, geometry.back[i]);
        }
    }

    #[test]
    fn test_circle_radius_is_anchor_distance() {
        let c = circle(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((c.radius - 5.0).abs() < EPS);
        assert_eq!(c.center, Point::ZERO);
    }

    #[test]
    fn test_sphere_ellipse_radii() {
        let s = sphere(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!((s.equator.radii().x - 10.0).abs() < EPS);
        assert!((s.equator.radii().y - 4.0).abs() < EPS);
        assert!((s.meridian.radii().x - 4.0).abs() < EPS);
        assert!((s.meridian.radii().y - 10.0).abs() < EPS);
    }

    #[test]
    fn test_triangle_vertices() {
        let [bl, br, apex] = triangle_vertices(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        assert_eq!(bl, Point::new(0.0, 50.0));
        assert_eq!(br, Point::new(100.0, 50.0));
        assert_eq!(apex, Point::new(50.0, 0.0));
    }

    #[test]
    fn test_star_vertex_count_and_radii() {
        let center = Point::ZERO;
        let vertices = star_vertices(center, 100.0);
        assert_eq!(vertices.len(), 10);
        for (i, vertex) in vertices.iter().enumerate() {
            let radius = center.distance(*vertex);
            let expected = if i % 2 == 0 { 100.0 } else { 40.0 };
            assert!((radius - expected).abs() < 1e-9, "vertex {i}: {radius}");
        }
    }

    #[test]
    fn test_star_first_vertex_angle() {
        let vertices = star_vertices(Point::ZERO, 100.0);
        let angle = 18.0_f64.to_radians();
        assert!((vertices[0].x - angle.cos() * 100.0).abs() < EPS);
        assert!((vertices[0].y + angle.sin() * 100.0).abs() < EPS);
    }

    #[test]
    fn test_polyline_empty_is_empty_path() {
        assert!(polyline_path(&[]).elements().is_empty());
    }
}
