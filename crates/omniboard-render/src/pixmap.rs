//! RGBA8 software raster surface.

use crate::RenderError;
use kurbo::{BezPath, PathEl, Point, Rect};
use omniboard_core::Rgba;

/// An owned RGBA8 pixel surface with deterministic drawing primitives.
///
/// Every operation is integer-pixel and free of randomness or timing, so
/// identical command sequences always produce identical buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Create a pixmap filled with a color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let mut pixmap = Self::new(width, height);
        pixmap.fill(color);
        pixmap
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Read a pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgba::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Source-over blend a color onto a pixel. Out-of-bounds is ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let dst = &mut self.data[i..i + 4];

        let sa = color.a as u32;
        if sa == 0 {
            return;
        }
        if sa == 255 {
            dst.copy_from_slice(&[color.r, color.g, color.b, 255]);
            return;
        }

        let da = dst[3] as u32;
        let inv = 255 - sa;
        let out_a = sa + da * inv / 255;
        if out_a == 0 {
            dst.copy_from_slice(&[0, 0, 0, 0]);
            return;
        }
        let blend = |s: u8, d: u8| -> u8 {
            ((s as u32 * sa + d as u32 * da * inv / 255) / out_a) as u8
        };
        let out = [
            blend(color.r, dst[0]),
            blend(color.g, dst[1]),
            blend(color.b, dst[2]),
            out_a as u8,
        ];
        dst.copy_from_slice(&out);
    }

    /// Fill every pixel whose center lies within `radius` of the disc
    /// center.
    pub fn stamp_disc(&mut self, center: Point, radius: f64, color: Rgba) {
        let r = radius.max(0.5);
        let x_min = (center.x - r).floor() as i64;
        let x_max = (center.x + r).ceil() as i64;
        let y_min = (center.y - r).floor() as i64;
        let y_max = (center.y + r).ceil() as i64;
        let r_sq = r * r;

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r_sq {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Stroke a segment with round caps by stamping discs along it.
    pub fn stroke_segment(&mut self, a: Point, b: Point, width: f64, color: Rgba) {
        let radius = (width / 2.0).max(0.5);
        let step = (radius / 2.0).clamp(0.25, 1.0);
        let steps = ((a.distance(b) / step).ceil() as usize).max(1);

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.stamp_disc(a.lerp(b, t), radius, color);
        }
    }

    /// Stroke an open polyline; consecutive disc stamps give round joins.
    pub fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba) {
        match points {
            [] => {}
            [only] => self.stamp_disc(*only, (width / 2.0).max(0.5), color),
            _ => {
                for pair in points.windows(2) {
                    self.stroke_segment(pair[0], pair[1], width, color);
                }
            }
        }
    }

    /// Stroke a Bezier path by flattening it to line segments.
    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba) {
        let mut subpath_start = Point::ZERO;
        let mut cursor = Point::ZERO;
        let mut segments: Vec<(Point, Point)> = Vec::new();

        kurbo::flatten(path.elements().iter().copied(), 0.1, |el| match el {
            PathEl::MoveTo(p) => {
                subpath_start = p;
                cursor = p;
            }
            PathEl::LineTo(p) => {
                segments.push((cursor, p));
                cursor = p;
            }
            PathEl::ClosePath => {
                segments.push((cursor, subpath_start));
                cursor = subpath_start;
            }
            // flatten() only emits moves, lines and closes
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => unreachable!(),
        });

        for (a, b) in segments {
            self.stroke_segment(a, b, width, color);
        }
    }

    /// Fill a closed path using even-odd scanline coverage.
    pub fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        let mut subpath_start = Point::ZERO;
        let mut cursor = Point::ZERO;
        let mut edges: Vec<(Point, Point)> = Vec::new();

        kurbo::flatten(path.elements().iter().copied(), 0.1, |el| match el {
            PathEl::MoveTo(p) => {
                if cursor != subpath_start {
                    edges.push((cursor, subpath_start));
                }
                subpath_start = p;
                cursor = p;
            }
            PathEl::LineTo(p) => {
                edges.push((cursor, p));
                cursor = p;
            }
            PathEl::ClosePath => {
                edges.push((cursor, subpath_start));
                cursor = subpath_start;
            }
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => unreachable!(),
        });
        if cursor != subpath_start {
            edges.push((cursor, subpath_start));
        }
        if edges.is_empty() {
            return;
        }

        let y_min = edges
            .iter()
            .flat_map(|(a, b)| [a.y, b.y])
            .fold(f64::INFINITY, f64::min)
            .floor()
            .max(0.0) as i64;
        let y_max = edges
            .iter()
            .flat_map(|(a, b)| [a.y, b.y])
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(self.height as f64) as i64;

        let mut crossings: Vec<f64> = Vec::new();
        for y in y_min..y_max {
            let sample_y = y as f64 + 0.5;
            crossings.clear();
            for (a, b) in &edges {
                let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
                // Half-open span so shared vertices count once.
                if lo.y <= sample_y && sample_y < hi.y {
                    let t = (sample_y - lo.y) / (hi.y - lo.y);
                    crossings.push(lo.x + t * (hi.x - lo.x));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let x_start = (span[0] - 0.5).ceil().max(0.0) as i64;
                let x_end = ((span[1] - 0.5).floor() as i64).min(self.width as i64 - 1);
                for x in x_start..=x_end {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Blit RGBA8 source pixels into `dest`, scaling with nearest-neighbour
    /// sampling and source-over blending.
    pub fn draw_bitmap(&mut self, rgba: &[u8], src_w: u32, src_h: u32, dest: Rect) {
        if src_w == 0 || src_h == 0 || dest.width() <= 0.0 || dest.height() <= 0.0 {
            return;
        }
        let x_start = dest.x0.floor().max(0.0) as i64;
        let x_end = (dest.x1.ceil() as i64).min(self.width as i64);
        let y_start = dest.y0.floor().max(0.0) as i64;
        let y_end = (dest.y1.ceil() as i64).min(self.height as i64);

        for y in y_start..y_end {
            let v = ((y as f64 + 0.5 - dest.y0) / dest.height() * src_h as f64).floor();
            if v < 0.0 || v >= src_h as f64 {
                continue;
            }
            for x in x_start..x_end {
                let u = ((x as f64 + 0.5 - dest.x0) / dest.width() * src_w as f64).floor();
                if u < 0.0 || u >= src_w as f64 {
                    continue;
                }
                let i = ((v as usize) * (src_w as usize) + (u as usize)) * 4;
                let color = Rgba::new(rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]);
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Source-over composite another pixmap on top of this one. Surfaces
    /// are expected to be the same size; the overlap is composited.
    pub fn composite_over(&mut self, overlay: &Pixmap) {
        let w = self.width.min(overlay.width);
        let h = self.height.min(overlay.height);
        for y in 0..h {
            for x in 0..w {
                if let Some(color) = overlay.pixel(x, y) {
                    self.blend_pixel(x as i64, y as i64, color);
                }
            }
        }
    }

    /// Encode the surface as a PNG byte blob.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.data)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_pixel() {
        let pixmap = Pixmap::filled(4, 4, Rgba::white());
        assert_eq!(pixmap.pixel(0, 0), Some(Rgba::white()));
        assert_eq!(pixmap.pixel(3, 3), Some(Rgba::white()));
        assert_eq!(pixmap.pixel(4, 0), None);
    }

    #[test]
    fn test_opaque_blend_overwrites() {
        let mut pixmap = Pixmap::filled(2, 2, Rgba::white());
        pixmap.blend_pixel(0, 0, Rgba::black());
        assert_eq!(pixmap.pixel(0, 0), Some(Rgba::black()));
        // Out of bounds is silently ignored
        pixmap.blend_pixel(-1, 0, Rgba::black());
        pixmap.blend_pixel(5, 5, Rgba::black());
    }

    #[test]
    fn test_translucent_blend_darkens() {
        let mut pixmap = Pixmap::filled(1, 1, Rgba::white());
        pixmap.blend_pixel(0, 0, Rgba::new(0, 0, 0, 26));
        let p = pixmap.pixel(0, 0).unwrap();
        assert!(p.r < 255 && p.r > 200);
        assert_eq!(p.a, 255);
    }

    #[test]
    fn test_stroke_segment_covers_endpoints() {
        let mut pixmap = Pixmap::filled(20, 20, Rgba::white());
        pixmap.stroke_segment(Point::new(2.0, 10.0), Point::new(18.0, 10.0), 3.0, Rgba::black());
        assert_eq!(pixmap.pixel(2, 10), Some(Rgba::black()));
        assert_eq!(pixmap.pixel(10, 10), Some(Rgba::black()));
        assert_eq!(pixmap.pixel(17, 10), Some(Rgba::black()));
        // Far from the stroke stays white
        assert_eq!(pixmap.pixel(10, 2), Some(Rgba::white()));
    }

    #[test]
    fn test_fill_path_even_odd() {
        let mut pixmap = Pixmap::filled(20, 20, Rgba::white());
        let mut path = BezPath::new();
        path.move_to(Point::new(5.0, 5.0));
        path.line_to(Point::new(15.0, 5.0));
        path.line_to(Point::new(15.0, 15.0));
        path.line_to(Point::new(5.0, 15.0));
        path.close_path();
        pixmap.fill_path(&path, Rgba::black());

        assert_eq!(pixmap.pixel(10, 10), Some(Rgba::black()));
        assert_eq!(pixmap.pixel(2, 10), Some(Rgba::white()));
        assert_eq!(pixmap.pixel(17, 10), Some(Rgba::white()));
    }

    #[test]
    fn test_draw_bitmap_scales_to_dest() {
        let mut pixmap = Pixmap::filled(10, 10, Rgba::white());
        // 1x1 red source scaled over a 4x4 destination
        let src = [255u8, 0, 0, 255];
        pixmap.draw_bitmap(&src, 1, 1, Rect::new(2.0, 2.0, 6.0, 6.0));
        assert_eq!(pixmap.pixel(3, 3), Some(Rgba::new(255, 0, 0, 255)));
        assert_eq!(pixmap.pixel(1, 1), Some(Rgba::white()));
        assert_eq!(pixmap.pixel(6, 6), Some(Rgba::white()));
    }

    #[test]
    fn test_composite_over_respects_alpha() {
        let mut base = Pixmap::filled(4, 4, Rgba::white());
        let mut overlay = Pixmap::new(4, 4); // transparent
        overlay.blend_pixel(1, 1, Rgba::black());
        base.composite_over(&overlay);

        assert_eq!(base.pixel(1, 1), Some(Rgba::black()));
        assert_eq!(base.pixel(0, 0), Some(Rgba::white()));
    }

    #[test]
    fn test_png_encode_roundtrip_header() {
        let pixmap = Pixmap::filled(3, 2, Rgba::white());
        let bytes = pixmap.encode_png().unwrap();
        assert!(bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }
}
