//! Drawing element model.

use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements. `Uuid::nil()` is reserved for
/// live-preview elements that have not been committed yet.
pub type ElementId = Uuid;

/// Serializable paint color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Available drawing tools.
///
/// `Template` is never user-selectable; template elements enter the board
/// through the external assistant boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    Pencil,
    /// A pencil that paints in the board background color (not a true
    /// compositing erase).
    Eraser,
    Line,
    Rectangle,
    Circle,
    Triangle,
    Star,
    Template,
}

impl Tool {
    /// Tools that accumulate a point sequence while drawing.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }

    /// Tools defined by a start/end anchor pair.
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            Tool::Line | Tool::Rectangle | Tool::Circle | Tool::Triangle | Tool::Star
        )
    }
}

/// A decoded raster image anchored at a single point.
///
/// Pixel data is RGBA8 row-major; it serializes as base64 for the same
/// reason image shapes usually do (string-friendly JSON payloads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateImage {
    /// Anchor point; the image is drawn centered on it.
    pub position: Point,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// RGBA8 pixel data.
    #[serde(with = "base64_bytes")]
    pub rgba: Vec<u8>,
}

impl TemplateImage {
    /// Create a template image from raw RGBA8 pixels.
    pub fn new(position: Point, width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width as usize) * (height as usize) * 4);
        Self {
            position,
            width,
            height,
            rgba,
        }
    }
}

mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

/// One committed or in-progress drawing action.
///
/// Exactly one variant of payload is populated, selected by `tool`:
/// freehand tools carry `points`, shape tools carry both anchors, and the
/// template tool carries `template`. Elements are immutable once committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique id; `Uuid::nil()` marks an uncommitted preview element.
    pub id: ElementId,
    /// Tool variant that produced this element.
    pub tool: Tool,
    /// Stroke color (ignored by eraser and template rendering).
    pub color: Rgba,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Stroke path, in insertion order. Freehand tools only.
    pub points: Vec<Point>,
    /// First anchor of the bounding diagonal / circle center. Shape tools only.
    pub start: Option<Point>,
    /// Second anchor. Shape tools only.
    pub end: Option<Point>,
    /// Selects the pseudo-3D rendering variant for shape tools.
    pub three_d: bool,
    /// Image payload. Template tool only.
    pub template: Option<TemplateImage>,
}

impl Element {
    /// Create a committed freehand element (pencil or eraser).
    pub fn freehand(tool: Tool, color: Rgba, stroke_width: f64, points: Vec<Point>) -> Self {
        debug_assert!(tool.is_freehand());
        Self {
            id: Uuid::new_v4(),
            tool,
            color,
            stroke_width,
            points,
            start: None,
            end: None,
            three_d: false,
            template: None,
        }
    }

    /// Create a committed parametric shape element.
    pub fn shape(
        tool: Tool,
        color: Rgba,
        stroke_width: f64,
        start: Point,
        end: Point,
        three_d: bool,
    ) -> Self {
        debug_assert!(tool.is_shape());
        Self {
            id: Uuid::new_v4(),
            tool,
            color,
            stroke_width,
            points: Vec::new(),
            start: Some(start),
            end: Some(end),
            three_d,
            template: None,
        }
    }

    /// Create a committed template element from a decoded image.
    pub fn template(image: TemplateImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool: Tool::Template,
            color: Rgba::black(),
            stroke_width: 2.0,
            points: Vec::new(),
            start: None,
            end: None,
            three_d: false,
            template: Some(image),
        }
    }

    /// Mark this element as an uncommitted live preview.
    pub fn into_preview(mut self) -> Self {
        self.id = Uuid::nil();
        self
    }

    /// Whether this element carries a real (non-sentinel) id.
    pub fn is_committed(&self) -> bool {
        !self.id.is_nil()
    }
}
