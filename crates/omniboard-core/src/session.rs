//! Drawing session: paint settings, gesture state machine and history.

use crate::element::{Element, Rgba, TemplateImage, Tool};
use crate::history::History;
use kurbo::Point;

/// State of the pointer gesture machine. Two states only; a new gesture
/// cannot start while one is active.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Drawing {
        /// Anchor captured at gesture start.
        start: Point,
        /// Live pointer position.
        current: Point,
        /// Accumulated stroke path (freehand tools only).
        points: Vec<Point>,
    },
}

/// The document/session object owned by the application core.
///
/// Owns the history, the active paint settings and the gesture machine.
/// The view layer holds a reference and dispatches intents; there is no
/// ambient global state.
#[derive(Debug, Clone)]
pub struct Session {
    history: History,
    /// Active drawing tool.
    pub tool: Tool,
    /// Active stroke color.
    pub color: Rgba,
    /// Active stroke width.
    pub stroke_width: f64,
    /// Whether shape tools render their pseudo-3D variant.
    pub three_d: bool,
    gesture: Gesture,
    /// Bumped on clear; lets late async results detect a torn-down drawing.
    epoch: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            history: History::new(),
            tool: Tool::Pencil,
            color: Rgba::black(),
            stroke_width: 2.0,
            three_d: false,
            gesture: Gesture::Idle,
            epoch: 0,
        }
    }
}

impl Session {
    /// Create a session with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active tool. `Template` cannot be selected; template
    /// elements only enter through [`Session::add_template`].
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == Tool::Template {
            return;
        }
        self.tool = tool;
    }

    /// Begin a gesture at `point`. Ignored while another gesture is active.
    pub fn pointer_down(&mut self, point: Point) {
        if self.is_drawing() || self.tool == Tool::Template {
            return;
        }
        let points = if self.tool.is_freehand() {
            vec![point]
        } else {
            Vec::new()
        };
        self.gesture = Gesture::Drawing {
            start: point,
            current: point,
            points,
        };
    }

    /// Update the live gesture. Ignored while idle.
    pub fn pointer_move(&mut self, point: Point) {
        if let Gesture::Drawing {
            current, points, ..
        } = &mut self.gesture
        {
            *current = point;
            if self.tool.is_freehand() {
                points.push(point);
            }
        }
    }

    /// End the gesture and commit the resulting element, returning it.
    ///
    /// Settings (tool, color, width, 3D flag) are sampled here, at commit
    /// time. Returns `None` when idle or when the gesture is degenerate.
    pub fn pointer_up(&mut self, point: Point) -> Option<Element> {
        let Gesture::Drawing { start, points, .. } = std::mem::take(&mut self.gesture) else {
            return None;
        };

        let element = if self.tool.is_freehand() {
            if points.is_empty() {
                return None;
            }
            Element::freehand(self.tool, self.color, self.stroke_width, points)
        } else {
            Element::shape(
                self.tool,
                self.color,
                self.stroke_width,
                start,
                point,
                self.three_d,
            )
        };

        self.history.commit(element.clone());
        Some(element)
    }

    /// Pointer leaving the surface ends the gesture; the machine always
    /// returns to idle.
    pub fn pointer_leave(&mut self, point: Point) -> Option<Element> {
        self.pointer_up(point)
    }

    /// Live-preview candidate for the scratch surface, carrying the
    /// sentinel id. `None` while idle.
    pub fn preview(&self) -> Option<Element> {
        let Gesture::Drawing {
            start,
            current,
            points,
        } = &self.gesture
        else {
            return None;
        };

        let element = if self.tool.is_freehand() {
            Element::freehand(self.tool, self.color, self.stroke_width, points.clone())
        } else {
            Element::shape(
                self.tool,
                self.color,
                self.stroke_width,
                *start,
                *current,
                self.three_d,
            )
        };
        Some(element.into_preview())
    }

    /// Whether a gesture is active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }

    /// Commit a template element supplied by the external assistant.
    /// This is the only mutation the collaborator boundary accepts.
    pub fn add_template(&mut self, image: TemplateImage) -> Element {
        let element = Element::template(image);
        self.history.commit(element.clone());
        element
    }

    /// Undo the last committed element (or restore the last clear).
    pub fn undo(&mut self) {
        self.history.undo();
    }

    /// Redo the most recently undone element.
    pub fn redo(&mut self) {
        self.history.redo();
    }

    /// Clear the drawing. Cancels any active gesture and bumps the epoch
    /// so in-flight template decodes for the old drawing are dropped.
    pub fn clear(&mut self) {
        self.gesture = Gesture::Idle;
        self.history.clear();
        self.epoch += 1;
    }

    /// Current session epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The committed history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether undo would change anything.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change anything.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
