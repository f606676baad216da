//! Persistent/scratch surface pair.

use crate::pixmap::Pixmap;
use crate::rasterizer::{BACKGROUND, render_element, replay};
use crate::RenderError;
use omniboard_core::{Element, History};

/// The explicit double-buffer pair behind the board.
///
/// The persistent surface only ever changes by full history replay, so it
/// can never diverge from the log. The scratch surface holds nothing but
/// the in-progress gesture and is cleared and redrawn on every move event,
/// which keeps intermediate frames cheap to discard.
#[derive(Debug, Clone)]
pub struct Board {
    persistent: Pixmap,
    scratch: Pixmap,
}

impl Board {
    /// Create a board with a background-filled persistent surface and a
    /// transparent scratch surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            persistent: Pixmap::filled(width, height, BACKGROUND),
            scratch: Pixmap::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.persistent.width()
    }

    pub fn height(&self) -> u32 {
        self.persistent.height()
    }

    /// Repaint the persistent surface by replaying the history in commit
    /// order. Call exactly once per history mutation.
    pub fn replay(&mut self, history: &History) {
        replay(&mut self.persistent, history);
    }

    /// Redraw the scratch surface for an in-progress candidate element:
    /// clear to transparent, then render.
    pub fn preview(&mut self, element: &Element) {
        self.scratch.fill(omniboard_core::Rgba::transparent());
        render_element(&mut self.scratch, element);
    }

    /// Clear the scratch surface (gesture finished or cancelled).
    pub fn clear_scratch(&mut self) {
        self.scratch.fill(omniboard_core::Rgba::transparent());
    }

    /// Compose the visible frame: the persistent surface with the scratch
    /// overlay on top.
    pub fn composite(&self) -> Pixmap {
        let mut frame = self.persistent.clone();
        frame.composite_over(&self.scratch);
        frame
    }

    /// Resize both surfaces and replay. Changing raster dimensions
    /// invalidates prior pixel content, so this is a full repaint, never
    /// an incremental copy.
    pub fn resize(&mut self, width: u32, height: u32, history: &History) {
        self.persistent = Pixmap::filled(width, height, BACKGROUND);
        self.scratch = Pixmap::new(width, height);
        self.replay(history);
    }

    /// The committed drawing as pixels (no preview overlay).
    pub fn persistent(&self) -> &Pixmap {
        &self.persistent
    }

    /// Read-only snapshot of the committed drawing as a PNG byte blob.
    /// Safe to call at any time; does not disturb either surface.
    pub fn snapshot_png(&self) -> Result<Vec<u8>, RenderError> {
        self.persistent.encode_png()
    }
}
