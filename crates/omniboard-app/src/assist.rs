//! External assistant boundary.
//!
//! The assistant (an AI chat panel or any other collaborator) may request
//! a read-only snapshot of the drawing at any time, and may request
//! exactly one mutation: adding a template image. The core knows nothing
//! of the assistant's protocol, prompts or transport.

use kurbo::Point;
use omniboard_core::{Session, TemplateImage};
use omniboard_render::{Board, RenderError, decode_template};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

/// A request to add a template image, carrying the encoded image bytes
/// and an optional anchor. Without an anchor the image lands at the
/// surface centre.
#[derive(Debug, Clone)]
pub struct TemplateRequest {
    pub bytes: Vec<u8>,
    pub anchor: Option<Point>,
}

/// A decode result tagged with the session epoch it was started under.
struct DecodedTemplate {
    epoch: u64,
    image: TemplateImage,
}

/// Bridge between the assistant and the session.
///
/// Decoding runs on a worker thread as a one-shot operation with no
/// cancellation path; a decode that resolves after the drawing was
/// cleared is detected by its stale epoch and discarded.
pub struct AssistBridge {
    tx: Sender<DecodedTemplate>,
    rx: Receiver<DecodedTemplate>,
}

impl Default for AssistBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistBridge {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Render the committed drawing to a PNG blob for the assistant.
    pub fn snapshot(&self, board: &Board) -> Result<Vec<u8>, RenderError> {
        board.snapshot_png()
    }

    /// Start decoding a template image off-thread. The result is applied
    /// by a later [`AssistBridge::pump`] call on the event thread.
    pub fn submit(&self, request: TemplateRequest, session: &Session, board: &Board) {
        let anchor = request.anchor.unwrap_or_else(|| {
            Point::new(board.width() as f64 / 2.0, board.height() as f64 / 2.0)
        });
        let epoch = session.epoch();
        let tx = self.tx.clone();

        thread::spawn(move || match decode_template(&request.bytes, anchor) {
            Ok(image) => {
                // The receiver may be gone during teardown; nothing to do.
                let _ = tx.send(DecodedTemplate { epoch, image });
            }
            Err(err) => log::warn!("failed to load template image: {err}"),
        });
    }

    /// Apply finished decodes to the session. Returns the number of
    /// template elements committed. Call from the event thread; this is
    /// the only place a decode mutates anything.
    pub fn pump(&self, session: &mut Session) -> usize {
        let mut committed = 0;
        for decoded in self.rx.try_iter() {
            if decoded.epoch == session.epoch() {
                session.add_template(decoded.image);
                committed += 1;
            } else {
                log::info!("discarding template image decoded for a cleared drawing");
            }
        }
        committed
    }
}
