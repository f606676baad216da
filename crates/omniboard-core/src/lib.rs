//! Omniboard Core Library
//!
//! Platform-agnostic drawing model for the Omniboard whiteboard: the
//! element log, undo/redo history and the gesture state machine.

pub mod element;
pub mod geometry;
pub mod history;
pub mod session;

pub use element::{Element, ElementId, Rgba, TemplateImage, Tool};
pub use history::History;
pub use session::{Gesture, Session};
