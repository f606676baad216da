//! Application glue for Omniboard: keyboard shortcuts, PNG export and the
//! external-assistant boundary. Everything here is thin; the drawing
//! engine lives in `omniboard-core` and `omniboard-render`.

pub mod assist;
pub mod export;
pub mod shortcuts;

pub use assist::{AssistBridge, TemplateRequest};
pub use export::{export_filename, export_png, ExportError};
pub use shortcuts::{edit_intent, EditIntent, Modifiers};
