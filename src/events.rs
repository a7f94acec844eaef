//! Events module.
//!
//! Notifications from the native view and the handlers that receive them.
//!
//! # Examples
//!
//! ```rust
//! use docview::events::{DispatchOutcome, EventDemultiplexer, EventEnvelope, EventHandlers, EventKind};
//! use serde_json::json;
//!
//! let demux = EventDemultiplexer::new(EventHandlers::new().on_document_loaded(|| {}));
//! let envelope = EventEnvelope::new().with("onDocumentLoaded", json!(true));
//!
//! assert_eq!(demux.dispatch(&envelope), DispatchOutcome::Delivered(EventKind::DocumentLoaded));
//! ```

pub use docview_bridge::events::*;
