//! # docview
//!
//! Bridge between an application and an embedded native document view.
//!
//! The native view reports what happens to the document through one event
//! stream and accepts imperative commands addressed by a view handle. This
//! crate turns that stream into typed callbacks and the commands into typed
//! async methods.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docview::prelude::*;
//!
//! let view = DocumentView::builder(Arc::new(engine))
//!     .props(ViewerProps::new("/sdcard/report.pdf"))
//!     .handlers(
//!         EventHandlers::new()
//!             .on_document_loaded(|| tracing::info!("loaded"))
//!             .on_document_error(|message| tracing::warn!(%message, "load failed")),
//!     )
//!     .build()?;
//!
//! // Called by the platform view system
//! view.mount(ViewHandle::new(tag));
//! view.on_native_event_json(raw_event)?;
//!
//! // `Ok(None)` until the view is mounted
//! if let Some(count) = view.commands().get_page_count().await? {
//!     view.commands().jump_to(count).await?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `test` - Testing utilities (mock native engine, fixtures, recorders)

pub mod commands;
pub mod events;

pub use docview_bridge::{
	BridgeError, BridgeSettings, Callback, DocumentView, DocumentViewBuilder, EngineError,
	EngineResult, Result, ViewerProps,
};
pub use docview_bridge::{FnResolver, ViewHandle, ViewHandleResolver, ViewSlot};
pub use docview_bridge::{AlertSettings, Platform};

/// Commonly used types.
pub mod prelude {
	pub use crate::commands::{CommandDispatcher, NativeEngine};
	pub use crate::events::{DispatchOutcome, EventEnvelope, EventHandlers, EventKind, Notifier};
	pub use crate::{
		BridgeError, BridgeSettings, DocumentView, EngineError, EngineResult, ViewHandle,
		ViewerProps,
	};
}
