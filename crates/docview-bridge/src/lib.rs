//! # docview-bridge
//!
//! Bridge between an application and an embedded native document view.
//!
//! ## Overview
//!
//! The native view and the application talk over two channels:
//!
//! - **Events** (native → application): the view reports every notification
//!   through a single callback as a flat record. [`EventDemultiplexer`]
//!   classifies it into one of twelve [`EventKind`]s by a fixed precedence,
//!   projects the kind's fields and invokes the matching typed handler. A
//!   document error nobody handles is shown as an [`Alert`].
//! - **Commands** (application → native): [`CommandDispatcher`] resolves the
//!   current [`ViewHandle`] and forwards each command to the
//!   [`NativeEngine`]. When no view is mounted a command settles with
//!   `Ok(None)` and the engine is never called.
//!
//! [`DocumentView`] wires both channels to one mount slot.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docview_bridge::{DocumentView, EventHandlers, ViewHandle, ViewerProps};
//!
//! let view = DocumentView::builder(Arc::new(engine))
//!     .props(ViewerProps::new("https://example.com/sample.pdf").read_only(true))
//!     .handlers(EventHandlers::new().on_page_changed(|change| {
//!         println!("page {} -> {}", change.previous_page_number, change.page_number);
//!     }))
//!     .build()?;
//!
//! view.mount(ViewHandle::new(7));
//! let pages = view.commands().get_page_count().await?;
//! ```
//!
//! ## Modules
//!
//! - [`commands`]: command dispatcher, engine seam and wire format
//! - [`events`]: envelopes, event kinds, handlers and the demultiplexer
//! - [`handle`]: view handles and resolvers
//! - [`config`]: bridge settings and viewer props
//! - [`view`]: the [`DocumentView`] component

pub mod callback;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod handle;
pub mod view;

pub use callback::Callback;
pub use commands::{
	AnnotationRef, Command, CommandDispatcher, CommandRequest, CommandResponse, CropBox,
	Dimensions, ExportOptions, FieldValues, NativeEngine, OutlineEntry,
};
pub use config::{AlertSettings, BridgeSettings, Platform, ViewerProps};
pub use error::{BridgeError, EngineError, EngineResult, Result};
pub use events::{
	Alert, AnnotationChange, AnnotationMenuPress, AnnotationSelection, BehaviorActivation,
	DispatchOutcome, DocumentError, EventDemultiplexer, EventEnvelope, EventHandlers, EventKind,
	ExportAnnotationCommand, FormFieldChange, LogNotifier, LongPressMenuPress, NormalizedEvent,
	Notifier, PageChange, ZoomChange,
};
pub use handle::{FnResolver, ViewHandle, ViewHandleResolver, ViewSlot};
pub use view::{DocumentView, DocumentViewBuilder};
