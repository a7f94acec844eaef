//! Command channel: application → native view.
//!
//! [`CommandDispatcher`] exposes one async method per imperative command.
//! Each resolves the current [`ViewHandle`](crate::handle::ViewHandle) and
//! forwards to the [`NativeEngine`], or settles with `Ok(None)` when no view
//! is mounted.

mod dispatcher;
mod engine;
mod wire;

pub use dispatcher::CommandDispatcher;
pub use engine::{
	AnnotationRef, CropBox, Dimensions, ExportOptions, FieldValues, NativeEngine, OutlineEntry,
};
pub use wire::{Command, CommandRequest, CommandResponse};
