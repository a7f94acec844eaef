//! Event channel: native view → application.
//!
//! The native view reports every notification through one callback as a
//! flat [`EventEnvelope`]. The [`EventDemultiplexer`] decides which kind it
//! is, projects the kind's fields into a [`NormalizedEvent`] and invokes the
//! matching handler from [`EventHandlers`].

mod demux;
mod envelope;
mod handlers;
mod kind;
mod normalized;
mod notifier;

pub use demux::{DispatchOutcome, EventDemultiplexer};
pub use envelope::{EventEnvelope, UNKNOWN_ERROR_MESSAGE};
pub use handlers::EventHandlers;
pub use kind::EventKind;
pub use normalized::{
	AnnotationChange, AnnotationMenuPress, AnnotationSelection, BehaviorActivation, DocumentError,
	ExportAnnotationCommand, FormFieldChange, LongPressMenuPress, NormalizedEvent, PageChange,
	ZoomChange,
};
pub use notifier::{Alert, LogNotifier, Notifier};
