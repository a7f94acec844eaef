//! Routes raw envelopes to the registered handlers.

use std::fmt;
use std::sync::Arc;

use super::envelope::{EventEnvelope, UNKNOWN_ERROR_MESSAGE};
use super::handlers::EventHandlers;
use super::kind::EventKind;
use super::normalized::NormalizedEvent;
use super::notifier::{Alert, LogNotifier, Notifier};
use crate::callback::Callback;
use crate::config::{AlertSettings, BridgeSettings};
use crate::error::Result;

/// What happened to one envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
	/// The handler for this kind was invoked
	Delivered(EventKind),
	/// No handler was registered; the event was dropped
	Unhandled(EventKind),
	/// Unhandled document error, shown to the user instead
	Alerted,
	/// The envelope matched no known kind
	Ignored,
	/// The envelope matched this kind but its fields could not be projected
	Rejected(EventKind),
}

/// Demultiplexes the native view's single event stream into typed
/// callbacks.
///
/// Each envelope is routed to at most one handler, chosen by
/// [`EventKind::PRECEDENCE`]. Handlers are read-only during dispatch.
pub struct EventDemultiplexer {
	handlers: EventHandlers,
	notifier: Arc<dyn Notifier>,
	alert: AlertSettings,
	unknown_error_message: String,
}

impl EventDemultiplexer {
	/// Creates a demultiplexer that logs unhandled document errors.
	pub fn new(handlers: EventHandlers) -> Self {
		Self {
			handlers,
			notifier: Arc::new(LogNotifier),
			alert: AlertSettings::default(),
			unknown_error_message: UNKNOWN_ERROR_MESSAGE.to_string(),
		}
	}

	/// Sets the notifier used for unhandled document errors.
	pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
		self.notifier = notifier;
		self
	}

	/// Applies alert wording from `settings`.
	pub fn with_settings(mut self, settings: &BridgeSettings) -> Self {
		self.alert = settings.alert.clone();
		self.unknown_error_message = settings.unknown_error_message.clone();
		self
	}

	/// The registered handlers.
	pub fn handlers(&self) -> &EventHandlers {
		&self.handlers
	}

	/// Routes one envelope.
	///
	/// Unknown envelopes are ignored so newer native versions can add event
	/// kinds without breaking older applications.
	pub fn dispatch(&self, envelope: &EventEnvelope) -> DispatchOutcome {
		let Some(kind) = envelope.kind() else {
			tracing::debug!(fields = envelope.len(), "ignoring unrecognized event envelope");
			return DispatchOutcome::Ignored;
		};

		match envelope.decode_as(kind) {
			Ok(event) => self.dispatch_event(event),
			Err(error) => {
				tracing::warn!(%kind, %error, "dropping malformed event envelope");
				DispatchOutcome::Rejected(kind)
			}
		}
	}

	/// Parses a raw JSON envelope and routes it.
	pub fn dispatch_json(&self, raw: &str) -> Result<DispatchOutcome> {
		let envelope = EventEnvelope::from_json(raw)?;
		Ok(self.dispatch(&envelope))
	}

	/// Routes an already decoded event.
	pub fn dispatch_event(&self, event: NormalizedEvent) -> DispatchOutcome {
		let kind = event.kind();
		let handlers = &self.handlers;

		let delivered = match event {
			NormalizedEvent::LeadingNavButtonPressed => {
				deliver(&handlers.leading_nav_button_pressed, ())
			}
			NormalizedEvent::DocumentLoaded => deliver(&handlers.document_loaded, ()),
			NormalizedEvent::PageChanged(change) => deliver(&handlers.page_changed, change),
			NormalizedEvent::ZoomChanged(change) => deliver(&handlers.zoom_changed, change),
			NormalizedEvent::AnnotationChanged(change) => {
				deliver(&handlers.annotation_changed, change)
			}
			NormalizedEvent::AnnotationsSelected(selection) => {
				deliver(&handlers.annotations_selected, selection)
			}
			NormalizedEvent::FormFieldValueChanged(change) => {
				deliver(&handlers.form_field_value_changed, change)
			}
			NormalizedEvent::DocumentError(error) => {
				let message = error
					.message
					.unwrap_or_else(|| self.unknown_error_message.clone());
				if handlers.document_error.is_none() {
					self.notifier
						.alert(&Alert::document_error(&self.alert, message));
					tracing::debug!(%kind, "unhandled document error shown as alert");
					return DispatchOutcome::Alerted;
				}
				deliver(&handlers.document_error, message)
			}
			NormalizedEvent::ExportAnnotationCommand(command) => {
				deliver(&handlers.export_annotation_command, command)
			}
			NormalizedEvent::AnnotationMenuPress(press) => {
				deliver(&handlers.annotation_menu_press, press)
			}
			NormalizedEvent::LongPressMenuPress(press) => {
				deliver(&handlers.long_press_menu_press, press)
			}
			NormalizedEvent::BehaviorActivated(activation) => {
				deliver(&handlers.behavior_activated, activation)
			}
		};

		if delivered {
			tracing::debug!(%kind, "event delivered");
			DispatchOutcome::Delivered(kind)
		} else {
			tracing::debug!(%kind, "no handler registered, event dropped");
			DispatchOutcome::Unhandled(kind)
		}
	}
}

impl fmt::Debug for EventDemultiplexer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventDemultiplexer")
			.field("handlers", &self.handlers)
			.field("alert", &self.alert)
			.finish_non_exhaustive()
	}
}

fn deliver<T>(handler: &Option<Callback<T>>, payload: T) -> bool {
	match handler {
		Some(handler) => {
			handler.call(payload);
			true
		}
		None => false,
	}
}
