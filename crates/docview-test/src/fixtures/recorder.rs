use std::sync::Arc;

use docview_bridge::{
	Alert, DocumentError, EventHandlers, EventKind, NormalizedEvent, Notifier,
};
use parking_lot::Mutex;

/// Records every event delivered to its handlers, in delivery order.
///
/// [`EventRecorder::handlers`] registers all twelve kinds. Use
/// [`EventRecorder::handlers_for`] to leave some kinds unhandled.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
	events: Arc<Mutex<Vec<NormalizedEvent>>>,
}

impl EventRecorder {
	pub fn new() -> Self {
		Self::default()
	}

	/// A handler set with every kind registered.
	pub fn handlers(&self) -> EventHandlers {
		self.handlers_for(&EventKind::PRECEDENCE)
	}

	/// A handler set with only `kinds` registered.
	pub fn handlers_for(&self, kinds: &[EventKind]) -> EventHandlers {
		kinds
			.iter()
			.fold(EventHandlers::new(), |handlers, kind| self.register(handlers, *kind))
	}

	fn register(&self, handlers: EventHandlers, kind: EventKind) -> EventHandlers {
		let events = Arc::clone(&self.events);
		let push = move |event: NormalizedEvent| events.lock().push(event);

		match kind {
			EventKind::LeadingNavButtonPressed => handlers
				.on_leading_nav_button_pressed(move || push(NormalizedEvent::LeadingNavButtonPressed)),
			EventKind::DocumentLoaded => {
				handlers.on_document_loaded(move || push(NormalizedEvent::DocumentLoaded))
			}
			EventKind::PageChanged => {
				handlers.on_page_changed(move |change| push(NormalizedEvent::PageChanged(change)))
			}
			EventKind::ZoomChanged => {
				handlers.on_zoom_changed(move |change| push(NormalizedEvent::ZoomChanged(change)))
			}
			EventKind::AnnotationChanged => handlers.on_annotation_changed(move |change| {
				push(NormalizedEvent::AnnotationChanged(change))
			}),
			EventKind::AnnotationsSelected => handlers.on_annotations_selected(move |selection| {
				push(NormalizedEvent::AnnotationsSelected(selection))
			}),
			EventKind::FormFieldValueChanged => handlers.on_form_field_value_changed(move |change| {
				push(NormalizedEvent::FormFieldValueChanged(change))
			}),
			EventKind::DocumentError => handlers.on_document_error(move |message| {
				push(NormalizedEvent::DocumentError(DocumentError {
					message: Some(message),
				}))
			}),
			EventKind::ExportAnnotationCommand => handlers.on_export_annotation_command(
				move |command| push(NormalizedEvent::ExportAnnotationCommand(command)),
			),
			EventKind::AnnotationMenuPress => handlers.on_annotation_menu_press(move |press| {
				push(NormalizedEvent::AnnotationMenuPress(press))
			}),
			EventKind::LongPressMenuPress => handlers.on_long_press_menu_press(move |press| {
				push(NormalizedEvent::LongPressMenuPress(press))
			}),
			EventKind::BehaviorActivated => handlers.on_behavior_activated(move |activation| {
				push(NormalizedEvent::BehaviorActivated(activation))
			}),
		}
	}

	/// Snapshot of the recorded events.
	pub fn events(&self) -> Vec<NormalizedEvent> {
		self.events.lock().clone()
	}

	/// Kinds of the recorded events.
	pub fn kinds(&self) -> Vec<EventKind> {
		self.events.lock().iter().map(NormalizedEvent::kind).collect()
	}

	pub fn len(&self) -> usize {
		self.events.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.events.lock().is_empty()
	}
}

/// Notifier that keeps every alert it is asked to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
	alerts: Mutex<Vec<Alert>>,
}

impl RecordingNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn alerts(&self) -> Vec<Alert> {
		self.alerts.lock().clone()
	}

	pub fn count(&self) -> usize {
		self.alerts.lock().len()
	}
}

impl Notifier for RecordingNotifier {
	fn alert(&self, alert: &Alert) {
		self.alerts.lock().push(alert.clone());
	}
}
