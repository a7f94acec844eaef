//! Event kinds and their fixed precedence.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::envelope::EventEnvelope;

/// The kinds of notification the native view emits.
///
/// Each kind is keyed by one discriminator field on the envelope. The wire
/// format carries no explicit tag, so an envelope may satisfy more than one
/// kind; [`EventKind::PRECEDENCE`] decides which one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
	LeadingNavButtonPressed,
	DocumentLoaded,
	PageChanged,
	ZoomChanged,
	AnnotationChanged,
	AnnotationsSelected,
	FormFieldValueChanged,
	DocumentError,
	ExportAnnotationCommand,
	AnnotationMenuPress,
	LongPressMenuPress,
	BehaviorActivated,
}

impl EventKind {
	/// Kinds in the order their predicates are tested. First match wins.
	pub const PRECEDENCE: [EventKind; 12] = [
		EventKind::LeadingNavButtonPressed,
		EventKind::DocumentLoaded,
		EventKind::PageChanged,
		EventKind::ZoomChanged,
		EventKind::AnnotationChanged,
		EventKind::AnnotationsSelected,
		EventKind::FormFieldValueChanged,
		EventKind::DocumentError,
		EventKind::ExportAnnotationCommand,
		EventKind::AnnotationMenuPress,
		EventKind::LongPressMenuPress,
		EventKind::BehaviorActivated,
	];

	/// The envelope field whose presence selects this kind.
	pub const fn discriminator(self) -> &'static str {
		match self {
			EventKind::LeadingNavButtonPressed => "onLeadingNavButtonPressed",
			EventKind::DocumentLoaded => "onDocumentLoaded",
			EventKind::PageChanged => "onPageChanged",
			EventKind::ZoomChanged => "onZoomChanged",
			EventKind::AnnotationChanged => "onAnnotationChanged",
			EventKind::AnnotationsSelected => "onAnnotationsSelected",
			EventKind::FormFieldValueChanged => "onFormFieldValueChanged",
			EventKind::DocumentError => "onDocumentError",
			EventKind::ExportAnnotationCommand => "onExportAnnotationCommand",
			EventKind::AnnotationMenuPress => "onAnnotationMenuPress",
			EventKind::LongPressMenuPress => "onLongPressMenuPress",
			EventKind::BehaviorActivated => "onBehaviorActivated",
		}
	}

	/// Whether `envelope` carries this kind's discriminator.
	pub fn matches(self, envelope: &EventEnvelope) -> bool {
		envelope.is_set(self.discriminator())
	}

	/// Returns the first kind, in precedence order, that `envelope` matches.
	///
	/// Predicates after the first match are not evaluated.
	pub fn of(envelope: &EventEnvelope) -> Option<EventKind> {
		Self::PRECEDENCE
			.into_iter()
			.find(|kind| kind.matches(envelope))
	}
}

impl fmt::Display for EventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.discriminator())
	}
}
