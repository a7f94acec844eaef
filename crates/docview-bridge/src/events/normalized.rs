//! Typed payloads delivered to application callbacks.
//!
//! Each struct is the fixed projection of envelope fields for one kind.
//! Missing or `null` fields take their default value; opaque document data
//! (annotations, form fields, behavior data) stays as raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::kind::EventKind;

/// `{previousPageNumber, pageNumber}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageChange {
	#[serde(deserialize_with = "null_as_default")]
	pub previous_page_number: i64,
	#[serde(deserialize_with = "null_as_default")]
	pub page_number: i64,
}

/// `{zoom}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomChange {
	#[serde(deserialize_with = "null_as_default")]
	pub zoom: f64,
}

/// `{action, annotations}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationChange {
	#[serde(deserialize_with = "null_as_default")]
	pub action: String,
	pub annotations: Value,
}

/// `{annotations}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationSelection {
	pub annotations: Value,
}

/// `{fields}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFieldChange {
	pub fields: Value,
}

/// `{message}`
///
/// `None` when the engine reported an error without any text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentError {
	pub message: Option<String>,
}

/// `{action, xfdfCommand}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportAnnotationCommand {
	#[serde(deserialize_with = "null_as_default")]
	pub action: String,
	#[serde(deserialize_with = "null_as_default")]
	pub xfdf_command: String,
}

/// `{annotationMenu, annotations}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationMenuPress {
	#[serde(deserialize_with = "null_as_default")]
	pub annotation_menu: String,
	pub annotations: Value,
}

/// `{longPressMenu, longPressText}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LongPressMenuPress {
	#[serde(deserialize_with = "null_as_default")]
	pub long_press_menu: String,
	#[serde(deserialize_with = "null_as_default")]
	pub long_press_text: String,
}

/// `{action, data}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BehaviorActivation {
	#[serde(deserialize_with = "null_as_default")]
	pub action: String,
	pub data: Value,
}

// The native side sends `null` for values it does not have.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A decoded notification, one variant per [`EventKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedEvent {
	LeadingNavButtonPressed,
	DocumentLoaded,
	PageChanged(PageChange),
	ZoomChanged(ZoomChange),
	AnnotationChanged(AnnotationChange),
	AnnotationsSelected(AnnotationSelection),
	FormFieldValueChanged(FormFieldChange),
	DocumentError(DocumentError),
	ExportAnnotationCommand(ExportAnnotationCommand),
	AnnotationMenuPress(AnnotationMenuPress),
	LongPressMenuPress(LongPressMenuPress),
	BehaviorActivated(BehaviorActivation),
}

impl NormalizedEvent {
	/// The kind this event was decoded as.
	pub fn kind(&self) -> EventKind {
		match self {
			NormalizedEvent::LeadingNavButtonPressed => EventKind::LeadingNavButtonPressed,
			NormalizedEvent::DocumentLoaded => EventKind::DocumentLoaded,
			NormalizedEvent::PageChanged(_) => EventKind::PageChanged,
			NormalizedEvent::ZoomChanged(_) => EventKind::ZoomChanged,
			NormalizedEvent::AnnotationChanged(_) => EventKind::AnnotationChanged,
			NormalizedEvent::AnnotationsSelected(_) => EventKind::AnnotationsSelected,
			NormalizedEvent::FormFieldValueChanged(_) => EventKind::FormFieldValueChanged,
			NormalizedEvent::DocumentError(_) => EventKind::DocumentError,
			NormalizedEvent::ExportAnnotationCommand(_) => EventKind::ExportAnnotationCommand,
			NormalizedEvent::AnnotationMenuPress(_) => EventKind::AnnotationMenuPress,
			NormalizedEvent::LongPressMenuPress(_) => EventKind::LongPressMenuPress,
			NormalizedEvent::BehaviorActivated(_) => EventKind::BehaviorActivated,
		}
	}
}
