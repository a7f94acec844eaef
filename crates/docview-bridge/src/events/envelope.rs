//! Raw event records as the native view sends them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::kind::EventKind;
use super::normalized::{
	AnnotationChange, AnnotationMenuPress, AnnotationSelection, BehaviorActivation,
	DocumentError, ExportAnnotationCommand, FormFieldChange, LongPressMenuPress,
	NormalizedEvent, PageChange, ZoomChange,
};
use crate::error::{BridgeError, Result};

/// Message used when a document error carries no text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// One notification from the native view: a flat, unordered record of
/// named fields.
///
/// The kind of the notification is implied by which discriminator field is
/// present, see [`EventKind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventEnvelope {
	fields: Map<String, Value>,
}

impl EventEnvelope {
	/// Creates an empty envelope.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field, builder style.
	pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
		self.fields.insert(key.into(), value);
		self
	}

	/// Sets a field, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.fields.insert(key.into(), value)
	}

	/// Returns a field by name.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	/// Whether the named field is present with a truthy value.
	///
	/// `null`, `false`, `0` and `""` count as absent.
	pub fn is_set(&self, key: &str) -> bool {
		self.fields.get(key).is_some_and(is_truthy)
	}

	/// Number of fields in the record.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the record has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Parses a raw JSON record.
	pub fn from_json(raw: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(raw)
			.map_err(|e| BridgeError::InvalidEnvelope(e.to_string()))?;
		Self::from_value(value)
	}

	/// Wraps an already parsed JSON value, which must be an object.
	pub fn from_value(value: Value) -> Result<Self> {
		match value {
			Value::Object(fields) => Ok(Self { fields }),
			other => Err(BridgeError::InvalidEnvelope(format!(
				"expected a JSON object, found {}",
				json_type_name(&other)
			))),
		}
	}

	/// The kind this envelope is routed as, if any.
	pub fn kind(&self) -> Option<EventKind> {
		EventKind::of(self)
	}

	/// Decodes the envelope into its typed event.
	///
	/// Returns `Ok(None)` for an envelope that matches no known kind. A
	/// matched kind whose projected fields have the wrong JSON type is a
	/// [`BridgeError::Payload`]. Document errors always decode.
	pub fn decode(&self) -> Result<Option<NormalizedEvent>> {
		self.kind().map(|kind| self.decode_as(kind)).transpose()
	}

	/// Projects the envelope's fields as `kind`, regardless of precedence.
	pub fn decode_as(&self, kind: EventKind) -> Result<NormalizedEvent> {
		let event = match kind {
			EventKind::LeadingNavButtonPressed => NormalizedEvent::LeadingNavButtonPressed,
			EventKind::DocumentLoaded => NormalizedEvent::DocumentLoaded,
			EventKind::PageChanged => NormalizedEvent::PageChanged(self.project::<PageChange>(kind)?),
			EventKind::ZoomChanged => NormalizedEvent::ZoomChanged(self.project::<ZoomChange>(kind)?),
			EventKind::AnnotationChanged => {
				NormalizedEvent::AnnotationChanged(self.project::<AnnotationChange>(kind)?)
			}
			EventKind::AnnotationsSelected => {
				NormalizedEvent::AnnotationsSelected(self.project::<AnnotationSelection>(kind)?)
			}
			EventKind::FormFieldValueChanged => {
				NormalizedEvent::FormFieldValueChanged(self.project::<FormFieldChange>(kind)?)
			}
			EventKind::DocumentError => NormalizedEvent::DocumentError(self.document_error()),
			EventKind::ExportAnnotationCommand => {
				NormalizedEvent::ExportAnnotationCommand(self.project::<ExportAnnotationCommand>(kind)?)
			}
			EventKind::AnnotationMenuPress => {
				NormalizedEvent::AnnotationMenuPress(self.project::<AnnotationMenuPress>(kind)?)
			}
			EventKind::LongPressMenuPress => {
				NormalizedEvent::LongPressMenuPress(self.project::<LongPressMenuPress>(kind)?)
			}
			EventKind::BehaviorActivated => {
				NormalizedEvent::BehaviorActivated(self.project::<BehaviorActivation>(kind)?)
			}
		};

		Ok(event)
	}

	fn project<T: DeserializeOwned>(&self, kind: EventKind) -> Result<T> {
		serde_json::from_value(Value::Object(self.fields.clone()))
			.map_err(|source| BridgeError::Payload { kind, source })
	}

	// The native side usually puts the message on the discriminator itself;
	// a separate `message` field is accepted as well. Anything that is not a
	// non-empty string counts as no message, so an error is never rejected.
	fn document_error(&self) -> DocumentError {
		let text = |key: &str| {
			self.fields
				.get(key)
				.and_then(Value::as_str)
				.filter(|message| !message.is_empty())
				.map(str::to_string)
		};

		DocumentError {
			message: text(EventKind::DocumentError.discriminator()).or_else(|| text("message")),
		}
	}
}

impl From<Map<String, Value>> for EventEnvelope {
	fn from(fields: Map<String, Value>) -> Self {
		Self { fields }
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), false)]
	#[case(json!(false), false)]
	#[case(json!(0), false)]
	#[case(json!(0.0), false)]
	#[case(json!(""), false)]
	#[case(json!(true), true)]
	#[case(json!(1), true)]
	#[case(json!(-2.5), true)]
	#[case(json!("boom"), true)]
	#[case(json!([]), true)]
	#[case(json!({}), true)]
	fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
		// Arrange
		let envelope = EventEnvelope::new().with("onDocumentLoaded", value);

		// Act
		let set = envelope.is_set("onDocumentLoaded");

		// Assert
		assert_eq!(set, expected);
	}

	#[rstest]
	fn test_missing_field_is_not_set() {
		assert!(!EventEnvelope::new().is_set("onZoomChanged"));
	}

	#[rstest]
	fn test_from_json_rejects_non_object() {
		// Act
		let result = EventEnvelope::from_json("[1, 2, 3]");

		// Assert
		match result {
			Err(BridgeError::InvalidEnvelope(message)) => assert!(message.contains("an array")),
			other => panic!("expected InvalidEnvelope, got {:?}", other),
		}
	}

	#[rstest]
	fn test_from_json_rejects_invalid_json() {
		// Act
		let result = EventEnvelope::from_json("{not json");

		// Assert
		assert!(matches!(result, Err(BridgeError::InvalidEnvelope(_))));
	}

	#[rstest]
	fn test_decode_page_changed_projection() {
		// Arrange
		let envelope = EventEnvelope::from_json(
			r#"{"onPageChanged": true, "previousPageNumber": 3, "pageNumber": 4, "zoom": 2.0}"#,
		)
		.unwrap();

		// Act
		let event = envelope.decode().unwrap();

		// Assert
		assert_eq!(
			event,
			Some(NormalizedEvent::PageChanged(PageChange {
				previous_page_number: 3,
				page_number: 4,
			}))
		);
	}

	#[rstest]
	fn test_decode_defaults_missing_projection_fields() {
		// Arrange
		let envelope = EventEnvelope::new().with("onAnnotationChanged", json!(true));

		// Act
		let event = envelope.decode().unwrap();

		// Assert
		assert_eq!(
			event,
			Some(NormalizedEvent::AnnotationChanged(AnnotationChange {
				action: String::new(),
				annotations: Value::Null,
			}))
		);
	}

	#[rstest]
	fn test_decode_rejects_mistyped_projection() {
		// Arrange
		let envelope = EventEnvelope::new()
			.with("onZoomChanged", json!(true))
			.with("zoom", json!("wide"));

		// Act
		let result = envelope.decode();

		// Assert
		match result {
			Err(BridgeError::Payload { kind, .. }) => assert_eq!(kind, EventKind::ZoomChanged),
			other => panic!("expected Payload error, got {:?}", other),
		}
	}

	#[rstest]
	#[case(json!({"onPageChanged": true, "previousPageNumber": null, "pageNumber": 1}))]
	#[case(json!({"onPageChanged": true, "previousPageNumber": null, "pageNumber": null}))]
	fn test_decode_null_projection_field_uses_default(#[case] raw: Value) {
		// Arrange
		let envelope = EventEnvelope::from_value(raw.clone()).unwrap();
		let expected_page = raw["pageNumber"].as_i64().unwrap_or_default();

		// Act
		let event = envelope.decode().unwrap();

		// Assert
		assert_eq!(
			event,
			Some(NormalizedEvent::PageChanged(PageChange {
				previous_page_number: 0,
				page_number: expected_page,
			}))
		);
	}

	#[rstest]
	fn test_decode_unrecognized_envelope_is_none() {
		// Arrange
		let envelope = EventEnvelope::new().with("onSomethingNew", json!(true));

		// Act
		let event = envelope.decode().unwrap();

		// Assert
		assert!(event.is_none());
	}

	#[rstest]
	#[case(json!({"onDocumentError": "file is corrupt"}), Some("file is corrupt"))]
	#[case(json!({"onDocumentError": true, "message": "bad password"}), Some("bad password"))]
	#[case(json!({"onDocumentError": "carried", "message": "ignored"}), Some("carried"))]
	#[case(json!({"onDocumentError": true}), None)]
	#[case(json!({"onDocumentError": true, "message": ""}), None)]
	#[case(json!({"onDocumentError": true, "message": {"code": 5}}), None)]
	#[case(json!({"onDocumentError": 1, "message": 404}), None)]
	#[case(json!({"onDocumentError": ["nested"], "message": "from field"}), Some("from field"))]
	fn test_decode_document_error_message(#[case] raw: Value, #[case] expected: Option<&str>) {
		// Arrange
		let envelope = EventEnvelope::from_value(raw).unwrap();

		// Act
		let event = envelope.decode().unwrap();

		// Assert
		match event {
			Some(NormalizedEvent::DocumentError(error)) => {
				assert_eq!(error.message.as_deref(), expected)
			}
			other => panic!("expected DocumentError, got {:?}", other),
		}
	}
}
