//! Error types for docview-bridge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::EventKind;

/// Errors raised by the bridge itself.
///
/// Commands never produce a `BridgeError`: the only way a command fails is
/// the native engine rejecting it, which surfaces as [`EngineError`].
#[derive(Debug, Error)]
pub enum BridgeError {
	/// The raw event record was not a JSON object
	#[error("Invalid event envelope: {0}")]
	InvalidEnvelope(String),

	/// A kind-specific field had the wrong JSON type
	#[error("Malformed {kind} payload: {source}")]
	Payload {
		kind: EventKind,
		#[source]
		source: serde_json::Error,
	},

	/// A command request could not be parsed
	#[error("Invalid command request: {0}")]
	InvalidCommand(#[source] serde_json::Error),

	/// Configuration error
	#[error("Configuration error: {0}")]
	Config(String),

	/// TOML parse error
	#[error("Failed to parse settings: {0}")]
	Toml(#[from] toml::de::Error),

	/// Settings file could not be read
	#[error("Failed to read settings file: {path}")]
	SettingsRead {
		path: String,
		#[source]
		source: std::io::Error,
	},

	/// Serialization error
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// A rejection reported by the native engine.
///
/// The dispatcher hands this back to the caller exactly as the engine
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct EngineError {
	/// Engine-specific error code, if the engine supplied one
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,

	/// Human-readable failure description
	pub message: String,
}

impl EngineError {
	/// Creates an engine error without a code.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			code: None,
			message: message.into(),
		}
	}

	/// Attaches an engine-specific error code.
	pub fn with_code(mut self, code: impl Into<String>) -> Self {
		self.code = Some(code.into());
		self
	}
}

/// Result type alias for native engine calls.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_engine_error_displays_message_only() {
		// Arrange
		let error = EngineError::new("document is locked").with_code("E_LOCKED");

		// Act
		let rendered = error.to_string();

		// Assert
		assert_eq!(rendered, "document is locked");
		assert_eq!(error.code.as_deref(), Some("E_LOCKED"));
	}

	#[rstest]
	fn test_engine_error_omits_missing_code_when_serialized() {
		// Arrange
		let error = EngineError::new("no such page");

		// Act
		let json = serde_json::to_value(&error).unwrap();

		// Assert
		assert_eq!(json, serde_json::json!({"message": "no such page"}));
	}

	#[rstest]
	fn test_payload_error_names_event_kind() {
		// Arrange
		let source = serde_json::from_str::<u32>("\"three\"").unwrap_err();

		// Act
		let error = BridgeError::Payload {
			kind: EventKind::PageChanged,
			source,
		};

		// Assert
		assert!(error.to_string().starts_with("Malformed onPageChanged payload"));
	}
}
