//! JSON wire format for commands sent over a message channel.
//!
//! A request names the command in its `command` field and carries the
//! arguments next to it:
//!
//! ```json
//! {"command": "jumpTo", "pageNumber": 3, "requestId": "17"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::engine::{AnnotationRef, ExportOptions, FieldValues};
use crate::error::EngineError;

/// One imperative command with its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
	SetToolMode {
		tool_mode: String,
	},
	CommitTool,
	GetPageCount,
	ImportAnnotationCommand {
		xfdf_command: String,
		#[serde(default)]
		initial_load: bool,
	},
	ImportAnnotations {
		xfdf: String,
	},
	ExportAnnotations {
		#[serde(default)]
		options: ExportOptions,
	},
	FlattenAnnotations {
		#[serde(default)]
		forms_only: bool,
	},
	DeleteAnnotations {
		annotations: Vec<AnnotationRef>,
	},
	SaveDocument,
	SetFlagForFields {
		field_names: Vec<String>,
		flag: i32,
		value: bool,
	},
	SetValueForFields {
		values: FieldValues,
	},
	CanExitViewer,
	Search {
		query: String,
	},
	ClearSearch,
	FindText {
		query: String,
	},
	GetDimensions,
	JumpTo {
		page_number: u32,
	},
	AppendSchoolLogo {
		image_base64: String,
		#[serde(default)]
		duplex: bool,
	},
	Rotate {
		#[serde(default)]
		counter_clockwise: bool,
	},
	GetOutline,
	AddBookmark,
	GetDocumentPath,
	GetZoom,
	CurrentPage,
	SetCurrentPage {
		page_number: u32,
	},
	GetPageCropBox {
		page_number: u32,
	},
	SelectAnnotation {
		annotation_id: String,
		page_number: u32,
	},
	CancelFindText,
	FindTextResult {
		next: bool,
	},
	GetThumbnail {
		page_number: u32,
	},
	ChangeBackground {
		red: u8,
		green: u8,
		blue: u8,
	},
	SetContinuous {
		enabled: bool,
	},
	HandleBackButton,
}

impl Command {
	/// The command's wire name.
	pub fn name(&self) -> &'static str {
		match self {
			Self::SetToolMode { .. } => "setToolMode",
			Self::CommitTool => "commitTool",
			Self::GetPageCount => "getPageCount",
			Self::ImportAnnotationCommand { .. } => "importAnnotationCommand",
			Self::ImportAnnotations { .. } => "importAnnotations",
			Self::ExportAnnotations { .. } => "exportAnnotations",
			Self::FlattenAnnotations { .. } => "flattenAnnotations",
			Self::DeleteAnnotations { .. } => "deleteAnnotations",
			Self::SaveDocument => "saveDocument",
			Self::SetFlagForFields { .. } => "setFlagForFields",
			Self::SetValueForFields { .. } => "setValueForFields",
			Self::CanExitViewer => "canExitViewer",
			Self::Search { .. } => "search",
			Self::ClearSearch => "clearSearch",
			Self::FindText { .. } => "findText",
			Self::GetDimensions => "getDimensions",
			Self::JumpTo { .. } => "jumpTo",
			Self::AppendSchoolLogo { .. } => "appendSchoolLogo",
			Self::Rotate { .. } => "rotate",
			Self::GetOutline => "getOutline",
			Self::AddBookmark => "addBookmark",
			Self::GetDocumentPath => "getDocumentPath",
			Self::GetZoom => "getZoom",
			Self::CurrentPage => "currentPage",
			Self::SetCurrentPage { .. } => "setCurrentPage",
			Self::GetPageCropBox { .. } => "getPageCropBox",
			Self::SelectAnnotation { .. } => "selectAnnotation",
			Self::CancelFindText => "cancelFindText",
			Self::FindTextResult { .. } => "findTextResult",
			Self::GetThumbnail { .. } => "getThumbnail",
			Self::ChangeBackground { .. } => "changeBackground",
			Self::SetContinuous { .. } => "setContinuous",
			Self::HandleBackButton => "handleBackButton",
		}
	}
}

/// A command plus the id used to correlate its response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
	#[serde(flatten)]
	pub command: Command,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub request_id: Option<String>,
}

impl CommandRequest {
	pub fn new(command: Command) -> Self {
		Self {
			command,
			request_id: None,
		}
	}

	pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
		self.request_id = Some(id.into());
		self
	}
}

impl From<Command> for CommandRequest {
	fn from(command: Command) -> Self {
		Self::new(command)
	}
}

/// The answer to a [`CommandRequest`].
///
/// A request that reached no mounted view succeeds without `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	/// Engine-defined error code, when the engine supplied one
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_code: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub request_id: Option<String>,
}

impl CommandResponse {
	/// Creates a successful response carrying the engine's result.
	pub fn success(data: Value) -> Self {
		Self {
			success: true,
			data: Some(data),
			error: None,
			error_code: None,
			request_id: None,
		}
	}

	/// Creates a successful response without data.
	pub fn ok() -> Self {
		Self {
			success: true,
			data: None,
			error: None,
			error_code: None,
			request_id: None,
		}
	}

	/// Creates a failed response from an engine rejection.
	pub fn error(error: EngineError) -> Self {
		Self {
			success: false,
			data: None,
			error: Some(error.message),
			error_code: error.code,
			request_id: None,
		}
	}

	/// Creates a failed response for a request that could not be parsed.
	pub fn rejected(message: impl Into<String>) -> Self {
		Self {
			success: false,
			data: None,
			error: Some(message.into()),
			error_code: None,
			request_id: None,
		}
	}

	pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
		self.request_id = Some(id.into());
		self
	}
}
