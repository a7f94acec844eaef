//! The native engine seam and the values that cross it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineResult;
use crate::handle::ViewHandle;

/// Reference to one annotation on one page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRef {
	pub id: String,
	pub page_number: u32,
}

impl AnnotationRef {
	pub fn new(id: impl Into<String>, page_number: u32) -> Self {
		Self {
			id: id.into(),
			page_number,
		}
	}
}

/// Options for exporting annotations as XFDF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
	/// Restrict the export to these annotations; all when unset
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub annot_list: Option<Vec<AnnotationRef>>,
}

/// Page dimensions reported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
	pub width: f64,
	pub height: f64,
}

/// Crop box of a page, in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropBox {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub width: f64,
	pub height: f64,
}

/// One node of the document outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineEntry {
	pub title: String,
	/// Target page, when the entry points into the document
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page_number: Option<u32>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<OutlineEntry>,
}

/// Form field name to new value.
pub type FieldValues = BTreeMap<String, Value>;

/// The native document engine, addressed per view handle.
///
/// Every method acts on the view identified by `handle`. Results and
/// rejections are returned to the caller untouched by the dispatcher.
#[async_trait]
pub trait NativeEngine: Send + Sync {
	/// Selects the active annotation tool.
	async fn set_tool_mode(&self, handle: ViewHandle, tool_mode: String) -> EngineResult<()>;

	/// Commits the annotation being drawn. Returns whether there was one.
	async fn commit_tool(&self, handle: ViewHandle) -> EngineResult<bool>;

	async fn get_page_count(&self, handle: ViewHandle) -> EngineResult<u32>;

	/// Applies one XFDF command received from a collaborator.
	async fn import_annotation_command(
		&self,
		handle: ViewHandle,
		xfdf_command: String,
		initial_load: bool,
	) -> EngineResult<()>;

	async fn import_annotations(&self, handle: ViewHandle, xfdf: String) -> EngineResult<()>;

	/// Exports annotations as an XFDF string.
	async fn export_annotations(
		&self,
		handle: ViewHandle,
		options: ExportOptions,
	) -> EngineResult<String>;

	async fn flatten_annotations(&self, handle: ViewHandle, forms_only: bool) -> EngineResult<()>;

	async fn delete_annotations(
		&self,
		handle: ViewHandle,
		annotations: Vec<AnnotationRef>,
	) -> EngineResult<()>;

	/// Saves the document, returning where it was written.
	async fn save_document(&self, handle: ViewHandle) -> EngineResult<PathBuf>;

	async fn set_flag_for_fields(
		&self,
		handle: ViewHandle,
		field_names: Vec<String>,
		flag: i32,
		value: bool,
	) -> EngineResult<()>;

	async fn set_value_for_fields(
		&self,
		handle: ViewHandle,
		values: FieldValues,
	) -> EngineResult<()>;

	/// Whether the viewer can be closed without losing state.
	async fn can_exit_viewer(&self, handle: ViewHandle) -> EngineResult<bool>;

	async fn search(&self, handle: ViewHandle, query: String) -> EngineResult<()>;

	async fn clear_search(&self, handle: ViewHandle) -> EngineResult<()>;

	/// Starts an in-document find. Returns whether a match was found.
	async fn find_text(&self, handle: ViewHandle, query: String) -> EngineResult<bool>;

	async fn get_dimensions(&self, handle: ViewHandle) -> EngineResult<Dimensions>;

	async fn jump_to(&self, handle: ViewHandle, page_number: u32) -> EngineResult<()>;

	/// Stamps a base64-encoded logo on the document's pages.
	async fn append_school_logo(
		&self,
		handle: ViewHandle,
		image_base64: String,
		duplex: bool,
	) -> EngineResult<()>;

	async fn rotate(&self, handle: ViewHandle, counter_clockwise: bool) -> EngineResult<()>;

	async fn get_outline(&self, handle: ViewHandle) -> EngineResult<Vec<OutlineEntry>>;

	/// Bookmarks the current page.
	async fn add_bookmark(&self, handle: ViewHandle) -> EngineResult<()>;

	async fn get_document_path(&self, handle: ViewHandle) -> EngineResult<String>;

	async fn get_zoom(&self, handle: ViewHandle) -> EngineResult<f64>;

	async fn current_page(&self, handle: ViewHandle) -> EngineResult<u32>;

	async fn set_current_page(&self, handle: ViewHandle, page_number: u32) -> EngineResult<bool>;

	async fn get_page_crop_box(
		&self,
		handle: ViewHandle,
		page_number: u32,
	) -> EngineResult<CropBox>;

	async fn select_annotation(
		&self,
		handle: ViewHandle,
		annotation_id: String,
		page_number: u32,
	) -> EngineResult<()>;

	async fn cancel_find_text(&self, handle: ViewHandle) -> EngineResult<()>;

	/// Moves to the next (`true`) or previous find result.
	async fn find_text_result(&self, handle: ViewHandle, next: bool) -> EngineResult<()>;

	/// Renders a page thumbnail as a base64-encoded image.
	async fn get_thumbnail(&self, handle: ViewHandle, page_number: u32) -> EngineResult<String>;

	async fn change_background(
		&self,
		handle: ViewHandle,
		red: u8,
		green: u8,
		blue: u8,
	) -> EngineResult<()>;

	async fn set_continuous(&self, handle: ViewHandle, enabled: bool) -> EngineResult<()>;

	/// Lets the viewer consume a back press. Returns whether it did.
	async fn handle_back_button(&self, handle: ViewHandle) -> EngineResult<bool>;
}
