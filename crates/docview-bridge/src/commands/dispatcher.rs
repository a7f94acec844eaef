//! Command dispatch against the currently mounted view.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::engine::{
	AnnotationRef, CropBox, Dimensions, ExportOptions, FieldValues, NativeEngine, OutlineEntry,
};
use super::wire::{Command, CommandRequest, CommandResponse};
use crate::error::{BridgeError, EngineError, EngineResult};
use crate::handle::{ViewHandle, ViewHandleResolver};

/// Forwards imperative commands to the native engine.
///
/// Every command follows the same contract:
///
/// 1. Resolve the current view handle.
/// 2. No view mounted: settle immediately with `Ok(None)`. The engine is not
///    called and this is not an error.
/// 3. Otherwise call the engine with the handle and the arguments in the
///    order given, and return its result unchanged as `Ok(Some(_))` or
///    `Err(_)`.
///
/// The dispatcher holds no state between calls. It does not validate,
/// queue, retry or cancel; commands issued without awaiting each other may
/// reach the engine in any order.
#[derive(Clone)]
pub struct CommandDispatcher {
	engine: Arc<dyn NativeEngine>,
	resolver: Arc<dyn ViewHandleResolver>,
}

impl CommandDispatcher {
	/// Creates a dispatcher that resolves handles through `resolver`.
	pub fn new(engine: Arc<dyn NativeEngine>, resolver: Arc<dyn ViewHandleResolver>) -> Self {
		Self { engine, resolver }
	}

	/// The handle commands would currently be sent to.
	pub fn current_handle(&self) -> Option<ViewHandle> {
		self.resolver.resolve()
	}

	async fn forward<'a, T, F, Fut>(&'a self, command: &'static str, call: F) -> EngineResult<Option<T>>
	where
		F: FnOnce(&'a dyn NativeEngine, ViewHandle) -> Fut,
		Fut: Future<Output = EngineResult<T>>,
	{
		let Some(handle) = self.resolver.resolve() else {
			tracing::debug!(command, "no document view mounted, returning empty result");
			return Ok(None);
		};

		tracing::trace!(command, %handle, "forwarding command to native engine");
		call(self.engine.as_ref(), handle).await.map(Some)
	}

	/// `setToolMode`: selects the active annotation or interaction tool.
	pub async fn set_tool_mode(&self, tool_mode: impl Into<String>) -> EngineResult<Option<()>> {
		let tool_mode = tool_mode.into();
		self.forward("setToolMode", move |engine, handle| {
			engine.set_tool_mode(handle, tool_mode)
		})
		.await
	}

	/// `commitTool`: finishes the tool in progress. `true` if something was committed.
	pub async fn commit_tool(&self) -> EngineResult<Option<bool>> {
		self.forward("commitTool", |engine, handle| engine.commit_tool(handle))
			.await
	}

	/// `getPageCount`: number of pages in the open document.
	pub async fn get_page_count(&self) -> EngineResult<Option<u32>> {
		self.forward("getPageCount", |engine, handle| engine.get_page_count(handle))
			.await
	}

	/// `importAnnotationCommand`: applies an XFDF command string.
	pub async fn import_annotation_command(
		&self,
		xfdf_command: impl Into<String>,
		initial_load: bool,
	) -> EngineResult<Option<()>> {
		let xfdf_command = xfdf_command.into();
		self.forward("importAnnotationCommand", move |engine, handle| {
			engine.import_annotation_command(handle, xfdf_command, initial_load)
		})
		.await
	}

	/// `importAnnotations`: merges an XFDF document into the annotations.
	pub async fn import_annotations(&self, xfdf: impl Into<String>) -> EngineResult<Option<()>> {
		let xfdf = xfdf.into();
		self.forward("importAnnotations", move |engine, handle| {
			engine.import_annotations(handle, xfdf)
		})
		.await
	}

	/// `exportAnnotations`: annotations as XFDF.
	pub async fn export_annotations(&self, options: ExportOptions) -> EngineResult<Option<String>> {
		self.forward("exportAnnotations", move |engine, handle| {
			engine.export_annotations(handle, options)
		})
		.await
	}

	/// `flattenAnnotations`: burns annotations into page content.
	pub async fn flatten_annotations(&self, forms_only: bool) -> EngineResult<Option<()>> {
		self.forward("flattenAnnotations", move |engine, handle| {
			engine.flatten_annotations(handle, forms_only)
		})
		.await
	}

	/// `deleteAnnotations`: removes the given annotations.
	pub async fn delete_annotations(
		&self,
		annotations: Vec<AnnotationRef>,
	) -> EngineResult<Option<()>> {
		self.forward("deleteAnnotations", move |engine, handle| {
			engine.delete_annotations(handle, annotations)
		})
		.await
	}

	/// `saveDocument`: writes the document and returns where it was saved.
	pub async fn save_document(&self) -> EngineResult<Option<PathBuf>> {
		self.forward("saveDocument", |engine, handle| engine.save_document(handle))
			.await
	}

	/// `setFlagForFields`: sets or clears a field flag on the named form fields.
	pub async fn set_flag_for_fields(
		&self,
		field_names: Vec<String>,
		flag: i32,
		value: bool,
	) -> EngineResult<Option<()>> {
		self.forward("setFlagForFields", move |engine, handle| {
			engine.set_flag_for_fields(handle, field_names, flag, value)
		})
		.await
	}

	/// `setValueForFields`: fills form fields by name.
	pub async fn set_value_for_fields(&self, values: FieldValues) -> EngineResult<Option<()>> {
		self.forward("setValueForFields", move |engine, handle| {
			engine.set_value_for_fields(handle, values)
		})
		.await
	}

	/// `canExitViewer`: whether the viewer may be left right now.
	pub async fn can_exit_viewer(&self) -> EngineResult<Option<bool>> {
		self.forward("canExitViewer", |engine, handle| engine.can_exit_viewer(handle))
			.await
	}

	/// `search`: searches the document for `query`.
	pub async fn search(&self, query: impl Into<String>) -> EngineResult<Option<()>> {
		let query = query.into();
		self.forward("search", move |engine, handle| engine.search(handle, query))
			.await
	}

	/// `clearSearch`: removes search highlights.
	pub async fn clear_search(&self) -> EngineResult<Option<()>> {
		self.forward("clearSearch", |engine, handle| engine.clear_search(handle))
			.await
	}

	/// `findText`: looks for `query`; `true` if it was found.
	pub async fn find_text(&self, query: impl Into<String>) -> EngineResult<Option<bool>> {
		let query = query.into();
		self.forward("findText", move |engine, handle| engine.find_text(handle, query))
			.await
	}

	/// `getDimensions`: size of the view.
	pub async fn get_dimensions(&self) -> EngineResult<Option<Dimensions>> {
		self.forward("getDimensions", |engine, handle| engine.get_dimensions(handle))
			.await
	}

	/// `jumpTo`: scrolls to a 1-based page.
	pub async fn jump_to(&self, page_number: u32) -> EngineResult<Option<()>> {
		self.forward("jumpTo", move |engine, handle| engine.jump_to(handle, page_number))
			.await
	}

	/// `appendSchoolLogo`: stamps a base64 image onto the pages.
	pub async fn append_school_logo(
		&self,
		image_base64: impl Into<String>,
		duplex: bool,
	) -> EngineResult<Option<()>> {
		let image_base64 = image_base64.into();
		self.forward("appendSchoolLogo", move |engine, handle| {
			engine.append_school_logo(handle, image_base64, duplex)
		})
		.await
	}

	/// `rotate`: rotates the pages, clockwise unless `counter_clockwise`.
	pub async fn rotate(&self, counter_clockwise: bool) -> EngineResult<Option<()>> {
		self.forward("rotate", move |engine, handle| {
			engine.rotate(handle, counter_clockwise)
		})
		.await
	}

	/// `getOutline`: the document outline.
	pub async fn get_outline(&self) -> EngineResult<Option<Vec<OutlineEntry>>> {
		self.forward("getOutline", |engine, handle| engine.get_outline(handle))
			.await
	}

	/// `addBookmark`: bookmarks the current page.
	pub async fn add_bookmark(&self) -> EngineResult<Option<()>> {
		self.forward("addBookmark", |engine, handle| engine.add_bookmark(handle))
			.await
	}

	/// `getDocumentPath`: path of the open document.
	pub async fn get_document_path(&self) -> EngineResult<Option<String>> {
		self.forward("getDocumentPath", |engine, handle| {
			engine.get_document_path(handle)
		})
		.await
	}

	/// `getZoom`: current zoom factor.
	pub async fn get_zoom(&self) -> EngineResult<Option<f64>> {
		self.forward("getZoom", |engine, handle| engine.get_zoom(handle))
			.await
	}

	/// `currentPage`: 1-based page in view.
	pub async fn current_page(&self) -> EngineResult<Option<u32>> {
		self.forward("currentPage", |engine, handle| engine.current_page(handle))
			.await
	}

	/// `setCurrentPage`: moves to a page; `true` if it changed.
	pub async fn set_current_page(&self, page_number: u32) -> EngineResult<Option<bool>> {
		self.forward("setCurrentPage", move |engine, handle| {
			engine.set_current_page(handle, page_number)
		})
		.await
	}

	/// `getPageCropBox`: crop box of a 1-based page.
	pub async fn get_page_crop_box(&self, page_number: u32) -> EngineResult<Option<CropBox>> {
		self.forward("getPageCropBox", move |engine, handle| {
			engine.get_page_crop_box(handle, page_number)
		})
		.await
	}

	/// `selectAnnotation`: selects an annotation by id on a page.
	pub async fn select_annotation(
		&self,
		annotation_id: impl Into<String>,
		page_number: u32,
	) -> EngineResult<Option<()>> {
		let annotation_id = annotation_id.into();
		self.forward("selectAnnotation", move |engine, handle| {
			engine.select_annotation(handle, annotation_id, page_number)
		})
		.await
	}

	/// `cancelFindText`: stops a running text search.
	pub async fn cancel_find_text(&self) -> EngineResult<Option<()>> {
		self.forward("cancelFindText", |engine, handle| engine.cancel_find_text(handle))
			.await
	}

	/// `findTextResult`: moves to the next or previous match.
	pub async fn find_text_result(&self, next: bool) -> EngineResult<Option<()>> {
		self.forward("findTextResult", move |engine, handle| {
			engine.find_text_result(handle, next)
		})
		.await
	}

	/// `getThumbnail`: base64 thumbnail of a page.
	pub async fn get_thumbnail(&self, page_number: u32) -> EngineResult<Option<String>> {
		self.forward("getThumbnail", move |engine, handle| {
			engine.get_thumbnail(handle, page_number)
		})
		.await
	}

	/// `changeBackground`: sets the view background color.
	pub async fn change_background(
		&self,
		red: u8,
		green: u8,
		blue: u8,
	) -> EngineResult<Option<()>> {
		self.forward("changeBackground", move |engine, handle| {
			engine.change_background(handle, red, green, blue)
		})
		.await
	}

	/// `setContinuous`: toggles continuous scrolling.
	pub async fn set_continuous(&self, enabled: bool) -> EngineResult<Option<()>> {
		self.forward("setContinuous", move |engine, handle| {
			engine.set_continuous(handle, enabled)
		})
		.await
	}

	/// `handleBackButton`: offers a back press to the viewer; `true` if consumed.
	pub async fn handle_back_button(&self) -> EngineResult<Option<bool>> {
		self.forward("handleBackButton", |engine, handle| {
			engine.handle_back_button(handle)
		})
		.await
	}

	/// Runs a [`Command`] and serializes its result.
	///
	/// `Ok(None)` still means "no view mounted"; a void command that ran
	/// yields `Ok(Some(Value::Null))`.
	/// A result that cannot be represented as JSON comes back as an error
	/// with code `E_SERIALIZE`.
	pub async fn execute(&self, command: Command) -> EngineResult<Option<Value>> {
		match command {
			Command::SetToolMode { tool_mode } => to_json(self.set_tool_mode(tool_mode).await),
			Command::CommitTool => to_json(self.commit_tool().await),
			Command::GetPageCount => to_json(self.get_page_count().await),
			Command::ImportAnnotationCommand {
				xfdf_command,
				initial_load,
			} => to_json(
				self.import_annotation_command(xfdf_command, initial_load)
					.await,
			),
			Command::ImportAnnotations { xfdf } => to_json(self.import_annotations(xfdf).await),
			Command::ExportAnnotations { options } => {
				to_json(self.export_annotations(options).await)
			}
			Command::FlattenAnnotations { forms_only } => {
				to_json(self.flatten_annotations(forms_only).await)
			}
			Command::DeleteAnnotations { annotations } => {
				to_json(self.delete_annotations(annotations).await)
			}
			Command::SaveDocument => to_json(self.save_document().await),
			Command::SetFlagForFields {
				field_names,
				flag,
				value,
			} => to_json(self.set_flag_for_fields(field_names, flag, value).await),
			Command::SetValueForFields { values } => {
				to_json(self.set_value_for_fields(values).await)
			}
			Command::CanExitViewer => to_json(self.can_exit_viewer().await),
			Command::Search { query } => to_json(self.search(query).await),
			Command::ClearSearch => to_json(self.clear_search().await),
			Command::FindText { query } => to_json(self.find_text(query).await),
			Command::GetDimensions => to_json(self.get_dimensions().await),
			Command::JumpTo { page_number } => to_json(self.jump_to(page_number).await),
			Command::AppendSchoolLogo {
				image_base64,
				duplex,
			} => to_json(self.append_school_logo(image_base64, duplex).await),
			Command::Rotate { counter_clockwise } => to_json(self.rotate(counter_clockwise).await),
			Command::GetOutline => to_json(self.get_outline().await),
			Command::AddBookmark => to_json(self.add_bookmark().await),
			Command::GetDocumentPath => to_json(self.get_document_path().await),
			Command::GetZoom => to_json(self.get_zoom().await),
			Command::CurrentPage => to_json(self.current_page().await),
			Command::SetCurrentPage { page_number } => {
				to_json(self.set_current_page(page_number).await)
			}
			Command::GetPageCropBox { page_number } => {
				to_json(self.get_page_crop_box(page_number).await)
			}
			Command::SelectAnnotation {
				annotation_id,
				page_number,
			} => to_json(self.select_annotation(annotation_id, page_number).await),
			Command::CancelFindText => to_json(self.cancel_find_text().await),
			Command::FindTextResult { next } => to_json(self.find_text_result(next).await),
			Command::GetThumbnail { page_number } => to_json(self.get_thumbnail(page_number).await),
			Command::ChangeBackground { red, green, blue } => {
				to_json(self.change_background(red, green, blue).await)
			}
			Command::SetContinuous { enabled } => to_json(self.set_continuous(enabled).await),
			Command::HandleBackButton => to_json(self.handle_back_button().await),
		}
	}

	/// Handles a command request.
	pub async fn handle(&self, request: CommandRequest) -> CommandResponse {
		let request_id = request.request_id;
		let response = match self.execute(request.command).await {
			Ok(Some(data)) => CommandResponse::success(data),
			Ok(None) => CommandResponse::ok(),
			Err(error) => CommandResponse::error(error),
		};

		match request_id {
			Some(id) => response.with_request_id(id),
			None => response,
		}
	}

	/// Parses a raw JSON command request, handles it and returns the JSON
	/// response. Always answers, even for unparseable input.
	pub async fn handle_raw(&self, raw: &str) -> String {
		let response = match serde_json::from_str::<CommandRequest>(raw) {
			Ok(request) => self.handle(request).await,
			Err(e) => {
				let error = BridgeError::InvalidCommand(e);
				tracing::warn!(%error, "rejecting command request");
				CommandResponse::rejected(error.to_string())
			}
		};

		serde_json::to_string(&response).unwrap_or_else(|_| {
			r#"{"success":false,"error":"failed to serialize response"}"#.to_string()
		})
	}
}

impl fmt::Debug for CommandDispatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandDispatcher")
			.field("handle", &self.resolver.resolve())
			.finish_non_exhaustive()
	}
}

/// Code reported when an engine result cannot be turned into JSON.
const SERIALIZE_ERROR_CODE: &str = "E_SERIALIZE";

fn to_json<T: Serialize>(result: EngineResult<Option<T>>) -> EngineResult<Option<Value>> {
	let Some(value) = result? else {
		return Ok(None);
	};

	serde_json::to_value(value).map(Some).map_err(|error| {
		tracing::warn!(%error, "engine result could not be serialized");
		EngineError::new(format!("failed to serialize engine result: {error}"))
			.with_code(SERIALIZE_ERROR_CODE)
	})
}
