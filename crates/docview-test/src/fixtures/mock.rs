use std::path::PathBuf;
use std::sync::Arc;

use docview_bridge::{
	AnnotationRef, CommandDispatcher, CropBox, Dimensions, EngineResult, ExportOptions,
	FieldValues, NativeEngine, OutlineEntry, ViewHandle, ViewSlot,
};
use mockall::mock;
use rstest::*;

// ============================================================================
// mockall-based Native Engine Mock
// ============================================================================

mock! {
	/// Mock implementation of the NativeEngine trait using mockall
	///
	/// A mock without expectations panics on any call, which makes it the
	/// natural collaborator for "the engine must not be reached" tests.
	///
	/// # Direct Usage Example
	///
	/// ```rust
	/// use docview_bridge::{NativeEngine, ViewHandle};
	/// use docview_test::MockNativeEngine;
	///
	/// #[tokio::main(flavor = "current_thread")]
	/// async fn main() {
	///     let mut mock = MockNativeEngine::new();
	///
	///     mock.expect_get_page_count()
	///         .withf(|handle| handle.tag() == 7)
	///         .times(1)
	///         .returning(|_| Ok(12));
	///
	///     let pages = mock.get_page_count(ViewHandle::new(7)).await;
	///
	///     assert_eq!(pages, Ok(12));
	/// }
	/// ```
	pub NativeEngine {}

	#[async_trait::async_trait]
	impl NativeEngine for NativeEngine {
		async fn set_tool_mode(&self, handle: ViewHandle, tool_mode: String) -> EngineResult<()>;
		async fn commit_tool(&self, handle: ViewHandle) -> EngineResult<bool>;
		async fn get_page_count(&self, handle: ViewHandle) -> EngineResult<u32>;
		async fn import_annotation_command(
			&self,
			handle: ViewHandle,
			xfdf_command: String,
			initial_load: bool,
		) -> EngineResult<()>;
		async fn import_annotations(&self, handle: ViewHandle, xfdf: String) -> EngineResult<()>;
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
		async fn can_exit_viewer(&self, handle: ViewHandle) -> EngineResult<bool>;
		async fn search(&self, handle: ViewHandle, query: String) -> EngineResult<()>;
		async fn clear_search(&self, handle: ViewHandle) -> EngineResult<()>;
		async fn find_text(&self, handle: ViewHandle, query: String) -> EngineResult<bool>;
		async fn get_dimensions(&self, handle: ViewHandle) -> EngineResult<Dimensions>;
		async fn jump_to(&self, handle: ViewHandle, page_number: u32) -> EngineResult<()>;
		async fn append_school_logo(
			&self,
			handle: ViewHandle,
			image_base64: String,
			duplex: bool,
		) -> EngineResult<()>;
		async fn rotate(&self, handle: ViewHandle, counter_clockwise: bool) -> EngineResult<()>;
		async fn get_outline(&self, handle: ViewHandle) -> EngineResult<Vec<OutlineEntry>>;
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
		async fn find_text_result(&self, handle: ViewHandle, next: bool) -> EngineResult<()>;
		async fn get_thumbnail(&self, handle: ViewHandle, page_number: u32) -> EngineResult<String>;
		async fn change_background(
			&self,
			handle: ViewHandle,
			red: u8,
			green: u8,
			blue: u8,
		) -> EngineResult<()>;
		async fn set_continuous(&self, handle: ViewHandle, enabled: bool) -> EngineResult<()>;
		async fn handle_back_button(&self, handle: ViewHandle) -> EngineResult<bool>;
	}
}

/// Handle held by the [`mounted_slot`] fixture.
pub const MOUNTED_HANDLE: ViewHandle = ViewHandle::new(7);

// ============================================================================
// rstest Fixtures
// ============================================================================

/// Fixture providing an engine with no expectations.
///
/// Any call fails the test.
#[fixture]
pub fn idle_engine() -> MockNativeEngine {
	MockNativeEngine::new()
}

/// Fixture providing a slot with [`MOUNTED_HANDLE`] mounted.
#[fixture]
pub fn mounted_slot() -> ViewSlot {
	ViewSlot::mounted(MOUNTED_HANDLE)
}

/// Fixture providing a slot with no view mounted.
#[fixture]
pub fn empty_slot() -> ViewSlot {
	ViewSlot::new()
}

/// Builds a dispatcher over `engine` that resolves handles from `slot`.
pub fn dispatcher(engine: MockNativeEngine, slot: ViewSlot) -> CommandDispatcher {
	CommandDispatcher::new(Arc::new(engine), Arc::new(slot))
}
