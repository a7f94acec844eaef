//! Command forwarding contract: resolve, short-circuit or forward verbatim.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use docview_bridge::{
	AnnotationRef, CommandDispatcher, CropBox, Dimensions, EngineError, ExportOptions,
	FieldValues, FnResolver, ViewHandle, ViewSlot,
};
use docview_test::{
	MOUNTED_HANDLE, MockNativeEngine, dispatcher, empty_slot, idle_engine, init_test_logging,
	mounted_slot,
};
use mockall::predicate::eq;
use rstest::*;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn test_no_view_settles_empty_without_engine_call(
	idle_engine: MockNativeEngine,
	empty_slot: ViewSlot,
) {
	// Arrange
	init_test_logging();
	let dispatcher = dispatcher(idle_engine, empty_slot);

	// Act + Assert
	assert_eq!(dispatcher.set_tool_mode("AnnotationCreateSticky").await, Ok(None));
	assert_eq!(dispatcher.commit_tool().await, Ok(None));
	assert_eq!(dispatcher.get_page_count().await, Ok(None));
	assert_eq!(dispatcher.import_annotation_command("<xfdf/>", true).await, Ok(None));
	assert_eq!(dispatcher.import_annotations("<xfdf/>").await, Ok(None));
	assert_eq!(
		dispatcher.export_annotations(ExportOptions::default()).await,
		Ok(None)
	);
	assert_eq!(dispatcher.flatten_annotations(false).await, Ok(None));
	assert_eq!(dispatcher.delete_annotations(Vec::new()).await, Ok(None));
	assert_eq!(dispatcher.save_document().await, Ok(None));
	assert_eq!(
		dispatcher
			.set_flag_for_fields(vec!["name".to_string()], 0, true)
			.await,
		Ok(None)
	);
	assert_eq!(
		dispatcher.set_value_for_fields(FieldValues::new()).await,
		Ok(None)
	);
	assert_eq!(dispatcher.can_exit_viewer().await, Ok(None));
	assert_eq!(dispatcher.search("invoice").await, Ok(None));
	assert_eq!(dispatcher.clear_search().await, Ok(None));
	assert_eq!(dispatcher.find_text("invoice").await, Ok(None));
	assert_eq!(dispatcher.get_dimensions().await, Ok(None));
	assert_eq!(dispatcher.jump_to(3).await, Ok(None));
	assert_eq!(dispatcher.append_school_logo("aGVsbG8=", false).await, Ok(None));
	assert_eq!(dispatcher.rotate(true).await, Ok(None));
	assert_eq!(dispatcher.get_outline().await, Ok(None));
	assert_eq!(dispatcher.add_bookmark().await, Ok(None));
	assert_eq!(dispatcher.get_document_path().await, Ok(None));
	assert_eq!(dispatcher.get_zoom().await, Ok(None));
	assert_eq!(dispatcher.current_page().await, Ok(None));
	assert_eq!(dispatcher.set_current_page(2).await, Ok(None));
	assert_eq!(dispatcher.get_page_crop_box(1).await, Ok(None));
	assert_eq!(dispatcher.select_annotation("a-1", 1).await, Ok(None));
	assert_eq!(dispatcher.cancel_find_text().await, Ok(None));
	assert_eq!(dispatcher.find_text_result(true).await, Ok(None));
	assert_eq!(dispatcher.get_thumbnail(1).await, Ok(None));
	assert_eq!(dispatcher.change_background(0, 0, 0).await, Ok(None));
	assert_eq!(dispatcher.set_continuous(true).await, Ok(None));
	assert_eq!(dispatcher.handle_back_button().await, Ok(None));
}

#[rstest]
#[tokio::test]
async fn test_set_tool_mode_reaches_engine_with_handle(mounted_slot: ViewSlot) {
	// Arrange
	let mut engine = MockNativeEngine::new();
	engine
		.expect_set_tool_mode()
		.with(eq(ViewHandle::new(7)), eq("AnnotationCreateSticky".to_string()))
		.times(1)
		.returning(|_, _| Ok(()));
	let dispatcher = dispatcher(engine, mounted_slot);

	// Act
	let result = dispatcher.set_tool_mode("AnnotationCreateSticky").await;

	// Assert
	assert_eq!(result, Ok(Some(())));
}

#[rstest]
#[tokio::test]
async fn test_engine_result_passes_through(mounted_slot: ViewSlot) {
	// Arrange
	let mut engine = MockNativeEngine::new();
	engine
		.expect_get_page_count()
		.with(eq(MOUNTED_HANDLE))
		.times(1)
		.returning(|_| Ok(12));
	engine
		.expect_get_dimensions()
		.times(1)
		.returning(|_| {
			Ok(Dimensions {
				width: 612.0,
				height: 792.0,
			})
		});
	engine
		.expect_save_document()
		.times(1)
		.returning(|_| Ok(PathBuf::from("/tmp/sample.pdf")));
	let dispatcher = dispatcher(engine, mounted_slot);

	// Act
	let pages = dispatcher.get_page_count().await;
	let dimensions = dispatcher.get_dimensions().await;
	let saved = dispatcher.save_document().await;

	// Assert
	assert_eq!(pages, Ok(Some(12)));
	assert_eq!(
		dimensions,
		Ok(Some(Dimensions {
			width: 612.0,
			height: 792.0,
		}))
	);
	assert_eq!(saved, Ok(Some(PathBuf::from("/tmp/sample.pdf"))));
}

#[rstest]
#[tokio::test]
async fn test_engine_rejection_passes_through_verbatim(mounted_slot: ViewSlot) {
	// Arrange
	let rejection = EngineError::new("document is read-only").with_code("E_READ_ONLY");
	let mut engine = MockNativeEngine::new();
	engine.expect_flatten_annotations().times(1).returning({
		let rejection = rejection.clone();
		move |_, _| Err(rejection.clone())
	});
	let dispatcher = dispatcher(engine, mounted_slot);

	// Act
	let result = dispatcher.flatten_annotations(true).await;

	// Assert
	assert_eq!(result, Err(rejection));
}

#[rstest]
#[tokio::test]
async fn test_arguments_are_forwarded_in_order(mounted_slot: ViewSlot) {
	// Arrange
	let mut engine = MockNativeEngine::new();
	engine
		.expect_set_flag_for_fields()
		.withf(|handle, names, flag, value| {
			*handle == MOUNTED_HANDLE
				&& names == &vec!["first".to_string(), "second".to_string()]
				&& *flag == 2
				&& *value
		})
		.times(1)
		.returning(|_, _, _, _| Ok(()));
	engine
		.expect_import_annotation_command()
		.withf(|_, xfdf, initial_load| xfdf == "<add/>" && !*initial_load)
		.times(1)
		.returning(|_, _, _| Ok(()));
	engine
		.expect_change_background()
		.with(eq(MOUNTED_HANDLE), eq(10u8), eq(20u8), eq(30u8))
		.times(1)
		.returning(|_, _, _, _| Ok(()));
	engine
		.expect_delete_annotations()
		.withf(|_, annotations| annotations == &vec![AnnotationRef::new("a-1", 4)])
		.times(1)
		.returning(|_, _| Ok(()));
	let dispatcher = dispatcher(engine, mounted_slot);

	// Act
	let flagged = dispatcher
		.set_flag_for_fields(vec!["first".to_string(), "second".to_string()], 2, true)
		.await;
	let imported = dispatcher.import_annotation_command("<add/>", false).await;
	let background = dispatcher.change_background(10, 20, 30).await;
	let deleted = dispatcher
		.delete_annotations(vec![AnnotationRef::new("a-1", 4)])
		.await;

	// Assert
	assert_eq!(flagged, Ok(Some(())));
	assert_eq!(imported, Ok(Some(())));
	assert_eq!(background, Ok(Some(())));
	assert_eq!(deleted, Ok(Some(())));
}

#[rstest]
#[tokio::test]
async fn test_set_value_for_fields_forwards_the_map(mounted_slot: ViewSlot) {
	// Arrange
	let mut values = FieldValues::new();
	values.insert("name".to_string(), json!("Ada"));
	values.insert("subscribed".to_string(), json!(true));
	let expected = values.clone();
	let mut engine = MockNativeEngine::new();
	engine
		.expect_set_value_for_fields()
		.withf(move |_, values| values == &expected)
		.times(1)
		.returning(|_, _| Ok(()));
	let dispatcher = dispatcher(engine, mounted_slot);

	// Act
	let result = dispatcher.set_value_for_fields(values).await;

	// Assert
	assert_eq!(result, Ok(Some(())));
}

#[rstest]
#[tokio::test]
async fn test_unmount_between_calls_is_noticed() {
	// Arrange
	let slot = ViewSlot::mounted(MOUNTED_HANDLE);
	let mut engine = MockNativeEngine::new();
	engine
		.expect_get_zoom()
		.times(1)
		.returning(|_| Ok(2.0));
	let dispatcher = dispatcher(engine, slot.clone());

	// Act
	let while_mounted = dispatcher.get_zoom().await;
	slot.unmount();
	let after_unmount = dispatcher.get_zoom().await;

	// Assert
	assert_eq!(while_mounted, Ok(Some(2.0)));
	assert_eq!(after_unmount, Ok(None));
}

#[rstest]
#[tokio::test]
async fn test_remount_routes_to_new_handle() {
	// Arrange
	let slot = ViewSlot::mounted(ViewHandle::new(1));
	let mut engine = MockNativeEngine::new();
	engine
		.expect_current_page()
		.with(eq(ViewHandle::new(1)))
		.times(1)
		.returning(|_| Ok(3));
	engine
		.expect_current_page()
		.with(eq(ViewHandle::new(2)))
		.times(1)
		.returning(|_| Ok(1));
	let dispatcher = dispatcher(engine, slot.clone());

	// Act
	let first = dispatcher.current_page().await;
	slot.mount(ViewHandle::new(2));
	let second = dispatcher.current_page().await;

	// Assert
	assert_eq!(first, Ok(Some(3)));
	assert_eq!(second, Ok(Some(1)));
}

#[rstest]
#[tokio::test]
async fn test_resolver_is_consulted_on_every_call(idle_engine: MockNativeEngine) {
	// Arrange
	let lookups = Arc::new(AtomicUsize::new(0));
	let resolver = FnResolver::new({
		let lookups = Arc::clone(&lookups);
		move || {
			lookups.fetch_add(1, Ordering::SeqCst);
			None
		}
	});
	let dispatcher = CommandDispatcher::new(Arc::new(idle_engine), Arc::new(resolver));

	// Act
	dispatcher.add_bookmark().await.unwrap();
	dispatcher.clear_search().await.unwrap();
	dispatcher.get_outline().await.unwrap();

	// Assert
	assert_eq!(lookups.load(Ordering::SeqCst), 3);
}

#[rstest]
#[tokio::test]
async fn test_crop_box_and_thumbnail_pass_through(mounted_slot: ViewSlot) {
	// Arrange
	let crop_box = CropBox {
		x1: 0.0,
		y1: 0.0,
		x2: 612.0,
		y2: 792.0,
		width: 612.0,
		height: 792.0,
	};
	let mut engine = MockNativeEngine::new();
	engine
		.expect_get_page_crop_box()
		.with(eq(MOUNTED_HANDLE), eq(1u32))
		.times(1)
		.returning(move |_, _| Ok(crop_box));
	engine
		.expect_get_thumbnail()
		.with(eq(MOUNTED_HANDLE), eq(5u32))
		.times(1)
		.returning(|_, _| Err(EngineError::new("page out of range")));
	let dispatcher = dispatcher(engine, mounted_slot);

	// Act
	let cropped = dispatcher.get_page_crop_box(1).await;
	let thumbnail = dispatcher.get_thumbnail(5).await;

	// Assert
	assert_eq!(cropped, Ok(Some(crop_box)));
	assert_eq!(thumbnail, Err(EngineError::new("page out of range")));
}
