//! # docview-test
//!
//! Testing utilities for docview.
//!
//! ## Features
//!
//! - **[`MockNativeEngine`]**: mockall mock of the native engine seam
//! - **[`EventRecorder`]**: handler set that records every delivered event
//! - **[`RecordingNotifier`]**: notifier that keeps alerts for inspection
//! - **rstest fixtures**: [`idle_engine`], [`mounted_slot`], [`empty_slot`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docview_bridge::{CommandDispatcher, EngineError};
//! use docview_test::{MockNativeEngine, mounted_slot};
//!
//! #[rstest]
//! #[tokio::test]
//! async fn test_rejection_passes_through(mounted_slot: ViewSlot) {
//!     let mut engine = MockNativeEngine::new();
//!     engine
//!         .expect_save_document()
//!         .times(1)
//!         .returning(|_| Err(EngineError::new("read-only")));
//!
//!     let dispatcher = CommandDispatcher::new(Arc::new(engine), Arc::new(mounted_slot));
//!     let result = dispatcher.save_document().await;
//!
//!     assert_eq!(result, Err(EngineError::new("read-only")));
//! }
//! ```

pub mod fixtures;
pub mod logging;

pub use fixtures::{
	EventRecorder, MOUNTED_HANDLE, MockNativeEngine, RecordingNotifier, dispatcher, empty_slot,
	idle_engine, mounted_slot,
};
pub use logging::init_test_logging;
