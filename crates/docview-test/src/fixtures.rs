//! Fixtures, recorders and the engine mock.

mod mock;
mod recorder;

pub use mock::{MOUNTED_HANDLE, MockNativeEngine, dispatcher, empty_slot, idle_engine, mounted_slot};
pub use recorder::{EventRecorder, RecordingNotifier};
