//! Unhandled document errors are shown to the user exactly once.

use std::sync::Arc;

use docview_bridge::{
	Alert, DispatchOutcome, EventDemultiplexer, EventEnvelope, EventHandlers, EventKind,
};
use docview_test::{EventRecorder, RecordingNotifier, init_test_logging};
use parking_lot::Mutex;
use rstest::*;
use serde_json::{Value, json};

#[fixture]
fn notifier() -> Arc<RecordingNotifier> {
	init_test_logging();
	Arc::new(RecordingNotifier::new())
}

#[rstest]
fn test_unhandled_error_raises_single_alert(notifier: Arc<RecordingNotifier>) {
	// Arrange
	let demux = EventDemultiplexer::new(EventHandlers::new()).with_notifier(notifier.clone());
	let envelope = EventEnvelope::new().with("onDocumentError", json!("File not found"));

	// Act
	let outcome = demux.dispatch(&envelope);

	// Assert
	assert_eq!(outcome, DispatchOutcome::Alerted);
	assert_eq!(
		notifier.alerts(),
		vec![Alert {
			title: "Alert".to_string(),
			message: "File not found".to_string(),
			buttons: vec!["OK".to_string()],
			cancelable: true,
		}]
	);
}

#[rstest]
fn test_registered_handler_suppresses_alert(notifier: Arc<RecordingNotifier>) {
	// Arrange
	let received = Arc::new(Mutex::new(Vec::new()));
	let handlers = EventHandlers::new().on_document_error({
		let received = Arc::clone(&received);
		move |message| received.lock().push(message)
	});
	let demux = EventDemultiplexer::new(handlers).with_notifier(notifier.clone());
	let envelope = EventEnvelope::new().with("onDocumentError", json!("File not found"));

	// Act
	let outcome = demux.dispatch(&envelope);

	// Assert
	assert_eq!(outcome, DispatchOutcome::Delivered(EventKind::DocumentError));
	assert_eq!(*received.lock(), vec!["File not found".to_string()]);
	assert_eq!(notifier.count(), 0);
}

#[rstest]
#[case(json!({"onDocumentError": "Password required"}), "Password required")]
#[case(json!({"onDocumentError": true, "message": "Corrupt xref table"}), "Corrupt xref table")]
#[case(json!({"onDocumentError": true}), "Unknown error")]
#[case(json!({"onDocumentError": true, "message": ""}), "Unknown error")]
#[case(json!({"onDocumentError": true, "message": {"code": 5}}), "Unknown error")]
#[case(json!({"onDocumentError": true, "message": null}), "Unknown error")]
fn test_alert_message_source(
	notifier: Arc<RecordingNotifier>,
	#[case] raw: Value,
	#[case] expected: &str,
) {
	// Arrange
	let demux = EventDemultiplexer::new(EventHandlers::new()).with_notifier(notifier.clone());
	let envelope = EventEnvelope::from_value(raw).unwrap();

	// Act
	demux.dispatch(&envelope);

	// Assert
	let alerts = notifier.alerts();
	assert_eq!(alerts.len(), 1);
	assert_eq!(alerts[0].message, expected);
}

#[rstest]
fn test_mistyped_message_still_reaches_handler(notifier: Arc<RecordingNotifier>) {
	// Arrange
	let received = Arc::new(Mutex::new(Vec::new()));
	let handlers = EventHandlers::new().on_document_error({
		let received = Arc::clone(&received);
		move |message| received.lock().push(message)
	});
	let demux = EventDemultiplexer::new(handlers).with_notifier(notifier.clone());
	let envelope = EventEnvelope::new()
		.with("onDocumentError", json!(true))
		.with("message", json!(["not", "text"]));

	// Act
	let outcome = demux.dispatch(&envelope);

	// Assert
	assert_eq!(outcome, DispatchOutcome::Delivered(EventKind::DocumentError));
	assert_eq!(*received.lock(), vec!["Unknown error".to_string()]);
	assert_eq!(notifier.count(), 0);
}

#[rstest]
fn test_other_unhandled_kinds_never_alert(notifier: Arc<RecordingNotifier>) {
	// Arrange
	let demux = EventDemultiplexer::new(EventHandlers::new()).with_notifier(notifier.clone());
	let kinds = EventKind::PRECEDENCE
		.into_iter()
		.filter(|kind| *kind != EventKind::DocumentError);

	// Act
	let outcomes: Vec<DispatchOutcome> = kinds
		.clone()
		.map(|kind| demux.dispatch(&EventEnvelope::new().with(kind.discriminator(), json!(true))))
		.collect();

	// Assert
	let expected: Vec<DispatchOutcome> = kinds.map(DispatchOutcome::Unhandled).collect();
	assert_eq!(outcomes, expected);
	assert_eq!(notifier.count(), 0);
}

#[rstest]
fn test_error_losing_precedence_does_not_alert(notifier: Arc<RecordingNotifier>) {
	// Arrange
	let recorder = EventRecorder::new();
	let demux = EventDemultiplexer::new(recorder.handlers_for(&[EventKind::PageChanged]))
		.with_notifier(notifier.clone());
	let envelope = EventEnvelope::new()
		.with("onPageChanged", json!(true))
		.with("onDocumentError", json!("ignored"));

	// Act
	let outcome = demux.dispatch(&envelope);

	// Assert
	assert_eq!(outcome, DispatchOutcome::Delivered(EventKind::PageChanged));
	assert_eq!(notifier.count(), 0);
}

#[rstest]
fn test_each_unhandled_error_alerts_once(notifier: Arc<RecordingNotifier>) {
	// Arrange
	let demux = EventDemultiplexer::new(EventHandlers::new()).with_notifier(notifier.clone());
	let envelope = EventEnvelope::new().with("onDocumentError", json!("Network error"));

	// Act
	demux.dispatch(&envelope);
	demux.dispatch(&envelope);

	// Assert
	assert_eq!(notifier.count(), 2);
}
