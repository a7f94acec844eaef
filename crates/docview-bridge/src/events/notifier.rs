//! User-visible fallback for unhandled document errors.

use serde::{Deserialize, Serialize};

use crate::config::AlertSettings;

/// A blocking, user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
	/// Alert title
	pub title: String,
	/// Body text (the raw error message)
	pub message: String,
	/// Button labels
	pub buttons: Vec<String>,
	/// Whether the alert can be dismissed without pressing a button
	pub cancelable: bool,
}

impl Alert {
	/// Builds the alert shown for an unhandled document error.
	pub fn document_error(settings: &AlertSettings, message: impl Into<String>) -> Self {
		Self {
			title: settings.title.clone(),
			message: message.into(),
			buttons: vec![settings.confirm_label.clone()],
			cancelable: settings.cancelable,
		}
	}
}

/// Shows alerts to the user.
///
/// Applications plug in their platform's modal dialog here.
pub trait Notifier: Send + Sync {
	/// Presents `alert`.
	fn alert(&self, alert: &Alert);
}

/// Notifier that writes alerts to the log at `error` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
	fn alert(&self, alert: &Alert) {
		tracing::error!(title = %alert.title, message = %alert.message, "document error");
	}
}
