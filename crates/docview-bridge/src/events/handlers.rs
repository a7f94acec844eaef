//! Statically typed registry of application event handlers.

use std::fmt;

use serde_json::Value;

use super::kind::EventKind;
use super::normalized::{
	AnnotationChange, AnnotationMenuPress, AnnotationSelection, BehaviorActivation,
	ExportAnnotationCommand, FormFieldChange, LongPressMenuPress, PageChange, ZoomChange,
};
use crate::callback::Callback;

/// One optional handler per [`EventKind`].
///
/// An empty slot is a valid state: the event is dropped, except for
/// document errors, which fall back to a user-visible alert.
///
/// ## Example
///
/// ```
/// use docview_bridge::EventHandlers;
///
/// let handlers = EventHandlers::new()
///     .on_document_loaded(|| println!("ready"))
///     .on_page_changed(|change| println!("now on page {}", change.page_number));
/// ```
#[derive(Clone, Default)]
pub struct EventHandlers {
	pub(crate) leading_nav_button_pressed: Option<Callback<()>>,
	pub(crate) document_loaded: Option<Callback<()>>,
	pub(crate) page_changed: Option<Callback<PageChange>>,
	pub(crate) zoom_changed: Option<Callback<ZoomChange>>,
	pub(crate) annotation_changed: Option<Callback<AnnotationChange>>,
	pub(crate) annotations_selected: Option<Callback<AnnotationSelection>>,
	pub(crate) form_field_value_changed: Option<Callback<FormFieldChange>>,
	pub(crate) document_error: Option<Callback<String>>,
	pub(crate) export_annotation_command: Option<Callback<ExportAnnotationCommand>>,
	pub(crate) annotation_menu_press: Option<Callback<AnnotationMenuPress>>,
	pub(crate) long_press_menu_press: Option<Callback<LongPressMenuPress>>,
	pub(crate) behavior_activated: Option<Callback<BehaviorActivation>>,
}

impl EventHandlers {
	/// Creates a registry with no handlers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Handles presses of the leading navigation button.
	pub fn on_leading_nav_button_pressed<F>(mut self, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.leading_nav_button_pressed = Some(Callback::new(move |()| f()));
		self
	}

	/// Handles the document finishing loading.
	pub fn on_document_loaded<F>(mut self, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.document_loaded = Some(Callback::new(move |()| f()));
		self
	}

	/// Handles page changes.
	pub fn on_page_changed<F>(mut self, f: F) -> Self
	where
		F: Fn(PageChange) + Send + Sync + 'static,
	{
		self.page_changed = Some(Callback::new(f));
		self
	}

	/// Handles zoom changes.
	pub fn on_zoom_changed<F>(mut self, f: F) -> Self
	where
		F: Fn(ZoomChange) + Send + Sync + 'static,
	{
		self.zoom_changed = Some(Callback::new(f));
		self
	}

	/// Handles annotations being added, modified or removed.
	pub fn on_annotation_changed<F>(mut self, f: F) -> Self
	where
		F: Fn(AnnotationChange) + Send + Sync + 'static,
	{
		self.annotation_changed = Some(Callback::new(f));
		self
	}

	/// Handles annotation selection.
	pub fn on_annotations_selected<F>(mut self, f: F) -> Self
	where
		F: Fn(AnnotationSelection) + Send + Sync + 'static,
	{
		self.annotations_selected = Some(Callback::new(f));
		self
	}

	/// Handles form field value changes.
	pub fn on_form_field_value_changed<F>(mut self, f: F) -> Self
	where
		F: Fn(FormFieldChange) + Send + Sync + 'static,
	{
		self.form_field_value_changed = Some(Callback::new(f));
		self
	}

	/// Handles document load or processing errors.
	///
	/// Registering this suppresses the fallback alert. The handler receives
	/// the raw message.
	pub fn on_document_error<F>(mut self, f: F) -> Self
	where
		F: Fn(String) + Send + Sync + 'static,
	{
		self.document_error = Some(Callback::new(f));
		self
	}

	/// Handles annotation export commands (collaboration).
	pub fn on_export_annotation_command<F>(mut self, f: F) -> Self
	where
		F: Fn(ExportAnnotationCommand) + Send + Sync + 'static,
	{
		self.export_annotation_command = Some(Callback::new(f));
		self
	}

	/// Handles presses on overridden annotation menu items.
	pub fn on_annotation_menu_press<F>(mut self, f: F) -> Self
	where
		F: Fn(AnnotationMenuPress) + Send + Sync + 'static,
	{
		self.annotation_menu_press = Some(Callback::new(f));
		self
	}

	/// Handles presses on overridden long-press menu items.
	pub fn on_long_press_menu_press<F>(mut self, f: F) -> Self
	where
		F: Fn(LongPressMenuPress) + Send + Sync + 'static,
	{
		self.long_press_menu_press = Some(Callback::new(f));
		self
	}

	/// Handles overridden viewer behaviors.
	pub fn on_behavior_activated<F>(mut self, f: F) -> Self
	where
		F: Fn(BehaviorActivation) + Send + Sync + 'static,
	{
		self.behavior_activated = Some(Callback::new(f));
		self
	}

	/// Whether a handler is registered for `kind`.
	pub fn is_registered(&self, kind: EventKind) -> bool {
		match kind {
			EventKind::LeadingNavButtonPressed => self.leading_nav_button_pressed.is_some(),
			EventKind::DocumentLoaded => self.document_loaded.is_some(),
			EventKind::PageChanged => self.page_changed.is_some(),
			EventKind::ZoomChanged => self.zoom_changed.is_some(),
			EventKind::AnnotationChanged => self.annotation_changed.is_some(),
			EventKind::AnnotationsSelected => self.annotations_selected.is_some(),
			EventKind::FormFieldValueChanged => self.form_field_value_changed.is_some(),
			EventKind::DocumentError => self.document_error.is_some(),
			EventKind::ExportAnnotationCommand => self.export_annotation_command.is_some(),
			EventKind::AnnotationMenuPress => self.annotation_menu_press.is_some(),
			EventKind::LongPressMenuPress => self.long_press_menu_press.is_some(),
			EventKind::BehaviorActivated => self.behavior_activated.is_some(),
		}
	}

	/// Kinds that have a handler, in precedence order.
	pub fn registered(&self) -> Vec<EventKind> {
		EventKind::PRECEDENCE
			.into_iter()
			.filter(|kind| self.is_registered(*kind))
			.collect()
	}

	/// The native view only emits overridable events it was told are
	/// handled, so the registration is mirrored into the mount props.
	pub(crate) fn as_native_flags(&self) -> Value {
		let flags = self
			.registered()
			.into_iter()
			.map(|kind| (kind.discriminator().to_string(), Value::Bool(true)))
			.collect();
		Value::Object(flags)
	}
}

impl fmt::Debug for EventHandlers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventHandlers")
			.field("registered", &self.registered())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_new_registry_is_empty() {
		// Arrange & Act
		let handlers = EventHandlers::new();

		// Assert
		assert!(handlers.registered().is_empty());
		assert!(
			EventKind::PRECEDENCE
				.iter()
				.all(|kind| !handlers.is_registered(*kind))
		);
	}

	#[rstest]
	fn test_registered_follows_precedence_order() {
		// Arrange
		let handlers = EventHandlers::new()
			.on_behavior_activated(|_| {})
			.on_document_loaded(|| {})
			.on_document_error(|_| {});

		// Act
		let registered = handlers.registered();

		// Assert
		assert_eq!(
			registered,
			vec![
				EventKind::DocumentLoaded,
				EventKind::DocumentError,
				EventKind::BehaviorActivated,
			]
		);
	}

	#[rstest]
	fn test_native_flags_list_registered_discriminators() {
		// Arrange
		let handlers = EventHandlers::new().on_zoom_changed(|_| {});

		// Act
		let flags = handlers.as_native_flags();

		// Assert
		assert_eq!(flags, serde_json::json!({"onZoomChanged": true}));
	}

	#[rstest]
	fn test_debug_lists_registered_kinds() {
		// Arrange
		let handlers = EventHandlers::new().on_page_changed(|_| {});

		// Act
		let debug = format!("{:?}", handlers);

		// Assert
		assert!(debug.contains("PageChanged"));
	}
}
