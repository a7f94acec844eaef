//! The document view component.
//!
//! [`DocumentView`] ties the two channels to one mount slot: the platform
//! reports mount and unmount, native events come in through
//! [`DocumentView::on_native_event`], and commands go out through
//! [`DocumentView::commands`].

use std::sync::Arc;

use serde_json::Value;

use crate::commands::{CommandDispatcher, NativeEngine};
use crate::config::{BridgeSettings, ViewerProps};
use crate::error::Result;
use crate::events::{DispatchOutcome, EventDemultiplexer, EventEnvelope, EventHandlers, Notifier};
use crate::handle::{ViewHandle, ViewSlot};

/// One document view instance.
#[derive(Debug)]
pub struct DocumentView {
	slot: ViewSlot,
	props: ViewerProps,
	settings: BridgeSettings,
	commands: CommandDispatcher,
	events: EventDemultiplexer,
}

impl DocumentView {
	/// Starts building a view backed by `engine`.
	pub fn builder(engine: Arc<dyn NativeEngine>) -> DocumentViewBuilder {
		DocumentViewBuilder::new(engine)
	}

	/// Records the handle the platform assigned on mount.
	pub fn mount(&self, handle: ViewHandle) {
		if let Some(previous) = self.slot.mount(handle) {
			tracing::warn!(%previous, %handle, "document view remounted without unmount");
		}
	}

	/// Forgets the handle. Later commands settle with `Ok(None)`.
	pub fn unmount(&self) {
		self.slot.unmount();
	}

	pub fn is_mounted(&self) -> bool {
		self.slot.is_mounted()
	}

	/// The live handle, if mounted.
	pub fn handle(&self) -> Option<ViewHandle> {
		self.commands.current_handle()
	}

	/// Name the native component is registered under on this platform.
	pub fn native_component_name(&self) -> &'static str {
		self.settings.platform.native_component_name()
	}

	pub fn props(&self) -> &ViewerProps {
		&self.props
	}

	pub fn settings(&self) -> &BridgeSettings {
		&self.settings
	}

	/// Props as sent to the native view, including a `true` flag for every
	/// event kind that has a handler.
	pub fn native_props(&self) -> Result<Value> {
		let mut props = serde_json::to_value(&self.props)?;
		if let (Value::Object(props), Value::Object(flags)) =
			(&mut props, self.events.handlers().as_native_flags())
		{
			props.extend(flags);
		}
		Ok(props)
	}

	/// Entry point for the native view's event callback.
	pub fn on_native_event(&self, envelope: &EventEnvelope) -> DispatchOutcome {
		self.events.dispatch(envelope)
	}

	/// Like [`on_native_event`](Self::on_native_event), for a JSON-encoded
	/// envelope.
	pub fn on_native_event_json(&self, raw: &str) -> Result<DispatchOutcome> {
		self.events.dispatch_json(raw)
	}

	/// The command channel for this view.
	pub fn commands(&self) -> &CommandDispatcher {
		&self.commands
	}

	pub fn events(&self) -> &EventDemultiplexer {
		&self.events
	}
}

/// Builder for [`DocumentView`].
pub struct DocumentViewBuilder {
	engine: Arc<dyn NativeEngine>,
	props: ViewerProps,
	handlers: EventHandlers,
	notifier: Option<Arc<dyn Notifier>>,
	settings: BridgeSettings,
}

impl DocumentViewBuilder {
	fn new(engine: Arc<dyn NativeEngine>) -> Self {
		Self {
			engine,
			props: ViewerProps::default(),
			handlers: EventHandlers::new(),
			notifier: None,
			settings: BridgeSettings::default(),
		}
	}

	pub fn props(mut self, props: ViewerProps) -> Self {
		self.props = props;
		self
	}

	pub fn handlers(mut self, handlers: EventHandlers) -> Self {
		self.handlers = handlers;
		self
	}

	/// Where unhandled document errors are shown. Defaults to the log.
	pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
		self.notifier = Some(notifier);
		self
	}

	pub fn settings(mut self, settings: BridgeSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Validates the settings and creates an unmounted view.
	pub fn build(self) -> Result<DocumentView> {
		self.settings.validate()?;

		let slot = ViewSlot::new();
		let commands = CommandDispatcher::new(self.engine, Arc::new(slot.clone()));
		let mut events = EventDemultiplexer::new(self.handlers).with_settings(&self.settings);
		if let Some(notifier) = self.notifier {
			events = events.with_notifier(notifier);
		}

		tracing::debug!(
			platform = ?self.settings.platform,
			handlers = ?events.handlers().registered(),
			"document view built"
		);

		Ok(DocumentView {
			slot,
			props: self.props,
			settings: self.settings,
			commands,
			events,
		})
	}
}
