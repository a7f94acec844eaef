//! View handles and the resolvers that look them up.
//!
//! The platform view system owns the native view: it assigns a handle when
//! the view mounts and invalidates it on unmount. The bridge never keeps a
//! handle across calls. Every command asks a [`ViewHandleResolver`] again, so
//! a view that went away between two calls is noticed on the second one.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Opaque identifier of one live native view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewHandle(i64);

impl ViewHandle {
	/// Wraps the tag the platform assigned to a mounted view.
	pub const fn new(tag: i64) -> Self {
		Self(tag)
	}

	/// Returns the platform tag.
	pub const fn tag(self) -> i64 {
		self.0
	}
}

impl fmt::Display for ViewHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view#{}", self.0)
	}
}

/// Looks up the handle of the currently mounted view.
///
/// Must be callable at any time, before mount and after unmount included.
/// `None` is a normal answer, not a failure, and resolving has no side
/// effects.
pub trait ViewHandleResolver: Send + Sync {
	/// Returns the live handle, or `None` when no view is mounted.
	fn resolve(&self) -> Option<ViewHandle>;
}

/// Shared mount slot for a single document view.
///
/// Clones share the same slot, so the component that receives mount and
/// unmount notifications and the dispatcher that resolves handles can each
/// hold their own copy.
#[derive(Debug, Clone, Default)]
pub struct ViewSlot {
	current: Arc<RwLock<Option<ViewHandle>>>,
}

impl ViewSlot {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a slot that already holds `handle`.
	pub fn mounted(handle: ViewHandle) -> Self {
		Self {
			current: Arc::new(RwLock::new(Some(handle))),
		}
	}

	/// Records a newly mounted view, returning the handle it replaced.
	pub fn mount(&self, handle: ViewHandle) -> Option<ViewHandle> {
		let previous = self.current.write().replace(handle);
		tracing::debug!(%handle, ?previous, "document view mounted");
		previous
	}

	/// Clears the slot, returning the handle that was mounted.
	pub fn unmount(&self) -> Option<ViewHandle> {
		let previous = self.current.write().take();
		if let Some(handle) = previous {
			tracing::debug!(%handle, "document view unmounted");
		}
		previous
	}

	/// Whether a view is currently mounted.
	pub fn is_mounted(&self) -> bool {
		self.current.read().is_some()
	}
}

impl ViewHandleResolver for ViewSlot {
	fn resolve(&self) -> Option<ViewHandle> {
		*self.current.read()
	}
}

/// Adapts a closure into a [`ViewHandleResolver`].
pub struct FnResolver<F> {
	lookup: F,
}

impl<F> FnResolver<F>
where
	F: Fn() -> Option<ViewHandle> + Send + Sync,
{
	/// Wraps `lookup`.
	pub fn new(lookup: F) -> Self {
		Self { lookup }
	}
}

impl<F> ViewHandleResolver for FnResolver<F>
where
	F: Fn() -> Option<ViewHandle> + Send + Sync,
{
	fn resolve(&self) -> Option<ViewHandle> {
		(self.lookup)()
	}
}

impl<F> fmt::Debug for FnResolver<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnResolver")
			.field("lookup", &"<function>")
			.finish()
	}
}
