//! Callback wrapper used for event handlers.
//!
//! ## Example
//!
//! ```
//! use docview_bridge::Callback;
//!
//! let on_zoom = Callback::new(|zoom: f64| {
//!     assert!(zoom > 0.0);
//! });
//!
//! on_zoom.call(1.5);
//! ```

use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe callback.
///
/// `Callback` wraps a function in an `Arc`, making it cheap to clone into
/// every place that needs to invoke the same handler.
///
/// ## Type Parameters
///
/// - `Args`: The argument the callback receives
/// - `Ret`: The return type of the callback (defaults to `()`)
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
