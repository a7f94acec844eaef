//! Commands module.
//!
//! Imperative commands sent to the mounted native view.
//!
//! # Examples
//!
//! ```rust,ignore
//! use docview::commands::{Command, CommandRequest};
//!
//! let request = CommandRequest::new(Command::JumpTo { page_number: 3 }).with_request_id("1");
//! let response = dispatcher.handle(request).await;
//! ```

pub use docview_bridge::commands::*;
