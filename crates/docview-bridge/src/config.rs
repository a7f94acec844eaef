//! Bridge settings and the props handed to the native view.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};
use crate::events::UNKNOWN_ERROR_MESSAGE;

/// Platform the native view is registered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	/// iOS platform
	Ios,
	/// Android platform
	Android,
}

impl Platform {
	/// The platform this binary was built for. Anything other than iOS is
	/// treated as Android.
	pub fn current() -> Self {
		if cfg!(target_os = "ios") {
			Platform::Ios
		} else {
			Platform::Android
		}
	}

	/// Registered name of the native view component.
	pub const fn native_component_name(self) -> &'static str {
		match self {
			Platform::Ios => "RNTPTDocumentView",
			Platform::Android => "RCTDocumentView",
		}
	}
}

impl Default for Platform {
	fn default() -> Self {
		Self::current()
	}
}

/// Wording of the fallback alert for unhandled document errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
	/// Alert title
	pub title: String,
	/// Label of the single confirmation button
	pub confirm_label: String,
	/// Whether the alert can be dismissed by tapping outside it
	pub cancelable: bool,
}

impl Default for AlertSettings {
	fn default() -> Self {
		Self {
			title: String::from("Alert"),
			confirm_label: String::from("OK"),
			cancelable: true,
		}
	}
}

/// Bridge-wide settings.
///
/// ## Example
///
/// ```
/// use docview_bridge::{BridgeSettings, Platform};
///
/// let settings = BridgeSettings::from_toml_str(r#"
/// platform = "ios"
///
/// [alert]
/// title = "Viewer"
/// "#).unwrap();
///
/// assert_eq!(settings.platform, Platform::Ios);
/// assert_eq!(settings.alert.confirm_label, "OK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
	/// Target platform
	pub platform: Platform,

	/// Fallback alert wording
	pub alert: AlertSettings,

	/// Message shown when a document error carries no text
	pub unknown_error_message: String,
}

impl Default for BridgeSettings {
	fn default() -> Self {
		Self {
			platform: Platform::current(),
			alert: AlertSettings::default(),
			unknown_error_message: UNKNOWN_ERROR_MESSAGE.to_string(),
		}
	}
}

impl BridgeSettings {
	/// Parses settings from TOML. Missing keys keep their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file.
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = fs::read_to_string(path).map_err(|source| BridgeError::SettingsRead {
			path: path.display().to_string(),
			source,
		})?;
		Self::from_toml_str(&content)
	}

	/// Checks that the alert can actually be shown.
	pub fn validate(&self) -> Result<()> {
		if self.alert.title.trim().is_empty() {
			return Err(BridgeError::Config("alert title must not be empty".into()));
		}
		if self.alert.confirm_label.trim().is_empty() {
			return Err(BridgeError::Config(
				"alert confirm label must not be empty".into(),
			));
		}
		Ok(())
	}
}

/// Props handed to the native view when it mounts.
///
/// Values are passed through untouched; identifiers for tools, buttons,
/// menus and fit or layout modes are whatever strings the native engine
/// understands. Unset props are omitted so the engine keeps its own
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerProps {
	/// Path, URL or base64 content of the document
	#[serde(skip_serializing_if = "Option::is_none")]
	pub document: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub initial_page_number: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_number: Option<u32>,
	/// HTTP headers used when `document` is a URL
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom_headers: Option<BTreeMap<String, String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub leading_nav_button_icon: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_leading_nav_button: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub disabled_elements: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub disabled_tools: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub long_press_menu_items: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub override_long_press_menu_behavior: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub long_press_menu_enabled: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub annotation_menu_items: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub override_annotation_menu_behavior: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hide_annotation_menu: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub override_behavior: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub top_toolbar_enabled: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bottom_toolbar_enabled: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_indicator_enabled: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub read_only: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail_view_editing_enabled: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fit_mode: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub layout_mode: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pad_status_bar: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub continuous_annotation_editing: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub select_annotation_after_creation: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub annotation_author: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub show_saved_signatures: Option<bool>,
	/// `document` holds base64 content instead of a path
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_base64_string: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub collab_enabled: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_user: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_user_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_save_enabled: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_change_on_tap: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub follow_system_dark_mode: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub use_stylus_as_pen: Option<bool>,
}

impl ViewerProps {
	/// Creates props for `document`.
	pub fn new(document: impl Into<String>) -> Self {
		Self {
			document: Some(document.into()),
			..Self::default()
		}
	}

	/// Sets the document password.
	pub fn password(mut self, password: impl Into<String>) -> Self {
		self.password = Some(password.into());
		self
	}

	/// Sets the page shown first.
	pub fn initial_page_number(mut self, page_number: u32) -> Self {
		self.initial_page_number = Some(page_number);
		self
	}

	/// Sets whether the viewer is read-only.
	pub fn read_only(mut self, read_only: bool) -> Self {
		self.read_only = Some(read_only);
		self
	}

	/// Sets the tool identifiers the user may not pick.
	pub fn disabled_tools<I, S>(mut self, tools: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.disabled_tools = Some(tools.into_iter().map(Into::into).collect());
		self
	}

	/// Sets the fit mode identifier.
	pub fn fit_mode(mut self, fit_mode: impl Into<String>) -> Self {
		self.fit_mode = Some(fit_mode.into());
		self
	}

	/// Sets the layout mode identifier.
	pub fn layout_mode(mut self, layout_mode: impl Into<String>) -> Self {
		self.layout_mode = Some(layout_mode.into());
		self
	}

	/// Enables collaboration as `user_id`.
	pub fn collaborate_as(mut self, user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
		self.collab_enabled = Some(true);
		self.current_user = Some(user_id.into());
		self.current_user_name = Some(user_name.into());
		self
	}
}
