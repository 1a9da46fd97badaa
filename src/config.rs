//! Form configuration
//!
//! Loaded from TOML; every key is optional and falls back to the defaults
//! below.
//!
//! ```toml
//! submit_delay_ms = 1000
//! success_message = "Registration successful"
//! heading = "Register"
//! submit_label = "Register"
//! submitting_label = "Registering..."
//! redact_passwords = true
//! ```

use crate::error::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Registration successful";
pub const DEFAULT_HEADING: &str = "Register";
pub const DEFAULT_SUBMIT_LABEL: &str = "Register";
pub const DEFAULT_SUBMITTING_LABEL: &str = "Registering...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	/// Delay of the simulated API call, in milliseconds
	pub submit_delay_ms: u64,
	/// Acknowledgment shown to the user after a successful submission
	pub success_message: String,
	pub heading: String,
	pub submit_label: String,
	pub submitting_label: String,
	/// Mask password values when the submitted payload is logged
	pub redact_passwords: bool,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
			success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
			heading: DEFAULT_HEADING.to_string(),
			submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
			submitting_label: DEFAULT_SUBMITTING_LABEL.to_string(),
			redact_passwords: true,
		}
	}
}

impl FormConfig {
	/// Parse and validate a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::FormConfig;
	/// use std::time::Duration;
	///
	/// let config = FormConfig::from_toml_str("submit_delay_ms = 250").unwrap();
	/// assert_eq!(config.submit_delay(), Duration::from_millis(250));
	/// assert_eq!(config.submit_label, "Register");
	/// ```
	pub fn from_toml_str(source: &str) -> FormResult<Self> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Read, parse and validate a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| FormError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Reject configurations that would render an unusable form
	pub fn validate(&self) -> FormResult<()> {
		let labels = [
			("success_message", &self.success_message),
			("heading", &self.heading),
			("submit_label", &self.submit_label),
			("submitting_label", &self.submitting_label),
		];
		for (key, value) in labels {
			if value.trim().is_empty() {
				return Err(FormError::Config(format!("{} must not be empty", key)));
			}
		}
		Ok(())
	}

	pub fn submit_delay(&self) -> Duration {
		Duration::from_millis(self.submit_delay_ms)
	}

	pub fn with_submit_delay(mut self, delay: Duration) -> Self {
		self.submit_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
		self
	}

	pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
		self.success_message = message.into();
		self
	}

	pub fn with_labels(
		mut self,
		submit_label: impl Into<String>,
		submitting_label: impl Into<String>,
	) -> Self {
		self.submit_label = submit_label.into();
		self.submitting_label = submitting_label.into();
		self
	}

	pub fn with_passwords_redacted(mut self, redact: bool) -> Self {
		self.redact_passwords = redact;
		self
	}
}
