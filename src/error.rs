//! Programmatic errors for the registration form
//!
//! Validation failures are never reported through this type: they are
//! presentational messages stored in [`FieldErrors`](crate::FieldErrors).
//! `FormError` only covers misuse of the Rust API (unknown field keys,
//! broken configuration).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form field: {0}")]
	UnknownField(String),
	#[error("Submission requires a running Tokio runtime")]
	NoRuntime,
	#[error("Invalid form configuration: {0}")]
	Config(String),
	#[error("Failed to read configuration file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type FormResult<T> = Result<T, FormError>;

impl From<toml::de::Error> for FormError {
	fn from(err: toml::de::Error) -> Self {
		FormError::Config(err.to_string())
	}
}
