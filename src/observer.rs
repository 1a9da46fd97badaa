//! Submission observers
//!
//! When a simulated submission completes, the form hands the submitted
//! values and a success acknowledgment to a [`SubmissionObserver`].
//!
//! - [`TracingObserver`] writes the payload to the `tracing` log
//! - [`MemoryObserver`] keeps everything in memory for tests

use crate::field::FieldValues;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// Placeholder written instead of a password in log output
pub const PASSWORD_REDACTED: &str = "********";

/// Receives the outcome of a completed submission
#[async_trait]
pub trait SubmissionObserver: Send + Sync {
	/// Called with the exact values that were submitted
	async fn submitted(&self, values: &FieldValues);

	/// Called once the user-visible success acknowledgment should be shown
	async fn succeeded(&self, message: &str);
}

/// Observer that logs submissions through `tracing`
#[derive(Debug, Clone)]
pub struct TracingObserver {
	redact_passwords: bool,
}

impl TracingObserver {
	pub fn new() -> Self {
		Self {
			redact_passwords: true,
		}
	}

	pub fn with_passwords_redacted(mut self, redact: bool) -> Self {
		self.redact_passwords = redact;
		self
	}

	/// Values as they appear in the log line
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::{FieldValues, TracingObserver};
	///
	/// let observer = TracingObserver::new();
	/// let logged = observer.loggable(&FieldValues::new("Jo", "jo@x.com", "secret1", "secret1"));
	/// assert_eq!(logged.name, "Jo");
	/// assert_eq!(logged.password, "********");
	/// ```
	pub fn loggable(&self, values: &FieldValues) -> FieldValues {
		if !self.redact_passwords {
			return values.clone();
		}
		FieldValues::from_fn(|field| {
			let value = values.get(field);
			if field.is_secret() && !value.is_empty() {
				PASSWORD_REDACTED.to_string()
			} else {
				value.clone()
			}
		})
	}
}

impl Default for TracingObserver {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SubmissionObserver for TracingObserver {
	async fn submitted(&self, values: &FieldValues) {
		let logged = self.loggable(values);
		match serde_json::to_string(&logged) {
			Ok(payload) => tracing::info!(payload = %payload, "Form submitted"),
			Err(err) => tracing::warn!(error = %err, "Form submitted; payload not serializable"),
		}
	}

	async fn succeeded(&self, message: &str) {
		tracing::info!(acknowledgment = message, "Submission acknowledged");
	}
}

/// Observer that records submissions in memory
///
/// Clones share the same records.
///
/// # Examples
///
/// ```
/// use registration_form::{FieldValues, MemoryObserver, SubmissionObserver};
///
/// # #[tokio::main]
/// # async fn main() {
/// let observer = MemoryObserver::new();
/// observer.submitted(&FieldValues::default()).await;
/// observer.succeeded("Registration successful").await;
///
/// assert_eq!(observer.submissions().len(), 1);
/// assert_eq!(observer.acknowledgments(), vec!["Registration successful".to_string()]);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryObserver {
	submissions: Arc<RwLock<Vec<FieldValues>>>,
	acknowledgments: Arc<RwLock<Vec<String>>>,
}

impl MemoryObserver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn submissions(&self) -> Vec<FieldValues> {
		self.submissions.read().clone()
	}

	pub fn last_submission(&self) -> Option<FieldValues> {
		self.submissions.read().last().cloned()
	}

	pub fn acknowledgments(&self) -> Vec<String> {
		self.acknowledgments.read().clone()
	}

	pub fn clear(&self) {
		self.submissions.write().clear();
		self.acknowledgments.write().clear();
	}
}

#[async_trait]
impl SubmissionObserver for MemoryObserver {
	async fn submitted(&self, values: &FieldValues) {
		self.submissions.write().push(values.clone());
	}

	async fn succeeded(&self, message: &str) {
		self.acknowledgments.write().push(message.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sample() -> FieldValues {
		FieldValues::new("Jo", "jo@x.com", "secret1", "secret1")
	}

	/// Passwords are masked in log output
	#[rstest]
	fn test_loggable_redacts_secrets_by_default() {
		// Act
		let logged = TracingObserver::new().loggable(&sample());

		// Assert
		assert_eq!(logged.name, "Jo");
		assert_eq!(logged.email, "jo@x.com");
		assert_eq!(logged.password, PASSWORD_REDACTED);
		assert_eq!(logged.confirm_password, PASSWORD_REDACTED);
	}

	/// Empty passwords stay empty
	#[rstest]
	fn test_loggable_keeps_empty_passwords_empty() {
		let logged = TracingObserver::new().loggable(&FieldValues::default());
		assert_eq!(logged, FieldValues::default());
	}

	/// Redaction can be switched off
	#[rstest]
	fn test_loggable_without_redaction_is_identity() {
		let observer = TracingObserver::new().with_passwords_redacted(false);
		assert_eq!(observer.loggable(&sample()), sample());
	}

	/// Clones share recorded submissions
	#[rstest]
	#[tokio::test]
	async fn test_memory_observer_records_and_clears() {
		// Arrange
		let observer = MemoryObserver::new();
		let shared = observer.clone();

		// Act
		observer.submitted(&sample()).await;
		observer.succeeded("Registration successful").await;

		// Assert
		assert_eq!(shared.last_submission(), Some(sample()));
		assert_eq!(shared.acknowledgments().len(), 1);

		shared.clear();
		assert!(observer.submissions().is_empty());
		assert!(observer.acknowledgments().is_empty());
	}

	/// Tracing observer works without a subscriber
	#[rstest]
	#[tokio::test]
	async fn test_tracing_observer_does_not_panic() {
		let observer = TracingObserver::default();
		observer.submitted(&sample()).await;
		observer.succeeded("Registration successful").await;
	}
}
