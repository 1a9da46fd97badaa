//! Registration form component
//!
//! [`RegistrationForm`] owns the current [`FormState`] snapshot, swaps it on
//! every event and publishes each new snapshot on a `watch` channel so a
//! renderer can redraw reactively.
//!
//! ## Example
//!
//! ```
//! use registration_form::{FieldName, MemoryObserver, RegistrationForm, SubmitOutcome};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let observer = MemoryObserver::new();
//! let form = RegistrationForm::with_observer(Arc::new(observer.clone()));
//!
//! form.update_field(FieldName::Name, "Jo");
//! form.update_field(FieldName::Email, "jo@x.com");
//! form.update_field(FieldName::Password, "secret1");
//! form.update_field(FieldName::ConfirmPassword, "secret1");
//!
//! let SubmitOutcome::Submitted(handle) = form.submit().unwrap() else {
//!     panic!("form should be valid");
//! };
//! assert!(form.state().is_submitting());
//!
//! handle.wait().await;
//! assert!(!form.state().is_submitting());
//! assert_eq!(observer.submissions().len(), 1);
//! # }
//! ```

use crate::config::FormConfig;
use crate::error::{FormError, FormResult};
use crate::event::FormEvent;
use crate::field::{FieldErrors, FieldName};
use crate::observer::{SubmissionObserver, TracingObserver};
use crate::state::{FormPhase, FormState};
use crate::submission::{self, SubmissionHandle};
use crate::view::FormView;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Result of a submit trigger
#[derive(Debug)]
pub enum SubmitOutcome {
	/// Validation failed; the published snapshot carries these errors
	Invalid(FieldErrors),
	/// A submission is already in flight; the trigger was ignored
	AlreadySubmitting,
	/// Validation passed and the simulated call is scheduled
	Submitted(SubmissionHandle),
}

impl SubmitOutcome {
	pub fn is_submitted(&self) -> bool {
		matches!(self, SubmitOutcome::Submitted(_))
	}
}

struct PendingSubmission {
	id: u64,
	abort: AbortHandle,
	// Set once the delay elapsed; a committed submission can no longer be cancelled.
	committed: bool,
}

struct Slot {
	state: FormState,
	pending: Option<PendingSubmission>,
	next_id: u64,
}

pub(crate) struct FormInner {
	slot: Mutex<Slot>,
	snapshots: watch::Sender<FormState>,
	observer: Arc<dyn SubmissionObserver>,
	config: FormConfig,
}

impl FormInner {
	pub(crate) fn observer(&self) -> &Arc<dyn SubmissionObserver> {
		&self.observer
	}

	pub(crate) fn config(&self) -> &FormConfig {
		&self.config
	}

	fn replace(&self, slot: &mut Slot, next: FormState) {
		slot.state = next;
		self.snapshots.send_replace(slot.state.clone());
	}

	/// Called by the deferred task when its delay elapsed
	///
	/// Returns false when the submission was cancelled first. Once this
	/// returns true the observer will be notified and cancellation is a no-op.
	pub(crate) fn commit_submission(&self, id: u64) -> bool {
		let mut slot = self.slot.lock();
		match slot.pending.as_mut() {
			Some(pending) if pending.id == id => {
				pending.committed = true;
				tracing::debug!(submission = id, "Submission committed");
				true
			}
			_ => false,
		}
	}

	/// Called by the deferred task once the observer has been notified
	pub(crate) fn complete_submission(&self, id: u64) {
		let mut slot = self.slot.lock();
		if slot.pending.as_ref().is_some_and(|pending| pending.id == id) {
			slot.pending = None;
			let next = slot.state.finish_submission();
			self.replace(&mut slot, next);
			tracing::debug!(submission = id, phase = ?FormPhase::Idle, "Submission completed");
		}
	}

	/// Abort a specific pending submission; false if it already ended
	pub(crate) fn cancel_submission_by_id(&self, id: u64) -> bool {
		let mut slot = self.slot.lock();
		if !slot.pending.as_ref().is_some_and(|pending| pending.id == id) {
			return false;
		}
		self.abort_pending(&mut slot)
	}

	fn abort_pending(&self, slot: &mut Slot) -> bool {
		let Some(pending) = slot.pending.take_if(|pending| !pending.committed) else {
			return false;
		};
		pending.abort.abort();
		let next = slot.state.finish_submission();
		self.replace(slot, next);
		tracing::debug!(submission = pending.id, phase = ?FormPhase::Idle, "Submission cancelled");
		true
	}
}

/// The registration form component
///
/// Not `Clone`: dropping the form tears it down and cancels any pending
/// submission.
pub struct RegistrationForm {
	inner: Arc<FormInner>,
}

impl RegistrationForm {
	/// Create a form that logs submissions through `tracing`
	pub fn new(config: FormConfig) -> Self {
		let observer = TracingObserver::new().with_passwords_redacted(config.redact_passwords);
		Self::with_config_and_observer(config, Arc::new(observer))
	}

	/// Create a form with the default configuration and a custom observer
	pub fn with_observer(observer: Arc<dyn SubmissionObserver>) -> Self {
		Self::with_config_and_observer(FormConfig::default(), observer)
	}

	pub fn with_config_and_observer(
		config: FormConfig,
		observer: Arc<dyn SubmissionObserver>,
	) -> Self {
		let state = FormState::new();
		let (snapshots, _) = watch::channel(state.clone());
		Self {
			inner: Arc::new(FormInner {
				slot: Mutex::new(Slot {
					state,
					pending: None,
					next_id: 1,
				}),
				snapshots,
				observer,
				config,
			}),
		}
	}

	/// Current snapshot
	pub fn state(&self) -> FormState {
		self.inner.slot.lock().state.clone()
	}

	pub fn config(&self) -> &FormConfig {
		&self.inner.config
	}

	/// Receive every future snapshot
	///
	/// The receiver starts at the current snapshot.
	pub fn subscribe(&self) -> watch::Receiver<FormState> {
		self.inner.snapshots.subscribe()
	}

	/// View model of the current snapshot
	pub fn view(&self) -> FormView {
		FormView::from_state(&self.state(), &self.inner.config)
	}

	/// Record new text for a field and clear that field's error
	pub fn update_field(&self, field: FieldName, value: impl Into<String>) {
		let mut slot = self.inner.slot.lock();
		let next = slot.state.with_field(field, value);
		self.inner.replace(&mut slot, next);
		tracing::debug!(%field, "Field updated");
	}

	/// Like [`update_field`](Self::update_field), addressed by raw key
	pub fn handle_input(&self, key: &str, value: impl Into<String>) -> FormResult<()> {
		let field: FieldName = key.parse()?;
		self.update_field(field, value);
		Ok(())
	}

	/// Validate and, when valid, schedule the simulated submission
	///
	/// Fails only when no Tokio runtime is available to run the deferred
	/// task; in that case the state is left unchanged.
	pub fn submit(&self) -> FormResult<SubmitOutcome> {
		if tokio::runtime::Handle::try_current().is_err() {
			return Err(FormError::NoRuntime);
		}

		let mut slot = self.inner.slot.lock();
		if slot.state.is_submitting() {
			tracing::debug!("Submit ignored: submission already in flight");
			return Ok(SubmitOutcome::AlreadySubmitting);
		}

		tracing::debug!("Validating form");
		let (validated, validation) = slot.state.validated();
		if !validation.is_valid {
			let invalid: Vec<&str> = validation
				.errors
				.invalid_fields()
				.iter()
				.map(FieldName::key)
				.collect();
			tracing::debug!(fields = ?invalid, phase = ?FormPhase::Idle, "Validation failed");
			self.inner.replace(&mut slot, validated);
			return Ok(SubmitOutcome::Invalid(validation.errors));
		}

		let next = validated.begin_submission();
		let payload = next.fields().clone();
		self.inner.replace(&mut slot, next);

		let id = slot.next_id;
		slot.next_id += 1;
		// Spawned under the lock: the task cannot complete before it is registered.
		let handle = submission::schedule(
			Arc::downgrade(&self.inner),
			id,
			payload,
			self.inner.config.submit_delay(),
		);
		slot.pending = Some(PendingSubmission {
			id,
			abort: handle.abort_handle(),
			committed: false,
		});
		tracing::debug!(submission = id, phase = ?FormPhase::Submitting, "Submission scheduled");

		Ok(SubmitOutcome::Submitted(handle))
	}

	/// Route an event from the rendering collaborator
	///
	/// Returns the submit outcome for [`FormEvent::Submit`], `None` for input.
	pub fn dispatch(&self, event: FormEvent) -> FormResult<Option<SubmitOutcome>> {
		match event {
			FormEvent::Input { field, value } => {
				self.update_field(field, value);
				Ok(None)
			}
			FormEvent::Submit => self.submit().map(Some),
		}
	}

	/// Cancel the in-flight submission, if any
	///
	/// Returns false when nothing is pending or the delay already elapsed and
	/// the observer is being notified.
	pub fn cancel_submission(&self) -> bool {
		let mut slot = self.inner.slot.lock();
		self.inner.abort_pending(&mut slot)
	}

	/// Tear the form down, cancelling any pending submission
	pub fn teardown(self) {}
}

impl Drop for RegistrationForm {
	fn drop(&mut self) {
		if self.cancel_submission() {
			tracing::debug!("Form torn down with a pending submission");
		}
	}
}
