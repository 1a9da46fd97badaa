//! Simulated submission task
//!
//! A valid submit schedules a one-shot Tokio task that waits for the
//! configured delay, reports the payload to the observer and returns the
//! form to `Idle`. The task only holds a weak reference to the form, and the
//! form aborts it on teardown, so it never fires against a dropped instance.

use crate::component::FormInner;
use crate::field::FieldValues;
use std::fmt;
use std::sync::Weak;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};

/// How a scheduled submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
	/// The delay elapsed and the observer was notified
	Completed,
	/// Cancelled, or the form was torn down before the delay elapsed
	Cancelled,
}

/// Handle to an in-flight simulated submission
pub struct SubmissionHandle {
	id: u64,
	join: JoinHandle<SubmissionStatus>,
	form: Weak<FormInner>,
}

impl SubmissionHandle {
	/// Identifier of this submission, unique per form instance
	pub fn id(&self) -> u64 {
		self.id
	}

	pub fn is_finished(&self) -> bool {
		self.join.is_finished()
	}

	pub(crate) fn abort_handle(&self) -> AbortHandle {
		self.join.abort_handle()
	}

	/// Cancel the submission if it has not completed yet
	///
	/// The observer is not notified and the form returns to `Idle`. Has no
	/// effect once the delay elapsed: from then on the submission always
	/// completes.
	pub fn cancel(&self) {
		match self.form.upgrade() {
			Some(form) => {
				form.cancel_submission_by_id(self.id);
			}
			None => self.join.abort(),
		}
	}

	/// Wait for the submission to end
	pub async fn wait(self) -> SubmissionStatus {
		match self.join.await {
			Ok(status) => status,
			Err(err) if err.is_cancelled() => SubmissionStatus::Cancelled,
			Err(err) => std::panic::resume_unwind(err.into_panic()),
		}
	}
}

impl fmt::Debug for SubmissionHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SubmissionHandle")
			.field("id", &self.id)
			.field("finished", &self.join.is_finished())
			.finish()
	}
}

/// Spawn the deferred task on the current Tokio runtime
///
/// The caller must have checked that a runtime is available.
pub(crate) fn schedule(
	form: Weak<FormInner>,
	id: u64,
	payload: FieldValues,
	delay: Duration,
) -> SubmissionHandle {
	let task_form = form.clone();
	let join = tokio::spawn(async move {
		tokio::time::sleep(delay).await;

		let Some(form) = task_form.upgrade() else {
			tracing::debug!(submission = id, "Form dropped before submission completed");
			return SubmissionStatus::Cancelled;
		};
		if !form.commit_submission(id) {
			return SubmissionStatus::Cancelled;
		}

		form.observer().submitted(&payload).await;
		form.observer()
			.succeeded(&form.config().success_message)
			.await;
		form.complete_submission(id);

		SubmissionStatus::Completed
	});

	SubmissionHandle { id, join, form }
}
