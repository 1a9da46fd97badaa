//! Immutable form state snapshots
//!
//! A [`FormState`] is never mutated in place: every transition consumes or
//! borrows the current snapshot and returns the next one. The component
//! swaps whole snapshots, which keeps the state machine testable without any
//! rendering layer.
//!
//! ```text
//! Idle ──submit (invalid)──▶ Idle
//!  │
//! submit (valid)
//!  ▼
//! Submitting ──completed / cancelled──▶ Idle
//! ```
//!
//! Validation runs synchronously inside the submit transition, so it never
//! shows up as a stored phase.

use crate::field::{FieldErrors, FieldName, FieldValues};
use crate::validation::{Validation, validate};
use serde::Serialize;

/// Phase of the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
	Idle,
	Submitting,
}

/// Snapshot of the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
	fields: FieldValues,
	errors: FieldErrors,
	submitting: bool,
}

impl FormState {
	/// Fresh state: empty values, no errors, not submitting
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::{FormPhase, FormState};
	///
	/// let state = FormState::new();
	/// assert!(!state.is_submitting());
	/// assert!(state.errors().is_clear());
	/// assert_eq!(state.phase(), FormPhase::Idle);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from pre-filled values
	pub fn with_values(fields: FieldValues) -> Self {
		Self {
			fields,
			..Self::default()
		}
	}

	pub fn fields(&self) -> &FieldValues {
		&self.fields
	}

	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	pub fn value(&self, field: FieldName) -> &str {
		self.fields.get(field)
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	/// Observable phase of the submission state machine
	pub fn phase(&self) -> FormPhase {
		if self.submitting {
			FormPhase::Submitting
		} else {
			FormPhase::Idle
		}
	}

	/// Apply a field update
	///
	/// Sets the value and clears that field's error if it had one. Other
	/// fields' errors are left untouched; no validation runs.
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::{FieldName, FormState};
	///
	/// let (state, _) = FormState::new().validated();
	/// assert!(state.errors().has_error(FieldName::Name));
	///
	/// let state = state.with_field(FieldName::Name, "Jo");
	/// assert_eq!(state.value(FieldName::Name), "Jo");
	/// assert!(!state.errors().has_error(FieldName::Name));
	/// assert!(state.errors().has_error(FieldName::Email));
	/// ```
	pub fn with_field(&self, field: FieldName, value: impl Into<String>) -> Self {
		let errors = if self.errors.has_error(field) {
			self.errors.clone().cleared(field)
		} else {
			self.errors.clone()
		};
		Self {
			fields: self.fields.clone().with(field, value),
			errors,
			submitting: self.submitting,
		}
	}

	/// Run validation and replace the error store with its result
	///
	/// Returns the next snapshot together with the validation outcome. The
	/// submitting flag is not touched.
	pub fn validated(&self) -> (Self, Validation) {
		let validation = validate(&self.fields);
		let next = Self {
			fields: self.fields.clone(),
			errors: validation.errors.clone(),
			submitting: self.submitting,
		};
		(next, validation)
	}

	/// Enter the `Submitting` phase
	pub fn begin_submission(&self) -> Self {
		Self {
			submitting: true,
			..self.clone()
		}
	}

	/// Return to `Idle` after completion or cancellation
	pub fn finish_submission(&self) -> Self {
		Self {
			submitting: false,
			..self.clone()
		}
	}
}
