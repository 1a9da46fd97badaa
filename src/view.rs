//! Render-agnostic view model
//!
//! A rendering collaborator turns a [`FormView`] into whatever it draws:
//! text inputs with inline error text and a submit button that is disabled
//! while a submission is in flight. Nothing here touches a DOM.

use crate::config::FormConfig;
use crate::field::FieldName;
use crate::state::FormState;
use serde::Serialize;

/// One rendered input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
	pub field: FieldName,
	/// Used for both the `id` and `name` attributes
	pub id: &'static str,
	pub label: &'static str,
	pub input_type: &'static str,
	pub value: String,
	pub error: Option<String>,
	/// Whether the input should be styled as invalid
	pub is_invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButtonView {
	pub label: String,
	pub disabled: bool,
}

/// Everything needed to draw the form for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
	pub heading: String,
	pub fields: Vec<FieldView>,
	pub submit: SubmitButtonView,
}

impl FormView {
	/// Project a snapshot into a view
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::{FormConfig, FormState, FormView};
	///
	/// let view = FormView::from_state(&FormState::new().begin_submission(), &FormConfig::default());
	/// assert_eq!(view.submit.label, "Registering...");
	/// assert!(view.submit.disabled);
	/// assert_eq!(view.fields.len(), 4);
	/// ```
	pub fn from_state(state: &FormState, config: &FormConfig) -> Self {
		let fields = FieldName::ALL
			.into_iter()
			.map(|field| {
				let error = state.errors().message(field).map(str::to_string);
				FieldView {
					field,
					id: field.key(),
					label: field.label(),
					input_type: field.widget().input_type(),
					value: state.value(field).to_string(),
					is_invalid: error.is_some(),
					error,
				}
			})
			.collect();

		let submitting = state.is_submitting();
		let submit = SubmitButtonView {
			label: if submitting {
				config.submitting_label.clone()
			} else {
				config.submit_label.clone()
			},
			disabled: submitting,
		};

		Self {
			heading: config.heading.clone(),
			fields,
			submit,
		}
	}

	pub fn field(&self, field: FieldName) -> Option<&FieldView> {
		self.fields.iter().find(|view| view.field == field)
	}
}
