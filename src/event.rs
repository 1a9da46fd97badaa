//! Events fed into the form by a rendering collaborator

use crate::error::FormResult;
use crate::field::FieldName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
	/// The user changed a field's text
	Input { field: FieldName, value: String },
	/// The user triggered submission; default navigation is already suppressed
	Submit,
}

impl FormEvent {
	/// Build an input event from a raw field key
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::{FieldName, FormEvent};
	///
	/// let event = FormEvent::input("confirmPassword", "secret1").unwrap();
	/// assert_eq!(
	///     event,
	///     FormEvent::Input { field: FieldName::ConfirmPassword, value: "secret1".to_string() }
	/// );
	/// assert!(FormEvent::input("nickname", "x").is_err());
	/// ```
	pub fn input(key: &str, value: impl Into<String>) -> FormResult<Self> {
		Ok(FormEvent::Input {
			field: key.parse()?,
			value: value.into(),
		})
	}
}
