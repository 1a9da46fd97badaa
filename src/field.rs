//! Field catalogue and per-field storage
//!
//! The registration form has a closed set of four fields. [`FieldName`]
//! names them and carries their rendering metadata; [`FieldMap`] stores one
//! value per field, so a value store and an error store can never disagree
//! on their key set.

use crate::error::{FormError, FormResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input widget used to render a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Widget {
	TextInput,
	EmailInput,
	PasswordInput,
}

impl Widget {
	/// HTML `type` attribute for the widget
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::Widget;
	///
	/// assert_eq!(Widget::EmailInput.input_type(), "email");
	/// assert_eq!(Widget::PasswordInput.input_type(), "password");
	/// ```
	pub fn input_type(&self) -> &'static str {
		match self {
			Widget::TextInput => "text",
			Widget::EmailInput => "email",
			Widget::PasswordInput => "password",
		}
	}
}

/// One of the four registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
	Name,
	Email,
	Password,
	ConfirmPassword,
}

impl FieldName {
	/// All fields in render order
	pub const ALL: [FieldName; 4] = [
		FieldName::Name,
		FieldName::Email,
		FieldName::Password,
		FieldName::ConfirmPassword,
	];

	/// Key used for the input `name`/`id` attributes and in serialized payloads
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::FieldName;
	///
	/// assert_eq!(FieldName::ConfirmPassword.key(), "confirmPassword");
	/// ```
	pub fn key(&self) -> &'static str {
		match self {
			FieldName::Name => "name",
			FieldName::Email => "email",
			FieldName::Password => "password",
			FieldName::ConfirmPassword => "confirmPassword",
		}
	}

	/// Default human-readable label
	pub fn label(&self) -> &'static str {
		match self {
			FieldName::Name => "Name",
			FieldName::Email => "Email",
			FieldName::Password => "Password",
			FieldName::ConfirmPassword => "Confirm Password",
		}
	}

	pub fn widget(&self) -> Widget {
		match self {
			FieldName::Name => Widget::TextInput,
			FieldName::Email => Widget::EmailInput,
			FieldName::Password | FieldName::ConfirmPassword => Widget::PasswordInput,
		}
	}

	/// Whether the field holds a secret that must not appear in logs
	pub fn is_secret(&self) -> bool {
		self.widget() == Widget::PasswordInput
	}
}

impl fmt::Display for FieldName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for FieldName {
	type Err = FormError;

	/// Parse a field from its key
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::FieldName;
	///
	/// let field: FieldName = "email".parse().unwrap();
	/// assert_eq!(field, FieldName::Email);
	/// assert!("nickname".parse::<FieldName>().is_err());
	/// ```
	fn from_str(s: &str) -> FormResult<Self> {
		FieldName::ALL
			.into_iter()
			.find(|field| field.key() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}

/// One `T` per registration field
///
/// Serializes as an object keyed by [`FieldName::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMap<T> {
	pub name: T,
	pub email: T,
	pub password: T,
	pub confirm_password: T,
}

impl<T> FieldMap<T> {
	/// Build a map by computing each slot from its field
	pub fn from_fn(mut f: impl FnMut(FieldName) -> T) -> Self {
		Self {
			name: f(FieldName::Name),
			email: f(FieldName::Email),
			password: f(FieldName::Password),
			confirm_password: f(FieldName::ConfirmPassword),
		}
	}

	pub fn get(&self, field: FieldName) -> &T {
		match field {
			FieldName::Name => &self.name,
			FieldName::Email => &self.email,
			FieldName::Password => &self.password,
			FieldName::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn get_mut(&mut self, field: FieldName) -> &mut T {
		match field {
			FieldName::Name => &mut self.name,
			FieldName::Email => &mut self.email,
			FieldName::Password => &mut self.password,
			FieldName::ConfirmPassword => &mut self.confirm_password,
		}
	}

	/// Return a copy of the map with one slot replaced
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::{FieldName, FieldValues};
	///
	/// let values = FieldValues::default().with(FieldName::Name, "Jo");
	/// assert_eq!(values.get(FieldName::Name), "Jo");
	/// assert_eq!(values.get(FieldName::Email), "");
	/// ```
	pub fn with(mut self, field: FieldName, value: impl Into<T>) -> Self {
		*self.get_mut(field) = value.into();
		self
	}

	/// Iterate slots in render order
	pub fn iter(&self) -> impl Iterator<Item = (FieldName, &T)> {
		FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
	}
}

/// Field-value store: current text of each field
pub type FieldValues = FieldMap<String>;

impl FieldValues {
	/// Build a value store from the four raw strings
	///
	/// # Examples
	///
	/// ```
	/// use registration_form::{FieldName, FieldValues};
	///
	/// let values = FieldValues::new("Jo", "jo@x.com", "secret1", "secret1");
	/// assert_eq!(values.get(FieldName::ConfirmPassword), "secret1");
	/// ```
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		password: impl Into<String>,
		confirm_password: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			email: email.into(),
			password: password.into(),
			confirm_password: confirm_password.into(),
		}
	}
}

/// Error store: one message per field, empty meaning "no error"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(FieldMap<String>);

impl FieldErrors {
	/// Message for a field, `None` when the field is valid
	pub fn message(&self, field: FieldName) -> Option<&str> {
		let message = self.0.get(field);
		(!message.is_empty()).then_some(message.as_str())
	}

	pub fn has_error(&self, field: FieldName) -> bool {
		!self.0.get(field).is_empty()
	}

	/// True when no field carries an error
	pub fn is_clear(&self) -> bool {
		self.0.iter().all(|(_, message)| message.is_empty())
	}

	/// Fields that currently carry an error, in render order
	pub fn invalid_fields(&self) -> Vec<FieldName> {
		self.0
			.iter()
			.filter(|(_, message)| !message.is_empty())
			.map(|(field, _)| field)
			.collect()
	}

	/// Return a copy with the given field's message replaced
	pub fn with(self, field: FieldName, message: impl Into<String>) -> Self {
		Self(self.0.with(field, message))
	}

	/// Return a copy with the given field's message cleared
	pub fn cleared(self, field: FieldName) -> Self {
		self.with(field, String::new())
	}

	pub fn as_map(&self) -> &FieldMap<String> {
		&self.0
	}
}

impl From<FieldMap<String>> for FieldErrors {
	fn from(map: FieldMap<String>) -> Self {
		Self(map)
	}
}
