//! Registration validation rules
//!
//! [`validate`] is a pure function from a value-store snapshot to a fresh
//! error-store snapshot. Every field is always checked; errors accumulate
//! instead of short-circuiting on the first failure.

use crate::field::{FieldErrors, FieldName, FieldValues};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must contain at least 6 characters";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Minimum password length, counted in characters after trimming
pub const MIN_PASSWORD_LENGTH: usize = 6;

// local@domain.tld: one `@`, no whitespace, at least one `.` after the `@`
// with something on both sides of it.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Result of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
	pub errors: FieldErrors,
	pub is_valid: bool,
}

/// Validate a value-store snapshot
///
/// # Examples
///
/// ```
/// use registration_form::{FieldName, FieldValues, validate};
///
/// let outcome = validate(&FieldValues::new("Jo", "foo", "secret1", "secret1"));
/// assert!(!outcome.is_valid);
/// assert_eq!(
///     outcome.errors.message(FieldName::Email),
///     Some("Please enter a valid email")
/// );
/// assert_eq!(outcome.errors.message(FieldName::Name), None);
/// ```
pub fn validate(values: &FieldValues) -> Validation {
	let errors = FieldName::ALL
		.into_iter()
		.fold(FieldErrors::default(), |errors, field| {
			match check_field(field, values) {
				Some(message) => errors.with(field, message),
				None => errors,
			}
		});
	let is_valid = errors.is_clear();

	Validation { errors, is_valid }
}

/// Check one field against the whole value store
///
/// Returns the error message for `field`, or `None` when it is valid.
/// `confirmPassword` depends on `password`, which is why the full store is
/// passed in.
pub fn check_field(field: FieldName, values: &FieldValues) -> Option<&'static str> {
	let value = values.get(field);
	match field {
		FieldName::Name => value.trim().is_empty().then_some(NAME_REQUIRED),
		FieldName::Email => {
			if value.trim().is_empty() {
				Some(EMAIL_REQUIRED)
			} else if !is_valid_email(value) {
				Some(EMAIL_INVALID)
			} else {
				None
			}
		}
		FieldName::Password => {
			let trimmed = value.trim();
			if trimmed.is_empty() {
				Some(PASSWORD_REQUIRED)
			} else if trimmed.chars().count() < MIN_PASSWORD_LENGTH {
				Some(PASSWORD_TOO_SHORT)
			} else {
				None
			}
		}
		// Raw comparison: surrounding whitespace counts.
		FieldName::ConfirmPassword => {
			(value != values.get(FieldName::Password)).then_some(PASSWORDS_DO_NOT_MATCH)
		}
	}
}

/// Simple `local@domain.tld` shape check on the raw (untrimmed) value
pub fn is_valid_email(value: &str) -> bool {
	EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	fn valid_values() -> FieldValues {
		FieldValues::new("Jo", "jo@x.com", "secret1", "secret1")
	}

	/// Valid values pass every rule
	#[rstest]
	fn test_valid_values_produce_no_errors() {
		// Act
		let outcome = validate(&valid_values());

		// Assert
		assert!(outcome.is_valid);
		assert!(outcome.errors.is_clear());
	}

	/// Blank names are required
	#[rstest]
	#[case("", NAME_REQUIRED)]
	#[case("   ", NAME_REQUIRED)]
	#[case("\t\n", NAME_REQUIRED)]
	fn test_name_required(#[case] name: &str, #[case] expected: &str) {
		let values = valid_values().with(FieldName::Name, name);
		assert_eq!(check_field(FieldName::Name, &values), Some(expected));
	}

	/// Email required and shape rules
	#[rstest]
	#[case("", Some(EMAIL_REQUIRED))]
	#[case("  ", Some(EMAIL_REQUIRED))]
	#[case("foo", Some(EMAIL_INVALID))]
	#[case("a@b", Some(EMAIL_INVALID))]
	#[case("a@@b.com", Some(EMAIL_INVALID))]
	#[case("a b@c.com", Some(EMAIL_INVALID))]
	#[case(" a@b.com", Some(EMAIL_INVALID))]
	#[case("@b.com", Some(EMAIL_INVALID))]
	#[case("a@b.", Some(EMAIL_INVALID))]
	#[case("a@b.com", None)]
	#[case("first.last@sub.example.org", None)]
	fn test_email_rules(#[case] email: &str, #[case] expected: Option<&str>) {
		let values = valid_values().with(FieldName::Email, email);
		assert_eq!(check_field(FieldName::Email, &values), expected);
	}

	/// Password required and length rules
	#[rstest]
	#[case("", Some(PASSWORD_REQUIRED))]
	#[case("     ", Some(PASSWORD_REQUIRED))]
	#[case("abc", Some(PASSWORD_TOO_SHORT))]
	#[case("  abc  ", Some(PASSWORD_TOO_SHORT))]
	#[case("abcdef", None)]
	#[case("パスワードです", None)]
	fn test_password_rules(#[case] password: &str, #[case] expected: Option<&str>) {
		let values = valid_values()
			.with(FieldName::Password, password)
			.with(FieldName::ConfirmPassword, password);
		assert_eq!(check_field(FieldName::Password, &values), expected);
	}

	/// Length counts characters, not bytes
	#[rstest]
	fn test_password_length_counts_characters_not_bytes() {
		// Arrange: five 3-byte characters are 15 bytes but only 5 characters
		let values = valid_values().with(FieldName::Password, "あいうえお");

		// Act & Assert
		assert_eq!(
			check_field(FieldName::Password, &values),
			Some(PASSWORD_TOO_SHORT)
		);
	}

	/// Confirmation compares untrimmed values
	#[rstest]
	#[case("secret1", "secret1", None)]
	#[case("secret1", "secret2", Some(PASSWORDS_DO_NOT_MATCH))]
	#[case("secret1", "secret1 ", Some(PASSWORDS_DO_NOT_MATCH))]
	#[case("secret1", "", Some(PASSWORDS_DO_NOT_MATCH))]
	#[case("", "", None)]
	fn test_confirm_password_compares_raw_values(
		#[case] password: &str,
		#[case] confirm: &str,
		#[case] expected: Option<&str>,
	) {
		let values = valid_values()
			.with(FieldName::Password, password)
			.with(FieldName::ConfirmPassword, confirm);
		assert_eq!(check_field(FieldName::ConfirmPassword, &values), expected);
	}

	/// All failing fields are reported at once
	#[rstest]
	fn test_errors_accumulate_across_all_fields() {
		// Arrange
		let values = FieldValues::new("", "bad", "12", "abc");

		// Act
		let outcome = validate(&values);

		// Assert
		assert!(!outcome.is_valid);
		assert_eq!(outcome.errors.message(FieldName::Name), Some(NAME_REQUIRED));
		assert_eq!(outcome.errors.message(FieldName::Email), Some(EMAIL_INVALID));
		assert_eq!(
			outcome.errors.message(FieldName::Password),
			Some(PASSWORD_TOO_SHORT)
		);
		assert_eq!(
			outcome.errors.message(FieldName::ConfirmPassword),
			Some(PASSWORDS_DO_NOT_MATCH)
		);
	}

	/// Empty form reports required messages
	#[rstest]
	fn test_empty_form_reports_required_messages() {
		// Act
		let outcome = validate(&FieldValues::default());

		// Assert: empty confirmPassword matches empty password
		assert_eq!(
			outcome.errors.invalid_fields(),
			vec![FieldName::Name, FieldName::Email, FieldName::Password]
		);
		assert_eq!(outcome.errors.message(FieldName::Password), Some(PASSWORD_REQUIRED));
	}

	proptest! {
		/// Whitespace-only input counts as empty
		#[test]
		fn prop_whitespace_only_values_are_required(ws in "[ \t\n]{0,8}") {
			let values = FieldValues::new(ws.clone(), ws.clone(), ws.clone(), ws);
			let outcome = validate(&values);
			prop_assert_eq!(outcome.errors.message(FieldName::Name), Some(NAME_REQUIRED));
			prop_assert_eq!(outcome.errors.message(FieldName::Email), Some(EMAIL_REQUIRED));
			prop_assert_eq!(outcome.errors.message(FieldName::Password), Some(PASSWORD_REQUIRED));
			prop_assert!(!outcome.is_valid);
		}

		/// Mismatch error appears exactly when the values differ
		#[test]
		fn prop_confirm_matches_iff_equal(password in "\\PC{0,12}", confirm in "\\PC{0,12}") {
			let values = valid_values()
				.with(FieldName::Password, password.clone())
				.with(FieldName::ConfirmPassword, confirm.clone());
			let mismatch = check_field(FieldName::ConfirmPassword, &values).is_some();
			prop_assert_eq!(mismatch, password != confirm);
		}

		/// Form is valid only when every field is
		#[test]
		fn prop_validity_is_conjunction_of_field_checks(
			name in "\\PC{0,6}",
			email in "[a-z@. ]{0,10}",
			password in "\\PC{0,8}",
		) {
			let values = FieldValues::new(name, email, password.clone(), password);
			let outcome = validate(&values);
			let all_pass = FieldName::ALL
				.into_iter()
				.all(|field| check_field(field, &values).is_none());
			prop_assert_eq!(outcome.is_valid, all_pass);
		}
	}
}
