//! # Registration Form
//!
//! A registration form component: four text fields, synchronous validation
//! and a simulated, cancellable submission.
//!
//! The crate is split the way the data flows:
//!
//! - [`field`]: the field catalogue and per-field stores
//! - [`validation`]: pure validation of a value-store snapshot
//! - [`state`]: immutable [`FormState`] snapshots and their transitions
//! - [`component`]: [`RegistrationForm`], which owns the current snapshot,
//!   handles events and schedules the deferred submission
//! - [`submission`]: the cancellable deferred task
//! - [`observer`]: where submitted values and success acknowledgments go
//! - [`view`]: a render-agnostic view model for the rendering collaborator
//! - [`config`]: TOML-backed configuration
//!
//! ## Example
//!
//! ```
//! use registration_form::{FieldName, FieldValues, validate};
//!
//! let outcome = validate(&FieldValues::new("", "bad", "12", "abc"));
//! assert!(!outcome.is_valid);
//! assert_eq!(outcome.errors.message(FieldName::Name), Some("Name is required"));
//! assert_eq!(
//!     outcome.errors.message(FieldName::ConfirmPassword),
//!     Some("Passwords do not match")
//! );
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod observer;
pub mod state;
pub mod submission;
pub mod validation;
pub mod view;

pub use component::{RegistrationForm, SubmitOutcome};
pub use config::FormConfig;
pub use error::{FormError, FormResult};
pub use event::FormEvent;
pub use field::{FieldErrors, FieldMap, FieldName, FieldValues, Widget};
pub use observer::{MemoryObserver, PASSWORD_REDACTED, SubmissionObserver, TracingObserver};
pub use state::{FormPhase, FormState};
pub use submission::{SubmissionHandle, SubmissionStatus};
pub use validation::{Validation, validate};
pub use view::{FieldView, FormView, SubmitButtonView};
