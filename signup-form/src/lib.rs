//! Sign-up form core: draft state, field binding and submit-time validation.

pub mod config;
pub mod draft;
pub mod error;
pub mod focus;
pub mod form;
pub mod input;
pub mod key;
pub mod validation;

pub use config::{SignupConfig, SuccessPolicy};
pub use draft::{Field, SignupDraft};
pub use error::{FormError, SignupError};
pub use focus::{Focus, FocusRing};
pub use form::{FormEvent, SignupForm, SubmitEvent, SubmitOutcome};
pub use input::{EditResult, InputEditor};
pub use key::{Key, Modifiers};
pub use validation::{FieldBuilder, Validator};
