//! Form validation adapter.
//!
//! ARCHITECTURE
//! ============
//! `schema` declares fields and evaluates their rules against a `FormState`
//! snapshot without touching any reactive state. `handle` binds a schema to
//! Leptos signals so pages can register inputs, render inline errors and
//! gate submission.
//!
//! Validation failures are data (`FieldErrors`), never `Err` values: a form
//! with errors simply does not reach its `on_valid` callback.

pub mod errors;
pub mod handle;
pub mod schema;
pub mod state;

pub use errors::FieldErrors;
pub use handle::{FieldBinding, FormHandle, use_form};
pub use schema::{FieldSpec, FormSchema, RequiredPolicy, ValidationRule};
pub use state::FormState;
