//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each form page declares its schema as a plain function (so it can be
//! validated without mounting anything), registers its inputs with a
//! `FormHandle`, and hands accepted values to `deliver`.

pub mod footer;
pub mod login;
pub mod signup;

use leptos::prelude::*;
use serde::Serialize;

use crate::util::trace;

/// Pass an accepted payload to the page's callback, or trace-log it when the
/// page was mounted without one.
pub(crate) fn deliver<T>(form: &str, on_valid: Option<Callback<T>>, payload: T)
where
    T: Serialize + Send + Sync + 'static,
{
    match on_valid {
        Some(callback) => callback.run(payload),
        None => trace::submitted(form, &payload),
    }
}
