//! Local trace of accepted form submissions.
//!
//! Goes through the `log` facade: the browser console in hydrate builds,
//! whatever logger the host installed elsewhere. Password-like values are
//! masked before anything is written.

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;

use serde::Serialize;
use serde_json::Value;

const MASK: &str = "********";

/// JSON form of `payload` with every `*password*` key masked.
///
/// # Errors
///
/// Returns the serializer error if `payload` cannot be represented as JSON.
pub fn submission_record<T: Serialize>(payload: &T) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(payload)?;
    mask_secrets(&mut value);
    Ok(value)
}

/// Log an accepted submission of form `form`.
pub fn submitted<T: Serialize>(form: &str, payload: &T) {
    match submission_record(payload) {
        Ok(record) => log::info!("{form} submitted: {record}"),
        Err(e) => log::warn!("{form} submitted; payload not serializable: {e}"),
    }
}

fn mask_secrets(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if key.to_ascii_lowercase().contains("password") {
                    *entry = Value::String(MASK.to_owned());
                } else {
                    mask_secrets(entry);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_secrets),
        _ => {}
    }
}
