//! Typed submission payloads built from validated form values.
//!
//! Field names match the form inputs (`firstName`, `confirmPassword`, ...),
//! so a payload serializes to the same shape the form collected.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::form::FormState;

/// Input names shared by the page schemas and the payload constructors.
pub mod field {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl LoginPayload {
    pub fn from_state(values: &FormState) -> Self {
        Self {
            email: values.get(field::EMAIL).to_owned(),
            password: values.get(field::PASSWORD).to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupPayload {
    pub fn from_state(values: &FormState) -> Self {
        Self {
            first_name: values.get(field::FIRST_NAME).to_owned(),
            last_name: values.get(field::LAST_NAME).to_owned(),
            email: values.get(field::EMAIL).to_owned(),
            password: values.get(field::PASSWORD).to_owned(),
            confirm_password: values.get(field::CONFIRM_PASSWORD).to_owned(),
        }
    }
}
