//! Helpers shared across pages.

pub mod trace;

#[cfg(test)]
pub(crate) mod log_capture;
