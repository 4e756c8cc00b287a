//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome for the pages; they hold no state of their
//! own beyond what a page's `FormHandle` hands them.

pub mod auth_card;
pub mod form_field;
