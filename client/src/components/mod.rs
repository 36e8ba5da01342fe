//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts, the route gate) and
//! pet widgets while reading/writing shared state from Leptos context.

pub mod auth_gate;
pub mod nav_bar;
pub mod pet_card;
pub mod pet_form_modal;
pub mod status_badge;
pub mod toast_stack;
