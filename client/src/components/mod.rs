//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared [`AuthContext`](crate::state::auth::AuthContext)
//! from Leptos context; pages compose them around their own flow.

pub mod nav_bar;
pub mod toast;
