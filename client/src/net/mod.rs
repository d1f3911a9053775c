//! Networking modules for the backend auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser implementation of the core crate's `SessionApi`; the
//! wire schema and error taxonomy live in `storefront::net`.

pub mod api;
