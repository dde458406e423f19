//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the state transitions so route handlers can stay
//! focused on protocol translation.

pub mod backend;
pub mod session;
