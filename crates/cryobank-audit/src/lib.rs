//! cryobank-audit
//!
//! Application-level audit events for treatment planning, logged via
//! `tracing` so they land in the same sink as the rest of the logs.

pub mod error;
pub mod events;
