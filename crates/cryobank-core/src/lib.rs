//! cryobank-core
//!
//! Pure domain types for treatment planning: clinical observations, the raw
//! diagnosis form, recommendations, the editable treatment selection and
//! diagnosis codes. No I/O; this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
