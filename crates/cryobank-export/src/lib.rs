//! cryobank-export
//!
//! Free-text clinical notes for the treatment-record API, rendered from Tera
//! templates.

pub mod error;
pub mod note;
pub mod render;
