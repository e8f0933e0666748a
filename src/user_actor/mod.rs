//! Customer accounts for the in-memory backend.

pub mod entity;
pub mod error;

pub use error::*;
