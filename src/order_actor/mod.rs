//! Order storage for the in-memory backend, including the buyer-initiated
//! cancellation.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
