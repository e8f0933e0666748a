//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod storefront_system;
pub mod tracing;

pub use self::config::*;
pub use self::error::*;
pub use self::storefront_system::*;
pub use self::tracing::*;
