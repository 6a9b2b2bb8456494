pub mod core;
mod config;

// Public re-exports for easy access
pub use crate::config::FlagConfig;
pub use crate::core::error::ConfigError;
pub use crate::core::feature::Feature;
pub use crate::core::hooks::{FailureHook, PanicHook, Violation};
pub use crate::core::store::{OverrideEntry, OverrideStore};
