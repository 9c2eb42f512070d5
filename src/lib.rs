pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::client::{describe, describe_all, describe_code, describe_name, print_specs};
pub use crate::core::config::{CatalogConfig, ConcurrencyMode};
pub use crate::core::errors::{CatalogError, CatalogResult};
pub use crate::core::factory::{SpecHandle, StrategyFactory};
pub use crate::core::strategy::SpecStrategy;
pub use crate::core::types::ProductModel;
