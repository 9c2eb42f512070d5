//! Configuration for catalog queries
//!
//! This module provides configuration types for controlling how batches of
//! spec queries are executed, including concurrency settings and the set of
//! models the demonstration entry point walks through.

use crate::core::errors::{CatalogError, CatalogResult};
use crate::core::types::ProductModel;
use log::warn;

/// Environment variable holding a comma-separated list of model names
pub const MODELS_ENV: &str = "PRODCAT_MODELS";
/// Environment variable holding the rayon pool size
pub const THREADS_ENV: &str = "PRODCAT_THREADS";

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    /// Queries run one after another on the calling thread
    #[default]
    Sequential,
    /// Queries run on a rayon pool, results keep input order
    Rayon,
}

/// Configuration for batch queries
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// The concurrency mode to use for execution
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel execution
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
    /// Models queried by the demonstration, in order
    pub models: Vec<ProductModel>,
}

impl CatalogConfig {
    /// Create a new configuration with default values
    ///
    /// Default configuration is sequential and queries every model
    pub fn new() -> Self {
        Self {
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            models: ProductModel::ALL.to_vec(),
        }
    }

    /// Set the concurrency mode for batch queries
    ///
    /// # Arguments
    /// * `mode` - The concurrency mode to use
    ///
    /// # Returns
    /// A new configuration with the specified concurrency mode
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel execution
    ///
    /// # Arguments
    /// * `size` - The number of threads to use in the thread pool
    ///
    /// # Returns
    /// A new configuration with the specified thread pool size
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Set the models a batch query walks through
    ///
    /// # Arguments
    /// * `models` - The models to query, in output order
    ///
    /// # Returns
    /// A new configuration with the specified model list
    pub fn with_models(mut self, models: Vec<ProductModel>) -> Self {
        self.models = models;
        self
    }

    /// Load overrides from `PRODCAT_MODELS` and `PRODCAT_THREADS`
    pub fn from_env() -> CatalogResult<Self> {
        let models = std::env::var(MODELS_ENV).ok();
        let threads = std::env::var(THREADS_ENV).ok();
        Self::from_vars(models.as_deref(), threads.as_deref())
    }

    /// Build a configuration from raw variable values
    ///
    /// A thread count switches the configuration to rayon mode.
    pub fn from_vars(models: Option<&str>, threads: Option<&str>) -> CatalogResult<Self> {
        let mut config = Self::new();

        if let Some(list) = models.filter(|list| !list.trim().is_empty()) {
            let parsed = list
                .split(',')
                .map(str::parse::<ProductModel>)
                .collect::<CatalogResult<Vec<_>>>()?;
            config = config.with_models(parsed);
        }

        if let Some(raw) = threads {
            let size: usize = raw.trim().parse().map_err(|_| {
                CatalogError::InvalidConfig(format!("{} must be a positive integer, got '{}'", THREADS_ENV, raw))
            })?;
            if size == 0 {
                return Err(CatalogError::InvalidConfig(format!("{} must be at least 1", THREADS_ENV)));
            }
            config = config
                .with_concurrency(ConcurrencyMode::Rayon)
                .with_thread_pool_size(size);
        }

        Ok(config)
    }

    /// Configuration for the demonstration entry point
    ///
    /// Always queries every model in declaration order. A valid thread count
    /// moves the queries onto a rayon pool; anything else is logged and the
    /// queries stay sequential.
    ///
    /// # Arguments
    /// * `threads` - Raw `PRODCAT_THREADS` value, if set
    pub fn demonstration(threads: Option<&str>) -> Self {
        match Self::from_vars(None, threads) {
            Ok(config) => config.with_models(ProductModel::ALL.to_vec()),
            Err(e) => {
                warn!("Ignoring {}: {}", THREADS_ENV, e);
                Self::new()
            }
        }
    }

    /// [`CatalogConfig::demonstration`] fed from the environment
    pub fn demonstration_from_env() -> Self {
        let threads = std::env::var(THREADS_ENV).ok();
        Self::demonstration(threads.as_deref())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}
