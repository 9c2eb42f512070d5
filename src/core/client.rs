use crate::core::config::{CatalogConfig, ConcurrencyMode};
use crate::core::errors::{CatalogError, CatalogResult};
use crate::core::factory::StrategyFactory;
use crate::core::types::ProductModel;
use log::debug;
use rayon::prelude::*;
use std::io::Write;

/// Resolve the spec string of a model
///
/// A fresh strategy is built, queried once and released before returning.
pub fn describe(model: ProductModel) -> String {
    StrategyFactory::create(model).release()
}

/// Resolve the spec string for a raw numeric model code
pub fn describe_code(code: i64) -> CatalogResult<String> {
    let handle = StrategyFactory::create_from_code(code)?;
    Ok(handle.release())
}

/// Resolve the spec string for a model name
pub fn describe_name(name: &str) -> CatalogResult<String> {
    let handle = StrategyFactory::create_from_name(name)?;
    Ok(handle.release())
}

/// Resolve a batch of models, preserving input order
pub fn describe_all(models: &[ProductModel], config: &CatalogConfig) -> CatalogResult<Vec<String>> {
    match config.concurrency_mode {
        ConcurrencyMode::Sequential => Ok(models.iter().copied().map(describe).collect()),
        ConcurrencyMode::Rayon => match config.thread_pool_size {
            Some(size) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(size)
                    .build()
                    .map_err(|e| CatalogError::InvalidConfig(format!("thread pool: {}", e)))?;
                debug!("Describing {} models on a {}-thread pool", models.len(), size);
                Ok(pool.install(|| models.par_iter().copied().map(describe).collect()))
            }
            None => Ok(models.par_iter().copied().map(describe).collect()),
        },
    }
}

/// Write one spec string per line, in query order
pub fn print_specs<W: Write>(writer: &mut W, config: &CatalogConfig) -> Result<(), Box<dyn std::error::Error>> {
    for spec in describe_all(&config.models, config)? {
        writeln!(writer, "{}", spec)?;
    }
    Ok(())
}
