pub mod client;
pub mod config;
pub mod errors;
pub mod factory;
pub mod strategy;
pub mod types;

#[cfg(test)]
mod tests;
