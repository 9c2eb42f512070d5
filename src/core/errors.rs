/// Errors raised by the product catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Identifier outside the recognized product set
    UnknownProduct(String),
    /// Malformed configuration value
    InvalidConfig(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownProduct(id) => write!(f, "Unknown product: {}", id),
            CatalogError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

pub type CatalogResult<T> = Result<T, CatalogError>;
