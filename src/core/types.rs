use crate::core::errors::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of product models the factory knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductModel {
    #[serde(rename = "xiaomi15")]
    Xiaomi15,
    #[serde(rename = "xiaomi14")]
    Xiaomi14,
    #[serde(rename = "su7ultra")]
    Su7Ultra,
}

impl ProductModel {
    /// Every model, in declaration order
    pub const ALL: [ProductModel; 3] = [
        ProductModel::Xiaomi15,
        ProductModel::Xiaomi14,
        ProductModel::Su7Ultra,
    ];

    /// Numeric code of the model (its declaration index)
    pub fn code(self) -> i64 {
        match self {
            ProductModel::Xiaomi15 => 0,
            ProductModel::Xiaomi14 => 1,
            ProductModel::Su7Ultra => 2,
        }
    }

    /// Resolve a raw numeric code, as an untyped caller would pass it
    pub fn from_code(code: i64) -> CatalogResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.code() == code)
            .ok_or_else(|| CatalogError::UnknownProduct(format!("code {}", code)))
    }

    /// Lowercase name used in spec strings and configuration
    pub fn name(self) -> &'static str {
        match self {
            ProductModel::Xiaomi15 => "xiaomi15",
            ProductModel::Xiaomi14 => "xiaomi14",
            ProductModel::Su7Ultra => "su7ultra",
        }
    }
}

impl std::fmt::Display for ProductModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProductModel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownProduct(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        let codes: Vec<i64> = ProductModel::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn test_from_code_round_trips_known_codes() {
        for model in ProductModel::ALL {
            assert_eq!(ProductModel::from_code(model.code()), Ok(model));
        }
    }

    #[test]
    fn test_from_code_rejects_out_of_range() {
        assert_eq!(
            ProductModel::from_code(3),
            Err(CatalogError::UnknownProduct("code 3".to_string()))
        );
        assert!(ProductModel::from_code(-1).is_err());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Su7Ultra".parse::<ProductModel>(), Ok(ProductModel::Su7Ultra));
        assert_eq!(" XIAOMI14 ".parse::<ProductModel>(), Ok(ProductModel::Xiaomi14));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "xiaomi13".parse::<ProductModel>().unwrap_err();
        assert_eq!(err, CatalogError::UnknownProduct("xiaomi13".to_string()));
        assert_eq!(err.to_string(), "Unknown product: xiaomi13");
    }

    #[test]
    fn test_display_uses_lowercase_name() {
        assert_eq!(ProductModel::Su7Ultra.to_string(), "su7ultra");
    }
}
