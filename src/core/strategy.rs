use crate::core::types::ProductModel;

/// Product specification strategy
///
/// Each implementer is stateless and answers with a fixed, model-specific
/// spec string. Implementers must be `Send + Sync`.
pub trait SpecStrategy: Send + Sync {
    /// The model this strategy describes
    fn model(&self) -> ProductModel;

    /// Specification string in `<model>:<chip>` form
    fn spec_string(&self) -> String;
}

/// Xiaomi 15
#[derive(Debug, Default)]
pub struct Xiaomi15Strategy;

impl SpecStrategy for Xiaomi15Strategy {
    fn model(&self) -> ProductModel {
        ProductModel::Xiaomi15
    }

    fn spec_string(&self) -> String {
        "xiaomi15:8elite".to_string()
    }
}

/// Xiaomi 14
#[derive(Debug, Default)]
pub struct Xiaomi14Strategy;

impl SpecStrategy for Xiaomi14Strategy {
    fn model(&self) -> ProductModel {
        ProductModel::Xiaomi14
    }

    fn spec_string(&self) -> String {
        "xiaomi14:8gen3".to_string()
    }
}

/// SU7 Ultra
#[derive(Debug, Default)]
pub struct Su7UltraStrategy;

impl SpecStrategy for Su7UltraStrategy {
    fn model(&self) -> ProductModel {
        ProductModel::Su7Ultra
    }

    fn spec_string(&self) -> String {
        "su7ultra:v8s".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_report_their_model() {
        assert_eq!(Xiaomi15Strategy.model(), ProductModel::Xiaomi15);
        assert_eq!(Xiaomi14Strategy.model(), ProductModel::Xiaomi14);
        assert_eq!(Su7UltraStrategy.model(), ProductModel::Su7Ultra);
    }

    #[test]
    fn test_spec_string_is_prefixed_with_model_name() {
        let strategies: Vec<Box<dyn SpecStrategy>> = vec![
            Box::new(Xiaomi15Strategy),
            Box::new(Xiaomi14Strategy),
            Box::new(Su7UltraStrategy),
        ];

        for strategy in strategies {
            let spec = strategy.spec_string();
            let (prefix, chip) = spec.split_once(':').expect("spec has a ':' separator");
            assert_eq!(prefix, strategy.model().name());
            assert!(!chip.is_empty());
        }
    }

    #[test]
    fn test_spec_string_is_stable_across_calls() {
        let strategy = Su7UltraStrategy;
        assert_eq!(strategy.spec_string(), strategy.spec_string());
    }
}
