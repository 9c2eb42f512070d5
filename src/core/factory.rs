use crate::core::errors::CatalogResult;
use crate::core::strategy::{SpecStrategy, Su7UltraStrategy, Xiaomi14Strategy, Xiaomi15Strategy};
use crate::core::types::ProductModel;
use log::debug;
use uuid::Uuid;

/// Exclusively owned strategy instance handed out by [`StrategyFactory`]
///
/// The handle is neither `Clone` nor `Copy`; every factory call yields a new
/// one with its own `instance_id`. [`SpecHandle::release`] answers the single
/// query and consumes the handle.
pub struct SpecHandle {
    instance_id: Uuid,
    strategy: Box<dyn SpecStrategy>,
}

impl SpecHandle {
    fn new(strategy: Box<dyn SpecStrategy>) -> Self {
        let handle = Self {
            instance_id: Uuid::new_v4(),
            strategy,
        };
        debug!("Created {} strategy {}", handle.model(), handle.instance_id);
        handle
    }

    /// Unique tag of this instance
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn model(&self) -> ProductModel {
        self.strategy.model()
    }

    pub fn spec_string(&self) -> String {
        self.strategy.spec_string()
    }

    /// Query the spec string, then drop the instance
    pub fn release(self) -> String {
        self.spec_string()
    }
}

impl Drop for SpecHandle {
    fn drop(&mut self) {
        debug!("Released {} strategy {}", self.strategy.model(), self.instance_id);
    }
}

impl std::fmt::Debug for SpecHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecHandle")
            .field("instance_id", &self.instance_id)
            .field("model", &self.model())
            .finish()
    }
}

/// Stateless factory mapping product models to spec strategies
pub struct StrategyFactory;

impl StrategyFactory {
    /// Build the bare strategy for a model
    pub fn create_strategy(model: ProductModel) -> Box<dyn SpecStrategy> {
        match model {
            ProductModel::Xiaomi15 => Box::new(Xiaomi15Strategy),
            ProductModel::Xiaomi14 => Box::new(Xiaomi14Strategy),
            ProductModel::Su7Ultra => Box::new(Su7UltraStrategy),
        }
    }

    /// Build an owned handle for a model
    pub fn create(model: ProductModel) -> SpecHandle {
        SpecHandle::new(Self::create_strategy(model))
    }

    /// Build a handle from a raw numeric code
    pub fn create_from_code(code: i64) -> CatalogResult<SpecHandle> {
        let model = ProductModel::from_code(code)?;
        Ok(Self::create(model))
    }

    /// Build a handle from a model name
    pub fn create_from_name(name: &str) -> CatalogResult<SpecHandle> {
        let model: ProductModel = name.parse()?;
        Ok(Self::create(model))
    }
}
