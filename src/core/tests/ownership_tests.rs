#[cfg(test)]
mod tests {
    use crate::core::client::describe;
    use crate::core::factory::StrategyFactory;
    use crate::core::types::ProductModel;
    use rayon::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_concurrent_creations_never_share_an_instance() {
        // Every parallel query builds its own handle
        let ids: Vec<_> = (0..300)
            .into_par_iter()
            .map(|i| {
                let model = ProductModel::ALL[i % ProductModel::ALL.len()];
                let handle = StrategyFactory::create(model);
                let id = handle.instance_id();
                assert_eq!(handle.release(), describe(model));
                id
            })
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_same_model_yields_identical_specs_in_any_order() {
        let forward: Vec<String> = ProductModel::ALL.iter().map(|m| describe(*m)).collect();
        let mut backward: Vec<String> = ProductModel::ALL.iter().rev().map(|m| describe(*m)).collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_factory_is_usable_from_plain_threads() {
        let workers: Vec<_> = ProductModel::ALL
            .iter()
            .map(|model| {
                let model = *model;
                std::thread::spawn(move || StrategyFactory::create(model).release())
            })
            .collect();

        let specs: Vec<String> = workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect();
        assert_eq!(specs, vec!["xiaomi15:8elite", "xiaomi14:8gen3", "su7ultra:v8s"]);
    }
}
