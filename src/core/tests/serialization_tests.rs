#[cfg(test)]
mod tests {
    use crate::core::types::ProductModel;

    #[test]
    fn test_models_serialize_as_lowercase_names() {
        let json = serde_json::to_string(&ProductModel::ALL).unwrap();
        assert_eq!(json, r#"["xiaomi15","xiaomi14","su7ultra"]"#);
    }

    #[test]
    fn test_serialized_name_matches_display() {
        for model in ProductModel::ALL {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model));
        }
    }

    #[test]
    fn test_unknown_name_fails_to_deserialize() {
        let result: Result<ProductModel, _> = serde_json::from_str("\"xiaomi13\"");
        assert!(result.is_err());
    }
}
