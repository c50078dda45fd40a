// crates/frontend-kernel/src/forms/options_test.rs

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::forms::{adapt_option, adapt_options};

    #[test]
    fn test_empty_record_maps_to_empty_object() {
        assert_eq!(adapt_option(&json!({})), json!({}));
        assert_eq!(adapt_option(&json!(null)), json!({}));
    }

    #[test]
    fn test_value_defaults_to_label() {
        // Arrange
        let option = json!({ "label": "A" });

        // Act
        let adapted = adapt_option(&option);

        // Assert : pas de clé hint
        assert_eq!(adapted, json!({ "value": "A", "text": "A" }));
    }

    #[test]
    fn test_full_record_is_renamed() {
        // Arrange
        let option = json!({ "label": "A", "value": "v", "description": "d" });

        // Act
        let adapted = adapt_option(&option);

        // Assert
        assert_eq!(
            adapted,
            json!({ "value": "v", "text": "A", "hint": { "text": "d" } })
        );
    }

    #[test]
    fn test_record_without_label_maps_to_empty_object() {
        assert_eq!(adapt_option(&json!({ "value": "v" })), json!({}));
    }

    #[test]
    fn test_adapt_options_preserves_order_and_cardinality() {
        // Arrange
        let options = vec![
            json!({ "label": "B" }),
            json!({}),
            json!({ "label": "A", "description": "first letter" }),
        ];

        // Act
        let adapted = adapt_options(&options);

        // Assert
        assert_eq!(
            adapted,
            vec![
                json!({ "value": "B", "text": "B" }),
                json!({}),
                json!({
                    "value": "A",
                    "text": "A",
                    "hint": { "text": "first letter" }
                }),
            ]
        );
    }
}
