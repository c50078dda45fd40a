// crates/frontend-kernel/src/forms/input_params.rs

use serde_json::{json, Map, Value};

use crate::forms::FormErrors;

/// Paramètres de la macro form-input pour un champ donné.
///
/// Les noms de clés (`id` / `name` / `type` / `classes` / `label.text` /
/// `value` / `hint.text` / `errorMessage`) sont consommés verbatim par la
/// macro ; `id` reprend le fragment `input-<champ>` ciblé par les liens de
/// l'error-summary.
pub fn input_params(
    field: &str,
    question: &str,
    value: Option<&Value>,
    hint: Option<&str>,
    errors: &FormErrors,
) -> Value {
    let mut params = Map::new();
    params.insert("id".to_string(), json!(format!("input-{field}")));
    params.insert("name".to_string(), json!(field));
    params.insert("type".to_string(), json!("text"));
    params.insert("classes".to_string(), json!("app-input"));
    params.insert("label".to_string(), json!({ "text": question }));

    if let Some(value) = value {
        params.insert("value".to_string(), value.clone());
    }

    if let Some(hint) = hint {
        params.insert("hint".to_string(), json!({ "text": hint }));
    }

    if let Some(error) = errors.get(field) {
        let message = match &error.error_message.text {
            Some(text) => json!({ "text": text }),
            None => json!({}),
        };
        params.insert("errorMessage".to_string(), message);
    }

    Value::Object(params)
}
