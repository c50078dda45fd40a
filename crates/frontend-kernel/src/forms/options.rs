// crates/frontend-kernel/src/forms/options.rs

use serde_json::{json, Map, Value};

/// Adapte un record d'option (convention `label` / `value` / `description`)
/// vers les champs attendus par la macro de sélection cible
/// (`value` / `text` / `hint.text`).
///
/// `value` retombe sur `label` quand il est absent ; sans `description`,
/// aucune clé `hint` n'est produite. Une entrée vide ou sans `label`
/// produit un objet vide.
pub fn adapt_option(option: &Value) -> Value {
    let Some(record) = option.as_object().filter(|record| !record.is_empty()) else {
        return json!({});
    };

    let Some(label) = record.get("label") else {
        return json!({});
    };

    let mut adapted = Map::new();
    adapted.insert(
        "value".to_string(),
        record.get("value").unwrap_or(label).clone(),
    );
    adapted.insert("text".to_string(), label.clone());

    if let Some(description) = record.get("description") {
        adapted.insert("hint".to_string(), json!({ "text": description }));
    }

    Value::Object(adapted)
}

/// Adaptation élément par élément : ordre et cardinalité préservés.
pub fn adapt_options(options: &[Value]) -> Vec<Value> {
    options.iter().map(adapt_option).collect()
}
