// crates/frontend-kernel/src/forms/form_data.rs

use serde_json::{Map, Value};

/// Nom du champ anti-forgery injecté par le middleware CSRF dans les
/// données soumises.
pub const CSRF_TOKEN_FIELD: &str = "csrf_token";

/// Copie superficielle des données soumises, sans le jeton CSRF.
///
/// Le middleware CSRF inclut `csrf_token` dans `form.data`, et l'API en
/// aval valide strictement ses entrées : le jeton doit donc être retiré
/// avant de transmettre les données telles quelles.
pub fn remove_csrf_token(data: &Map<String, Value>) -> Map<String, Value> {
    let mut cleaned = data.clone();
    cleaned.remove(CSRF_TOKEN_FIELD);
    cleaned
}
