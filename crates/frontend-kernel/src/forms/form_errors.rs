// crates/frontend-kernel/src/forms/form_errors.rs

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::ports::FormErrorSource;

/// Paramètre `errorMessage` des macros de composants : `{ "text": ... }`,
/// ou objet vide quand le message est vide.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ErrorMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Erreur d'un champ, sous les conventions de nommage des deux familles
/// de macros consommatrices. Seul le premier message de validation du
/// champ est exposé, dupliqué sous chaque convention.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FieldError {
    // paramètres des bandeaux de validation du toolkit
    pub input_name: String,
    pub question: String,
    pub message: String,

    // paramètres de la macro error-summary
    pub text: String,
    pub href: String,

    // paramètre errorMessage des macros de champs
    #[serde(rename = "errorMessage")]
    pub error_message: ErrorMessage,
}

/// Mapping ordonné champ → `FieldError`.
///
/// L'ordre d'itération est celui de la collection d'erreurs du
/// formulaire source ; la sérialisation JSON le préserve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    entries: Vec<(String, FieldError)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.entries.push((field.into(), error));
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, error)| error)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Valeurs dans l'ordre d'insertion, pour `errorList` de la macro
    /// error-summary.
    pub fn values(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter().map(|(_, error)| error)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.entries
            .iter()
            .map(|(name, error)| (name.as_str(), error))
    }
}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, error) in &self.entries {
            map.serialize_entry(field, error)?;
        }
        map.end()
    }
}

/// Convertit les erreurs de validation d'un formulaire vers le format
/// commun attendu par les templates.
///
/// Le dictionnaire résultant sert à la fois les bandeaux de validation du
/// toolkit (`input_name` / `question` / `message`) et les macros de
/// composants (`text` / `href` / `errorMessage`), ce qui permet de traiter
/// toutes les sources de formulaires de la même façon dans les templates.
pub fn errors_from_form(form: &dyn FormErrorSource) -> FormErrors {
    let mut errors = FormErrors::new();

    for field in form.error_fields() {
        let messages = form.field_errors(&field);

        // Un champ sans message n'a pas d'entrée du tout
        let Some(first) = messages.first() else {
            continue;
        };

        let question = form
            .field_label(&field)
            .unwrap_or_else(|| field.clone());

        let error_message = if first.is_empty() {
            ErrorMessage::default()
        } else {
            ErrorMessage {
                text: Some(first.clone()),
            }
        };

        let error = FieldError {
            input_name: field.clone(),
            question,
            message: first.clone(),
            text: first.clone(),
            href: format!("#input-{field}"),
            error_message,
        };

        errors.insert(field, error);
    }

    errors
}
