// crates/frontend-kernel/src/domain/ports/form_error_source_stub.rs

use crate::domain::ports::FormErrorSource;

/// Formulaire en mémoire pour les tests : une entrée par champ,
/// dans l'ordre d'insertion.
#[derive(Default)]
pub struct FormErrorSourceStub {
    fields: Vec<(String, Option<String>, Vec<String>)>,
}

impl FormErrorSourceStub {
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        label: Option<&str>,
        errors: &[&str],
    ) -> Self {
        self.fields.push((
            name.into(),
            label.map(str::to_string),
            errors.iter().map(|e| e.to_string()).collect(),
        ));
        self
    }
}

impl FormErrorSource for FormErrorSourceStub {
    fn error_fields(&self) -> Vec<String> {
        self.fields.iter().map(|(name, _, _)| name.clone()).collect()
    }

    fn field_label(&self, field: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(name, _, _)| name == field)
            .and_then(|(_, label, _)| label.clone())
    }

    fn field_errors(&self, field: &str) -> Vec<String> {
        self.fields
            .iter()
            .find(|(name, _, _)| name == field)
            .map(|(_, _, errors)| errors.clone())
            .unwrap_or_default()
    }
}
