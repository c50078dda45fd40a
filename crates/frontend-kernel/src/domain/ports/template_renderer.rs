// crates/frontend-kernel/src/domain/ports/template_renderer.rs

use crate::errors::Result;
use serde_json::Value;

/// Port vers le moteur de templates de l'application hôte.
///
/// Un template manquant DOIT remonter en `DomainError::TemplateNotFound`
/// (et non en `Render`) : c'est la seule condition que le resolver de
/// pages d'erreur récupère via son chemin de fallback.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, path: &str, context: &Value) -> Result<String>;
}
