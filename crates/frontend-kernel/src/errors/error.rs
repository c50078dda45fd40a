// crates/frontend-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Le template demandé n'existe pas. Récupérable une seule fois
    /// via le chemin de fallback (voir `web::error_pages`).
    #[error("template not found: '{path}'")]
    TemplateNotFound { path: String },

    /// Toute autre erreur de rendu. Jamais récupérée localement.
    #[error("failed to render '{path}': {reason}")]
    Render { path: String, reason: String },

    /// Service absent du document de service discovery. Fatal au démarrage.
    #[error("service '{name}' not found in the discovery document")]
    ServiceNotFound { name: String },

    #[error("invalid service discovery document: {reason}")]
    Discovery { reason: String },

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Utilisé par le resolver de pages d'erreur pour décider du fallback
    pub fn is_template_not_found(&self) -> bool {
        matches!(self, Self::TemplateNotFound { .. })
    }
}
