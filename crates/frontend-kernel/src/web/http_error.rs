// crates/frontend-kernel/src/web/http_error.rs

use thiserror::Error;

/// Erreur HTTP portant (ou non) un code de statut numérique.
///
/// Les erreurs du framework hôte qui ne portent pas de code sont résolues
/// en 500 par le resolver de pages d'erreur.
pub trait HttpError {
    fn status_code(&self) -> Option<u16>;
}

/// Rejets de requête produits par les middlewares de l'application
/// (protection CSRF, contrôle d'accès).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("the CSRF token is missing or invalid")]
    InvalidCsrfToken,

    #[error("forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("HTTP error with status {0}")]
    Status(u16),
}

impl HttpError for RequestError {
    fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidCsrfToken => Some(400),
            Self::Forbidden { .. } => Some(403),
            Self::Status(code) => Some(*code),
        }
    }
}
