// crates/frontend-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : adaptateurs de formulaires, ports (renderer, discovery).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : bootstrap de session, handlers HTTP.
pub type AppResult<T> = std::result::Result<T, AppError>;
