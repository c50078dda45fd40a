// crates/frontend-kernel/src/web/error_pages.rs

use serde_json::json;

use crate::domain::ports::TemplateRenderer;
use crate::errors::{DomainError, Result};
use crate::web::HttpError;

/// Préfixe du chemin de fallback, tenté une seule fois quand le template
/// primaire est absent.
const FALLBACK_PREFIX: &str = "toolkit/";

/// Table fixe code → template. Un code hors table est normalisé en 500
/// (template ET statut retourné) ; 503 garde son statut mais rend le
/// template 500.
fn template_for(status_code: u16) -> (&'static str, u16) {
    match status_code {
        400 => ("errors/400.html", 400),
        404 => ("errors/404.html", 404),
        410 => ("errors/410.html", 410),
        500 => ("errors/500.html", 500),
        503 => ("errors/500.html", 503),
        _ => ("errors/500.html", 500),
    }
}

/// Rend la page d'erreur du code donné : `(corps, statut)`.
///
/// Un `TemplateNotFound` sur le template primaire est récupéré une fois
/// via le chemin `toolkit/`, avec le même contexte ; un fallback absent,
/// ou toute autre erreur de rendu, est propagé tel quel.
pub fn render_error_page(
    renderer: &dyn TemplateRenderer,
    status_code: u16,
    error_message: Option<&str>,
) -> Result<(String, u16)> {
    let (template, status) = template_for(status_code);
    let context = json!({ "error_message": error_message });

    match renderer.render(template, &context) {
        Ok(body) => Ok((body, status)),
        Err(DomainError::TemplateNotFound { .. }) => {
            let fallback = format!("{FALLBACK_PREFIX}{template}");
            let body = renderer.render(&fallback, &context)?;
            Ok((body, status))
        }
        Err(other) => Err(other),
    }
}

/// Variante par exception : délègue avec le code porté par l'erreur,
/// 500 par défaut quand elle n'en porte pas.
pub fn render_error_page_for(
    renderer: &dyn TemplateRenderer,
    error: &dyn HttpError,
    error_message: Option<&str>,
) -> Result<(String, u16)> {
    render_error_page(renderer, error.status_code().unwrap_or(500), error_message)
}
