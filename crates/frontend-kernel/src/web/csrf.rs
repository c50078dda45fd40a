// crates/frontend-kernel/src/web/csrf.rs

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use url::form_urlencoded;

use crate::domain::ports::TemplateRenderer;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::web::{render_error_page_for, RequestContext, RequestError};

/// Chemin de la page de connexion des applications frontend.
pub const LOGIN_PATH: &str = "/user/login";

/// URL de redirection vers la connexion, avec le chemin d'origine
/// percent-encodé dans le paramètre `next`.
pub fn login_redirect_url(next: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("next", next)
        .finish();

    format!("{LOGIN_PATH}?{query}")
}

/// Redirige (302) vers la page de connexion, en conservant le chemin
/// d'origine pour y revenir après authentification. Sert aussi de
/// handler pour les rejets "forbidden" génériques.
pub fn redirect_to_login(ctx: &RequestContext) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, login_redirect_url(ctx.path()))],
    )
        .into_response()
}

/// Handler des rejets 400 produits par le middleware CSRF.
///
/// Un échec CSRF signifie presque toujours une session expirée côté
/// navigateur : on renvoie l'utilisateur vers la connexion plutôt que de
/// lui montrer une page d'erreur. Les autres rejets passent par le
/// resolver de pages d'erreur habituel.
pub fn csrf_handler(
    renderer: &dyn TemplateRenderer,
    ctx: &RequestContext,
    rejection: &RequestError,
) -> AppResult<Response> {
    match rejection {
        RequestError::InvalidCsrfToken => {
            match ctx.user_id() {
                Some(user_id) => {
                    tracing::info!(user_id, "csrf.invalid_token: aborting request");
                }
                None => {
                    tracing::info!("csrf.session_expired: redirecting user to log in page");
                }
            }

            Ok(redirect_to_login(ctx))
        }
        other => {
            let (body, status) = render_error_page_for(renderer, other, None)?;
            let status = StatusCode::from_u16(status)
                .map_err(|e| AppError::new(ErrorCode::InternalError, e.to_string()))?;

            Ok((status, Html(body)).into_response())
        }
    }
}
