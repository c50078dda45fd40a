// crates/frontend-kernel/src/web/mod.rs

mod csrf;
mod error_pages;
mod http_error;
mod request_context;

pub use csrf::{csrf_handler, login_redirect_url, redirect_to_login, LOGIN_PATH};
pub use error_pages::{render_error_page, render_error_page_for};
pub use http_error::{HttpError, RequestError};
pub use request_context::RequestContext;

#[cfg(test)]
mod error_pages_test;
