// crates/frontend-kernel/src/forms/mod.rs

mod form_data;
mod form_errors;
mod input_params;
mod options;

pub use form_data::{remove_csrf_token, CSRF_TOKEN_FIELD};
pub use form_errors::{errors_from_form, ErrorMessage, FieldError, FormErrors};
pub use input_params::input_params;
pub use options::{adapt_option, adapt_options};

#[cfg(test)]
mod options_test;
