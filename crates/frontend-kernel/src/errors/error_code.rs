// crates/frontend-kernel/src/errors/error_code.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    TemplateNotFound,
    RenderFailed,
    ServiceNotFound,
    InvalidDiscoveryDocument,
    InfrastructureFailure,
    InternalError,
}
