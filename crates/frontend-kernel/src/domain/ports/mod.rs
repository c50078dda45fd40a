// crates/frontend-kernel/src/domain/ports/mod.rs

mod form_error_source;
mod form_error_source_stub;
mod session_repository;
mod session_repository_stub;
mod template_renderer;
mod template_renderer_stub;

pub use form_error_source::FormErrorSource;
pub use form_error_source_stub::FormErrorSourceStub;
pub use session_repository::SessionRepository;
pub use session_repository_stub::SessionRepositoryStub;
pub use template_renderer::TemplateRenderer;
pub use template_renderer_stub::TemplateRendererStub;
