// crates/frontend-kernel/src/web/error_pages_test.rs

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::ports::TemplateRendererStub;
    use crate::errors::DomainError;
    use crate::web::{render_error_page, render_error_page_for, HttpError, RequestError};

    struct CodelessError;

    impl HttpError for CodelessError {
        fn status_code(&self) -> Option<u16> {
            None
        }
    }

    #[test]
    fn test_known_codes_render_their_own_template() {
        for (status_code, expected_template) in [
            (400, "errors/400.html"),
            (404, "errors/404.html"),
            (410, "errors/410.html"),
            (500, "errors/500.html"),
        ] {
            // Arrange
            let renderer = TemplateRendererStub::default();

            // Act
            let (body, status) = render_error_page(&renderer, status_code, None).unwrap();

            // Assert
            assert_eq!(body, format!("rendered:{expected_template}"));
            assert_eq!(status, status_code);
            assert_eq!(renderer.rendered_paths(), vec![expected_template]);
        }
    }

    #[test]
    fn test_503_keeps_its_status_but_renders_the_500_template() {
        // Arrange
        let renderer = TemplateRendererStub::default();

        // Act
        let (body, status) = render_error_page(&renderer, 503, None).unwrap();

        // Assert
        assert_eq!(body, "rendered:errors/500.html");
        assert_eq!(status, 503);
    }

    #[test]
    fn test_unknown_code_is_normalized_to_500() {
        // Arrange
        let renderer = TemplateRendererStub::default();

        // Act : 999 n'est dans aucune table
        let (body, status) = render_error_page(&renderer, 999, None).unwrap();

        // Assert : template ET statut retombent sur 500
        assert_eq!(body, "rendered:errors/500.html");
        assert_eq!(status, 500);
    }

    #[test]
    fn test_teapot_like_code_is_normalized_to_500() {
        // Arrange
        let renderer = TemplateRendererStub::default();

        // Act
        let (_, status) = render_error_page(&renderer, 418, None).unwrap();

        // Assert
        assert_eq!(status, 500);
        assert_eq!(renderer.rendered_paths(), vec!["errors/500.html"]);
    }

    #[test]
    fn test_missing_primary_template_falls_back_to_toolkit() {
        // Arrange
        let renderer = TemplateRendererStub::with_missing(["errors/500.html"]);

        // Act
        let (body, status) = render_error_page(&renderer, 500, None).unwrap();

        // Assert
        assert_eq!(body, "rendered:toolkit/errors/500.html");
        assert_eq!(status, 500);
        assert_eq!(
            renderer.rendered_paths(),
            vec!["errors/500.html", "toolkit/errors/500.html"]
        );
    }

    #[test]
    fn test_fallback_receives_the_same_error_message_context() {
        // Arrange
        let renderer = TemplateRendererStub::with_missing(["errors/500.html"]);

        // Act
        let (body, _) = render_error_page(&renderer, 500, Some("Hole in Teapot")).unwrap();

        // Assert : même contexte sur les deux rendus
        assert_eq!(body, "rendered:toolkit/errors/500.html");
        let calls = renderer.calls.lock().unwrap();
        let expected_context = json!({ "error_message": "Hole in Teapot" });
        assert_eq!(calls[0].1, expected_context);
        assert_eq!(calls[1].1, expected_context);
    }

    #[test]
    fn test_missing_fallback_template_propagates() {
        // Arrange
        let renderer =
            TemplateRendererStub::with_missing(["errors/500.html", "toolkit/errors/500.html"]);

        // Act
        let result = render_error_page(&renderer, 500, None);

        // Assert
        assert_eq!(
            result,
            Err(DomainError::TemplateNotFound {
                path: "toolkit/errors/500.html".to_string()
            })
        );
        assert!(result.unwrap_err().is_template_not_found());
    }

    #[test]
    fn test_other_rendering_failures_are_not_recovered() {
        // Arrange
        let renderer = TemplateRendererStub {
            fail_all: true,
            ..Default::default()
        };

        // Act
        let result = render_error_page(&renderer, 404, None);

        // Assert : un seul rendu tenté, pas de fallback
        assert!(matches!(result, Err(DomainError::Render { .. })));
        assert_eq!(renderer.rendered_paths(), vec!["errors/404.html"]);
    }

    #[test]
    fn test_error_without_status_code_defaults_to_500() {
        // Arrange
        let renderer = TemplateRendererStub::default();

        // Act
        let (_, status) = render_error_page_for(&renderer, &CodelessError, None).unwrap();

        // Assert
        assert_eq!(status, 500);
        assert_eq!(renderer.rendered_paths(), vec!["errors/500.html"]);
    }

    #[test]
    fn test_error_with_status_code_delegates_to_the_table() {
        // Arrange
        let renderer = TemplateRendererStub::default();

        // Act
        let (_, status) =
            render_error_page_for(&renderer, &RequestError::Status(404), None).unwrap();

        // Assert
        assert_eq!(status, 404);
        assert_eq!(renderer.rendered_paths(), vec!["errors/404.html"]);
    }
}
