// crates/frontend-kernel/src/infrastructure/bootstrap/session_test.rs

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::errors::ErrorCode;
    use crate::infrastructure::bootstrap::{init_session_repository, SessionConfig};
    use crate::infrastructure::discovery::ServiceRegistry;

    #[tokio::test]
    async fn test_missing_service_in_discovery_is_fatal() {
        // Arrange : document sans le service de sessions
        let registry = ServiceRegistry::from_json(
            r#"{ "frontend-postgres": { "credentials": { "url": "postgres://db" } } }"#,
        )
        .unwrap();

        let config = SessionConfig {
            redis_service_name: "frontend-redis".to_string(),
            max_clients: 2,
            default_ttl: Duration::from_secs(3600),
        };

        // Act
        let result = init_session_repository(&registry, &config).await;

        // Assert : le lookup échoue avant toute connexion redis
        let error = result.err().unwrap();
        assert_eq!(error.code, ErrorCode::ServiceNotFound);
    }
}
