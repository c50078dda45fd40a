// crates/frontend-kernel/src/infrastructure/discovery/service_registry.rs

use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceBinding {
    pub credentials: Credentials,
}

/// Document de service discovery fourni au démarrage : services liés,
/// indexés par nom, chacun exposant ses credentials de connexion.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ServiceRegistry {
    services: HashMap<String, ServiceBinding>,
}

impl ServiceRegistry {
    pub fn from_json(document: &str) -> Result<Self> {
        serde_json::from_str(document).map_err(|e| DomainError::Discovery {
            reason: e.to_string(),
        })
    }

    /// Lit le document depuis la variable d'environnement du processus.
    pub fn from_env(var: &str) -> Result<Self> {
        let document = std::env::var(var).map_err(|_| DomainError::Discovery {
            reason: format!("{var} must be set"),
        })?;

        Self::from_json(&document)
    }

    pub fn get(&self, name: &str) -> Result<&ServiceBinding> {
        self.services
            .get(name)
            .ok_or_else(|| DomainError::ServiceNotFound {
                name: name.to_string(),
            })
    }

    /// URL de connexion du service nommé.
    pub fn url(&self, name: &str) -> Result<&str> {
        Ok(self.get(name)?.credentials.url.as_str())
    }
}
