// crates/frontend-kernel/src/domain/ports/template_renderer_stub.rs

use std::collections::HashSet;
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::ports::TemplateRenderer;
use crate::errors::{DomainError, Result};

/// Renderer en mémoire pour les tests : renvoie `rendered:<path>` et
/// enregistre chaque appel (chemin + contexte).
#[derive(Default)]
pub struct TemplateRendererStub {
    pub missing: HashSet<String>,
    pub fail_all: bool,
    pub calls: Mutex<Vec<(String, Value)>>,
}

impl TemplateRendererStub {
    pub fn with_missing<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            missing: paths.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn rendered_paths(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl TemplateRenderer for TemplateRendererStub {
    fn render(&self, path: &str, context: &Value) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), context.clone()));

        if self.fail_all {
            return Err(DomainError::Render {
                path: path.to_string(),
                reason: "Renderer Down".into(),
            });
        }

        if self.missing.contains(path) {
            return Err(DomainError::TemplateNotFound {
                path: path.to_string(),
            });
        }

        Ok(format!("rendered:{path}"))
    }
}
