// crates/frontend-kernel/src/web/request_context.rs

/// Vue minimale de la requête en cours : chemin d'origine et session
/// utilisateur éventuelle. Construite par l'application hôte depuis son
/// propre contexte de requête.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    path: String,
    user_id: Option<u64>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }
}
