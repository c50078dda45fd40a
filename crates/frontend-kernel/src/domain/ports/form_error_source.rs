// crates/frontend-kernel/src/domain/ports/form_error_source.rs

/// Port vers la librairie de formulaires de l'application hôte.
///
/// Les accès sont volontairement "duck-typed" côté hôte : seuls l'ordre
/// d'itération des champs en erreur, le libellé et la liste ordonnée des
/// messages nous intéressent ici.
pub trait FormErrorSource {
    /// Champs ayant au moins une erreur, dans l'ordre d'itération
    /// de la collection d'erreurs du formulaire lui-même.
    fn error_fields(&self) -> Vec<String>;

    /// Libellé (texte de la question) associé au champ, s'il existe.
    fn field_label(&self, field: &str) -> Option<String>;

    /// Messages d'erreur du champ, dans l'ordre de validation.
    fn field_errors(&self, field: &str) -> Vec<String>;
}
