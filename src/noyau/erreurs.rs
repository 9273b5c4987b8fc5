//! Erreurs du noyau.
//!
//! Toutes récupérables localement : aucune n’interrompt la manche.

use thiserror::Error;

/// Refus de l’évaluateur (famille « expression invalide »).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    Vide,
    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),
    #[error("nombre invalide: {0}")]
    NombreInvalide(String),
    #[error("expression mal formée ({0})")]
    MalFormee(&'static str),
}

/// Refus d’une soumission. L’état de la manche n’est pas modifié.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSoumission {
    #[error("Saisissez les trois opérateurs")]
    SaisieIncomplete,
    #[error("Appuyez sur les boutons pour composer l’expression")]
    ExpressionVide,
    #[error("Erreur : {0}")]
    ExpressionInvalide(#[from] ErreurEval),
    #[error("Aucune manche en cours")]
    MancheNonCommencee,
    #[error("La manche est terminée")]
    MancheTerminee,
}

/// Nombre de problèmes hors de l’ensemble autorisé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurMode {
    #[error("mode non autorisé: {0} problèmes")]
    NonAutorise(usize),
}

/// Texte de problème qui n’est pas exactement 4 chiffres.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurProbleme {
    #[error("un problème compte 4 chiffres, reçu {0}")]
    Longueur(usize),
    #[error("caractère non numérique: '{0}'")]
    NonNumerique(char),
}
