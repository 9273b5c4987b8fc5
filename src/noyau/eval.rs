//! Noyau - évaluation (pipeline réel)
//!
//! normalise/valide -> jetons -> RPN -> valeur f64 -> jugement (|v − 10| < ε)
//!
//! Aucun évaluateur dynamique : seuls les jetons de `jetons.rs` existent.

use super::erreurs::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Valeur à atteindre.
pub const CIBLE: f64 = 10.0;

/// Tolérance du jugement (absorbe les arrondis de 1/3*3, etc.).
pub const EPSILON: f64 = 1e-4;

/// API publique : évalue une expression arithmétique.
///
/// Une division par zéro donne inf/NaN, pas une erreur : c’est le jugement
/// qui la classe « incorrecte ».
pub fn evaluer(expression: &str) -> Result<f64, ErreurEval> {
    let jetons = tokenize(expression)?;
    let rpn = to_rpn(&jetons)?;
    let valeur = eval_rpn(&rpn)?;

    tracing::trace!(
        expression,
        rpn = %format_tokens(&rpn),
        valeur,
        "expression évaluée"
    );

    Ok(valeur)
}

/// Jugement : vrai seulement pour un résultat fini à moins de ε de la cible.
pub fn est_correct(valeur: f64) -> bool {
    valeur.is_finite() && (valeur - CIBLE).abs() < EPSILON
}
