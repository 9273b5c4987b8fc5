//! Noyau Make 10
//!
//! Organisation interne :
//! - jetons.rs       : validation des caractères + tokenisation
//! - rpn.rs          : shunting-yard + évaluation f64
//! - eval.rs         : pipeline complet + jugement (|v − 10| < ε)
//! - operateur.rs    : + − × ÷
//! - parens.rs       : paires de parenthèses (ensemble, bascule)
//! - historique.rs   : pile d’annulation
//! - construction.rs : formes évaluable / affichage
//! - problemes.rs    : problèmes, modes, solveur, banque
//! - horloge.rs      : temps injectable
//! - format.rs       : textes (résultat, chrono, message de fin)
//! - manche.rs       : machine à états d’une manche

pub mod construction;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod historique;
pub mod horloge;
pub mod jetons;
pub mod manche;
pub mod operateur;
pub mod parens;
pub mod problemes;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use manche::{DernierResultat, EtatManche, Evenement, Intention, Manche};
pub use operateur::Operateur;
pub use problemes::Mode;
