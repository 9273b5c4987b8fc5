// src/noyau/construction.rs
//
// Forme canonique de la saisie courante.
//
// Pour chaque position 0..4 :
//   '(' par paire ouvrant à 2*i, le chiffre, ')' par paire fermant à 2*i+1,
//   puis l’opérateur i (sauf après le dernier nombre).
//
// Fonctions pures de (nombres, opérateurs, parenthèses).

use super::operateur::Operateurs;
use super::parens::{EnsembleParens, NB_NOMBRES};

/// Forme évaluable : sans espaces, slots vides omis.
/// (Avec un slot vide, le résultat est mal formé : la soumission le bloque avant.)
pub fn expression_evaluable(
    nombres: &[u8; NB_NOMBRES],
    operateurs: &Operateurs,
    parens: &EnsembleParens,
) -> String {
    let mut expr = String::with_capacity(16);

    for (i, n) in nombres.iter().enumerate() {
        for _ in parens.entrees().filter(|p| p.debut() == i * 2) {
            expr.push('(');
        }

        expr.push_str(&n.to_string());

        for _ in parens.entrees().filter(|p| p.fin() == i * 2 + 1) {
            expr.push(')');
        }

        if let Some(Some(op)) = operateurs.get(i) {
            expr.push(op.ascii());
        }
    }

    expr
}

/// Forme d’affichage : "( 1 + 2 ) × 3 + 4", trois espaces pour un slot vide.
pub fn expression_affichage(
    nombres: &[u8; NB_NOMBRES],
    operateurs: &Operateurs,
    parens: &EnsembleParens,
) -> String {
    let mut expr = String::with_capacity(32);

    for (i, n) in nombres.iter().enumerate() {
        for _ in parens.entrees().filter(|p| p.debut() == i * 2) {
            expr.push_str("( ");
        }

        expr.push_str(&n.to_string());

        for _ in parens.entrees().filter(|p| p.fin() == i * 2 + 1) {
            expr.push_str(" )");
        }

        match operateurs.get(i) {
            Some(Some(op)) => {
                expr.push(' ');
                expr.push(op.glyphe());
                expr.push(' ');
            }
            Some(None) => expr.push_str("   "),
            None => {}
        }
    }

    expr.trim().to_string()
}

/// Étiquettes des boutons de parenthèses : par nombre, les '(' qui s’ouvrent
/// devant lui puis les ')' qui se ferment après lui. Vide si aucune.
pub fn etiquettes_parens(parens: &EnsembleParens) -> [String; NB_NOMBRES] {
    let mut ouvrantes = [0usize; NB_NOMBRES];
    let mut fermantes = [0usize; NB_NOMBRES];

    for p in parens.entrees() {
        ouvrantes[p.nombre_ouvrant()] += 1;
        fermantes[p.nombre_fermant()] += 1;
    }

    std::array::from_fn(|i| format!("{}{}", "(".repeat(ouvrantes[i]), ")".repeat(fermantes[i])))
}
