// src/noyau/format.rs
//
// Textes affichés : résultat, chrono, message de fin.
// Pas de logique de jeu ici.

/// Résultat à 2 décimales ; non-finis écrits comme le navigateur les écrirait.
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{v:.2}")
    }
}

/// "mm:ss" (les minutes débordent au-delà de 99).
pub fn format_chrono(secondes: u64) -> String {
    format!("{:02}:{:02}", secondes / 60, secondes % 60)
}

/// Message de fin de manche, prêt à copier.
pub fn message_fin(secondes: u64, correctes: usize, total: usize) -> String {
    format!(
        "Make 10\n\nTemps : {} min {} s\nBonnes réponses : {correctes} / {total}",
        secondes / 60,
        secondes % 60
    )
}
