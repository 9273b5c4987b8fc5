// src/noyau/jetons.rs

use super::erreurs::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    // moins unaire, produit seulement par le shunting-yard
    Neg,

    LPar,
    RPar,
}

/// Normalise les glyphes d’affichage vers l’ASCII : × → *, ÷ → /, − → -.
pub fn normaliser(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux positifs (ex: 12, 1.5, .5)
/// - opérateurs + - * / (et leurs glyphes × ÷ −)
/// - parenthèses ( )
///
/// Tout autre caractère est refusé : c’est ce jeu restreint qui borne
/// l’évaluation à de l’arithmétique.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let chars: Vec<char> = normaliser(s).chars().collect();

    // Validation globale d’abord : on refuse avant de lire quoi que ce soit.
    if let Some(&c) = chars
        .iter()
        .find(|c| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')))
    {
        return Err(ErreurEval::CaractereInvalide(c));
    }
    if chars.is_empty() {
        return Err(ErreurEval::Vide);
    }

    let mut out = Vec::with_capacity(chars.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre décimal : chiffres et au plus un point
        let start = i;
        while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
            i += 1;
        }
        let texte: String = chars[start..i].iter().collect();
        if texte.matches('.').count() > 1 || texte == "." {
            return Err(ErreurEval::NombreInvalide(texte));
        }
        let v = texte
            .parse::<f64>()
            .map_err(|_| ErreurEval::NombreInvalide(texte.clone()))?;
        out.push(Tok::Num(v));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
