// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis l’évaluer sur une pile de f64
//
// Règles:
// - précédence : * / avant + -, associativité à gauche
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, il devient Neg : "-x" => "x neg"
//    - Neg lie plus fort que * et / : "2*-3" => "2 3 neg *"
// - division par zéro : inf / NaN (IEEE), jamais une erreur

use super::erreurs::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(1), Plus, Num(2), RPar, Star, Num(3)]
///   rpn:    [Num(1), Num(2), Plus, Num(3), Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len() + 2);
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le moins unaire et les juxtapositions.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Neg => return Err(ErreurEval::MalFormee("jeton inattendu")),

            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::MalFormee("opérateur manquant"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::MalFormee("opérateur manquant"));
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::MalFormee("parenthèse vide ou opérande manquant"));
                }
                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurEval::MalFormee("parenthèse fermante en trop"));
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    if matches!(tok, Tok::Minus) {
                        // unaire : associatif à droite, ne dépile rien
                        ops.push(Tok::Neg);
                        continue;
                    }
                    return Err(ErreurEval::MalFormee("opérande manquant"));
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(ErreurEval::MalFormee("opérande manquant en fin d’expression"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::MalFormee("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN en f64.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::MalFormee("expression invalide"))?;
                let a = st.pop().ok_or(ErreurEval::MalFormee("expression invalide"))?;
                st.push(appliquer(tok, a, b));
            }

            Tok::Neg => {
                let a = st.pop().ok_or(ErreurEval::MalFormee("expression invalide"))?;
                st.push(-a);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::MalFormee("parenthèse inattendue en RPN"));
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::MalFormee("expression invalide")),
    }
}

fn appliquer(op: &Tok, a: f64, b: f64) -> f64 {
    match op {
        Tok::Plus => a + b,
        Tok::Minus => a - b,
        Tok::Star => a * b,
        Tok::Slash => a / b,
        Tok::Num(_) | Tok::Neg | Tok::LPar | Tok::RPar => f64::NAN,
    }
}
