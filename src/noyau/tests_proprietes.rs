//! Tests de propriétés : invariants de la saisie pour toute suite d’actions.
//!
//! 1. La forme évaluable ne contient jamais de caractère refusé.
//! 2. Opérateurs complets => l’expression s’évalue sans erreur.
//! 3. Basculer deux fois la même paire ne change rien.
//! 4. N annulations après N saisies journalisées => état de départ.
//! 5. Le jugement ne dépend que de |v − 10| < ε.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::construction::expression_evaluable;
use super::erreurs::ErreurEval;
use super::eval::{est_correct, evaluer, EPSILON};
use super::horloge::HorlogeManuelle;
use super::manche::{Manche, VueManche};
use super::operateur::Operateur;
use super::parens::{Bascule, EnsembleParens};
use super::problemes::{Mode, Probleme};

// ── Stratégies ──────────────────────────────────────────────────────────

fn operateur() -> impl Strategy<Value = Operateur> {
    prop::sample::select(Operateur::TOUS.to_vec())
}

fn chiffres() -> impl Strategy<Value = [u8; 4]> {
    prop::array::uniform4(0u8..=9)
}

/// Bascules brutes, y compris a == b (refusées par l’ensemble).
fn bascules() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0usize..4), 0..8)
}

#[derive(Clone, Debug)]
enum Action {
    Op(Operateur),
    OpSlot(usize, Operateur),
    Paren(usize, usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        operateur().prop_map(Action::Op),
        (0usize..3, operateur()).prop_map(|(s, o)| Action::OpSlot(s, o)),
        (0usize..4, 0usize..4).prop_map(|(a, b)| Action::Paren(a, b)),
    ]
}

fn manche_sur(chiffres: [u8; 4]) -> Manche<HorlogeManuelle> {
    let probleme: Probleme = chiffres
        .iter()
        .map(|c| c.to_string())
        .collect::<String>()
        .parse()
        .unwrap();
    let mut m = Manche::avec(
        HorlogeManuelle::default(),
        SmallRng::seed_from_u64(0xC0FFEE),
        vec![probleme],
    );
    m.reinitialiser(Mode::DEFAUT);
    m
}

fn saisie(v: &VueManche) -> (Vec<Option<Operateur>>, [String; 4]) {
    (v.operateurs.to_vec(), v.etiquettes_parens.clone())
}

// ═════════════════════════════════════════════════════════════════════════
// 1 + 2. Forme évaluable toujours acceptée par l’évaluateur
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn evaluable_sans_caractere_refuse(
        n in chiffres(),
        ops in prop::array::uniform3(prop::option::of(operateur())),
        paires in bascules(),
    ) {
        let mut parens = EnsembleParens::new();
        for (a, b) in paires {
            parens.basculer(a, b);
        }
        let texte = expression_evaluable(&n, &ops, &parens);

        let r = evaluer(&texte);
        prop_assert!(
            !matches!(r, Err(ErreurEval::CaractereInvalide(_))),
            "{} => {:?}", texte, r
        );
        if ops.iter().all(Option::is_some) {
            prop_assert!(r.is_ok(), "{} => {:?}", texte, r);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Double bascule = identité
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn double_bascule_identite(paires in bascules(), a in 0usize..4, b in 0usize..4) {
        let mut parens = EnsembleParens::new();
        for (x, y) in paires {
            parens.basculer(x, y);
        }
        let avant = parens.clone();
        parens.basculer(a, b);
        parens.basculer(b, a);
        prop_assert_eq!(parens, avant);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Annulation LIFO jusqu’à l’état de départ
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn annulations_lifo(n in chiffres(), actions in prop::collection::vec(action(), 0..12)) {
        let mut m = manche_sur(n);
        let depart = saisie(&m.vue());

        // Chaque action doit journaliser exactement une saisie : un retrait de
        // paire (non journalisé) est donc immédiatement suivi d’un nouvel ajout.
        let mut journalisees = 0usize;
        for a in actions {
            let ok = match a {
                Action::Op(o) => m.placer_operateur(o).is_some(),
                Action::OpSlot(s, o) => m.placer_operateur_au_slot(s, o).is_some(),
                Action::Paren(x, y) => match m.basculer_paren(x, y) {
                    Some(Bascule::Ajoutee(_)) => true,
                    Some(Bascule::Retiree(_)) => {
                        matches!(m.basculer_paren(x, y), Some(Bascule::Ajoutee(_)))
                    }
                    None => false,
                },
            };
            if ok {
                journalisees += 1;
            }
        }

        for _ in 0..journalisees {
            prop_assert!(m.annuler().is_some());
        }
        prop_assert!(m.annuler().is_none());
        prop_assert_eq!(saisie(&m.vue()), depart);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Jugement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn jugement_par_epsilon(d in -1.0f64..1.0) {
        prop_assume!((d.abs() - EPSILON).abs() > 1e-9);
        let v = 10.0 + d;
        prop_assert_eq!(est_correct(v), d.abs() < EPSILON);
    }
}
