// src/noyau/problemes.rs
//
// Problèmes, modes, banque.
//
// La banque = tous les "0000".."9999" résolubles SANS réordonner les chiffres,
// sans signe, avec + - * / et l’un des 12 motifs de parenthèses ci-dessous.
// Calculée une fois par processus (OnceLock), puis en lecture seule.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::construction::expression_evaluable;
use super::erreurs::{ErreurMode, ErreurProbleme};
use super::eval::est_correct;
use super::operateur::Operateur;
use super::parens::{EnsembleParens, PaireParen, NB_NOMBRES};

/* ------------------------ Probleme ------------------------ */

/// Quatre chiffres, dans l’ordre imposé.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Probleme([u8; NB_NOMBRES]);

impl Probleme {
    pub fn chiffres(self) -> [u8; NB_NOMBRES] {
        self.0
    }
}

impl FromStr for Probleme {
    type Err = ErreurProbleme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s.chars().count();
        if n != NB_NOMBRES {
            return Err(ErreurProbleme::Longueur(n));
        }
        let mut chiffres = [0u8; NB_NOMBRES];
        for (slot, c) in chiffres.iter_mut().zip(s.chars()) {
            let d = c.to_digit(10).ok_or(ErreurProbleme::NonNumerique(c))?;
            *slot = d as u8;
        }
        Ok(Self(chiffres))
    }
}

impl fmt::Display for Probleme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/* ------------------------ Mode ------------------------ */

/// Nombre de problèmes d’une manche, restreint à `Mode::TOUS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mode(usize);

impl Mode {
    pub const TOUS: [Mode; 3] = [Mode(5), Mode(10), Mode(20)];
    pub const DEFAUT: Mode = Mode(5);

    pub fn nombre(self) -> usize {
        self.0
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::DEFAUT
    }
}

impl TryFrom<usize> for Mode {
    type Error = ErreurMode;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Mode::TOUS
            .into_iter()
            .find(|m| m.0 == n)
            .ok_or(ErreurMode::NonAutorise(n))
    }
}

/* ------------------------ Solveur ------------------------ */

/// Une manière d’atteindre 10.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub operateurs: [Operateur; 3],
    pub parens: EnsembleParens,
}

impl Solution {
    /// Rendu évaluable pour ces chiffres (ex: "(9+(9*9))/9").
    pub fn expression(&self, probleme: Probleme) -> String {
        expression_evaluable(
            &probleme.chiffres(),
            &self.operateurs.map(Some),
            &self.parens,
        )
    }
}

/// Évaluation « à plat » avec précédence (* / avant + -), gauche à droite.
fn plat(vals: &[f64], ops: &[Operateur]) -> f64 {
    let mut somme = 0.0;
    let mut signe = Operateur::Plus;
    let mut terme = vals[0];

    for (op, &v) in ops.iter().zip(&vals[1..]) {
        if op.est_multiplicatif() {
            terme = op.appliquer(terme, v);
        } else {
            somme = signe.appliquer(somme, terme);
            signe = *op;
            terme = v;
        }
    }

    signe.appliquer(somme, terme)
}

type Valeur = fn([f64; 4], [Operateur; 3]) -> f64;

/// Motif = paires de nombres parenthésées + sa valeur directe.
struct Motif {
    paires: &'static [(usize, usize)],
    valeur: Valeur,
}

fn m_aucun(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    plat(&n, &o)
}

// (a b) c d
fn m_ab(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    plat(&[o[0].appliquer(n[0], n[1]), n[2], n[3]], &[o[1], o[2]])
}

// a (b c) d
fn m_bc(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    plat(&[n[0], o[1].appliquer(n[1], n[2]), n[3]], &[o[0], o[2]])
}

// a b (c d)
fn m_cd(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    plat(&[n[0], n[1], o[2].appliquer(n[2], n[3])], &[o[0], o[1]])
}

// ((a b) c) d
fn m_ab_c(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    let abc = o[1].appliquer(o[0].appliquer(n[0], n[1]), n[2]);
    o[2].appliquer(abc, n[3])
}

// (a (b c)) d
fn m_a_bc(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    let abc = o[0].appliquer(n[0], o[1].appliquer(n[1], n[2]));
    o[2].appliquer(abc, n[3])
}

// a ((b c) d)
fn m_bc_d(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    let bcd = o[2].appliquer(o[1].appliquer(n[1], n[2]), n[3]);
    o[0].appliquer(n[0], bcd)
}

// a (b (c d))
fn m_b_cd(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    let bcd = o[1].appliquer(n[1], o[2].appliquer(n[2], n[3]));
    o[0].appliquer(n[0], bcd)
}

// (a b) (c d)
fn m_ab_cd(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    o[1].appliquer(o[0].appliquer(n[0], n[1]), o[2].appliquer(n[2], n[3]))
}

// a (b c d)
fn m_bcd(n: [f64; 4], o: [Operateur; 3]) -> f64 {
    o[0].appliquer(n[0], plat(&n[1..], &o[1..]))
}

/// Les 12 motifs de l’outil de vérification d’origine. Les deux derniers
/// ajoutent une paire extérieure redondante : même valeur, rendu différent.
const MOTIFS: [Motif; 12] = [
    Motif { paires: &[], valeur: m_aucun },
    Motif { paires: &[(0, 1)], valeur: m_ab },
    Motif { paires: &[(1, 2)], valeur: m_bc },
    Motif { paires: &[(2, 3)], valeur: m_cd },
    Motif { paires: &[(0, 1), (0, 2)], valeur: m_ab_c },
    Motif { paires: &[(1, 2), (0, 2)], valeur: m_a_bc },
    Motif { paires: &[(1, 2), (1, 3)], valeur: m_bc_d },
    Motif { paires: &[(2, 3), (1, 3)], valeur: m_b_cd },
    Motif { paires: &[(0, 1), (2, 3)], valeur: m_ab_cd },
    Motif { paires: &[(1, 3)], valeur: m_bcd },
    Motif { paires: &[(0, 1), (0, 2), (0, 3)], valeur: m_ab_c },
    Motif { paires: &[(1, 2), (1, 3), (0, 3)], valeur: m_bc_d },
];

/// Première solution trouvée (ordre : opérateurs, puis motifs).
pub fn resoudre(probleme: Probleme) -> Option<Solution> {
    let n = probleme.chiffres().map(f64::from);

    for o1 in Operateur::TOUS {
        for o2 in Operateur::TOUS {
            for o3 in Operateur::TOUS {
                let ops = [o1, o2, o3];
                if let Some(motif) = MOTIFS.iter().find(|m| est_correct((m.valeur)(n, ops))) {
                    return Some(Solution {
                        operateurs: ops,
                        parens: motif
                            .paires
                            .iter()
                            .filter_map(|&(a, b)| PaireParen::entre(a, b))
                            .collect(),
                    });
                }
            }
        }
    }

    None
}

/* ------------------------ Banque ------------------------ */

static BANQUE: OnceLock<Vec<Probleme>> = OnceLock::new();

/// Tous les problèmes résolubles, triés.
pub fn banque() -> &'static [Probleme] {
    BANQUE.get_or_init(|| {
        let v: Vec<Probleme> = (0u32..10_000)
            .filter_map(|i| Probleme::from_str(&format!("{i:04}")).ok())
            .filter(|p| resoudre(*p).is_some())
            .collect();
        tracing::info!(problemes = v.len(), "banque de problèmes calculée");
        v
    })
}

/// Tire `n` problèmes distincts, dans un ordre aléatoire.
/// Si la banque est plus petite, tire toute la banque.
pub fn tirer<R: Rng + ?Sized>(banque: &[Probleme], n: usize, rng: &mut R) -> Vec<Probleme> {
    let mut tirage: Vec<Probleme> = banque.choose_multiple(rng, n).copied().collect();
    tirage.shuffle(rng);
    tirage
}
