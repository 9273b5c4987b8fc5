// src/noyau/parens.rs
//
// Paires de parenthèses sur les 4 positions de nombres.
//
// Codage des positions : 2*i = « juste avant le nombre i »,
// 2*i+1 = « juste après le nombre i ». Une paire (a, b) avec a < b couvre
// donc de l’avant du nombre a jusqu’à l’après du nombre b.
//
// Aucune validation de croisement : des paires qui se chevauchent sans
// s’emboîter sont acceptées, rendues telles quelles, et c’est l’évaluateur
// qui tranche.

use std::collections::BTreeSet;
use std::fmt;

/// Nombre de positions de nombres dans un problème.
pub const NB_NOMBRES: usize = 4;

/// Paire normalisée (debut = min*2, fin = max*2+1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaireParen {
    debut: usize,
    fin: usize,
}

impl PaireParen {
    /// Paire entre deux nombres distincts (ordre indifférent).
    /// None si a == b ou si une position sort de 0..4.
    pub fn entre(a: usize, b: usize) -> Option<Self> {
        if a == b || a >= NB_NOMBRES || b >= NB_NOMBRES {
            return None;
        }
        let (bas, haut) = if a < b { (a, b) } else { (b, a) };
        Some(Self {
            debut: bas * 2,
            fin: haut * 2 + 1,
        })
    }

    pub fn debut(self) -> usize {
        self.debut
    }

    pub fn fin(self) -> usize {
        self.fin
    }

    /// Indice du nombre devant lequel la paire s’ouvre.
    pub fn nombre_ouvrant(self) -> usize {
        self.debut / 2
    }

    /// Indice du nombre après lequel la paire se ferme.
    pub fn nombre_fermant(self) -> usize {
        self.fin / 2
    }
}

/// Clé textuelle "debut-fin" (ex: "0-3").
impl fmt::Display for PaireParen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.debut, self.fin)
    }
}

/// Effet d’une bascule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bascule {
    /// La paire n’existait pas : l’appelant l’enregistre dans l’historique.
    Ajoutee(PaireParen),
    /// La paire existait : retirée, sans trace dans l’historique.
    Retiree(PaireParen),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnsembleParens {
    paires: BTreeSet<PaireParen>,
}

impl EnsembleParens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute la paire entre a et b si absente, la retire sinon.
    pub fn basculer(&mut self, a: usize, b: usize) -> Option<Bascule> {
        let paire = PaireParen::entre(a, b)?;
        if self.retirer(paire) {
            Some(Bascule::Retiree(paire))
        } else {
            self.ajouter(paire);
            Some(Bascule::Ajoutee(paire))
        }
    }

    /// Vrai si la paire était présente.
    pub fn retirer(&mut self, paire: PaireParen) -> bool {
        self.paires.remove(&paire)
    }

    /// Vrai si la paire était absente.
    pub fn ajouter(&mut self, paire: PaireParen) -> bool {
        self.paires.insert(paire)
    }

    /// Paires triées par (debut, fin).
    pub fn entrees(&self) -> impl Iterator<Item = PaireParen> + '_ {
        self.paires.iter().copied()
    }

    pub fn vider(&mut self) {
        self.paires.clear();
    }
}

impl FromIterator<PaireParen> for EnsembleParens {
    fn from_iter<I: IntoIterator<Item = PaireParen>>(iter: I) -> Self {
        Self {
            paires: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalisation_et_cle() {
        let p = PaireParen::entre(2, 0).unwrap();
        assert_eq!((p.debut(), p.fin()), (0, 5));
        assert_eq!(p.to_string(), "0-5");
        assert_eq!(PaireParen::entre(0, 2), Some(p));
        assert_eq!(PaireParen::entre(1, 3).unwrap().to_string(), "2-7");
        assert_eq!((p.nombre_ouvrant(), p.nombre_fermant()), (0, 2));
    }

    #[test]
    fn paires_refusees() {
        assert_eq!(PaireParen::entre(1, 1), None);
        assert_eq!(PaireParen::entre(0, 4), None);

        let mut e = EnsembleParens::new();
        assert_eq!(e.basculer(3, 3), None);
        assert_eq!(e.entrees().count(), 0);
    }

    #[test]
    fn bascule_aller_retour() {
        let mut e = EnsembleParens::new();
        let p = PaireParen::entre(0, 1).unwrap();

        assert_eq!(e.basculer(1, 0), Some(Bascule::Ajoutee(p)));
        assert!(e.entrees().any(|q| q == p));
        assert_eq!(e.basculer(0, 1), Some(Bascule::Retiree(p)));
        assert_eq!(e, EnsembleParens::new());
    }

    #[test]
    fn ensemble_sans_doublon() {
        let mut e = EnsembleParens::new();
        let p = PaireParen::entre(1, 2).unwrap();
        assert!(e.ajouter(p));
        assert!(!e.ajouter(p));
        assert_eq!(e.entrees().count(), 1);
        assert!(e.retirer(p));
        assert!(!e.retirer(p));
    }

    #[test]
    fn chevauchement_accepte() {
        let mut e = EnsembleParens::new();
        e.basculer(0, 2);
        e.basculer(1, 3);
        let cles: Vec<String> = e.entrees().map(|p| p.to_string()).collect();
        assert_eq!(cles, ["0-5", "2-7"]);
    }
}
