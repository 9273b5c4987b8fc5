// src/noyau/historique.rs
//
// Journal des saisies, pour l’annulation stricte (LIFO).
//
// Contrat :
// - seules les poses d’opérateur et les AJOUTS de paires sont journalisés ;
// - retirer une paire (bascule) ne laisse aucune trace ;
// - annuler un opérateur remet le slot à vide, sans restaurer la valeur
//   précédente (un slot écrasé deux fois ne revient jamais à sa 1re valeur).

use super::operateur::Operateur;
use super::parens::PaireParen;

/// Action annulable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saisie {
    Operateur { slot: usize, valeur: Operateur },
    Paren(PaireParen),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoriqueSaisie {
    pile: Vec<Saisie>,
}

impl HistoriqueSaisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enregistrer(&mut self, saisie: Saisie) {
        self.pile.push(saisie);
    }

    /// Retire la saisie la plus récente. None (sans erreur) si vide.
    pub fn annuler_dernier(&mut self) -> Option<Saisie> {
        self.pile.pop()
    }

    pub fn est_vide(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn vider(&mut self) {
        self.pile.clear();
    }
}
