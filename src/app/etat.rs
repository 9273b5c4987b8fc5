//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir la manche + ce qui n’appartient qu’à l’interface
//! (sélection de parenthèses à la souris, accords de touches, sélecteur
//! d’opérateur, fenêtres de confirmation / fin, toast).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Manche::traiter`.
//! - Fenêtre de fin ouverte => aucune saisie de jeu acceptée.

use std::collections::BTreeSet;

use tracing::debug;

use crate::noyau::format::message_fin;
use crate::noyau::manche::{Bilan, Reponse, VueManche};
use crate::noyau::parens::NB_NOMBRES;
use crate::noyau::{Evenement, Intention, Manche, Mode, Operateur};

/// Durée d’affichage d’un toast (secondes).
const DUREE_TOAST: f64 = 2.0;

/// Action destructive en attente de confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Recommencer,
    ChangerMode(Mode),
}

pub struct AppMake10 {
    pub manche: Manche,
    /// Dernière vue reçue du noyau.
    pub vue: VueManche,

    // --- souris ---
    pub selection_parens: Vec<usize>,
    pub selecteur_slot: Option<usize>,

    // --- clavier : chiffres 1..4 enfoncés (indices 0..3) ---
    pub touches_chiffres: BTreeSet<usize>,

    // --- fenêtres ---
    pub confirmation: Option<Confirmation>,
    pub fin: Option<Bilan>,
    pub toast: Option<(String, f64)>,
}

impl Default for AppMake10 {
    fn default() -> Self {
        let mut manche = Manche::new();
        let reponse = manche.traiter(Intention::Reinitialiser(Mode::DEFAUT));
        Self {
            manche,
            vue: reponse.vue,
            selection_parens: Vec::new(),
            selecteur_slot: None,
            touches_chiffres: BTreeSet::new(),
            confirmation: None,
            fin: None,
            toast: None,
        }
    }
}

impl AppMake10 {
    /// Fenêtre de fin ouverte : le jeu est gelé.
    pub fn bloque(&self) -> bool {
        self.fin.is_some()
    }

    /// Transmet une intention au noyau et consomme les évènements produits.
    pub fn envoyer(&mut self, intention: Intention) {
        if self.bloque() && !matches!(intention, Intention::Reinitialiser(_)) {
            return;
        }
        let Reponse { vue, evenements } = self.manche.traiter(intention);
        self.vue = vue;

        for ev in evenements {
            match ev {
                Evenement::ResultatCalcule {
                    expression,
                    resultat,
                    correct,
                } => debug!(%expression, resultat, correct, "résultat affiché"),
                Evenement::MancheTerminee(bilan) => self.fin = Some(bilan),
                Evenement::SaisieRefusee(e) => debug!(erreur = %e, "saisie refusée"),
            }
        }
    }

    /// Rafraîchit la vue sans intention (chrono).
    pub fn rafraichir(&mut self) {
        self.vue = self.manche.vue();
    }

    /* ------------------------ Opérateurs ------------------------ */

    pub fn placer_operateur(&mut self, op: Operateur) {
        self.envoyer(Intention::PlacerOperateur(op));
    }

    pub fn ouvrir_selecteur(&mut self, slot: usize) {
        if self.bloque() {
            return;
        }
        self.selecteur_slot = if self.selecteur_slot == Some(slot) {
            None
        } else {
            Some(slot)
        };
    }

    pub fn choisir_dans_selecteur(&mut self, op: Operateur) {
        if let Some(slot) = self.selecteur_slot.take() {
            self.envoyer(Intention::PlacerOperateurAuSlot(slot, op));
        }
    }

    /* ------------------------ Parenthèses (souris) ------------------------ */

    /// Deux clics sur deux nombres différents = bascule de la paire.
    /// Re-cliquer un nombre sélectionné le désélectionne.
    pub fn cliquer_paren(&mut self, i: usize) {
        if self.bloque() || i >= NB_NOMBRES {
            return;
        }
        if let Some(pos) = self.selection_parens.iter().position(|&j| j == i) {
            self.selection_parens.remove(pos);
            return;
        }
        self.selection_parens.push(i);

        if let [a, b] = self.selection_parens[..] {
            self.selection_parens.clear();
            self.envoyer(Intention::BasculerParen(a, b));
        }
    }

    /* ------------------------ Parenthèses (clavier) ------------------------ */

    pub fn chiffre_enfonce(&mut self, i: usize) {
        self.touches_chiffres.insert(i);
    }

    /// Au relâchement : si exactement deux chiffres étaient tenus, bascule leur paire.
    pub fn chiffre_relache(&mut self, i: usize) {
        if self.touches_chiffres.len() == 2 {
            let mut it = self.touches_chiffres.iter().copied();
            if let (Some(a), Some(b)) = (it.next(), it.next()) {
                self.envoyer(Intention::BasculerParen(a, b));
            }
        }
        self.touches_chiffres.remove(&i);
    }

    /* ------------------------ Manche ------------------------ */

    pub fn annuler(&mut self) {
        self.envoyer(Intention::Annuler);
    }

    pub fn effacer(&mut self) {
        self.selection_parens.clear();
        self.selecteur_slot = None;
        self.envoyer(Intention::Effacer);
    }

    pub fn soumettre(&mut self) {
        self.envoyer(Intention::Soumettre);
    }

    /// Bouton « réinitialiser » : toujours confirmé.
    pub fn demander_recommencer(&mut self) {
        if !self.bloque() {
            self.confirmation = Some(Confirmation::Recommencer);
        }
    }

    /// Bouton de mode : confirmé seulement si une manche a démarré.
    pub fn demander_mode(&mut self, mode: Mode) {
        if self.manche.est_commencee() {
            self.confirmation = Some(Confirmation::ChangerMode(mode));
        } else {
            self.reinitialiser(mode);
        }
    }

    pub fn confirmer(&mut self) {
        match self.confirmation.take() {
            Some(Confirmation::Recommencer) => self.reinitialiser(self.manche.mode()),
            Some(Confirmation::ChangerMode(mode)) => self.reinitialiser(mode),
            None => {}
        }
    }

    pub fn annuler_confirmation(&mut self) {
        self.confirmation = None;
    }

    pub fn reinitialiser(&mut self, mode: Mode) {
        self.fin = None;
        self.selection_parens.clear();
        self.selecteur_slot = None;
        self.touches_chiffres.clear();
        self.envoyer(Intention::Reinitialiser(mode));
    }

    pub fn message_fin(&self) -> Option<String> {
        self.fin
            .map(|b| message_fin(b.secondes, b.correctes, b.total))
    }

    /* ------------------------ Toast ------------------------ */

    pub fn montrer_toast(&mut self, texte: impl Into<String>, maintenant: f64) {
        self.toast = Some((texte.into(), maintenant + DUREE_TOAST));
    }

    /// Texte du toast s’il n’a pas expiré.
    pub fn toast_actif(&mut self, maintenant: f64) -> Option<&str> {
        if self.toast.as_ref().is_some_and(|(_, fin)| maintenant >= *fin) {
            self.toast = None;
        }
        self.toast.as_ref().map(|(t, _)| t.as_str())
    }
}
