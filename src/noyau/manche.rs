//! src/noyau/manche.rs
//!
//! Machine à états d’une manche (sans vue).
//!
//! Cycle : `Inactive → EnCours → (problème résolu → EnCours)* → Terminee`.
//!
//! Contrats :
//! - Chaque intention est traitée de façon synchrone et atomique.
//! - Une soumission refusée ne modifie rien (hors message affiché).
//! - Une soumission jugée, correcte ou non, laisse une `Tentative` dans l’historique.
//! - Retirer une paire de parenthèses ne s’annule pas (seuls les ajouts sont journalisés).
//! - Hors `EnCours`, les saisies sont ignorées (la fenêtre de fin bloque tout).

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::construction::{etiquettes_parens, expression_affichage, expression_evaluable};
use super::erreurs::ErreurSoumission;
use super::eval::{est_correct, evaluer};
use super::historique::{HistoriqueSaisie, Saisie};
use super::horloge::{Horloge, HorlogeSysteme};
use super::operateur::{Operateur, Operateurs, NB_SLOTS};
use super::parens::{Bascule, EnsembleParens, NB_NOMBRES};
use super::problemes::{banque, resoudre, tirer, Mode, Probleme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatManche {
    /// Avant la première réinitialisation.
    Inactive,
    EnCours,
    /// Dernier problème résolu : chrono arrêté, saisies ignorées.
    Terminee,
}

/// Une soumission jugée (immuable une fois dans l’historique).
#[derive(Clone, Debug, PartialEq)]
pub struct Tentative {
    pub probleme: Probleme,
    pub expression: String,
    pub resultat: f64,
    pub correct: bool,
}

/// Bilan de fin de manche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bilan {
    pub secondes: u64,
    pub correctes: usize,
    pub total: usize,
}

/// Ce que la zone « résultat » doit montrer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DernierResultat {
    #[default]
    Aucun,
    Valeur { resultat: f64, correct: bool },
    Erreur(ErreurSoumission),
}

/// Issue d’une soumission acceptée.
#[derive(Clone, Debug, PartialEq)]
pub struct Issue {
    pub tentative: Tentative,
    /// Some si cette soumission a terminé la manche.
    pub fin: Option<Bilan>,
}

/// Intentions discrètes produites par la vue (clavier, souris).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intention {
    PlacerOperateur(Operateur),
    PlacerOperateurAuSlot(usize, Operateur),
    BasculerParen(usize, usize),
    Annuler,
    Effacer,
    Soumettre,
    Reinitialiser(Mode),
}

/// Évènements sortants.
#[derive(Clone, Debug, PartialEq)]
pub enum Evenement {
    ResultatCalcule {
        expression: String,
        resultat: f64,
        correct: bool,
    },
    MancheTerminee(Bilan),
    SaisieRefusee(ErreurSoumission),
}

/// Instantané en lecture seule, pour la vue.
#[derive(Clone, Debug, PartialEq)]
pub struct VueManche {
    pub etat: EtatManche,
    pub mode: Mode,
    pub nombres: [u8; NB_NOMBRES],
    pub operateurs: Operateurs,
    pub etiquettes_parens: [String; NB_NOMBRES],
    pub expression: String,
    pub dernier: DernierResultat,
    pub secondes: u64,
    /// Indice (0-based) du problème courant ; == total une fois terminée.
    pub indice: usize,
    pub total: usize,
    pub correctes: usize,
    pub tentatives: usize,
    /// Au moins une saisie journalisée.
    pub annulable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reponse {
    pub vue: VueManche,
    pub evenements: Vec<Evenement>,
}

pub struct Manche<H: Horloge = HorlogeSysteme> {
    horloge: H,
    rng: SmallRng,
    banque: Vec<Probleme>,

    // --- manche ---
    mode: Mode,
    etat: EtatManche,
    problemes: Vec<Probleme>,
    indice: usize,
    correctes: usize,
    debut: Option<Duration>,
    fin: Option<Duration>,
    historique: Vec<Tentative>,

    // --- saisie du problème courant ---
    courant: Probleme,
    operateurs: Operateurs,
    parens: EnsembleParens,
    saisies: HistoriqueSaisie,

    // --- affichage ---
    dernier: DernierResultat,
}

impl Manche<HorlogeSysteme> {
    /// Manche réelle : horloge système, banque complète, tirage depuis l’entropie de l’OS.
    pub fn new() -> Self {
        Self::avec(
            HorlogeSysteme::default(),
            SmallRng::from_os_rng(),
            banque().to_vec(),
        )
    }
}

impl Default for Manche<HorlogeSysteme> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Horloge> Manche<H> {
    pub fn avec(horloge: H, rng: SmallRng, banque: Vec<Probleme>) -> Self {
        Self {
            horloge,
            rng,
            banque,
            mode: Mode::DEFAUT,
            etat: EtatManche::Inactive,
            problemes: Vec::new(),
            indice: 0,
            correctes: 0,
            debut: None,
            fin: None,
            historique: Vec::new(),
            courant: Probleme::default(),
            operateurs: [None; NB_SLOTS],
            parens: EnsembleParens::new(),
            saisies: HistoriqueSaisie::new(),
            dernier: DernierResultat::Aucun,
        }
    }

    /* ------------------------ Cycle de vie ------------------------ */

    /// Nouvelle manche de `mode` problèmes tirés sans remise ; tout l’état précédent est jeté.
    pub fn reinitialiser(&mut self, mode: Mode) {
        self.mode = mode;
        self.problemes = tirer(&self.banque, mode.nombre(), &mut self.rng);
        self.indice = 0;
        self.correctes = 0;
        self.debut = None;
        self.fin = None;
        self.historique.clear();
        self.dernier = DernierResultat::Aucun;
        self.etat = EtatManche::EnCours;

        info!(
            problemes = self.problemes.len(),
            mode = mode.nombre(),
            "nouvelle manche"
        );

        self.charger_probleme();
    }

    /// Charge le problème à l’indice courant (ou termine s’il n’y en a plus).
    /// Démarre le chrono au tout premier problème. Garde le dernier résultat affiché.
    pub fn charger_probleme(&mut self) {
        if self.etat != EtatManche::EnCours {
            return;
        }

        let Some(probleme) = self.problemes.get(self.indice).copied() else {
            self.terminer();
            return;
        };

        self.courant = probleme;
        if self.indice == 0 && self.debut.is_none() {
            self.debut = Some(self.horloge.maintenant());
        }
        self.vider_saisie();

        debug!(
            indice = self.indice,
            probleme = %probleme,
            solution = ?resoudre(probleme).map(|s| s.expression(probleme)),
            "problème chargé"
        );
    }

    fn terminer(&mut self) {
        self.etat = EtatManche::Terminee;
        self.fin = Some(self.horloge.maintenant());
        let bilan = self.bilan();
        info!(
            secondes = bilan.secondes,
            correctes = bilan.correctes,
            total = bilan.total,
            "manche terminée"
        );
    }

    fn vider_saisie(&mut self) {
        self.operateurs = [None; NB_SLOTS];
        self.parens.vider();
        self.saisies.vider();
    }

    fn en_cours(&self) -> bool {
        self.etat == EtatManche::EnCours
    }

    /* ------------------------ Saisie ------------------------ */

    /// Premier slot vide ; si tout est plein, écrase le dernier slot.
    /// Retourne le slot modifié (None hors manche en cours).
    pub fn placer_operateur(&mut self, op: Operateur) -> Option<usize> {
        let slot = self
            .operateurs
            .iter()
            .position(Option::is_none)
            .unwrap_or(NB_SLOTS - 1);
        self.placer_operateur_au_slot(slot, op)
    }

    /// Pose directe dans un slot (sélecteur d’opérateur à la souris).
    pub fn placer_operateur_au_slot(&mut self, slot: usize, op: Operateur) -> Option<usize> {
        if !self.en_cours() || slot >= NB_SLOTS {
            return None;
        }
        self.operateurs[slot] = Some(op);
        self.saisies.enregistrer(Saisie::Operateur { slot, valeur: op });
        debug!(slot, op = %op, "opérateur posé");
        Some(slot)
    }

    /// Ajoute ou retire la paire entre deux nombres. Seul l’ajout est annulable.
    pub fn basculer_paren(&mut self, a: usize, b: usize) -> Option<Bascule> {
        if !self.en_cours() {
            return None;
        }
        let bascule = self.parens.basculer(a, b)?;
        if let Bascule::Ajoutee(paire) = bascule {
            self.saisies.enregistrer(Saisie::Paren(paire));
        }
        debug!(?bascule, "parenthèses basculées");
        Some(bascule)
    }

    /// Annule la saisie la plus récente. Sans effet si l’historique est vide.
    pub fn annuler(&mut self) -> Option<Saisie> {
        if !self.en_cours() {
            return None;
        }
        let saisie = self.saisies.annuler_dernier()?;
        match saisie {
            Saisie::Operateur { slot, .. } => self.operateurs[slot] = None,
            Saisie::Paren(paire) => {
                self.parens.retirer(paire);
            }
        }
        debug!(?saisie, "saisie annulée");
        Some(saisie)
    }

    /// Bouton « effacer » : vide la saisie ET la zone résultat.
    pub fn effacer_saisie(&mut self) {
        if !self.en_cours() {
            return;
        }
        self.vider_saisie();
        self.dernier = DernierResultat::Aucun;
    }

    /* ------------------------ Soumission ------------------------ */

    pub fn soumettre(&mut self) -> Result<Issue, ErreurSoumission> {
        match self.etat {
            EtatManche::Inactive => return Err(ErreurSoumission::MancheNonCommencee),
            EtatManche::Terminee => return Err(ErreurSoumission::MancheTerminee),
            EtatManche::EnCours => {}
        }

        let tentative = match self.juger() {
            Ok(t) => t,
            Err(e) => {
                warn!(erreur = %e, "soumission refusée");
                self.dernier = DernierResultat::Erreur(e.clone());
                return Err(e);
            }
        };

        info!(
            probleme = %tentative.probleme,
            expression = %tentative.expression,
            resultat = tentative.resultat,
            correct = tentative.correct,
            "tentative jugée"
        );

        self.historique.push(tentative.clone());
        self.dernier = DernierResultat::Valeur {
            resultat: tentative.resultat,
            correct: tentative.correct,
        };

        if tentative.correct {
            self.correctes += 1;
            self.indice += 1;
            self.charger_probleme();
        }

        let fin = (self.etat == EtatManche::Terminee).then(|| self.bilan());
        Ok(Issue { tentative, fin })
    }

    fn juger(&self) -> Result<Tentative, ErreurSoumission> {
        if self.operateurs.iter().any(Option::is_none) {
            return Err(ErreurSoumission::SaisieIncomplete);
        }

        let expression = self.expression_evaluable();
        if expression.is_empty() {
            return Err(ErreurSoumission::ExpressionVide);
        }

        let resultat = evaluer(&expression)?;
        Ok(Tentative {
            probleme: self.courant,
            expression,
            resultat,
            correct: est_correct(resultat),
        })
    }

    /* ------------------------ Intentions ------------------------ */

    /// Point d’entrée unique de la vue : applique l’intention, renvoie la vue à jour
    /// et les évènements produits.
    pub fn traiter(&mut self, intention: Intention) -> Reponse {
        let mut evenements = Vec::new();

        match intention {
            Intention::PlacerOperateur(op) => {
                self.placer_operateur(op);
            }
            Intention::PlacerOperateurAuSlot(slot, op) => {
                self.placer_operateur_au_slot(slot, op);
            }
            Intention::BasculerParen(a, b) => {
                self.basculer_paren(a, b);
            }
            Intention::Annuler => {
                self.annuler();
            }
            Intention::Effacer => self.effacer_saisie(),
            Intention::Reinitialiser(mode) => self.reinitialiser(mode),
            Intention::Soumettre => match self.soumettre() {
                Ok(Issue { tentative, fin }) => {
                    evenements.push(Evenement::ResultatCalcule {
                        expression: tentative.expression,
                        resultat: tentative.resultat,
                        correct: tentative.correct,
                    });
                    if let Some(bilan) = fin {
                        evenements.push(Evenement::MancheTerminee(bilan));
                    }
                }
                Err(e) => evenements.push(Evenement::SaisieRefusee(e)),
            },
        }

        Reponse {
            vue: self.vue(),
            evenements,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn vue(&self) -> VueManche {
        VueManche {
            etat: self.etat,
            mode: self.mode,
            nombres: self.courant.chiffres(),
            operateurs: self.operateurs,
            etiquettes_parens: etiquettes_parens(&self.parens),
            expression: self.expression_affichage(),
            dernier: self.dernier.clone(),
            secondes: self.secondes_ecoulees(),
            indice: self.indice,
            total: self.problemes.len(),
            correctes: self.correctes,
            tentatives: self.historique.len(),
            annulable: !self.saisies.est_vide(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Vrai dès que le chrono a démarré (la vue demande confirmation avant de tout jeter).
    pub fn est_commencee(&self) -> bool {
        self.debut.is_some()
    }

    pub fn historique(&self) -> &[Tentative] {
        &self.historique
    }

    pub fn expression_evaluable(&self) -> String {
        expression_evaluable(&self.courant.chiffres(), &self.operateurs, &self.parens)
    }

    pub fn expression_affichage(&self) -> String {
        expression_affichage(&self.courant.chiffres(), &self.operateurs, &self.parens)
    }

    /// Secondes entières depuis le départ (arrêtées à la fin de manche).
    pub fn secondes_ecoulees(&self) -> u64 {
        match self.debut {
            None => 0,
            Some(debut) => {
                let maintenant = self.fin.unwrap_or_else(|| self.horloge.maintenant());
                maintenant.saturating_sub(debut).as_secs()
            }
        }
    }

    pub fn bilan(&self) -> Bilan {
        Bilan {
            secondes: self.secondes_ecoulees(),
            correctes: self.correctes,
            total: self.problemes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::horloge::HorlogeManuelle;
    use crate::noyau::operateur::Operateur::{Div, Fois, Moins, Plus};
    use crate::noyau::parens::PaireParen;

    fn manche(problemes: &[&str]) -> (Manche<HorlogeManuelle>, HorlogeManuelle) {
        let h = HorlogeManuelle::default();
        let banque = problemes.iter().map(|s| s.parse().unwrap()).collect();
        let m = Manche::avec(h.clone(), SmallRng::seed_from_u64(7), banque);
        (m, h)
    }

    /// Manche de 5 problèmes identiques "1420" : (1+4)*2+0 = 10.
    fn manche_1420() -> (Manche<HorlogeManuelle>, HorlogeManuelle) {
        let (mut m, h) = manche(&["1420", "1420", "1420", "1420", "1420"]);
        m.reinitialiser(Mode::DEFAUT);
        (m, h)
    }

    fn resoudre_1420(m: &mut Manche<HorlogeManuelle>) -> Result<Issue, ErreurSoumission> {
        m.basculer_paren(0, 1);
        m.placer_operateur(Plus);
        m.placer_operateur(Fois);
        m.placer_operateur(Plus);
        m.soumettre()
    }

    #[test]
    fn inactive_au_depart() {
        let (mut m, _h) = manche(&["1234"]);
        assert_eq!(m.vue().etat, EtatManche::Inactive);
        assert_eq!(m.soumettre(), Err(ErreurSoumission::MancheNonCommencee));
        assert_eq!(m.placer_operateur(Plus), None);
        assert_eq!(m.secondes_ecoulees(), 0);
        assert!(!m.est_commencee());
    }

    #[test]
    fn reinitialiser_demarre_le_chrono() {
        let (m, h) = manche_1420();
        assert_eq!(m.vue().etat, EtatManche::EnCours);
        assert!(m.est_commencee());
        assert_eq!(m.vue().nombres, [1, 4, 2, 0]);
        assert_eq!(m.vue().total, 5);

        h.avancer(Duration::from_millis(2999));
        assert_eq!(m.secondes_ecoulees(), 2);
    }

    #[test]
    fn politique_d_ecrasement_du_dernier_slot() {
        let (mut m, _h) = manche_1420();
        assert_eq!(m.placer_operateur(Plus), Some(0));
        assert_eq!(m.placer_operateur(Moins), Some(1));
        assert_eq!(m.placer_operateur(Fois), Some(2));
        assert_eq!(m.placer_operateur(Div), Some(2));
        assert_eq!(m.vue().operateurs, [Some(Plus), Some(Moins), Some(Div)]);
    }

    #[test]
    fn annulation_remet_le_slot_a_vide() {
        let (mut m, _h) = manche_1420();
        m.placer_operateur(Plus);
        m.placer_operateur(Moins);
        m.placer_operateur(Fois);
        m.placer_operateur(Div); // écrase le slot 2

        m.annuler();
        // pas de retour à Fois : le slot est vidé
        assert_eq!(m.vue().operateurs, [Some(Plus), Some(Moins), None]);
        m.annuler();
        assert_eq!(m.vue().operateurs, [Some(Plus), Some(Moins), None]);
        m.annuler();
        assert_eq!(m.vue().operateurs, [Some(Plus), None, None]);
    }

    #[test]
    fn annulation_asymetrique_des_parentheses() {
        let (mut m, _h) = manche_1420();
        let p = PaireParen::entre(0, 1).unwrap();

        m.basculer_paren(0, 1); // ajout, journalisé
        m.placer_operateur(Plus);
        m.basculer_paren(1, 0); // retrait, non journalisé

        assert_eq!(m.vue().etiquettes_parens, ["", "", "", ""]);
        assert_eq!(
            m.annuler(),
            Some(Saisie::Operateur {
                slot: 0,
                valeur: Plus
            })
        );
        // l’entrée Paren(0-3) reste : l’annuler ne retire rien de visible
        assert_eq!(m.annuler(), Some(Saisie::Paren(p)));
        assert_eq!(m.annuler(), None);
        assert_eq!(m.expression_affichage(), "1   4   2   0");
    }

    #[test]
    fn soumission_incomplete_refusee_sans_effet() {
        let (mut m, _h) = manche_1420();
        m.placer_operateur(Plus);
        let avant = m.vue();

        assert_eq!(m.soumettre(), Err(ErreurSoumission::SaisieIncomplete));
        let apres = m.vue();
        assert_eq!(apres.operateurs, avant.operateurs);
        assert_eq!(apres.tentatives, 0);
        assert_eq!(
            apres.dernier,
            DernierResultat::Erreur(ErreurSoumission::SaisieIncomplete)
        );
    }

    #[test]
    fn paires_croisees_rendues_sans_validation() {
        let (mut m, _h) = manche_1420();
        // (0,2) et (1,3) se croisent ; le rendu n’en tient pas compte
        m.basculer_paren(0, 2);
        m.basculer_paren(1, 3);
        m.placer_operateur(Plus);
        m.placer_operateur(Fois);
        m.placer_operateur(Plus);

        assert_eq!(m.expression_evaluable(), "(1+(4*2)+0)");
        assert_eq!(m.vue().etiquettes_parens, ["(", "(", ")", ")"]);
        let issue = m.soumettre().unwrap();
        assert_eq!(issue.tentative.resultat, 9.0);
        assert!(!issue.tentative.correct);
    }

    #[test]
    fn reponse_incorrecte_garde_la_saisie() {
        let (mut m, _h) = manche_1420();
        m.placer_operateur(Plus);
        m.placer_operateur(Plus);
        m.placer_operateur(Plus);

        let issue = m.soumettre().unwrap();
        assert_eq!(issue.tentative.expression, "1+4+2+0");
        assert_eq!(issue.tentative.resultat, 7.0);
        assert!(!issue.tentative.correct);
        assert_eq!(issue.fin, None);

        let v = m.vue();
        assert_eq!(v.operateurs, [Some(Plus); 3]);
        assert_eq!(v.indice, 0);
        assert_eq!(v.correctes, 0);
        assert_eq!(v.tentatives, 1);
        assert_eq!(
            v.dernier,
            DernierResultat::Valeur {
                resultat: 7.0,
                correct: false
            }
        );
    }

    #[test]
    fn division_par_zero_est_une_tentative_incorrecte() {
        let (mut m, _h) = manche_1420();
        m.placer_operateur(Plus);
        m.placer_operateur(Plus);
        m.placer_operateur(Div);

        let issue = m.soumettre().unwrap();
        assert_eq!(issue.tentative.expression, "1+4+2/0");
        assert!(issue.tentative.resultat.is_infinite());
        assert!(!issue.tentative.correct);
    }

    #[test]
    fn bonne_reponse_avance_et_garde_le_resultat() {
        let (mut m, _h) = manche_1420();
        let issue = resoudre_1420(&mut m).unwrap();
        assert_eq!(issue.tentative.expression, "(1+4)*2+0");
        assert!(issue.tentative.correct);

        let v = m.vue();
        assert_eq!(v.indice, 1);
        assert_eq!(v.correctes, 1);
        // saisie vidée pour le problème suivant, résultat conservé
        assert_eq!(v.operateurs, [None; 3]);
        assert_eq!(v.etiquettes_parens, ["", "", "", ""]);
        assert_eq!(
            v.dernier,
            DernierResultat::Valeur {
                resultat: 10.0,
                correct: true
            }
        );
        // pas d’annulation possible au-delà du problème
        assert_eq!(m.annuler(), None);
    }

    #[test]
    fn fin_de_manche() {
        let (mut m, h) = manche_1420();
        for _ in 0..4 {
            h.avancer(Duration::from_secs(3));
            assert_eq!(resoudre_1420(&mut m).unwrap().fin, None);
        }
        h.avancer(Duration::from_millis(3500));
        let issue = resoudre_1420(&mut m).unwrap();
        let bilan = Bilan {
            secondes: 15,
            correctes: 5,
            total: 5,
        };
        assert_eq!(issue.fin, Some(bilan));
        assert_eq!(m.vue().etat, EtatManche::Terminee);
        assert_eq!(m.vue().indice, 5);

        // chrono arrêté
        h.avancer(Duration::from_secs(60));
        assert_eq!(m.secondes_ecoulees(), 15);

        // tout est ignoré ou refusé
        assert_eq!(m.soumettre(), Err(ErreurSoumission::MancheTerminee));
        assert_eq!(m.placer_operateur(Plus), None);
        assert_eq!(m.basculer_paren(0, 1), None);
        assert_eq!(m.historique().len(), 5);
    }

    #[test]
    fn reinitialiser_jette_tout() {
        let (mut m, h) = manche_1420();
        m.placer_operateur(Plus);
        m.placer_operateur(Plus);
        m.placer_operateur(Plus);
        m.soumettre().unwrap();
        h.avancer(Duration::from_secs(10));

        m.reinitialiser(Mode::DEFAUT);
        let v = m.vue();
        assert_eq!(v.tentatives, 0);
        assert_eq!(v.operateurs, [None; 3]);
        assert_eq!(v.dernier, DernierResultat::Aucun);
        assert_eq!(v.secondes, 0);
    }

    #[test]
    fn effacer_vide_aussi_le_resultat() {
        let (mut m, _h) = manche_1420();
        m.placer_operateur(Plus);
        m.soumettre().unwrap_err();
        m.basculer_paren(2, 3);

        m.effacer_saisie();
        let v = m.vue();
        assert_eq!(v.operateurs, [None; 3]);
        assert_eq!(v.expression, "1   4   2   0");
        assert_eq!(v.dernier, DernierResultat::Aucun);
    }

    #[test]
    fn traiter_emet_les_evenements() {
        let (mut m, _h) = manche(&["1234"]);
        let r = m.traiter(Intention::Soumettre);
        assert_eq!(
            r.evenements,
            [Evenement::SaisieRefusee(
                ErreurSoumission::MancheNonCommencee
            )]
        );

        // banque d’un seul problème : la manche s’arrête après lui
        m.traiter(Intention::Reinitialiser(Mode::DEFAUT));
        for op in [Plus, Plus, Plus] {
            m.traiter(Intention::PlacerOperateur(op));
        }
        let r = m.traiter(Intention::Soumettre);
        assert_eq!(
            r.evenements,
            [
                Evenement::ResultatCalcule {
                    expression: "1+2+3+4".into(),
                    resultat: 10.0,
                    correct: true
                },
                Evenement::MancheTerminee(Bilan {
                    secondes: 0,
                    correctes: 1,
                    total: 1
                })
            ]
        );
        assert_eq!(r.vue.etat, EtatManche::Terminee);
    }

    #[test]
    fn pose_directe_dans_un_slot() {
        let (mut m, _h) = manche_1420();
        let r = m.traiter(Intention::PlacerOperateurAuSlot(1, Fois));
        assert_eq!(r.vue.operateurs, [None, Some(Fois), None]);
        assert_eq!(r.vue.expression, "1   4 × 2   0");
        assert_eq!(m.placer_operateur_au_slot(3, Plus), None);

        // le placement séquentiel prend ensuite le premier slot vide
        assert_eq!(m.placer_operateur(Plus), Some(0));
        assert_eq!(m.placer_operateur(Plus), Some(2));
    }
}
