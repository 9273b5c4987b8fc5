// src/app/vue.rs
//
// Vue (UI egui) - natif + web
// ---------------------------
// Objectifs :
// - Même AppMake10 (etat.rs) pour natif + wasm
// - Souris : 2 clics sur deux nombres = paire de parenthèses,
//   clic sur une case opérateur = sélecteur + − × ÷
// - Fenêtres : confirmation (réinitialiser / changer de mode), fin de manche
//
// Le clavier est lu dans app.rs (une seule fois par frame).

use eframe::egui;

use super::etat::{AppMake10, Confirmation};
use crate::noyau::format::{format_chrono, format_resultat};
use crate::noyau::{DernierResultat, EtatManche, Mode, Operateur};

const TAILLE_NOMBRE: f32 = 30.0;
const TAILLE_EXPRESSION: f32 = 24.0;

impl AppMake10 {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Make 10");
                ui.add_space(4.0);

                self.ui_entete(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_plateau(ui);

                ui.add_space(8.0);
                self.ui_resultat(ui);

                ui.add_space(8.0);
                self.ui_commandes(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    /// Fenêtres par-dessus le panneau central.
    pub fn ui_fenetres(&mut self, ctx: &egui::Context) {
        self.ui_confirmation(ctx);
        self.ui_fin(ctx);
        self.ui_toast(ctx);
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode :");
            for mode in Mode::TOUS {
                let choisi = self.vue.mode == mode;
                let b = egui::Button::new(format!("{} problèmes", mode.nombre())).selected(choisi);
                if ui.add(b).clicked() && !self.bloque() {
                    self.demander_mode(mode);
                }
            }
        });

        let v = &self.vue;
        let numero = (v.indice + 1).min(v.total);
        ui.horizontal(|ui| {
            ui.monospace(format!("Problème {numero} / {}", v.total));
            ui.separator();
            ui.monospace(format!("Bonnes réponses : {}", v.correctes));
            ui.separator();
            ui.monospace(format!("⏱ {}", format_chrono(v.secondes)));
        });
    }

    fn ui_plateau(&mut self, ui: &mut egui::Ui) {
        // Expression lisible (parenthèses + opérateurs en glyphes)
        let expr = if self.vue.expression.is_empty() {
            " ".to_string()
        } else {
            self.vue.expression.clone()
        };
        ui.label(
            egui::RichText::new(expr)
                .monospace()
                .size(TAILLE_EXPRESSION),
        );
        ui.add_space(6.0);

        // Ligne nombres / opérateurs : n0 [op0] n1 [op1] n2 [op2] n3
        let nombres = self.vue.nombres;
        let operateurs = self.vue.operateurs;
        ui.horizontal(|ui| {
            for (i, n) in nombres.iter().enumerate() {
                let choisi = self.selection_parens.contains(&i);
                let b = egui::Button::new(
                    egui::RichText::new(n.to_string())
                        .monospace()
                        .size(TAILLE_NOMBRE),
                )
                .selected(choisi);
                if ui
                    .add_sized([52.0, 52.0], b)
                    .on_hover_text("Cliquer deux nombres pour poser / retirer une paire")
                    .clicked()
                {
                    self.cliquer_paren(i);
                }

                if let Some(op) = operateurs.get(i) {
                    let texte = op.map(|o| o.glyphe().to_string()).unwrap_or_default();
                    let ouvert = self.selecteur_slot == Some(i);
                    let b = egui::Button::new(egui::RichText::new(texte).size(TAILLE_NOMBRE))
                        .selected(ouvert);
                    if ui.add_sized([44.0, 52.0], b).clicked() {
                        self.ouvrir_selecteur(i);
                    }
                }
            }
        });

        // Étiquettes de parenthèses sous chaque nombre
        ui.horizontal(|ui| {
            for etiquette in &self.vue.etiquettes_parens {
                let texte = if etiquette.is_empty() { "·" } else { etiquette.as_str() };
                ui.add_sized([52.0, 18.0], egui::Label::new(egui::RichText::new(texte).monospace()));
                ui.add_sized([44.0, 18.0], egui::Label::new(""));
            }
        });

        if let Some(slot) = self.selecteur_slot {
            ui.horizontal(|ui| {
                ui.label(format!("Opérateur n°{} :", slot + 1));
                for op in Operateur::TOUS {
                    if ui.add_sized([40.0, 32.0], egui::Button::new(op.glyphe().to_string())).clicked() {
                        self.choisir_dans_selecteur(op);
                    }
                }
            });
        }
    }

    fn ui_resultat(&self, ui: &mut egui::Ui) {
        match &self.vue.dernier {
            DernierResultat::Aucun => {
                ui.label(" ");
            }
            DernierResultat::Valeur { resultat, correct } => {
                let couleur = if *correct {
                    egui::Color32::from_rgb(0x2e, 0x9d, 0x4f)
                } else {
                    ui.visuals().warn_fg_color
                };
                ui.colored_label(
                    couleur,
                    egui::RichText::new(format!("= {}", format_resultat(*resultat)))
                        .monospace()
                        .size(TAILLE_EXPRESSION),
                );
            }
            DernierResultat::Erreur(e) => {
                ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            }
        }
    }

    fn ui_commandes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for (op, touche) in Operateur::TOUS.into_iter().zip(["Q", "W", "E", "R"]) {
                let b = egui::Button::new(egui::RichText::new(op.glyphe().to_string()).size(20.0));
                if ui
                    .add_sized([44.0, 36.0], b)
                    .on_hover_text(format!("Touche {touche}"))
                    .clicked()
                {
                    self.placer_operateur(op);
                }
            }

            ui.separator();

            if ui
                .add_sized([72.0, 36.0], egui::Button::new("Valider"))
                .on_hover_text("Entrée")
                .clicked()
            {
                self.soumettre();
            }
            if ui
                .add_enabled_ui(self.vue.annulable, |ui| {
                    ui.add_sized([72.0, 36.0], egui::Button::new("Annuler"))
                })
                .inner
                .on_hover_text("Retour arrière")
                .clicked()
            {
                self.annuler();
            }
            if ui
                .add_sized([72.0, 36.0], egui::Button::new("Effacer"))
                .on_hover_text("Échap")
                .clicked()
            {
                self.effacer();
            }
            if ui
                .add_sized([96.0, 36.0], egui::Button::new("Réinitialiser"))
                .clicked()
            {
                self.demander_recommencer();
            }
        });
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        let tentatives = self.manche.historique();
        ui.label(format!("Historique ({}) :", tentatives.len()));
        if tentatives.is_empty() {
            return;
        }

        egui::Grid::new("historique_make10")
            .num_columns(4)
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                // plus récente en haut
                for t in tentatives.iter().rev() {
                    ui.monospace(t.probleme.to_string());
                    ui.monospace(&t.expression);
                    ui.monospace(format!("= {}", format_resultat(t.resultat)));
                    ui.label(if t.correct { "✔" } else { "✘" });
                    ui.end_row();
                }
            });
    }

    fn ui_confirmation(&mut self, ctx: &egui::Context) {
        let Some(c) = self.confirmation else {
            return;
        };
        let question = match c {
            Confirmation::Recommencer => "Recommencer la manche ?".to_string(),
            Confirmation::ChangerMode(m) => {
                format!("Passer à {} problèmes ? La manche en cours sera perdue.", m.nombre())
            }
        };

        egui::Window::new("Confirmation")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(question);
                ui.horizontal(|ui| {
                    if ui.button("Oui").clicked() {
                        self.confirmer();
                    }
                    if ui.button("Non").clicked() {
                        self.annuler_confirmation();
                    }
                });
            });
    }

    fn ui_fin(&mut self, ctx: &egui::Context) {
        if self.vue.etat != EtatManche::Terminee {
            return;
        }
        let Some(message) = self.message_fin() else {
            return;
        };

        egui::Window::new("Manche terminée")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut message.as_str())
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(4),
                );
                ui.horizontal(|ui| {
                    if ui.button("Copier").clicked() {
                        ui.ctx().copy_text(message.clone());
                        let maintenant = ui.input(|i| i.time);
                        self.montrer_toast("Copié !", maintenant);
                    }
                    if ui.button("Nouvelle manche").clicked() {
                        self.reinitialiser(self.manche.mode());
                    }
                });
            });
    }

    fn ui_toast(&mut self, ctx: &egui::Context) {
        let maintenant = ctx.input(|i| i.time);
        let Some(texte) = self.toast_actif(maintenant).map(str::to_owned) else {
            return;
        };

        egui::Area::new(egui::Id::new("toast_make10"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(texte);
                });
            });
        ctx.request_repaint();
    }
}
