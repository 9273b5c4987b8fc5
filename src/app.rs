// src/app.rs
//
// Make 10 - module App (racine)
// -----------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppMake10 (pour main.rs: use crate::app::AppMake10;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Lire le clavier une fois par frame
//
// Clavier:
// - Q W E R     : + − × ÷ (premier emplacement libre)
// - 1..4 tenus  : deux chiffres tenus puis relâchés = bascule de la paire
// - Entrée      : valider
// - Retour      : annuler la dernière saisie
// - Échap       : effacer la saisie

pub mod etat;
pub mod vue;

pub use etat::AppMake10;

use std::time::Duration;

use eframe::egui;

use crate::noyau::Operateur;

fn chiffre(touche: egui::Key) -> Option<usize> {
    match touche {
        egui::Key::Num1 => Some(0),
        egui::Key::Num2 => Some(1),
        egui::Key::Num3 => Some(2),
        egui::Key::Num4 => Some(3),
        _ => None,
    }
}

fn operateur(touche: egui::Key) -> Option<Operateur> {
    match touche {
        egui::Key::Q => Some(Operateur::Plus),
        egui::Key::W => Some(Operateur::Moins),
        egui::Key::E => Some(Operateur::Fois),
        egui::Key::R => Some(Operateur::Div),
        _ => None,
    }
}

impl AppMake10 {
    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let touches: Vec<(egui::Key, bool)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Key {
                        key,
                        pressed,
                        repeat: false,
                        ..
                    } => Some((*key, *pressed)),
                    _ => None,
                })
                .collect()
        });

        for (touche, enfoncee) in touches {
            if let Some(i) = chiffre(touche) {
                if enfoncee {
                    self.chiffre_enfonce(i);
                } else {
                    self.chiffre_relache(i);
                }
                continue;
            }
            if !enfoncee {
                continue;
            }
            if let Some(op) = operateur(touche) {
                self.placer_operateur(op);
                continue;
            }
            match touche {
                egui::Key::Enter => self.soumettre(),
                egui::Key::Backspace => self.annuler(),
                egui::Key::Escape => self.effacer(),
                _ => {}
            }
        }
    }
}

impl eframe::App for AppMake10 {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Confirmation ouverte : le clavier ne joue pas.
        if self.confirmation.is_none() {
            self.lire_clavier(ctx);
        }
        self.rafraichir();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
        self.ui_fenetres(ctx);

        // Chrono : une frame par seconde suffit.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
