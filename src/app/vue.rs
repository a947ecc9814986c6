// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Enter évalue (quand le champ a le focus)
// - Pavé numérique + opérateurs : insèrent dans l’entrée, “=” évalue
// - Panneau latéral : pile (plus ancien en haut) + historique numéroté
//
// La vue ne fait que LIRE la pile et l’historique.

use eframe::egui;

use super::etat::AppCalc;
use crate::console::AIDE;
use crate::noyau::format::format_valeur;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::console::TITRE);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                egui::CollapsingHeader::new("Aide")
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.monospace(AIDE);
                    });
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée (RPN) :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 5 5 +, 2 10 ^, 10 fib")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // lost_focus : egui retire le focus d’un singleline sur Enter.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Vide la pile", Action::ClearPile);
            self.bouton_action(ui, "DEL", "Efface le dernier jeton", Action::Backspace);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 30.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer();
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for op in ["+", "-", "*", "/", "^", "sqrt", "fib"] {
                self.bouton_mot(ui, op);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for c in ligne {
                        self.bouton_chiffre(ui, c);
                    }
                    ui.end_row();
                }

                self.bouton_chiffre(ui, "0");
                self.bouton_chiffre(ui, ".");
                // ␣ sépare deux nombres
                let resp = ui.add_sized([46.0, 28.0], egui::Button::new("␣"));
                if resp.clicked() {
                    self.inserer_chiffre(" ");
                }
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(self.resultat.as_str());
            });
    }

    /// Panneau latéral : pile puis historique.
    pub fn ui_pile(&mut self, ui: &mut egui::Ui) {
        ui.heading("Pile");
        let pile = self.calc().pile();
        if pile.is_empty() {
            ui.weak("(vide)");
        }
        for v in pile.valeurs() {
            ui.monospace(format_valeur(*v));
        }

        ui.separator();
        ui.heading("Historique");

        egui::ScrollArea::vertical()
            .id_salt("historique_scroll")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                let historique = self.calc().historique();
                if historique.is_empty() {
                    ui.weak("(aucun calcul)");
                }
                for (i, entree) in historique.entrees().iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.monospace(format!("{}: {}", i + 1, entree.expression()));
                        ui.strong(entree.resultat());
                    });
                }
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearPile => self.clear_pile(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_mot(&mut self, ui: &mut egui::Ui, mot: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(mot));
        if resp.clicked() {
            self.inserer_mot(mot);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(c));
        if resp.clicked() {
            self.inserer_chiffre(c);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearPile,
    Backspace,
}
