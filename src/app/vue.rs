// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Lot : une expression par ligne, rapport d’erreurs affiché (pas de fichier)

use eframe::egui;

use calculatrice_rpn::noyau::lot::{lot_demo, traiter_lot, EXPRESSIONS_DEMO};
use calculatrice_rpn::noyau::{eval_expression, DemarcheNoyau, RapportLot};

use super::etat::{AppCalc, Demarche, LIGNES_LOT_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_lot(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2 + 3 * 4, (2 + 3) * 4, 2 ^ 3 ^ 2, -5 + 8")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / opérateurs / DEL / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + borne d’exposant
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Exposant max :");
            let mut m = self.exposant_max;
            let resp = ui.add(
                egui::DragValue::new(&mut m)
                    .speed(100)
                    .range(0..=1_000_000_000),
            );
            if resp.changed() {
                self.set_exposant_max(m);
            }
        });

        ui.add_space(8.0);

        // Opérateurs + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            for op in ["+", "-", "*", "/", "%", "^"] {
                self.bouton_insert(ui, op, InsertKind::Op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Retire le dernier symbole (et les espaces qui l’entourent).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(
                    ui,
                    "Parenthèses",
                    "demarche_equilibre",
                    &self.demarche.equilibre,
                );
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_lot(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Lot (une expression par ligne)")
            .default_open(false)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.lot.entree)
                        .desired_width(ui.available_width())
                        .desired_rows(6)
                        .id_source("lot_edit")
                        .code_editor(),
                );

                ui.horizontal(|ui| {
                    if ui.button("Traiter").clicked() {
                        self.eval_lot();
                    }
                    if ui
                        .button("Démo")
                        .on_hover_text("Charge et traite les expressions de démonstration")
                        .clicked()
                    {
                        self.lot.entree = EXPRESSIONS_DEMO.join("\n");
                        let r = lot_demo(&self.limites());
                        self.deposer_lot(&r);
                    }
                });

                if !self.lot.resume.is_empty() {
                    Self::champ_demarche(ui, "Résumé", "lot_resume", &self.lot.resume);
                    Self::champ_demarche(ui, "Détail", "lot_detail", &self.lot.detail);
                    Self::champ_demarche(
                        ui,
                        "Rapport d’erreurs",
                        "lot_rapport",
                        &self.lot.rapport,
                    );
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(symbole);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if let Some(c) = last {
                    if c.is_ascii_digit() || c == ')' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(symbole);
            }
            InsertKind::Op => {
                // le moins unaire dépend du caractère brut précédent :
                // on colle l’opérateur pour ne pas le rendre binaire par accident
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                let apres_valeur = self
                    .entree
                    .chars()
                    .last()
                    .is_some_and(|c| c.is_ascii_digit() || c == ')');
                if apres_valeur {
                    self.entree.push(' ');
                    self.entree.push_str(symbole);
                    self.entree.push(' ');
                } else {
                    self.entree.push_str(symbole);
                }
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(symbole);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        if self.entree.trim().is_empty() {
            self.set_erreur("Entrée vide", Demarche::default());
            return;
        }

        // texte brut : un espace devant '-' change son sens, comme dans un lot
        let (res, d_noyau) = eval_expression(&self.entree, &self.limites());
        let d_ui = demarche_ui(d_noyau);

        match res {
            Ok(v) => self.set_resultat(v, d_ui),
            Err(e) => self.set_erreur(e.to_string(), d_ui),
        }
    }

    /// Traite le lot saisi (lignes au-delà de LIGNES_LOT_MAX ignorées).
    fn eval_lot(&mut self) {
        let r = traiter_lot(
            self.lot.entree.lines().take(LIGNES_LOT_MAX),
            &self.limites(),
        );
        self.deposer_lot(&r);
    }

    fn deposer_lot(&mut self, r: &RapportLot) {
        let rapport = if r.erreurs() == 0 {
            String::from("aucune erreur")
        } else {
            r.format_rapport_erreurs("saisie")
        };
        self.set_lot(r.format_detail(), r.format_resume(), rapport);
    }
}

fn demarche_ui(d: DemarcheNoyau) -> Demarche {
    Demarche {
        equilibre: if d.equilibre { "équilibrées" } else { "non équilibrées" }.to_string(),
        rpn: d.rpn.unwrap_or_else(|| "indisponible".to_string()),
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
