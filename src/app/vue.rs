// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Objectifs :
// - Même AppTable (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : boutons variables/opérateurs, focus redonné après clic (focus_entree)
// - Table de vérité dans une Grid, colonne finale mise en évidence
// - Natif seulement : lot depuis un fichier d’énoncés

use eframe::egui;

use super::etat::AppTable;
use crate::noyau::format::texte_booleen;
use crate::noyau::{ErreurNoyau, GenreErreur, TableVerite};

impl AppTable {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Table de vérité");
                ui.label("Variables : P, Q, R. Opérateurs : ~, ^, or, ->, <-> (ou NOT, AND, OR, IMPLIES, IFF)");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if let Some(table) = &self.table {
                    Self::ui_table(ui, "table_principale", table);
                }

                ui.add_space(8.0);
                self.ui_demarche(ui);

                #[cfg(not(target_arch = "wasm32"))]
                {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.ui_lot(ui);
                }
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Énoncé :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: P -> Q, ~(P ^ Q) <-> (~P or ~Q), P AND (Q OR R)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface table + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "P", "P", InsertKind::Word);
            self.bouton_insert(ui, "Q", "Q", InsertKind::Word);
            self.bouton_insert(ui, "R", "R", InsertKind::Word);
            self.bouton_insert(ui, "TRUE", "TRUE", InsertKind::Word);
            self.bouton_insert(ui, "FALSE", "FALSE", InsertKind::Word);

            ui.separator();

            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);
            self.bouton_insert(ui, "~", "~", InsertKind::Prefix);
            self.bouton_insert(ui, "^", "^", InsertKind::Op);
            self.bouton_insert(ui, "or", "or", InsertKind::Op);
            self.bouton_insert(ui, "->", "->", InsertKind::Op);
            self.bouton_insert(ui, "<->", "<->", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Grid : variables, sous-expressions, puis verdict sous la table.
    fn ui_table(ui: &mut egui::Ui, id: &str, table: &TableVerite) {
        let derniere = table.entetes.len().saturating_sub(1);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                egui::ScrollArea::horizontal().id_salt(id).show(ui, |ui| {
                    egui::Grid::new(id)
                        .striped(true)
                        .spacing([14.0, 4.0])
                        .show(ui, |ui| {
                            for entete in &table.entetes {
                                ui.label(egui::RichText::new(entete).monospace().strong());
                            }
                            ui.end_row();

                            for ligne in &table.lignes {
                                for (j, &b) in ligne.iter().enumerate() {
                                    let mut txt = egui::RichText::new(texte_booleen(b)).monospace();
                                    if j == derniere {
                                        txt = txt.strong();
                                    }
                                    if !b {
                                        txt = txt.weak();
                                    }
                                    ui.label(txt);
                                }
                                ui.end_row();
                            }
                        });
                });
            });

        ui.add_space(4.0);
        if table.tautologie {
            ui.label(egui::RichText::new("Tautologie : oui").strong());
        } else {
            ui.label("Tautologie : non");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn ui_lot(&mut self, ui: &mut egui::Ui) {
        ui.label("Fichier d’énoncés (une expression par ligne) :");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.chemin_lot)
                    .desired_width(260.0)
                    .id_source("chemin_lot_edit"),
            );
            if ui.button("Charger").clicked() {
                self.charger_lot();
            }
        });

        for (i, r) in self.lot.iter().enumerate() {
            ui.add_space(6.0);
            ui.push_id(i, |ui| {
                ui.monospace(format!("Énoncé : {}", r.enonce));
                match &r.resultat {
                    Ok(table) => Self::ui_table(ui, "table_lot", table),
                    Err(e) => {
                        ui.colored_label(ui.visuals().error_fg_color, message_erreur(e));
                    }
                }
            });
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn charger_lot(&mut self) {
        let chemin = std::path::PathBuf::from(self.chemin_lot.trim());
        match crate::lot::lire_enonces(&chemin) {
            Ok(enonces) if enonces.is_empty() => {
                self.lot.clear();
                self.erreur = format!("aucun énoncé dans '{}'", chemin.display());
            }
            Ok(enonces) => {
                let lot = crate::lot::evaluer_lot(&enonces);
                self.set_lot(lot);
            }
            Err(e) => {
                log::warn!("{e}");
                self.lot.clear();
                self.erreur = e.to_string();
            }
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
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
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }
        insere(&mut self.entree, to_insert, kind);
        self.focus_entree = true;
    }

    /// Construit la table via le noyau, puis dépose table/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match crate::noyau::table_verite_detaillee(s) {
            Ok((table, demarche)) => self.set_resultats(table, demarche),
            Err(e) => self.set_erreur(message_erreur(&e)),
        }
    }
}

fn message_erreur(e: &ErreurNoyau) -> String {
    let genre = match e.genre() {
        GenreErreur::Lex => "Erreur lexicale",
        GenreErreur::Syntaxe => "Erreur de syntaxe",
        GenreErreur::Eval => "Erreur d’évaluation",
        GenreErreur::AucuneVariable => "Rien à tabuler",
    };
    format!("{genre} : {e}")
}

/// Insertion avec espaces automatiques : opérateurs binaires entourés, le reste collé.
fn insere(entree: &mut String, to_insert: &str, kind: InsertKind) {
    match kind {
        InsertKind::CloseParen => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            entree.push_str(to_insert);
        }
        InsertKind::Op => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(to_insert);
            entree.push(' ');
        }
        InsertKind::Word | InsertKind::OpenParen | InsertKind::Prefix => {
            // espace si juste avant c’est une lettre ou ')'
            let last = entree.chars().last();
            if let Some(c) = last {
                if c.is_ascii_alphabetic() || c == ')' {
                    entree.push(' ');
                }
            }
            entree.push_str(to_insert);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Word,
    Prefix,
    Op,
    OpenParen,
    CloseParen,
}
