//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du générateur (entrée, table, erreur, démarche, lot)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use crate::lot::{ResultatEnonce, FICHIER_DEFAUT};
use crate::noyau::{Demarche, TableVerite};

#[derive(Clone, Debug)]
pub struct AppTable {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub table: Option<TableVerite>,
    pub erreur: String, // message d’erreur (si tokenize/rpn/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- lot (fichier d’énoncés) ---
    pub chemin_lot: String,
    pub lot: Vec<ResultatEnonce>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppTable {
    fn default() -> Self {
        Self {
            entree: String::new(),
            table: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            chemin_lot: FICHIER_DEFAUT.to_string(),
            lot: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppTable {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + lot).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.lot.clear();
        self.chemin_lot = FICHIER_DEFAUT.to_string();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer table + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.table = None;
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : pas de résultat partiel, la table précédente disparaît aussi.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.table = None;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (table + démarche).
    pub fn set_resultats(&mut self, table: TableVerite, demarche: Demarche) {
        self.erreur.clear();
        self.table = Some(table);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_lot(&mut self, lot: Vec<ResultatEnonce>) {
        self.erreur.clear();
        self.lot = lot;
        self.focus_entree = true;
    }
}
