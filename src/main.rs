// src/main.rs
//
// Table de vérité : point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions,
//   ou mode lot sans fenêtre (--fichier / --expression)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppTable` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod lot;
mod noyau;

use app::AppTable;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Générateur de tables de vérité";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::process::ExitCode;

    use clap::Parser;
    use log::error;

    use super::{egui, AppTable, TITRE_APP};
    use crate::lot::{ecrire_resultat, evaluer_lot, lire_enonces, ResultatEnonce};
    use crate::noyau::table_verite;

    /// Sans argument : interface graphique. Avec --fichier ou --expression : sortie texte.
    #[derive(Parser, Debug)]
    #[command(name = "table_verite", version, about = TITRE_APP)]
    pub struct Arguments {
        /// Fichier d’énoncés (une expression par ligne) à évaluer sans fenêtre
        #[arg(short, long, value_name = "CHEMIN")]
        pub fichier: Option<PathBuf>,

        /// Expression unique à évaluer sans fenêtre
        #[arg(short, long, value_name = "EXPR", conflicts_with = "fichier")]
        pub expression: Option<String>,
    }

    pub fn main() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

        let args = Arguments::parse();

        if let Some(chemin) = &args.fichier {
            return lot_fichier(chemin);
        }
        if let Some(expression) = &args.expression {
            return sortie(&[resultat_expression(expression)]);
        }

        match interface() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("interface graphique: {e}");
                ExitCode::FAILURE
            }
        }
    }

    /// Même normalisation qu’une ligne du fichier d’énoncés.
    fn resultat_expression(expression: &str) -> ResultatEnonce {
        let enonce = expression.trim().to_uppercase();
        let resultat = table_verite(&enonce);
        ResultatEnonce { enonce, resultat }
    }

    fn lot_fichier(chemin: &Path) -> ExitCode {
        match lire_enonces(chemin) {
            Ok(enonces) => sortie(&evaluer_lot(&enonces)),
            Err(e) => {
                eprintln!("Erreur : {e}");
                ExitCode::FAILURE
            }
        }
    }

    /// Écrit les résultats sur stdout ; une erreur d’énoncé n’est PAS un échec du lot.
    fn sortie(resultats: &[ResultatEnonce]) -> ExitCode {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let ecrit = resultats.iter().try_for_each(|r| {
            writeln!(out, "{}", "═".repeat(60))?;
            ecrire_resultat(&mut out, r)
        });

        match ecrit.and_then(|()| out.flush()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("écriture stdout: {e}");
                ExitCode::FAILURE
            }
        }
    }

    fn interface() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([640.0, 740.0])
                .with_min_inner_size([420.0, 520.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppTable>::default())),
        )
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppTable, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppTable>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
