// src/lot.rs
//
// Fichier d’énoncés (une expression par ligne) + traitement en lot.
// Tout l’I/O vit ici : le noyau reste pur.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::noyau::format::{format_table, format_verdict};
use crate::noyau::{table_verite, ErreurNoyau, TableVerite};

/// Nom de fichier lu par défaut (bouton « Charger » de l’UI).
pub const FICHIER_DEFAUT: &str = "statement.txt";

#[derive(Debug, Error)]
pub enum ErreurLot {
    #[error("fichier introuvable: '{}'", .chemin.display())]
    Introuvable { chemin: PathBuf },

    #[error("lecture impossible de '{}': {source}", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Résultat d’un énoncé du lot : la table, ou l’erreur qui l’a fait ignorer.
#[derive(Clone, Debug)]
pub struct ResultatEnonce {
    pub enonce: String,
    pub resultat: Result<TableVerite, ErreurNoyau>,
}

/// Lit les énoncés : lignes rognées, mises en MAJUSCULES, lignes vides ignorées.
pub fn lire_enonces(chemin: &Path) -> Result<Vec<String>, ErreurLot> {
    let fichier = File::open(chemin).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ErreurLot::Introuvable {
            chemin: chemin.to_path_buf(),
        },
        _ => ErreurLot::Lecture {
            chemin: chemin.to_path_buf(),
            source: e,
        },
    })?;

    let enonces = lire_enonces_depuis(BufReader::new(fichier)).map_err(|e| ErreurLot::Lecture {
        chemin: chemin.to_path_buf(),
        source: e,
    })?;

    info!("{} énoncé(s) lu(s) depuis {}", enonces.len(), chemin.display());
    Ok(enonces)
}

pub fn lire_enonces_depuis(lecteur: impl BufRead) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for ligne in lecteur.lines() {
        let ligne = ligne?;
        let s = ligne.trim();
        if !s.is_empty() {
            out.push(s.to_uppercase());
        }
    }
    Ok(out)
}

/// Évalue chaque énoncé ; une erreur n’arrête pas le lot.
pub fn evaluer_lot(enonces: &[String]) -> Vec<ResultatEnonce> {
    enonces
        .iter()
        .map(|enonce| {
            let resultat = table_verite(enonce);
            if let Err(e) = &resultat {
                warn!("énoncé ignoré {enonce:?}: {e}");
            }
            ResultatEnonce {
                enonce: enonce.clone(),
                resultat,
            }
        })
        .collect()
}

/// Écrit un résultat en texte (table + verdict, ou message d’erreur).
pub fn ecrire_resultat(out: &mut impl Write, r: &ResultatEnonce) -> io::Result<()> {
    writeln!(out, "Énoncé : {}", r.enonce)?;
    match &r.resultat {
        Ok(table) => {
            writeln!(out, "Table de vérité :")?;
            write!(out, "{}", format_table(table))?;
            writeln!(out, "{}", format_verdict(table))?;
        }
        Err(e) => writeln!(out, "Erreur : {e}")?,
    }
    Ok(())
}
