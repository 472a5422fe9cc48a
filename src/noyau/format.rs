// src/noyau/format.rs
//
// Rendu TEXTE d’une table (mode lot / console). Pur : retourne une String.
// - largeur de colonne = plus long en-tête
// - cellules centrées, séparées par " | "
// - filet ─ au-dessus et au-dessous des en-têtes

use super::table::TableVerite;

const SEPARATEUR: &str = " | ";

pub fn texte_booleen(b: bool) -> &'static str {
    if b {
        "TRUE"
    } else {
        "FALSE"
    }
}

fn ligne_centree<'a>(cellules: impl Iterator<Item = &'a str>, largeur: usize) -> String {
    cellules
        .map(|c| format!("{c:^largeur$}"))
        .collect::<Vec<_>>()
        .join(SEPARATEUR)
}

/// Table complète (filets + en-têtes + lignes), sans verdict.
pub fn format_table(table: &TableVerite) -> String {
    let n = table.entetes.len();
    let largeur = table
        .entetes
        .iter()
        .map(|e| e.chars().count())
        .max()
        .unwrap_or(0);
    let filet = "─".repeat(largeur * n + SEPARATEUR.len() * n.saturating_sub(1));

    let mut out = String::new();
    out.push_str(&filet);
    out.push('\n');
    out.push_str(&ligne_centree(
        table.entetes.iter().map(String::as_str),
        largeur,
    ));
    out.push('\n');
    out.push_str(&filet);
    out.push('\n');

    for ligne in &table.lignes {
        out.push_str(&ligne_centree(
            ligne.iter().map(|&b| texte_booleen(b)),
            largeur,
        ));
        out.push('\n');
    }
    out
}

pub fn format_verdict(table: &TableVerite) -> String {
    if table.tautologie {
        "Tautologie : oui".to_string()
    } else {
        "Tautologie : non".to_string()
    }
}
