// src/noyau/table.rs
//
// Table de vérité : tokenize -> variables présentes -> RPN (une fois)
//   -> 2^k affectations -> évaluation par ligne -> colonnes + verdict.

use std::collections::HashMap;

use log::debug;

use super::erreur::ErreurNoyau;
use super::eval::{eval_rpn, Affectation};
use super::jetons::{format_tokens, tokenize, Tok};
use super::operateurs::Variable;
use super::rpn::to_rpn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableVerite {
    /// Variables présentes, dans l’ordre P < Q < R.
    pub variables: Vec<Variable>,
    /// Noms des variables, puis libellés des sous-expressions (ordre de découverte).
    pub entetes: Vec<String>,
    /// Une ligne par affectation, alignée sur `entetes`.
    pub lignes: Vec<Vec<bool>>,
    /// Valeur finale de l’expression pour chaque ligne.
    pub finales: Vec<bool>,
    pub tautologie: bool,
}

/// Textes intermédiaires pour le panneau « Démarche ».
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : construit la table de vérité d’une expression.
pub fn table_verite(expression: &str) -> Result<TableVerite, ErreurNoyau> {
    table_verite_detaillee(expression).map(|(table, _)| table)
}

/// Comme `table_verite`, avec en plus jetons et RPN en texte.
pub fn table_verite_detaillee(expression: &str) -> Result<(TableVerite, Demarche), ErreurNoyau> {
    // 1) Jetons + variables présentes
    let jetons = tokenize(expression)?;
    let variables = variables_presentes(&jetons);
    if variables.is_empty() {
        return Err(ErreurNoyau::AucuneVariable);
    }

    // 2) RPN : ne dépend que des jetons
    let rpn = to_rpn(&jetons)?;

    // 3) Affectations, dernière variable la plus rapide
    let affectations = affectations(&variables);

    // 4) Première ligne : découverte des colonnes (dédoublonnées, premier vu)
    let (_, trace0) = eval_rpn(&rpn, &affectations[0])?;
    let mut sous_expr: Vec<String> = Vec::new();
    for e in trace0.reductions() {
        if !sous_expr.contains(&e.libelle) {
            sous_expr.push(e.libelle.clone());
        }
    }

    // 5) Toutes les lignes + verdict
    let mut lignes = Vec::with_capacity(affectations.len());
    let mut finales = Vec::with_capacity(affectations.len());
    let mut tautologie = true;

    for a in &affectations {
        let (finale, trace) = eval_rpn(&rpn, a)?;

        // même libellé vu deux fois : la dernière valeur l’emporte
        let valeurs: HashMap<&str, bool> = trace
            .reductions()
            .map(|e| (e.libelle.as_str(), e.valeur))
            .collect();

        let mut ligne: Vec<bool> = variables
            .iter()
            .map(|&v| a.valeur(v).unwrap_or(false))
            .collect();
        ligne.extend(
            sous_expr
                .iter()
                .map(|s| valeurs.get(s.as_str()).copied().unwrap_or(false)),
        );

        if !finale {
            tautologie = false;
        }
        lignes.push(ligne);
        finales.push(finale);
    }

    let mut entetes: Vec<String> = variables.iter().map(|v| v.nom().to_string()).collect();
    entetes.extend(sous_expr);

    debug!(
        "table: {} variable(s), {} ligne(s), {} colonne(s), tautologie={tautologie}",
        variables.len(),
        lignes.len(),
        entetes.len()
    );

    let demarche = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };

    Ok((
        TableVerite {
            variables,
            entetes,
            lignes,
            finales,
            tautologie,
        },
        demarche,
    ))
}

/// Variables distinctes référencées, triées P < Q < R.
pub fn variables_presentes(jetons: &[Tok]) -> Vec<Variable> {
    Variable::TOUTES
        .into_iter()
        .filter(|v| jetons.contains(&Tok::Var(*v)))
        .collect()
}

/// Les 2^k affectations, de tout-faux à tout-vrai (compteur binaire, dernière variable = bit de poids faible).
pub fn affectations(variables: &[Variable]) -> Vec<Affectation> {
    let k = variables.len();
    (0..1usize << k)
        .map(|n| {
            variables
                .iter()
                .enumerate()
                .map(|(j, &v)| (v, (n >> (k - 1 - j)) & 1 == 1))
                .collect::<Affectation>()
        })
        .collect()
}
