// src/noyau/erreur.rs
//
// Erreurs du noyau : une seule enum, classée en quatre genres
// (lexical, syntaxe, évaluation, aucune variable).

use thiserror::Error;

use super::operateurs::Operateur;

/// Genre d’erreur, pour que l’appelant décide quoi faire (ignorer, redemander, signaler).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Lex,
    Syntaxe,
    Eval,
    AucuneVariable,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Caractère qui ne correspond à aucune classe de jetons.
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    Lexicale { caractere: char, position: usize },

    /// `)` sans `(` correspondante.
    #[error("parenthèse fermante sans ouvrante (jeton n°{indice})")]
    ParentheseFermanteOrpheline { indice: usize },

    /// `(` restée sur la pile à la fin de la conversion.
    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    /// Opérateur sans assez d’opérandes sur la pile.
    #[error("opérande manquant pour {operateur}")]
    OperandeManquant { operateur: Operateur },

    /// La pile finale ne contient pas exactement une valeur.
    #[error("expression invalide: {restants} valeur(s) sur la pile au lieu d’une")]
    PileInvalide { restants: usize },

    /// Variable absente de l’affectation.
    #[error("variable sans valeur: {nom}")]
    VariableInconnue { nom: &'static str },

    #[error("parenthèse inattendue en RPN")]
    ParentheseEnRpn,

    /// Condition signalable (pas un plantage) : ni P, ni Q, ni R.
    #[error("aucune variable valide (P, Q, R) dans l’énoncé")]
    AucuneVariable,
}

impl ErreurNoyau {
    pub fn genre(&self) -> GenreErreur {
        use ErreurNoyau::*;

        match self {
            Lexicale { .. } => GenreErreur::Lex,
            ParentheseFermanteOrpheline { .. } | ParentheseNonFermee => GenreErreur::Syntaxe,
            OperandeManquant { .. }
            | PileInvalide { .. }
            | VariableInconnue { .. }
            | ParentheseEnRpn => GenreErreur::Eval,
            AucuneVariable => GenreErreur::AucuneVariable,
        }
    }
}
